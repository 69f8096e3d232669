//! `register` command: one submit of the registration form.

use std::io::Write;

use color_eyre::eyre::Result;
use registration_form::{FormState, RawFormFields, RegistrationSink};

/// Submits `fields` once and renders the outcome to `out`.
///
/// An accepted registration is written as JSON. A rejected one renders one
/// `field: message` line per failing input, in layout order.
///
/// Returns whether the registration was accepted.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn run<S: RegistrationSink>(
    form: &mut FormState<S>,
    fields: &RawFormFields,
    out: &mut impl Write,
) -> Result<bool> {
    let submission = form.submit(fields);
    match &submission.record {
        Some(record) => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
        None => {
            for (field, error) in form.errors() {
                writeln!(out, "{field}: {error}")?;
            }
        }
    }
    Ok(submission.is_accepted())
}
