//! Form state derived from validation passes.
//!
//! [`FormState`] keeps the messages currently displayed under each input.
//! Every submit re-validates the whole form and reports which inputs need
//! their message redrawn, so a rendering layer only touches those.

use tracing::{debug, info};

use crate::error::FieldErrors;
use crate::field::Field;
use crate::record::{RawFormFields, RegistrationRecord};
use crate::validate::validate;

/// Receives each registration that passes validation.
pub trait RegistrationSink {
    /// Consume an accepted registration.
    fn accept(&self, record: &RegistrationRecord);
}

/// Sink that logs accepted registrations as `tracing` events.
///
/// The password is never logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RegistrationSink for TracingSink {
    fn accept(&self, record: &RegistrationRecord) {
        info!(
            name = record.name(),
            email = record.email(),
            phone = record.phone(),
            gender = %record.gender(),
            "registration submitted"
        );
    }
}

/// A change to the message shown under one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Input whose message changed.
    pub field: Field,
    /// Message to show now; `None` clears it.
    pub message: Option<String>,
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The accepted record, when validation passed.
    pub record: Option<RegistrationRecord>,
    /// Inputs whose displayed message changed, in layout order.
    pub updates: Vec<FieldUpdate>,
}

impl Submission {
    /// Returns `true` when the submit was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.record.is_some()
    }
}

/// Local state of the registration form.
#[derive(Debug, Default)]
pub struct FormState<S = TracingSink> {
    errors: FieldErrors,
    sink: S,
}

impl FormState {
    /// Form with no messages, logging accepted records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: RegistrationSink> FormState<S> {
    /// Form with no messages, handing accepted records to `sink`.
    pub fn with_sink(sink: S) -> Self {
        Self {
            errors: FieldErrors::default(),
            sink,
        }
    }

    /// Validates `input` and updates the displayed messages.
    ///
    /// An accepted record is passed to the sink before returning and every
    /// message is cleared.
    pub fn submit(&mut self, input: &RawFormFields) -> Submission {
        let result = validate(input);
        let next = match &result {
            Ok(_) => FieldErrors::default(),
            Err(errors) => errors.clone(),
        };

        let updates = changed_fields(&self.errors, &next);
        self.errors = next;
        debug!(
            accepted = result.is_ok(),
            failing = self.errors.len(),
            changed = updates.len(),
            "registration form validated"
        );

        let record = result.ok();
        if let Some(accepted) = &record {
            self.sink.accept(accepted);
        }
        Submission { record, updates }
    }

    /// Message currently shown under `field`.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<String> {
        self.errors.message(field)
    }

    /// Errors from the latest submit.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The sink accepted records are handed to.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

fn changed_fields(previous: &FieldErrors, next: &FieldErrors) -> Vec<FieldUpdate> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            let message = next.message(field);
            (previous.message(field) != message).then_some(FieldUpdate { field, message })
        })
        .collect()
}
