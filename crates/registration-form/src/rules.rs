//! Per-field validation rules.
//!
//! Every rule is a pure function from the raw text of one input to either the
//! validated value or the [`FieldError`] shown under that input. Lengths are
//! counted in UTF-16 code units, so a character outside the Basic
//! Multilingual Plane counts twice. The input is not trimmed.
//!
//! # Rules
//!
//! - Name: length at least [`NAME_MIN`]
//! - Email: syntactically valid address
//! - Gender: exactly `male` or `female`
//! - Password: length at least [`PASSWORD_MIN`]
//! - Phone: length at least [`PHONE_MIN`], then canonicalised
//! - Confirmation: equal to the password

use std::sync::OnceLock;

use regex::Regex;

use crate::error::FieldError;
use crate::record::Gender;

/// Minimum length of a name.
pub const NAME_MIN: usize = 4;

/// Minimum length of a password.
pub const PASSWORD_MIN: usize = 6;

/// Minimum length of a raw phone number.
pub const PHONE_MIN: usize = 10;

/// Country calling code every canonical phone number carries.
pub const PHONE_COUNTRY_CODE: &str = "88";

/// Length of `raw` in UTF-16 code units.
fn text_length(raw: &str) -> usize {
    raw.encode_utf16().count()
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Leading and doubled dots are rejected separately; the regex crate has no lookaround.
        let pattern = r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validates a name.
///
/// # Errors
///
/// Returns [`FieldError::NameTooShort`] when `raw` is shorter than
/// [`NAME_MIN`] UTF-16 code units.
///
/// # Examples
///
/// ```
/// use registration_form::validate_name;
///
/// assert!(validate_name("John Doe").is_ok());
/// assert!(validate_name("Jon").is_err());
/// ```
pub fn validate_name(raw: &str) -> Result<String, FieldError> {
    if text_length(raw) < NAME_MIN {
        return Err(FieldError::NameTooShort { min: NAME_MIN });
    }
    Ok(raw.to_owned())
}

/// Validates an email address.
///
/// # Errors
///
/// Returns [`FieldError::InvalidEmail`] when `raw` is not a valid address.
///
/// # Examples
///
/// ```
/// use registration_form::validate_email;
///
/// assert!(validate_email("john@example.com").is_ok());
/// assert!(validate_email("john@example").is_err());
/// ```
pub fn validate_email(raw: &str) -> Result<String, FieldError> {
    if raw.starts_with('.') || raw.contains("..") || !email_regex().is_match(raw) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(raw.to_owned())
}

/// Validates the selected gender.
///
/// # Errors
///
/// Returns [`FieldError::UnsupportedGender`] for anything other than `male`
/// or `female`, including the offered `other` option.
pub fn validate_gender(raw: &str) -> Result<Gender, FieldError> {
    raw.parse()
}

/// Validates a password.
///
/// # Errors
///
/// Returns [`FieldError::PasswordTooShort`] when `raw` is shorter than
/// [`PASSWORD_MIN`] UTF-16 code units.
pub fn validate_password(raw: &str) -> Result<String, FieldError> {
    if text_length(raw) < PASSWORD_MIN {
        return Err(FieldError::PasswordTooShort { min: PASSWORD_MIN });
    }
    Ok(raw.to_owned())
}

/// Validates a phone number and returns its canonical form.
///
/// # Errors
///
/// Returns [`FieldError::PhoneTooShort`] when `raw` is shorter than
/// [`PHONE_MIN`] UTF-16 code units. No transformation happens in that case.
///
/// # Examples
///
/// ```
/// use registration_form::validate_phone;
///
/// assert_eq!(validate_phone("1712345678").as_deref(), Ok("+881712345678"));
/// assert!(validate_phone("12345").is_err());
/// ```
pub fn validate_phone(raw: &str) -> Result<String, FieldError> {
    if text_length(raw) < PHONE_MIN {
        return Err(FieldError::PhoneTooShort { min: PHONE_MIN });
    }
    Ok(canonical_phone(raw))
}

/// Canonicalises a phone number that already passed its length rule.
///
/// A number that already contains [`PHONE_COUNTRY_CODE`] anywhere gains a
/// leading `+`; any other number gains `+88`.
///
/// # Examples
///
/// ```
/// use registration_form::canonical_phone;
///
/// assert_eq!(canonical_phone("8801712345678"), "+8801712345678");
/// assert_eq!(canonical_phone("1712345678"), "+881712345678");
/// ```
#[must_use]
pub fn canonical_phone(raw: &str) -> String {
    if raw.contains(PHONE_COUNTRY_CODE) {
        format!("+{raw}")
    } else {
        format!("+{PHONE_COUNTRY_CODE}{raw}")
    }
}

/// Checks that the confirmation equals the password.
///
/// # Errors
///
/// Returns [`FieldError::PasswordMismatch`], which belongs to the confirm
/// field, when the two differ.
pub fn validate_confirmation(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password != confirm {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}
