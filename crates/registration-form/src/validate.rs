//! Single validation entry point for the registration form.

use crate::error::FieldErrors;
use crate::record::{RawFormFields, RegistrationRecord};
use crate::rules::{
    validate_confirmation, validate_email, validate_gender, validate_name, validate_password,
    validate_phone,
};

/// Validates raw form input into a registration record.
///
/// Every field rule runs, regardless of whether an earlier one failed, and
/// then the confirmation rule runs. A mismatch is reported against the
/// confirm field, even when the password itself also failed its own rule.
///
/// # Errors
///
/// Returns [`FieldErrors`] holding one message per failing field.
///
/// # Examples
///
/// ```
/// use registration_form::{Field, RawFormFields, validate};
///
/// let input = RawFormFields {
///     name: "John Doe".to_owned(),
///     email: "john@example.com".to_owned(),
///     phone: "01712345678".to_owned(),
///     gender: "male".to_owned(),
///     password: "secret1".to_owned(),
///     confirm: "secret1".to_owned(),
/// };
/// let record = validate(&input).expect("input is valid");
/// assert_eq!(record.phone(), "+8801712345678");
///
/// let errors = validate(&RawFormFields::default()).expect_err("empty input fails");
/// assert!(errors.contains(Field::Name));
/// assert!(!errors.contains(Field::Confirm));
/// ```
pub fn validate(input: &RawFormFields) -> Result<RegistrationRecord, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = errors.check(validate_name(&input.name));
    let email = errors.check(validate_email(&input.email));
    let phone = errors.check(validate_phone(&input.phone));
    let gender = errors.check(validate_gender(&input.gender));
    let password = errors.check(validate_password(&input.password));
    errors.check(validate_confirmation(&input.password, &input.confirm));

    match (name, email, phone, gender, password) {
        (Some(name), Some(email), Some(phone), Some(gender), Some(password))
            if errors.is_empty() =>
        {
            Ok(RegistrationRecord::new(name, email, phone, gender, password))
        }
        _ => Err(errors),
    }
}
