//! Registration form validation.
//!
//! This crate validates the raw input of a registration form and derives the
//! per-field error messages a rendering layer shows. It does no rendering and
//! no network submission; accepted registrations are handed to a
//! [`RegistrationSink`].
//!
//! # Overview
//!
//! - [`validate`] runs every field rule, then the password confirmation
//!   rule, and returns either a [`RegistrationRecord`] or [`FieldErrors`]
//! - Phone numbers are canonicalised to carry the `88` country code
//! - [`FormState`] tracks the displayed messages across submits and reports
//!   which inputs changed
//!
//! # Example
//!
//! ```
//! use registration_form::{Field, FormState, RawFormFields};
//!
//! let mut form = FormState::new();
//! let mut input = RawFormFields {
//!     name: "John Doe".to_owned(),
//!     email: "john@example.com".to_owned(),
//!     phone: "1712345678".to_owned(),
//!     gender: "other".to_owned(),
//!     password: "secret1".to_owned(),
//!     confirm: "secret1".to_owned(),
//! };
//!
//! let rejected = form.submit(&input);
//! assert!(!rejected.is_accepted());
//! assert_eq!(
//!     form.message_for(Field::Gender).as_deref(),
//!     Some("You must select either Male or Female!")
//! );
//!
//! input.gender = "female".to_owned();
//! let accepted = form.submit(&input);
//! assert_eq!(
//!     accepted.record.as_ref().map(|record| record.phone()),
//!     Some("+881712345678")
//! );
//! ```

mod error;
mod field;
mod form;
mod record;
mod rules;
mod validate;

pub use error::{FieldError, FieldErrors};
pub use field::Field;
pub use form::{FieldUpdate, FormState, RegistrationSink, Submission, TracingSink};
pub use record::{Gender, GenderOption, RawFormFields, RegistrationRecord};
pub use rules::{
    NAME_MIN, PASSWORD_MIN, PHONE_COUNTRY_CODE, PHONE_MIN, canonical_phone, validate_confirmation,
    validate_email, validate_gender, validate_name, validate_password, validate_phone,
};
pub use validate::validate;
