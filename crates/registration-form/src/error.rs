//! Error types for registration form validation.
//!
//! Each unmet constraint is a [`FieldError`] whose `Display` text is the
//! message rendered under the offending input. A failed validation pass
//! collects them into [`FieldErrors`], keyed by the field they belong to.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::field::Field;

/// A single unmet field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The name is shorter than the minimum length.
    #[error("Name should contain at least {min} characters")]
    NameTooShort {
        /// Minimum number of characters.
        min: usize,
    },

    /// The email address is not syntactically valid.
    #[error("Invalid email")]
    InvalidEmail,

    /// The gender is neither `male` nor `female`.
    #[error("You must select either Male or Female!")]
    UnsupportedGender,

    /// The password is shorter than the minimum length.
    #[error("Password should be at least {min} characters")]
    PasswordTooShort {
        /// Minimum number of characters.
        min: usize,
    },

    /// The phone number is shorter than the minimum length.
    #[error("Use valid phone number")]
    PhoneTooShort {
        /// Minimum number of characters.
        min: usize,
    },

    /// The confirmation does not equal the password.
    #[error("Passwords don't match")]
    PasswordMismatch,
}

impl FieldError {
    /// Field the error is displayed against.
    ///
    /// A mismatched confirmation belongs to [`Field::Confirm`], never to
    /// [`Field::Password`].
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::NameTooShort { .. } => Field::Name,
            Self::InvalidEmail => Field::Email,
            Self::UnsupportedGender => Field::Gender,
            Self::PasswordTooShort { .. } => Field::Password,
            Self::PhoneTooShort { .. } => Field::Phone,
            Self::PasswordMismatch => Field::Confirm,
        }
    }
}

/// Errors from one validation pass, at most one per field.
///
/// Fields that passed are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    /// Records an error against the field it belongs to.
    ///
    /// A later error for the same field replaces the earlier one.
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    /// Unwraps a rule result, recording the error if there is one.
    pub(crate) fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.insert(error);
                None
            }
        }
    }

    /// Error recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message to display for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Returns `true` when `field` failed.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in layout order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Failing fields and their errors in layout order.
    pub fn iter(&self) -> btree_map::Iter<'_, Field, FieldError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<FieldError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::default();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Serialises as `{"field": "message"}`.
impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field, &error.to_string())?;
        }
        map.end()
    }
}
