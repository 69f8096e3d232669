//! Raw form input and the validated registration record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Field values exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFormFields {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number, free text.
    pub phone: String,
    /// Selected gender option value.
    pub gender: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm: String,
}

/// Gender accepted by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// `male`
    Male,
    /// `female`
    Female,
}

impl Gender {
    /// Option value for this gender.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(FieldError::UnsupportedGender),
        }
    }
}

/// An option presented by the gender selector.
///
/// The selector offers [`GenderOption::Other`], which [`Gender`] does not
/// accept. Submitting it fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderOption {
    /// Female.
    Female,
    /// Male.
    Male,
    /// Other.
    Other,
}

impl GenderOption {
    /// Options in the order the selector presents them.
    pub const OFFERED: [Self; 3] = [Self::Female, Self::Male, Self::Other];

    /// Submitted value.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
        }
    }

    /// Visible label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Other => "Other",
        }
    }
}

/// A registration that passed every field rule and the confirmation rule.
///
/// ## Invariants
/// - `name` is at least [`crate::NAME_MIN`] UTF-16 code units long.
/// - `email` is syntactically valid.
/// - `password` is at least [`crate::PASSWORD_MIN`] UTF-16 code units long and equals
///   the confirmation it was submitted with.
/// - `phone` is canonical: it starts with `+` and contains `88`.
///
/// Secrets are left out of both `Debug` and serialised output.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    name: String,
    email: String,
    phone: String,
    gender: Gender,
    #[serde(skip)]
    password: String,
}

impl RegistrationRecord {
    pub(crate) const fn new(
        name: String,
        email: String,
        phone: String,
        gender: Gender,
        password: String,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            gender,
            password,
        }
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Canonical phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Confirmation; always equal to [`Self::password`].
    #[must_use]
    pub fn confirm(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("gender", &self.gender)
            .field("password", &"<redacted>")
            .finish()
    }
}
