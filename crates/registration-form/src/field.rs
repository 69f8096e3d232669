//! Form field identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One input of the registration form.
///
/// Ordering follows the order in which the form lays the inputs out, so
/// collections keyed by [`Field`] iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Full name.
    Name,
    /// Email address.
    Email,
    /// Phone number as typed.
    Phone,
    /// Gender selector.
    Gender,
    /// Password.
    Password,
    /// Password confirmation.
    Confirm,
}

impl Field {
    /// Every field, in layout order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Gender,
        Self::Password,
        Self::Confirm,
    ];

    /// Input name used by the form markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Gender => "gender",
            Self::Password => "password",
            Self::Confirm => "confirm",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_field_once() {
        let mut names: Vec<_> = Field::ALL.iter().map(|field| field.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Field::ALL.len());
    }

    #[test]
    fn ordering_matches_layout() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }
}
