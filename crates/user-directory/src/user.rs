//! User records served by the remote directory.
//!
//! The directory owns these records; this crate only reads them. Every field
//! is text. The directory serves `id` as a JSON number, so decoding accepts
//! an integer or a string and keeps its textual form.

use std::fmt;

use serde::de::{self, Deserializer, Error as _, Visitor};
use serde::{Deserialize, Serialize};

/// One user from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Directory identifier.
    #[serde(deserialize_with = "id_as_text")]
    pub id: String,
    /// Full name.
    pub name: String,
    /// Handle.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: Address,
    /// Phone number.
    pub phone: String,
    /// Website.
    pub website: String,
    /// Employer.
    pub company: Company,
}

/// Postal address of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street.
    pub street: String,
    /// Suite or apartment.
    pub suite: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zipcode: String,
    /// Coordinates.
    pub geo: Geo,
}

/// Coordinates, kept as the directory's decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    /// Latitude.
    pub lat: String,
    /// Longitude.
    pub lng: String,
}

/// Employer of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Slogan.
    pub catch_phrase: String,
    /// Business line.
    pub bs: String,
}

fn id_as_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("an integer or a string")
        }

        fn visit_i64<E: de::Error>(self, id: i64) -> Result<String, E> {
            Ok(id.to_string())
        }

        fn visit_u64<E: de::Error>(self, id: u64) -> Result<String, E> {
            Ok(id.to_string())
        }

        fn visit_str<E: de::Error>(self, id: &str) -> Result<String, E> {
            Ok(id.to_owned())
        }

        fn visit_string<E: de::Error>(self, id: String) -> Result<String, E> {
            Ok(id)
        }
    }

    deserializer
        .deserialize_any(IdVisitor)
        .map_err(|error| D::Error::custom(format!("id must be an integer or a string: {error}")))
}
