//! Data model for pet records.
//!
//! Pet records are plain value objects exchanged verbatim with the service:
//! the client performs no validation beyond JSON (de)serialization. Field
//! names follow the service's wire format (`photoUrls` is camelCase on the
//! wire, `status` is a lowercase string).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A pet record as exchanged with the service.
///
/// `name` and `photo_urls` default to empty when absent from a response;
/// the demo service's shared inventory contains records missing either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Caller-chosen identifier. The service does not guarantee uniqueness.
    pub id: i64,

    /// Display name. Length and character set are unregulated.
    #[serde(default)]
    pub name: String,

    /// Photo URLs, possibly empty.
    #[serde(rename = "photoUrls", default)]
    pub photo_urls: Vec<String>,

    /// Lifecycle status.
    pub status: PetStatus,
}

impl Pet {
    /// Creates a pet with the given id and name, no photos, status `available`.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            photo_urls: Vec::new(),
            status: PetStatus::Available,
        }
    }
}

/// Lifecycle status of a pet record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    /// Listed for sale.
    Available,
    /// Sale in progress.
    Pending,
    /// No longer for sale.
    Sold,
}

impl PetStatus {
    /// All statuses, in the order the service documents them.
    pub const ALL: [PetStatus; 3] = [PetStatus::Available, PetStatus::Pending, PetStatus::Sold];

    /// The wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(PetStatus::Available),
            "pending" => Ok(PetStatus::Pending),
            "sold" => Ok(PetStatus::Sold),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized status string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown pet status: {0:?}")]
pub struct UnknownStatus(pub String);
