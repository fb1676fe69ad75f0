//! Circular domain model.
//!
//! # Responsibility
//! - Define the canonical circular record shared by submission and listing.
//! - Derive the normalized event id used for search and linking.
//!
//! # Invariants
//! - `circular_id` is assigned externally and never changes.
//! - `created_on` is Unix epoch milliseconds, always interpreted as UTC.
//! - There is no mutation API after construction; edits and deletions do
//!   not exist at this layer.

use crate::subject::matchers::parse_event_from_subject;
use serde::{Deserialize, Serialize};

/// Listing projection of a circular: identity plus subject line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircularMetadata {
    /// Unique, monotonically assigned identity key. Always >= 1.
    pub circular_id: u64,
    /// Free-text subject line as submitted.
    pub subject: String,
}

/// Canonical circular record constructed at submission time.
///
/// Whether `subject` and `body` pass the submission policy is the
/// concern of [`crate::subject`]; this shape does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circular {
    /// Unique, monotonically assigned identity key. Always >= 1.
    pub circular_id: u64,
    /// Free-text subject line as submitted.
    pub subject: String,
    /// Normalized event id derived from `subject`; absent when no naming
    /// convention matched. Serialized as `sub` to match the stored shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Unix epoch milliseconds, UTC.
    pub created_on: i64,
    /// Free body text, verbatim.
    pub body: String,
    /// Pre-formatted author string, see [`crate::format::format_author`].
    pub submitter: String,
}

impl Circular {
    /// Builds a record from user input plus the server-assigned identity
    /// and timestamp, deriving the normalized event id from the subject.
    pub fn new(
        circular_id: u64,
        subject: impl Into<String>,
        created_on: i64,
        body: impl Into<String>,
        submitter: impl Into<String>,
    ) -> Self {
        let subject = subject.into();
        let sub = parse_event_from_subject(&subject);
        Self {
            circular_id,
            subject,
            sub,
            created_on,
            body: body.into(),
            submitter: submitter.into(),
        }
    }

    /// Returns the listing projection of this record.
    pub fn metadata(&self) -> CircularMetadata {
        CircularMetadata {
            circular_id: self.circular_id,
            subject: self.subject.clone(),
        }
    }
}

/// Author identity used to derive the `submitter` field.
///
/// Not persisted on its own; only the formatted string travels with the
/// circular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    pub email: String,
}
