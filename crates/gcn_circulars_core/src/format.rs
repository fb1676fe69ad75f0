//! Plain-text rendering of circular records.
//!
//! # Responsibility
//! - Render the canonical fixed-layout circular document.
//! - Compose machine-readable timestamps and author strings.
//!
//! # Invariants
//! - Rendering trusts pre-validated input: no escaping, no truncation,
//!   no failure path.
//! - All date arithmetic is UTC.

use crate::model::circular::{Author, Circular};
use chrono::{DateTime, SecondsFormat, Utc};
use indoc::formatdoc;

/// Renders a circular as the canonical plain-text document.
///
/// Six labeled tokens in fixed order, a blank line, then the body verbatim.
/// The date line is `YY/MM/DD hh:mm:ss GMT`, zero-padded, two-digit year.
pub fn format_circular(circular: &Circular) -> String {
    let date = utc_from_epoch_ms(circular.created_on);
    formatdoc! {"
        TITLE:   GCN CIRCULAR
        NUMBER:  {number}
        SUBJECT: {subject}
        DATE:    {date} GMT
        FROM:    {submitter}

        {body}",
        number = circular.circular_id,
        subject = circular.subject,
        date = date.format("%y/%m/%d %H:%M:%S"),
        submitter = circular.submitter,
        body = circular.body,
    }
}

/// Formats an epoch-milliseconds timestamp as ISO 8601 UTC with whole-second
/// precision (`2023-03-17T12:34:56Z`); fractional seconds are dropped.
pub fn format_date_iso(epoch_ms: i64) -> String {
    utc_from_epoch_ms(epoch_ms).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Composes the display string for a circular author.
///
/// Bare email without a name, `name <email>` without an affiliation, and
/// `name at affiliation <email>` otherwise. No escaping; the inputs are
/// trusted as-is.
pub fn format_author(author: &Author) -> String {
    match (non_empty(&author.name), non_empty(&author.affiliation)) {
        (None, _) => author.email.clone(),
        (Some(name), None) => format!("{name} <{}>", author.email),
        (Some(name), Some(affiliation)) => {
            format!("{name} at {affiliation} <{}>", author.email)
        }
    }
}

// Empty strings count as absent, matching the submitted form semantics.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

// Timestamps outside chrono's representable range clamp to the epoch;
// server-assigned times are always in range.
fn utc_from_epoch_ms(epoch_ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(epoch_ms).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
