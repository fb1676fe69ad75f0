//! Core domain logic for GCN circulars.
//!
//! Classifies free-text astronomical alert subjects into canonical event
//! identifiers, gates submissions against the subject/body policy, and
//! renders accepted records into the fixed plain-text circular layout.
//! Every operation is pure and synchronous; the crate performs no I/O of
//! its own beyond the opt-in logging bootstrap.

pub mod format;
pub mod headers;
pub mod logging;
pub mod model;
pub mod placeholder;
pub mod subject;

pub use format::{format_author, format_circular, format_date_iso};
pub use headers::{
    basic_auth_headers, canonical_url_headers, HeaderError, HeaderResult,
    PUBLIC_STATIC_CACHE_CONTROL,
};
pub use logging::{default_log_level, init_logging, logging_status, LogSink};
pub use model::circular::{Author, Circular, CircularMetadata};
pub use placeholder::{subject_placeholder, BODY_PLACEHOLDER};
pub use subject::matchers::parse_event_from_subject;
pub use subject::validate::{
    body_is_valid, email_is_auto_reply, subject_is_valid, FieldValidity, AUTO_REPLY_CHECKLIST,
    VALID_SUBJECT_KEYWORDS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
