//! Subject-line classification and submission policy.
//!
//! # Responsibility
//! - Extract canonical transient ids from free-text subject lines.
//! - Gate subject and body text against the submission policy.
//!
//! # Invariants
//! - Classification and policy checks are pure; no call depends on the
//!   outcome of a previous one.

pub mod matchers;
pub mod validate;
