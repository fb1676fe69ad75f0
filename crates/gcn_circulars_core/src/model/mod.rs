//! Canonical data shapes for circular records.
//!
//! # Responsibility
//! - Define the circular record, its listing projection and the author shape.
//!
//! # Invariants
//! - Identity is the externally assigned `circular_id`.
//! - Records are append-only after construction.

pub mod circular;
