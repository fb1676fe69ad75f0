//! Example subject and body text shown to first-time submitters.

use chrono::{DateTime, Utc};

/// Example body text: the canonical authors-report preamble.
pub const BODY_PLACEHOLDER: &str = "Worf Son of Mogh (Starfleet), Geordi LaForge (Starfleet), Beverly Crusher (Starfleet), Deanna Troi (Starfleet), Data Soong (Starfleet), Isaac Newton (Cambridge), Stephen Hawking (Cambridge), and Albert Einstein (Institute for Advanced Study) report on behalf of a larger collaboration:\n\n...";

/// Example subject line for the given UTC date, following the
/// `GRB YYMMDDA` naming convention.
pub fn subject_placeholder(now: DateTime<Utc>) -> String {
    format!(
        "GRB {}A: observations of a gamma-ray burst",
        now.format("%y%m%d")
    )
}
