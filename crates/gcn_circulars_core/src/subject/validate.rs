//! Submission policy checks for subject and body text.
//!
//! # Responsibility
//! - Decide whether free-text subject and body meet the submission policy.
//! - Detect auto-responder mail so it never enters the archive.
//!
//! # Invariants
//! - Checks are defensive: malformed input yields a verdict, never an error.
//! - Keyword and auto-reply matching is case-insensitive, substring-based
//!   and not word-boundary aware.

use once_cell::sync::Lazy;

/// Observatory and phenomenon keywords accepted in subject lines.
///
/// Fixed policy list from the circulars archive; order and contents are
/// load-bearing only insofar as the archive publishes them verbatim.
pub const VALID_SUBJECT_KEYWORDS: &[&str] = &[
    "AGILE",
    "ANTARES",
    "AXP",
    "Baksan Neutrino Observatory Alert",
    "CALET",
    "Chandra",
    "Fermi",
    "FXT",
    "GRB",
    "GW",
    "HAWC",
    "HST",
    "IBAS",
    "IceCube",
    "INTEGRAL",
    "IPN",
    "KAGRA",
    "KONUS",
    "LIGO",
    "LOFAR",
    "LVC",
    "LVK",
    "MAGIC",
    "MASTER",
    "MAXI",
    "Pan-STARRS",
    "POLAR",
    "RATIR",
    "SDSS",
    "SFXT",
    "SGR",
    "Suzaku",
    "Swift",
    "transient",
    "VLA",
    "VLBI",
    "XRB",
    "XRF",
    "XRT",
    "XTR",
    "Virgo",
    "VLA",
    "ZTF",
];

/// Phrases marking a subject as auto-responder mail.
///
/// All entries are lowercase and matched as substrings of the lowercased
/// subject. The scrambled-looking entry is an opaque marker carried over
/// from a historical auto-responder; it is matched literally, never decoded.
pub const AUTO_REPLY_CHECKLIST: &[&str] = &[
    "this is an automatic reply",
    "automatic reply: ",
    "auto reply",
    "autoreply",
    "vacation",
    "out of the office",
    "out of office",
    "out of town",
    "away from my mail",
    "away from his e-mail",
    "away from her e-mail",
    "away from the office",
    "away from his office",
    "away from her office",
    "traveling until",
    "no longer receiving mail",
    "delivery failure notif",
    "mail delivery failure",
    "returned mail",
    "saxzlcnkgzmfpbhvyzsbub",
    "ponse_automatique",
    "off-line re:",
    "re: ",
    "fwd: ",
    " r: ",
    " ris: ",
];

static KEYWORDS_LOWERCASE: Lazy<Vec<String>> = Lazy::new(|| {
    VALID_SUBJECT_KEYWORDS
        .iter()
        .map(|keyword| keyword.to_lowercase())
        .collect()
});

/// Verdict of a policy check over one free-text field.
///
/// `Empty` is distinct from `Invalid`: the caller has nothing to judge
/// yet, so feedback should stay silent instead of flagging an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValidity {
    /// The field meets the submission policy.
    Valid,
    /// The field definitively fails the submission policy.
    Invalid,
    /// The field is empty and has not been evaluated.
    Empty,
}

impl FieldValidity {
    /// Returns whether the field is acceptable for submission.
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<FieldValidity> for Option<bool> {
    fn from(value: FieldValidity) -> Self {
        match value {
            FieldValidity::Valid => Some(true),
            FieldValidity::Invalid => Some(false),
            FieldValidity::Empty => None,
        }
    }
}

/// Checks a subject line against the submission policy.
///
/// A non-empty subject is valid iff it is not auto-responder mail and it
/// mentions at least one keyword from [`VALID_SUBJECT_KEYWORDS`].
pub fn subject_is_valid(subject: &str) -> FieldValidity {
    if subject.is_empty() {
        return FieldValidity::Empty;
    }
    if email_is_auto_reply(subject) {
        return FieldValidity::Invalid;
    }
    let lowered = subject.to_lowercase();
    if KEYWORDS_LOWERCASE
        .iter()
        .any(|keyword| lowered.contains(keyword.as_str()))
    {
        FieldValidity::Valid
    } else {
        FieldValidity::Invalid
    }
}

/// Checks body text against the submission policy.
///
/// Any non-empty body is valid; body content is otherwise unconstrained.
pub fn body_is_valid(body: &str) -> FieldValidity {
    if body.is_empty() {
        FieldValidity::Empty
    } else {
        FieldValidity::Valid
    }
}

/// Returns whether the subject marks the mail as an auto-responder.
pub fn email_is_auto_reply(subject: &str) -> bool {
    let lowered = subject.to_lowercase();
    AUTO_REPLY_CHECKLIST
        .iter()
        .any(|phrase| lowered.contains(phrase))
}
