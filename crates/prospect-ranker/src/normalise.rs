//! Person-name normalisation.
//!
//! Derives the canonical join key used to match contacts against
//! publication authors: lowercase, strip one leading honorific, trim.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One leading honorific token, anchored at the start and followed by
    /// whitespace or end of input. Order matters: dotted forms first so
    /// "dr." is not consumed as "dr" plus a stray dot.
    static ref HONORIFIC: Regex =
        Regex::new(r"^(?:dr\.|dr|phd|prof\.|prof)(?:\s+|$)").unwrap();
}

/// Normalise a person name into the join key.
///
/// Absent names normalise to the empty string, never an error. A name that
/// is only an honorific (plus whitespace) also normalises to empty.
pub fn normalise_name(name: Option<&str>) -> String {
    let Some(raw) = name else {
        return String::new();
    };
    let lowered = raw.to_lowercase();
    let stripped = HONORIFIC.replace(lowered.trim(), "");
    stripped.trim().to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────
