//! Validation of candidate maximum values.
//!
//! The maximum arrives from the outside world as raw text. [`validate`] is
//! the pure gate between that text and the typed state: it either produces
//! a finite, usable number or names the first rule the candidate broke.
//! No side effects; safe to call speculatively without committing anything.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A candidate maximum as it crosses the boundary into the core.
///
/// Raw text stays raw until the validator accepts it; only then does a
/// typed number enter the state model. `Clear` is the explicit
/// remove-the-limit signal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MaxInput {
    /// Unvalidated text, straight from an input field.
    Raw(String),
    /// Explicit request to drop the maximum.
    Clear,
}

impl From<&str> for MaxInput {
    fn from(text: &str) -> Self {
        MaxInput::Raw(text.to_string())
    }
}

/// Why a candidate maximum was turned down.
///
/// The `Display` strings are the exact advisory texts surfaced to callers,
/// so they are part of the contract, not just diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error, Serialize, Deserialize)]
pub enum MaxRejection {
    /// The text did not parse as a finite real number.
    #[error("the maximum must be a valid number")]
    NotANumber,

    /// The number parsed but is below zero.
    #[error("the maximum cannot be negative")]
    Negative,

    /// The number parsed but is below the current count.
    #[error("the maximum cannot be less than the current count")]
    BelowCount,
}

/// Outcome of validating a candidate maximum.
#[derive(Clone, PartialEq, Debug)]
pub enum Verdict {
    /// The candidate is usable; carries the parsed value.
    Accept(f64),
    /// The candidate broke a rule; nothing may be applied.
    Reject(MaxRejection),
}

impl Verdict {
    /// Whether this verdict accepts the candidate.
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept(_))
    }
}

/// Validate a candidate maximum against the current count (pure).
///
/// Rules are checked in order and the first match wins; the rejection
/// reasons are mutually exclusive, so precedence is part of the contract:
///
/// 1. the text must parse as a finite real number,
/// 2. the number must not be negative,
/// 3. the number must not be below the current count.
///
/// Fractional values pass: the counter does not force the maximum to be
/// whole, and never rounds it.
///
/// # Example
///
/// ```rust
/// use tally::core::{validate, MaxRejection, Verdict};
///
/// assert_eq!(validate("abc", 5), Verdict::Reject(MaxRejection::NotANumber));
/// assert_eq!(validate("-3", 5), Verdict::Reject(MaxRejection::Negative));
/// assert_eq!(validate("2", 5), Verdict::Reject(MaxRejection::BelowCount));
/// assert_eq!(validate("10", 5), Verdict::Accept(10.0));
/// ```
pub fn validate(raw: &str, current_count: u64) -> Verdict {
    let parsed = match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return Verdict::Reject(MaxRejection::NotANumber),
    };

    if parsed < 0.0 {
        return Verdict::Reject(MaxRejection::Negative);
    }

    if parsed < current_count as f64 {
        return Verdict::Reject(MaxRejection::BelowCount);
    }

    Verdict::Accept(parsed)
}
