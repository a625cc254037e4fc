//! Transient outcome messages.
//!
//! Every counter operation explains itself through an [`Advisory`]: a
//! severity, a human-readable text and the moment it was issued. Advisories
//! are immutable values describing what just happened; they are never
//! persisted, and each operation replaces the previous one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How an advisory should be presented.
///
/// The variants mirror the alert levels a presentation layer typically
/// offers; [`Severity::as_str`] yields the lowercase name for styling or
/// logging.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Success,
    Error,
}

impl Severity {
    /// Get the severity's name for display/logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A transient message describing the outcome of the last operation.
///
/// # Example
///
/// ```rust
/// use tally::core::{Advisory, Severity};
///
/// let advisory = Advisory::warning("count cannot go negative");
/// assert_eq!(advisory.severity, Severity::Warning);
/// assert_eq!(advisory.text, "count cannot go negative");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Advisory {
    /// Presentation level of the message.
    pub severity: Severity,
    /// Human-readable explanation of the outcome.
    pub text: String,
    /// When the advisory was issued.
    pub issued_at: DateTime<Utc>,
}

impl Advisory {
    /// Create an advisory with the given severity, stamped now.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            issued_at: Utc::now(),
        }
    }

    /// An informational advisory.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    /// A warning advisory, used for rejected operations.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// A success advisory.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    /// An error advisory.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }
}
