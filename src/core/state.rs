//! Authoritative counter state.
//!
//! `CounterState` is a plain value type: inspecting it has no side effects,
//! and every mutation goes through the operations on
//! [`CounterStore`](crate::store::CounterStore), which re-establish the
//! bounds after each call.

use serde::{Deserialize, Serialize};

/// The `(count, max)` register at the heart of the counter.
///
/// Two fields, one cross-field rule: `count` never goes below zero (held by
/// the unsigned type), and when a maximum is set it never goes below `count`.
/// The maximum is an `f64` because fractional limits such as `2.5` are
/// accepted verbatim; `count` itself only ever moves by whole steps.
///
/// # Example
///
/// ```rust
/// use tally::core::CounterState;
///
/// let state = CounterState { count: 3, max: Some(10.0) };
/// assert!(state.can_increment());
/// assert!(state.can_decrement());
///
/// let at_limit = CounterState { count: 10, max: Some(10.0) };
/// assert!(!at_limit.can_increment());
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CounterState {
    /// Current tally of recorded events.
    pub count: u64,
    /// Optional upper bound; `None` means unbounded above.
    pub max: Option<f64>,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterState {
    /// The starting state: zero events, no limit.
    pub fn new() -> Self {
        Self {
            count: 0,
            max: None,
        }
    }

    /// Whether an increment is currently allowed (pure).
    ///
    /// Derived from the authoritative fields on every call rather than
    /// cached, so it can never go stale. A fractional maximum bounds the
    /// count at the first whole number that reaches it: with `max = 2.5`
    /// the counts 0, 1 and 2 may still increment.
    pub fn can_increment(&self) -> bool {
        self.count != u64::MAX && self.max.is_none_or(|m| (self.count as f64) < m)
    }

    /// Whether a decrement is currently allowed (pure).
    ///
    /// The count's floor is always zero.
    pub fn can_decrement(&self) -> bool {
        self.count > 0
    }

    /// Check the cross-field rule `max >= count` (pure).
    ///
    /// Trivially true when no maximum is set. Used to re-validate whatever
    /// was read back from durable storage at startup.
    pub fn is_consistent(&self) -> bool {
        self.max
            .is_none_or(|m| m.is_finite() && m >= self.count as f64)
    }
}
