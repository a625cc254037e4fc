//! Core counter types and logic.
//!
//! This module contains the pure functional core of the counter:
//! - The authoritative `(count, max)` state and its derivations
//! - Advisory messages describing operation outcomes
//! - Validation of candidate maximum values
//!
//! All logic in this module is pure (no side effects); persistence and
//! mutation live in the imperative shell around it.

mod advisory;
mod state;
mod validator;

pub use advisory::{Advisory, Severity};
pub use state::CounterState;
pub use validator::{validate, MaxInput, MaxRejection, Verdict};
