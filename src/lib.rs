//! Tally: a bounded, persisted event counter.
//!
//! Tally keeps a single non-negative count, optionally capped by a
//! user-supplied maximum, and mirrors every state change to an injected
//! key-value store so the counter survives process restarts. The design is
//! "pure core, imperative shell": the rules live in pure functions under
//! [`core`], while [`store::CounterStore`] applies them and commits the
//! results.
//!
//! # Core Concepts
//!
//! - **State**: the `(count, max)` register in [`core::CounterState`]
//! - **Advisories**: transient messages explaining every outcome
//! - **Validation**: candidate maxima are vetted before they touch state
//! - **Persistence**: each field syncs to durable storage on mutation
//!
//! # Example
//!
//! ```rust
//! use tally::persist::MemoryStore;
//! use tally::store::CounterStore;
//! use tally::core::{MaxInput, Severity};
//!
//! let mut counter = CounterStore::new(MemoryStore::new());
//!
//! counter.set_max("2".into());
//! counter.increment();
//! counter.increment();
//!
//! // The cap is enforced, and the refusal explains itself.
//! let blocked = counter.increment();
//! assert!(!blocked.success);
//! assert_eq!(blocked.advisory.unwrap().severity, Severity::Warning);
//!
//! // Removing the limit unblocks the counter.
//! counter.set_max(MaxInput::Clear);
//! assert!(counter.increment().success);
//!
//! // A new session over the same storage picks up where this one left off.
//! let restored = CounterStore::new(counter.into_storage());
//! assert_eq!(restored.state().count, 3);
//! ```

pub mod core;
pub mod persist;
pub mod store;

// Re-export commonly used types
pub use crate::core::{validate, Advisory, CounterState, MaxInput, MaxRejection, Severity, Verdict};
pub use crate::persist::{KeyValueStore, MemoryStore};
pub use crate::store::{CounterStore, OperationResult};
