//! The counter's imperative shell.
//!
//! [`CounterStore`] owns the authoritative state, applies the four
//! operations, and mirrors every successful field mutation to the injected
//! durable store. The pure core decides; this shell commits.
//!
//! Every operation is total: an illegal request is answered with
//! `success: false` plus a warning advisory, never an `Err` or a panic,
//! and leaves the state exactly as it was.

use crate::core::{validate, Advisory, CounterState, MaxInput, Verdict};
use crate::persist::{load_state, persist_count, persist_max, KeyValueStore};

/// Advisory text when an increment would pass the maximum.
pub const MAX_REACHED_TEXT: &str = "cannot exceed the established maximum";

/// Advisory text when a decrement would drop below zero.
pub const NEGATIVE_COUNT_TEXT: &str = "count cannot go negative";

/// Advisory text after a reset.
pub const RESET_TEXT: &str = "count reset to 0";

/// Advisory text after the maximum is removed.
pub const MAX_DISABLED_TEXT: &str = "maximum limit disabled";

/// Advisory text after the maximum is updated.
pub const MAX_UPDATED_TEXT: &str = "maximum limit updated";

/// Outcome of a single counter operation.
///
/// `success` says whether the state changed; `advisory` carries the
/// explanation when there is one. Successful increments and decrements are
/// silent, everything else speaks.
#[derive(Clone, Debug)]
pub struct OperationResult {
    /// Whether the requested mutation was applied.
    pub success: bool,
    /// The message produced by this operation, if any.
    pub advisory: Option<Advisory>,
}

/// The bounded, persisted event counter.
///
/// Holds one [`CounterState`] for the life of the session, guards its
/// bounds on every call, and writes each mutated field to the injected
/// [`KeyValueStore`] immediately after the mutation succeeds. Construction
/// loads whatever the store already holds, falling back to a zeroed,
/// unbounded counter when storage is empty or corrupt.
///
/// # Example
///
/// ```rust
/// use tally::persist::MemoryStore;
/// use tally::store::CounterStore;
///
/// let mut counter = CounterStore::new(MemoryStore::new());
///
/// counter.set_max("10".into());
/// counter.increment();
/// counter.increment();
///
/// assert_eq!(counter.state().count, 2);
/// assert_eq!(counter.state().max, Some(10.0));
/// ```
pub struct CounterStore<P: KeyValueStore> {
    state: CounterState,
    advisory: Option<Advisory>,
    storage: P,
}

impl<P: KeyValueStore> CounterStore<P> {
    /// Create a counter backed by `storage`, restoring any persisted state.
    ///
    /// Corrupt or missing fields fall back to their defaults, and a stored
    /// maximum below the stored count is dropped; loading never fails.
    pub fn new(storage: P) -> Self {
        let state = load_state(&storage);
        Self {
            state,
            advisory: None,
            storage,
        }
    }

    /// Read-only snapshot of the current state (pure).
    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// The advisory produced by the last operation, until dismissed or
    /// replaced (pure).
    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    /// Drop the held advisory, as a presentation layer does when its alert
    /// is closed.
    pub fn dismiss_advisory(&mut self) {
        self.advisory = None;
    }

    /// Consume the counter and hand back its storage.
    pub fn into_storage(self) -> P {
        self.storage
    }

    /// Raise the count by one.
    ///
    /// Refused with a warning when the count has reached the maximum (or
    /// the type's ceiling); otherwise the new count is persisted at once.
    pub fn increment(&mut self) -> OperationResult {
        self.advisory = None;
        if !self.state.can_increment() {
            return self.refuse(Advisory::warning(MAX_REACHED_TEXT));
        }

        self.state.count += 1;
        persist_count(&mut self.storage, self.state.count);
        OperationResult {
            success: true,
            advisory: None,
        }
    }

    /// Lower the count by one.
    ///
    /// Refused with a warning at zero; otherwise the new count is
    /// persisted at once.
    pub fn decrement(&mut self) -> OperationResult {
        self.advisory = None;
        if !self.state.can_decrement() {
            return self.refuse(Advisory::warning(NEGATIVE_COUNT_TEXT));
        }

        self.state.count -= 1;
        persist_count(&mut self.storage, self.state.count);
        OperationResult {
            success: true,
            advisory: None,
        }
    }

    /// Set the count back to zero. Unconditional and idempotent; the
    /// maximum is untouched.
    pub fn reset(&mut self) -> OperationResult {
        self.advisory = None;
        self.state.count = 0;
        persist_count(&mut self.storage, self.state.count);
        self.commit(Advisory::success(RESET_TEXT))
    }

    /// Install, replace or remove the maximum.
    ///
    /// `Clear` (or raw text that is empty once trimmed) removes the limit.
    /// Anything else goes through [`validate`]; a rejected candidate is
    /// never applied and the state stays untouched, with the rejection
    /// reason surfaced as a warning advisory.
    pub fn set_max(&mut self, input: MaxInput) -> OperationResult {
        self.advisory = None;
        let raw = match input {
            MaxInput::Clear => return self.disable_max(),
            MaxInput::Raw(text) => text,
        };

        if raw.trim().is_empty() {
            return self.disable_max();
        }

        match validate(&raw, self.state.count) {
            Verdict::Reject(rejection) => self.refuse(Advisory::warning(rejection.to_string())),
            Verdict::Accept(value) => {
                self.state.max = Some(value);
                persist_max(&mut self.storage, self.state.max);
                self.commit(Advisory::info(MAX_UPDATED_TEXT))
            }
        }
    }

    fn disable_max(&mut self) -> OperationResult {
        self.state.max = None;
        persist_max(&mut self.storage, None);
        self.commit(Advisory::info(MAX_DISABLED_TEXT))
    }

    fn commit(&mut self, advisory: Advisory) -> OperationResult {
        self.advisory = Some(advisory.clone());
        OperationResult {
            success: true,
            advisory: Some(advisory),
        }
    }

    fn refuse(&mut self, advisory: Advisory) -> OperationResult {
        self.advisory = Some(advisory.clone());
        OperationResult {
            success: false,
            advisory: Some(advisory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MaxRejection, Severity};
    use crate::persist::{MemoryStore, COUNT_KEY, MAX_KEY};

    fn counter() -> CounterStore<MemoryStore> {
        CounterStore::new(MemoryStore::new())
    }

    #[test]
    fn fresh_counter_starts_at_zero_without_limit() {
        let counter = counter();
        assert_eq!(counter.state().count, 0);
        assert_eq!(counter.state().max, None);
        assert!(counter.advisory().is_none());
    }

    #[test]
    fn increment_advances_and_persists() {
        let mut counter = counter();
        let result = counter.increment();

        assert!(result.success);
        assert!(result.advisory.is_none());
        assert_eq!(counter.state().count, 1);

        let storage = counter.into_storage();
        assert_eq!(storage.get(COUNT_KEY), Some("1".to_string()));
    }

    #[test]
    fn increment_at_max_is_refused_and_leaves_state() {
        let mut counter = counter();
        counter.set_max("2".into());
        counter.increment();
        counter.increment();

        let result = counter.increment();
        assert!(!result.success);
        let advisory = result.advisory.unwrap();
        assert_eq!(advisory.severity, Severity::Warning);
        assert_eq!(advisory.text, MAX_REACHED_TEXT);
        assert_eq!(counter.state().count, 2);
    }

    #[test]
    fn decrement_at_zero_is_refused() {
        let mut counter = counter();
        let result = counter.decrement();

        assert!(!result.success);
        let advisory = result.advisory.unwrap();
        assert_eq!(advisory.severity, Severity::Warning);
        assert_eq!(advisory.text, NEGATIVE_COUNT_TEXT);
        assert_eq!(counter.state().count, 0);
    }

    #[test]
    fn decrement_undoes_an_increment() {
        let mut counter = counter();
        counter.increment();
        counter.increment();
        counter.decrement();
        assert_eq!(counter.state().count, 1);
    }

    #[test]
    fn reset_zeroes_the_count_and_keeps_the_max() {
        let mut counter = counter();
        counter.set_max("10".into());
        counter.increment();
        counter.increment();

        let result = counter.reset();
        assert!(result.success);
        let advisory = result.advisory.unwrap();
        assert_eq!(advisory.severity, Severity::Success);
        assert_eq!(advisory.text, RESET_TEXT);
        assert_eq!(counter.state().count, 0);
        assert_eq!(counter.state().max, Some(10.0));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut counter = counter();
        counter.increment();
        counter.reset();
        let again = counter.reset();

        assert!(again.success);
        assert_eq!(counter.state().count, 0);
    }

    #[test]
    fn set_max_accepts_and_persists() {
        let mut counter = counter();
        let result = counter.set_max("10".into());

        assert!(result.success);
        let advisory = result.advisory.unwrap();
        assert_eq!(advisory.severity, Severity::Info);
        assert_eq!(advisory.text, MAX_UPDATED_TEXT);
        assert_eq!(counter.state().max, Some(10.0));

        let storage = counter.into_storage();
        assert_eq!(storage.get(MAX_KEY), Some("10".to_string()));
    }

    #[test]
    fn set_max_rejection_leaves_state_untouched() {
        let mut counter = counter();
        counter.set_max("10".into());

        let result = counter.set_max("abc".into());
        assert!(!result.success);
        let advisory = result.advisory.unwrap();
        assert_eq!(advisory.severity, Severity::Warning);
        assert_eq!(advisory.text, MaxRejection::NotANumber.to_string());
        assert_eq!(counter.state().max, Some(10.0));

        // The rejected candidate never reached storage either.
        let storage = counter.into_storage();
        assert_eq!(storage.get(MAX_KEY), Some("10".to_string()));
    }

    #[test]
    fn set_max_below_count_is_refused() {
        let mut counter = counter();
        for _ in 0..5 {
            counter.increment();
        }

        let result = counter.set_max("2".into());
        assert!(!result.success);
        assert_eq!(
            result.advisory.unwrap().text,
            MaxRejection::BelowCount.to_string()
        );
        assert_eq!(counter.state().max, None);
    }

    #[test]
    fn clear_signal_removes_the_max() {
        let mut counter = counter();
        counter.set_max("10".into());

        let result = counter.set_max(MaxInput::Clear);
        assert!(result.success);
        let advisory = result.advisory.unwrap();
        assert_eq!(advisory.severity, Severity::Info);
        assert_eq!(advisory.text, MAX_DISABLED_TEXT);
        assert_eq!(counter.state().max, None);
    }

    #[test]
    fn empty_raw_text_also_removes_the_max() {
        let mut counter = counter();
        counter.set_max("3".into());
        counter.set_max("".into());
        assert_eq!(counter.state().max, None);

        counter.set_max("3".into());
        counter.set_max("   ".into());
        assert_eq!(counter.state().max, None);
    }

    #[test]
    fn clearing_the_max_unblocks_increment() {
        let mut counter = counter();
        counter.set_max("1".into());
        counter.increment();
        assert!(!counter.increment().success);

        counter.set_max(MaxInput::Clear);
        assert!(counter.increment().success);
        assert_eq!(counter.state().count, 2);
    }

    #[test]
    fn fractional_max_is_applied_without_rounding() {
        let mut counter = counter();
        let result = counter.set_max("2.5".into());

        assert!(result.success);
        assert_eq!(counter.state().max, Some(2.5));

        counter.increment();
        counter.increment();
        assert!(counter.increment().success); // 2 < 2.5
        assert!(!counter.increment().success); // 3 >= 2.5
        assert_eq!(counter.state().count, 3);
    }

    #[test]
    fn each_operation_replaces_the_held_advisory() {
        let mut counter = counter();
        counter.reset();
        assert_eq!(counter.advisory().unwrap().text, RESET_TEXT);

        counter.set_max("10".into());
        assert_eq!(counter.advisory().unwrap().text, MAX_UPDATED_TEXT);

        // A silent success clears the previous advisory.
        counter.increment();
        assert!(counter.advisory().is_none());
    }

    #[test]
    fn dismiss_drops_the_advisory() {
        let mut counter = counter();
        counter.reset();
        assert!(counter.advisory().is_some());

        counter.dismiss_advisory();
        assert!(counter.advisory().is_none());
    }

    #[test]
    fn counter_restores_from_prior_session() {
        let mut counter = counter();
        counter.set_max("10".into());
        counter.increment();
        counter.increment();
        counter.increment();

        let reloaded = CounterStore::new(counter.into_storage());
        assert_eq!(reloaded.state().count, 3);
        assert_eq!(reloaded.state().max, Some(10.0));
    }

    #[test]
    fn corrupt_stored_count_loads_as_zero() {
        let mut storage = MemoryStore::new();
        storage.set(COUNT_KEY, "not-a-number");

        let counter = CounterStore::new(storage);
        assert_eq!(counter.state().count, 0);
    }

    #[test]
    fn stored_max_below_stored_count_is_dropped_on_load() {
        let mut storage = MemoryStore::new();
        storage.set(COUNT_KEY, "7");
        storage.set(MAX_KEY, "3");

        let mut counter = CounterStore::new(storage);
        assert_eq!(counter.state().count, 7);
        assert_eq!(counter.state().max, None);
        assert!(counter.increment().success);
    }
}
