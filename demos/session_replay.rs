//! Session Replay
//!
//! This example demonstrates persistence across sessions: a counter is
//! driven, its storage is carried over to a fresh session, and the state
//! is restored exactly - including recovery from corrupted storage.
//!
//! Run with: cargo run --example session_replay

use tally::persist::{KeyValueStore, MemoryStore, COUNT_KEY};
use tally::store::CounterStore;

fn main() {
    println!("=== Session Replay Example ===\n");

    // First session: set a limit and record some events.
    let mut counter = CounterStore::new(MemoryStore::new());
    counter.set_max("10".into());
    for _ in 0..3 {
        counter.increment();
    }
    println!(
        "session 1: count={} max={:?}",
        counter.state().count,
        counter.state().max
    );

    // "Restart": rebuild the counter over the same storage.
    let storage = counter.into_storage();
    let restored = CounterStore::new(storage);
    println!(
        "session 2: count={} max={:?}",
        restored.state().count,
        restored.state().max
    );

    // Corrupt the stored count; the next session falls back to zero
    // instead of failing to start.
    let mut storage = restored.into_storage();
    storage.set(COUNT_KEY, "not-a-number");
    let recovered = CounterStore::new(storage);
    println!(
        "session 3 (corrupt count): count={} max={:?}",
        recovered.state().count,
        recovered.state().max
    );

    println!("\n=== Example Complete ===");
}
