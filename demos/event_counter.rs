//! Event Counter
//!
//! This example demonstrates the core counter operations against an
//! in-memory store.
//!
//! Key concepts:
//! - Total operations - refusals are reported, never thrown
//! - Advisory messages explaining every outcome
//! - A validated, optional maximum bounding the count
//!
//! Run with: cargo run --example event_counter

use tally::core::MaxInput;
use tally::persist::MemoryStore;
use tally::store::CounterStore;

fn report(label: &str, counter: &CounterStore<MemoryStore>) {
    let state = counter.state();
    match counter.advisory() {
        Some(advisory) => println!(
            "{label}: count={} [{}] {}",
            state.count,
            advisory.severity.as_str(),
            advisory.text
        ),
        None => println!("{label}: count={}", state.count),
    }
}

fn main() {
    println!("=== Event Counter Example ===\n");

    let mut counter = CounterStore::new(MemoryStore::new());

    // Cap the counter at 3 events.
    counter.set_max("3".into());
    report("set_max(3)", &counter);

    for _ in 0..3 {
        counter.increment();
    }
    report("increment x3", &counter);

    // The fourth increment is refused with an explanation.
    let blocked = counter.increment();
    println!("increment refused: success={}", blocked.success);
    report("at the limit", &counter);

    // Invalid candidates never touch the state.
    counter.set_max("abc".into());
    report("set_max(abc)", &counter);

    // Removing the limit unblocks the counter.
    counter.set_max(MaxInput::Clear);
    counter.increment();
    report("cleared and incremented", &counter);

    counter.reset();
    report("reset", &counter);

    println!("\n=== Example Complete ===");
}
