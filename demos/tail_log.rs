//! BoundedRing as a keep-last-N tail over a stream of log events.
//!
//! The ring never grows and never blocks a producer: once full, each new
//! event silently displaces the oldest one.
//!
//! Run with: cargo run --example tail_log

use bounded_ring::BoundedRing;

fn main() {
    // Keep only the four most recent events.
    let mut tail: BoundedRing<String> = BoundedRing::new(4).expect("capacity is positive");

    for i in 1..=10 {
        tail.insert(format!("event #{i}"));
    }

    println!("Last {} of 10 events:", tail.len());
    for line in &tail {
        println!("  {line}");
    }

    // Draining consumes oldest-first.
    let drained: Vec<String> = tail.drain().collect();
    println!(
        "Drained {} events, newest was {:?}",
        drained.len(),
        drained.last()
    );
}
