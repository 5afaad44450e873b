//! Basic Usage
//!
//! This example demonstrates constructing outcomes and checking their state.
//!
//! Key concepts:
//! - Named constructors for success, error, and empty outcomes
//! - State queries and safe accessors
//! - Rendering an outcome's payload
//!
//! Run with: cargo run --example basic_usage

use outcome::Outcome;

fn main() {
    println!("=== Basic Usage Example ===\n");

    // Creating an outcome with a successful integer value
    let answer: Outcome<i32, String> = Outcome::success(42);

    // Check if the outcome is successful
    if answer.is_success() {
        println!("Success! Value: {answer}");
    } else {
        println!("Error: {answer}");
    }

    // A failed outcome falls back to a default value
    let failed: Outcome<i32, String> = Outcome::error("no answer available".to_string());
    println!("Fallback value: {}", failed.value_or(0));

    // An empty outcome models "not yet computed"
    let pending: Outcome<i32, String> = Outcome::empty();
    println!("Pending state: {}", pending.state());

    println!("\n=== Example Complete ===");
}
