//! Handling Errors
//!
//! This example demonstrates how success and error payloads render and how
//! accessors report failures as values.
//!
//! Key concepts:
//! - Display renders whichever payload is live
//! - value() reports the actual state when it fails
//! - expect() attaches caller context to a failure
//!
//! Run with: cargo run --example handling_errors

use outcome::Outcome;

// Function that may fail and return an outcome
fn div(a: f64, b: f64) -> Outcome<f64, String> {
    if b == 0.0 {
        Outcome::error("Division by zero error".to_string())
    } else {
        Outcome::success(a / b)
    }
}

fn main() {
    println!("=== Handling Errors Example ===\n");

    // Example 1: successful outcome
    println!("Result 1 value: {}", div(10.0, 2.0));

    // Example 2: errored outcome
    println!("Result 2 error: {}", div(5.0, 0.0));

    // Example 3: access failures are plain values, not panics
    match div(5.0, 0.0).value() {
        Ok(value) => println!("Unexpected value: {value}"),
        Err(error) => println!("Access failed: {error}"),
    }

    match div(5.0, 0.0).expect("five should be divisible") {
        Ok(value) => println!("Unexpected value: {value}"),
        Err(error) => println!("Expectation failed: {error}"),
    }

    println!("\n=== Example Complete ===");
}
