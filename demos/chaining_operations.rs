//! Chaining Operations
//!
//! This example demonstrates composing fallible computations with
//! combinators instead of branching on every step.
//!
//! Key concepts:
//! - Recovering from an error with or_else
//! - Continuing a successful pipeline with and_then
//! - Observing a pipeline with inspect
//!
//! Run with: cargo run --example chaining_operations

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
    println!("=== Chaining Operations Example ===\n");

    // Recover from a failed division with or_else
    let result1 = div(5.0, 0.0).or_else(|error| {
        println!("Handling error: {error}");
        Outcome::<f64, String>::success(f64::INFINITY)
    });
    println!("Result 1: {result1}");

    // Continue a successful division with and_then
    let result2 = div(10.0, 2.0).and_then(|value| {
        println!("Handling success: {value}");
        div(value, 2.0)
    });
    println!("Result 2: {result2}");

    // Tap the pipeline without changing it
    let result3 = div(9.0, 3.0).inspect(|o| {
        println!("Observed state: {}", o.state());
    });
    println!("Result 3: {result3}");

    println!("\n=== Example Complete ===");
}
