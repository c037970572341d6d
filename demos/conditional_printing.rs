//! Conditional printing example
//!
//! Demonstrates environment gating, condition predicates and `when`.
//!
//! Run with: cargo run --example conditional_printing

use console_print::prelude::*;
use serde_json::Value;

fn main() {
    println!("=== Console Print - Conditional Printing Example ===\n");

    println!("1. Environment gating (ambient environment: production):");
    let print = Print::builder().ambient_environment("production").build();
    print.info(args![
        "Shown: tagged for production",
        PrintConfig::new().environment(Environment::Production)
    ]);
    print.info(args![
        "Hidden: tagged for development",
        PrintConfig::new().environment(Environment::Development)
    ]);
    print.info(args!["Shown: untagged calls are never gated"]);

    println!("\n2. Condition predicates:");
    let long_only = |messages: &[Value]| {
        messages
            .first()
            .and_then(Value::as_str)
            .is_some_and(|s| s.len() > 10)
    };
    print.error(args!["boom", FormatOptions::new().condition(long_only)]);
    print.error(args![
        "Shown: long enough to pass",
        FormatOptions::new().condition(long_only)
    ]);

    println!("\n3. when:");
    let retries = 3;
    print.when(retries > 2, args!["Shown: too many retries", retries]);
    print.when(retries > 5, args!["Hidden: condition is false"]);
    print.when(
        true,
        args![
            Argument::callback(|| println!("   first callback ran")),
            Argument::callback(|| println!("   second callback never runs")),
        ],
    );

    println!("\n4. Metrics:");
    let metrics = print.metrics();
    println!("   printed: {}", metrics.printed());
    println!("   suppressed by environment: {}", metrics.suppressed_by_environment());
    println!("   suppressed by condition: {}", metrics.suppressed_by_condition());

    println!("\n=== Example completed successfully! ===");
}
