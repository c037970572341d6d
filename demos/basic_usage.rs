//! Basic printing example
//!
//! Demonstrates the per-level facade, prefixes, facade defaults and debug
//! extras, all written to the terminal.
//!
//! Run with: cargo run --example basic_usage

use console_print::prelude::*;
use console_print::{debug, info};
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Console Print - Basic Usage Example ===\n");

    let print = Print::builder().without_ambient_environment().build();

    println!("1. Printing on every level:");
    print.log(args!["This is a log message"]);
    print.info(args!["This is an info message"]);
    print.warn(args!["This is a warning message"]);
    print.error(args!["This is an error message"]);
    print.debug(args!["This is a debug message"]);

    println!("\n2. Prefixes:");
    print.info(args![
        "Server listening on port",
        8080,
        FormatOptions::new()
            .show_type(true)
            .show_timestamp(true)
            .show_caller_info(true)
    ]);
    info!(print, "Same call through the macro", FormatOptions::new().show_type(true));

    println!("\n3. Facade defaults:");
    let dev = Print::builder()
        .environment(Environment::Development)
        .options(
            FormatOptions::new()
                .show_environment_type(true)
                .show_type(true)
                .color(Color::Cyan),
        )
        .ambient_environment("development")
        .build();
    dev.log(args!["Development build"]);
    dev.warn(args!["Call options win", FormatOptions::new().color(Color::Green)]);

    println!("\n4. Configuration from JSON:");
    let config = PrintConfig::from_json(
        r#"{"logLevel":"info","options":{"showType":true,"styles":"font-weight: bold"}}"#,
    )?;
    let configured = Print::builder()
        .defaults(config)
        .without_ambient_environment()
        .build();
    configured.call(args!["Routed to the info channel"]);

    println!("\n5. Debug extras:");
    debug!(
        print,
        "Cache state",
        FormatOptions::new()
            .prefix_message("cache")
            .context_data(&json!({ "hits": 42, "misses": 3 }))
            .show_caller_info(true)
    );

    println!("\n6. Metrics:");
    let metrics = print.metrics();
    println!("   printed: {}", metrics.printed());
    println!("   suppressed: {}", metrics.suppressed());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
