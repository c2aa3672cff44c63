//! Basic usage example for key-intern.
//!
//! Demonstrates:
//! - Interning command, group and thread-pool keys
//! - Identity comparison of keys obtained at different call sites
//! - Using keys as map keys in a per-command counter
//! - Debug logging of registry activity through `tracing`
//!
//! Run with: `RUST_LOG=key_intern=trace cargo run --example basic_usage`

use key_intern::{CommandGroupKey, CommandKey, InternError, ThreadPoolKey};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), InternError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== key-intern: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Intern keys
    // -------------------------------------------------------------------------
    let payment = CommandKey::as_key("PaymentService")?;
    let payment_again = CommandKey::as_key("PaymentService")?;
    let inventory = CommandKey::as_key("InventoryService")?;

    println!("1. Interned {payment:?} twice and {inventory:?} once");
    println!(
        "   same instance: {}",
        CommandKey::ptr_eq(&payment, &payment_again)
    );
    println!("   command keys in process: {}", CommandKey::count());

    // -------------------------------------------------------------------------
    // 2. Kinds are isolated
    // -------------------------------------------------------------------------
    let group = CommandGroupKey::as_key("PaymentService")?;
    let pool = ThreadPoolKey::as_key("PaymentService")?;

    println!("\n2. Same text, different kinds:");
    println!("   {group:?} kind={}", group.kind());
    println!("   {pool:?} kind={}", pool.kind());

    // -------------------------------------------------------------------------
    // 3. Keys as map keys
    // -------------------------------------------------------------------------
    let mut failures: HashMap<CommandKey, u32> = HashMap::new();
    for name in ["PaymentService", "InventoryService", "PaymentService"] {
        *failures.entry(CommandKey::as_key(name)?).or_default() += 1;
    }

    println!("\n3. Failure counters:");
    for (key, count) in &failures {
        println!("   {key}: {count}");
    }

    // -------------------------------------------------------------------------
    // 4. Invalid names
    // -------------------------------------------------------------------------
    match CommandKey::as_key("") {
        Ok(key) => println!("\n4. Unexpectedly interned {key:?}"),
        Err(err) => println!("\n4. Rejected: {err}"),
    }

    Ok(())
}
