//! Custom key kinds and a standalone registry.
//!
//! Demonstrates:
//! - Declaring a key kind with `define_key_kind!`
//! - Validating names before they are interned
//! - Observing registry events with a trace callback
//! - Using `InternRegistry` directly for non-key values
//!
//! Run with: `cargo run --example custom_kinds`

use key_intern::{define_key_kind, InternError, InternRegistry, KeyKind};
use std::sync::Arc;

define_key_kind!(
    /// Identifies a downstream dependency.
    pub DependencyKind, DependencyKey, "dependency"
);

#[derive(Debug)]
struct Endpoint {
    host: String,
    port: u16,
}

fn main() -> Result<(), InternError> {
    tracing_subscriber::fmt().init();

    println!("=== key-intern: Custom Kinds ===\n");

    // -------------------------------------------------------------------------
    // 1. Trace events for the dependency kind
    // -------------------------------------------------------------------------
    DependencyKind::factory().set_trace_callback(|event| println!("   [trace] {event}"));

    println!("1. Interning dependency keys...");
    let db = DependencyKey::as_key("postgres")?;
    let db_again = DependencyKey::as_key("postgres")?;
    println!("   same instance: {}", DependencyKey::ptr_eq(&db, &db_again));

    // -------------------------------------------------------------------------
    // 2. Validation on first use
    // -------------------------------------------------------------------------
    println!("\n2. Checked interning...");
    let checked = DependencyKind::factory().as_key_checked("billing api", |name| {
        if name.contains(char::is_whitespace) {
            Err("dependency names may not contain whitespace")
        } else {
            Ok(())
        }
    });
    match checked {
        Ok(key) => println!("   interned {key:?}"),
        Err(err) => println!("   rejected: {err}"),
    }

    DependencyKind::factory().clear_trace_callback();

    // -------------------------------------------------------------------------
    // 3. A registry of arbitrary values
    // -------------------------------------------------------------------------
    println!("\n3. Interning endpoints...");
    let endpoints: InternRegistry<String, Endpoint> = InternRegistry::with_capacity(4);

    let parse = |addr: &str| {
        let (host, port) = addr.split_once(':').unwrap_or((addr, "80"));
        Endpoint {
            host: host.to_string(),
            port: port.parse().unwrap_or(80),
        }
    };

    let a = endpoints.interned_value("cache.local:6379", parse);
    let b = endpoints.interned_value("cache.local:6379", parse);
    println!("   {}:{} shared: {}", a.host, a.port, Arc::ptr_eq(&a, &b));
    println!("   registry: {endpoints:?}");

    Ok(())
}
