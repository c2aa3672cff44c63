//! # Key Intern
//!
//! Canonical, singleton-per-name identity keys for resilience and infrastructure code.
//!
//! Circuit breakers, metrics publishers and caches key their own maps by a named
//! entity (a command, a command group, a thread pool). This crate hands out one
//! shared instance per name and kind, so those maps can compare keys by identity
//! and the process never holds more than one copy of a given key.
//!
//! ## Quick Start
//!
//! ```rust
//! use key_intern::{CommandGroupKey, CommandKey};
//!
//! let a = CommandKey::as_key("PaymentService").unwrap();
//! let b = CommandKey::as_key("PaymentService").unwrap();
//! assert!(CommandKey::ptr_eq(&a, &b));
//!
//! // Kinds never share a namespace.
//! let group = CommandGroupKey::as_key("PaymentService").unwrap();
//! assert_eq!(group.name(), a.name());
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: lookups of interned names take a shard read lock, and the
//!   callback slot is only read while a trace callback is installed
//! - **Race-free identity**: concurrent first access converges on one instance
//! - **Isolated kinds**: every kind owns its own registry
//! - **Tracing support**: `tracing` spans plus an optional per-registry event callback
//!
//! ## Main Items
//!
//! - [`InternRegistry`] - The generic get-or-create registry
//! - [`KeyFactory`] - Binds a key kind to its own registry
//! - [`Key`] - Canonical key handle compared by identity
//! - [`define_key_kind!`] - Declare a new key kind with a process-wide factory
//! - [`CommandKey`], [`CommandGroupKey`], [`ThreadPoolKey`], [`CollapserKey`] - Built-in kinds

mod intern_error;
mod intern_event;
mod intern_registry;
mod key;
mod key_factory;
mod kinds;
mod macros;

pub use intern_error::{BoxError, InternError};
pub use intern_event::InternEvent;
pub use intern_registry::{InternRegistry, TraceCallback};
pub use key::{Key, KeyData, KeyKind};
pub use key_factory::KeyFactory;
pub use kinds::{
    CollapserKey, CollapserKind, CommandGroupKey, CommandGroupKind, CommandKey, CommandKind,
    ThreadPoolKey, ThreadPoolKind,
};

#[doc(hidden)]
pub mod __private {
    //! Support items for [`define_key_kind!`](crate::define_key_kind). Not public API.

    use crate::{KeyFactory, KeyKind};

    /// Builds the single factory behind a kind's `LazyLock` static.
    pub fn kind_factory<K: KeyKind>() -> KeyFactory<K> {
        KeyFactory::new()
    }
}
