//! Concurrent get-or-create map from names to canonical, shared instances.
//!
//! The registry is insert-only: once a name is interned its instance is never
//! replaced or removed, so every caller that asks for the same name observes the
//! same `Arc<V>`.
//!
//! # Examples
//!
//! ```
//! use key_intern::InternRegistry;
//! use std::sync::Arc;
//!
//! let registry: InternRegistry<String, String> = InternRegistry::new();
//!
//! let a = registry.interned_value("PaymentService", |name| name.to_uppercase());
//! let b = registry.interned_value("PaymentService", |name| name.to_uppercase());
//!
//! assert!(Arc::ptr_eq(&a, &b));
//! assert_eq!(registry.size(), 1);
//! ```

use std::{
    borrow::Borrow,
    convert::Infallible,
    fmt,
    hash::Hash,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, RwLock,
    },
};

use dashmap::{mapref::entry::Entry, DashMap};
use tracing::{debug, trace};

use crate::InternEvent;

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to an `InternEvent` every time the registry
/// resolves a lookup. It must be thread-safe because registries are shared.
pub type TraceCallback = dyn Fn(&InternEvent) + Send + Sync + 'static;

/// Thread-safe get-or-create registry of canonical instances.
///
/// Lookups of names that are already present only take a shard read lock, plus a
/// read lock on the callback slot while a trace callback is installed. A miss
/// builds a candidate with no lock held, then stores it with an insert-if-absent
/// on the owning shard. If another caller stored an instance in the meantime the
/// candidate is dropped and the stored instance is returned instead.
pub struct InternRegistry<K, V> {
    entries: DashMap<K, Arc<V>>,
    traced: AtomicBool,
    trace: RwLock<Option<Arc<TraceCallback>>>,
}

impl<K: Eq + Hash, V> InternRegistry<K, V> {
    /// Create an empty registry with no trace callback.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            traced: AtomicBool::new(false),
            trace: RwLock::new(None),
        }
    }

    /// Create a registry pre-sized for `capacity` distinct names.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            traced: AtomicBool::new(false),
            trace: RwLock::new(None),
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Set a tracing callback for registry lookups.
    ///
    /// The callback is invoked after the lookup has finished and with no map lock
    /// held, so it may call back into this registry.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the callback slot is poisoned, the inner value is recovered and replaced.
    pub fn set_trace_callback(&self, callback: impl Fn(&InternEvent) + Send + Sync + 'static) {
        let mut guard = self.trace.write().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
        self.traced.store(true, Ordering::Release);
    }

    /// Clear the tracing callback.
    ///
    /// Lookups stop touching the callback slot once this returns. Interned
    /// values are not affected.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the callback slot is poisoned, the inner value is recovered and cleared.
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.write().unwrap_or_else(|p| p.into_inner());
        *guard = None;
        self.traced.store(false, Ordering::Release);
    }

    /// Emit an event to the current callback, building it only if one is set.
    ///
    /// Without a callback this is a single atomic load.
    pub(crate) fn emit_event(&self, event: impl FnOnce() -> InternEvent) {
        if !self.traced.load(Ordering::Acquire) {
            return;
        }
        let callback = self.trace.read().unwrap_or_else(|p| p.into_inner()).clone();
        if let Some(callback) = callback {
            callback(&event());
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Interning
    // -------------------------------------------------------------------------------------------------

    /// Return the canonical instance for `name`, constructing it on first use.
    ///
    /// Under contention `constructor` may run more than once for the same name,
    /// but only one result is ever stored and returned. It must be cheap and free
    /// of observable side effects.
    pub fn interned_value<Q, F>(&self, name: &Q, constructor: F) -> Arc<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + fmt::Display + ?Sized,
        F: FnOnce(&Q) -> V,
    {
        match self.try_interned_value(name, |name| Ok::<_, Infallible>(constructor(name))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`interned_value`](Self::interned_value).
    ///
    /// An error from `constructor` is returned unchanged and nothing is stored
    /// under `name`, so a later call may retry.
    pub fn try_interned_value<Q, F, E>(&self, name: &Q, constructor: F) -> Result<Arc<V>, E>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + fmt::Display + ?Sized,
        F: FnOnce(&Q) -> Result<V, E>,
    {
        if let Some(existing) = self.get(name) {
            trace!(%name, "interned value hit");
            self.emit_event(|| InternEvent::Hit {
                name: name.to_string(),
            });
            return Ok(existing);
        }

        let candidate = Arc::new(constructor(name)?);

        let (value, inserted) = match self.entries.entry(name.to_owned()) {
            Entry::Occupied(occupied) => (Arc::clone(occupied.get()), false),
            Entry::Vacant(vacant) => {
                vacant.insert(Arc::clone(&candidate));
                (candidate, true)
            }
        };

        if inserted {
            debug!(%name, "interned new value");
            self.emit_event(|| InternEvent::Inserted {
                name: name.to_string(),
            });
        } else {
            debug!(%name, "lost interning race, discarding candidate");
            self.emit_event(|| InternEvent::RaceLost {
                name: name.to_string(),
            });
        }

        Ok(value)
    }

    /// Look up an already interned instance without creating one.
    pub fn get<Q>(&self, name: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Check whether `name` has been interned. Never constructs a value.
    pub fn contains<Q>(&self, name: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(name)
    }

    /// Number of distinct names interned so far.
    ///
    /// Not linearizable with concurrent inserts; it is a reasonably current count.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Whether no name has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the interned names, in no particular order.
    pub fn names(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }
}

impl<K: Eq + Hash, V> Default for InternRegistry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> fmt::Debug for InternRegistry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternRegistry")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
