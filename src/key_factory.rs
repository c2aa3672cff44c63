//! Per-kind factories binding a key constructor to its own registry.

use std::fmt;
use std::marker::PhantomData;

use tracing::warn;

use crate::{BoxError, InternError, InternEvent, InternRegistry, Key, KeyData, KeyKind};

/// Hands out canonical [`Key`]s of kind `K`.
///
/// Every factory owns an isolated [`InternRegistry`], so the same text interned
/// through two different kinds yields two unrelated keys.
///
/// There is exactly one factory per kind, reached through [`KeyKind::factory`].
/// Factories cannot be built outside this crate: a second factory for the same
/// kind would hand out keys that never compare equal to the canonical ones.
pub struct KeyFactory<K: KeyKind> {
    registry: InternRegistry<String, KeyData>,
    kind: PhantomData<fn() -> K>,
}

impl<K: KeyKind> KeyFactory<K> {
    /// Create an empty factory. Outside of tests this is only called once per
    /// kind, by the static generated in [`define_key_kind!`](crate::define_key_kind).
    pub(crate) fn new() -> Self {
        Self {
            registry: InternRegistry::new(),
            kind: PhantomData,
        }
    }

    /// Retrieve (or create) the interned key for `name`.
    ///
    /// # Errors
    ///
    /// - [`InternError::EmptyName`] if `name` is empty; nothing is constructed
    pub fn as_key(&self, name: &str) -> Result<Key<K>, InternError> {
        self.check_name(name)?;
        let data = self.registry.interned_value(name, KeyData::new);
        Ok(Key::from_data(data))
    }

    /// Like [`as_key`](Self::as_key), but runs `check` before a new name is
    /// interned. Names that fail the check are never stored; names that are
    /// already interned are returned without running it.
    ///
    /// # Errors
    ///
    /// - [`InternError::EmptyName`] if `name` is empty
    /// - [`InternError::Construction`] wrapping the error returned by `check`
    pub fn as_key_checked<E>(
        &self,
        name: &str,
        check: impl FnOnce(&str) -> Result<(), E>,
    ) -> Result<Key<K>, InternError>
    where
        E: Into<BoxError>,
    {
        self.check_name(name)?;
        let data = self.registry.try_interned_value(name, |name| {
            check(name)
                .map(|()| KeyData::new(name))
                .map_err(|source| InternError::Construction {
                    kind: K::LABEL,
                    name: name.to_string(),
                    source: source.into(),
                })
        })?;
        Ok(Key::from_data(data))
    }

    fn check_name(&self, name: &str) -> Result<(), InternError> {
        if name.is_empty() {
            warn!(kind = K::LABEL, "rejected empty key name");
            self.registry.emit_event(|| InternEvent::Rejected {
                name: String::new(),
                reason: "empty name",
            });
            return Err(InternError::EmptyName { kind: K::LABEL });
        }
        Ok(())
    }

    /// Number of distinct keys interned by this factory.
    #[doc(hidden)]
    pub fn count(&self) -> usize {
        self.registry.size()
    }

    /// Check whether `name` has already been interned for this kind.
    ///
    /// Never creates a key.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Set a tracing callback on this factory's registry.
    ///
    /// See [`InternRegistry::set_trace_callback`] for when it is invoked.
    pub fn set_trace_callback(&self, callback: impl Fn(&InternEvent) + Send + Sync + 'static) {
        self.registry.set_trace_callback(callback);
    }

    /// Clear the tracing callback.
    ///
    /// Already interned keys are not affected.
    pub fn clear_trace_callback(&self) {
        self.registry.clear_trace_callback();
    }
}

impl<K: KeyKind> fmt::Debug for KeyFactory<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyFactory")
            .field("kind", &K::LABEL)
            .field("count", &self.count())
            .finish()
    }
}
