//! Canonical, identity-compared keys.
//!
//! A [`Key`] is a cheap handle to an interned [`KeyData`]. Because every name is
//! interned once per kind, equality and hashing go by pointer rather than by
//! comparing the names.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::{InternError, KeyFactory};

/// A category of keys with its own isolated interning namespace.
///
/// Implementations are normally generated by [`define_key_kind!`](crate::define_key_kind),
/// which also provides the process-wide factory static.
pub trait KeyKind: Sized + 'static {
    /// Short label used in errors and logs, e.g. `"command"`.
    const LABEL: &'static str;

    /// Name of the key alias, used by `Debug`.
    const TYPE_NAME: &'static str;

    /// Access the process-wide factory for this kind.
    fn factory() -> &'static KeyFactory<Self>;
}

/// The interned payload behind a [`Key`].
#[derive(Debug, PartialEq, Eq)]
pub struct KeyData {
    name: Box<str>,
}

impl KeyData {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// The name this key was interned under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Canonical key of kind `K`.
pub struct Key<K: KeyKind> {
    data: Arc<KeyData>,
    kind: PhantomData<fn() -> K>,
}

impl<K: KeyKind> Key<K> {
    pub(crate) fn from_data(data: Arc<KeyData>) -> Self {
        Self {
            data,
            kind: PhantomData,
        }
    }

    /// Retrieve (or create) the interned key for `name` from the kind's
    /// process-wide factory.
    ///
    /// # Errors
    ///
    /// - [`InternError::EmptyName`] if `name` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use key_intern::CommandKey;
    ///
    /// let a = CommandKey::as_key("PaymentService").unwrap();
    /// let b = CommandKey::as_key("PaymentService").unwrap();
    /// assert!(CommandKey::ptr_eq(&a, &b));
    /// ```
    pub fn as_key(name: &str) -> Result<Self, InternError> {
        K::factory().as_key(name)
    }

    /// Number of distinct keys of this kind interned in the process.
    #[doc(hidden)]
    pub fn count() -> usize {
        K::factory().count()
    }

    /// The name this key was interned under.
    ///
    /// Two keys of the same kind have equal names exactly when they are the
    /// same instance.
    pub fn name(&self) -> &str {
        self.data.name()
    }

    /// The [`KeyKind::LABEL`] of this key's kind, e.g. `"command"`.
    pub fn kind(&self) -> &'static str {
        K::LABEL
    }

    /// Whether both handles point at the same interned instance.
    ///
    /// This is what `==` and `Hash` use; it never compares names.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.data, &b.data)
    }
}

impl<K: KeyKind> Clone for Key<K> {
    fn clone(&self) -> Self {
        Self::from_data(Arc::clone(&self.data))
    }
}

impl<K: KeyKind> PartialEq for Key<K> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<K: KeyKind> Eq for Key<K> {}

impl<K: KeyKind> Hash for Key<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.data).hash(state);
    }
}

impl<K: KeyKind> AsRef<str> for Key<K> {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl<K: KeyKind> fmt::Display for Key<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<K: KeyKind> fmt::Debug for Key<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::TYPE_NAME, self.name())
    }
}
