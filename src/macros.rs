//! Macros for declaring key kinds.

/// Declares a key kind with its own process-wide interning namespace.
///
/// The macro generates:
/// - An uninhabited marker type implementing [`KeyKind`](crate::KeyKind)
/// - A hidden `LazyLock<KeyFactory<_>>` static backing that kind, the only
///   factory that kind will ever have
/// - A `Key<_>` type alias used as the public key type
///
/// # Examples
///
/// ```rust
/// use key_intern::define_key_kind;
///
/// define_key_kind!(
///     /// Identifies a tenant.
///     pub TenantKind, TenantKey, "tenant"
/// );
///
/// let a = TenantKey::as_key("acme").unwrap();
/// let b = TenantKey::as_key("acme").unwrap();
/// assert!(TenantKey::ptr_eq(&a, &b));
/// assert_eq!(a.kind(), "tenant");
/// ```
///
/// # Isolated Namespaces
///
/// Each invocation owns a separate factory, so equal names never collide:
///
/// ```rust
/// use key_intern::define_key_kind;
///
/// define_key_kind!(RegionKind, RegionKey, "region");
/// define_key_kind!(ZoneKind, ZoneKey, "zone");
///
/// let region = RegionKey::as_key("eu-west").unwrap();
/// let zone = ZoneKey::as_key("eu-west").unwrap();
///
/// assert_eq!(region.name(), zone.name());
/// assert_eq!(RegionKey::count(), 1);
/// assert_eq!(ZoneKey::count(), 1);
/// ```
#[macro_export]
macro_rules! define_key_kind {
    ($(#[$meta:meta])* $vis:vis $marker:ident, $alias:ident, $label:literal) => {
        #[doc = concat!("Kind tag for [`", stringify!($alias), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $marker {}

        impl $crate::KeyKind for $marker {
            const LABEL: &'static str = $label;
            const TYPE_NAME: &'static str = stringify!($alias);

            fn factory() -> &'static $crate::KeyFactory<Self> {
                // Interned keys live for the rest of the process; there is no teardown.
                static FACTORY: ::std::sync::LazyLock<$crate::KeyFactory<$marker>> =
                    ::std::sync::LazyLock::new($crate::__private::kind_factory::<$marker>);
                &FACTORY
            }
        }

        $(#[$meta])*
        $vis type $alias = $crate::Key<$marker>;
    };
}
