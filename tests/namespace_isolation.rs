//! Integration tests for kind isolation.
//!
//! The same text interned through two kinds must produce unrelated keys, each
//! counted only by its own factory.

use key_intern::{
    define_key_kind, CollapserKey, CommandGroupKey, CommandKey, ThreadPoolKey,
};

#[test]
fn test_same_text_different_kinds() {
    let command = CommandKey::as_key("PaymentService").unwrap();
    let group = CommandGroupKey::as_key("PaymentService").unwrap();
    let pool = ThreadPoolKey::as_key("PaymentService").unwrap();
    let collapser = CollapserKey::as_key("PaymentService").unwrap();

    assert_eq!(command.name(), group.name());
    assert_eq!(group.name(), pool.name());
    assert_eq!(pool.name(), collapser.name());

    assert_eq!(command.kind(), "command");
    assert_eq!(group.kind(), "command_group");
    assert_eq!(pool.kind(), "thread_pool");
    assert_eq!(collapser.kind(), "collapser");
}

#[test]
fn test_counts_are_tracked_per_kind() {
    define_key_kind!(OrdersKind, OrdersKey, "orders");
    define_key_kind!(BillingKind, BillingKey, "billing");

    OrdersKey::as_key("X").unwrap();
    OrdersKey::as_key("Y").unwrap();
    BillingKey::as_key("X").unwrap();

    assert_eq!(OrdersKey::count(), 2);
    assert_eq!(BillingKey::count(), 1);
}

#[test]
fn test_kind_scoping() {
    mod module_a {
        use key_intern::define_key_kind;
        define_key_kind!(pub ScopedKind, ScopedKey, "scoped_a");

        pub fn key() -> ScopedKey {
            ScopedKey::as_key("shared").unwrap()
        }
    }

    mod module_b {
        use key_intern::define_key_kind;
        define_key_kind!(pub ScopedKind, ScopedKey, "scoped_b");

        pub fn key() -> ScopedKey {
            ScopedKey::as_key("shared").unwrap()
        }
    }

    let a = module_a::key();
    let b = module_b::key();

    assert_eq!(a.kind(), "scoped_a");
    assert_eq!(b.kind(), "scoped_b");
    assert_eq!(module_a::ScopedKey::count(), 1);
    assert_eq!(module_b::ScopedKey::count(), 1);
}
