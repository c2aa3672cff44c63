//! Built-in key kinds.

crate::define_key_kind!(
    /// A key to represent a command for monitoring, circuit-breakers, metrics
    /// publishing, caching and other such uses.
    pub CommandKind, CommandKey, "command"
);

crate::define_key_kind!(
    /// A group name for commands, used to group them together for reporting,
    /// alerting, dashboards or team/library ownership.
    pub CommandGroupKind, CommandGroupKey, "command_group"
);

crate::define_key_kind!(
    /// A key to represent a thread pool for monitoring, metrics publishing,
    /// caching and other such uses.
    pub ThreadPoolKind, ThreadPoolKey, "thread_pool"
);

crate::define_key_kind!(
    /// A key to represent a request collapser for monitoring, circuit-breakers,
    /// metrics publishing, caching and other such uses.
    pub CollapserKind, CollapserKey, "collapser"
);

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_command_key_counts() {
        let before = CommandKey::count();

        let a = CommandKey::as_key("KindsCountPayment").unwrap();
        let b = CommandKey::as_key("KindsCountPayment").unwrap();
        assert_eq!(a, b);
        assert_eq!(CommandKey::count(), before + 1);

        let c = CommandKey::as_key("KindsCountInventory").unwrap();
        assert_ne!(a, c);
        assert_eq!(CommandKey::count(), before + 2);
    }

    #[test]
    #[serial]
    fn test_labels() {
        assert_eq!(CommandKey::as_key("KindsLabel").unwrap().kind(), "command");
        assert_eq!(
            CommandGroupKey::as_key("KindsLabel").unwrap().kind(),
            "command_group"
        );
        assert_eq!(ThreadPoolKey::as_key("KindsLabel").unwrap().kind(), "thread_pool");
        assert_eq!(CollapserKey::as_key("KindsLabel").unwrap().kind(), "collapser");
    }
}
