use thiserror::Error;

/// Boxed error raised by a fallible key constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned when a key cannot be interned.
///
/// A failed lookup never leaves anything stored under the requested name.
#[derive(Debug, Error)]
pub enum InternError {
    /// The name was empty; it was rejected before any construction attempt.
    #[error("empty name is not a valid {kind} key")]
    EmptyName { kind: &'static str },

    /// A checked constructor refused the name.
    #[error("failed to construct {kind} key `{name}`: {source}")]
    Construction {
        kind: &'static str,
        name: String,
        #[source]
        source: BoxError,
    },
}

impl InternError {
    /// Key kind label the failing lookup was made against.
    pub fn kind(&self) -> &'static str {
        match self {
            InternError::EmptyName { kind } | InternError::Construction { kind, .. } => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_empty_name_display() {
        let err = InternError::EmptyName { kind: "command" };
        assert_eq!(err.to_string(), "empty name is not a valid command key");
        assert_eq!(err.kind(), "command");
    }

    #[test]
    fn test_construction_display_and_source() {
        let err = InternError::Construction {
            kind: "thread_pool",
            name: "io".into(),
            source: "name reserved".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to construct thread_pool key `io`: name reserved"
        );
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("name reserved"));
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &InternError::EmptyName { kind: "collapser" };
        assert_eq!(err.to_string(), "empty name is not a valid collapser key");
    }
}
