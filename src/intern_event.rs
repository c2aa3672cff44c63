/// Events emitted by an [`InternRegistry`](crate::InternRegistry) during lookups.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use key_intern::InternEvent;
///
/// let event = InternEvent::Inserted { name: "PaymentService".to_string() };
/// assert_eq!(event.to_string(), "inserted { name: PaymentService }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternEvent {
    /// The name was already interned; the canonical instance was returned.
    Hit {
        /// The looked-up name
        name: String,
    },

    /// The name was unseen and the freshly constructed candidate was stored.
    Inserted {
        /// The newly interned name
        name: String,
    },

    /// Another caller stored an instance first; the local candidate was discarded.
    RaceLost {
        /// The contended name
        name: String,
    },

    /// The name was refused before any construction attempt.
    Rejected {
        /// The offending name
        name: String,
        /// Why the name was refused
        reason: &'static str,
    },
}

impl InternEvent {
    /// The name this event refers to.
    pub fn name(&self) -> &str {
        match self {
            InternEvent::Hit { name }
            | InternEvent::Inserted { name }
            | InternEvent::RaceLost { name }
            | InternEvent::Rejected { name, .. } => name,
        }
    }
}

impl std::fmt::Display for InternEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternEvent::Hit { name } => write!(f, "hit {{ name: {name} }}"),
            InternEvent::Inserted { name } => write!(f, "inserted {{ name: {name} }}"),
            InternEvent::RaceLost { name } => write!(f, "race_lost {{ name: {name} }}"),
            InternEvent::Rejected { name, reason } => {
                write!(f, "rejected {{ name: {name}, reason: {reason} }}")
            }
        }
    }
}
