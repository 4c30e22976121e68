use thiserror::Error;

/// Errors that can occur during message registry lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageRegistryError {
    /// Message name not found in registry
    #[error("Message name {name:?} not found in message registry")]
    UnknownMessageName { name: String },

    /// Message code not found in registry
    #[error("Message code {id} not found in message registry")]
    UnknownMessageId { id: u16 },

    /// A table declared the same name twice
    #[error("Message name {name:?} is declared more than once. Each name may map to a single code")]
    DuplicateMessageName { name: String },
}

/// Errors that can occur while reading or writing datagrams
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatagramError {
    /// Datagram ended before a complete field could be read (possible malformed or malicious data)
    #[error("Datagram truncated: needed {needed} bytes but only {remaining} remain (possible malformed or malicious data)")]
    Truncated { needed: usize, remaining: usize },

    /// Internal headers carry at most 255 recipient channels
    #[error("Datagram header has {count} recipients, at most 255 are allowed")]
    TooManyRecipients { count: usize },

    /// Uncertainty must be finite and non-negative to be encoded
    #[error("Clock uncertainty must be finite and non-negative to be encoded")]
    InvalidUncertainty,
}
