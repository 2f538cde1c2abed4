//! Error types shared by every stage of the poll cycle
//!
//! One closed enumeration covers fetching, validation, interpretation,
//! delivery and startup configuration. Each variant maps to a machine-readable
//! [`ErrorKind`] so the poll loop can decide how to react without matching on
//! message text.

use thiserror::Error;

/// Result type alias for homework status operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while polling and notifying
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Required configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Status API answered with a non-success status code
    ///
    /// The body is kept for logs; it is not part of the display text, which
    /// is what gets reported to the user.
    #[error("Endpoint unavailable (status {status})")]
    RemoteUnavailable {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the API
        body: String,
    },

    /// Request never produced a response (refused, timed out, DNS)
    #[error("Request failed: {0}")]
    Transport(String),

    /// Response body is not parseable JSON
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Response is JSON but does not have the expected shape
    #[error("Unexpected response shape: {0}")]
    Schema(String),

    /// Homework status code outside the documented set
    #[error("Undocumented homework status: {0}")]
    UnknownStatus(String),

    /// Messaging channel rejected the bot credentials
    #[error("Messaging channel rejected credentials: {0}")]
    Unauthorized(String),

    /// Message could not be delivered
    #[error("Message delivery failed: {0}")]
    Delivery(String),
}

/// Machine-readable classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Fatal at startup, never raised inside the loop
    Fatal,
    /// Network or remote-side failure while fetching
    Transport,
    /// Response content could not be turned into a notification
    Data,
    /// Notification could not be sent
    Delivery,
}

impl Error {
    pub fn remote_unavailable(status: u16, body: impl Into<String>) -> Self {
        Self::RemoteUnavailable {
            status,
            body: body.into(),
        }
    }

    /// Classifies this error for the poll loop
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Fatal,
            Self::RemoteUnavailable { .. } | Self::Transport(_) => ErrorKind::Transport,
            Self::MalformedResponse(_) | Self::Schema(_) | Self::UnknownStatus(_) => {
                ErrorKind::Data
            }
            Self::Unauthorized(_) | Self::Delivery(_) => ErrorKind::Delivery,
        }
    }

    /// Check if this error came from the messaging channel
    pub fn is_delivery(&self) -> bool {
        self.kind() == ErrorKind::Delivery
    }

    /// Check if this error must stop the process
    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Fatal
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Fatal => write!(f, "fatal"),
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Data => write!(f, "data"),
            ErrorKind::Delivery => write!(f, "delivery"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::Config("x".into()).kind(), ErrorKind::Fatal);
        assert_eq!(
            Error::remote_unavailable(503, "down").kind(),
            ErrorKind::Transport
        );
        assert_eq!(Error::Transport("timeout".into()).kind(), ErrorKind::Transport);
        assert_eq!(Error::Schema("no key".into()).kind(), ErrorKind::Data);
        assert_eq!(Error::UnknownStatus("lost".into()).kind(), ErrorKind::Data);
        assert!(Error::Unauthorized("bad token".into()).is_delivery());
        assert!(Error::Delivery("chat not found".into()).is_delivery());
        assert!(Error::Config("missing".into()).is_fatal());
        assert!(!Error::Transport("refused".into()).is_fatal());
    }

    #[test]
    fn test_display_omits_response_body() {
        let err = Error::remote_unavailable(500, "oops");
        assert_eq!(err.to_string(), "Endpoint unavailable (status 500)");

        let err = Error::UnknownStatus("on_hold".into());
        assert_eq!(err.to_string(), "Undocumented homework status: on_hold");
    }
}
