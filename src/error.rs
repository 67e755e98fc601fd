//! Crate-level error types
//!
//! Almost nothing in this crate is fatal: transport failures are logged and
//! reported to the diagnostic sink, bad inbound payloads are discarded, and
//! animation cancellation is normal termination. What remains is the small
//! set of errors a caller can actually act on.

pub use crate::color::codec::DecodeError;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The controller's event loop has shut down
    #[error("controller is no longer running")]
    ControllerClosed,

    /// An inbound payload could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A transport implementation reported a failure
    #[error("transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::ControllerClosed.to_string(),
            "controller is no longer running"
        );
        assert_eq!(
            Error::Transport("timed out".into()).to_string(),
            "transport error: timed out"
        );
    }

    #[test]
    fn test_decode_error_converts() {
        let decode = crate::color::codec::decode(b"[]").unwrap_err();
        let error: Error = decode.into();
        assert!(matches!(error, Error::Decode(_)));
    }
}
