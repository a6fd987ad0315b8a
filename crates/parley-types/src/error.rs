use thiserror::Error;

/// Errors crossing the wire boundary.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection closed by peer")]
    ConnectionClosed,

    #[error("line exceeds {0} bytes")]
    LineTooLong(usize),
}

/// Client-side call failure taxonomy.
///
/// `Connect` is transient: dialing is retried with backoff before it is
/// reported. `Call` means the in-flight request was abandoned; the caller
/// discards the connection and re-establishes before the next call.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("call failed: {0}")]
    Call(#[from] WireError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_error_display() {
        let err = WireError::LineTooLong(65536);
        assert_eq!(err.to_string(), "line exceeds 65536 bytes");
    }

    #[test]
    fn test_call_error_wraps_wire_error() {
        let err = CallError::from(WireError::ConnectionClosed);
        assert_eq!(err.to_string(), "call failed: connection closed by peer");
    }
}
