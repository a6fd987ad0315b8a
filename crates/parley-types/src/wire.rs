//! Request/reply envelope for the newline-delimited JSON transport.
//!
//! One JSON object per line, `\n` terminated. The request kind is an
//! explicit tag the transport adapter pattern-matches on, rather than a
//! method name resolved by a registration mechanism.

use serde::{Deserialize, Serialize};

/// Upper bound on one request line, enforced by the server's read framing.
///
/// Caps per-connection buffering on the server; a request past this bound
/// is rejected and the connection closed, since the framing state beyond it
/// is unrecoverable. Replies are never bounded: they carry the full history,
/// which grows without limit.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// A client request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Append a message to the history and return the full post-append history.
    Post { sender: String, text: String },
    /// Return the current full history without posting.
    Fetch,
}

impl Request {
    /// Operation name for logging.
    pub fn op_name(&self) -> &'static str {
        match self {
            Request::Post { .. } => "post",
            Request::Fetch => "fetch",
        }
    }
}

/// A server reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    /// The full history after the operation, in store arrival order.
    History { messages: Vec<String> },
    /// The request could not be decoded. The store and handler themselves
    /// have no failure modes; this only surfaces transport-level problems.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_request_tag() {
        let request = Request::Post {
            sender: "alice".to_string(),
            text: "hi".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"op\":\"post\""));
        assert!(json.contains("\"sender\":\"alice\""));
    }

    #[test]
    fn test_fetch_request_decodes_without_payload() {
        let request: Request = serde_json::from_str(r#"{"op":"fetch"}"#).unwrap();
        assert_eq!(request, Request::Fetch);
    }

    #[test]
    fn test_history_response_tag() {
        let response = Response::History {
            messages: vec!["alice: hi".to_string()],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"history\""));
        let parsed: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_unknown_op_rejected() {
        let result = serde_json::from_str::<Request>(r#"{"op":"shout","text":"HI"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_op_name() {
        assert_eq!(Request::Fetch.op_name(), "fetch");
        let post = Request::Post {
            sender: String::new(),
            text: String::new(),
        };
        assert_eq!(post.op_name(), "post");
    }
}
