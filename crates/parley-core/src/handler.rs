//! Request handler translating wire requests into history store calls.

use std::sync::Arc;

use tracing::debug;

use parley_types::history::{Snapshot, format_entry};
use parley_types::wire::{Request, Response};

use crate::history::HistoryStore;

/// Exposes the two chat operations backed by a shared [`HistoryStore`].
///
/// The store is an explicitly owned handle passed in at construction, not
/// ambient global state. Each call is a single atomic step: it either
/// returns a complete snapshot or does not return at all; there are no
/// intermediate states and no failure modes at this layer.
pub struct ChatHandler {
    store: Arc<HistoryStore>,
}

impl ChatHandler {
    /// Create a handler over the given store.
    pub fn new(store: Arc<HistoryStore>) -> Self {
        Self { store }
    }

    /// Format `"<sender>: <text>"`, append it, and return the resulting snapshot.
    pub fn post(&self, sender: &str, text: &str) -> Snapshot {
        let snapshot = self.store.append(format_entry(sender, text));
        debug!(entries = snapshot.len(), "message appended");
        snapshot
    }

    /// Return the current snapshot without posting.
    pub fn fetch(&self) -> Snapshot {
        self.store.read()
    }

    /// Dispatch a decoded request envelope to the matching operation.
    pub fn handle(&self, request: Request) -> Response {
        let snapshot = match request {
            Request::Post { sender, text } => self.post(&sender, &text),
            Request::Fetch => self.fetch(),
        };
        Response::History {
            messages: snapshot.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> ChatHandler {
        ChatHandler::new(Arc::new(HistoryStore::new()))
    }

    #[test]
    fn test_fetch_on_empty_history() {
        assert!(handler().fetch().is_empty());
    }

    #[test]
    fn test_post_formats_entry() {
        let handler = handler();
        let snapshot = handler.post("alice", "hi");
        assert_eq!(snapshot.as_slice(), ["alice: hi"]);
    }

    #[test]
    fn test_post_then_fetch_end_to_end() {
        let handler = handler();
        handler.post("alice", "hello");
        handler.post("bob", "hi");
        assert_eq!(handler.fetch().as_slice(), ["alice: hello", "bob: hi"]);
    }

    #[test]
    fn test_fetch_snapshot_unchanged_by_later_post() {
        let handler = handler();
        let snapshot = handler.fetch();
        handler.post("alice", "hi");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_handle_dispatches_post() {
        let handler = handler();
        let response = handler.handle(Request::Post {
            sender: "alice".to_string(),
            text: "hi".to_string(),
        });
        assert_eq!(
            response,
            Response::History {
                messages: vec!["alice: hi".to_string()],
            }
        );
    }

    #[test]
    fn test_handle_dispatches_fetch() {
        let handler = handler();
        handler.post("a", "1");
        let response = handler.handle(Request::Fetch);
        assert_eq!(
            response,
            Response::History {
                messages: vec!["a: 1".to_string()],
            }
        );
    }

    #[test]
    fn test_concurrent_posts_keep_both_entries() {
        let handler = Arc::new(handler());

        std::thread::scope(|scope| {
            let a = Arc::clone(&handler);
            let b = Arc::clone(&handler);
            scope.spawn(move || a.post("a", "1"));
            scope.spawn(move || b.post("b", "2"));
        });

        let snapshot = handler.fetch();
        assert_eq!(snapshot.len(), 2);
        let entries = snapshot.as_slice();
        assert!(entries.contains(&"a: 1".to_string()));
        assert!(entries.contains(&"b: 2".to_string()));
    }
}
