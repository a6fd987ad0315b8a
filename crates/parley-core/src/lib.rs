//! Core chat logic for Parley: the history store and the request handler.
//!
//! [`history::HistoryStore`] owns the append-only message log behind a
//! single mutex; [`handler::ChatHandler`] translates wire requests into
//! store operations. Everything here is synchronous and free of I/O, so
//! the transport layer decides the concurrency model.

pub mod handler;
pub mod history;
