//! Shared domain and wire types for Parley.
//!
//! Pure data: the history snapshot model, the request/reply envelope, and
//! the error taxonomy. No I/O lives here.

pub mod error;
pub mod history;
pub mod wire;
