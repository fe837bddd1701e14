//! `tradeledger-api` — invocation boundary.
//!
//! The hosting runtime hands us a function name and positional string
//! arguments; this crate decodes them, routes to the registry or the
//! workflow, and shapes failures into the `{"Error": ...}` payload the
//! callers expect. No business rules live here.

pub mod dispatch;

pub use dispatch::{error_payload, Dispatcher, PEER_ADDRESS_KEY};
