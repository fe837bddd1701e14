//! `tradeledger-auth` — participant roles and the authorization predicate.
//!
//! This crate is intentionally decoupled from storage and transport: callers
//! arrive as plain `User` values and authorization is a pure role check.

pub mod authorize;
pub mod role;
pub mod user;

pub use authorize::{authorize, require_role};
pub use role::Role;
pub use user::User;
