//! Domain types and pure logic for the Ludo language-learning backend.
//!
//! Nothing in this crate performs I/O. The `db` crate persists the
//! entities and the `api` crate exposes them over HTTP.

pub mod accounts;
pub mod error;
pub mod level;
pub mod progress;
pub mod quiz;
pub mod roles;
pub mod types;
