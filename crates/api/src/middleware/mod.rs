//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the learner identified by a JWT Bearer token.

pub mod auth;
