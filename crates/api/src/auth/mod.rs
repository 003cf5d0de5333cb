//! Identity primitives: who is calling and how they prove it.
//!
//! - [`password`] -- Argon2id hashing and the minimum-length policy.
//! - [`jwt`] -- HS256 access tokens carrying the learner's id, name and role.

pub mod jwt;
pub mod password;
