//! Shared response envelope types for API handlers.
//!
//! Successful API responses use a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

pub const STATUS_SUCCESS: &str = "success";

/// Acknowledgement payload for write endpoints: `{ "status": "success" }`.
#[derive(Debug, Serialize)]
pub struct StatusAck {
    pub status: &'static str,
}

impl StatusAck {
    pub fn success() -> Self {
        Self {
            status: STATUS_SUCCESS,
        }
    }
}
