//! Data Transfer Objects for the HTTP API.
//!
//! The wire contract uses PascalCase field names (`Success`, `Message`,
//! `Data`, `Count`), kept for compatibility with existing clients of the
//! counter service.

use serde::{Deserialize, Serialize};

/// The counter payload: `{"Count": <n>}`.
///
/// A missing `Count` field deserializes to 0, matching the historical
/// behavior of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CounterDto {
    #[serde(default)]
    pub count: i64,
}

/// Uniform JSON envelope returned by every data-bearing endpoint.
///
/// `Data` is always present in the serialized form, `null` when no payload
/// accompanies the response (successful writes, errors).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<CounterDto>,
}

impl ApiResponse {
    /// Successful response carrying the counter value.
    pub fn with_counter(count: i64) -> Self {
        Self {
            success: true,
            message: String::new(),
            data: Some(CounterDto { count }),
        }
    }

    /// Successful response without a payload.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: String::new(),
            data: None,
        }
    }

    /// Failed response carrying a human-readable message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
