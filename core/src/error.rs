//! Error types for the ad API.
//!
//! # Design
//! Callers see exactly one failure kind, `RequestFailed`. It carries a
//! human-readable context naming the query and the text of the underlying
//! cause (transport error, unexpected status or malformed body). The cause
//! is kept for display but is not distinguished by kind.
//!
//! `ResponseError` is the cause produced by `AdClient::parse_*`; it is
//! folded into `RequestFailed` by whoever executes the round-trip.

use thiserror::Error;

use crate::client::Operation;

/// The single error kind surfaced by the API access layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: {cause}")]
pub struct RequestFailed {
    pub context: String,
    pub cause: String,
}

impl RequestFailed {
    pub fn new(operation: Operation, cause: impl std::fmt::Display) -> Self {
        Self {
            context: operation.failure_context(),
            cause: cause.to_string(),
        }
    }
}

/// Why a received response could not be turned into a typed result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body did not match the expected JSON shape.
    #[error("invalid response body: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn request_failed_keeps_context_and_cause() {
        let cause = ResponseError::Status {
            status: 503,
            body: "maintenance".to_string(),
        };
        let err = RequestFailed::new(Operation::AdsAboveCost(Decimal::new(1250, 2)), cause);
        assert_eq!(err.context, "failed to get ads costing more than 12.50");
        assert_eq!(err.cause, "HTTP 503: maintenance");
        assert_eq!(
            err.to_string(),
            "failed to get ads costing more than 12.50: HTTP 503: maintenance"
        );
    }
}
