//! I/O-free API core for the ad pricing service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the three
//! read-only ad queries without touching the network (host-does-IO pattern).
//! The caller executes the actual HTTP round-trip, which keeps this crate
//! deterministic and testable.
//!
//! # Design
//! - `AdClient` holds only `base_url`.
//! - Each query is split into `build_*` (produces request) and `parse_*`
//!   (consumes response).
//! - Parse failures are `ResponseError` causes. Whoever runs the round-trip
//!   wraps them, together with transport failures, into the single
//!   `RequestFailed` kind using the query's `Operation` for context.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{AdClient, Operation};
pub use error::{RequestFailed, ResponseError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Ad, PopularAd};
