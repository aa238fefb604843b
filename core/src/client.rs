//! Stateless HTTP request builder and response parser for the ad API.
//!
//! # Design
//! `AdClient` holds only a `base_url` and carries no mutable state between
//! calls. Each query is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ResponseError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Ad, PopularAd};

/// The three queries the ad API answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AverageCost,
    AdsAboveCost(Decimal),
    MostPopularAds,
}

impl Operation {
    /// Context attached to a `RequestFailed` for this query.
    pub fn failure_context(&self) -> String {
        match self {
            Operation::AverageCost => "failed to get the average ad cost".to_string(),
            Operation::AdsAboveCost(threshold) => {
                format!("failed to get ads costing more than {threshold}")
            }
            Operation::MostPopularAds => "failed to get the most popular ads".to_string(),
        }
    }
}

/// A bare JSON number read as an exact decimal.
#[derive(Deserialize)]
struct BareDecimal(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

/// Synchronous, stateless client for the ad API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct AdClient {
    base_url: String,
}

impl AdClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request for `operation`.
    pub fn build(&self, operation: Operation) -> HttpRequest {
        match operation {
            Operation::AverageCost => self.build_average_cost(),
            Operation::AdsAboveCost(threshold) => self.build_ads_above_cost(threshold),
            Operation::MostPopularAds => self.build_most_popular_ads(),
        }
    }

    pub fn build_average_cost(&self) -> HttpRequest {
        self.get("Ad/average-cost")
    }

    /// The threshold is written in invariant form: `.` separator, no
    /// grouping, scale preserved (`12.50` stays `12.50`).
    pub fn build_ads_above_cost(&self, threshold: Decimal) -> HttpRequest {
        self.get(&format!("Ad/ads-above-cost/{threshold}"))
    }

    pub fn build_most_popular_ads(&self) -> HttpRequest {
        self.get("Ad/most-popular-ads")
    }

    pub fn parse_average_cost(&self, response: HttpResponse) -> Result<Decimal, ResponseError> {
        parse_json::<BareDecimal>(response).map(|BareDecimal(cost)| cost)
    }

    pub fn parse_ads_above_cost(&self, response: HttpResponse) -> Result<Vec<Ad>, ResponseError> {
        parse_json(response)
    }

    pub fn parse_most_popular_ads(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<PopularAd>, ResponseError> {
        parse_json(response)
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{path}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

/// Map non-2xx status codes to `ResponseError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), ResponseError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ResponseError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ResponseError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ResponseError::Deserialization(e.to_string()))
}
