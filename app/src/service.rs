//! Async API access layer.
//!
//! # Design
//! `AdService` pairs the stateless `AdClient` with one shared `Transport`.
//! Every query is one attempt: build, execute on the blocking pool, parse.
//! Transport failures, join failures, bad statuses and bad bodies all become
//! `RequestFailed` with the query's context; nothing is retried.

use std::fmt::Display;
use std::sync::Arc;

use adprice_core::{Ad, AdClient, HttpResponse, Operation, PopularAd, RequestFailed};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::transport::Transport;

#[derive(Clone)]
pub struct AdService {
    client: AdClient,
    transport: Arc<dyn Transport>,
}

impl AdService {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            client: AdClient::new(base_url),
            transport,
        }
    }

    pub async fn get_average_ad_cost(&self) -> Result<Decimal, RequestFailed> {
        let operation = Operation::AverageCost;
        let response = self.round_trip(operation).await?;
        self.client
            .parse_average_cost(response)
            .map_err(|e| failed(operation, e))
    }

    pub async fn get_ads_above_cost(&self, threshold: Decimal) -> Result<Vec<Ad>, RequestFailed> {
        let operation = Operation::AdsAboveCost(threshold);
        let response = self.round_trip(operation).await?;
        self.client
            .parse_ads_above_cost(response)
            .map_err(|e| failed(operation, e))
    }

    pub async fn get_most_popular_ads(&self) -> Result<Vec<PopularAd>, RequestFailed> {
        let operation = Operation::MostPopularAds;
        let response = self.round_trip(operation).await?;
        self.client
            .parse_most_popular_ads(response)
            .map_err(|e| failed(operation, e))
    }

    async fn round_trip(&self, operation: Operation) -> Result<HttpResponse, RequestFailed> {
        let request = self.client.build(operation);
        debug!(url = %request.url, "sending request");

        let transport = Arc::clone(&self.transport);
        let response = tokio::task::spawn_blocking(move || transport.execute(request))
            .await
            .map_err(|e| failed(operation, e))?
            .map_err(|e| failed(operation, e))?;

        debug!(status = response.status, bytes = response.body.len(), "received response");
        Ok(response)
    }
}

fn failed(operation: Operation, cause: impl Display) -> RequestFailed {
    let err = RequestFailed::new(operation, cause);
    warn!(context = %err.context, cause = %err.cause, "request failed");
    err
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use adprice_core::HttpRequest;

    use super::*;
    use crate::transport::TransportError;

    struct Canned {
        reply: Result<HttpResponse, TransportError>,
        seen: Mutex<Vec<String>>,
    }

    impl Transport for Canned {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request.url);
            self.reply.clone()
        }
    }

    fn service(reply: Result<HttpResponse, TransportError>) -> (AdService, Arc<Canned>) {
        let transport = Arc::new(Canned {
            reply,
            seen: Mutex::new(Vec::new()),
        });
        let service = AdService::new("http://ads.test/", transport.clone());
        (service, transport)
    }

    #[tokio::test]
    async fn average_cost_success() {
        let (service, transport) = service(Ok(HttpResponse::new(200, "125.50")));
        let cost = service.get_average_ad_cost().await.unwrap();
        assert_eq!(cost, Decimal::new(12550, 2));
        assert_eq!(
            *transport.seen.lock().unwrap(),
            ["http://ads.test/Ad/average-cost"]
        );
    }

    #[tokio::test]
    async fn ads_above_cost_issues_one_request_with_threshold() {
        let (service, transport) = service(Ok(HttpResponse::new(200, "[]")));
        service
            .get_ads_above_cost(Decimal::new(75, 1))
            .await
            .unwrap();
        assert_eq!(
            *transport.seen.lock().unwrap(),
            ["http://ads.test/Ad/ads-above-cost/7.5"]
        );
    }

    #[tokio::test]
    async fn transport_error_keeps_cause() {
        let (service, _) = service(Err(TransportError("connection refused".to_string())));
        let err = service.get_most_popular_ads().await.unwrap_err();
        assert_eq!(err.context, "failed to get the most popular ads");
        assert_eq!(err.cause, "connection refused");
    }

    #[tokio::test]
    async fn status_error_keeps_cause() {
        let (service, _) = service(Ok(HttpResponse::new(502, "bad gateway")));
        let err = service.get_average_ad_cost().await.unwrap_err();
        assert_eq!(err.context, "failed to get the average ad cost");
        assert_eq!(err.cause, "HTTP 502: bad gateway");
    }

    #[tokio::test]
    async fn malformed_body_is_request_failed() {
        let (service, _) = service(Ok(HttpResponse::new(200, "[{\"AdName\":1}]")));
        let err = service
            .get_ads_above_cost(Decimal::ONE)
            .await
            .unwrap_err();
        assert_eq!(err.context, "failed to get ads costing more than 1");
        assert!(err.cause.starts_with("invalid response body"));
    }
}
