//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or error kinds. Results are compared as typed
//! values (not raw strings) so `120` and `120.0` compare equal.

use adprice_core::{Ad, AdClient, HttpMethod, HttpRequest, HttpResponse, PopularAd, ResponseError};
use rust_decimal::Decimal;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> AdClient {
    AdClient::new(BASE_URL)
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

fn check_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn check_error(name: &str, err: ResponseError, expected: &str) {
    match expected {
        "Status" => assert!(matches!(err, ResponseError::Status { .. }), "{name}: expected Status"),
        "Deserialization" => assert!(
            matches!(err, ResponseError::Deserialization(_)),
            "{name}: expected Deserialization"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Average cost
// ---------------------------------------------------------------------------

#[test]
fn average_cost_test_vectors() {
    let raw = include_str!("../../test-vectors/average_cost.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_average_cost(), &case["expected_request"]);

        let result = c.parse_average_cost(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let expected: Decimal = case["expected_result"].as_str().unwrap().parse().unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Ads above cost
// ---------------------------------------------------------------------------

#[test]
fn ads_above_cost_test_vectors() {
    let raw = include_str!("../../test-vectors/ads_above_cost.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let threshold: Decimal = case["input_threshold"].as_str().unwrap().parse().unwrap();
        check_request(name, &c.build_ads_above_cost(threshold), &case["expected_request"]);

        let result = c.parse_ads_above_cost(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let expected: Vec<Ad> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Most popular ads
// ---------------------------------------------------------------------------

#[test]
fn most_popular_ads_test_vectors() {
    let raw = include_str!("../../test-vectors/most_popular_ads.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        check_request(name, &c.build_most_popular_ads(), &case["expected_request"]);

        let result = c.parse_most_popular_ads(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let expected: Vec<PopularAd> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}
