use std::{collections::HashMap, str::FromStr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// How many entries `most-popular-ads` returns.
pub const POPULAR_LIMIT: usize = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ad {
    #[serde(rename = "AdName")]
    pub name: String,
    #[serde(rename = "AdCost", with = "rust_decimal::serde::arbitrary_precision")]
    pub cost: Decimal,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopularAd {
    #[serde(rename = "AdCode")]
    pub code: String,
    #[serde(rename = "TotalDuration")]
    pub total_duration: i64,
}

#[derive(Serialize)]
struct AverageCost(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

#[derive(Clone, Debug)]
pub struct CatalogAd {
    pub code: String,
    pub name: String,
    pub cost: Decimal,
}

/// One showing of an ad, in seconds.
#[derive(Clone, Debug)]
pub struct Airing {
    pub code: String,
    pub duration: i64,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub ads: Vec<CatalogAd>,
    pub airings: Vec<Airing>,
}

impl Catalog {
    pub fn sample() -> Self {
        let ad = |code: &str, name: &str, cost: i64| CatalogAd {
            code: code.to_string(),
            name: name.to_string(),
            cost: Decimal::new(cost, 2),
        };
        let airing = |code: &str, duration: i64| Airing {
            code: code.to_string(),
            duration,
        };
        Self {
            ads: vec![
                ad("TV-01", "Morning news sponsor", 45000),
                ad("TV-02", "Prime time spot", 125050),
                ad("RAD-01", "Drive time jingle", 8990),
                ad("WEB-01", "Homepage banner", 15000),
                ad("OUT-01", "Highway billboard", 98000),
                ad("RAD-02", "Late night read", 4500),
            ],
            airings: vec![
                airing("TV-02", 30),
                airing("RAD-01", 15),
                airing("TV-02", 30),
                airing("WEB-01", 600),
                airing("TV-01", 20),
                airing("OUT-01", 86400),
                airing("RAD-01", 15),
                airing("RAD-02", 60),
                airing("TV-01", 20),
            ],
        }
    }

    /// Mean cost rounded to cents, zero for an empty catalog.
    pub fn average_cost(&self) -> Decimal {
        if self.ads.is_empty() {
            return Decimal::ZERO;
        }
        let total: Decimal = self.ads.iter().map(|ad| ad.cost).sum();
        (total / Decimal::from(self.ads.len())).round_dp(2).normalize()
    }

    /// Ads strictly more expensive than `threshold`, in catalog order.
    pub fn ads_above_cost(&self, threshold: Decimal) -> Vec<Ad> {
        self.ads
            .iter()
            .filter(|ad| ad.cost > threshold)
            .map(|ad| Ad {
                name: ad.name.clone(),
                cost: ad.cost,
            })
            .collect()
    }

    /// Codes ranked by summed airing duration, longest first, ties by code.
    pub fn most_popular_ads(&self, limit: usize) -> Vec<PopularAd> {
        let mut totals: HashMap<&str, i64> = HashMap::new();
        for airing in &self.airings {
            let total = totals.entry(airing.code.as_str()).or_default();
            *total = total.saturating_add(airing.duration);
        }
        let mut ranked: Vec<PopularAd> = totals
            .into_iter()
            .map(|(code, total_duration)| PopularAd {
                code: code.to_string(),
                total_duration,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.total_duration
                .cmp(&a.total_duration)
                .then_with(|| a.code.cmp(&b.code))
        });
        ranked.truncate(limit);
        ranked
    }
}

pub type Db = Arc<Catalog>;

pub fn app() -> Router {
    app_with(Catalog::sample())
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(catalog);
    Router::new()
        .route("/Ad/average-cost", get(average_cost))
        .route("/Ad/ads-above-cost/{cost}", get(ads_above_cost))
        .route("/Ad/most-popular-ads", get(most_popular_ads))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, catalog: Catalog) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(catalog)).await
}

async fn average_cost(State(db): State<Db>) -> Json<AverageCost> {
    Json(AverageCost(db.average_cost()))
}

async fn ads_above_cost(
    State(db): State<Db>,
    Path(cost): Path<String>,
) -> Result<Json<Vec<Ad>>, StatusCode> {
    let threshold = Decimal::from_str(&cost).map_err(|_| {
        tracing::debug!(%cost, "rejecting non-decimal threshold");
        StatusCode::BAD_REQUEST
    })?;
    Ok(Json(db.ads_above_cost(threshold)))
}

async fn most_popular_ads(State(db): State<Db>) -> Json<Vec<PopularAd>> {
    Json(db.most_popular_ads(POPULAR_LIMIT))
}
