//! Domain DTOs for the ad API.
//!
//! # Design
//! Wire names are PascalCase (`AdName`, `AdCost`, ...). Servers that use
//! camelCase JSON naming are accepted through aliases. Decimals travel as
//! JSON numbers, never strings, and are read digit for digit (no f64 hop).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An ad together with its cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ad {
    #[serde(rename = "AdName", alias = "adName")]
    pub name: String,
    #[serde(rename = "AdCost", alias = "adCost", with = "rust_decimal::serde::arbitrary_precision")]
    pub cost: Decimal,
}

/// An ad code with the aggregate duration it has been shown for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopularAd {
    #[serde(rename = "AdCode", alias = "adCode")]
    pub code: String,
    #[serde(rename = "TotalDuration", alias = "totalDuration")]
    pub total_duration: i64,
}
