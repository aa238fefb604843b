//! Display surfaces of the main window and their text rendering.

use std::fmt::Write;

use adprice_core::{Ad, PopularAd};

use crate::currency::{format_currency, Locale};
use crate::input::ThresholdInput;

pub const PLACEHOLDER: &str = "Enter a cost";

/// Everything the user sees. Actions replace whole surfaces; lists keep
/// the server's order.
#[derive(Debug, Default)]
pub struct MainView {
    pub average_cost_label: String,
    pub threshold: ThresholdInput,
    pub ads_above_cost: Vec<Ad>,
    pub popular_ads: Vec<PopularAd>,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, locale: Locale) -> String {
        let mut out = String::new();

        let label = if self.average_cost_label.is_empty() {
            "Average ad cost: -"
        } else {
            self.average_cost_label.as_str()
        };
        let _ = writeln!(out, "{label}");

        let field = if self.threshold.placeholder_visible() {
            format!("<{PLACEHOLDER}>")
        } else {
            self.threshold.text().to_string()
        };
        let cursor = if self.threshold.is_focused() { "|" } else { "" };
        let _ = writeln!(out, "Cost threshold: [{field}{cursor}]");

        let _ = writeln!(out, "\nAds above cost ({}):", self.ads_above_cost.len());
        let rows: Vec<(String, String)> = self
            .ads_above_cost
            .iter()
            .map(|ad| (ad.name.clone(), format_currency(ad.cost, locale)))
            .collect();
        write_table(&mut out, ("Name", "Cost"), &rows);

        let _ = writeln!(out, "\nMost popular ads ({}):", self.popular_ads.len());
        let rows: Vec<(String, String)> = self
            .popular_ads
            .iter()
            .map(|ad| (ad.code.clone(), ad.total_duration.to_string()))
            .collect();
        write_table(&mut out, ("Code", "Total duration"), &rows);

        out
    }
}

fn write_table(out: &mut String, header: (&str, &str), rows: &[(String, String)]) {
    if rows.is_empty() {
        let _ = writeln!(out, "  (empty)");
        return;
    }
    let left = rows
        .iter()
        .map(|(l, _)| l.chars().count())
        .chain(std::iter::once(header.0.len()))
        .max()
        .unwrap_or(0);
    let right = rows
        .iter()
        .map(|(_, r)| r.chars().count())
        .chain(std::iter::once(header.1.len()))
        .max()
        .unwrap_or(0);
    let _ = writeln!(out, "  {:<left$}  {:>right$}", header.0, header.1);
    for (l, r) in rows {
        let _ = writeln!(out, "  {l:<left$}  {r:>right$}");
    }
}
