//! Insight stage — aggregate statistics, trend wording, fee banding,
//! and anomaly alerts for a user-supplied fee.
//!
//! Everything degrades to documented defaults instead of failing: this
//! is best-effort analytics over possibly-empty data.
//!
//! The banding reference record is the FIRST element of the filtered set
//! (the chart snapshot anchors on latest-by-quarter instead; the two are
//! deliberately distinct — see DESIGN.md).

use crate::{projection::TrendPoint, record::BenchmarkRecord};
use serde::{Deserialize, Serialize};

pub const NO_TREND:      &str = "Insufficient data to determine trend.";
pub const NO_COMPARISON: &str = "No data available for comparison.";

/// The full insight payload for the current filtered set and fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    /// Mean of `median` across the filtered set, rounded to the nearest
    /// integer. 0 when the set is empty — check emptiness before use.
    pub average_median: i64,
    pub fee_range_min:  f64,
    pub fee_range_max:  f64,
    pub trend_description: String,
    pub fee_analysis:      String,
    pub alerts:            Vec<String>,
}

pub fn compute_insights(
    filtered: &[BenchmarkRecord],
    trend: &[TrendPoint],
    current_fee: Option<f64>,
) -> InsightSummary {
    let average_median = if filtered.is_empty() {
        0
    } else {
        let sum: f64 = filtered.iter().map(|r| r.median).sum();
        (sum / filtered.len() as f64).round() as i64
    };

    let fee_range_min = filtered
        .iter()
        .map(|r| r.percentile25)
        .fold(f64::INFINITY, f64::min);
    let fee_range_max = filtered
        .iter()
        .map(|r| r.percentile75)
        .fold(f64::NEG_INFINITY, f64::max);
    let (fee_range_min, fee_range_max) = if filtered.is_empty() {
        (0.0, 0.0)
    } else {
        (fee_range_min, fee_range_max)
    };

    let mut alerts = Vec::new();
    let fee_analysis = match (current_fee, filtered.first()) {
        (Some(fee), Some(reference)) => analyze_fee(fee, reference, &mut alerts),
        _ => NO_COMPARISON.to_string(),
    };

    InsightSummary {
        average_median,
        fee_range_min,
        fee_range_max,
        trend_description: describe_trend(trend),
        fee_analysis,
        alerts,
    }
}

/// Percent change between the first and last trend medians.
///
/// Equal medians fall into the decrease branch and read "decreased by
/// 0%". A zero first-median would divide by zero, so it is reported as
/// insufficient data instead.
fn describe_trend(trend: &[TrendPoint]) -> String {
    let (Some(first), Some(last)) = (trend.first(), trend.last()) else {
        return NO_TREND.to_string();
    };
    if trend.len() < 2 || first.median == 0.0 {
        return NO_TREND.to_string();
    }

    if last.median > first.median {
        let pct = ((last.median - first.median) / first.median * 100.0).round();
        format!("Fees have increased by {pct}% over the displayed period.")
    } else {
        let pct = ((first.median - last.median) / first.median * 100.0).round();
        format!("Fees have decreased by {pct}% over the displayed period.")
    }
}

/// Band the fee against the reference record's percentiles and collect
/// alerts. Banding treats a fee exactly at the 75th percentile as
/// "above", but the warning alert and the overpayment note require a
/// strictly greater fee — the two conditions are independent.
fn analyze_fee(fee: f64, reference: &BenchmarkRecord, alerts: &mut Vec<String>) -> String {
    let band = if fee < reference.percentile25 {
        "below the 25th percentile"
    } else if fee < reference.median {
        "between the 25th percentile and median"
    } else if fee < reference.percentile75 {
        "between the median and 75th percentile"
    } else {
        "above the 75th percentile"
    };

    let mut analysis = format!("Your current fee (${fee}) is {band} for your selected criteria.");

    if fee < reference.percentile25 {
        analysis.push_str(" Your fee is competitive compared to the market rate.");
    }
    if fee > reference.percentile75 {
        analysis.push_str(" You may be overpaying compared to the market rate.");
        alerts.push(format!(
            "Warning: Your current fee of ${fee} is above the 75th percentile (${})",
            reference.percentile75
        ));
    }

    analysis
}
