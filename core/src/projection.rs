//! Projection stage — presentation-agnostic chart views.
//!
//! Two projections are derived from a filtered record set:
//!   1. A snapshot of the three percentile bands (bar chart), anchored
//!      on the record with the greatest quarter label.
//!   2. A time-ordered trend series, one point per quarter (line chart).

use crate::{record::BenchmarkRecord, types::Quarter};
use serde::{Deserialize, Serialize};

pub const POINT_P25:    &str = "25th Percentile";
pub const POINT_MEDIAN: &str = "Median";
pub const POINT_P75:    &str = "75th Percentile";
pub const POINT_FEE:    &str = "Your Fee";

/// One bar in the snapshot comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name:  String,
    pub value: f64,
}

/// One quarter's percentile triple in the trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub quarter: Quarter,
    pub p25:     f64,
    pub median:  f64,
    pub p75:     f64,
}

/// Snapshot the reference record's percentile bands as fixed-order chart
/// points. The reference record is the one with the lexicographically
/// greatest `quarter` among `filtered`; ties keep the first encountered.
/// An empty set yields three zero-valued points. A provided fee always
/// appends a fourth "Your Fee" point.
pub fn build_chart_points(
    filtered: &[BenchmarkRecord],
    current_fee: Option<f64>,
) -> Vec<ChartPoint> {
    let (p25, median, p75) = match latest_by_quarter(filtered) {
        Some(r) => (r.percentile25, r.median, r.percentile75),
        None => (0.0, 0.0, 0.0),
    };

    let mut points = vec![
        ChartPoint { name: POINT_P25.into(),    value: p25 },
        ChartPoint { name: POINT_MEDIAN.into(), value: median },
        ChartPoint { name: POINT_P75.into(),    value: p75 },
    ];

    if let Some(fee) = current_fee {
        points.push(ChartPoint { name: POINT_FEE.into(), value: fee });
    }

    points
}

/// One point per distinct quarter, first record encountered per quarter
/// (no averaging), sorted ascending by quarter label. Quarters absent
/// from `filtered` are absent from the output.
pub fn build_trend(filtered: &[BenchmarkRecord]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = Vec::new();
    for record in filtered {
        if points.iter().any(|p| p.quarter == record.quarter) {
            continue;
        }
        points.push(TrendPoint {
            quarter: record.quarter.clone(),
            p25:     record.percentile25,
            median:  record.median,
            p75:     record.percentile75,
        });
    }
    points.sort_by(|a, b| a.quarter.cmp(&b.quarter));
    points
}

/// The record with the greatest quarter label; first one wins ties.
pub fn latest_by_quarter(records: &[BenchmarkRecord]) -> Option<&BenchmarkRecord> {
    records
        .iter()
        .reduce(|best, r| if r.quarter > best.quarter { r } else { best })
}
