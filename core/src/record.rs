//! The benchmark record — one observed fee-benchmark data point.

use crate::types::{Quarter, RecordId};
use serde::{Deserialize, Serialize};

/// A single fee-benchmark observation as supplied by the data source.
///
/// Percentile fields are already computed upstream; the engine consumes
/// them as-is and never derives percentiles from raw samples. The
/// `percentile25 <= median <= percentile75` ordering is expected but not
/// enforced — a record that violates it still flows through every stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    pub id:            RecordId,
    pub geography:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city:          Option<String>,
    pub business_type: String,
    /// Size-bucket label such as "150-200".
    pub company_size:  String,
    pub quarter:       Quarter,
    pub percentile25:  f64,
    pub median:        f64,
    pub percentile75:  f64,
}
