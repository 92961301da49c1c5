//! Engine configuration, deserialized from JSON with defaults.

use crate::{error::BenchResult, pagination::DEFAULT_ROWS_PER_PAGE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Fixed page size for the tabular view. Reference deployment: 5.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
}

fn default_rows_per_page() -> usize {
    DEFAULT_ROWS_PER_PAGE
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> BenchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
