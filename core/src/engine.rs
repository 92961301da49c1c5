//! The dashboard engine — owns selection, fee, and pagination state and
//! recomputes every derived view from scratch on demand.
//!
//! RULES:
//!   - State changes flow through apply() as explicit commands.
//!   - view() is a pure function of (records, selection, fee, page);
//!     the same inputs produce the same view every time.
//!   - The record set is never mutated; every view owns fresh output.
//!   - Any filter change (or reset) returns pagination to page 1.

use crate::{
    command::DashboardCommand,
    config::DashboardConfig,
    filter::{dependent_options, filter_records, FilterOptions},
    insight::{compute_insights, InsightSummary},
    pagination::{page_window, total_pages, PaginationState},
    projection::{build_chart_points, build_trend, ChartPoint, TrendPoint},
    record::BenchmarkRecord,
    selection::{parse_current_fee, FilterSelection},
};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer consumes for one render pass.
///
/// `filtered` is the full, unpaginated result — the export surface.
/// `page_rows` is the tabular window for the current page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub filtered:    Vec<BenchmarkRecord>,
    pub options:     FilterOptions,
    pub chart:       Vec<ChartPoint>,
    pub trend:       Vec<TrendPoint>,
    pub insights:    InsightSummary,
    pub page_rows:   Vec<BenchmarkRecord>,
    pub page:        usize,
    pub total_pages: usize,
}

pub struct BenchmarkEngine {
    records:     Vec<BenchmarkRecord>,
    selection:   FilterSelection,
    current_fee: Option<f64>,
    pagination:  PaginationState,
}

impl BenchmarkEngine {
    /// Build an engine over a record set supplied by the data source.
    /// The engine takes its own copy and never hands out mutable access.
    pub fn new(records: Vec<BenchmarkRecord>, config: &DashboardConfig) -> Self {
        log::info!("engine: loaded {} benchmark records", records.len());
        Self {
            records,
            selection:   FilterSelection::default(),
            current_fee: None,
            pagination:  PaginationState::with_rows_per_page(config.rows_per_page),
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn current_fee(&self) -> Option<f64> {
        self.current_fee
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Reduce one command into the next state.
    pub fn apply(&mut self, command: DashboardCommand) {
        match command {
            DashboardCommand::SetFilter { field, value } => {
                self.selection = self.selection.with_field(field, value);
                self.pagination.reset();
                log::debug!("engine: filter changed, selection={:?}", self.selection);
            }
            DashboardCommand::ResetFilters => {
                self.selection = FilterSelection::default();
                self.current_fee = None;
                self.pagination.reset();
                log::debug!("engine: filters reset");
            }
            DashboardCommand::SetCurrentFee { input } => {
                self.current_fee = parse_current_fee(&input);
                match self.current_fee {
                    Some(fee) => log::debug!("engine: current fee set to {fee}"),
                    None => log::debug!("engine: current fee cleared (input {input:?})"),
                }
            }
            DashboardCommand::NextPage => {
                let len = filter_records(&self.records, &self.selection).len();
                self.pagination.next(len);
            }
            DashboardCommand::PrevPage => {
                self.pagination.prev();
            }
            DashboardCommand::SetPage { page } => {
                self.pagination.page = page;
            }
        }
    }

    /// Recompute the full view. Filter stage feeds both projections and
    /// insights; pagination is a window over the same filtered set.
    pub fn view(&self) -> DashboardView {
        let filtered = filter_records(&self.records, &self.selection);
        let options = dependent_options(&self.records, &self.selection);
        let chart = build_chart_points(&filtered, self.current_fee);
        let trend = build_trend(&filtered);
        let insights = compute_insights(&filtered, &trend, self.current_fee);

        let page_rows = page_window(
            &filtered,
            self.pagination.page,
            self.pagination.rows_per_page,
        )
        .to_vec();
        let total_pages = total_pages(filtered.len(), self.pagination.rows_per_page);

        for alert in &insights.alerts {
            log::warn!("engine: {alert}");
        }

        DashboardView {
            filtered,
            options,
            chart,
            trend,
            insights,
            page_rows,
            page: self.pagination.page,
            total_pages,
        }
    }
}
