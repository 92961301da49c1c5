use crate::selection::FilterField;
use serde::{Deserialize, Serialize};

/// All UI-issued commands the engine reduces over.
/// Variants are added as surfaces grow — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DashboardCommand {
    // ── Filter control ────────────────────────────
    SetFilter {
        field: FilterField,
        /// `None` clears the dimension back to "any".
        value: Option<String>,
    },
    ResetFilters,

    // ── Fee input ─────────────────────────────────
    SetCurrentFee {
        /// Raw user input; parsed leniently, junk means "no fee".
        input: String,
    },

    // ── Pagination ────────────────────────────────
    NextPage,
    PrevPage,
    SetPage {
        page: usize,
    },
}
