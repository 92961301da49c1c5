//! Filter stage — narrows the record set and derives option lists.
//!
//! Both functions are pure: stable over input order, no mutation, and
//! an empty input or empty result is a valid outcome, never an error.

use crate::{record::BenchmarkRecord, selection::FilterSelection};
use serde::{Deserialize, Serialize};

/// The distinct values available per filter dimension.
///
/// `cities` is the one dependent list: when a geography is selected it
/// only contains cities observed under that geography.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub geographies:    Vec<String>,
    pub cities:         Vec<String>,
    pub business_types: Vec<String>,
    pub company_sizes:  Vec<String>,
}

/// Apply each set field of `selection` as an exact-match predicate.
/// Predicates are conjunctive; matching is case-sensitive; relative
/// order of the input is preserved.
pub fn filter_records(
    records: &[BenchmarkRecord],
    selection: &FilterSelection,
) -> Vec<BenchmarkRecord> {
    records
        .iter()
        .filter(|r| {
            selection
                .geography
                .as_ref()
                .is_none_or(|g| &r.geography == g)
                && selection
                    .city
                    .as_ref()
                    .is_none_or(|c| r.city.as_ref() == Some(c))
                && selection
                    .business_type
                    .as_ref()
                    .is_none_or(|b| &r.business_type == b)
                && selection
                    .company_size
                    .as_ref()
                    .is_none_or(|s| &r.company_size == s)
        })
        .cloned()
        .collect()
}

/// Derive the option list for every dimension.
///
/// All lists are distinct values in first-seen order across the full
/// record set, independent of the current selection — except `cities`,
/// which is restricted to records matching the selected geography (or
/// the full distinct set when no geography is selected).
pub fn dependent_options(
    records: &[BenchmarkRecord],
    selection: &FilterSelection,
) -> FilterOptions {
    let cities = records
        .iter()
        .filter(|r| {
            selection
                .geography
                .as_ref()
                .is_none_or(|g| &r.geography == g)
        })
        .filter_map(|r| r.city.clone());

    FilterOptions {
        geographies:    distinct(records.iter().map(|r| r.geography.clone())),
        cities:         distinct(cities),
        business_types: distinct(records.iter().map(|r| r.business_type.clone())),
        company_sizes:  distinct(records.iter().map(|r| r.company_size.clone())),
    }
}

/// Deduplicate while keeping first-seen order.
fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen
}
