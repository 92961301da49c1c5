//! The active filter selection and its transition rules.
//!
//! RULE: selection state never mutates in place across a transition.
//! Callers apply `with_field` and receive a new, consistent value —
//! in particular, changing the geography always clears a previously
//! selected city, since city options are scoped to a geography.

use serde::{Deserialize, Serialize};

/// The four filterable dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Geography,
    City,
    BusinessType,
    CompanySize,
}

/// The active query. Unset fields impose no constraint.
///
/// A `city` is only meaningful alongside a `geography`; the transition
/// function maintains that invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub geography:     Option<String>,
    pub city:          Option<String>,
    pub business_type: Option<String>,
    pub company_size:  Option<String>,
}

impl FilterSelection {
    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.geography.is_none()
            && self.city.is_none()
            && self.business_type.is_none()
            && self.company_size.is_none()
    }

    /// Return a new selection with `field` set to `value` (`None` clears
    /// the field). Changing the geography — to a new value or back to
    /// unset — drops any selected city.
    pub fn with_field(&self, field: FilterField, value: Option<String>) -> FilterSelection {
        let mut next = self.clone();
        match field {
            FilterField::Geography => {
                if next.geography != value {
                    next.city = None;
                }
                next.geography = value;
            }
            FilterField::City => next.city = value,
            FilterField::BusinessType => next.business_type = value,
            FilterField::CompanySize => next.company_size = value,
        }
        next
    }
}

/// Parse user fee input. Blank, unparsable, or non-positive input counts
/// as "no fee provided" and suppresses all fee-dependent insight output.
pub fn parse_current_fee(input: &str) -> Option<f64> {
    let fee: f64 = input.trim().parse().ok()?;
    (fee > 0.0 && fee.is_finite()).then_some(fee)
}
