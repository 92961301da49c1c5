//! Flat CSV export of a record set.
//!
//! Always fed the FULL filtered set, never the paginated window. Column
//! names match the serialized wire shape of `BenchmarkRecord`.

use crate::record::BenchmarkRecord;

const HEADER: &str = "id,geography,city,businessType,companySize,quarter,percentile25,median,percentile75";

pub fn to_csv(records: &[BenchmarkRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&csv_field(&r.id.to_string()));
        out.push(',');
        out.push_str(&csv_field(&r.geography));
        out.push(',');
        out.push_str(&csv_field(r.city.as_deref().unwrap_or("")));
        out.push(',');
        out.push_str(&csv_field(&r.business_type));
        out.push(',');
        out.push_str(&csv_field(&r.company_size));
        out.push(',');
        out.push_str(&csv_field(&r.quarter));
        out.push(',');
        out.push_str(&r.percentile25.to_string());
        out.push(',');
        out.push_str(&r.median.to_string());
        out.push(',');
        out.push_str(&r.percentile75.to_string());
        out.push('\n');
    }
    out
}

/// Quote a field only when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
