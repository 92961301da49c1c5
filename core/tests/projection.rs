use benchmark_core::{
    dataset::sample_records,
    filter::filter_records,
    projection::{build_chart_points, build_trend},
    record::BenchmarkRecord,
    selection::{FilterField, FilterSelection},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn quarter_record(id: i64, quarter: &str, median: f64) -> BenchmarkRecord {
    BenchmarkRecord {
        id,
        geography: "TX".into(),
        city: None,
        business_type: "Healthcare".into(),
        company_size: "150-200".into(),
        quarter: quarter.into(),
        percentile25: median - 500.0,
        median,
        percentile75: median + 500.0,
    }
}

fn dallas_educational_small() -> Vec<BenchmarkRecord> {
    let selection = FilterSelection::default()
        .with_field(FilterField::Geography, Some("Dallas-Plano-Irving, TX".into()))
        .with_field(FilterField::BusinessType, Some("Educational Services".into()))
        .with_field(FilterField::CompanySize, Some("150-200".into()));
    filter_records(&sample_records(), &selection)
}

// ── Chart points ─────────────────────────────────────────────────────────────

/// Exactly 3 points without a fee, exactly 4 with one; fixed name order.
#[test]
fn chart_point_count_follows_fee_presence() {
    let filtered = dallas_educational_small();

    let without = build_chart_points(&filtered, None);
    assert_eq!(without.len(), 3);
    let names: Vec<&str> = without.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["25th Percentile", "Median", "75th Percentile"]);

    let with = build_chart_points(&filtered, Some(3500.0));
    assert_eq!(with.len(), 4);
    assert_eq!(with[3].name, "Your Fee");
    assert_eq!(with[3].value, 3500.0);
}

/// The snapshot anchors on the record with the greatest quarter label.
#[test]
fn chart_uses_latest_quarter_record() {
    let filtered = dallas_educational_small();
    let points = build_chart_points(&filtered, None);

    // Q3 2024 record: 2700 / 3400 / 4300
    assert_eq!(points[0].value, 2700.0);
    assert_eq!(points[1].value, 3400.0);
    assert_eq!(points[2].value, 4300.0);
}

/// Empty filtered set defaults all three percentile values to 0; a
/// provided fee still appends its point.
#[test]
fn chart_over_empty_set_is_zeroed() {
    let points = build_chart_points(&[], None);
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|p| p.value == 0.0));

    let with_fee = build_chart_points(&[], Some(1200.0));
    assert_eq!(with_fee.len(), 4);
    assert_eq!(with_fee[3].value, 1200.0);
}

// ── Trend ────────────────────────────────────────────────────────────────────

/// Output is ascending by quarter with no duplicate quarters.
#[test]
fn trend_is_sorted_and_deduplicated() {
    let records = vec![
        quarter_record(1, "Q3 2024", 3400.0),
        quarter_record(2, "Q1 2024", 3200.0),
        quarter_record(3, "Q2 2024", 3300.0),
        quarter_record(4, "Q1 2024", 9999.0),
    ];

    let trend = build_trend(&records);
    let quarters: Vec<&str> = trend.iter().map(|p| p.quarter.as_str()).collect();
    assert_eq!(quarters, vec!["Q1 2024", "Q2 2024", "Q3 2024"]);
    assert_eq!(
        trend[0].median, 3200.0,
        "first record per quarter wins, no averaging"
    );
}

/// Quarters absent from the filtered set are simply absent — no
/// zero-filled gap points.
#[test]
fn trend_has_no_gap_filling() {
    let records = vec![
        quarter_record(1, "Q1 2024", 3000.0),
        quarter_record(2, "Q4 2024", 3600.0),
    ];
    let trend = build_trend(&records);
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].quarter, "Q1 2024");
    assert_eq!(trend[1].quarter, "Q4 2024");
}

#[test]
fn trend_of_empty_set_is_empty() {
    assert!(build_trend(&[]).is_empty());
}
