use benchmark_core::{
    command::DashboardCommand,
    config::DashboardConfig,
    dataset::sample_records,
    engine::BenchmarkEngine,
    export::to_csv,
    selection::FilterField,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn make_engine() -> BenchmarkEngine {
    BenchmarkEngine::new(sample_records(), &DashboardConfig::default())
}

fn set(field: FilterField, value: &str) -> DashboardCommand {
    DashboardCommand::SetFilter {
        field,
        value: Some(value.to_string()),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// The unfiltered view exposes everything: 12 records, 3 pages, full
/// option lists, no fee analysis.
#[test]
fn initial_view() {
    let view = make_engine().view();
    assert_eq!(view.filtered.len(), 12);
    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.page_rows.len(), 5);
    assert_eq!(view.chart.len(), 3);
    assert_eq!(view.options.geographies.len(), 2);
    assert!(view.insights.alerts.is_empty());
}

/// Any filter change resets pagination to page 1.
#[test]
fn filter_change_resets_page() {
    let mut engine = make_engine();
    engine.apply(DashboardCommand::NextPage);
    assert_eq!(engine.pagination().page, 2);

    engine.apply(set(FilterField::BusinessType, "Healthcare"));
    assert_eq!(engine.pagination().page, 1, "filter change must reset the page");
    assert_eq!(engine.view().filtered.len(), 3);
}

/// Same state, same view — determinism of the recomputation pass.
#[test]
fn view_is_deterministic() {
    let mut engine = make_engine();
    engine.apply(set(FilterField::Geography, "Dallas-Plano-Irving, TX"));
    engine.apply(DashboardCommand::SetCurrentFee {
        input: "4500".into(),
    });

    let a = engine.view();
    let b = engine.view();
    assert_eq!(a.filtered, b.filtered);
    assert_eq!(a.chart, b.chart);
    assert_eq!(a.trend, b.trend);
    assert_eq!(a.insights, b.insights);
}

/// The geography/city dependency holds at the command level too.
#[test]
fn geography_command_clears_city() {
    let mut engine = make_engine();
    engine.apply(set(FilterField::Geography, "Dallas-Plano-Irving, TX"));
    engine.apply(set(FilterField::City, "Plano"));
    assert_eq!(engine.selection().city.as_deref(), Some("Plano"));

    engine.apply(set(
        FilterField::Geography,
        "Houston-The Woodlands-Sugar Land, TX",
    ));
    assert_eq!(engine.selection().city, None);
}

/// ResetFilters clears every dimension, the fee, and the page.
#[test]
fn reset_clears_everything() {
    let mut engine = make_engine();
    engine.apply(set(FilterField::BusinessType, "Healthcare"));
    engine.apply(DashboardCommand::SetCurrentFee {
        input: "4500".into(),
    });
    engine.apply(DashboardCommand::ResetFilters);

    assert!(engine.selection().is_empty());
    assert_eq!(engine.current_fee(), None);
    assert_eq!(engine.view().filtered.len(), 12);
}

/// `filtered` stays complete for export regardless of the visible page.
#[test]
fn export_surface_is_unpaginated() {
    let mut engine = make_engine();
    engine.apply(DashboardCommand::NextPage);
    let view = engine.view();

    assert_eq!(view.page_rows.len(), 5);
    assert_eq!(view.filtered.len(), 12);

    let csv = to_csv(&view.filtered);
    assert_eq!(csv.lines().count(), 13, "header plus all 12 records");
}

/// A junk fee input behaves as "no fee": three chart points and the
/// no-comparison analysis.
#[test]
fn junk_fee_is_ignored() {
    let mut engine = make_engine();
    engine.apply(DashboardCommand::SetCurrentFee {
        input: "not-a-number".into(),
    });

    let view = engine.view();
    assert_eq!(view.chart.len(), 3);
    assert_eq!(view.insights.fee_analysis, "No data available for comparison.");
}

/// Commands deserialize from the tagged JSON a UI process would send.
#[test]
fn commands_parse_from_json() {
    let cmd: DashboardCommand = serde_json::from_str(
        r#"{"cmd":"set_filter","field":"geography","value":"Dallas-Plano-Irving, TX"}"#,
    )
    .unwrap();

    let mut engine = make_engine();
    engine.apply(cmd);
    assert_eq!(
        engine.selection().geography.as_deref(),
        Some("Dallas-Plano-Irving, TX")
    );

    let paging: DashboardCommand = serde_json::from_str(r#"{"cmd":"next_page"}"#).unwrap();
    engine.apply(paging);
    assert_eq!(engine.pagination().page, 2);
}

/// Boundary scenario end to end: Dallas educational small-company data
/// with a $4500 fee produces the single over-p75 warning.
#[test]
fn alert_flows_through_view() {
    let mut engine = make_engine();
    engine.apply(set(FilterField::Geography, "Dallas-Plano-Irving, TX"));
    engine.apply(set(FilterField::BusinessType, "Educational Services"));
    engine.apply(set(FilterField::CompanySize, "150-200"));
    engine.apply(DashboardCommand::SetCurrentFee {
        input: "4500".into(),
    });

    let view = engine.view();
    assert_eq!(view.insights.alerts.len(), 1);
    assert!(view.insights.alerts[0].contains("4500"));
    assert!(view.insights.alerts[0].contains("4100"));
    assert_eq!(view.chart.len(), 4);
}
