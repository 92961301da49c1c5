//! bench-runner: headless driver for the benchmark dashboard engine.
//!
//! Usage:
//!   bench-runner --seed 42 --rows 120 --db bench.db
//!   bench-runner --sample --geography "Dallas-Plano-Irving, TX" --fee 4500
//!   bench-runner --sample --json

use anyhow::Result;
use benchmark_core::{
    command::DashboardCommand,
    config::DashboardConfig,
    dataset::{sample_records, DatasetGenerator},
    engine::BenchmarkEngine,
    export::to_csv,
    selection::FilterField,
    store::BenchStore,
};
use std::env;
use std::fs;

#[derive(serde::Serialize)]
struct RunReport<'a> {
    seed: u64,
    dataset: &'a str,
    view: &'a benchmark_core::DashboardView,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let rows = parse_arg(&args, "--rows", 120usize);
    let use_sample = args.iter().any(|a| a == "--sample");
    let json_output = args.iter().any(|a| a == "--json");
    let db = string_arg(&args, "--db").unwrap_or_else(|| ":memory:".to_string());
    let geography = string_arg(&args, "--geography");
    let business_type = string_arg(&args, "--business-type");
    let company_size = string_arg(&args, "--company-size");
    let city = string_arg(&args, "--city");
    let fee = string_arg(&args, "--fee");
    let export_path = string_arg(&args, "--export");

    // Seed the data source, then hand the full record set to the engine.
    let store = if db == ":memory:" {
        BenchStore::in_memory()?
    } else {
        BenchStore::open(&db)?
    };
    store.migrate()?;

    let dataset_id = if use_sample {
        "sample".to_string()
    } else {
        format!("generated-{seed}")
    };
    if use_sample {
        store.insert_records(&dataset_id, &sample_records())?;
    } else {
        let records = DatasetGenerator::new(seed).generate(rows);
        store.insert_records(&dataset_id, &records)?;
    }

    let records = store.all_records()?;
    log::info!("runner: dataset {dataset_id} ready ({} records)", records.len());
    let mut engine = BenchmarkEngine::new(records, &DashboardConfig::default());

    // Apply the requested scenario in dependency order: geography before
    // city, since a geography change clears the city.
    if let Some(value) = geography {
        engine.apply(set(FilterField::Geography, value));
    }
    if let Some(value) = city {
        engine.apply(set(FilterField::City, value));
    }
    if let Some(value) = business_type {
        engine.apply(set(FilterField::BusinessType, value));
    }
    if let Some(value) = company_size {
        engine.apply(set(FilterField::CompanySize, value));
    }
    if let Some(input) = fee {
        engine.apply(DashboardCommand::SetCurrentFee { input });
    }

    let view = engine.view();

    if json_output {
        let report = RunReport {
            seed,
            dataset: &dataset_id,
            view: &view,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&engine, &view);

    if let Some(path) = export_path {
        let csv = to_csv(&view.filtered);
        fs::write(&path, &csv)?;
        println!();
        println!(
            "Exported {} records to {path} at {}",
            view.filtered.len(),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    Ok(())
}

fn set(field: FilterField, value: String) -> DashboardCommand {
    DashboardCommand::SetFilter {
        field,
        value: Some(value),
    }
}

fn print_summary(engine: &BenchmarkEngine, view: &benchmark_core::DashboardView) {
    println!("=== FEE BENCHMARK SUMMARY ===");
    println!("  selection:      {:?}", engine.selection());
    println!("  current fee:    {:?}", engine.current_fee());
    println!("  matched:        {} records", view.filtered.len());
    println!("  pages:          {} (showing page {})", view.total_pages, view.page);

    println!();
    println!("=== SNAPSHOT (latest quarter) ===");
    for point in &view.chart {
        println!("  {:<16} ${:.0}", point.name, point.value);
    }

    println!();
    println!("=== TREND ===");
    if view.trend.is_empty() {
        println!("  (no quarters in the filtered set)");
    }
    for point in &view.trend {
        println!(
            "  {} | p25 ${:.0} | median ${:.0} | p75 ${:.0}",
            point.quarter, point.p25, point.median, point.p75
        );
    }

    println!();
    println!("=== INSIGHTS ===");
    println!("  average median: ${}", view.insights.average_median);
    println!(
        "  fee range:      ${:.0} - ${:.0}",
        view.insights.fee_range_min, view.insights.fee_range_max
    );
    println!("  trend:          {}", view.insights.trend_description);
    println!("  fee analysis:   {}", view.insights.fee_analysis);
    for alert in &view.insights.alerts {
        println!("  ALERT: {alert}");
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn string_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
