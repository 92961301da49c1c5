//! benchmark-core — the fee-benchmark filtering & insights engine.
//!
//! Three pure stages plus a pagination auxiliary:
//!   1. Filter stage     — conjunctive narrowing + dependent option lists
//!   2. Projection stage — chart snapshot + quarterly trend series
//!   3. Insight stage    — aggregates, trend wording, fee banding, alerts
//!
//! `engine::BenchmarkEngine` owns the selection/fee/pagination state and
//! reduces `command::DashboardCommand`s over it; `store::BenchStore` is
//! the SQLite data-source collaborator that feeds it records.

pub mod command;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod export;
pub mod filter;
pub mod insight;
pub mod pagination;
pub mod projection;
pub mod record;
pub mod selection;
pub mod store;
pub mod types;

pub use command::DashboardCommand;
pub use engine::{BenchmarkEngine, DashboardView};
pub use error::{BenchError, BenchResult};
pub use record::BenchmarkRecord;
pub use selection::{FilterField, FilterSelection};
