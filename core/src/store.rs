//! SQLite data-source collaborator.
//!
//! RULE: Only store.rs talks to the database.
//! The engine and its stages consume plain record vectors — they never
//! execute SQL. The store does not retry and does not cache; callers
//! own both concerns.

use crate::{
    error::BenchResult,
    filter::FilterOptions,
    record::BenchmarkRecord,
    selection::FilterSelection,
};
use rusqlite::{params, params_from_iter, Connection};

pub struct BenchStore {
    conn: Connection,
}

fn record_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<BenchmarkRecord> {
    Ok(BenchmarkRecord {
        id:            row.get(0)?,
        geography:     row.get(1)?,
        city:          row.get(2)?,
        business_type: row.get(3)?,
        company_size:  row.get(4)?,
        quarter:       row.get(5)?,
        percentile25:  row.get(6)?,
        median:        row.get(7)?,
        percentile75:  row.get(8)?,
    })
}

const RECORD_COLUMNS: &str = "id, geography, city, business_type, company_size, \
     quarter, percentile25, median, percentile75";

impl BenchStore {
    /// Open (or create) the benchmark database at `path`.
    pub fn open(path: &str) -> BenchResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests and demo runs).
    pub fn in_memory() -> BenchResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> BenchResult<()> {
        self.conn
            .execute_batch(include_str!("../migrations/001_benchmarks.sql"))?;
        Ok(())
    }

    // ── Loading ────────────────────────────────────────────────

    /// Insert one record. An `id` of 0 lets SQLite assign the rowid;
    /// the assigned id is returned either way.
    pub fn insert_record(&self, r: &BenchmarkRecord) -> BenchResult<i64> {
        self.conn.execute(
            "INSERT INTO benchmark_record (
                id, geography, city, business_type, company_size,
                quarter, percentile25, median, percentile75
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                if r.id == 0 { None } else { Some(r.id) },
                &r.geography,
                r.city.as_deref(),
                &r.business_type,
                &r.company_size,
                &r.quarter,
                r.percentile25,
                r.median,
                r.percentile75,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Bulk-load a dataset and record its provenance row.
    pub fn insert_records(&self, dataset_id: &str, records: &[BenchmarkRecord]) -> BenchResult<()> {
        for record in records {
            self.insert_record(record)?;
        }
        self.conn.execute(
            "INSERT OR REPLACE INTO dataset_meta (dataset_id, loaded_at, row_count)
             VALUES (?1, ?2, ?3)",
            params![
                dataset_id,
                chrono::Utc::now().timestamp(),
                records.len() as i64
            ],
        )?;
        log::info!("store: loaded dataset {dataset_id} ({} rows)", records.len());
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────

    /// The full record set, ordered by id.
    pub fn all_records(&self) -> BenchResult<Vec<BenchmarkRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM benchmark_record ORDER BY id ASC"
        ))?;
        let rows = stmt.query_map([], record_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Records matching every set field of `selection`, ordered by id.
    pub fn records_matching(&self, selection: &FilterSelection) -> BenchResult<Vec<BenchmarkRecord>> {
        let mut sql = format!("SELECT {RECORD_COLUMNS} FROM benchmark_record WHERE 1=1");
        let mut args: Vec<&str> = Vec::new();

        if let Some(geography) = selection.geography.as_deref() {
            sql.push_str(" AND geography = ?");
            args.push(geography);
        }
        if let Some(city) = selection.city.as_deref() {
            sql.push_str(" AND city = ?");
            args.push(city);
        }
        if let Some(business_type) = selection.business_type.as_deref() {
            sql.push_str(" AND business_type = ?");
            args.push(business_type);
        }
        if let Some(company_size) = selection.company_size.as_deref() {
            sql.push_str(" AND company_size = ?");
            args.push(company_size);
        }
        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args), record_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Distinct option values per dimension, each ordered by value.
    /// Cities are narrowed to `geography` when one is given.
    pub fn filter_options(&self, geography: Option<&str>) -> BenchResult<FilterOptions> {
        let cities = match geography {
            Some(geo) => self.distinct_with_param(
                "SELECT DISTINCT city FROM benchmark_record
                 WHERE geography = ?1 AND city IS NOT NULL ORDER BY city",
                geo,
            )?,
            None => self.distinct(
                "SELECT DISTINCT city FROM benchmark_record
                 WHERE city IS NOT NULL ORDER BY city",
            )?,
        };

        Ok(FilterOptions {
            geographies: self
                .distinct("SELECT DISTINCT geography FROM benchmark_record ORDER BY geography")?,
            cities,
            business_types: self.distinct(
                "SELECT DISTINCT business_type FROM benchmark_record ORDER BY business_type",
            )?,
            company_sizes: self.distinct(
                "SELECT DISTINCT company_size FROM benchmark_record ORDER BY company_size",
            )?,
        })
    }

    pub fn record_count(&self) -> BenchResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM benchmark_record", [], |row| row.get(0))?;
        Ok(count)
    }

    fn distinct(&self, sql: &str) -> BenchResult<Vec<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn distinct_with_param(&self, sql: &str, param: &str) -> BenchResult<Vec<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![param], |row| row.get::<_, String>(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
