//! In-memory SQLite loader.
//!
//! Streams the same `<key>;<value>` input into a `measurements` table for
//! ad-hoc querying. Rows are inserted in batches, one transaction per batch.
//! Nothing here computes statistics.

use crate::parser::scan_measurements;
use crate::utils::error::StoreError;
use log::{debug, info};
use rusqlite::{params, Connection};
use std::io::BufRead;

const CREATE_TABLE_SQL: &str = "
create table measurements (
    id text,
    num real
);
create index idx_id on measurements(id);
";

const INSERT_SQL: &str = "insert into measurements (id, num) values (?1, ?2)";

/// Result of a load run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Rows inserted
    pub rows: u64,

    /// Transactions committed
    pub batches: u64,
}

/// Session-scoped relational store of raw measurements
///
/// **Public** - dropped (and its data discarded) at the end of the run
pub struct MeasurementStore {
    conn: Connection,
}

impl MeasurementStore {
    /// Open an empty in-memory database with the measurements schema
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(CREATE_TABLE_SQL)?;

        debug!("Created in-memory measurements table");
        Ok(Self { conn })
    }

    /// Insert one batch of rows inside a single transaction
    pub fn insert_batch(&mut self, rows: &[(String, f64)]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(INSERT_SQL)?;
            for (id, num) in rows {
                stmt.execute(params![id, num])?;
            }
        }
        tx.commit()?;

        debug!("Committed batch of {} rows", rows.len());
        Ok(())
    }

    /// Stream `reader` into the table in batches of `batch_size` rows
    ///
    /// **Public** - main entry point for the batch-load path
    ///
    /// A trailing partial batch is flushed at the end. A malformed line
    /// aborts the load; batches committed before it stay in the table.
    ///
    /// # Errors
    /// * `StoreError::InvalidBatchSize` - `batch_size` is 0
    /// * `StoreError::Parse` / `StoreError::Io` - input problems
    /// * `StoreError::Sqlite` - insert or commit failed
    pub fn load<R: BufRead>(
        &mut self,
        reader: R,
        batch_size: usize,
    ) -> Result<LoadSummary, StoreError> {
        if batch_size == 0 {
            return Err(StoreError::InvalidBatchSize);
        }

        let mut summary = LoadSummary::default();
        let mut batch: Vec<(String, f64)> = Vec::with_capacity(batch_size);

        scan_measurements(reader, |key, value| {
            batch.push((key.to_string(), value));

            if batch.len() == batch_size {
                self.insert_batch(&batch)?;
                summary.rows += batch.len() as u64;
                summary.batches += 1;
                batch.clear();
            }
            Ok::<(), StoreError>(())
        })?;

        if !batch.is_empty() {
            self.insert_batch(&batch)?;
            summary.rows += batch.len() as u64;
            summary.batches += 1;
        }

        info!(
            "Loaded {} rows in {} transactions",
            summary.rows, summary.batches
        );
        Ok(summary)
    }

    /// Number of rows in the measurements table
    pub fn row_count(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("select count(*) from measurements", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Number of distinct ids in the measurements table
    pub fn key_count(&self) -> Result<u64, StoreError> {
        let count: i64 = self.conn.query_row(
            "select count(distinct id) from measurements",
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// Whether the id index exists
    pub fn has_id_index(&self) -> Result<bool, StoreError> {
        let count: i64 = self.conn.query_row(
            "select count(*) from sqlite_master where type = 'index' and name = 'idx_id'",
            [],
            |row| row.get(0),
        )?;
        Ok(count == 1)
    }
}
