//! Typed query methods for retrieving launch data from the database.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for consumption by D3.js chart components. Groups are
//! ordered by the first appearance of their key in the dataset and rows by
//! their dataset position.

use crate::models::{OutcomeCount, PayloadOutcome, SiteStats, SiteSuccess};
use crate::Database;
use lrd_core::payload_range::PayloadRange;
use rusqlite::params;

impl Database {
    /// Total number of launches loaded.
    pub fn query_launch_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Distinct launch sites in first-appearance order.
    pub fn query_sites(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site FROM launches
             GROUP BY launch_site
             ORDER BY MIN(row_index)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Successful launch count (sum of outcome classes) for every site.
    ///
    /// Every distinct site gets a row, including sites with no successes.
    pub fn query_success_by_site(&self) -> anyhow::Result<Vec<SiteSuccess>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, SUM(class) FROM launches
             GROUP BY launch_site
             ORDER BY MIN(row_index)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteSuccess {
                    launch_site: row.get(0)?,
                    successes: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_success_by_site returned {} sites", rows.len());
        Ok(rows)
    }

    /// Launch count per outcome class for one site, ordered by class.
    ///
    /// Only classes that occur are returned; an unknown site yields no rows.
    pub fn query_outcome_counts(&self, launch_site: &str) -> anyhow::Result<Vec<OutcomeCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT class, COUNT(*) FROM launches
             WHERE launch_site = ?1
             GROUP BY class
             ORDER BY class",
        )?;
        let rows = stmt
            .query_map(params![launch_site], |row| {
                Ok(OutcomeCount {
                    class: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_outcome_counts({}) returned {} classes",
            launch_site,
            rows.len()
        );
        Ok(rows)
    }

    /// Observed `(min, max)` payload mass, or `None` when no launches are loaded.
    pub fn query_payload_bounds(&self) -> anyhow::Result<Option<(f64, f64)>> {
        let conn = self.conn.borrow();
        let bounds: (Option<f64>, Option<f64>) = conn.query_row(
            "SELECT MIN(payload_mass_kg), MAX(payload_mass_kg) FROM launches",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(match bounds {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        })
    }

    /// Launches whose payload mass lies in `range` (inclusive), optionally
    /// restricted to one site, in dataset order.
    pub fn query_payload_outcomes(
        &self,
        launch_site: Option<&str>,
        range: PayloadRange,
    ) -> anyhow::Result<Vec<PayloadOutcome>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT flight_number, launch_site, payload_mass_kg, class, booster_version_category
             FROM launches
             WHERE payload_mass_kg >= ?1 AND payload_mass_kg <= ?2
               AND (?3 IS NULL OR launch_site = ?3)
             ORDER BY row_index",
        )?;
        let rows = stmt
            .query_map(params![range.low(), range.high(), launch_site], |row| {
                Ok(PayloadOutcome {
                    flight_number: row.get(0)?,
                    launch_site: row.get(1)?,
                    payload_mass_kg: row.get(2)?,
                    class: row.get(3)?,
                    booster_version_category: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_payload_outcomes({:?}, [{}, {}]) returned {} launches",
            launch_site,
            range.low(),
            range.high(),
            rows.len()
        );
        Ok(rows)
    }

    /// Launch totals and success rate per site, in first-appearance order.
    pub fn query_site_stats(&self) -> anyhow::Result<Vec<SiteStats>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, COUNT(*), SUM(class), MIN(payload_mass_kg), MAX(payload_mass_kg)
             FROM launches
             GROUP BY launch_site
             ORDER BY MIN(row_index)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                let launches: i64 = row.get(1)?;
                let successes: i64 = row.get(2)?;
                Ok(SiteStats {
                    launch_site: row.get(0)?,
                    launches,
                    successes,
                    success_rate: if launches > 0 {
                        successes as f64 / launches as f64
                    } else {
                        0.0
                    },
                    min_payload_kg: row.get(3)?,
                    max_payload_kg: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
