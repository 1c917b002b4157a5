//! CSV loading for populating the in-memory SQLite database.
//!
//! The launch CSV (with headers) is parsed by `lrd-core`; this module only
//! inserts the parsed rows. Expected headers:
//! `Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category`

use crate::Database;
use lrd_core::launch_record::LaunchRecord;
use rusqlite::params;

impl Database {
    /// Load launch records from a CSV string, appending after any rows
    /// already present. Returns the number of rows inserted.
    ///
    /// # Example CSV
    /// ```text
    /// ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
    /// 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
    /// ```
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = LaunchRecord::parse_launch_csv(csv_data)?;
        self.insert_launches(&records)
    }

    /// Insert already-parsed launch records, preserving their order.
    pub fn insert_launches(&self, records: &[LaunchRecord]) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let next_index: i64 = conn.query_row(
            "SELECT COALESCE(MAX(row_index) + 1, 0) FROM launches",
            [],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(
            "INSERT INTO launches
             (row_index, flight_number, launch_site, class, payload_mass_kg, booster_version, booster_version_category)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for (offset, r) in records.iter().enumerate() {
            stmt.execute(params![
                next_index + offset as i64,
                r.flight_number,
                r.launch_site,
                r.class,
                r.payload_mass_kg,
                r.booster_version,
                r.booster_version_category,
            ])?;
        }
        log::info!("loader: loaded {} launches", records.len());
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn load_launches_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
";
        let inserted = db.load_launches(csv).unwrap();
        assert_eq!(inserted, 2);

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 2);

        let site: String = conn
            .query_row(
                "SELECT launch_site FROM launches WHERE flight_number = 2",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(site, "VAFB SLC-4E");

        let payload: f64 = conn
            .query_row(
                "SELECT payload_mass_kg FROM launches WHERE row_index = 1",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((payload - 500.0).abs() < 0.01);
    }

    #[test]
    fn load_launches_appends_in_order() {
        let db = Database::new().unwrap();
        let csv1 = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,2490,FT
";
        let csv2 = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS SLC-40,0,5300,B4
";
        db.load_launches(csv1).unwrap();
        db.load_launches(csv2).unwrap();

        let conn = db.conn.borrow();
        let site: String = conn
            .query_row(
                "SELECT launch_site FROM launches WHERE row_index = 1",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(site, "CCAFS SLC-40");
    }

    #[test]
    fn load_launches_rejects_bad_rows() {
        let db = Database::new().unwrap();
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
KSC LC-39A,1,2490,FT
KSC LC-39A,yes,2490,FT
";
        assert!(db.load_launches(csv).is_err());
        // Parsing fails before anything is inserted
        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn load_launches_missing_flight_number_is_null() {
        let db = Database::new().unwrap();
        let csv = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
,KSC LC-39A,1,2490,FT
";
        db.load_launches(csv).unwrap();
        let conn = db.conn.borrow();
        let flight: Option<i64> = conn
            .query_row("SELECT flight_number FROM launches", [], |row| row.get(0))
            .unwrap();
        assert!(flight.is_none());
    }
}
