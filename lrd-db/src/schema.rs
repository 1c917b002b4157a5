//! SQL schema for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// Creates the `launches` table: one row per launch, keyed by its position
/// in the source CSV (`row_index`), with indexes on the two filter columns.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS launches (
        row_index INTEGER PRIMARY KEY,
        flight_number INTEGER,
        launch_site TEXT NOT NULL,
        class INTEGER NOT NULL,
        payload_mass_kg REAL NOT NULL,
        booster_version TEXT NOT NULL,
        booster_version_category TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_launches_site ON launches(launch_site);
    CREATE INDEX IF NOT EXISTS idx_launches_payload ON launches(payload_mass_kg);
    "#
}
