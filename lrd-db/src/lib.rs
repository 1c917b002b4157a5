//! In-memory SQLite database layer for the SpaceX launch records dashboard.
//!
//! The launch dataset is loaded once into an in-memory SQLite database and
//! queried by the dashboard's chart handlers. All filtering and grouping
//! (by launch site, outcome class and payload mass) happens in SQL.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV text parsed with [`lrd_core::launch_record::LaunchRecord::parse_launch_csv`]
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use lrd_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_launches("Launch Site,class,Payload Mass (kg),Booster Version Category\nKSC LC-39A,1,2490,FT\n").unwrap();
//!
//! let by_site = db.query_success_by_site().unwrap();
//! assert_eq!(by_site.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the SQL schema. There is a single
//! `launches` table; rows keep their position in the source file as
//! `row_index` so results can be returned in dataset order.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the launch records.
///
/// Cheaply cloneable (via `Rc`); clones share the same connection. Once
/// loaded, the dashboard only reads from it.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_launches`]
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load a launch CSV into it.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_launches(csv_data)?;
        Ok(db)
    }
}
