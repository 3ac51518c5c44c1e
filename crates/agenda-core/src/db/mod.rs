//! Database operations and SQLite management for the scheduling tables.
//!
//! This module provides the table gateways for the agenda system. It handles
//! the SQLite connection and schema, and exposes one query interface per
//! table (appointments, contacts, users, countries) plus the report queries.
//!
//! Every operation prepares its own statement from the owned connection;
//! there is no shared statement state of any kind.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod appointment_queries;
pub mod contact_queries;
pub mod country_queries;
pub mod migrations;
pub mod report_queries;
pub mod user_queries;
pub mod window;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
