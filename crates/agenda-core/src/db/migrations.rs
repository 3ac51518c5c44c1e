//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if email column exists in contacts table
        let has_email_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('contacts') WHERE name = 'email'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        // Add email column if it doesn't exist
        if !has_email_column {
            self.connection
                .execute("ALTER TABLE contacts ADD COLUMN email TEXT", [])
                .db_context("Failed to add email column to contacts table")?;
        }

        Ok(())
    }
}
