//! Country lookup and insert operations. Same shape as the contact gateway.

use rusqlite::{named_params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Country,
};

const SELECT_COUNTRIES_SQL: &str = "SELECT id, name FROM countries";
const SELECT_COUNTRY_BY_NAME_SQL: &str = "SELECT id, name FROM countries WHERE name = :name";
const INSERT_COUNTRY_SQL: &str = "INSERT INTO countries (name) VALUES (:name)";

impl super::Database {
    fn country_from_row(row: &rusqlite::Row) -> rusqlite::Result<Country> {
        Ok(Country {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
        })
    }

    /// Lists every country in result-set order.
    pub fn list_countries(&self) -> Result<Vec<Country>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COUNTRIES_SQL)
            .db_context("Failed to prepare country query")?;

        let countries = stmt
            .query_map([], Self::country_from_row)
            .db_context("Failed to query countries")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch countries")?;

        Ok(countries)
    }

    /// Looks up a country by its exact name.
    pub fn get_country_by_name(&self, name: &str) -> Result<Option<Country>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COUNTRY_BY_NAME_SQL)
            .db_context("Failed to prepare country lookup")?;

        stmt.query_row(named_params! { ":name": name }, Self::country_from_row)
            .optional()
            .db_context("Failed to query country by name")
    }

    /// Creates a new country.
    pub fn create_country(&mut self, name: &str) -> Result<Country> {
        self.connection
            .execute(INSERT_COUNTRY_SQL, named_params! { ":name": name })
            .db_context("Failed to insert country")?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Country {
            id,
            name: name.into(),
        })
    }
}
