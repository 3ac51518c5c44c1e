//! Contact lookup and insert operations.

use rusqlite::{named_params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::Contact,
    params::ContactCreate,
};

const SELECT_CONTACTS_SQL: &str = "SELECT id, name, email FROM contacts";
const SELECT_CONTACT_BY_NAME_SQL: &str =
    "SELECT id, name, email FROM contacts WHERE name = :name";
const INSERT_CONTACT_SQL: &str = "INSERT INTO contacts (name, email) VALUES (:name, :email)";

impl super::Database {
    fn contact_from_row(row: &rusqlite::Row) -> rusqlite::Result<Contact> {
        Ok(Contact {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            email: row.get(2)?,
        })
    }

    /// Lists every contact in result-set order.
    pub fn list_contacts(&self) -> Result<Vec<Contact>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CONTACTS_SQL)
            .db_context("Failed to prepare contact query")?;

        let contacts = stmt
            .query_map([], Self::contact_from_row)
            .db_context("Failed to query contacts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch contacts")?;

        Ok(contacts)
    }

    /// Looks up a contact by its exact name.
    pub fn get_contact_by_name(&self, name: &str) -> Result<Option<Contact>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CONTACT_BY_NAME_SQL)
            .db_context("Failed to prepare contact lookup")?;

        stmt.query_row(named_params! { ":name": name }, Self::contact_from_row)
            .optional()
            .db_context("Failed to query contact by name")
    }

    /// Creates a new contact.
    pub fn create_contact(&mut self, params: &ContactCreate) -> Result<Contact> {
        self.connection
            .execute(
                INSERT_CONTACT_SQL,
                named_params! {
                    ":name": params.name,
                    ":email": params.email,
                },
            )
            .db_context("Failed to insert contact")?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Contact {
            id,
            name: params.name.clone(),
            email: params.email.clone(),
        })
    }
}
