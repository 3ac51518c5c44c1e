//! Contact, country, and user operations for the Agenda handle.

use tokio::task;

use super::Agenda;
use crate::{
    db::Database,
    error::{AgendaError, Result},
    models::{Contact, Country, User},
    params::{ContactCreate, Credentials},
};

impl Agenda {
    /// Returns true iff a stored user matches both credential fields exactly.
    pub async fn check_credentials(&self, params: &Credentials) -> Result<bool> {
        let db_path = self.db_path.clone();
        let username = params.username.clone();
        let password = params.password.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.check_credentials(&username, &password)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists every user.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_users()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates a new user.
    pub async fn create_user(&self, params: &Credentials) -> Result<User> {
        let db_path = self.db_path.clone();
        let username = params.username.clone();
        let password = params.password.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_user(&username, &password)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists every contact.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_contacts()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates a new contact.
    pub async fn create_contact(&self, params: &ContactCreate) -> Result<Contact> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_contact(&params)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists every country.
    pub async fn list_countries(&self) -> Result<Vec<Country>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_countries()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates a new country.
    pub async fn create_country(&self, name: &str) -> Result<Country> {
        let db_path = self.db_path.clone();
        let name = name.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_country(&name)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
