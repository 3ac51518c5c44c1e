//! Report operations for the Agenda handle.

use tokio::task;

use super::Agenda;
use crate::{
    db::Database,
    error::{AgendaError, Result},
    models::{ContactScheduleRow, CustomerTypeCount, TypeMonthCount},
};

impl Agenda {
    /// Counts appointments grouped by month of year and type.
    pub async fn report_by_type_and_month(&self) -> Result<Vec<TypeMonthCount>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.report_by_type_and_month()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists every appointment's schedule fields, ordered by contact.
    pub async fn report_by_contact(&self) -> Result<Vec<ContactScheduleRow>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.report_by_contact()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Counts appointments grouped by customer and type.
    pub async fn report_by_customer(&self) -> Result<Vec<CustomerTypeCount>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.report_by_customer()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
