//! Appointment operations for the Agenda handle.

use jiff::Zoned;
use tokio::task;

use super::Agenda;
use crate::{
    db::Database,
    error::{AgendaError, Result},
    models::Appointment,
    params::{AppointmentCreate, AppointmentUpdate, Id},
};

impl Agenda {
    /// Lists every appointment.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_appointments()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists appointments starting in the calendar month containing today.
    pub async fn list_current_month(&self) -> Result<Vec<Appointment>> {
        let db_path = self.db_path.clone();
        let today = Zoned::now().date();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_appointments_in_month(today)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists appointments starting in the ISO week containing today.
    pub async fn list_current_week(&self) -> Result<Vec<Appointment>> {
        let db_path = self.db_path.clone();
        let today = Zoned::now().date();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_appointments_in_week(today)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists appointments booked for the given customer.
    pub async fn list_appointments_by_customer(
        &self,
        customer_id: u64,
    ) -> Result<Vec<Appointment>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_appointments_by_customer(customer_id)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves an appointment by its ID.
    pub async fn get_appointment(&self, params: &Id) -> Result<Option<Appointment>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_appointment(id)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates a new appointment.
    pub async fn create_appointment(&self, params: &AppointmentCreate) -> Result<Appointment> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_appointment(&params)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Overwrites every mutable field of an existing appointment.
    pub async fn update_appointment(&self, params: &AppointmentUpdate) -> Result<Appointment> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_appointment(&params)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes an appointment by its ID.
    pub async fn delete_appointment(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_appointment(id)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
