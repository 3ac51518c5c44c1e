//! Appointment CRUD operations and filtered queries.

use jiff::civil::{Date, DateTime};
use rusqlite::{named_params, types::Type, OptionalExtension};

use super::window::{iso_week_window, month_window, DateWindow};
use crate::{
    error::{AgendaError, DatabaseResultExt, Result},
    models::Appointment,
    params::{AppointmentCreate, AppointmentUpdate},
};

// SQL as const strings; every select joins contacts so the resolved contact
// name travels with the record. Parameters are bound by name, never by index.
const SELECT_APPOINTMENTS_SQL: &str = "SELECT a.id, a.title, a.description, a.location, a.kind, a.start_at, a.end_at, a.customer_id, a.user_id, a.contact_id, c.name FROM appointments AS a INNER JOIN contacts AS c ON a.contact_id = c.id";
const SELECT_APPOINTMENTS_IN_WINDOW_SQL: &str = "SELECT a.id, a.title, a.description, a.location, a.kind, a.start_at, a.end_at, a.customer_id, a.user_id, a.contact_id, c.name FROM appointments AS a INNER JOIN contacts AS c ON a.contact_id = c.id WHERE a.start_at >= :window_start AND a.start_at < :window_end";
const SELECT_APPOINTMENTS_BY_CUSTOMER_SQL: &str = "SELECT a.id, a.title, a.description, a.location, a.kind, a.start_at, a.end_at, a.customer_id, a.user_id, a.contact_id, c.name FROM appointments AS a INNER JOIN contacts AS c ON a.contact_id = c.id WHERE a.customer_id = :customer_id";
const SELECT_APPOINTMENT_SQL: &str = "SELECT a.id, a.title, a.description, a.location, a.kind, a.start_at, a.end_at, a.customer_id, a.user_id, a.contact_id, c.name FROM appointments AS a INNER JOIN contacts AS c ON a.contact_id = c.id WHERE a.id = :id";
const INSERT_APPOINTMENT_SQL: &str = "INSERT INTO appointments (title, description, location, kind, start_at, end_at, customer_id, user_id, contact_id) VALUES (:title, :description, :location, :kind, :start_at, :end_at, :customer_id, :user_id, :contact_id)";
const UPDATE_APPOINTMENT_SQL: &str = "UPDATE appointments SET title = :title, description = :description, location = :location, kind = :kind, start_at = :start_at, end_at = :end_at, customer_id = :customer_id, user_id = :user_id, contact_id = :contact_id WHERE id = :id";
const DELETE_APPOINTMENT_SQL: &str = "DELETE FROM appointments WHERE id = :id";

impl super::Database {
    /// Helper function to construct an Appointment from a joined row
    fn appointment_from_row(row: &rusqlite::Row) -> rusqlite::Result<Appointment> {
        Ok(Appointment {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            description: row.get(2)?,
            location: row.get(3)?,
            kind: row.get(4)?,
            start_at: row.get::<_, String>(5)?.parse::<DateTime>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            end_at: row.get::<_, String>(6)?.parse::<DateTime>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            customer_id: row.get::<_, i64>(7)? as u64,
            user_id: row.get::<_, i64>(8)? as u64,
            contact_id: row.get::<_, i64>(9)? as u64,
            contact_name: row.get(10)?,
        })
    }

    /// Lists every appointment in result-set order.
    ///
    /// No ORDER BY is applied; the order is database-defined and not
    /// guaranteed stable across schema changes.
    pub fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_APPOINTMENTS_SQL)
            .db_context("Failed to prepare appointment query")?;

        let appointments = stmt
            .query_map([], Self::appointment_from_row)
            .db_context("Failed to query appointments")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch appointments")?;

        Ok(appointments)
    }

    /// Lists appointments whose start falls in the calendar month containing
    /// `today`: `[first of month, first of next month)`.
    pub fn list_appointments_in_month(&self, today: Date) -> Result<Vec<Appointment>> {
        self.list_appointments_in_window(month_window(today))
    }

    /// Lists appointments whose start falls in the ISO-8601 week containing
    /// `today` (Monday through Sunday).
    pub fn list_appointments_in_week(&self, today: Date) -> Result<Vec<Appointment>> {
        self.list_appointments_in_window(iso_week_window(today))
    }

    fn list_appointments_in_window(&self, window: DateWindow) -> Result<Vec<Appointment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_APPOINTMENTS_IN_WINDOW_SQL)
            .db_context("Failed to prepare appointment window query")?;

        let appointments = stmt
            .query_map(
                named_params! {
                    ":window_start": window.start_at().to_string(),
                    ":window_end": window.end_at().to_string(),
                },
                Self::appointment_from_row,
            )
            .db_context("Failed to query appointments by window")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch appointments by window")?;

        Ok(appointments)
    }

    /// Lists appointments booked for the given customer.
    pub fn list_appointments_by_customer(&self, customer_id: u64) -> Result<Vec<Appointment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_APPOINTMENTS_BY_CUSTOMER_SQL)
            .db_context("Failed to prepare appointment customer query")?;

        let appointments = stmt
            .query_map(
                named_params! { ":customer_id": customer_id as i64 },
                Self::appointment_from_row,
            )
            .db_context("Failed to query appointments by customer")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch appointments by customer")?;

        Ok(appointments)
    }

    /// Retrieves an appointment by its ID.
    ///
    /// The contact join cannot fan out (contacts.id is the join key and a
    /// primary key), so this is a strict single-row lookup.
    pub fn get_appointment(&self, id: u64) -> Result<Option<Appointment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_APPOINTMENT_SQL)
            .db_context("Failed to prepare appointment query")?;

        stmt.query_row(named_params! { ":id": id as i64 }, Self::appointment_from_row)
            .optional()
            .db_context("Failed to query appointment")
    }

    /// Creates a new appointment, resolving the contact name to its id first.
    ///
    /// Returns [`AgendaError::ContactNotFound`] when no contact carries the
    /// given name.
    pub fn create_appointment(&mut self, params: &AppointmentCreate) -> Result<Appointment> {
        let contact = self
            .get_contact_by_name(&params.contact_name)?
            .ok_or_else(|| AgendaError::ContactNotFound {
                name: params.contact_name.clone(),
            })?;

        self.connection
            .execute(
                INSERT_APPOINTMENT_SQL,
                named_params! {
                    ":title": params.title,
                    ":description": params.description,
                    ":location": params.location,
                    ":kind": params.kind,
                    ":start_at": params.start_at.to_string(),
                    ":end_at": params.end_at.to_string(),
                    ":customer_id": params.customer_id as i64,
                    ":user_id": params.user_id as i64,
                    ":contact_id": contact.id as i64,
                },
            )
            .db_context("Failed to insert appointment")?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Appointment {
            id,
            title: params.title.clone(),
            description: params.description.clone(),
            location: params.location.clone(),
            kind: params.kind.clone(),
            start_at: params.start_at,
            end_at: params.end_at,
            customer_id: params.customer_id,
            user_id: params.user_id,
            contact_id: contact.id,
            contact_name: contact.name,
        })
    }

    /// Overwrites every mutable field of the appointment identified by
    /// `params.id`. This is a full-row overwrite, not a partial patch.
    ///
    /// Returns [`AgendaError::AppointmentNotFound`] when no row carries the
    /// id, and [`AgendaError::ContactNotFound`] when the contact name does
    /// not resolve.
    pub fn update_appointment(&mut self, params: &AppointmentUpdate) -> Result<Appointment> {
        let fields = &params.fields;
        let contact = self
            .get_contact_by_name(&fields.contact_name)?
            .ok_or_else(|| AgendaError::ContactNotFound {
                name: fields.contact_name.clone(),
            })?;

        let rows_affected = self
            .connection
            .execute(
                UPDATE_APPOINTMENT_SQL,
                named_params! {
                    ":title": fields.title,
                    ":description": fields.description,
                    ":location": fields.location,
                    ":kind": fields.kind,
                    ":start_at": fields.start_at.to_string(),
                    ":end_at": fields.end_at.to_string(),
                    ":customer_id": fields.customer_id as i64,
                    ":user_id": fields.user_id as i64,
                    ":contact_id": contact.id as i64,
                    ":id": params.id as i64,
                },
            )
            .db_context("Failed to update appointment")?;

        if rows_affected == 0 {
            return Err(AgendaError::AppointmentNotFound { id: params.id });
        }

        Ok(Appointment {
            id: params.id,
            title: fields.title.clone(),
            description: fields.description.clone(),
            location: fields.location.clone(),
            kind: fields.kind.clone(),
            start_at: fields.start_at,
            end_at: fields.end_at,
            customer_id: fields.customer_id,
            user_id: fields.user_id,
            contact_id: contact.id,
            contact_name: contact.name,
        })
    }

    /// Removes the appointment with the given ID.
    ///
    /// Returns [`AgendaError::AppointmentNotFound`] when there was nothing to
    /// delete, so callers can tell a no-op apart from a failed query.
    pub fn delete_appointment(&mut self, id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_APPOINTMENT_SQL, named_params! { ":id": id as i64 })
            .db_context("Failed to delete appointment")?;

        if rows_affected == 0 {
            return Err(AgendaError::AppointmentNotFound { id });
        }

        Ok(())
    }
}
