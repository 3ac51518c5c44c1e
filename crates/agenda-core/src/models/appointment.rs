//! Appointment model definition.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// Represents one row of the appointments table.
///
/// Every appointment query joins the contacts table, so the resolved contact
/// name always travels with the record alongside the raw foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Unique identifier for the appointment
    pub id: u64,

    /// Title of the appointment
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Where the appointment takes place
    pub location: String,

    /// Appointment type (free text, e.g. "Planning Session")
    pub kind: String,

    /// Start of the appointment (civil wall-clock time)
    pub start_at: DateTime,

    /// End of the appointment (civil wall-clock time)
    pub end_at: DateTime,

    /// Customer the appointment is booked for (no backing table in this layer)
    pub customer_id: u64,

    /// User who booked the appointment
    pub user_id: u64,

    /// Contact assigned to the appointment
    pub contact_id: u64,

    /// Name of the assigned contact, resolved via join
    pub contact_name: String,
}
