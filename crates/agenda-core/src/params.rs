//! Parameter structures for agenda operations.
//!
//! These structures carry caller input between interface layers (CLI today,
//! anything else tomorrow) and the core without framework-specific derives.
//! Interface layers define their own wrapper structs (e.g. clap `Args`) and
//! convert into these via `From`, so argument parsing concerns never leak
//! into the data-access layer.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Field set for creating an appointment.
///
/// The contact is referenced by name and resolved to its id inside the
/// gateway; all other foreign references are passed as raw ids, matching the
/// upstream caller contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentCreate {
    /// Name of the contact to assign (must already exist)
    pub contact_name: String,
    /// Title of the appointment
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Where the appointment takes place
    pub location: String,
    /// Appointment type (free text)
    pub kind: String,
    /// Start of the appointment
    pub start_at: DateTime,
    /// End of the appointment (caller guarantees start precedes end)
    pub end_at: DateTime,
    /// Customer the appointment is booked for
    pub customer_id: u64,
    /// User booking the appointment
    pub user_id: u64,
}

/// Parameters for updating an appointment.
///
/// Updates are full-row overwrites: every field is rewritten even when the
/// caller did not change it, so the complete field set is always required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    /// Replacement values for every mutable field
    #[serde(flatten)]
    pub fields: AppointmentCreate,
    /// ID of the appointment to overwrite
    pub id: u64,
}

/// Parameters for credential checking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Login name, matched exactly (case-sensitive)
    pub username: String,
    /// Password, matched exactly (case-sensitive)
    pub password: String,
}

/// Parameters for creating a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactCreate {
    /// Contact name (unique)
    pub name: String,
    /// Optional email address
    pub email: Option<String>,
}
