//! Structured report rows.
//!
//! Report queries return these rows instead of preformatted text; rendering
//! to the fixed-column report tables lives in [`crate::display::reports`].

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// Appointment count for one (month-of-year, type) group.
///
/// Months are grouped across years, so two appointments in March of different
/// years fall into the same row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeMonthCount {
    /// Month of year, 1-12
    pub month: i8,

    /// Appointment type
    pub kind: String,

    /// Number of appointments in the group
    pub total: u64,
}

impl TypeMonthCount {
    /// English month name for the row's month number.
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Unknown",
        }
    }
}

/// One appointment in the per-contact schedule report, ordered by contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactScheduleRow {
    /// Contact the appointment is assigned to
    pub contact_id: u64,

    /// Appointment identifier
    pub appointment_id: u64,

    /// Customer the appointment is booked for
    pub customer_id: u64,

    /// Appointment title
    pub title: String,

    /// Appointment type
    pub kind: String,

    /// Appointment description
    pub description: String,

    /// Start of the appointment
    pub start_at: DateTime,

    /// End of the appointment
    pub end_at: DateTime,
}

/// Appointment count for one (customer, type) group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerTypeCount {
    /// Customer identifier
    pub customer_id: u64,

    /// Appointment type
    pub kind: String,

    /// Number of appointments in the group
    pub total: u64,
}
