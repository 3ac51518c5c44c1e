//! Data models for the scheduling tables.
//!
//! This module contains the record types that map table rows to in-memory
//! values. Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic; report rendering lives in [`crate::display::reports`].

pub mod appointment;
pub mod contact;
pub mod country;
pub mod reports;
pub mod user;


// Re-export all public types at the models level
pub use appointment::Appointment;
pub use contact::Contact;
pub use country::Country;
pub use reports::{ContactScheduleRow, CustomerTypeCount, TypeMonthCount};
pub use user::User;
