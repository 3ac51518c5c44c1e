//! Display formatting for records, collections, and reports.
//!
//! Data access returns plain records and structured report rows; everything
//! about how they look on a terminal lives here. Domain models implement
//! [`std::fmt::Display`] in [`models`], collections get newtype wrappers with
//! empty-collection handling in [`collections`], operation outcomes are
//! wrapped by [`results`] and [`status`], and the fixed-column report tables
//! are rendered by [`reports`].

pub mod collections;
pub mod datetime;
pub mod models;
pub mod reports;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Appointments, Contacts, Countries, Users};
pub use datetime::CivilDisplay;
pub use reports::{ContactScheduleReport, CustomerTypeReport, TypeMonthReport};
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
