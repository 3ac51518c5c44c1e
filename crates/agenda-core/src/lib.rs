//! Core library for the Agenda scheduling application.
//!
//! This crate is the data-access layer: record types, one table gateway per
//! scheduling table (appointments, contacts, users, countries), aggregate
//! report queries, and a high-level async handle for upstream callers.
//!
//! # Architecture
//!
//! - [`db`]: blocking table gateways over a single rusqlite connection; every
//!   operation prepares its own statement and binds parameters by name.
//! - [`models`]: plain record types mapping one table row each, plus
//!   structured report rows.
//! - [`agenda`]: the async [`Agenda`] handle wrapping the gateways in
//!   `spawn_blocking`, built via [`AgendaBuilder`].
//! - [`display`]: all terminal formatting, including the fixed-column report
//!   tables. Data access never builds report text itself.
//!
//! Query failures, empty results, and zero-row writes are three different
//! outcomes: lookups return `Ok(None)`, zero-row writes return typed
//! not-found errors, and only genuine database failures surface as
//! [`AgendaError::Database`].
//!
//! # Quick Start
//!
//! ```rust
//! use agenda_core::{AgendaBuilder, params::ContactCreate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agenda = AgendaBuilder::new()
//!     .with_database_path(Some("agenda.db"))
//!     .build()
//!     .await?;
//!
//! let contact = agenda
//!     .create_contact(&ContactCreate {
//!         name: "Anika Costa".to_string(),
//!         email: None,
//!     })
//!     .await?;
//! println!("Created contact {}", contact.id);
//! # Ok(())
//! # }
//! ```

pub mod agenda;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use agenda::{Agenda, AgendaBuilder};
pub use db::Database;
pub use display::{
    Appointments, ContactScheduleReport, Contacts, Countries, CreateResult, CustomerTypeReport,
    OperationStatus, TypeMonthReport, UpdateResult, Users,
};
pub use error::{AgendaError, Result};
pub use models::{
    Appointment, Contact, ContactScheduleRow, Country, CustomerTypeCount, TypeMonthCount, User,
};
pub use params::{AppointmentCreate, AppointmentUpdate, ContactCreate, Credentials, Id};
