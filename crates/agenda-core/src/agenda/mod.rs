//! High-level async API for the scheduling data-access layer.
//!
//! [`Agenda`] is the handle upstream callers (the CLI, tests) go through. It
//! wraps every blocking table-gateway operation in
//! [`tokio::task::spawn_blocking`], keeping rusqlite work off the async
//! runtime. The blocking [`crate::db::Database`] gateways remain directly
//! usable for synchronous callers.
//!
//! # Usage
//!
//! ```rust
//! use agenda_core::{AgendaBuilder, params::Credentials};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agenda = AgendaBuilder::new()
//!     .with_database_path(Some("agenda.db"))
//!     .build()
//!     .await?;
//!
//! let ok = agenda
//!     .check_credentials(&Credentials {
//!         username: "admin".to_string(),
//!         password: "admin".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod appointment_ops;
pub mod builder;
pub mod directory_ops;
pub mod report_ops;

pub use builder::AgendaBuilder;

/// Main handle for scheduling operations.
pub struct Agenda {
    pub(crate) db_path: PathBuf,
}

impl Agenda {
    /// Creates a new handle with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
