//! Country model definition.

use serde::{Deserialize, Serialize};

/// A country reference row. Pure lookup data, independent of appointments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    /// Unique identifier for the country
    pub id: u64,

    /// Country name
    pub name: String,
}
