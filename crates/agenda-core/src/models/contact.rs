//! Contact model definition.

use serde::{Deserialize, Serialize};

/// A contact that appointments can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: u64,

    /// Contact name (unique; appointment creation resolves this to the id)
    pub name: String,

    /// Optional email address
    pub email: Option<String>,
}
