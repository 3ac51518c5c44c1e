//! User model definition.

use serde::{Deserialize, Serialize};

/// An application user, checked against during login.
///
/// Passwords are stored and compared as plain text; hashing is out of scope
/// for this layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: u64,

    /// Login name (unique)
    pub username: String,

    /// Stored password
    pub password: String,
}
