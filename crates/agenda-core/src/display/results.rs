//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Appointment, Contact, Country, User};

/// Wrapper type for displaying the result of create operations.
///
/// Formats a success line naming the resource and its ID, followed by the
/// created resource itself.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Appointment> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created appointment with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Contact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created contact with ID: {}", self.resource.id)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Country> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created country with ID: {}", self.resource.id)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<User> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created user with ID: {}", self.resource.id)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
pub struct UpdateResult<T> {
    pub resource: T,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for UpdateResult<Appointment> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated appointment with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
