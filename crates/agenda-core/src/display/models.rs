//! Display implementations for domain models.
//!
//! Kept separate from the model definitions so data structures stay free of
//! presentation logic. Appointments format as markdown blocks for the
//! terminal renderer; the directory records format as compact list lines.

use std::fmt;

use super::datetime::CivilDisplay;
use crate::models::{Appointment, Contact, Country, User};

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Type: {}", self.kind)?;
        writeln!(f, "- Location: {}", self.location)?;
        writeln!(f, "- Start: {}", CivilDisplay(&self.start_at))?;
        writeln!(f, "- End: {}", CivilDisplay(&self.end_at))?;
        writeln!(
            f,
            "- Contact: {} (ID: {})",
            self.contact_name, self.contact_id
        )?;
        writeln!(f, "- Customer ID: {}", self.customer_id)?;
        writeln!(f, "- User ID: {}", self.user_id)?;

        // Description as a paragraph
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => writeln!(f, "- {} (ID: {}) <{}>", self.name, self.id, email),
            None => writeln!(f, "- {} (ID: {})", self.name, self.id),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} (ID: {})", self.name, self.id)
    }
}

impl fmt::Display for User {
    // Passwords are never rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} (ID: {})", self.username, self.id)
    }
}
