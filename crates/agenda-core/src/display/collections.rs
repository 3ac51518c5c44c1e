//! Collection wrapper types for displaying groups of records.
//!
//! Each wrapper formats its records through their own Display impls and
//! handles the empty collection with a fixed message, so callers never
//! special-case zero rows.

use std::{fmt, ops::Index};

use crate::models::{Appointment, Contact, Country, User};

/// Newtype wrapper for displaying collections of appointments.
pub struct Appointments(pub Vec<Appointment>);

impl Appointments {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of appointments in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the appointment at the given index.
    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.0.get(index)
    }

    /// Get an iterator over the appointments.
    pub fn iter(&self) -> std::slice::Iter<'_, Appointment> {
        self.0.iter()
    }
}

impl Index<usize> for Appointments {
    type Output = Appointment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Appointments {
    type Item = Appointment;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Appointments {
    type Item = &'a Appointment;
    type IntoIter = std::slice::Iter<'a, Appointment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Appointments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No appointments found.")
        } else {
            for appointment in &self.0 {
                write!(f, "{}", appointment)?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of contacts.
pub struct Contacts(pub Vec<Contact>);

impl fmt::Display for Contacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No contacts found.")
        } else {
            for contact in &self.0 {
                write!(f, "{}", contact)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of countries.
pub struct Countries(pub Vec<Country>);

impl fmt::Display for Countries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No countries found.")
        } else {
            for country in &self.0 {
                write!(f, "{}", country)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of users.
pub struct Users(pub Vec<User>);

impl fmt::Display for Users {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No users found.")
        } else {
            for user in &self.0 {
                write!(f, "{}", user)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::DateTime;

    use super::*;

    fn create_test_appointment() -> Appointment {
        Appointment {
            id: 1,
            title: "Kickoff".to_string(),
            description: "Project kickoff meeting".to_string(),
            location: "Room 2".to_string(),
            kind: "Planning Session".to_string(),
            start_at: "2024-03-15T10:00".parse::<DateTime>().unwrap(),
            end_at: "2024-03-15T11:00".parse::<DateTime>().unwrap(),
            customer_id: 3,
            user_id: 1,
            contact_id: 2,
            contact_name: "Anika Costa".to_string(),
        }
    }

    #[test]
    fn test_appointments_display() {
        let appointments = Appointments(vec![create_test_appointment()]);
        let output = format!("{}", appointments);
        assert!(output.contains("# 1. Kickoff"));
        assert!(output.contains("Anika Costa"));
        assert!(output.contains("2024-03-15 10:00"));
    }

    #[test]
    fn test_appointments_display_empty() {
        let appointments = Appointments(vec![]);
        assert_eq!(format!("{}", appointments), "No appointments found.\n");
    }

    #[test]
    fn test_users_display_hides_password() {
        let users = Users(vec![User {
            id: 1,
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        }]);
        let output = format!("{}", users);
        assert!(output.contains("admin"));
        assert!(!output.contains("hunter2"));
    }

    #[test]
    fn test_contacts_display_empty() {
        assert_eq!(format!("{}", Contacts(vec![])), "No contacts found.\n");
    }
}
