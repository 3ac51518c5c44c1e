//! DateTime display utilities.

use std::fmt;

use jiff::civil::DateTime;

/// A wrapper around a civil [`DateTime`] that formats it for display.
///
/// The display format follows the pattern `YYYY-MM-DD HH:MM`; appointment
/// times are wall-clock values, so no timezone is shown.
pub struct CivilDisplay<'a>(pub &'a DateTime);

impl fmt::Display for CivilDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civil_display_format() {
        let at = "2024-03-15T10:00".parse::<DateTime>().unwrap();
        assert_eq!(format!("{}", CivilDisplay(&at)), "2024-03-15 10:00");
    }
}
