//! Text rendering for the aggregate reports.
//!
//! The literal column headers and tab separation are part of the report
//! contract; consumers parsing these blocks depend on exact ordering and
//! separators.

use std::fmt;

use super::datetime::CivilDisplay;
use crate::models::{ContactScheduleRow, CustomerTypeCount, TypeMonthCount};

/// Renders the appointment-count-by-type-and-month report.
pub struct TypeMonthReport(pub Vec<TypeMonthCount>);

impl fmt::Display for TypeMonthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Month          |      Type         |           Total")?;
        if self.0.is_empty() {
            writeln!(f, "No appointments recorded.")?;
            return Ok(());
        }
        for row in &self.0 {
            writeln!(f, "{}\t\t\t{}\t\t\t{}", row.month_name(), row.kind, row.total)?;
        }
        Ok(())
    }
}

/// Renders the per-contact schedule report.
pub struct ContactScheduleReport(pub Vec<ContactScheduleRow>);

impl fmt::Display for ContactScheduleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Contact ID | Appointment ID | Customer ID | Title | Type | Description | Start | End"
        )?;
        if self.0.is_empty() {
            writeln!(f, "No appointments recorded.")?;
            return Ok(());
        }
        for row in &self.0 {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                row.contact_id,
                row.appointment_id,
                row.customer_id,
                row.title,
                row.kind,
                row.description,
                CivilDisplay(&row.start_at),
                CivilDisplay(&row.end_at)
            )?;
        }
        Ok(())
    }
}

/// Renders the appointment-count-by-customer report.
pub struct CustomerTypeReport(pub Vec<CustomerTypeCount>);

impl fmt::Display for CustomerTypeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID     |     Total     |    Type")?;
        if self.0.is_empty() {
            writeln!(f, "No appointments recorded.")?;
            return Ok(());
        }
        for row in &self.0 {
            writeln!(f, "{}\t\t\t\t{}\t\t{}", row.customer_id, row.total, row.kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::DateTime;

    use super::*;

    #[test]
    fn test_type_month_report_rows() {
        let report = TypeMonthReport(vec![
            TypeMonthCount {
                month: 3,
                kind: "Planning Session".to_string(),
                total: 2,
            },
            TypeMonthCount {
                month: 4,
                kind: "De-Briefing".to_string(),
                total: 1,
            },
        ]);
        let output = format!("{}", report);
        assert!(output.starts_with("Month          |      Type         |           Total\n"));
        assert!(output.contains("March\t\t\tPlanning Session\t\t\t2"));
        assert!(output.contains("April\t\t\tDe-Briefing\t\t\t1"));
    }

    #[test]
    fn test_type_month_report_empty() {
        let output = format!("{}", TypeMonthReport(vec![]));
        assert!(output.contains("No appointments recorded."));
    }

    #[test]
    fn test_contact_schedule_report_rows() {
        let report = ContactScheduleReport(vec![ContactScheduleRow {
            contact_id: 2,
            appointment_id: 5,
            customer_id: 3,
            title: "Kickoff".to_string(),
            kind: "Planning Session".to_string(),
            description: "Project kickoff".to_string(),
            start_at: "2024-03-15T10:00".parse::<DateTime>().unwrap(),
            end_at: "2024-03-15T11:00".parse::<DateTime>().unwrap(),
        }]);
        let output = format!("{}", report);
        assert!(output.starts_with("Contact ID | Appointment ID | Customer ID |"));
        assert!(output.contains("2\t5\t3\tKickoff\tPlanning Session\tProject kickoff\t2024-03-15 10:00\t2024-03-15 11:00"));
    }

    #[test]
    fn test_customer_type_report_rows() {
        let report = CustomerTypeReport(vec![CustomerTypeCount {
            customer_id: 3,
            kind: "Planning Session".to_string(),
            total: 4,
        }]);
        let output = format!("{}", report);
        assert!(output.starts_with("Customer ID     |     Total     |    Type\n"));
        assert!(output.contains("3\t\t\t\t4\t\tPlanning Session"));
    }
}
