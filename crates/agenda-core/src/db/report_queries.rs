//! Aggregate report queries.
//!
//! Each report returns structured rows; the fixed-column text tables are
//! produced by the wrappers in [`crate::display::reports`].

use jiff::civil::DateTime;
use rusqlite::types::Type;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ContactScheduleRow, CustomerTypeCount, TypeMonthCount},
};

// Months are grouped across years, mirroring the report's original
// month-of-year semantics.
const REPORT_TYPE_MONTH_SQL: &str = "SELECT CAST(strftime('%m', start_at) AS INTEGER) AS month, kind, COUNT(*) AS total FROM appointments GROUP BY month, kind ORDER BY month, kind";
const REPORT_CONTACT_SQL: &str = "SELECT contact_id, id, customer_id, title, kind, description, start_at, end_at FROM appointments ORDER BY contact_id, start_at";
const REPORT_CUSTOMER_SQL: &str = "SELECT customer_id, kind, COUNT(*) AS total FROM appointments GROUP BY customer_id, kind ORDER BY customer_id, kind";

impl super::Database {
    /// Counts appointments grouped by month of year and type.
    pub fn report_by_type_and_month(&self) -> Result<Vec<TypeMonthCount>> {
        let mut stmt = self
            .connection
            .prepare(REPORT_TYPE_MONTH_SQL)
            .db_context("Failed to prepare type/month report query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(TypeMonthCount {
                    month: row.get::<_, i64>(0)? as i8,
                    kind: row.get(1)?,
                    total: row.get::<_, i64>(2)? as u64,
                })
            })
            .db_context("Failed to query type/month report")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch type/month report")?;

        Ok(rows)
    }

    /// Lists every appointment's schedule fields, ordered by contact.
    pub fn report_by_contact(&self) -> Result<Vec<ContactScheduleRow>> {
        let mut stmt = self
            .connection
            .prepare(REPORT_CONTACT_SQL)
            .db_context("Failed to prepare contact report query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ContactScheduleRow {
                    contact_id: row.get::<_, i64>(0)? as u64,
                    appointment_id: row.get::<_, i64>(1)? as u64,
                    customer_id: row.get::<_, i64>(2)? as u64,
                    title: row.get(3)?,
                    kind: row.get(4)?,
                    description: row.get(5)?,
                    start_at: row.get::<_, String>(6)?.parse::<DateTime>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
                    })?,
                    end_at: row.get::<_, String>(7)?.parse::<DateTime>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
                    })?,
                })
            })
            .db_context("Failed to query contact report")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch contact report")?;

        Ok(rows)
    }

    /// Counts appointments grouped by customer and type.
    pub fn report_by_customer(&self) -> Result<Vec<CustomerTypeCount>> {
        let mut stmt = self
            .connection
            .prepare(REPORT_CUSTOMER_SQL)
            .db_context("Failed to prepare customer report query")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(CustomerTypeCount {
                    customer_id: row.get::<_, i64>(0)? as u64,
                    kind: row.get(1)?,
                    total: row.get::<_, i64>(2)? as u64,
                })
            })
            .db_context("Failed to query customer report")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch customer report")?;

        Ok(rows)
    }
}
