//! Command handlers bridging parsed arguments to the core Agenda handle
//!
//! Each handler converts its CLI argument struct into the corresponding core
//! parameter type, awaits the operation on [`Agenda`], and emits the outcome
//! through the shared renderer. With `--json` the raw records are printed as
//! pretty JSON instead of the rendered text.

use agenda_core::{
    display::{
        Appointments, ContactScheduleReport, Contacts, Countries, CreateResult,
        CustomerTypeReport, OperationStatus, TypeMonthReport, UpdateResult, Users,
    },
    params::Id,
    Agenda,
};
use anyhow::{Context, Result};
use serde::Serialize;

use crate::args::{
    AppointmentCommands, ContactCommands, CountryCommands, LoginArgs, ReportCommands,
    UserCommands,
};
use crate::renderer::TerminalRenderer;

/// CLI command dispatcher holding the core handle and output configuration
pub struct Cli {
    agenda: Agenda,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    /// Create a new CLI dispatcher
    pub fn new(agenda: Agenda, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            agenda,
            renderer,
            json,
        }
    }

    /// Print a record (or collection) as JSON or rendered text
    fn emit<T: Serialize>(&self, record: &T, rendered: String) -> Result<()> {
        if self.json {
            let json =
                serde_json::to_string_pretty(record).context("Failed to serialize record")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&rendered)
        }
    }

    /// Print an operation status message; in JSON mode emits `{"success": ..}`
    fn emit_status(&self, status: OperationStatus) -> Result<()> {
        if self.json {
            println!(
                "{}",
                serde_json::json!({ "success": status.success, "message": status.message })
            );
            Ok(())
        } else {
            self.renderer.render(&status.to_string())
        }
    }

    /// Validate credentials and report the outcome
    pub async fn handle_login(&self, args: LoginArgs) -> Result<()> {
        let valid = self
            .agenda
            .check_credentials(&args.into())
            .await
            .context("Failed to check credentials")?;

        let status = if valid {
            OperationStatus::success("Login successful.".to_string())
        } else {
            OperationStatus::failure("Invalid username or password.".to_string())
        };
        self.emit_status(status)?;

        if !valid {
            std::process::exit(1);
        }
        Ok(())
    }

    /// Dispatch an appointment subcommand
    pub async fn handle_appointment_command(&self, command: AppointmentCommands) -> Result<()> {
        use AppointmentCommands::*;

        match command {
            List => self.list_appointments().await,
            Month => {
                let appointments = self
                    .agenda
                    .list_current_month()
                    .await
                    .context("Failed to list appointments for the current month")?;
                let appointments = Appointments(appointments);
                self.emit(&appointments.0, appointments.to_string())
            }
            Week => {
                let appointments = self
                    .agenda
                    .list_current_week()
                    .await
                    .context("Failed to list appointments for the current week")?;
                let appointments = Appointments(appointments);
                self.emit(&appointments.0, appointments.to_string())
            }
            ByCustomer(args) => {
                let appointments = self
                    .agenda
                    .list_appointments_by_customer(args.customer_id)
                    .await
                    .context("Failed to list appointments by customer")?;
                let appointments = Appointments(appointments);
                self.emit(&appointments.0, appointments.to_string())
            }
            Show(args) => {
                let params: Id = args.into();
                let appointment = self
                    .agenda
                    .get_appointment(&params)
                    .await
                    .context("Failed to get appointment")?;
                match appointment {
                    Some(appointment) => self.emit(&appointment, appointment.to_string()),
                    None => self.emit_status(OperationStatus::failure(format!(
                        "No appointment found with ID: {}",
                        params.id
                    ))),
                }
            }
            Create(args) => {
                let appointment = self
                    .agenda
                    .create_appointment(&args.into())
                    .await
                    .context("Failed to create appointment")?;
                let result = CreateResult::new(appointment);
                self.emit(&result.resource, result.to_string())
            }
            Update(args) => {
                let appointment = self
                    .agenda
                    .update_appointment(&args.into())
                    .await
                    .context("Failed to update appointment")?;
                let result = UpdateResult::new(appointment);
                self.emit(&result.resource, result.to_string())
            }
            Delete(args) => {
                let params: Id = args.into();
                self.agenda
                    .delete_appointment(&params)
                    .await
                    .context("Failed to delete appointment")?;
                self.emit_status(OperationStatus::success(format!(
                    "Deleted appointment with ID: {}",
                    params.id
                )))
            }
        }
    }

    /// List every appointment; also the default action when no command given
    pub async fn list_appointments(&self) -> Result<()> {
        let appointments = self
            .agenda
            .list_appointments()
            .await
            .context("Failed to list appointments")?;
        let appointments = Appointments(appointments);
        self.emit(&appointments.0, appointments.to_string())
    }

    /// Dispatch a contact subcommand
    pub async fn handle_contact_command(&self, command: ContactCommands) -> Result<()> {
        match command {
            ContactCommands::List => {
                let contacts = self
                    .agenda
                    .list_contacts()
                    .await
                    .context("Failed to list contacts")?;
                let contacts = Contacts(contacts);
                self.emit(&contacts.0, contacts.to_string())
            }
            ContactCommands::Add(args) => {
                let contact = self
                    .agenda
                    .create_contact(&args.into())
                    .await
                    .context("Failed to create contact")?;
                let result = CreateResult::new(contact);
                self.emit(&result.resource, result.to_string())
            }
        }
    }

    /// Dispatch a country subcommand
    pub async fn handle_country_command(&self, command: CountryCommands) -> Result<()> {
        match command {
            CountryCommands::List => {
                let countries = self
                    .agenda
                    .list_countries()
                    .await
                    .context("Failed to list countries")?;
                let countries = Countries(countries);
                self.emit(&countries.0, countries.to_string())
            }
            CountryCommands::Add(args) => {
                let country = self
                    .agenda
                    .create_country(&args.name)
                    .await
                    .context("Failed to create country")?;
                let result = CreateResult::new(country);
                self.emit(&result.resource, result.to_string())
            }
        }
    }

    /// Dispatch a user subcommand
    pub async fn handle_user_command(&self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::List => {
                let users = self
                    .agenda
                    .list_users()
                    .await
                    .context("Failed to list users")?;
                let users = Users(users);
                self.emit(&users.0, users.to_string())
            }
            UserCommands::Add(args) => {
                let user = self
                    .agenda
                    .create_user(&args.into())
                    .await
                    .context("Failed to create user")?;
                let result = CreateResult::new(user);
                self.emit(&result.resource, result.to_string())
            }
        }
    }

    /// Dispatch a report subcommand
    pub async fn handle_report_command(&self, command: ReportCommands) -> Result<()> {
        match command {
            ReportCommands::TypeMonth => {
                let rows = self
                    .agenda
                    .report_by_type_and_month()
                    .await
                    .context("Failed to run type/month report")?;
                let report = TypeMonthReport(rows);
                self.emit(&report.0, report.to_string())
            }
            ReportCommands::ByContact => {
                let rows = self
                    .agenda
                    .report_by_contact()
                    .await
                    .context("Failed to run contact schedule report")?;
                let report = ContactScheduleReport(rows);
                self.emit(&report.0, report.to_string())
            }
            ReportCommands::ByCustomer => {
                let rows = self
                    .agenda
                    .report_by_customer()
                    .await
                    .context("Failed to run customer report")?;
                let report = CustomerTypeReport(rows);
                self.emit(&report.0, report.to_string())
            }
        }
    }
}
