//! Command-line interface definitions using clap
//!
//! Each subcommand gets a CLI-specific Args struct with clap derives and an
//! explicit `From` conversion into the core parameter types, so argument
//! parsing concerns (flags, help text, value parsing) never leak into
//! `agenda-core`.

use std::path::PathBuf;

use agenda_core::params::{
    AppointmentCreate, AppointmentUpdate, ContactCreate, Credentials, Id,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::DateTime;

/// Main command-line interface for the Agenda scheduling tool
///
/// Agenda manages appointment, contact, user, and country records in a local
/// SQLite database and renders a handful of aggregate reports.
#[derive(Parser)]
#[command(version, about, name = "agenda")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/agenda/agenda.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print records as JSON instead of rendered text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Agenda CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a username and password against the users table
    Login(LoginArgs),
    /// Manage appointments
    #[command(alias = "a")]
    Appointment {
        #[command(subcommand)]
        command: AppointmentCommands,
    },
    /// Manage contacts
    #[command(alias = "c")]
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
    /// Manage countries
    Country {
        #[command(subcommand)]
        command: CountryCommands,
    },
    /// Manage users
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Render aggregate reports
    #[command(alias = "r")]
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

/// Validate credentials
#[derive(ClapArgs)]
pub struct LoginArgs {
    /// Login name (matched exactly, case-sensitive)
    pub username: String,
    /// Password (matched exactly, case-sensitive)
    pub password: String,
}

impl From<LoginArgs> for Credentials {
    fn from(val: LoginArgs) -> Self {
        Credentials {
            username: val.username,
            password: val.password,
        }
    }
}

/// Create a new appointment
#[derive(ClapArgs)]
pub struct CreateAppointmentArgs {
    /// Title of the appointment
    pub title: String,
    /// Name of the contact to assign (must already exist)
    #[arg(short, long)]
    pub contact: String,
    /// Appointment type, e.g. "Planning Session"
    #[arg(short, long)]
    pub kind: String,
    /// Start as a civil datetime, e.g. 2024-03-15T10:00
    #[arg(short, long)]
    pub start: DateTime,
    /// End as a civil datetime; must follow the start
    #[arg(short, long)]
    pub end: DateTime,
    /// Customer the appointment is booked for
    #[arg(long)]
    pub customer_id: u64,
    /// User booking the appointment
    #[arg(long)]
    pub user_id: u64,
    /// Free-text description
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Where the appointment takes place
    #[arg(short, long, default_value = "")]
    pub location: String,
}

impl From<CreateAppointmentArgs> for AppointmentCreate {
    fn from(val: CreateAppointmentArgs) -> Self {
        AppointmentCreate {
            contact_name: val.contact,
            title: val.title,
            description: val.description,
            location: val.location,
            kind: val.kind,
            start_at: val.start,
            end_at: val.end,
            customer_id: val.customer_id,
            user_id: val.user_id,
        }
    }
}

/// Overwrite an existing appointment
///
/// Updates are full-row overwrites: every field must be supplied, even the
/// ones that did not change.
#[derive(ClapArgs)]
pub struct UpdateAppointmentArgs {
    /// ID of the appointment to overwrite
    pub id: u64,
    /// Title of the appointment
    pub title: String,
    #[arg(short, long)]
    pub contact: String,
    #[arg(short, long)]
    pub kind: String,
    #[arg(short, long)]
    pub start: DateTime,
    #[arg(short, long)]
    pub end: DateTime,
    #[arg(long)]
    pub customer_id: u64,
    #[arg(long)]
    pub user_id: u64,
    #[arg(short, long, default_value = "")]
    pub description: String,
    #[arg(short, long, default_value = "")]
    pub location: String,
}

impl From<UpdateAppointmentArgs> for AppointmentUpdate {
    fn from(val: UpdateAppointmentArgs) -> Self {
        AppointmentUpdate {
            fields: AppointmentCreate {
                contact_name: val.contact,
                title: val.title,
                description: val.description,
                location: val.location,
                kind: val.kind,
                start_at: val.start,
                end_at: val.end,
                customer_id: val.customer_id,
                user_id: val.user_id,
            },
            id: val.id,
        }
    }
}

/// Show details of a specific appointment
#[derive(ClapArgs)]
pub struct ShowAppointmentArgs {
    /// ID of the appointment to display
    pub id: u64,
}

impl From<ShowAppointmentArgs> for Id {
    fn from(val: ShowAppointmentArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete an appointment
#[derive(ClapArgs)]
pub struct DeleteAppointmentArgs {
    /// ID of the appointment to delete
    pub id: u64,
}

impl From<DeleteAppointmentArgs> for Id {
    fn from(val: DeleteAppointmentArgs) -> Self {
        Id { id: val.id }
    }
}

/// List appointments booked for one customer
#[derive(ClapArgs)]
pub struct ByCustomerArgs {
    /// Customer identifier to filter by
    pub customer_id: u64,
}

#[derive(Subcommand)]
pub enum AppointmentCommands {
    /// List all appointments
    #[command(aliases = ["l", "ls"])]
    List,
    /// List appointments starting in the current calendar month
    Month,
    /// List appointments starting in the current ISO week
    Week,
    /// List appointments for a customer
    ByCustomer(ByCustomerArgs),
    /// Show details of a specific appointment
    #[command(alias = "s")]
    Show(ShowAppointmentArgs),
    /// Create a new appointment
    #[command(alias = "c")]
    Create(CreateAppointmentArgs),
    /// Overwrite an existing appointment
    Update(UpdateAppointmentArgs),
    /// Delete an appointment
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteAppointmentArgs),
}

/// Add a new contact
#[derive(ClapArgs)]
pub struct AddContactArgs {
    /// Contact name (unique)
    pub name: String,
    /// Optional email address
    #[arg(short, long)]
    pub email: Option<String>,
}

impl From<AddContactArgs> for ContactCreate {
    fn from(val: AddContactArgs) -> Self {
        ContactCreate {
            name: val.name,
            email: val.email,
        }
    }
}

#[derive(Subcommand)]
pub enum ContactCommands {
    /// List all contacts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a new contact
    Add(AddContactArgs),
}

/// Add a new country
#[derive(ClapArgs)]
pub struct AddCountryArgs {
    /// Country name (unique)
    pub name: String,
}

#[derive(Subcommand)]
pub enum CountryCommands {
    /// List all countries
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a new country
    Add(AddCountryArgs),
}

/// Add a new user
#[derive(ClapArgs)]
pub struct AddUserArgs {
    /// Login name (unique)
    pub username: String,
    /// Password, stored as given
    pub password: String,
}

impl From<AddUserArgs> for Credentials {
    fn from(val: AddUserArgs) -> Self {
        Credentials {
            username: val.username,
            password: val.password,
        }
    }
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a new user
    Add(AddUserArgs),
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Appointment counts grouped by month of year and type
    TypeMonth,
    /// Every appointment's schedule fields, ordered by contact
    ByContact,
    /// Appointment counts grouped by customer and type
    ByCustomer,
}
