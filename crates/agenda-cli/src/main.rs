//! Agenda CLI Application
//!
//! Command-line interface for the agenda scheduling tool.

mod args;
mod cli;
mod renderer;

use agenda_core::AgendaBuilder;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, json, command } = Args::parse();

    let agenda = AgendaBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize agenda")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Agenda started");

    let cli = Cli::new(agenda, renderer, json);

    match command {
        Some(Login(args)) => cli.handle_login(args).await,
        Some(Appointment { command }) => cli.handle_appointment_command(command).await,
        Some(Contact { command }) => cli.handle_contact_command(command).await,
        Some(Country { command }) => cli.handle_country_command(command).await,
        Some(User { command }) => cli.handle_user_command(command).await,
        Some(Report { command }) => cli.handle_report_command(command).await,
        None => cli.list_appointments().await,
    }
}
