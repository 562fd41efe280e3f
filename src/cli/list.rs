use std::path::PathBuf;

use clap::Parser;
use hemobank::Donor;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Parser, Default)]
#[command(about = "List all registered donors")]
pub struct Donors {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Donors {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let clinic = super::open_clinic(root)?;

        let mut donors: Vec<&Donor> = clinic.donors().collect();
        donors.sort_by(|a, b| a.id().cmp(b.id()));

        if donors.is_empty() {
            println!("No donors registered yet. Add one with 'hemo register'.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&donors)?);
            }
            OutputFormat::Table => {
                if is_narrow() {
                    for donor in &donors {
                        println!("{}: {} ({})", donor.id(), donor.name(), donor.blood_type());
                    }
                } else {
                    println!("{:<12} {:<24} Type", "Id", "Name");
                    for donor in &donors {
                        println!(
                            "{:<12} {:<24} {}",
                            donor.id(),
                            donor.name(),
                            donor.blood_type()
                        );
                    }
                }
                println!();
                println!("Total: {}", donors.len());
            }
        }

        Ok(())
    }
}

#[derive(Debug, Parser, Default)]
#[command(about = "List appointments booked in this session")]
pub struct Appointments {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

impl Appointments {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let clinic = super::open_clinic(root)?;
        let appointments = clinic.appointments();

        if appointments.is_empty() {
            println!("No appointments found.");
            println!(
                "{}",
                "The appointment log is per-session; book one with 'hemo book' or from an \
                 interactive 'hemo session'."
                    .dim()
            );
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(appointments)?);
            }
            OutputFormat::Table => {
                // booking order, not date order
                for appointment in appointments {
                    println!(
                        "{} ({}, {}) on {}",
                        appointment.name,
                        appointment.donor_id,
                        appointment.blood_type,
                        appointment.date
                    );
                }
                println!();
                println!("Total: {}", appointments.len());
            }
        }

        Ok(())
    }
}
