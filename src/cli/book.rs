use std::{path::PathBuf, process};

use clap::Parser;
use hemobank::BookError;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Book an appointment for a registered donor")]
pub struct Command {
    /// The donor id to book for
    id: String,

    /// The appointment date (free text, e.g. "2024-06-01" or "next Tuesday")
    #[arg(long, short)]
    date: String,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut clinic = super::open_clinic(root)?;

        match clinic.book_appointment(&self.id, self.date) {
            Ok(appointment) => {
                println!(
                    "{} appointment for {} ({}) on {}",
                    "Booked".success(),
                    appointment.name,
                    appointment.donor_id,
                    appointment.date
                );
                Ok(())
            }
            Err(e @ BookError::DonorNotFound(_)) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }
}
