use std::{path::PathBuf, process};

use clap::Parser;
use hemobank::RegisterError;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Register a new donor and persist the donor file")]
pub struct Command {
    /// The unique donor id, assigned by the clinic
    id: String,

    /// The donor's name
    #[arg(long, short)]
    name: String,

    /// The donor's blood type (A+, A-, B+, B-, AB+, AB-, O+, O-)
    ///
    /// Case-insensitive; stored in upper-cased form.
    #[arg(long, short)]
    blood_type: String,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut clinic = super::open_clinic(root)?;

        match clinic.register_donor(self.id, self.name, &self.blood_type) {
            Ok(donor) => {
                println!(
                    "{} donor {} ({}, {})",
                    "Registered".success(),
                    donor.id(),
                    donor.name(),
                    donor.blood_type()
                );
                Ok(())
            }
            Err(e @ (RegisterError::DuplicateDonor(_) | RegisterError::InvalidBloodType(_))) => {
                eprintln!("{e}");
                process::exit(1);
            }
            Err(RegisterError::Save(e)) => Err(e.into()),
        }
    }
}
