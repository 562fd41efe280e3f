use std::{path::PathBuf, process};

use clap::Parser;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Display a donor's details")]
pub struct Command {
    /// The donor id to look up
    id: String,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let clinic = super::open_clinic(root)?;

        let Some(donor) = clinic.find_donor(&self.id) else {
            eprintln!("Donor {} not found", self.id);
            process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => {
                println!("{}", donor.id());
                println!("  {}  {}", "Name:".dim(), donor.name());
                println!("  {}  {}", "Type:".dim(), donor.blood_type());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(donor)?);
            }
        }

        Ok(())
    }
}
