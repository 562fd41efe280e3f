use std::path::PathBuf;

use clap::Parser;
use hemobank::BloodType;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Announce a blood request to matching donors without releasing stock")]
pub struct Command {
    /// The blood type to announce a request for
    #[clap(value_parser = super::parse_blood_type)]
    blood_type: BloodType,

    /// Number of bags requested (informational only)
    #[arg(long, short)]
    quantity: Option<u32>,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let clinic = super::open_clinic(root)?;

        if let Some(quantity) = self.quantity {
            println!("{} bag(s) of {} blood requested.", quantity, self.blood_type);
        }

        let notified = clinic.donors_of_type(self.blood_type);
        if notified.is_empty() {
            println!(
                "{}",
                format!("No registered donors with blood type {}.", self.blood_type).dim()
            );
            return Ok(());
        }

        println!("Notifying {} donor(s):", notified.len());
        for notification in &notified {
            println!(
                "  • {} ({}): a request for {} blood has been made, please consider donating",
                notification.donor.name(),
                notification.donor.id(),
                notification.blood_type
            );
        }

        Ok(())
    }
}
