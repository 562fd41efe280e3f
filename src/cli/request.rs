use std::{path::PathBuf, process};

use clap::Parser;
use hemobank::RequestError;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Release blood bags from stock and notify matching donors")]
pub struct Command {
    /// The requested blood type
    blood_type: String,

    /// Number of bags to release
    quantity: u32,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut clinic = super::open_clinic(root)?;

        match clinic.place_blood_request(&self.blood_type, self.quantity) {
            Ok(fulfillment) => {
                println!(
                    "{} {} bag(s) of {}",
                    "Released".success(),
                    fulfillment.released,
                    fulfillment.blood_type
                );

                if fulfillment.notified.is_empty() {
                    println!("{}", "No matching donors to notify.".dim());
                } else {
                    println!("Notifying {} donor(s):", fulfillment.notified.len());
                    for notification in &fulfillment.notified {
                        println!(
                            "  • {} ({}): a request for {} blood has been made, please consider \
                             donating",
                            notification.donor.name(),
                            notification.donor.id(),
                            notification.blood_type
                        );
                    }
                }
                Ok(())
            }
            Err(e @ (RequestError::InvalidBloodType(_) | RequestError::InsufficientStock { .. })) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }
}
