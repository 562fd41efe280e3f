use std::path::PathBuf;

use hemobank::BloodType;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, clap::Parser)]
#[command(about = "Inspect or top up the blood inventory")]
pub struct Command {
    #[command(subcommand)]
    command: StockCommand,
}

#[derive(Debug, clap::Parser)]
enum StockCommand {
    /// Add blood bags to the inventory
    ///
    /// Stock is in-memory for the lifetime of a session; persistent levels
    /// belong in the `initial_stock` table of clinic.toml.
    Add {
        /// The blood type to add bags for
        #[clap(value_parser = super::parse_blood_type)]
        blood_type: BloodType,

        /// Number of bags to add
        quantity: u32,
    },

    /// Show current stock levels for all blood types
    Show,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut clinic = super::open_clinic(root)?;

        match self.command {
            StockCommand::Add {
                blood_type,
                quantity,
            } => {
                clinic.add_stock(blood_type, quantity);
                println!(
                    "{} {} bag(s) of {} (now {})",
                    "Added".success(),
                    quantity,
                    blood_type,
                    clinic.stock_of(blood_type)
                );
            }
            StockCommand::Show => {
                println!("{:<6} Bags", "Type");
                for (blood_type, quantity) in clinic.stock() {
                    let line = format!("{blood_type:<6} {quantity}");
                    if quantity == 0 {
                        println!("{}", line.dim());
                    } else {
                        println!("{line}");
                    }
                }
            }
        }

        Ok(())
    }
}
