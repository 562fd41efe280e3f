use std::path::PathBuf;

mod book;
mod find;
mod list;
mod notify;
mod register;
mod request;
mod session;
mod stock;
mod terminal;

use clap::ArgAction;
use hemobank::{BloodType, ClinicService, Config};
use tracing::instrument;

/// Parse a blood type from a string, normalizing case.
///
/// This is a CLI boundary function that accepts lowercase input
/// (`"o+"`, `"ab-"`) and normalizes it before parsing.
fn parse_blood_type(s: &str) -> Result<BloodType, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// The path to the clinic root directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Session(session::Command::default()))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Interactive donor/admin session (default)
    Session(session::Command),

    /// Initialize a new clinic root
    Init,

    /// Register a new donor
    Register(register::Command),

    /// Look up a donor by id
    Find(find::Command),

    /// Fulfil a blood request from stock and notify matching donors
    Request(request::Command),

    /// Book an appointment for a registered donor
    Book(book::Command),

    /// List all registered donors
    Donors(list::Donors),

    /// List appointments booked this session
    ///
    /// The appointment log is in-memory only: unlike donor records it does
    /// not survive across invocations.
    Appointments(list::Appointments),

    /// Announce a blood request to matching donors without touching stock
    Notify(notify::Command),

    /// Inspect or top up the blood inventory
    Stock(stock::Command),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Session(command) => command.run(root)?,
            Self::Init => Init::run(&root)?,
            Self::Register(command) => command.run(root)?,
            Self::Find(command) => command.run(root)?,
            Self::Request(command) => command.run(root)?,
            Self::Book(command) => command.run(root)?,
            Self::Donors(command) => command.run(root)?,
            Self::Appointments(command) => command.run(root)?,
            Self::Notify(command) => command.run(root)?,
            Self::Stock(command) => command.run(root)?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {}

impl Init {
    #[instrument]
    fn run(root: &PathBuf) -> anyhow::Result<()> {
        let config_path = root.join(hemobank::service::CONFIG_FILE);
        if config_path.exists() {
            anyhow::bail!(
                "Clinic already initialized (found existing {})",
                config_path.display()
            );
        }

        let config = Config::default();
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create clinic.toml: {e}"))?;

        println!("Initialized clinic in {}", root.display());
        println!("  Created: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("  hemo register D001 --name \"Your First Donor\" --blood-type O+");

        Ok(())
    }
}

/// Open the clinic at `root`, mapping load failures to a readable error.
fn open_clinic(root: PathBuf) -> anyhow::Result<ClinicService> {
    ClinicService::open(root).map_err(Into::into)
}
