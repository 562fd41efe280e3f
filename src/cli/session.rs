//! Interactive prompt-driven session.
//!
//! One [`ClinicService`] instance lives for the whole session, so
//! appointments booked here stay visible until the session ends. This is the
//! closest surface to the original clinic workflow: choose a role, then work
//! through prompt-driven screens.

use std::path::PathBuf;

use clap::Parser;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use hemobank::ClinicService;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "Run an interactive donor or admin session")]
pub struct Command {
    /// Role to start the session in; prompted for when omitted
    #[arg(long, value_enum)]
    role: Option<Role>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Role {
    Donor,
    Admin,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: PathBuf) -> anyhow::Result<()> {
        let mut clinic = super::open_clinic(root)?;
        let theme = ColorfulTheme::default();

        let role = match self.role {
            Some(role) => role,
            None => {
                let choice = Select::with_theme(&theme)
                    .with_prompt("Log in as")
                    .items(&["Donor", "Admin"])
                    .default(0)
                    .interact()?;
                if choice == 0 { Role::Donor } else { Role::Admin }
            }
        };

        match role {
            Role::Donor => donor_loop(&mut clinic, &theme),
            Role::Admin => admin_loop(&mut clinic, &theme),
        }
    }
}

fn donor_loop(clinic: &mut ClinicService, theme: &ColorfulTheme) -> anyhow::Result<()> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Donor menu")
            .items(&[
                "Find donor",
                "Register donor",
                "Place blood request",
                "Book appointment",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => find_donor(clinic, theme)?,
            1 => register_donor(clinic, theme)?,
            2 => place_request(clinic, theme)?,
            3 => book_appointment(clinic, theme)?,
            _ => return Ok(()),
        }
    }
}

fn admin_loop(clinic: &mut ClinicService, theme: &ColorfulTheme) -> anyhow::Result<()> {
    loop {
        let choice = Select::with_theme(theme)
            .with_prompt("Admin menu")
            .items(&[
                "Show donor details",
                "Generate blood request",
                "Show appointments",
                "Add stock",
                "Show stock",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => show_donors(clinic),
            1 => generate_request(clinic, theme)?,
            2 => show_appointments(clinic),
            3 => add_stock(clinic, theme)?,
            4 => show_stock(clinic),
            _ => return Ok(()),
        }
    }
}

fn find_donor(clinic: &ClinicService, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("Donor ID")
        .interact_text()?;

    match clinic.find_donor(&id) {
        Some(donor) => println!("{}: {} ({})", donor.id(), donor.name(), donor.blood_type()),
        None => println!("Donor not found."),
    }
    Ok(())
}

fn register_donor(clinic: &mut ClinicService, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("Donor ID")
        .interact_text()?;
    let name: String = Input::with_theme(theme)
        .with_prompt("Donor name")
        .interact_text()?;
    let blood_type: String = Input::with_theme(theme)
        .with_prompt("Blood type")
        .interact_text()?;

    match clinic.register_donor(id, name, &blood_type) {
        Ok(donor) => println!(
            "{} donor {} ({})",
            "Registered".success(),
            donor.id(),
            donor.blood_type()
        ),
        Err(e) => eprintln!("{e}"),
    }
    Ok(())
}

fn place_request(clinic: &mut ClinicService, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let blood_type: String = Input::with_theme(theme)
        .with_prompt("Blood type")
        .interact_text()?;
    let quantity: u32 = Input::with_theme(theme)
        .with_prompt("Quantity")
        .interact_text()?;

    match clinic.place_blood_request(&blood_type, quantity) {
        Ok(fulfillment) => {
            println!(
                "{} {} bag(s) of {}",
                "Released".success(),
                fulfillment.released,
                fulfillment.blood_type
            );
            for notification in &fulfillment.notified {
                println!(
                    "  • notify {} ({})",
                    notification.donor.name(),
                    notification.donor.id()
                );
            }
        }
        Err(e) => eprintln!("{e}"),
    }
    Ok(())
}

fn book_appointment(clinic: &mut ClinicService, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("Donor ID")
        .interact_text()?;
    let date: String = Input::with_theme(theme)
        .with_prompt("Appointment date")
        .interact_text()?;

    match clinic.book_appointment(&id, date) {
        Ok(appointment) => println!(
            "{} appointment for {} on {}",
            "Booked".success(),
            appointment.name,
            appointment.date
        ),
        Err(e) => eprintln!("{e}"),
    }
    Ok(())
}

fn show_donors(clinic: &ClinicService) {
    let mut donors: Vec<_> = clinic.donors().collect();
    if donors.is_empty() {
        println!("No donors found.");
        return;
    }
    donors.sort_by(|a, b| a.id().cmp(b.id()));
    for donor in donors {
        println!("{}: {} ({})", donor.id(), donor.name(), donor.blood_type());
    }
}

fn generate_request(clinic: &ClinicService, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let blood_type: String = Input::with_theme(theme)
        .with_prompt("Blood type")
        .interact_text()?;

    // announcement only, stock is untouched
    match blood_type.parse() {
        Ok(blood_type) => {
            let notified = clinic.donors_of_type(blood_type);
            if notified.is_empty() {
                println!("No registered donors with blood type {blood_type}.");
            } else {
                for notification in &notified {
                    println!(
                        "  • notify {} ({})",
                        notification.donor.name(),
                        notification.donor.id()
                    );
                }
            }
        }
        Err(e) => eprintln!("{e}"),
    }
    Ok(())
}

fn show_appointments(clinic: &ClinicService) {
    let appointments = clinic.appointments();
    if appointments.is_empty() {
        println!("No appointments found.");
        return;
    }
    for appointment in appointments {
        println!(
            "{} ({}, {}) on {}",
            appointment.name, appointment.donor_id, appointment.blood_type, appointment.date
        );
    }
}

fn add_stock(clinic: &mut ClinicService, theme: &ColorfulTheme) -> anyhow::Result<()> {
    let blood_type: String = Input::with_theme(theme)
        .with_prompt("Blood type")
        .interact_text()?;
    let quantity: u32 = Input::with_theme(theme)
        .with_prompt("Quantity")
        .interact_text()?;

    match blood_type.parse() {
        Ok(blood_type) => {
            clinic.add_stock(blood_type, quantity);
            println!(
                "{} (now {} bag(s) of {})",
                "Added".success(),
                clinic.stock_of(blood_type),
                blood_type
            );
        }
        Err(e) => eprintln!("{e}"),
    }
    Ok(())
}

fn show_stock(clinic: &ClinicService) {
    for (blood_type, quantity) in clinic.stock() {
        let line = format!("{blood_type:<6} {quantity}");
        if quantity == 0 {
            println!("{}", line.dim());
        } else {
            println!("{line}");
        }
    }
}
