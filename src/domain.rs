//! Domain models for the clinic.
//!
//! This module contains the core domain types: donors, blood types, the
//! inventory ledger, appointments, and configuration.

/// Blood type classification and parsing.
pub mod blood_type;
pub use blood_type::{BloodType, ParseBloodTypeError};

mod donor;
pub use donor::Donor;

mod inventory;
pub use inventory::InventoryLedger;

mod appointment;
pub use appointment::{Appointment, AppointmentLog};

mod config;
pub use config::Config;
