//! Blood-donor clinic management
//!
//! Donor records are stored in a single JSON file; blood inventory and the
//! appointment log live in memory for the duration of a session.

pub mod domain;
pub use domain::{Appointment, BloodType, Config, Donor, InventoryLedger, ParseBloodTypeError};

/// Filesystem storage for donor records.
pub mod storage;
pub use storage::{DonorStore, LoadError, SaveError};

/// Clinic orchestration and business rules.
pub mod service;
pub use service::{BookError, ClinicService, Fulfillment, Notification, RegisterError, RequestError};
