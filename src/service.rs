//! Clinic orchestration.
//!
//! [`ClinicService`] owns one [`DonorStore`], one [`InventoryLedger`] and one
//! [`AppointmentLog`] for the lifetime of a session, and implements the
//! business rules on top of them: donor registration, lookup, blood-request
//! fulfilment with donor notification, and appointment booking. It is the
//! only type the presentation layer talks to.

use std::path::{Path, PathBuf};

use crate::{
    domain::{
        Appointment, AppointmentLog, BloodType, Config, Donor, InventoryLedger,
        ParseBloodTypeError,
    },
    storage::{DonorStore, LoadError, SaveError},
};

/// The name of the configuration file inside a clinic root.
pub const CONFIG_FILE: &str = "clinic.toml";

/// Orchestrates donor records, blood inventory and appointments.
///
/// Constructed once per session via [`ClinicService::open`]; the same
/// instance must be used for every operation so that appointments booked
/// during the session remain visible (the appointment log is in-memory
/// only).
#[derive(Debug)]
pub struct ClinicService {
    store: DonorStore,
    ledger: InventoryLedger,
    appointments: AppointmentLog,
    config: Config,
    root: PathBuf,
}

impl ClinicService {
    /// Open the clinic rooted at `root`.
    ///
    /// Loads `clinic.toml` (falling back to defaults when absent), loads the
    /// donor file (an absent file yields an empty store), and seeds the
    /// inventory ledger from the configured initial stock.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the donor file exists but cannot be read
    /// or parsed. A missing donor file is not an error.
    pub fn open(root: PathBuf) -> Result<Self, LoadError> {
        let config = load_config(&root);
        let store = DonorStore::load(&root.join(config.data_file()))?;

        let mut ledger = InventoryLedger::new();
        for (blood_type, &quantity) in config.initial_stock() {
            ledger.add(blood_type, quantity);
        }

        Ok(Self {
            store,
            ledger,
            appointments: AppointmentLog::new(),
            config,
            root,
        })
    }

    /// Register a new donor.
    ///
    /// The blood type string is parsed case-insensitively and stored in its
    /// canonical upper-cased form. On success the full donor store is
    /// persisted immediately.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::DuplicateDonor`] if the id is already registered;
    ///   the existing record is left untouched.
    /// - [`RegisterError::InvalidBloodType`] if the blood type does not
    ///   parse; the store is left unchanged.
    /// - [`RegisterError::Save`] if the donor file cannot be written.
    ///
    /// # Panics
    ///
    /// Panics if the record vanishes between insertion and lookup (which
    /// cannot happen).
    pub fn register_donor(
        &mut self,
        id: String,
        name: String,
        blood_type: &str,
    ) -> Result<&Donor, RegisterError> {
        if self.store.get(&id).is_some() {
            return Err(RegisterError::DuplicateDonor(id));
        }
        let blood_type: BloodType = blood_type.parse()?;

        self.store.add(Donor::new(id.clone(), name, blood_type));
        self.store.save(&self.data_path())?;

        tracing::info!("Registered donor {id} ({blood_type})");
        Ok(self.store.get(&id).expect("just inserted"))
    }

    /// Look up a donor by id. No side effects.
    #[must_use]
    pub fn find_donor(&self, donor_id: &str) -> Option<&Donor> {
        self.store.get(donor_id)
    }

    /// Fulfil a blood request: release `quantity` bags of `blood_type` from
    /// stock and identify the donors to notify.
    ///
    /// The returned [`Fulfillment`] carries one [`Notification`] per donor
    /// whose blood type matches the request; delivering them is the
    /// presentation layer's responsibility.
    ///
    /// # Errors
    ///
    /// - [`RequestError::InvalidBloodType`] if the blood type does not
    ///   parse.
    /// - [`RequestError::InsufficientStock`] if fewer bags are available
    ///   than requested; stock is left untouched (no partial decrement).
    pub fn place_blood_request(
        &mut self,
        blood_type: &str,
        quantity: u32,
    ) -> Result<Fulfillment<'_>, RequestError> {
        let blood_type: BloodType = blood_type.parse()?;

        let available = self.ledger.quantity_of(blood_type.as_str());
        if available < quantity {
            return Err(RequestError::InsufficientStock {
                blood_type,
                available,
                requested: quantity,
            });
        }

        self.ledger.remove(blood_type.as_str(), quantity);
        tracing::info!("Released {quantity} bag(s) of {blood_type}");

        let notified = fan_out(&self.store, blood_type);
        Ok(Fulfillment {
            blood_type,
            released: quantity,
            notified,
        })
    }

    /// Book an appointment for an existing donor.
    ///
    /// The donor's name and blood type are captured by value into the
    /// appointment; the date is free text. The appointment log is in-memory
    /// only and is not persisted.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::DonorNotFound`] if the donor id is not
    /// registered.
    pub fn book_appointment(
        &mut self,
        donor_id: &str,
        date: String,
    ) -> Result<&Appointment, BookError> {
        let Some(donor) = self.store.get(donor_id) else {
            return Err(BookError::DonorNotFound(donor_id.to_string()));
        };
        let appointment = Appointment::for_donor(donor, date);

        tracing::info!("Booked appointment for donor {donor_id}");
        Ok(self.appointments.book(appointment))
    }

    /// Identify every donor whose blood type matches `blood_type`.
    ///
    /// This is a pure read-and-fan-out operation with no mutation: the core
    /// decides *who* to notify, the presentation layer decides *how*. It
    /// also backs the administrative "generate blood request" flow, which
    /// announces a request without touching stock.
    #[must_use]
    pub fn donors_of_type(&self, blood_type: BloodType) -> Vec<Notification<'_>> {
        fan_out(&self.store, blood_type)
    }

    /// All registered donors, in arbitrary order.
    pub fn donors(&self) -> impl Iterator<Item = &Donor> {
        self.store.donors()
    }

    /// All appointments booked this session, in booking order.
    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        self.appointments.all()
    }

    /// Add blood bags to the inventory.
    pub fn add_stock(&mut self, blood_type: BloodType, quantity: u32) {
        self.ledger.add(blood_type.as_str(), quantity);
        tracing::info!("Added {quantity} bag(s) of {blood_type} to stock");
    }

    /// Current stock level for a blood type.
    #[must_use]
    pub fn stock_of(&self, blood_type: BloodType) -> u32 {
        self.ledger.quantity_of(blood_type.as_str())
    }

    /// Snapshot of the full inventory, one entry per valid blood type.
    #[must_use]
    pub fn stock(&self) -> Vec<(BloodType, u32)> {
        BloodType::ALL
            .into_iter()
            .map(|bt| (bt, self.ledger.quantity_of(bt.as_str())))
            .collect()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    fn data_path(&self) -> PathBuf {
        self.root.join(self.config.data_file())
    }
}

fn fan_out(store: &DonorStore, blood_type: BloodType) -> Vec<Notification<'_>> {
    store
        .donors()
        .filter(|donor| donor.blood_type() == blood_type)
        .map(|donor| Notification { donor, blood_type })
        .collect()
}

fn load_config(root: &Path) -> Config {
    let path = root.join(CONFIG_FILE);
    Config::load(&path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

/// A pending notification: one donor to be alerted about a blood request.
///
/// Delivery is up to the caller; the core only selects the recipients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification<'a> {
    /// The donor to notify.
    pub donor: &'a Donor,
    /// The blood type that was requested.
    pub blood_type: BloodType,
}

/// The outcome of a successfully fulfilled blood request.
#[derive(Debug)]
pub struct Fulfillment<'a> {
    /// The requested blood type, in canonical form.
    pub blood_type: BloodType,
    /// How many bags were released from stock.
    pub released: u32,
    /// The donors to notify about the request.
    pub notified: Vec<Notification<'a>>,
}

/// Error registering a donor.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// The donor id is already registered.
    #[error("donor id '{0}' already exists")]
    DuplicateDonor(String),

    /// The blood type is not one of the eight valid classifications.
    #[error(transparent)]
    InvalidBloodType(#[from] ParseBloodTypeError),

    /// The donor file could not be persisted.
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Error fulfilling a blood request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The blood type is not one of the eight valid classifications.
    #[error(transparent)]
    InvalidBloodType(#[from] ParseBloodTypeError),

    /// Not enough bags in stock to satisfy the request.
    #[error("insufficient {blood_type} stock: {available} bag(s) available, {requested} requested")]
    InsufficientStock {
        /// The requested blood type.
        blood_type: BloodType,
        /// Bags currently in stock.
        available: u32,
        /// Bags requested.
        requested: u32,
    },
}

/// Error booking an appointment.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// No donor is registered under the given id.
    #[error("donor '{0}' not found")]
    DonorNotFound(String),
}
