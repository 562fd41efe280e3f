pub mod donor_store;

pub use donor_store::{DonorStore, LoadError, SaveError};
