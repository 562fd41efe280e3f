use serde::{Deserialize, Serialize};

use super::BloodType;

/// A registered blood donor.
///
/// The identifier is assigned by the caller at registration time and is
/// immutable once the record exists. Records are persisted to the donor file
/// keyed by this identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    /// Unique donor identifier.
    ///
    /// Serialized as `donor_id` for compatibility with the existing donor
    /// file format.
    #[serde(rename = "donor_id")]
    id: String,

    /// Free-text donor name.
    name: String,

    /// The donor's blood type, stored in canonical upper-cased form.
    blood_type: BloodType,
}

impl Donor {
    /// Construct a new donor record.
    #[must_use]
    pub const fn new(id: String, name: String, blood_type: BloodType) -> Self {
        Self {
            id,
            name,
            blood_type,
        }
    }

    /// The donor's unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The donor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The donor's blood type.
    #[must_use]
    pub const fn blood_type(&self) -> BloodType {
        self.blood_type
    }
}
