use serde::{Deserialize, Serialize};

use super::{BloodType, Donor};

/// A scheduled donor visit.
///
/// The donor's name and blood type are captured by value at booking time.
/// Later changes to the donor record (none exist in the current operations)
/// would not propagate into an already-booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Identifier of the donor the appointment was booked for.
    pub donor_id: String,
    /// Donor name as it was at booking time.
    pub name: String,
    /// Donor blood type as it was at booking time.
    pub blood_type: BloodType,
    /// Free-text appointment date. No format is enforced.
    pub date: String,
}

impl Appointment {
    /// Snapshot `donor` into an appointment on the given date.
    #[must_use]
    pub fn for_donor(donor: &Donor, date: String) -> Self {
        Self {
            donor_id: donor.id().to_string(),
            name: donor.name().to_string(),
            blood_type: donor.blood_type(),
            date,
        }
    }
}

/// Append-only log of booked appointments, in booking order.
///
/// The log is in-memory only: unlike donor records it is never written to
/// disk, so it is scoped to a single session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentLog {
    appointments: Vec<Appointment>,
}

impl AppointmentLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            appointments: Vec::new(),
        }
    }

    /// Append an appointment to the end of the log.
    ///
    /// There is no deduplication and no capacity limit.
    ///
    /// # Panics
    ///
    /// Panics if the log is empty after the push (which cannot happen).
    pub fn book(&mut self, appointment: Appointment) -> &Appointment {
        self.appointments.push(appointment);
        self.appointments.last().expect("just pushed")
    }

    /// All appointments in booking (FIFO) order.
    #[must_use]
    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donor(id: &str, name: &str, blood_type: BloodType) -> Donor {
        Donor::new(id.to_string(), name.to_string(), blood_type)
    }

    #[test]
    fn snapshot_copies_donor_fields() {
        let d = donor("D001", "Asha", BloodType::OPos);
        let appt = Appointment::for_donor(&d, "2024-06-01".to_string());

        assert_eq!(appt.donor_id, "D001");
        assert_eq!(appt.name, "Asha");
        assert_eq!(appt.blood_type, BloodType::OPos);
        assert_eq!(appt.date, "2024-06-01");
    }

    #[test]
    fn booking_order_is_preserved() {
        let mut log = AppointmentLog::new();
        log.book(Appointment::for_donor(
            &donor("D2", "Ben", BloodType::ANeg),
            "later".to_string(),
        ));
        log.book(Appointment::for_donor(
            &donor("D1", "Asha", BloodType::OPos),
            "earlier".to_string(),
        ));

        let dates: Vec<_> = log.all().iter().map(|a| a.date.as_str()).collect();
        // FIFO history, not sorted by date
        assert_eq!(dates, vec!["later", "earlier"]);
    }

    #[test]
    fn duplicate_bookings_are_allowed() {
        let d = donor("D1", "Asha", BloodType::OPos);
        let mut log = AppointmentLog::new();
        log.book(Appointment::for_donor(&d, "2024-06-01".to_string()));
        log.book(Appointment::for_donor(&d, "2024-06-01".to_string()));
        assert_eq!(log.all().len(), 2);
    }
}
