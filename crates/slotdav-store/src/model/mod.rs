pub mod appointment;
pub mod busy_slot;
pub mod range;
pub mod token;

pub use appointment::{Appointment, AppointmentStatus};
pub use busy_slot::{BusySlot, BusySlotFields, UpsertOutcome, Upserted};
pub use range::DateRange;
pub use token::{CalendarToken, CreatedToken, NewToken};
