use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing or hash parsing failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to process password hash: {0}")]
    PasswordHash(argon2::password_hash::Error),

    /// A local slot time could not be placed in the configured time zone.
    #[error("Slot time {time} on {date} has no unique instant in the configured offset")]
    InvalidSlotTime {
        /// Calendar date of the slot
        date: NaiveDate,
        /// Local wall-clock time of the slot
        time: NaiveTime,
    },

    /// A stored booking result holds a value outside `pending`, `win` and `loss`.
    #[error("Unknown booking result '{0}' stored in database")]
    UnknownBookingResult(String),
}
