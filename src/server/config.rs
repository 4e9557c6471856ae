use chrono::{Duration, FixedOffset};

use crate::server::{
    error::AppError,
    model::slot::SlotWindow,
    util::parse::{env_or, parse_positive, parse_time_of_day, parse_utc_offset, require_env},
};

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,

    /// Offset used for "today" and "now" in slot rules. Defaults to Indian Standard Time.
    pub slot_offset: FixedOffset,
    pub slot_window: SlotWindow,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let start = parse_time_of_day("SLOT_DAY_START", &env_or("SLOT_DAY_START", "09:00"))?;
        let end = parse_time_of_day("SLOT_DAY_END", &env_or("SLOT_DAY_END", "18:00"))?;
        let length =
            parse_positive("SLOT_LENGTH_MINUTES", &env_or("SLOT_LENGTH_MINUTES", "20"))?;

        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8080"),
            jwt_secret: require_env("JWT_SECRET")?,
            jwt_expiration_hours: parse_positive(
                "JWT_EXPIRATION_HOURS",
                &env_or("JWT_EXPIRATION_HOURS", "24"),
            )?,
            slot_offset: parse_utc_offset("SLOT_UTC_OFFSET", &env_or("SLOT_UTC_OFFSET", "+05:30"))?,
            slot_window: SlotWindow {
                start,
                end,
                length: Duration::minutes(length),
            },
        })
    }
}
