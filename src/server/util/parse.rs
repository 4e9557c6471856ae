use chrono::{FixedOffset, NaiveTime};

use crate::server::error::config::ConfigError;

/// Reads an optional environment variable, falling back to `default` when unset.
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Reads a required environment variable.
///
/// # Returns
/// - `Ok(String)` - Variable value
/// - `Err(ConfigError::MissingEnvVar)` - Variable is not set
pub fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses a UTC offset such as `+05:30`, `-08:00` or `Z`.
///
/// # Arguments
/// - `name` - Environment variable the value came from, used in the error
/// - `value` - Offset string to parse
///
/// # Returns
/// - `Ok(FixedOffset)` - Parsed offset
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a valid `±HH:MM` offset
pub fn parse_utc_offset(name: &str, value: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: "expected an offset like +05:30".to_string(),
    };

    if value == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = match value.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Parses a wall-clock time in `HH:MM` form.
pub fn parse_time_of_day(name: &str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a positive integer value.
pub fn parse_positive(name: &str, value: &str) -> Result<i64, ConfigError> {
    match value.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected a positive integer".to_string(),
        }),
    }
}
