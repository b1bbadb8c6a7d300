//! Time utilities: parsing the HH:MM values accepted by `add --at`.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Parse an optional `--at HH:MM` argument, rejecting malformed values.
pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    input
        .map(|s| parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone())))
        .transpose()
}
