//! Bounds validation utilities

use crate::error::{Error, Result};
use crate::limits::{MAX_TIMESTAMP, MIN_TIMESTAMP};

/// Check if a timestamp is within acceptable bounds
pub(crate) fn timestamp_in_bounds(value: i64) -> bool {
    (MIN_TIMESTAMP..=MAX_TIMESTAMP).contains(&value)
}

/// Validate a string field size
pub(crate) fn validate_field_size(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        return Err(Error::HeaderFieldTooLong {
            field: field.into(),
            length: value.len(),
            max,
        });
    }
    Ok(())
}
