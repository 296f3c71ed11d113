//! Seat-lock input rules: quantity validation and TTL clamping.

use crate::error::CoreError;

/// Default lock time-to-live when the caller does not supply one.
pub const DEFAULT_TTL_MINUTES: i32 = 15;
/// Shortest TTL a caller may request.
pub const MIN_TTL_MINUTES: i32 = 1;
/// Longest TTL a caller may request (24 hours).
pub const MAX_TTL_MINUTES: i32 = 1440;

/// Resolve a caller-supplied TTL to a sane positive value.
///
/// `None` gets the default; out-of-range values are clamped rather than
/// rejected, matching the forgiving contract of the acquire endpoint.
pub fn clamp_ttl_minutes(requested: Option<i32>) -> i32 {
    requested
        .unwrap_or(DEFAULT_TTL_MINUTES)
        .clamp(MIN_TTL_MINUTES, MAX_TTL_MINUTES)
}

/// Validate a requested seat quantity.
pub fn validate_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity < 1 {
        return Err(CoreError::Validation(format!(
            "quantity must be at least 1, got {quantity}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_defaults_to_fifteen_minutes() {
        assert_eq!(clamp_ttl_minutes(None), DEFAULT_TTL_MINUTES);
    }

    #[test]
    fn ttl_in_range_passes_through() {
        assert_eq!(clamp_ttl_minutes(Some(30)), 30);
    }

    #[test]
    fn ttl_zero_clamps_up() {
        assert_eq!(clamp_ttl_minutes(Some(0)), MIN_TTL_MINUTES);
    }

    #[test]
    fn ttl_negative_clamps_up() {
        assert_eq!(clamp_ttl_minutes(Some(-5)), MIN_TTL_MINUTES);
    }

    #[test]
    fn ttl_above_max_clamps_down() {
        assert_eq!(clamp_ttl_minutes(Some(10_000)), MAX_TTL_MINUTES);
    }

    #[test]
    fn quantity_one_is_valid() {
        assert!(validate_quantity(1).is_ok());
    }

    #[test]
    fn quantity_zero_is_rejected() {
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn quantity_negative_is_rejected() {
        assert!(validate_quantity(-1).is_err());
    }
}
