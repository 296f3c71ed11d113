use crate::item::ItemType;
use crate::types::DbId;

/// Domain-level error type shared across the workspace.
///
/// Every failure a request path can produce is a variant here or wraps one;
/// the API layer maps variants to HTTP statuses in `seatwise-api::error`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by primary key found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Request input failed validation.
    #[error("{0}")]
    Validation(String),

    /// The bookable item is missing, inactive, unpublished, or past its
    /// offering window. Not retriable for this item.
    #[error("{item_type} {item_id} is not available for booking")]
    ItemUnavailable { item_type: ItemType, item_id: DbId },

    /// The transactional capacity check failed. Not retriable without a
    /// smaller quantity or until a lock expires or is released.
    #[error("Not enough spots left: requested {requested}, {spots_left} remaining")]
    CapacityExceeded { requested: i32, spots_left: i64 },

    /// The request conflicts with current state (e.g. a terminal booking).
    #[error("{0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_unavailable_names_the_item() {
        let err = CoreError::ItemUnavailable {
            item_type: ItemType::Class,
            item_id: 7,
        };
        assert_eq!(err.to_string(), "CLASS 7 is not available for booking");
    }

    #[test]
    fn capacity_exceeded_reports_both_figures() {
        let err = CoreError::CapacityExceeded {
            requested: 3,
            spots_left: 1,
        };
        assert_eq!(
            err.to_string(),
            "Not enough spots left: requested 3, 1 remaining"
        );
    }
}
