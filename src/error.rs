// ⚠️ Value Errors
// Typed failures for price / quantity / date input

use thiserror::Error;

/// Errors raised while turning raw text into product values.
///
/// The interactive path recovers from these by re-prompting; the CSV
/// import path wraps them in `anyhow` context and aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("invalid price '{0}' (expected format $9.99)")]
    InvalidPrice(String),

    #[error("invalid quantity '{0}' (must be a whole number)")]
    InvalidQuantity(String),

    #[error("negative quantity {0} (must be 0 or more)")]
    NegativeQuantity(i64),

    #[error("invalid date '{0}' (expected M/D/YY or M/D/YYYY)")]
    InvalidDate(String),
}
