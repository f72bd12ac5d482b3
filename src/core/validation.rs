//! Order input validation
//!
//! Field rules are small reusable closures; [`validate_order`] applies them to
//! an incoming order before anything touches the store.

use crate::core::error::{OrderError, OrderResult};
use crate::core::order::Order;

/// Maximum length of `name` and `description`, in characters
pub const MAX_TEXT_LEN: usize = 100;

/// Message returned for any rejected name or description
pub const INVALID_ORDER_MESSAGE: &str = "Invalid order name or description.";

/// Validator: text must contain a non-whitespace character and be at most `max` characters
pub fn required_text(
    max: usize,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        if value.trim().is_empty() {
            return Err(format!("'{}' must not be empty", field));
        }

        let len = value.chars().count();
        if len > max {
            Err(format!(
                "'{}' must not exceed {} characters (got {})",
                field, max, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Check an order's name and description
///
/// The specific field failure is logged; callers only ever see
/// [`INVALID_ORDER_MESSAGE`].
pub fn validate_order(order: &Order) -> OrderResult<()> {
    let rule = required_text(MAX_TEXT_LEN);

    rule("name", &order.name)
        .and_then(|_| rule("description", &order.description))
        .map_err(|reason| {
            tracing::debug!(%reason, "Rejected order");
            OrderError::invalid_input(INVALID_ORDER_MESSAGE)
        })
}
