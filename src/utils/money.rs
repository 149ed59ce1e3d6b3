//! Fixed-point currency helpers.
//!
//! Money columns are `NUMERIC(p, 2)`: input may carry at most two decimal
//! places and must be non-negative; output is always rendered with exactly two.

use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::ValidationError;

pub const MONEY_SCALE: u32 = 2;

/// Integer digits allowed by `NUMERIC(10, 2)`.
pub const COST_INTEGER_DIGITS: u32 = 8;
/// Integer digits allowed by `NUMERIC(12, 2)`.
pub const REPAIR_COST_INTEGER_DIGITS: u32 = 10;

/// Returns `value` with exactly two decimal places.
pub fn normalize(value: Decimal) -> Decimal {
    let mut value = value.round_dp(MONEY_SCALE);
    value.rescale(MONEY_SCALE);
    value
}

/// Renders `value` with exactly two decimal places, e.g. `250.50`.
pub fn format(value: Decimal) -> String {
    normalize(value).to_string()
}

fn check(value: &Decimal, integer_digits: u32) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(money_error("money_negative", "Amount must not be negative"));
    }
    if value.normalize().scale() > MONEY_SCALE {
        return Err(money_error(
            "money_scale",
            "Ensure that there are no more than 2 decimal places",
        ));
    }
    let limit = Decimal::from(10u64.pow(integer_digits));
    if value.trunc() >= limit {
        return Err(money_error(
            "money_digits",
            "Amount has too many digits before the decimal point",
        ));
    }
    Ok(())
}

fn money_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Validator for `NUMERIC(10, 2)` amounts (asset and maintenance cost).
pub fn validate_cost(value: &Decimal) -> Result<(), ValidationError> {
    check(value, COST_INTEGER_DIGITS)
}

/// Validator for `NUMERIC(12, 2)` amounts (asset repair cost).
pub fn validate_repair_cost(value: &Decimal) -> Result<(), ValidationError> {
    check(value, REPAIR_COST_INTEGER_DIGITS)
}
