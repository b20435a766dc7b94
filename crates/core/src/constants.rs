use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Total percentage that can be distributed across one asset's inheritors
pub const RATIO_BUDGET: Decimal = dec!(100);

/// Decimal places kept for committed edits (slider release, field blur)
pub const COMMIT_DECIMAL_PRECISION: u32 = 1;

/// Decimal places kept while the user is still typing
pub const TYPING_DECIMAL_PRECISION: u32 = 20;

/// Upper bound on the scale a `Decimal` can carry
pub const MAX_DECIMAL_PRECISION: u32 = 28;

/// Maximum number of digits kept in an executor phone number
pub const PHONE_NUMBER_MAX_DIGITS: usize = 11;
