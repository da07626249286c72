use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Upper bound on fractional digits used for cursor rounding. Nice spacings
/// never need more; the clamp keeps the decimal scale well inside
/// `rust_decimal`'s 28-digit range for raw spacing overrides.
pub(crate) const MAX_SPACING_PRECISION: u32 = 12;

/// Number of fractional decimal digits carried by a tick spacing.
///
/// Whole-number and degenerate spacings carry none; a spacing below one
/// carries `-floor(log10(spacing))` digits (0.5 → 1, 0.05 → 2, 0.2 → 1).
pub(crate) fn spacing_precision(spacing: f64) -> u32 {
    if !spacing.is_finite() || spacing <= 0.0 || spacing >= 1.0 {
        return 0;
    }

    let digits = -spacing.log10().floor();
    if digits <= 0.0 {
        return 0;
    }
    (digits as u32).min(MAX_SPACING_PRECISION)
}

/// Rounds `value` to `precision` fractional digits with ties toward zero.
///
/// Values outside the decimal range (non-finite or beyond 28 digits) are
/// returned unchanged; the permissive numeric contract has no error path.
pub(crate) fn round_half_down(value: f64, precision: u32) -> f64 {
    let Some(decimal) = Decimal::from_f64(value) else {
        return value;
    };

    decimal
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointTowardZero)
        .to_f64()
        .unwrap_or(value)
}
