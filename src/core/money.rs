//! Decimal helpers for line-item money arithmetic.
//!
//! Line values are rounded half-up to two places at fixed points of the
//! calculation; document totals are rounded to whole units only by the
//! round-off policy. Overflow never panics: it degrades to zero and is logged.

use rust_decimal::Decimal;
use tracing::warn;

/// Decimal places for line rate and discount
pub const MONEY_SCALE: u32 = 2;

/// 100, for percentage conversions
pub const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds to `dp` decimal places, ties toward positive infinity.
///
/// This is `Math.round` semantics: 0.5 rounds to 1, -0.5 rounds to 0,
/// -1.5 rounds to -1. `dp` must be at most 18.
pub fn round_half_up(amount: Decimal, dp: u32) -> Decimal {
    let factor = Decimal::from(10i64.pow(dp));

    let rounded = amount
        .checked_mul(factor)
        .and_then(|scaled| scaled.checked_add(HALF))
        .map(|shifted| shifted.floor())
        .and_then(|units| units.checked_div(factor));

    match rounded {
        Some(value) => value,
        // Only reachable near Decimal::MAX, where the fractional part is gone anyway
        None => amount.round_dp_with_strategy(
            dp,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        ),
    }
}

/// Rounds a line value to [`MONEY_SCALE`] places.
pub fn round_money(amount: Decimal) -> Decimal {
    round_half_up(amount, MONEY_SCALE)
}

/// `a × b`, or zero on overflow
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        warn!("Decimal overflow multiplying {} by {}, using 0", a, b);
        Decimal::ZERO
    })
}

/// `a ÷ b`, or zero when `b` is zero or the quotient overflows
pub fn div(a: Decimal, b: Decimal) -> Decimal {
    if b.is_zero() {
        return Decimal::ZERO;
    }
    a.checked_div(b).unwrap_or_else(|| {
        warn!("Decimal overflow dividing {} by {}, using 0", a, b);
        Decimal::ZERO
    })
}

/// `a + b`, or zero on overflow
pub fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        warn!("Decimal overflow adding {} and {}, using 0", a, b);
        Decimal::ZERO
    })
}

/// `a - b`, or zero on overflow
pub fn sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| {
        warn!("Decimal overflow subtracting {} from {}, using 0", b, a);
        Decimal::ZERO
    })
}

/// `percentage / 100 × amount`
pub fn percent_of(amount: Decimal, percentage: Decimal) -> Decimal {
    mul(div(percentage, HUNDRED), amount)
}
