//! Value-axis grid levels.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Horizontal grid levels bracketing `[min, max]`, spaced at the power of
/// ten just below the range. A degenerate range (`max <= min`) yields no
/// levels.
pub fn value_levels(min: Decimal, max: Decimal) -> Vec<Decimal> {
    let range = max - min;
    if range <= Decimal::ZERO {
        return Vec::new();
    }
    let Some(range_f) = range.to_f64() else {
        return Vec::new();
    };
    let exponent = range_f.log10().floor() as i32;
    let interval = pow10(exponent);

    let mut levels = Vec::new();
    let mut current = (min / interval).floor() * interval;
    while current < max + interval {
        levels.push(current);
        current += interval;
    }
    levels
}

fn pow10(exponent: i32) -> Decimal {
    if exponent >= 0 {
        (0..exponent).fold(Decimal::ONE, |acc, _| acc * Decimal::from(10))
    } else {
        Decimal::new(1, (-exponent as u32).min(28))
    }
}
