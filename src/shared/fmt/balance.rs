//! Fixed-point e8s balance formatting.
//!
//! Balances are carried as e8s (10^-8 token units). Display picks the scale
//! prefix that keeps the number readable: µ below 0.001 tokens, m below one
//! token, then the bare unit, k, and M.

use crate::shared::E8S_PER_UNIT;
use rust_decimal::Decimal;

/// Format an e8s amount with a scale prefix and two decimals.
///
/// The scaled value is truncated, not rounded: two decimal digits are kept
/// by integer division so the display never overstates a balance.
///
/// ```
/// use tally_sdk::shared::fmt::balance::format_balance_e8s;
///
/// assert_eq!(format_balance_e8s(100_000_000, "BTC"), "1.00 BTC");
/// assert_eq!(format_balance_e8s(50_000, "BTC"), "500.00 μBTC");
/// ```
pub fn format_balance_e8s(amount_e8s: u64, symbol: &str) -> String {
    let (divisor, prefix) = if amount_e8s < 100_000 {
        (100u128, "μ")
    } else if amount_e8s < 100_000_000 {
        (100_000, "m")
    } else if amount_e8s < 100_000_000_000 {
        (E8S_PER_UNIT as u128, "")
    } else if amount_e8s < 100_000_000_000_000 {
        (100_000_000_000, "k")
    } else {
        (100_000_000_000_000, "M")
    };

    // Keep two decimal digits through integer division.
    let scaled = amount_e8s as u128 * 100 / divisor;
    let value = Decimal::new(scaled as i64, 2);
    format!("{:.2} {}{}", value, prefix, symbol)
}
