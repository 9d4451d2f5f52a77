//! Two-decimal amount formatting
//!
//! Amounts round to the nearest cent with exact halves going away from zero,
//! so `0.125` prints as `0.13` and `-2.625` as `-2.63`.

/// Format an amount with exactly two decimals
pub fn format_amount(amount: f64) -> String {
    // A binary float sits exactly halfway between two cents only when it is
    // an odd number of eighths. Every other value rounds the same either way.
    let eighths = amount.abs() * 8.0;
    if eighths.fract() != 0.0 || eighths >= 2f64.powi(53) || eighths % 2.0 == 0.0 {
        return format!("{:.2}", amount);
    }

    let cents = (25 * eighths as u128 + 1) / 2;
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
