//! # Shared Utility Functions
//!
//! Formatting helpers used wherever prices are shown to the user.
//!
//! ```rust
//! use shared::utils::format_price;
//!
//! assert_eq!(format_price(12.5, "$"), "$12.50");
//! ```

/// Format an amount with two decimals and a currency symbol prefix.
///
/// Negative amounts keep the sign in front of the symbol.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(3.0, "€"), "€3.00");
/// assert_eq!(format_price(-1.25, "$"), "-$1.25");
/// ```
pub fn format_price(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}
