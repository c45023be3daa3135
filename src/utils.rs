//! Utils

use clap::Parser;

/// Arguments for the invoice demo
#[derive(Debug, Parser)]
pub struct InvoiceDemoArgs {
    /// Path to the catalog fixture file
    #[clap(short, long, default_value = "demos/catalog.yaml")]
    pub catalog: String,

    /// Lines to add to the cart, as `NAME:QTY` pairs
    #[clap(short, long)]
    pub line: Vec<String>,

    /// Name of a registered coupon to apply
    #[clap(long)]
    pub coupon: Option<String>,
}

/// Render a number in its English ordinal form ("1st", "2nd", "11th", ...).
pub fn ordinalize(number: u32) -> String {
    format!("{number}{}", ordinal_suffix(number))
}

/// English ordinal suffix rule: 11..=13 (mod 100) always take "th",
/// otherwise the last digit decides.
fn ordinal_suffix(number: u32) -> &'static str {
    if (11..=13).contains(&(number % 100)) {
        return "th";
    }

    match number % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinalize_uses_digit_suffixes() {
        assert_eq!(ordinalize(1), "1st");
        assert_eq!(ordinalize(2), "2nd");
        assert_eq!(ordinalize(3), "3rd");
        assert_eq!(ordinalize(4), "4th");
        assert_eq!(ordinalize(0), "0th");
        assert_eq!(ordinalize(21), "21st");
        assert_eq!(ordinalize(42), "42nd");
        assert_eq!(ordinalize(103), "103rd");
    }

    #[test]
    fn ordinalize_teens_always_take_th() {
        assert_eq!(ordinalize(11), "11th");
        assert_eq!(ordinalize(12), "12th");
        assert_eq!(ordinalize(13), "13th");
        assert_eq!(ordinalize(112), "112th");
        assert_eq!(ordinalize(1213), "1213th");
    }
}
