// 📦 Product Model
// Entity + value codecs (price in cents, M/D/Y dates, quantities)

use crate::error::InventoryError;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Product row as stored in the `products` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Auto-assigned, never changes once the row exists
    pub id: i64,
    /// Business key used for upsert matching
    pub name: String,
    /// Price in cents
    pub price: i64,
    pub quantity: i64,
    pub updated: NaiveDate,
}

/// Product values before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
    pub updated: NaiveDate,
}

impl NewProduct {
    /// Build a new product, trimming the name
    pub fn new(name: &str, price: i64, quantity: i64, updated: NaiveDate) -> Self {
        NewProduct {
            name: name.trim().to_string(),
            price,
            quantity,
            updated,
        }
    }
}

// ============================================================================
// PRICE
// ============================================================================

fn price_pattern() -> &'static Regex {
    static PRICE_RE: OnceLock<Regex> = OnceLock::new();
    PRICE_RE.get_or_init(|| Regex::new(r"^\$\d+\.\d{2}$").expect("Invalid price regex"))
}

/// True when `input` is exactly `$` + digits + `.` + two digits
pub fn is_valid_price_input(input: &str) -> bool {
    price_pattern().is_match(input)
}

/// Parse a `$D.DD` string into cents.
///
/// Surrounding whitespace is ignored; anything else that doesn't match the
/// dollar-and-cents shape is rejected rather than silently mis-read.
pub fn parse_price(input: &str) -> Result<i64, InventoryError> {
    let invalid = || InventoryError::InvalidPrice(input.to_string());
    let trimmed = input.trim();

    if !is_valid_price_input(trimmed) {
        return Err(invalid());
    }

    let (dollars, cents) = trimmed[1..].split_once('.').ok_or_else(invalid)?;
    let dollars: i64 = dollars.parse().map_err(|_| invalid())?;
    let cents: i64 = cents.parse().map_err(|_| invalid())?;

    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(invalid)
}

/// Format cents as `$D.DD`
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

// ============================================================================
// QUANTITY
// ============================================================================

/// Parse a non-negative whole quantity
pub fn parse_quantity(input: &str) -> Result<i64, InventoryError> {
    let trimmed = input.trim();
    let quantity: i64 = trimmed
        .parse()
        .map_err(|_| InventoryError::InvalidQuantity(trimmed.to_string()))?;

    if quantity < 0 {
        return Err(InventoryError::NegativeQuantity(quantity));
    }

    Ok(quantity)
}

// ============================================================================
// DATES
// ============================================================================

/// Parse `M/D/YY` or `M/D/YYYY`.
///
/// Two-digit years belong to the 2000s (`1/1/20` is 2020-01-01).
pub fn parse_date(input: &str) -> Result<NaiveDate, InventoryError> {
    let invalid = || InventoryError::InvalidDate(input.to_string());
    let parts: Vec<&str> = input.trim().split('/').collect();

    let [month, day, year] = parts.as_slice() else {
        return Err(invalid());
    };

    let (month, day, year_str) = (month.trim(), day.trim(), year.trim());

    // Unsigned digits only; `parse` alone would accept `+5` / `-5`
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !(all_digits(month) && all_digits(day) && all_digits(year_str)) {
        return Err(invalid());
    }

    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    let mut year: i32 = year_str.parse().map_err(|_| invalid())?;

    match year_str.len() {
        1 | 2 => year += 2000,
        4 => {}
        _ => return Err(invalid()),
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Format as `M/D/YYYY` (no zero padding)
pub fn format_date_mdy(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_price_valid() {
        assert_eq!(parse_price("$5.00").unwrap(), 500);
        assert_eq!(parse_price("$6.50").unwrap(), 650);
        assert_eq!(parse_price("$0.07").unwrap(), 7);
        assert_eq!(parse_price(" $12.34 ").unwrap(), 1234);
    }

    #[test]
    fn test_parse_price_rejects_malformed() {
        for bad in ["5.00", "$5", "$5.0", "$5.000", "$.99", "$5..99", "$a.bc", ""] {
            assert!(
                matches!(parse_price(bad), Err(InventoryError::InvalidPrice(_))),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_price_round_trip_preserves_value() {
        for input in ["$0.00", "$0.99", "$1.05", "$19.99", "$1234.50"] {
            let cents = parse_price(input).unwrap();
            assert_eq!(format_price(cents), input);
        }
    }

    #[test]
    fn test_price_pattern_matches_interactive_rule() {
        assert!(is_valid_price_input("$9.99"));
        assert!(is_valid_price_input("$100.00"));
        assert!(!is_valid_price_input("9.99"));
        assert!(!is_valid_price_input("$9.9"));
        assert!(!is_valid_price_input("$9,99"));
        assert!(!is_valid_price_input(" $9.99"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10").unwrap(), 10);
        assert_eq!(parse_quantity(" 0 ").unwrap(), 0);
        assert_eq!(
            parse_quantity("ten"),
            Err(InventoryError::InvalidQuantity("ten".to_string()))
        );
        assert_eq!(parse_quantity("-3"), Err(InventoryError::NegativeQuantity(-3)));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("1/1/20").unwrap(), ymd(2020, 1, 1));
        assert_eq!(parse_date("12/31/2018").unwrap(), ymd(2018, 12, 31));
        assert_eq!(parse_date("03/07/19").unwrap(), ymd(2019, 3, 7));
    }

    #[test]
    fn test_parse_date_rejects_invalid() {
        for bad in [
            "2020-01-01",
            "13/1/20",
            "2/30/20",
            "1/1",
            "1/1/020",
            "a/b/c",
            "1/1/-5",
            "1/1/+5",
            "+1/1/20",
            "1/-1/20",
            "1//20",
        ] {
            assert!(parse_date(bad).is_err(), "expected rejection for {:?}", bad);
        }
    }

    #[test]
    fn test_format_date_mdy_has_no_padding() {
        assert_eq!(format_date_mdy(ymd(2020, 1, 1)), "1/1/2020");
        assert_eq!(format_date_mdy(ymd(2018, 11, 25)), "11/25/2018");
    }

    #[test]
    fn test_new_product_trims_name() {
        let p = NewProduct::new("  Widget ", 500, 10, ymd(2020, 1, 1));
        assert_eq!(p.name, "Widget");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// cents = dollars * 100 + fraction, and formatting then re-parsing keeps the value
            #[test]
            fn price_round_trip_keeps_cents(input in "\\$[0-9]{1,12}\\.[0-9]{2}") {
                let (dollars, fraction) = input[1..].split_once('.').unwrap();
                let expected = dollars.parse::<i64>().unwrap() * 100 + fraction.parse::<i64>().unwrap();

                let cents = parse_price(&input).unwrap();
                prop_assert_eq!(cents, expected);
                prop_assert_eq!(parse_price(&format_price(cents)).unwrap(), cents);
            }

            /// Any in-range date survives the M/D/YYYY text form
            #[test]
            fn mdy_date_round_trip(year in 1000i32..=9999, ordinal in 1u32..=365) {
                let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
                prop_assert_eq!(parse_date(&format_date_mdy(date)).unwrap(), date);
            }
        }
    }
}
