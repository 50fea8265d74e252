//! Field validation.
//!
//! Pure predicates: same input, same answer, no side effects. The store calls these
//! before it builds or mutates a record; the CLI calls them to decide whether to
//! re-prompt.

use crate::record::{Category, Price};

/// Maximum number of digits allowed before the decimal point of a price.
pub const MAX_PRICE_WHOLE_DIGITS: usize = 10;

/// Non-empty and ASCII alphanumeric only.
pub fn validate_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Quantities must be strictly positive.
pub fn validate_quantity(quantity: u32) -> bool {
    quantity > 0
}

/// Positive, with at most [`MAX_PRICE_WHOLE_DIGITS`] integer digits.
pub fn validate_price(price: Price) -> bool {
    price.cents() > 0 && price.whole_digits() <= MAX_PRICE_WHOLE_DIGITS
}

/// Case-insensitive membership in the fixed category set.
pub fn validate_category(category: &str) -> bool {
    category.parse::<Category>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_must_be_non_empty_alphanumeric() {
        assert!(validate_id("A1"));
        assert!(validate_id("abc123"));
        assert!(!validate_id(""));
        assert!(!validate_id("A-1"));
        assert!(!validate_id("A 1"));
        assert!(!validate_id("A1!"));
        assert!(!validate_id("É1"));
    }

    #[test]
    fn quantity_must_be_positive() {
        assert!(validate_quantity(1));
        assert!(validate_quantity(u32::MAX));
        assert!(!validate_quantity(0));
    }

    #[test]
    fn price_must_be_positive() {
        assert!(validate_price(Price::from_cents(1)));
        assert!(!validate_price(Price::from_cents(0)));
    }

    #[test]
    fn price_whole_part_is_limited_to_ten_digits() {
        assert!(validate_price(Price::from_cents(999_999_999_999)));
        assert!(!validate_price(Price::from_cents(1_000_000_000_000)));
    }

    #[test]
    fn rounding_can_carry_a_price_past_the_digit_limit() {
        let kept: Price = "9999999999.994".parse().unwrap();
        assert_eq!(kept, Price::from_cents(999_999_999_999));
        assert!(validate_price(kept));

        let carried: Price = "9999999999.995".parse().unwrap();
        assert_eq!(carried, Price::from_cents(1_000_000_000_000));
        assert_eq!(carried.whole_digits(), 11);
        assert!(!validate_price(carried));
    }

    #[test]
    fn category_is_case_insensitive() {
        assert!(validate_category("clothing"));
        assert!(validate_category("ELECTRONICS"));
        assert!(validate_category("Entertainment"));
        assert!(!validate_category("food"));
        assert!(!validate_category(""));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: validators are deterministic.
            #[test]
            fn validate_id_is_pure(id in ".{0,16}") {
                prop_assert_eq!(validate_id(&id), validate_id(&id));
            }

            /// Property: any non-empty alphanumeric token is a valid id.
            #[test]
            fn alphanumeric_ids_are_valid(id in "[A-Za-z0-9]{1,20}") {
                prop_assert!(validate_id(&id));
            }

            /// Property: ids with punctuation or whitespace are rejected.
            #[test]
            fn ids_with_separators_are_invalid(
                head in "[A-Za-z0-9]{0,5}",
                sep in "[ \\-_.!@#]",
                tail in "[A-Za-z0-9]{0,5}"
            ) {
                let id = format!("{head}{sep}{tail}");
                prop_assert!(!validate_id(&id));
            }
        }
    }
}
