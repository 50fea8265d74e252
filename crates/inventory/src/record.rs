use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, InventoryError};

/// Record identifier, canonicalized to ASCII uppercase on construction.
///
/// Every id that reaches the store goes through [`ItemId::new`], so the store can
/// compare ids byte-for-byte. Non-ASCII characters are left untouched for the
/// validator to reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Fixed set of stock categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Entertainment,
    Electronics,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Clothing,
        Category::Entertainment,
        Category::Electronics,
    ];

    /// Canonical lowercase spelling, as stored on a record.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Entertainment => "entertainment",
            Category::Electronics => "electronics",
        }
    }

    /// Capitalized spelling for menus and messages.
    pub fn label(self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Entertainment => "Entertainment",
            Category::Electronics => "Electronics",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                InventoryError::invalid_field(format!(
                    "unknown category '{s}' (expected clothing, entertainment or electronics)"
                ))
            })
    }
}

/// Unit price held in cents, so two-digit formatting is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Integer part of the price (the digits before the decimal point).
    pub fn whole(self) -> u64 {
        self.0 / 100
    }

    /// Number of digits in the integer part when formatted as `W.FF`.
    pub fn whole_digits(self) -> usize {
        self.whole().to_string().len()
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let formatted = format!("{}.{:02}", self.0 / 100, self.0 % 100);
        f.pad(&formatted)
    }
}

impl FromStr for Price {
    type Err = InventoryError;

    /// Parses `digits[.digits]`. Fraction digits beyond the second round half up.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InventoryError::invalid_field(format!("'{s}' is not a valid price"));

        let (whole, fraction) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut cents: u64 = 0;
        for b in whole.bytes() {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(u64::from(b - b'0')))
                .ok_or_else(invalid)?;
        }
        cents = cents.checked_mul(100).ok_or_else(invalid)?;

        let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        cents = cents
            .checked_add(tenths * 10 + hundredths + u64::from(round_up))
            .ok_or_else(invalid)?;
        Ok(Price(cents))
    }
}

/// One inventory entry.
///
/// Holds data only. Field values are checked by the store (through the validator)
/// before a record is built or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: ItemId,
    name: String,
    quantity: u32,
    price: Price,
    category: Category,
}

impl Record {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        price: Price,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
            category,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }
}

impl Entity for Record {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_is_uppercased() {
        assert_eq!(ItemId::new("a1b2").as_str(), "A1B2");
        assert_eq!(ItemId::new("a1"), ItemId::new("A1"));
    }

    #[test]
    fn item_id_leaves_non_ascii_letters_alone() {
        assert_eq!(ItemId::new("ß1").as_str(), "ß1");
        assert_eq!(ItemId::new("ı2").as_str(), "ı2");
        assert_ne!(ItemId::new("ß1"), ItemId::new("SS1"));
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("CLOTHING".parse::<Category>().unwrap(), Category::Clothing);
        assert_eq!("Electronics".parse::<Category>().unwrap(), Category::Electronics);
        assert_eq!("entertainment".parse::<Category>().unwrap(), Category::Entertainment);
        assert!(matches!(
            "food".parse::<Category>(),
            Err(InventoryError::InvalidField(_))
        ));
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"electronics\"");
    }

    #[test]
    fn price_parses_plain_and_fractional_values() {
        assert_eq!("19.99".parse::<Price>().unwrap(), Price::from_cents(1999));
        assert_eq!("5".parse::<Price>().unwrap(), Price::from_cents(500));
        assert_eq!("5.".parse::<Price>().unwrap(), Price::from_cents(500));
        assert_eq!(".5".parse::<Price>().unwrap(), Price::from_cents(50));
        assert_eq!("0.1".parse::<Price>().unwrap(), Price::from_cents(10));
    }

    #[test]
    fn price_rounds_extra_fraction_digits_half_up() {
        assert_eq!("1.005".parse::<Price>().unwrap(), Price::from_cents(101));
        assert_eq!("1.004".parse::<Price>().unwrap(), Price::from_cents(100));
        assert_eq!("9.999".parse::<Price>().unwrap(), Price::from_cents(1000));
    }

    #[test]
    fn price_rejects_malformed_text() {
        for bad in ["", ".", "-1", "1.2.3", "abc", "1e5", " 1", "1,50"] {
            assert!(bad.parse::<Price>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn price_rejects_overflowing_text() {
        assert!("99999999999999999999999".parse::<Price>().is_err());
    }

    #[test]
    fn price_formats_with_two_decimals() {
        assert_eq!(Price::from_cents(1999).to_string(), "19.99");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(format!("{:>8}", Price::from_cents(100)), "    1.00");
    }

    #[test]
    fn whole_digits_counts_integer_part() {
        assert_eq!(Price::from_cents(99).whole_digits(), 1);
        assert_eq!(Price::from_cents(1_999).whole_digits(), 2);
        assert_eq!(Price::from_cents(999_999_999_999).whole_digits(), 10);
        assert_eq!(Price::from_cents(1_000_000_000_000).whole_digits(), 11);
    }

    #[test]
    fn mutators_touch_only_their_field() {
        let mut record = Record::new(
            ItemId::new("A1"),
            "Shirt",
            10,
            Price::from_cents(1999),
            Category::Clothing,
        );
        record.set_quantity(3);
        record.set_price(Price::from_cents(500));

        assert_eq!(record.item_id().as_str(), "A1");
        assert_eq!(record.name(), "Shirt");
        assert_eq!(record.quantity(), 3);
        assert_eq!(record.price(), Price::from_cents(500));
        assert_eq!(record.category(), Category::Clothing);
        assert_eq!(Entity::id(&record), &ItemId::new("a1"));
    }

    #[test]
    fn identity_ignores_mutable_fields() {
        let a = Record::new(ItemId::new("A1"), "Shirt", 10, Price::from_cents(1999), Category::Clothing);
        let mut b = a.clone();
        b.set_quantity(1);
        let c = Record::new(ItemId::new("B1"), "Shirt", 10, Price::from_cents(1999), Category::Clothing);

        assert!(a.is_same_entity(&b));
        assert_ne!(a, b);
        assert!(!a.is_same_entity(&c));
    }
}
