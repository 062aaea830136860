use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M";

/// Identifier assigned to a stored receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    /// Fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One purchased product entry, exactly as submitted.
///
/// Fields stay as raw strings so validation can report the submitted value
/// verbatim. Missing JSON fields deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
    pub short_description: String,
    pub price: String,
}

impl LineItem {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    pub fn price_cents(&self) -> Option<Cents> {
        Cents::parse(&self.price)
    }

    /// Character count of the description without surrounding whitespace.
    pub fn trimmed_description_len(&self) -> usize {
        self.short_description.trim().chars().count()
    }
}

/// A submitted purchase receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<LineItem>,
    pub total: String,
}

impl Receipt {
    pub fn total_cents(&self) -> Option<Cents> {
        Cents::parse(&self.total)
    }

    pub fn purchased_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.purchase_date, DATE_FORMAT).ok()
    }

    pub fn purchased_at(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.purchase_time, TIME_FORMAT).ok()
    }

    pub fn purchase_day(&self) -> Option<u32> {
        self.purchased_on().map(|date| date.day())
    }

    /// Sum of every well-formed item price. Malformed prices contribute nothing.
    pub fn item_total(&self) -> Cents {
        self.items
            .iter()
            .filter_map(LineItem::price_cents)
            .fold(Cents::ZERO, |acc, price| acc.saturating_add(price))
    }
}

/// Currency amount held in minor units so sums are exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(pub u128);

impl Cents {
    pub const ZERO: Self = Self(0);

    /// `<digits>.<two digits>`, regardless of magnitude.
    pub fn is_well_formed(raw: &str) -> bool {
        match raw.split_once('.') {
            Some((units, fraction)) => {
                !units.is_empty()
                    && units.bytes().all(|b| b.is_ascii_digit())
                    && fraction.len() == 2
                    && fraction.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    /// Parse a well-formed amount. `None` when malformed or beyond `u128` cents.
    pub fn parse(raw: &str) -> Option<Self> {
        if !Self::is_well_formed(raw) {
            return None;
        }
        let (units, fraction) = raw.split_once('.')?;

        let mut digits = units.bytes().chain(fraction.bytes());
        digits
            .try_fold(0u128, |acc, b| {
                acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
            })
            .map(Self)
    }

    /// The cents part, `0..=99`.
    pub fn fraction(self) -> u32 {
        (self.0 % 100) as u32
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
