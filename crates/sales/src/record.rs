use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tablebook_core::{DomainError, DomainResult, Entity, Name, Price, ValueObject};

/// Number of units sold. Always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct QuantitySold(u64);

impl QuantitySold {
    pub fn new(value: u64) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::validation("quantity sold must be positive"));
        }
        Ok(Self(value))
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = raw.trim().parse::<u64>().map_err(|_| {
            DomainError::validation(format!("'{}' is not a valid quantity sold", raw.trim()))
        })?;
        Self::new(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl ValueObject for QuantitySold {}

impl fmt::Display for QuantitySold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for QuantitySold {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuantitySold> for u64 {
    fn from(value: QuantitySold) -> Self {
        value.0
    }
}

/// Units of one item sold on one day, at the price charged.
///
/// A day can hold at most one record per item: records are the same record
/// when both the date and the item name match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    date: NaiveDate,
    item: Name,
    quantity: QuantitySold,
    price: Price,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, item: Name, quantity: QuantitySold, price: Price) -> Self {
        Self {
            date,
            item,
            quantity,
            price,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn item(&self) -> &Name {
        &self.item
    }

    pub fn quantity(&self) -> QuantitySold {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Quantity times unit price.
    pub fn revenue(&self) -> DomainResult<Price> {
        self.price.checked_times(self.quantity.value())
    }
}

impl Entity for SalesRecord {
    const KIND: &'static str = "sales record";

    fn is_same(&self, other: &Self) -> bool {
        self.date == other.date && self.item == other.item
    }
}

impl fmt::Display for SalesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} x{} at ${}",
            self.date.format("%d-%m-%Y"),
            self.item,
            self.quantity,
            self.price
        )
    }
}
