use core::fmt;
use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use tablebook_core::{DomainError, DomainResult, Entity, Name, Remark, Tag, ValueObject};

const PAX_MAX: u32 = 100;

/// Party size of a booking.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Pax(u32);

impl Pax {
    pub fn new(value: u32) -> DomainResult<Self> {
        if !(1..=PAX_MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "pax must be between 1 and {PAX_MAX}"
            )));
        }
        Ok(Self(value))
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::validation(format!("'{}' is not a valid pax", raw.trim())))?;
        Self::new(value)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl ValueObject for Pax {}

impl fmt::Display for Pax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Pax {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pax> for u32 {
    fn from(value: Pax) -> Self {
        value.0
    }
}

/// A table booking.
///
/// Two reservations are the same booking if the names match and either the
/// party size or the date/time matches. Different names never collide, even
/// for an identical slot and party size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    name: Name,
    pax: Pax,
    date_time: NaiveDateTime,
    remark: Remark,
    tags: BTreeSet<Tag>,
}

impl Reservation {
    pub fn new(name: Name, pax: Pax, date_time: NaiveDateTime) -> Self {
        Self {
            name,
            pax,
            date_time,
            remark: Remark::default(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_remark(self, remark: Remark) -> Self {
        Self { remark, ..self }
    }

    pub fn with_tags(self, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            ..self
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn pax(&self) -> Pax {
        self.pax
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Entity for Reservation {
    const KIND: &'static str = "reservation";

    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name && (self.pax == other.pax || self.date_time == other.date_time)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Pax: {} Date/Time: {}",
            self.name,
            self.pax,
            self.date_time.format("%Y-%m-%d %H:%M")
        )?;
        if !self.remark.is_empty() {
            write!(f, " Remark: {}", self.remark)?;
        }
        for tag in &self.tags {
            write!(f, " {tag}")?;
        }
        Ok(())
    }
}
