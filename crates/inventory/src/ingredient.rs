use core::fmt;

use serde::{Deserialize, Serialize};

use tablebook_core::{DomainError, DomainResult, Entity, Name, Price, ValueObject};

/// Non-negative amount of an ingredient, counted in its [`Unit`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::validation(format!("'{}' is not a valid quantity", raw.trim())))
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity)
    }

    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Quantity)
    }

    pub fn checked_mul(self, factor: u64) -> Option<Quantity> {
        self.0.checked_mul(factor).map(Quantity)
    }
}

impl ValueObject for Quantity {}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit an ingredient is counted in (e.g. `kg`, `bottle`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Unit(String);

impl Unit {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.chars().all(char::is_alphanumeric) {
            return Err(DomainError::validation(format!(
                "unit '{raw}' must be a single alphanumeric word"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Unit {}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Unit {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Unit> for String {
    fn from(value: Unit) -> Self {
        value.0
    }
}

/// An ingredient held in stock.
///
/// Ingredients are identified by name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    name: Name,
    unit: Unit,
    unit_price: Price,
    quantity: Quantity,
    minimum: Quantity,
}

impl Ingredient {
    pub fn new(name: Name, unit: Unit, unit_price: Price, quantity: Quantity, minimum: Quantity) -> Self {
        Self {
            name,
            unit,
            unit_price,
            quantity,
            minimum,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn minimum(&self) -> Quantity {
        self.minimum
    }

    /// Whether stock has dropped below the warning threshold.
    pub fn is_below_minimum(&self) -> bool {
        self.quantity < self.minimum
    }

    /// Same ingredient with `amount` taken out of stock.
    pub fn consume(&self, amount: Quantity) -> DomainResult<Ingredient> {
        let quantity = self.quantity.checked_sub(amount).ok_or_else(|| {
            DomainError::invariant(format!(
                "insufficient stock for {}: available {}, requested {}",
                self.name, self.quantity, amount
            ))
        })?;
        Ok(Self {
            quantity,
            ..self.clone()
        })
    }

    /// Same ingredient with `amount` added to stock.
    pub fn restock(&self, amount: Quantity) -> DomainResult<Ingredient> {
        let quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::invariant(format!("stock overflow for {}", self.name)))?;
        Ok(Self {
            quantity,
            ..self.clone()
        })
    }
}

impl Entity for Ingredient {
    const KIND: &'static str = "ingredient";

    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {} at ${} per {}, minimum {})",
            self.name, self.quantity, self.unit, self.unit_price, self.unit, self.minimum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, quantity: u64, minimum: u64) -> Ingredient {
        Ingredient::new(
            Name::parse(name).unwrap(),
            Unit::parse("kg").unwrap(),
            Price::parse("1.50").unwrap(),
            Quantity::new(quantity),
            Quantity::new(minimum),
        )
    }

    #[test]
    fn identity_is_the_name() {
        let a = ingredient("Potato", 10, 2);
        let b = ingredient("Potato", 3, 5);
        assert!(a.is_same(&b));
        assert_ne!(a, b);
        assert!(!a.is_same(&ingredient("Tomato", 10, 2)));
    }

    #[test]
    fn consume_reduces_stock() {
        let potato = ingredient("Potato", 10, 2);
        let after = potato.consume(Quantity::new(4)).unwrap();
        assert_eq!(after.quantity(), Quantity::new(6));
        assert!(after.is_same(&potato));
        assert_eq!(potato.quantity(), Quantity::new(10));
    }

    #[test]
    fn consume_rejects_going_negative() {
        let potato = ingredient("Potato", 3, 2);
        let err = potato.consume(Quantity::new(4)).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("insufficient stock") => {}
            other => panic!("Expected insufficient stock invariant, got {other:?}"),
        }
    }

    #[test]
    fn restock_adds_and_checks_overflow() {
        let potato = ingredient("Potato", 3, 2);
        assert_eq!(potato.restock(Quantity::new(7)).unwrap().quantity(), Quantity::new(10));
        assert!(ingredient("Potato", u64::MAX, 0).restock(Quantity::new(1)).is_err());
    }

    #[test]
    fn below_minimum_warning() {
        assert!(ingredient("Potato", 1, 2).is_below_minimum());
        assert!(!ingredient("Potato", 2, 2).is_below_minimum());
    }

    #[test]
    fn quantity_parse() {
        assert_eq!(Quantity::parse(" 12 ").unwrap(), Quantity::new(12));
        assert!(Quantity::parse("-1").is_err());
        assert!(Quantity::parse("1.5").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: consuming what was restocked returns the original stock level.
            #[test]
            fn restock_then_consume_is_identity(start in 0u64..1_000_000, amount in 0u64..1_000_000) {
                let potato = ingredient("Potato", start, 0);
                let after = potato
                    .restock(Quantity::new(amount))
                    .and_then(|i| i.consume(Quantity::new(amount)))
                    .unwrap();
                prop_assert_eq!(after, potato);
            }

            /// Property: consume never succeeds past the available stock.
            #[test]
            fn consume_never_goes_negative(start in 0u64..1_000, amount in 0u64..2_000) {
                let potato = ingredient("Potato", start, 0);
                match potato.consume(Quantity::new(amount)) {
                    Ok(after) => prop_assert_eq!(after.quantity().value(), start - amount),
                    Err(_) => prop_assert!(amount > start),
                }
            }
        }
    }
}
