use core::fmt;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use tablebook_core::{DomainError, DomainResult, Entity, Name, Price, Remark, Tag, ValueObject};
use tablebook_inventory::Quantity;

/// Amount of one ingredient needed to prepare one unit of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portion {
    pub ingredient: Name,
    pub amount: Quantity,
}

/// Ingredients consumed per unit sold.
///
/// # Invariants
/// - Each ingredient appears at most once.
/// - Every amount is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Portion>", into = "Vec<Portion>")]
pub struct Recipe(Vec<Portion>);

impl Recipe {
    pub fn new(portions: Vec<Portion>) -> DomainResult<Self> {
        if let Some(p) = portions.iter().find(|p| p.amount == Quantity::ZERO) {
            return Err(DomainError::validation(format!(
                "recipe amount for {} must be positive",
                p.ingredient
            )));
        }
        let mut seen = BTreeSet::new();
        for p in &portions {
            if !seen.insert(&p.ingredient) {
                return Err(DomainError::validation(format!(
                    "{} is listed twice in the recipe",
                    p.ingredient
                )));
            }
        }
        Ok(Self(portions))
    }

    pub fn portions(&self) -> &[Portion] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Portions needed to prepare `units` of the item.
    pub fn scaled(&self, units: u64) -> DomainResult<Vec<Portion>> {
        self.0
            .iter()
            .map(|p| {
                let amount = p.amount.checked_mul(units).ok_or_else(|| {
                    DomainError::invariant(format!("recipe amount overflow for {}", p.ingredient))
                })?;
                Ok(Portion {
                    ingredient: p.ingredient.clone(),
                    amount,
                })
            })
            .collect()
    }
}

impl ValueObject for Recipe {}

impl TryFrom<Vec<Portion>> for Recipe {
    type Error = DomainError;

    fn try_from(value: Vec<Portion>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Recipe> for Vec<Portion> {
    fn from(value: Recipe) -> Self {
        value.0
    }
}

/// A menu item.
///
/// Items are identified by name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: Name,
    price: Price,
    recipe: Recipe,
    remark: Remark,
    tags: BTreeSet<Tag>,
}

impl Item {
    pub fn new(name: Name, price: Price) -> Self {
        Self {
            name,
            price,
            recipe: Recipe::default(),
            remark: Remark::default(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_recipe(self, recipe: Recipe) -> Self {
        Self { recipe, ..self }
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

    pub fn with_price(self, price: Price) -> Self {
        Self { price, ..self }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Entity for Item {
    const KIND: &'static str = "item";

    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${}", self.name, self.price)?;
        if !self.remark.is_empty() {
            write!(f, " Remark: {}", self.remark)?;
        }
        for tag in &self.tags {
            write!(f, " {tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> Name {
        Name::parse(raw).unwrap()
    }

    fn portion(ingredient: &str, amount: u64) -> Portion {
        Portion {
            ingredient: name(ingredient),
            amount: Quantity::new(amount),
        }
    }

    #[test]
    fn identity_is_the_name() {
        let fries = Item::new(name("Fries"), Price::parse("2.00").unwrap());
        let pricier = fries.clone().with_price(Price::parse("2.50").unwrap());
        assert!(fries.is_same(&pricier));
        assert_ne!(fries, pricier);
        assert!(!fries.is_same(&Item::new(name("Soda"), Price::parse("2.00").unwrap())));
    }

    #[test]
    fn recipe_rejects_repeated_ingredient() {
        let err = Recipe::new(vec![portion("Potato", 1), portion("Potato", 2)]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("twice")));
    }

    #[test]
    fn recipe_rejects_zero_amount() {
        assert!(Recipe::new(vec![portion("Potato", 0)]).is_err());
    }

    #[test]
    fn recipe_scales_per_unit() {
        let recipe = Recipe::new(vec![portion("Potato", 2), portion("Salt", 1)]).unwrap();
        let scaled = recipe.scaled(3).unwrap();
        assert_eq!(scaled, vec![portion("Potato", 6), portion("Salt", 3)]);
        assert!(recipe.scaled(u64::MAX).is_err());
    }

    #[test]
    fn display_includes_price_and_tags() {
        let fries = Item::new(name("Fries"), Price::parse("2").unwrap())
            .with_tags([Tag::parse("side").unwrap()]);
        assert_eq!(fries.to_string(), "Fries $2.00 [side]");
    }

    #[test]
    fn deserialization_validates_recipe() {
        let json = r#"{"name":"Fries","price":"2.00","recipe":[{"ingredient":"Potato","amount":1},{"ingredient":"Potato","amount":2}],"remark":"","tags":[]}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());

        let json = r#"{"name":"Fries","price":"2.00","recipe":[{"ingredient":"Potato","amount":1}],"remark":"","tags":["side"]}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.recipe().portions(), &[portion("Potato", 1)]);
    }
}
