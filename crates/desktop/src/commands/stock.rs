//! Commands that move ingredient stock.

use chrono::NaiveDate;

use tablebook_core::{DomainError, Entity, Name};
use tablebook_inventory::{Ingredient, Quantity};
use tablebook_sales::{QuantitySold, SalesRecord};
use tablebook_store::Model;

use crate::command::{Command, CommandOutcome, CommandResult};
use crate::error::CommandError;
use crate::session::Session;

fn find_ingredient(model: &dyn Model, name: &Name) -> Result<Ingredient, DomainError> {
    model
        .ingredient_list()
        .iter()
        .find(|i| i.name() == name)
        .cloned()
        .ok_or_else(|| DomainError::not_found(Ingredient::KIND))
}

/// Sell `quantity` units of a menu item on `date`.
///
/// Records the sale and takes the item's recipe out of stock as one command:
/// a single undo reverts both. A second sale of the same item on the same day
/// is added to the existing record, at the price recorded first.
#[derive(Debug, Clone)]
pub struct RecordSaleCommand {
    pub item: Name,
    pub quantity: QuantitySold,
    pub date: NaiveDate,
}

impl RecordSaleCommand {
    fn apply(
        model: &mut dyn Model,
        previous: Option<&SalesRecord>,
        record: SalesRecord,
        stock: &[(Ingredient, Ingredient)],
    ) -> Result<(), DomainError> {
        for (before, after) in stock {
            model.set_ingredient(before, after.clone())?;
        }
        match previous {
            Some(previous) => model.set_sales_record(previous, record),
            None => model.add_sales_record(record),
        }
    }
}

impl Command for RecordSaleCommand {
    fn mutates(&self) -> bool {
        true
    }

    fn execute(&self, model: &mut dyn Model, _session: &mut Session) -> CommandResult {
        let item = model
            .item_list()
            .iter()
            .find(|i| i.name() == &self.item)
            .cloned()
            .ok_or_else(|| CommandError::ItemNotOnMenu(self.item.clone()))?;

        let mut stock = Vec::new();
        for portion in item.recipe().scaled(self.quantity.value())? {
            let ingredient = find_ingredient(model, &portion.ingredient)?;
            let consumed = ingredient.consume(portion.amount)?;
            stock.push((ingredient, consumed));
        }

        let previous = model
            .sales_record_list()
            .iter()
            .find(|r| r.date() == self.date && r.item() == &self.item)
            .cloned();
        let record = match &previous {
            Some(previous) => {
                let total = previous
                    .quantity()
                    .value()
                    .checked_add(self.quantity.value())
                    .ok_or_else(|| DomainError::invariant("quantity sold overflow"))?;
                SalesRecord::new(self.date, self.item.clone(), QuantitySold::new(total)?, previous.price())
            }
            None => SalesRecord::new(self.date, self.item.clone(), self.quantity, item.price()),
        };

        let before = model.book().clone();
        if let Err(e) = Self::apply(model, previous.as_ref(), record.clone(), &stock) {
            model.reset_data(&before)?;
            return Err(e.into());
        }
        model.commit();

        let low: Vec<String> = stock
            .iter()
            .filter(|(_, after)| after.is_below_minimum())
            .map(|(_, after)| after.name().to_string())
            .collect();

        tracing::debug!(item = %self.item, quantity = self.quantity.value(), low_stock = low.len(), "recorded sale");

        let mut feedback = format!("Recorded sale: {record}");
        if !low.is_empty() {
            feedback.push_str(&format!("\nLow stock: {}", low.join(", ")));
        }
        Ok(CommandOutcome::new(feedback))
    }
}

#[derive(Debug, Clone)]
pub struct RestockCommand {
    pub ingredient: Name,
    pub amount: Quantity,
}

impl Command for RestockCommand {
    fn mutates(&self) -> bool {
        true
    }

    fn execute(&self, model: &mut dyn Model, _session: &mut Session) -> CommandResult {
        let ingredient = find_ingredient(model, &self.ingredient)?;
        let restocked = ingredient.restock(self.amount)?;

        model.set_ingredient(&ingredient, restocked.clone())?;
        model.commit();
        Ok(CommandOutcome::new(format!("Restocked {restocked}")))
    }
}
