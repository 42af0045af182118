//! The contract commands run against, and its in-memory implementation.

use std::sync::Arc;

use tablebook_accounts::Account;
use tablebook_core::{DomainResult, Entity};
use tablebook_events::{Event, EventBus, InMemoryEventBus, Subscription};
use tablebook_inventory::Ingredient;
use tablebook_menu::Item;
use tablebook_people::Person;
use tablebook_reservations::Reservation;
use tablebook_sales::SalesRecord;

use crate::book::{Book, ReadOnlyBook};
use crate::change::{BookChanged, ChangeKind};
use crate::versioned::VersionedBook;

/// Dataset operations available to commands.
///
/// Mutations report `DuplicateEntity`/`EntityNotFound` before anything
/// changes, and never commit on their own: a command mutates, then calls
/// [`commit`](Model::commit).
pub trait Model {
    /// Read-only view of the live dataset.
    fn book(&self) -> &Book;

    /// Replace the whole live dataset with `data`.
    fn reset_data(&mut self, data: &dyn ReadOnlyBook) -> DomainResult<()>;

    fn has_account(&self, account: &Account) -> bool {
        self.book().has_account(account)
    }
    fn add_account(&mut self, account: Account) -> DomainResult<()>;
    fn remove_account(&mut self, account: &Account) -> DomainResult<()>;
    fn set_account(&mut self, target: &Account, edited: Account) -> DomainResult<()>;
    fn account_list(&self) -> &[Account] {
        self.book().account_list()
    }

    fn has_person(&self, person: &Person) -> bool {
        self.book().has_person(person)
    }
    fn add_person(&mut self, person: Person) -> DomainResult<()>;
    fn remove_person(&mut self, person: &Person) -> DomainResult<()>;
    fn set_person(&mut self, target: &Person, edited: Person) -> DomainResult<()>;
    fn person_list(&self) -> &[Person] {
        self.book().person_list()
    }

    fn has_ingredient(&self, ingredient: &Ingredient) -> bool {
        self.book().has_ingredient(ingredient)
    }
    fn add_ingredient(&mut self, ingredient: Ingredient) -> DomainResult<()>;
    fn remove_ingredient(&mut self, ingredient: &Ingredient) -> DomainResult<()>;
    fn set_ingredient(&mut self, target: &Ingredient, edited: Ingredient) -> DomainResult<()>;
    fn ingredient_list(&self) -> &[Ingredient] {
        self.book().ingredient_list()
    }

    fn has_item(&self, item: &Item) -> bool {
        self.book().has_item(item)
    }
    fn add_item(&mut self, item: Item) -> DomainResult<()>;
    fn remove_item(&mut self, item: &Item) -> DomainResult<()>;
    fn set_item(&mut self, target: &Item, edited: Item) -> DomainResult<()>;
    fn item_list(&self) -> &[Item] {
        self.book().item_list()
    }

    fn has_reservation(&self, reservation: &Reservation) -> bool {
        self.book().has_reservation(reservation)
    }
    fn add_reservation(&mut self, reservation: Reservation) -> DomainResult<()>;
    fn remove_reservation(&mut self, reservation: &Reservation) -> DomainResult<()>;
    fn set_reservation(&mut self, target: &Reservation, edited: Reservation) -> DomainResult<()>;
    fn reservation_list(&self) -> &[Reservation] {
        self.book().reservation_list()
    }

    fn has_sales_record(&self, record: &SalesRecord) -> bool {
        self.book().has_sales_record(record)
    }
    fn add_sales_record(&mut self, record: SalesRecord) -> DomainResult<()>;
    fn remove_sales_record(&mut self, record: &SalesRecord) -> DomainResult<()>;
    fn set_sales_record(&mut self, target: &SalesRecord, edited: SalesRecord) -> DomainResult<()>;
    fn sales_record_list(&self) -> &[SalesRecord] {
        self.book().sales_record_list()
    }

    /// Snapshot the live dataset as the newest state. Any redoable states are discarded.
    fn commit(&mut self);
    fn undo(&mut self) -> DomainResult<()>;
    fn redo(&mut self) -> DomainResult<()>;
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
    /// Forget all history except the live dataset.
    fn reset_history(&mut self);
}

/// Routes a generic entity type to its named [`Model`] operations.
///
/// Lets commands such as "add" or "delete" be written once for all six kinds.
pub trait ModelEntity: Entity + core::fmt::Display {
    fn has_in(model: &dyn Model, x: &Self) -> bool;
    fn add_to(model: &mut dyn Model, x: Self) -> DomainResult<()>;
    fn remove_from(model: &mut dyn Model, x: &Self) -> DomainResult<()>;
    fn set_in(model: &mut dyn Model, target: &Self, edited: Self) -> DomainResult<()>;
    fn list_in(model: &dyn Model) -> &[Self];
}

macro_rules! impl_model_entity {
    ($t:ty, $has:ident, $add:ident, $remove:ident, $set:ident, $list:ident) => {
        impl ModelEntity for $t {
            fn has_in(model: &dyn Model, x: &Self) -> bool {
                model.$has(x)
            }

            fn add_to(model: &mut dyn Model, x: Self) -> DomainResult<()> {
                model.$add(x)
            }

            fn remove_from(model: &mut dyn Model, x: &Self) -> DomainResult<()> {
                model.$remove(x)
            }

            fn set_in(model: &mut dyn Model, target: &Self, edited: Self) -> DomainResult<()> {
                model.$set(target, edited)
            }

            fn list_in(model: &dyn Model) -> &[Self] {
                model.$list()
            }
        }
    };
}

impl_model_entity!(Account, has_account, add_account, remove_account, set_account, account_list);
impl_model_entity!(Person, has_person, add_person, remove_person, set_person, person_list);
impl_model_entity!(
    Ingredient,
    has_ingredient,
    add_ingredient,
    remove_ingredient,
    set_ingredient,
    ingredient_list
);
impl_model_entity!(Item, has_item, add_item, remove_item, set_item, item_list);
impl_model_entity!(
    Reservation,
    has_reservation,
    add_reservation,
    remove_reservation,
    set_reservation,
    reservation_list
);
impl_model_entity!(
    SalesRecord,
    has_sales_record,
    add_sales_record,
    remove_sales_record,
    set_sales_record,
    sales_record_list
);

/// In-memory [`Model`]: a [`VersionedBook`] plus change notifications.
///
/// A [`BookChanged`] is published after every successful add/remove/set,
/// `reset_data`, `undo` and `redo`. Failed operations publish nothing.
#[derive(Debug)]
pub struct ModelManager {
    versioned: VersionedBook,
    bus: Arc<InMemoryEventBus<BookChanged>>,
}

impl ModelManager {
    pub fn new(initial: Book) -> Self {
        Self::with_bus(initial, Arc::new(InMemoryEventBus::new()))
    }

    /// Publish changes on an existing bus (e.g. one already wired to the UI).
    pub fn with_bus(initial: Book, bus: Arc<InMemoryEventBus<BookChanged>>) -> Self {
        Self {
            versioned: VersionedBook::new(initial),
            bus,
        }
    }

    pub fn subscribe(&self) -> Subscription<BookChanged> {
        self.bus.subscribe()
    }

    pub fn history_len(&self) -> usize {
        self.versioned.history_len()
    }

    pub fn cursor(&self) -> usize {
        self.versioned.cursor()
    }

    fn notify(&self, kind: ChangeKind, entity: Option<&'static str>) {
        let change = BookChanged::new(self.versioned.current().clone(), kind, entity);
        let event_type = change.event_type();

        // The change itself already happened; a notification failure must not undo it.
        match self.bus.publish(change) {
            Ok(()) => tracing::debug!(event_type, entity, "published book change"),
            Err(e) => tracing::warn!(event_type, error = ?e, "failed to publish book change"),
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(Book::default())
    }
}

macro_rules! model_mutators {
    ($t:ty, $add:ident, $remove:ident, $set:ident) => {
        fn $add(&mut self, x: $t) -> DomainResult<()> {
            self.versioned.current_mut().$add(x)?;
            self.notify(ChangeKind::Added, Some(<$t as Entity>::KIND));
            Ok(())
        }

        fn $remove(&mut self, x: &$t) -> DomainResult<()> {
            self.versioned.current_mut().$remove(x)?;
            self.notify(ChangeKind::Removed, Some(<$t as Entity>::KIND));
            Ok(())
        }

        fn $set(&mut self, target: &$t, edited: $t) -> DomainResult<()> {
            self.versioned.current_mut().$set(target, edited)?;
            self.notify(ChangeKind::Updated, Some(<$t as Entity>::KIND));
            Ok(())
        }
    };
}

impl Model for ModelManager {
    fn book(&self) -> &Book {
        self.versioned.current()
    }

    fn reset_data(&mut self, data: &dyn ReadOnlyBook) -> DomainResult<()> {
        self.versioned.current_mut().reset_data(data)?;
        self.notify(ChangeKind::Reset, None);
        Ok(())
    }

    model_mutators!(Account, add_account, remove_account, set_account);
    model_mutators!(Person, add_person, remove_person, set_person);
    model_mutators!(Ingredient, add_ingredient, remove_ingredient, set_ingredient);
    model_mutators!(Item, add_item, remove_item, set_item);
    model_mutators!(Reservation, add_reservation, remove_reservation, set_reservation);
    model_mutators!(SalesRecord, add_sales_record, remove_sales_record, set_sales_record);

    fn commit(&mut self) {
        self.versioned.commit();
    }

    fn undo(&mut self) -> DomainResult<()> {
        self.versioned.undo()?;
        self.notify(ChangeKind::Undone, None);
        Ok(())
    }

    fn redo(&mut self) -> DomainResult<()> {
        self.versioned.redo()?;
        self.notify(ChangeKind::Redone, None);
        Ok(())
    }

    fn can_undo(&self) -> bool {
        self.versioned.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.versioned.can_redo()
    }

    fn reset_history(&mut self) {
        self.versioned.reset_history();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablebook_core::{DomainError, Name, Price};

    fn item(name: &str, price: &str) -> Item {
        Item::new(Name::parse(name).unwrap(), Price::parse(price).unwrap())
    }

    #[test]
    fn successful_mutations_notify_with_the_new_book() {
        let mut model = ModelManager::default();
        let changes = model.subscribe();

        model.add_item(item("Fries", "2.00")).unwrap();
        model
            .set_item(&item("Fries", "2.00"), item("Fries", "2.50"))
            .unwrap();
        model.remove_item(&item("Fries", "2.50")).unwrap();

        let received = changes.drain();
        let kinds: Vec<_> = received.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChangeKind::Added, ChangeKind::Updated, ChangeKind::Removed]);
        assert!(received.iter().all(|c| c.entity == Some("item")));
        assert_eq!(received[0].book.item_list(), &[item("Fries", "2.00")]);
        assert_eq!(received[1].event_type(), "book.entity.updated");
    }

    #[test]
    fn failed_mutations_do_not_notify() {
        let mut model = ModelManager::default();
        model.add_item(item("Fries", "2.00")).unwrap();
        let changes = model.subscribe();

        assert_eq!(
            model.add_item(item("Fries", "3.00")).unwrap_err(),
            DomainError::duplicate("item")
        );
        assert_eq!(
            model.remove_item(&item("Soda", "1.00")).unwrap_err(),
            DomainError::not_found("item")
        );
        assert!(changes.drain().is_empty());
    }

    #[test]
    fn commit_alone_does_not_notify_but_undo_does() {
        let mut model = ModelManager::default();
        model.add_item(item("Fries", "2.00")).unwrap();
        let changes = model.subscribe();

        model.commit();
        assert!(changes.drain().is_empty());

        model.undo().unwrap();
        let received = changes.drain();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].kind, ChangeKind::Undone);
        assert!(received[0].book.item_list().is_empty());
    }

    #[test]
    fn failed_mutation_adds_no_history() {
        let mut model = ModelManager::default();
        model.add_item(item("Fries", "2.00")).unwrap();
        model.commit();
        let len = model.history_len();

        assert!(model.add_item(item("Fries", "2.00")).is_err());
        assert_eq!(model.history_len(), len);
    }

    #[test]
    fn generic_entity_routing() {
        let mut model = ModelManager::default();
        let fries = item("Fries", "2.00");

        Item::add_to(&mut model, fries.clone()).unwrap();
        assert!(Item::has_in(&model, &fries));
        assert_eq!(Item::list_in(&model), &[fries.clone()]);
        assert!(Ingredient::list_in(&model).is_empty());

        Item::remove_from(&mut model, &fries).unwrap();
        assert!(!Item::has_in(&model, &fries));
    }
}
