//! The dataset aggregate.

use tablebook_accounts::Account;
use tablebook_core::{DomainResult, UniqueList};
use tablebook_inventory::Ingredient;
use tablebook_menu::Item;
use tablebook_people::Person;
use tablebook_reservations::Reservation;
use tablebook_sales::SalesRecord;

/// Read access to the six collections of a dataset.
pub trait ReadOnlyBook {
    fn account_list(&self) -> &[Account];
    fn person_list(&self) -> &[Person];
    fn ingredient_list(&self) -> &[Ingredient];
    fn item_list(&self) -> &[Item];
    fn reservation_list(&self) -> &[Reservation];
    fn sales_record_list(&self) -> &[SalesRecord];
}

/// The live dataset: one [`UniqueList`] per entity type.
///
/// Every mutation either fully succeeds or leaves the book untouched.
/// Cloning is cheap (collections are shared until written), and a clone never
/// observes later writes to the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Book {
    accounts: UniqueList<Account>,
    persons: UniqueList<Person>,
    ingredients: UniqueList<Ingredient>,
    items: UniqueList<Item>,
    reservations: UniqueList<Reservation>,
    sales_records: UniqueList<SalesRecord>,
}

macro_rules! book_collection {
    (
        $field:ident: $t:ty,
        list: $list:ident,
        has: $has:ident,
        add: $add:ident,
        remove: $remove:ident,
        set: $set:ident,
        set_list: $set_list:ident $(,)?
    ) => {
        pub fn $list(&self) -> &[$t] {
            self.$field.as_slice()
        }

        pub fn $has(&self, x: &$t) -> bool {
            self.$field.contains(x)
        }

        pub fn $add(&mut self, x: $t) -> DomainResult<()> {
            self.$field.add(x)
        }

        pub fn $remove(&mut self, x: &$t) -> DomainResult<()> {
            self.$field.remove(x)
        }

        pub fn $set(&mut self, target: &$t, edited: $t) -> DomainResult<()> {
            self.$field.set(target, edited)
        }

        pub fn $set_list(&mut self, xs: Vec<$t>) -> DomainResult<()> {
            self.$field.replace_all(xs)
        }
    };
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy all six collections out of `source`.
    ///
    /// Fails if any source collection holds two elements with the same identity.
    pub fn from_read_only(source: &(impl ReadOnlyBook + ?Sized)) -> DomainResult<Self> {
        Ok(Self {
            accounts: UniqueList::from_vec(source.account_list().to_vec())?,
            persons: UniqueList::from_vec(source.person_list().to_vec())?,
            ingredients: UniqueList::from_vec(source.ingredient_list().to_vec())?,
            items: UniqueList::from_vec(source.item_list().to_vec())?,
            reservations: UniqueList::from_vec(source.reservation_list().to_vec())?,
            sales_records: UniqueList::from_vec(source.sales_record_list().to_vec())?,
        })
    }

    /// Replace the whole content with `source`. Nothing changes on failure.
    pub fn reset_data(&mut self, source: &(impl ReadOnlyBook + ?Sized)) -> DomainResult<()> {
        *self = Self::from_read_only(source)?;
        Ok(())
    }

    /// Whether all six collections are empty.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
            && self.persons.is_empty()
            && self.ingredients.is_empty()
            && self.items.is_empty()
            && self.reservations.is_empty()
            && self.sales_records.is_empty()
    }

    book_collection!(
        accounts: Account,
        list: account_list,
        has: has_account,
        add: add_account,
        remove: remove_account,
        set: set_account,
        set_list: set_accounts,
    );

    book_collection!(
        persons: Person,
        list: person_list,
        has: has_person,
        add: add_person,
        remove: remove_person,
        set: set_person,
        set_list: set_persons,
    );

    book_collection!(
        ingredients: Ingredient,
        list: ingredient_list,
        has: has_ingredient,
        add: add_ingredient,
        remove: remove_ingredient,
        set: set_ingredient,
        set_list: set_ingredients,
    );

    book_collection!(
        items: Item,
        list: item_list,
        has: has_item,
        add: add_item,
        remove: remove_item,
        set: set_item,
        set_list: set_items,
    );

    book_collection!(
        reservations: Reservation,
        list: reservation_list,
        has: has_reservation,
        add: add_reservation,
        remove: remove_reservation,
        set: set_reservation,
        set_list: set_reservations,
    );

    book_collection!(
        sales_records: SalesRecord,
        list: sales_record_list,
        has: has_sales_record,
        add: add_sales_record,
        remove: remove_sales_record,
        set: set_sales_record,
        set_list: set_sales_records,
    );
}

impl ReadOnlyBook for Book {
    fn account_list(&self) -> &[Account] {
        Book::account_list(self)
    }

    fn person_list(&self) -> &[Person] {
        Book::person_list(self)
    }

    fn ingredient_list(&self) -> &[Ingredient] {
        Book::ingredient_list(self)
    }

    fn item_list(&self) -> &[Item] {
        Book::item_list(self)
    }

    fn reservation_list(&self) -> &[Reservation] {
        Book::reservation_list(self)
    }

    fn sales_record_list(&self) -> &[SalesRecord] {
        Book::sales_record_list(self)
    }
}
