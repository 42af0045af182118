use chrono::{NaiveDate, NaiveDateTime};

use tablebook_accounts::{Account, Password, Username};
use tablebook_core::{DomainError, Name, Price};
use tablebook_desktop::commands::{
    AddCommand, ClearCommand, DeleteCommand, EditCommand, LoginCommand, LogoutCommand, RecordSaleCommand,
    RedoCommand, UndoCommand,
};
use tablebook_desktop::{App, AppConfig, CommandError};
use tablebook_inventory::{Ingredient, Quantity, Unit};
use tablebook_menu::{Item, Portion, Recipe};
use tablebook_reservations::{Pax, Reservation};
use tablebook_sales::QuantitySold;
use tablebook_store::{ChangeKind, Model};

fn logged_in() -> App {
    let mut app = App::new(AppConfig::default()).unwrap();
    app.execute(&LoginCommand {
        username: Username::parse("root").unwrap(),
        password: "1122qq".to_string(),
    })
    .unwrap();
    app
}

fn item(name: &str, price: &str) -> Item {
    Item::new(Name::parse(name).unwrap(), Price::parse(price).unwrap())
}

fn christmas(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 12, 25)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

#[test]
fn fries_and_soda_through_commands() {
    let mut app = logged_in();

    app.execute(&AddCommand::new(item("Fries", "2.00"))).unwrap();
    app.execute(&AddCommand::new(item("Soda", "1.00"))).unwrap();

    app.execute(&UndoCommand).unwrap();
    assert_eq!(app.model().item_list(), &[item("Fries", "2.00")]);

    app.execute(&RedoCommand).unwrap();
    assert_eq!(
        app.model().item_list(),
        &[item("Fries", "2.00"), item("Soda", "1.00")]
    );
}

#[test]
fn undo_stops_at_the_seeded_root_account() {
    let mut app = logged_in();
    app.execute(&AddCommand::new(item("Fries", "2.00"))).unwrap();

    app.execute(&UndoCommand).unwrap();
    assert_eq!(
        app.execute(&UndoCommand).unwrap_err(),
        CommandError::Domain(DomainError::NoUndoableState)
    );
    assert_eq!(app.model().account_list().len(), 1);
}

#[test]
fn duplicate_reservation_is_rejected_without_new_history() {
    let mut app = logged_in();
    let billy = |hour| Reservation::new(Name::parse("Billy").unwrap(), Pax::new(4).unwrap(), christmas(hour));

    app.execute(&AddCommand::new(billy(19))).unwrap();
    let len = app.model().history_len();

    let err = app.execute(&AddCommand::new(billy(21))).unwrap_err();
    assert_eq!(err.to_string(), "this reservation already exists");
    assert_eq!(app.model().history_len(), len);
}

#[test]
fn edit_and_delete_then_undo_each() {
    let mut app = logged_in();
    app.execute(&AddCommand::new(item("Fries", "2.00"))).unwrap();
    app.execute(&EditCommand::new(item("Fries", "2.00"), item("Fries", "2.50")))
        .unwrap();
    app.execute(&DeleteCommand::new(item("Fries", "2.50"))).unwrap();
    assert!(app.model().item_list().is_empty());

    app.execute(&UndoCommand).unwrap();
    assert_eq!(app.model().item_list(), &[item("Fries", "2.50")]);
    app.execute(&UndoCommand).unwrap();
    assert_eq!(app.model().item_list(), &[item("Fries", "2.00")]);
}

#[test]
fn sale_and_stock_roll_back_together() {
    let mut app = logged_in();
    let potato = Ingredient::new(
        Name::parse("Potato").unwrap(),
        Unit::parse("g").unwrap(),
        Price::parse("0.01").unwrap(),
        Quantity::new(1000),
        Quantity::new(200),
    );
    let fries = item("Fries", "2.00").with_recipe(
        Recipe::new(vec![Portion {
            ingredient: Name::parse("Potato").unwrap(),
            amount: Quantity::new(150),
        }])
        .unwrap(),
    );
    app.execute(&AddCommand::new(potato.clone())).unwrap();
    app.execute(&AddCommand::new(fries)).unwrap();
    let before = app.model().book().clone();

    app.execute(&RecordSaleCommand {
        item: Name::parse("Fries").unwrap(),
        quantity: QuantitySold::new(3).unwrap(),
        date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
    })
    .unwrap();
    assert_eq!(app.model().ingredient_list()[0].quantity(), Quantity::new(550));
    assert_eq!(app.model().sales_record_list()[0].revenue().unwrap().to_string(), "6.00");

    app.execute(&UndoCommand).unwrap();
    assert_eq!(app.model().book(), &before);
    assert_eq!(app.model().ingredient_list(), &[potato]);
}

#[test]
fn clear_keeps_accounts_and_session() {
    let mut app = logged_in();
    app.execute(&AddCommand::new(item("Fries", "2.00"))).unwrap();

    app.execute(&ClearCommand::default()).unwrap();
    assert!(app.model().item_list().is_empty());
    assert_eq!(app.model().account_list().len(), 1);
    assert!(app.session().is_logged_in());

    app.execute(&UndoCommand).unwrap();
    assert_eq!(app.model().item_list().len(), 1);
}

#[test]
fn current_account_cannot_be_deleted_but_others_can() {
    let mut app = logged_in();
    let cashier = Account::new(
        Username::parse("cashier").unwrap(),
        Password::parse("till123").unwrap(),
        Name::parse("Cashier").unwrap(),
    );
    app.execute(&AddCommand::new(cashier.clone())).unwrap();
    let root = app.model().account_list()[0].clone();

    assert_eq!(
        app.execute(&DeleteCommand::new(root)).unwrap_err(),
        CommandError::CannotRemoveCurrentAccount
    );
    app.execute(&DeleteCommand::new(cashier)).unwrap();
    assert_eq!(app.model().account_list().len(), 1);
}

#[test]
fn logout_closes_the_gate_again() {
    let mut app = logged_in();
    app.execute(&LogoutCommand).unwrap();

    assert_eq!(
        app.execute(&AddCommand::new(item("Fries", "2.00"))).unwrap_err(),
        CommandError::NotLoggedIn
    );
    assert!(app.model().item_list().is_empty());
}

#[test]
fn subscribers_follow_commands() {
    let mut app = logged_in();
    let changes = app.subscribe();

    app.execute(&AddCommand::new(item("Fries", "2.00"))).unwrap();
    app.execute(&UndoCommand).unwrap();
    let _ = app.execute(&UndoCommand);

    let received = changes.drain();
    let kinds: Vec<_> = received.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![ChangeKind::Added, ChangeKind::Undone]);
    assert!(received[1].book.item_list().is_empty());
}

#[test]
fn undoing_a_rename_of_the_current_account_logs_out() {
    let mut app = logged_in();
    let root = app.model().account_list()[0].clone();
    let admin = Account::new(
        Username::parse("admin").unwrap(),
        Password::parse("1122qq").unwrap(),
        root.name().clone(),
    );

    app.execute(&EditCommand::new(root.clone(), admin)).unwrap();
    assert!(app.session().is_current(&Username::parse("admin").unwrap()));

    let outcome = app.execute(&UndoCommand).unwrap();
    assert!(outcome.feedback.contains("no longer exists"));
    assert!(!app.session().is_logged_in());

    assert_eq!(
        app.execute(&DeleteCommand::new(root.clone())).unwrap_err(),
        CommandError::NotLoggedIn
    );
    assert_eq!(app.model().account_list(), &[root]);

    app.execute(&LoginCommand {
        username: Username::parse("root").unwrap(),
        password: "1122qq".to_string(),
    })
    .unwrap();
    assert_eq!(
        app.execute(&DeleteCommand::new(app.model().account_list()[0].clone()))
            .unwrap_err(),
        CommandError::CannotRemoveCurrentAccount
    );
}
