//! Concrete commands.

pub mod account;
pub mod entity;
pub mod history;
pub mod stock;

pub use account::{ChangePasswordCommand, LoginCommand, LogoutCommand};
pub use entity::{AddCommand, DeleteCommand, EditCommand, SessionRules};
pub use history::{ClearCommand, RedoCommand, UndoCommand};
pub use stock::{RecordSaleCommand, RestockCommand};
