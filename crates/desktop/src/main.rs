//! Bootstraps a tablebook session from the environment.

use tablebook_desktop::{App, AppConfig};
use tablebook_store::Model;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    tablebook_observability::init_with(&config.log);

    let app = App::new(config)?;
    let book = app.model().book();
    tracing::info!(
        session = %app.session().id(),
        accounts = book.account_list().len(),
        items = book.item_list().len(),
        "tablebook ready"
    );

    Ok(())
}
