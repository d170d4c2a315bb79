use anyhow::Result;
use log::info;

use callboard::data::DataStore;
use callboard::settings::Settings;
use callboard::ui::{self, App};

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let store = DataStore::load()?;
    info!(
        "loaded {} agents and {} calls",
        store.agent_count(),
        store.call_count()
    );

    let mut app = App::new(store, settings);
    ui::run(&mut app)
}
