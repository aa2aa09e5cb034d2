use anyhow::Result;
use destishare_app::App;
use destishare_client::RestStore;

use crate::tui;

pub fn handle(runtime: &tokio::runtime::Runtime, store: RestStore) -> Result<()> {
    let app = App::new(store);
    tui::run(runtime, app)
}
