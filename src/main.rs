// postie: look up posts and their authors from a JSONPlaceholder-style API.

mod api;
mod app;
mod cache;
mod config;
mod error;
mod logging;
mod service;
mod state;
#[cfg(test)]
mod testing;
mod ui;

use std::sync::Arc;

use api::HttpTransport;
use app::App;
use config::Config;
use error::Result;
use logging::{ConsoleLog, TracingLog};
use service::EntityService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let _log_guard = logging::init_logging(&config)?;

    let transport = HttpTransport::from_config(&config)?;
    let api_url = transport.base_url().to_string();
    let console = ConsoleLog::new(config.console_capacity);
    let log = (TracingLog::new(&config.log_channel), console.clone());
    let service = EntityService::new(Arc::new(transport), Arc::new(log));

    let mut app = App::new(service, console, api_url);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    result?;
    Ok(())
}
