use anyhow::{Context, Result};
use std::sync::Arc;
use stockroom::api::HttpBackend;
use stockroom::config::Config;
use stockroom::logger::{init_file_logging, Logger};
use stockroom::service::InventoryService;
use stockroom::session::SessionStore;
use stockroom::ui::{self, core::AppContext};

const USAGE: &str = "Usage: stockroom [--generate-config [PATH]] [--help]

Environment:
  STOCKROOM_API_URL   Override api.base_url from the configuration file";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--help") | Some("-h") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => path.into(),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Some(other) => {
            eprintln!("Unknown argument: {}\n\n{}", other, USAGE);
            std::process::exit(2);
        }
        None => {}
    }

    let config = Config::load()?;

    if config.logging.enabled {
        let path = init_file_logging()?;
        log::info!("Logging to {}", path.display());
    }
    let logger = Logger::from_config(config.logging.enabled);

    let backend = HttpBackend::from_config(&config.api).context("Failed to create HTTP client")?;
    let store = match SessionStore::default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("Session will not be persisted: {:#}", e);
            None
        }
    };

    let service = InventoryService::new(Arc::new(backend), store);
    if let Err(e) = service.restore() {
        log::warn!("Ignoring stored session: {:#}", e);
    }

    let context = AppContext::new(service, config.ui, logger);
    ui::run_app(context).await
}
