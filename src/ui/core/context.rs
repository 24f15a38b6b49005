use crate::{config::UiConfig, icons::IconService, logger::Logger, service::InventoryService};

/// Services and settings shared by the UI components
#[derive(Clone)]
pub struct AppContext {
    pub service: InventoryService,
    pub ui: UiConfig,
    pub icons: IconService,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(service: InventoryService, ui: UiConfig, logger: Logger) -> Self {
        Self {
            icons: IconService::new(ui.icon_theme),
            service,
            ui,
            logger,
        }
    }
}
