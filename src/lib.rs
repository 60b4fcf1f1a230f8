pub mod commands;
pub mod config;
pub mod emitter;

use anyhow::Result;
use commands::ReelState;
use reel_data::SymbolCatalog;
use std::path::Path;

/// Application context: the reel store plus the assets it draws from
#[derive(Debug)]
pub struct ReelApp {
    pub state: ReelState,
    pub catalog: SymbolCatalog,
}

impl ReelApp {
    pub fn new(catalog: SymbolCatalog) -> Self {
        Self {
            state: ReelState::default(),
            catalog,
        }
    }

    pub fn load(data_dir: &Path) -> Result<Self> {
        tracing::info!("Data directory: {}", data_dir.display());
        let catalog = SymbolCatalog::load(data_dir)?;
        Ok(Self::new(catalog))
    }
}

pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .init();
}

/// Start the application with the starter reel loaded
pub fn run() -> Result<ReelApp> {
    init_logging();

    let app = ReelApp::load(&config::resolve_data_dir())?;
    commands::initialize_starter_reel(&app.state, &app.catalog).map_err(anyhow::Error::msg)?;

    tracing::info!("Reel ready");
    Ok(app)
}
