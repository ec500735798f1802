use std::sync::Arc;

use fni_core::{ArticlesApi, Result};
use tracing::info;

pub mod backends;
pub mod config;

pub use backends::*;
pub use config::{BackendKind, ClientConfig};

/// Builds the Articles API client selected by `config`.
pub fn create_api(config: &ClientConfig) -> Result<Arc<dyn ArticlesApi>> {
    let api: Arc<dyn ArticlesApi> = match config.backend {
        BackendKind::Http => {
            let api = HttpArticles::new(config)?;
            info!("Using Articles API at {}", api.articles_url());
            Arc::new(api)
        }
        BackendKind::Memory => {
            info!("Using in-memory articles backend");
            Arc::new(MemoryArticles::new())
        }
    };
    Ok(api)
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_api, BackendKind, ClientConfig};
}
