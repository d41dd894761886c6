use std::sync::Arc;

use bioskop_catalog::bioskop::BioskopClient;
use bioskop_catalog::provider::CatalogProvider;

use crate::config::ServerConfig;

/// Shared application state passed to all handlers.
///
/// Holds no per-request data; the catalog client is built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    /// Base of the playback links handed out by the stream endpoint.
    pub site_url: String,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            catalog: Arc::new(BioskopClient::new(config.api_base_url.clone())),
            site_url: config.site_url.clone(),
        }
    }
}
