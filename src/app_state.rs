use std::sync::Arc;

use crate::services::{cache::ResponseCache, sunat::SunatClient};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub sunat: Arc<SunatClient>,
    pub cache: Arc<ResponseCache>,
}

impl AppState {
    pub fn new(sunat: SunatClient, cache: ResponseCache) -> Self {
        Self {
            sunat: Arc::new(sunat),
            cache: Arc::new(cache),
        }
    }
}
