use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::extract::TextExtractor;
use crate::session::flash::FlashQueue;
use crate::session::store::SessionStore;
use crate::upload::storage::UploadStorage;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Process-wide session. Held for the whole of an upload batch, so
    /// batches and clears never interleave.
    pub store: Arc<Mutex<SessionStore>>,
    pub storage: UploadStorage,
    pub flash: Arc<FlashQueue>,
    /// Pluggable extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        let storage = UploadStorage::new(config.upload_dir.clone());
        AppState {
            config,
            store: Arc::new(Mutex::new(SessionStore::new())),
            storage,
            flash: Arc::new(FlashQueue::default()),
            extractor,
        }
    }
}
