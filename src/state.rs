use std::sync::Arc;

use crate::extraction::KeyPhraseExtractor;
use crate::query::RuleSet;
use crate::store::AttendanceStore;

/// Shared, read-only collaborators of the analyze handler.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn KeyPhraseExtractor>,
    pub store: AttendanceStore,
    pub rules: Arc<RuleSet>,
}

impl AppState {
    pub fn new(
        extractor: Arc<dyn KeyPhraseExtractor>,
        store: AttendanceStore,
        rules: RuleSet,
    ) -> Self {
        Self {
            extractor,
            store,
            rules: Arc::new(rules),
        }
    }
}
