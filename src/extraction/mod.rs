//! Key phrase extraction collaborators.

pub mod azure;

use futures::future::BoxFuture;
use thiserror::Error;

pub use azure::AzureKeyPhraseClient;

/// Phrases extracted from one input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentKeyPhrases {
    pub id: String,
    pub key_phrases: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("document {id} failed: {code}: {message}")]
    Document {
        id: String,
        code: String,
        message: String,
    },
    #[error("document {0} missing from response")]
    MissingDocument(String),
}

/// Turns a batch of texts into per-document key phrases, in input order.
pub trait KeyPhraseExtractor: Send + Sync {
    fn extract_key_phrases(
        &self,
        documents: Vec<String>,
    ) -> BoxFuture<'_, Result<Vec<DocumentKeyPhrases>, ExtractionError>>;
}
