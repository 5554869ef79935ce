use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{DocumentKeyPhrases, ExtractionError, KeyPhraseExtractor};
use crate::config::AzureConfig;

const KEY_PHRASES_PATH: &str = "/text/analytics/v3.1/keyPhrases";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[derive(Debug, Serialize)]
struct KeyPhraseRequest<'a> {
    documents: Vec<InputDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct InputDocument<'a> {
    id: String,
    language: &'a str,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyPhraseResponse {
    #[serde(default)]
    documents: Vec<DocumentResult>,
    #[serde(default)]
    errors: Vec<DocumentError>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentResult {
    id: String,
    key_phrases: Vec<String>,
    #[serde(default)]
    warnings: Vec<ServiceMessage>,
}

#[derive(Debug, Deserialize)]
struct DocumentError {
    id: String,
    error: ServiceMessage,
}

#[derive(Debug, Deserialize)]
struct ServiceMessage {
    code: String,
    message: String,
}

/// Azure AI Language key phrase extraction over its REST API.
pub struct AzureKeyPhraseClient {
    http: reqwest::Client,
    url: String,
    key: String,
    language: String,
}

impl AzureKeyPhraseClient {
    pub fn new(config: &AzureConfig) -> Result<Self, ExtractionError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("attendance-assistant/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            url: key_phrases_url(&config.endpoint),
            key: config.key.clone(),
            language: config.language.clone(),
        })
    }

    async fn request(&self, documents: Vec<String>) -> Result<Vec<DocumentKeyPhrases>, ExtractionError> {
        let body = build_request(&documents, &self.language);
        let ids: Vec<String> = body.documents.iter().map(|d| d.id.clone()).collect();

        let resp = self
            .http
            .post(&self.url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExtractionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: KeyPhraseResponse = resp.json().await?;
        debug!(model_version = ?parsed.model_version, "Key phrase response received");
        collate(&ids, parsed)
    }
}

impl KeyPhraseExtractor for AzureKeyPhraseClient {
    fn extract_key_phrases(
        &self,
        documents: Vec<String>,
    ) -> BoxFuture<'_, Result<Vec<DocumentKeyPhrases>, ExtractionError>> {
        Box::pin(self.request(documents))
    }
}

fn key_phrases_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), KEY_PHRASES_PATH)
}

fn build_request<'a>(documents: &[String], language: &'a str) -> KeyPhraseRequest<'a> {
    KeyPhraseRequest {
        documents: documents
            .iter()
            .enumerate()
            .map(|(idx, text)| InputDocument {
                id: idx.to_string(),
                language,
                text: text.clone(),
            })
            .collect(),
    }
}

/// Puts results back into request order. Any per-document error fails the batch.
fn collate(
    ids: &[String],
    mut response: KeyPhraseResponse,
) -> Result<Vec<DocumentKeyPhrases>, ExtractionError> {
    if let Some(failed) = response.errors.into_iter().next() {
        return Err(ExtractionError::Document {
            id: failed.id,
            code: failed.error.code,
            message: failed.error.message,
        });
    }

    ids.iter()
        .map(|id| -> Result<DocumentKeyPhrases, ExtractionError> {
            let pos = response
                .documents
                .iter()
                .position(|doc| doc.id == *id)
                .ok_or_else(|| ExtractionError::MissingDocument(id.clone()))?;
            let doc = response.documents.swap_remove(pos);
            for warning in &doc.warnings {
                warn!(document = %doc.id, code = %warning.code, "{}", warning.message);
            }
            Ok(DocumentKeyPhrases {
                id: doc.id,
                key_phrases: doc.key_phrases,
            })
        })
        .collect()
}
