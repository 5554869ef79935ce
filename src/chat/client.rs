use futures::future::BoxFuture;
use thiserror::Error;

use crate::model::attendance::AttendanceRecord;
use crate::models::{AnalyzeQueryReq, AnalyzeQueryResponse};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(u16),
}

/// Where a chat session sends its questions.
pub trait AnalyzeBackend {
    fn analyze<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<AttendanceRecord>, ChatError>>;
}

/// HTTP client for `POST {api_prefix}/analyze-query`.
pub struct AnalyzeClient {
    http: reqwest::Client,
    url: String,
}

impl AnalyzeClient {
    pub fn new(url: impl Into<String>) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("attendance-chat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post_query(&self, query: &str) -> Result<Vec<AttendanceRecord>, ChatError> {
        let resp = self
            .http
            .post(&self.url)
            .json(&AnalyzeQueryReq {
                query: query.to_string(),
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body: AnalyzeQueryResponse = resp.json().await?;
        Ok(body.response)
    }
}

impl AnalyzeBackend for AnalyzeClient {
    fn analyze<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<AttendanceRecord>, ChatError>> {
        Box::pin(self.post_query(query))
    }
}
