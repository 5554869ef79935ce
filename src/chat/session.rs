use log::{debug, error};

use super::{AnalyzeBackend, Transcript, format_records};
use crate::model::message::Message;

/// One conversation: a transcript plus the backend answering it.
pub struct ChatSession<B> {
    backend: B,
    transcript: Transcript,
}

impl<B: AnalyzeBackend> ChatSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            transcript: Transcript::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Sends `input` and returns the assistant reply.
    ///
    /// Blank input is ignored. A failed request is logged and leaves only the
    /// user's message in the transcript.
    pub async fn submit(&mut self, input: &str) -> Option<&Message> {
        if input.trim().is_empty() {
            return None;
        }

        self.transcript.push_user(input);

        match self.backend.analyze(input).await {
            Ok(records) => {
                debug!("received {} records", records.len());
                Some(self.transcript.push_assistant(format_records(&records)))
            }
            Err(e) => {
                error!("Error: {}", e);
                None
            }
        }
    }
}
