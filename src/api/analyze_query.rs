use actix_web::{
    HttpRequest, HttpResponse, error::JsonPayloadError, http::header, web,
};
use serde_json::json;
use tracing::{Instrument, debug, error, info, info_span};
use uuid::Uuid;

use crate::{
    error::AnalyzeError,
    model::attendance::AttendanceRecord,
    models::{AnalyzeQueryReq, AnalyzeQueryResponse},
    state::AppState,
};

/// Answer a free-text attendance question
#[utoipa::path(
    post,
    path = "/api/analyze-query",
    request_body = AnalyzeQueryReq,
    responses(
        (status = 200, description = "Records matching the question", body = AnalyzeQueryResponse),
        (status = 405, description = "Wrong HTTP method", body = Object, example = json!({
            "message": "Method not allowed"
        })),
        (status = 500, description = "Extraction or filtering failed", body = Object, example = json!({
            "error": "Error processing query"
        }))
    ),
    tag = "Attendance"
)]
pub async fn analyze_query(
    state: web::Data<AppState>,
    payload: web::Json<AnalyzeQueryReq>,
) -> Result<HttpResponse, AnalyzeError> {
    let request_id = Uuid::new_v4();
    let AnalyzeQueryReq { query } = payload.into_inner();

    let response = analyze(&state, query)
        .instrument(info_span!("analyze_query", %request_id))
        .await
        .map_err(|e| {
            error!(error = %e, %request_id, "Failed to process query");
            e
        })?;

    Ok(HttpResponse::Ok().json(AnalyzeQueryResponse { response }))
}

/// Extracts key phrases from `query` and filters the store with them.
pub async fn analyze(
    state: &AppState,
    query: String,
) -> Result<Vec<AttendanceRecord>, AnalyzeError> {
    let results = state.extractor.extract_key_phrases(vec![query]).await?;
    let document = results
        .into_iter()
        .next()
        .ok_or(AnalyzeError::EmptyExtraction)?;

    info!(key_phrases = ?document.key_phrases, "Key phrases extracted");

    match state.rules.matching_rule(&document.key_phrases) {
        Some(rule) => debug!(keyword = %rule.keyword, filter = ?rule.filter, "Rule matched"),
        None => debug!("No rule matched, returning all records"),
    }

    Ok(state
        .rules
        .classify(&document.key_phrases, state.store.records()))
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .json(json!({
            "message": "Method not allowed"
        }))
}

/// Malformed bodies fail like any other processing error.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    error!(error = %err, "Rejected analyze-query body");
    AnalyzeError::InvalidBody(err.to_string()).into()
}
