use actix_web::{HttpResponse, Responder, get, http::header::ContentType, web};

use crate::config::Config;

const CHAT_PAGE: &str = include_str!("../../static/index.html");

/// Single-page chat view; the transcript lives only in the browser tab.
#[get("/")]
pub async fn index(config: web::Data<Config>) -> impl Responder {
    let endpoint = format!("{}/analyze-query", config.api_prefix);
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(CHAT_PAGE.replace("__ANALYZE_ENDPOINT__", &endpoint))
}
