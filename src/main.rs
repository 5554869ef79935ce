use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use dotenvy::dotenv;

use attendance_assistant::config::Config;
use attendance_assistant::docs::ApiDoc;
use attendance_assistant::extraction::AzureKeyPhraseClient;
use attendance_assistant::query::RuleSet;
use attendance_assistant::routes;
use attendance_assistant::state::AppState;
use attendance_assistant::store::init_store;

use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let store = init_store(config.attendance_data_path.as_deref())?;
    let extractor = AzureKeyPhraseClient::new(&config.azure)
        .context("failed to build key phrase client")?;
    let state = Data::new(AppState::new(Arc::new(extractor), store, RuleSet::default()));
    let limiter = routes::limiter_config(config.rate_analyze_per_min)?;

    let server_addr = config.server_addr.clone();
    info!(addr = %server_addr, prefix = %config.api_prefix, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(state.clone())
            .app_data(Data::new(config.clone()))
            .configure(|cfg| routes::configure(cfg, &config, &limiter))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
