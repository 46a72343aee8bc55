//! AI Sense Check API server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use ai_sense_check::adapters::http::{app_router, AppState};
use ai_sense_check::adapters::{
    DisabledSessionSink, IpApiLocator, LlmQuestionGenerator, NoopGeoLocator, OpenAIConfig,
    OpenAIProvider, SvgCertificateRenderer, WebhookSessionSink,
};
use ai_sense_check::config::{AppConfig, ValidationError};
use ai_sense_check::ports::{GeoLocator, SessionSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let state = build_state(&config)?;
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        model = %config.ai.model,
        "AI Sense Check listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

fn build_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let api_key = config
        .ai
        .openai_api_key
        .clone()
        .ok_or(ValidationError::MissingRequired("OPENAI_API_KEY"))?;
    let provider = OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_retries(config.ai.max_retries, Duration::from_secs(1)),
    )?;
    let generator = LlmQuestionGenerator::new(Arc::new(provider))
        .with_sampling(config.ai.temperature, config.ai.max_tokens);

    let sink: Arc<dyn SessionSink> = match config.sheets.webhook_url() {
        Some(url) => Arc::new(WebhookSessionSink::new(url, config.sheets.timeout())?),
        None => {
            tracing::warn!("No spreadsheet webhook configured; sessions will not be exported");
            Arc::new(DisabledSessionSink)
        }
    };

    let locator: Arc<dyn GeoLocator> = if config.geolocation.enabled {
        Arc::new(IpApiLocator::new(
            &config.geolocation.base_url,
            config.geolocation.timeout(),
        )?)
    } else {
        Arc::new(NoopGeoLocator)
    };

    Ok(AppState::new(
        Arc::new(generator),
        sink,
        locator,
        Arc::new(SvgCertificateRenderer),
        config.site.public_url.as_str(),
    ))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
