use std::sync::Arc;

use uigen::config::ServerConfig;
use uigen::llm::config::LlmConfig;
use uigen::llm::{LlmChat, LlmClient};
use uigen::services::generate::GenerateSettings;
use uigen::{routes, state};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();

    // Initialize LLM client (non-fatal: generation disabled if config missing).
    let (llm, settings) = match LlmConfig::from_env().and_then(|cfg| {
        let settings = GenerateSettings { max_tokens: cfg.max_tokens };
        LlmClient::from_config(cfg).map(|client| (client, settings))
    }) {
        Ok((client, settings)) => {
            tracing::info!(model = client.model(), max_tokens = settings.max_tokens, "LLM client initialized");
            (Some(Arc::new(client) as Arc<dyn LlmChat>), settings)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; generation disabled");
            (None, GenerateSettings::default())
        }
    };

    let state = state::AppState::new(llm, settings);
    let app = routes::app(state, &config);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "uigen listening");
    axum::serve(listener, app).await.expect("server failed");
}
