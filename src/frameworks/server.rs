// Framework bootstrap for the recipe server runtime.

use crate::frameworks::config::Config;
use crate::interface_adapters::clients::SpoonacularClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::sync::Arc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve on an already-bound listener; tests bind an ephemeral port themselves.
pub async fn run(listener: tokio::net::TcpListener, config: Config) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&config)?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    // A missing API key stops startup before any port is bound.
    let config = Config::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;
    tracing::debug!(?config, "configuration loaded");

    let address = config.socket_addr();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let client = SpoonacularClient::new(
        config.spoonacular_base_url.clone(),
        config.api_key.clone(),
        config.upstream_timeout,
    )
    .map_err(|e| std::io::Error::other(format!("failed to initialize spoonacular client: {e}")))?;
    tracing::debug!(
        base_url = %config.spoonacular_base_url,
        timeout_ms = config.upstream_timeout.as_millis(),
        "spoonacular client configured"
    );

    Ok(Arc::new(AppState {
        recipes: Arc::new(client),
    }))
}
