//! CLI entrypoint for search-relay
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use relay_application::{ExchangeLogger, HandleQueryUseCase, ModelClients};
use relay_domain::{ConfigIssue, GatewayConfig, Severity};
use relay_infrastructure::{
    AnthropicBackend, AnthropicClient, ConfigLoader, DeepSeekBackend, DeepSeekClient,
    JsonlExchangeLogger, TavilySearchClient,
};
use relay_presentation::{AccessGate, AppState, Cli, build_router, serve};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting search-relay");

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let mut config = file_config.resolve();
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    let issues = config.validate();
    report_issues(&issues);
    if GatewayConfig::has_errors(&issues) {
        bail!("Configuration has errors; refusing to start");
    }

    // === Dependency Injection ===
    let http = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    let models = ModelClients::new(
        Arc::new(AnthropicClient::new(
            AnthropicBackend::new(config.providers.anthropic.clone()),
            http.clone(),
        )),
        Arc::new(DeepSeekClient::new(
            DeepSeekBackend::new(config.providers.deepseek.clone()),
            http.clone(),
        )),
    );
    let search = Arc::new(TavilySearchClient::new(
        config.providers.search.clone(),
        http,
    ));

    let mut use_case = HandleQueryUseCase::new(models, search);
    if let Some(path) = &file_config.logging.exchange_log {
        let logger = JsonlExchangeLogger::open(path)
            .with_context(|| format!("Failed to open exchange log {}", path.display()))?;
        info!("Exchange log: {}", logger.path().display());
        let logger: Arc<dyn ExchangeLogger> = Arc::new(logger);
        use_case = use_case.with_exchange_logger(logger);
    }

    let gate = AccessGate::new(config.server.secret.clone(), config.server.redirect_url.clone());
    let app = build_router(AppState::new(use_case, gate));

    let listener = tokio::net::TcpListener::bind(config.server.bind.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;

    serve(listener, app).await?;
    Ok(())
}

fn report_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => error!("Config: {}", issue.message),
            Severity::Warning => warn!("Config: {}", issue.message),
        }
    }
}
