//! doc-qa server binary
//!
//! Run with: cargo run -p doc-qa --bin doc-qa-server

use anyhow::Context;
use doc_qa::{config::QaConfig, providers::ChatCompletionClient, providers::LlmProvider, server::DocQaServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_qa=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                          doc-qa                           ║
║         Ask questions about a PDF or text document        ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration
    let config = QaConfig::load(None).context("failed to load configuration")?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Completion endpoint: {}", config.llm.base_url);
    tracing::info!("  - Model: {}", config.llm.model);
    tracing::info!("  - Max tokens: {}", config.llm.max_tokens);
    tracing::info!("  - Max upload size: {} bytes", config.server.max_upload_size);

    if config.llm.api_key.is_none() {
        tracing::warn!("OPENROUTER_API_KEY is not set; every answer will report an error");
        tracing::warn!("  export OPENROUTER_API_KEY=sk-or-...");
    }

    // Check the completion endpoint
    tracing::info!("Checking completion endpoint at {}...", config.llm.base_url);
    let client = ChatCompletionClient::new(&config.llm).context("failed to build HTTP client")?;
    match client.health_check().await {
        Ok(true) => tracing::info!("Completion endpoint is reachable"),
        _ => tracing::warn!("Completion endpoint not reachable at {}", config.llm.base_url),
    }

    // Create and start server
    let server = DocQaServer::new(config).context("failed to initialize server")?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nEndpoints:");
    println!("  POST   /api/document - Upload a PDF or TXT file");
    println!("  GET    /api/document - Document statistics and preview");
    println!("  POST   /api/ask      - Ask a question");
    println!("  GET    /api/history  - Questions asked so far");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
