use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_api::analysis::Analyzer;
use resume_api::config::Config;
use resume_api::lexicon::loader::load_or_builtin;
use resume_api::routes::build_router;
use resume_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Lexicon is required; a missing or invalid one aborts startup
    let lexicon = load_or_builtin(config.lexicon_path.as_deref())?;
    info!(
        roles = lexicon.roles().len(),
        hard_skills = lexicon.hard_skills().len(),
        "Lexicon loaded"
    );

    let injection = config.keyword_injection();
    info!("Keyword injection: {:?}", injection);

    // Build app state
    let state = AppState {
        analyzer: Arc::new(Analyzer::new(Arc::new(lexicon), injection)),
        config: config.clone(),
    };

    // Build router with middleware
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
