use dotenvy::dotenv;
use guild_ledger::config::AppConfig;
use guild_ledger::db::{self, Db};
use guild_ledger::errors::Result;
use guild_ledger::web::{self, AppState};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the application configuration
    let config = AppConfig::from_env()?;
    info!(
        "Configuration loaded (database at {}, guild account '{}').",
        config.database_path, config.guild_name
    );

    // 4. Ensure the schema and the guild account exist
    if let Some(dir) = Path::new(&config.database_path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let db = Db::new(&config.database_path);
    db::ensure_schema(&db, &config.guild_name)
        .await
        .inspect(|_| info!("Database schema ensured."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Serve
    let bind_addr = config.bind_addr.clone();
    let state = AppState {
        db,
        config: Arc::new(config),
    };
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}.", bind_addr);
    axum::serve(listener, web::router(state)).await?;

    Ok(())
}
