use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vitrine::config::Config;
use vitrine::db::{AppState, create_pool, init_db, queries, seed_defaults};
use vitrine::geo::CountryLocator;
use vitrine::jwt::TokenSigner;
use vitrine::password::hash_password;

#[derive(Parser)]
#[command(name = "vitrine", version, about = "Landing page and dashboard API for selling an ebook")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Create an admin, or reset the password of an existing one
    CreateAdmin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let pool = create_pool(&config.database_path).context("opening database")?;
    {
        let conn = pool.get()?;
        init_db(&conn)?;
        seed_defaults(&conn)?;
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, pool).await,
        Command::CreateAdmin { username, password } => {
            let conn = pool.get()?;
            let admin = queries::upsert_admin(&conn, &username, &hash_password(&password)?)?;
            tracing::info!("Admin '{}' is ready", admin.username);
            Ok(())
        }
    }
}

async fn serve(config: Config, pool: vitrine::db::DbPool) -> Result<()> {
    bootstrap_admin(&config, &pool)?;

    let tokens = match &config.jwt_secret {
        Some(secret) => TokenSigner::new(secret.as_bytes(), config.access_token_ttl_minutes),
        None => {
            tracing::warn!("JWT_SECRET not set; using a random key, sessions end on restart");
            TokenSigner::ephemeral(config.access_token_ttl_minutes)
        }
    };
    let locator = CountryLocator::new(config.geoip_lookup_url.clone(), config.default_country.clone());
    if !locator.has_lookup_service() {
        tracing::info!(
            "No IP lookup service; country detection uses edge headers, default {}",
            locator.default_country()
        );
    }

    let state = AppState {
        db: pool,
        tokens,
        locator,
    };
    let app = vitrine::app(state, &config);

    if config.dev_mode {
        tracing::warn!("Running in DEV mode: POST /api/init-admin is enabled");
    }

    let addr = config.addr();
    tracing::info!("Vitrine v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// First boot only: create the configured admin when no admin exists.
fn bootstrap_admin(config: &Config, pool: &vitrine::db::DbPool) -> Result<()> {
    let (Some(username), Some(password)) = (
        config.bootstrap_admin_username.as_deref(),
        config.bootstrap_admin_password.as_deref(),
    ) else {
        return Ok(());
    };

    let conn = pool.get()?;
    if queries::count_admins(&conn)? > 0 {
        return Ok(());
    }
    queries::create_admin(&conn, username, &hash_password(password)?, true)?;
    tracing::info!("Bootstrapped admin '{}'", username);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
