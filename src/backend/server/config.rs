//! Server Configuration
//!
//! Configuration comes from environment variables (loaded from a `.env`
//! file in `main` when present). Only `DATABASE_URL` is required; the rest
//! default to sensible local-development values. The API cannot serve
//! anything without its datastore, so unlike optional services the pool is
//! established fail-hard at startup, with migrations applied before the
//! first request.

use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub server_port: u16,
    pub thumbnail_dir: String,
    pub public_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let database_url = std::env::var("DATABASE_URL")?;

        let server_port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let thumbnail_dir =
            std::env::var("THUMBNAIL_DIR").unwrap_or_else(|_| "thumbnails".to_string());

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{server_port}"));

        Ok(Self {
            database_url,
            server_port,
            thumbnail_dir,
            public_base_url,
        })
    }
}

/// Connect the shared pool and bring the schema up to date.
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}
