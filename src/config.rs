use serde::Deserialize;
use tracing::warn;

const DEV_JWT_SECRET: &str = "filmbox-dev-secret-change-in-production";

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub database_ssl: bool,
    pub host: String,
    pub port: u16,
    /// Exact CORS origin; `None` means permissive (dev only).
    pub frontend_origin: Option<String>,
    pub jwt: JwtConfig,
    pub tmdb: TmdbConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let database_ssl = std::env::var("DATABASE_SSL")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);
        let frontend_origin = std::env::var("FRONTEND_URL")
            .ok()
            .filter(|v| v.as_str() != "*");

        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET").unwrap_or_else(|_| {
                warn!("JWT_SECRET not set, using the development fallback secret");
                DEV_JWT_SECRET.into()
            }),
            ttl_days: std::env::var("JWT_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(7),
        };

        let tmdb = TmdbConfig {
            api_key: std::env::var("TMDB_API_KEY").unwrap_or_else(|_| {
                warn!("TMDB_API_KEY not set, catalog requests will be rejected upstream");
                String::new()
            }),
            base_url: std::env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".into()),
        };

        Ok(Self {
            database_url,
            database_ssl,
            host,
            port,
            frontend_origin,
            jwt,
            tmdb,
        })
    }
}
