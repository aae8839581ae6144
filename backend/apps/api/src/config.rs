//! Server configuration from the environment

use anyhow::Context;
use auth::{AuthConfig, MAX_SESSION_TTL};
use platform::config::{decode_secret, parse_flag};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 3600;

pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `SESSION_SECRET`, `COOKIE_SECURE`
    /// and `SESSION_TTL_SECS`
    ///
    /// Debug builds fall back to a random secret and insecure cookies.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR is not a socket address")?;

        let mut auth = match env::var("SESSION_SECRET") {
            Ok(encoded) => AuthConfig {
                session_secret: decode_secret("SESSION_SECRET", &encoded)?,
                ..AuthConfig::default()
            },
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
                AuthConfig::development()
            }
            Err(_) => anyhow::bail!("SESSION_SECRET must be set in release builds"),
        };

        auth.cookie_secure = match env::var("COOKIE_SECURE") {
            Ok(value) => parse_flag("COOKIE_SECURE", &value)?,
            Err(_) => !cfg!(debug_assertions),
        };

        auth.session_ttl = match env::var("SESSION_TTL_SECS") {
            Ok(value) => parse_session_ttl(&value)?,
            Err(_) => Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        };

        Ok(Self {
            database_url,
            bind_addr,
            auth,
        })
    }
}

/// Positive number of seconds, at most [`MAX_SESSION_TTL`]
fn parse_session_ttl(value: &str) -> anyhow::Result<Duration> {
    let secs = value
        .trim()
        .parse::<u64>()
        .context("SESSION_TTL_SECS must be a number of seconds")?;
    let ttl = Duration::from_secs(secs);
    if secs == 0 || ttl > MAX_SESSION_TTL {
        anyhow::bail!(
            "SESSION_TTL_SECS must be between 1 and {}",
            MAX_SESSION_TTL.as_secs()
        );
    }
    Ok(ttl)
}
