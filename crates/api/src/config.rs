use anyhow::{bail, Context};
use booking_auth::{AdminCredentials, DEFAULT_SESSION_TTL_HOURS, DEFAULT_SWEEP_INTERVAL, MAX_SESSION_TTL_HOURS};
use booking_database::StoreConfig;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub admin: AdminCredentials,
    pub auth_enabled: bool,
    pub session_ttl: chrono::Duration,
    pub sweep_interval: Duration,
    pub store: StoreConfig,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let admin = AdminCredentials::new(
            required("ADMIN_USERNAME")?,
            required("ADMIN_PASSWORD")?,
        );

        // PORT is what most hosting platforms inject
        let server_port = match std::env::var("SERVER_PORT").or_else(|_| std::env::var("PORT")) {
            Ok(v) => v.parse().with_context(|| format!("Invalid port: {}", v))?,
            Err(_) => 3000,
        };

        let session_ttl = session_ttl(parse_or("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?)?;

        let sweep_secs: u64 = parse_or("SESSION_SWEEP_INTERVAL_SECS", DEFAULT_SWEEP_INTERVAL.as_secs())?;
        if sweep_secs == 0 {
            bail!("SESSION_SWEEP_INTERVAL_SECS must be positive");
        }

        Ok(Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port,
            admin,
            auth_enabled: parse_flag("AUTH_ENABLED", true)?,
            session_ttl,
            sweep_interval: Duration::from_secs(sweep_secs),
            store: StoreConfig::from_env()?,
            static_dir: std::env::var("STATIC_DIR").ok().map(PathBuf::from),
        })
    }
}

fn session_ttl(hours: i64) -> anyhow::Result<chrono::Duration> {
    if !(1..=MAX_SESSION_TTL_HOURS).contains(&hours) {
        bail!("SESSION_TTL_HOURS must be between 1 and {}, got {}", MAX_SESSION_TTL_HOURS, hours);
    }
    chrono::Duration::try_hours(hours).context("SESSION_TTL_HOURS out of range")
}

fn required(key: &str) -> anyhow::Result<String> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => bail!("{} must be set", key),
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v.parse().with_context(|| format!("Invalid value for {}: {}", key, v)),
        Err(_) => Ok(default),
    }
}

fn parse_flag(key: &str, default: bool) -> anyhow::Result<bool> {
    match std::env::var(key) {
        Ok(v) => match v.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => bail!("Invalid value for {}: {}", key, v),
        },
        Err(_) => Ok(default),
    }
}
