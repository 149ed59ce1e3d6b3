use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub bootstrap_superuser: Option<String>,
    pub bootstrap_password: Option<String>,
}

/// Token lifetime bounds, in hours (up to one year).
pub const JWT_TTL_HOURS_RANGE: std::ops::RangeInclusive<i64> = 1..=8760;

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            database_max_connections: get_env_parse_or("DATABASE_MAX_CONNECTIONS", 50)?,
            jwt_secret: get_env("JWT_SECRET")?,
            jwt_ttl_hours: check_ttl_hours(get_env_parse_or("JWT_TTL_HOURS", 24)?)?,
            bootstrap_superuser: env::var("BOOTSTRAP_SUPERUSER").ok(),
            bootstrap_password: env::var("BOOTSTRAP_PASSWORD").ok(),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn check_ttl_hours(hours: i64) -> Result<i64> {
    if JWT_TTL_HOURS_RANGE.contains(&hours) {
        Ok(hours)
    } else {
        Err(Error::Config(format!(
            "JWT_TTL_HOURS must be between {} and {}, got {}",
            JWT_TTL_HOURS_RANGE.start(),
            JWT_TTL_HOURS_RANGE.end(),
            hours
        )))
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
