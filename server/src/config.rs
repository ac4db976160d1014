use std::{env, fmt::Display, str::FromStr};

use errors::Error;

pub struct Config {
    pub bind_address: String,
    pub database_url: String,
    pub pool_size: u32,
    pub client_host: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        Ok(Self {
            bind_address: try_load("BIND_ADDRESS", "0.0.0.0:8080")?,
            database_url: try_load("DATABASE_URL", "polls.sqlite3")?,
            pool_size: try_load("DB_POOL_SIZE", "8")?,
            client_host: env::var("CLIENT_HOST").ok(),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, Error>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{} not set, using default: {}", key, default);
            default.to_string()
        })
        .parse()
        .map_err(|err| {
            warn!("Invalid {} value: {}", key, err);
            Error::ConfigError(format!("Invalid {} value: {}", key, err))
        })
}
