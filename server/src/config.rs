use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub store_url: String,
    pub store_key: String,
    pub cors_origin: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("POTLUCK_PORT", "4000"),
            store_url: try_load("POTLUCK_STORE_URL", "http://localhost:54321"),
            store_key: load_key("POTLUCK_STORE_KEY"),
            cors_origin: try_load("POTLUCK_CORS_ORIGIN", "http://localhost:3000"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn load_key(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{key} not set, store requests will be sent unauthenticated");
        String::new()
    })
}
