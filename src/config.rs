use std::env;

use anyhow::{Context, Result};

const DEFAULT_INTERVAL: &str = "5min";
const DEFAULT_WINDOW_START: &str = "2023-04-03 09:30";
const DEFAULT_WINDOW_END: &str = "2023-04-03 10:00";
const DEFAULT_SESSION_FILTER: &str = "open";

/// Runtime configuration, read once at startup and passed into the
/// components that need it.
#[derive(Clone, Debug)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub window: WindowConfig,
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub access_token: String,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub path: String,
}

/// The fetch window shared by every symbol in a run. Start and end are
/// passed through to the API untouched.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub interval: String,
    pub start: String,
    pub end: String,
    pub session_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api: ApiConfig {
                base_url: require("API_BASE_URL")?,
                access_token: require("ACCESS_TOKEN")?,
            },
            database: DatabaseConfig {
                path: require("DATABASE_PATH")?,
            },
            window: WindowConfig {
                interval: optional("QUOTE_INTERVAL", DEFAULT_INTERVAL),
                start: optional("WINDOW_START", DEFAULT_WINDOW_START),
                end: optional("WINDOW_END", DEFAULT_WINDOW_END),
                session_filter: optional("SESSION_FILTER", DEFAULT_SESSION_FILTER),
            },
        })
    }
}

fn require(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("Missing {} in environment", key))
}

fn optional(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
