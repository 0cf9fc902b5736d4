use std::{env, time::Duration};

use crate::errors::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub history_url: Option<String>,
    pub history_token: Option<String>,
    pub history_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_var("PORT", 8080)?,
            history_url: non_empty_var("HISTORY_API_URL"),
            history_token: non_empty_var("HISTORY_TOKEN"),
            history_timeout: Duration::from_secs(parse_var("HISTORY_TIMEOUT_SECS", 10)?),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match non_empty_var(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
