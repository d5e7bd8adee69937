use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::{env, str::FromStr};
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,

    // Rate limiting
    pub rate_calculate_per_min: u32,

    /// Browser origins allowed to call the API; `*` allows any.
    pub cors_allowed_origins: Vec<String>,

    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            rate_calculate_per_min: parse_var("RATE_CALCULATE_PER_MIN", 600)?,
            cors_allowed_origins: parse_list(env::var("CORS_ALLOWED_ORIGINS").ok()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: parse_var("LOG_LEVEL", Level::INFO)?,
        })
    }
}

fn parse_list(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_value(key, env::var(key).ok(), default)
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {value:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_uses_default() {
        assert_eq!(parse_value::<u32>("RATE", None, 600).unwrap(), 600);
    }

    #[test]
    fn parses_rate_and_level() {
        assert_eq!(parse_value::<u32>("RATE", Some(" 30 ".into()), 600).unwrap(), 30);
        assert_eq!(
            parse_value("LOG_LEVEL", Some("debug".into()), Level::INFO).unwrap(),
            Level::DEBUG
        );
    }

    #[test]
    fn origin_list_is_split_and_trimmed() {
        assert_eq!(
            parse_list(Some(" http://localhost:5173 , https://payroll.example.com,".into())),
            vec!["http://localhost:5173", "https://payroll.example.com"]
        );
        assert!(parse_list(None).is_empty());
    }

    #[test]
    fn bad_value_names_the_variable() {
        let err = parse_value::<u32>("RATE_CALCULATE_PER_MIN", Some("lots".into()), 600).unwrap_err();
        assert!(err.to_string().contains("RATE_CALCULATE_PER_MIN"));
    }
}
