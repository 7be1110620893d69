use calendar::{GridConfig, matcher::MatchOptions};
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub grid: GridConfig,
    pub match_options: MatchOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; real environment variables still apply
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let defaults = GridConfig::default();
        let start_hour = parse_or(&lookup, "GRID_START_HOUR", defaults.start_hour)?;
        if start_hour > 23 {
            return Err(ConfigError::Invalid {
                name: "GRID_START_HOUR",
                value: start_hour.to_string(),
            });
        }

        let pixels_per_minute =
            parse_or(&lookup, "GRID_PIXELS_PER_MINUTE", defaults.pixels_per_minute)?;
        if !(pixels_per_minute.is_finite() && pixels_per_minute > 0.0) {
            return Err(ConfigError::Invalid {
                name: "GRID_PIXELS_PER_MINUTE",
                value: pixels_per_minute.to_string(),
            });
        }

        let enforce_time_window = parse_or(&lookup, "GUIDELINE_TIME_WINDOWS", false)?;

        Ok(Self {
            database_url,
            bind_addr,
            grid: GridConfig {
                start_hour,
                pixels_per_minute,
            },
            match_options: MatchOptions {
                enforce_time_window,
            },
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/schedule")]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.grid, GridConfig::default());
        assert!(!config.match_options.enforce_time_window);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/schedule"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("GRID_START_HOUR", "7"),
            ("GRID_PIXELS_PER_MINUTE", "1.5"),
            ("GUIDELINE_TIME_WINDOWS", "true"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.grid.start_hour, 7);
        assert_eq!(config.grid.pixels_per_minute, 1.5);
        assert!(config.match_options.enforce_time_window);
    }

    #[test]
    fn test_database_url_is_required() {
        assert_eq!(
            config_from(&[]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
    }

    #[test]
    fn test_rejects_bad_grid() {
        let err = config_from(&[
            ("DATABASE_URL", "postgres://localhost/schedule"),
            ("GRID_START_HOUR", "25"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "GRID_START_HOUR", .. }));

        let err = config_from(&[
            ("DATABASE_URL", "postgres://localhost/schedule"),
            ("GRID_PIXELS_PER_MINUTE", "zero"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "GRID_PIXELS_PER_MINUTE", .. }));
    }
}
