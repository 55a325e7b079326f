use directory_core::directory::client::DEFAULT_DIRECTORY_URL;
use std::env;

/// Environment variable overriding the user directory endpoint
pub const DIRECTORY_URL_VAR: &str = "DIRECTORY_URL";
/// Environment variable holding the log filter directives
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub directory_url: String,
    pub log_filter: String,
}

impl Config {
    /// Reads the configuration from the process environment, after `.env` has been loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Unset or blank variables fall
    /// back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_or = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        Self {
            directory_url: value_or(DIRECTORY_URL_VAR, DEFAULT_DIRECTORY_URL),
            log_filter: value_or(LOG_FILTER_VAR, DEFAULT_LOG_FILTER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_in(&[]));
        assert_eq!(
            config,
            Config {
                directory_url: String::from("https://jsonplaceholder.typicode.com/users"),
                log_filter: String::from("info"),
            }
        );
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_in(&[
            ("DIRECTORY_URL", "http://localhost:8080/users"),
            ("RUST_LOG", "directory_core=debug"),
        ]));
        assert_eq!(config.directory_url, "http://localhost:8080/users");
        assert_eq!(config.log_filter, "directory_core=debug");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_in(&[("DIRECTORY_URL", "   ")]));
        assert_eq!(config.directory_url, DEFAULT_DIRECTORY_URL);
    }
}
