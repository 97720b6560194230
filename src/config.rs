//! Service Configuration
//!
//! Settings come from `CLOUDS_*` environment variables, then command-line
//! flags override them (`--bind`, `--upstream`, `--prefetch`).

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.aiven.io/v1/clouds";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:3000",
    "https://aiven-cloud-selection.vercel.app",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub allowed_origins: Vec<String>,
    /// Fetch the catalog at startup instead of on the first request.
    pub prefetch: bool,
    /// Also write logs to this file when set.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            prefetch: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(bind) = get("CLOUDS_BIND") {
            config.bind_addr = bind
                .parse()
                .with_context(|| format!("CLOUDS_BIND: invalid address '{}'", bind))?;
        }
        if let Some(url) = get("CLOUDS_UPSTREAM_URL") {
            config.upstream_url = url;
        }
        if let Some(secs) = get("CLOUDS_UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("CLOUDS_UPSTREAM_TIMEOUT_SECS: invalid number '{}'", secs))?;
            if secs == 0 {
                bail!("CLOUDS_UPSTREAM_TIMEOUT_SECS must be greater than zero");
            }
            config.upstream_timeout = Duration::from_secs(secs);
        }
        if let Some(origins) = get("CLOUDS_ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(prefetch) = get("CLOUDS_PREFETCH") {
            config.prefetch = parse_bool(&prefetch)
                .with_context(|| format!("CLOUDS_PREFETCH: invalid boolean '{}'", prefetch))?;
        }
        if let Some(path) = get("CLOUDS_LOG_FILE") {
            config.log_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Applies command-line overrides. Unknown arguments are ignored.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args.get(i + 1).context("--bind requires <addr:port>")?;
                    self.bind_addr = value
                        .parse()
                        .with_context(|| format!("--bind: invalid address '{}'", value))?;
                    i += 2;
                }
                "--upstream" => {
                    let value = args.get(i + 1).context("--upstream requires <url>")?;
                    self.upstream_url = value.clone();
                    i += 2;
                }
                "--prefetch" => {
                    self.prefetch = true;
                    i += 1;
                }
                _ => {
                    i += 1;
                }
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("CLOUDS_BIND", "0.0.0.0:9000"),
            ("CLOUDS_UPSTREAM_URL", "http://localhost:1234/v1/clouds"),
            ("CLOUDS_UPSTREAM_TIMEOUT_SECS", "3"),
            ("CLOUDS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("CLOUDS_PREFETCH", "yes"),
            ("CLOUDS_LOG_FILE", "logs.log"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.upstream_url, "http://localhost:1234/v1/clouds");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.prefetch);
        assert_eq!(config.log_file, Some(PathBuf::from("logs.log")));
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = Config::from_lookup(lookup(&[("CLOUDS_BIND", "nope")])).unwrap_err();
        assert!(err.to_string().contains("CLOUDS_BIND"));

        let err = Config::from_lookup(lookup(&[("CLOUDS_UPSTREAM_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(err.to_string().contains("CLOUDS_UPSTREAM_TIMEOUT_SECS"));

        let err = Config::from_lookup(lookup(&[("CLOUDS_PREFETCH", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("CLOUDS_PREFETCH"));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[("CLOUDS_BIND", ""), ("CLOUDS_LOG_FILE", " ")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_args_override_env() {
        let mut config = Config::from_lookup(lookup(&[("CLOUDS_BIND", "0.0.0.0:9000")])).unwrap();
        let args: Vec<String> = ["--bind", "127.0.0.1:7000", "--prefetch", "--upstream", "http://x.test"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        config.apply_args(&args).unwrap();

        assert_eq!(config.bind_addr.port(), 7000);
        assert!(config.prefetch);
        assert_eq!(config.upstream_url, "http://x.test");
    }

    #[test]
    fn test_cli_flag_without_value_is_an_error() {
        let mut config = Config::default();
        assert!(config.apply_args(&["--bind".to_string()]).is_err());
    }
}
