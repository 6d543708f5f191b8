use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

/// 1 MiB
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub max_body_bytes: usize,
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub seed_file: Option<PathBuf>,
    pub workers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:5500".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_dir: PathBuf::from("logs"),
            log_level: Level::INFO,
            seed_file: None,
            workers: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();

        let max_body_bytes = parse_var("MAX_BODY_BYTES")?.unwrap_or(defaults.max_body_bytes);
        if max_body_bytes == 0 {
            bail!("MAX_BODY_BYTES must be greater than zero");
        }

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            max_body_bytes,
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: parse_var("LOG_LEVEL")?.unwrap_or(defaults.log_level),
            seed_file: env::var("SEED_FILE").ok().map(PathBuf::from),
            workers: parse_var("WORKERS")?,
        })
    }
}

/// Unset means "use the default"; set but unparseable is an error.
fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(None),
    }
}
