use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Welcome page server
///
/// Serves the welcome page and its assets, and forwards whoami lookups to
/// the auth backend.
/// Configuration priority: CLI args > Environment variables > Config file > Defaults
#[derive(Parser, Debug, Default)]
#[command(name = "welcome-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Welcome page server", long_about = None)]
pub struct CliArgs {
    /// Path to a TOML config file
    #[arg(short, long, env = "WELCOME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (1-65535)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory holding index.html and the web bundle
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Base URL of the auth backend that answers /auth/whoami
    #[arg(long, env = "WHOAMI_UPSTREAM")]
    pub whoami_upstream: Option<String>,

    /// Upstream request timeout in milliseconds (1000-60000)
    #[arg(long, env = "UPSTREAM_TIMEOUT_MS")]
    pub upstream_timeout_ms: Option<u64>,
}

/// Shape of the optional TOML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub whoami_upstream: Option<String>,
    pub upstream_timeout_ms: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub whoami_upstream: Option<String>,
    pub upstream_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            whoami_upstream: None,
            upstream_timeout_ms: 8000,
        }
    }
}

/// Validate that a value is within a given range (inclusive)
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

/// Validate URL format (basic check)
fn validate_url(url: &str, name: &str) -> Result<()> {
    if url.is_empty() {
        return Err(anyhow!("{name} cannot be empty"));
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!("{name} must start with http:// or https://"))
    }
}

/// Read and parse a TOML config file.
pub fn read_file(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

/// Load configuration from CLI args, environment and the optional config file.
pub fn load() -> Result<Config> {
    let args = CliArgs::parse();
    let file = match args.config.as_deref() {
        Some(path) => read_file(path)?,
        None => FileConfig::default(),
    };
    resolve(args, file)
}

/// Merge the layers and validate. CLI/env values arrive through `args`
/// (clap reads the env vars), the file fills what they leave unset.
pub fn resolve(args: CliArgs, file: FileConfig) -> Result<Config> {
    let defaults = Config::default();

    let host = args.host.or(file.host).unwrap_or(defaults.host);
    if host.trim().is_empty() {
        return Err(anyhow!("HOST cannot be empty"));
    }

    let port = args.port.or(file.port).unwrap_or(defaults.port);
    let port = validate_in_range(port, 1, u16::MAX, "PORT")?;

    let static_dir = args
        .static_dir
        .or(file.static_dir)
        .unwrap_or(defaults.static_dir);
    if static_dir.as_os_str().is_empty() {
        return Err(anyhow!("STATIC_DIR cannot be empty"));
    }

    let whoami_upstream = args
        .whoami_upstream
        .or(file.whoami_upstream)
        .map(|u| u.trim_end_matches('/').to_string());
    if let Some(ref url) = whoami_upstream {
        validate_url(url, "WHOAMI_UPSTREAM")?;
    }

    let upstream_timeout_ms = args
        .upstream_timeout_ms
        .or(file.upstream_timeout_ms)
        .unwrap_or(defaults.upstream_timeout_ms);
    let upstream_timeout_ms =
        validate_in_range(upstream_timeout_ms, 1000, 60000, "UPSTREAM_TIMEOUT_MS")?;

    Ok(Config {
        host,
        port,
        static_dir,
        whoami_upstream,
        upstream_timeout_ms,
    })
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log the effective configuration (upstream URL only, never tokens).
    pub fn log_summary(&self) {
        log::info!("Bind: {}", self.bind_addr());
        log::info!("Static dir: {}", self.static_dir.display());
        match self.whoami_upstream {
            Some(ref url) => log::info!("Whoami upstream: {url}"),
            None => log::warn!("Whoami upstream: none (/auth/whoami answers 503)"),
        }
        log::info!("Upstream timeout: {}ms", self.upstream_timeout_ms);
    }
}
