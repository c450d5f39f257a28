use clap::{Parser, Subcommand};
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory holding model.json and categories.json
    #[arg(long, env = "ARTIFACTS_DIR")]
    pub artifacts_dir: Option<String>,

    /// Enable rate limiting
    #[arg(long, env = "RATE_LIMIT_ENABLED")]
    pub rate_limit_enabled: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load artifacts and serve the HTTP API (default)
    Serve,
    /// Fit the vectorizer and write artifacts from a category grouping
    Build {
        /// YAML or JSON grouping file (category -> skills); built-in table when omitted
        #[arg(long)]
        grouping: Option<String>,
        /// Keep the last category for skills listed under several categories
        #[arg(long)]
        allow_duplicates: bool,
    },
    /// Print recommendations for the given skills as JSON
    Recommend {
        /// Number of skills to return
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        top_n: Option<i64>,
        #[arg(required = true)]
        skills: Vec<String>,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub artifacts: ArtifactsConfig,
    pub catalog: CatalogConfig,
    pub recommend: RecommendConfig,
    pub resilience: ResilienceConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArtifactsConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub grouping_file: Option<String>,
    pub reject_duplicates: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendConfig {
    pub default_top_n: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub rate_limit_enabled: bool,
    pub requests_per_second: u32,
    pub burst_size: u32,
    pub timeout_secs: u64,
    pub timeout_disabled: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::from_cli(&cli)
    }

    /// Layers defaults, config file, `SKILLSWAP_` environment and CLI flags,
    /// in increasing precedence.
    pub fn from_cli(cli: &Cli) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.cors_enabled", true)?
            .set_default("artifacts.dir", "artifacts")?
            .set_default("catalog.reject_duplicates", true)?
            .set_default("recommend.default_top_n", 3)?
            .set_default("resilience.rate_limit_enabled", false)?
            .set_default("resilience.requests_per_second", 20)?
            .set_default("resilience.burst_size", 40)?
            .set_default("resilience.timeout_secs", 30)?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("telemetry.log_format", "compact")?;

        // An explicit file must exist; ./config.{yaml,toml,json} is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. SKILLSWAP_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("SKILLSWAP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(dir) = &cli.artifacts_dir {
            builder = builder.set_override("artifacts.dir", dir.as_str())?;
        }
        if let Some(rl) = cli.rate_limit_enabled {
            builder = builder.set_override("resilience.rate_limit_enabled", rl)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
