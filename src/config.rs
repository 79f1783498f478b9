use clap::Parser;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `HELLO_SERVER__PORT=9090`.
pub const ENV_PREFIX: &str = "HELLO";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Built-in theme name (hpe, base, dark); ignored when the config sets `theme.file`
    #[arg(long, env = "THEME")]
    pub theme: Option<String>,

    /// Page layout (contained, full_bleed)
    #[arg(long, env = "LAYOUT")]
    pub layout: Option<String>,

    /// Log output format (compact, json)
    #[arg(long, env = "LOG_FORMAT")]
    pub log_format: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub page: PageConfig,
    pub theme: ThemeConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub request_timeout_secs: u64,
    /// Optional directory served under `/static`.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

/// Which variant of the shell to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLayout {
    /// Themed root wrapping one container with header, main and footer.
    #[default]
    Contained,
    /// Theme applied full-bleed with the message as the only region.
    FullBleed,
}

impl PageLayout {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contained => "contained",
            Self::FullBleed => "full_bleed",
        }
    }
}

impl fmt::Display for PageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Document title.
    pub title: String,
    /// Brand label in the header.
    pub brand: String,
    /// Footer label.
    pub footer_text: String,
    pub layout: PageLayout,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Hello World".to_string(),
            brand: "Hello World".to_string(),
            footer_text: "Hello World App".to_string(),
            layout: PageLayout::Contained,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Built-in theme name, used when no file is given.
    pub name: String,
    /// YAML theme file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    pub format: LogFormat,
    /// Default `EnvFilter` directives when `RUST_LOG` is unset.
    pub filter: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let defaults = PageConfig::default();
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("page.title", defaults.title)?
            .set_default("page.brand", defaults.brand)?
            .set_default("page.footer_text", defaults.footer_text)?
            .set_default("page.layout", defaults.layout.as_str())?
            .set_default("theme.name", crate::theme::DEFAULT_THEME)?
            .set_default("telemetry.format", "compact")?
            .set_default("telemetry.filter", "info,hello_shell=debug")?;

        // Explicit file is required; ./config.yaml is picked up when present.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (and their env vars) win over everything else.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(theme) = cli.theme {
            builder = builder.set_override("theme.name", theme)?;
        }
        if let Some(layout) = cli.layout {
            builder = builder.set_override("page.layout", layout)?;
        }
        if let Some(format) = cli.log_format {
            builder = builder.set_override("telemetry.format", format)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
