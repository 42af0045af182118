use serde::{Deserialize, Serialize};

/// Output encoding of log lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human-readable.
    Pretty,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognized is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info,tablebook_store=debug`.
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl LogConfig {
    pub const FILTER_VAR: &'static str = "TABLEBOOK_LOG";
    pub const FORMAT_VAR: &'static str = "TABLEBOOK_LOG_FORMAT";

    /// `TABLEBOOK_LOG`, then `RUST_LOG`, then `info`; `TABLEBOOK_LOG_FORMAT` or json.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(Self::FILTER_VAR)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());
        let format = lookup(Self::FORMAT_VAR)
            .and_then(|f| LogFormat::parse(&f))
            .unwrap_or_default();

        Self { filter, format }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}
