use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Animation parameters for a scroll animator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Default animation duration in milliseconds.
    /// Zero or negative means every animation jumps instantly.
    #[serde(default = "default_duration_ms", deserialize_with = "lenient_duration_ms")]
    pub duration_ms: i64,
    /// Margin in pixels kept between a target element and the viewport edge
    #[serde(default = "default_edge_offset", deserialize_with = "lenient_edge_offset")]
    pub edge_offset: i64,
    /// Delay between two animation ticks in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// How long an axis stays busy after its animation settled
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            edge_offset: default_edge_offset(),
            tick_interval_ms: default_tick_interval_ms(),
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

impl ScrollConfig {
    /// Build a config from untrusted textual inputs.
    ///
    /// Absent or non-numeric values fall back to the defaults (999 ms, 9 px).
    pub fn from_raw(duration: Option<&str>, edge_offset: Option<&str>) -> Self {
        Self {
            duration_ms: duration
                .and_then(parse_int_lenient)
                .unwrap_or_else(default_duration_ms),
            edge_offset: edge_offset
                .and_then(parse_int_lenient)
                .unwrap_or_else(default_edge_offset),
            ..Default::default()
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_duration_ms() -> i64 {
    999
}

fn default_edge_offset() -> i64 {
    9
}

fn default_tick_interval_ms() -> u64 {
    9
}

fn default_cooldown_ms() -> u64 {
    99
}

/// Parse the leading integer of a string.
///
/// Accepts leading whitespace, an optional sign and a run of decimal digits;
/// trailing garbage is ignored ("12px" is 12). Returns `None` when no digit
/// is found. Values beyond the `i64` range saturate.
pub fn parse_int_lenient(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let run: Vec<i64> = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if run.is_empty() {
        return None;
    }

    let magnitude = run
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(v) => Some(v),
        Raw::Float(v) if v.is_finite() => Some(v.trunc() as i64),
        Raw::Float(_) | Raw::Other(_) => None,
        Raw::Text(s) => parse_int_lenient(&s),
    })
}

fn lenient_duration_ms<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_int(deserializer)?.unwrap_or_else(default_duration_ms))
}

fn lenient_edge_offset<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_int(deserializer)?.unwrap_or_else(default_edge_offset))
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/smoothscroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("smoothscroll")
            .join("config.toml")
    }
}
