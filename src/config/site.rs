//! Site configuration (koyo.config.yaml)

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub paths: PathsConfig,
    pub server: ServerConfig,
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }
}

/// Site-wide defaults for the index page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: String,
    pub author: String,
    pub bio: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "My Koyo Site".to_string(),
            author: "Your Name".to_string(),
            bio: String::new(),
        }
    }
}

/// Project directories, relative to the project root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub content: String,
    pub templates: String,
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            templates: "templates".to_string(),
            output: "public".to_string(),
        }
    }
}

/// Preview server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Either `8080` or `"8080"`; an empty string means the default
    #[serde(deserialize_with = "port_number")]
    pub port: u16,
}

const DEFAULT_PORT: u16 = 8080;

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Accept a port written as a number or as a quoted string
fn port_number<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct PortNumber;

    impl<'de> Visitor<'de> for PortNumber {
        type Value = u16;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a port number or a string holding one")
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            u16::try_from(value)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            u16::try_from(value)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            let value = value.trim();
            if value.is_empty() {
                return Ok(DEFAULT_PORT);
            }
            value
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(PortNumber)
}
