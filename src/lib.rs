//! koyo-site: a minimal static site generator
//!
//! Reads Markdown files with YAML front-matter from a flat content directory,
//! renders each post through a Tera template and builds an index page that
//! lists every post newest first.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Configuration file expected at the project root
pub const CONFIG_FILE: &str = "koyo.config.yaml";

/// The main Koyo application
#[derive(Debug, Clone)]
pub struct Koyo {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content (markdown) directory
    pub content_dir: PathBuf,
    /// Template directory
    pub templates_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
}

impl Koyo {
    /// Load a project from a directory. The config file must exist.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::load(base_dir.join(CONFIG_FILE))?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Build a project from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.paths.content);
        let templates_dir = base_dir.join(&config.paths.templates);
        let output_dir = base_dir.join(&config.paths.output);

        Self {
            config,
            base_dir,
            content_dir,
            templates_dir,
            output_dir,
        }
    }

    /// Build the static site
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Print the post listing
    pub fn list(&self) -> Result<()> {
        commands::list::run(self)
    }
}
