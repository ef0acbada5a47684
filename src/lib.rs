//! bizdir-rs: a static directory-site generator for scraped business listings
//!
//! This crate turns a CSV export of business listings (as produced by a
//! Google Maps scraper) into a static site: one overview page with a card
//! per listing, one detail page per listing, and a shared stylesheet.

pub mod commands;
pub mod config;
pub mod generator;
pub mod helpers;
pub mod records;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main Bizdir application
#[derive(Clone)]
pub struct Bizdir {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Path to the CSV export
    pub data_path: std::path::PathBuf,
    /// Output directory
    pub output_dir: std::path::PathBuf,
}

impl Bizdir {
    /// Create a new Bizdir instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let data_path = base_dir.join(&config.data_file);
        let output_dir = base_dir.join(&config.output_dir);

        Ok(Self {
            config,
            base_dir,
            data_path,
            output_dir,
        })
    }

    /// Generate the static site; returns the number of generated pages
    pub fn generate(&self) -> Result<usize> {
        commands::generate::run(self)
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
