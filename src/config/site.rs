//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub language: String,

    // Directory
    pub data_file: String,
    pub output_dir: String,

    // Rendering
    /// Substring of the scraped status field that marks a listing as open
    pub open_marker: String,
    /// Data vintage shown in page footers; left empty, the footer omits it
    pub updated: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "水電行名錄".to_string(),
            subtitle: "每一家店家都有專屬的介紹頁，點擊卡片即可進入。".to_string(),
            description: "資料來源：Google 地圖".to_string(),
            language: "zh-Hant".to_string(),

            data_file: "businesses.csv".to_string(),
            output_dir: "public".to_string(),

            open_marker: "營業中".to_string(),
            updated: String::new(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.data_file, "businesses.csv");
        assert_eq!(config.output_dir, "public");
        assert_eq!(config.open_marker, "營業中");
        assert!(config.updated.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: 三民區水電行
data_file: data/export.csv
output_dir: docs
updated: "2025-12-11"
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "三民區水電行");
        assert_eq!(config.data_file, "data/export.csv");
        assert_eq!(config.output_dir, "docs");
        assert_eq!(config.updated, "2025-12-11");
        // Unset fields keep their defaults
        assert_eq!(config.open_marker, "營業中");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: Test Directory\n").unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "Test Directory");
    }
}
