//! Normalized business listing record

use serde::Serialize;

/// One business listing, built once from a CSV row and never mutated
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Unique, URL- and filesystem-safe key derived from the name
    pub slug: String,
    pub name: String,
    pub rating: String,
    pub category: String,
    pub address: String,
    pub status: String,
    pub map_url: String,
    /// Distinct phone numbers in first-seen priority order
    pub phones: Vec<String>,
    pub image_url: String,
}

/// Presentational classification of the scraped status field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Open,
    Unknown,
}

impl StatusKind {
    /// Classify a status string by substring match against the open marker
    pub fn classify(status: &str, open_marker: &str) -> Self {
        if !open_marker.is_empty() && status.contains(open_marker) {
            StatusKind::Open
        } else {
            StatusKind::Unknown
        }
    }

    /// CSS class used by the card and detail templates
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Open => "status-open",
            StatusKind::Unknown => "status-unknown",
        }
    }
}
