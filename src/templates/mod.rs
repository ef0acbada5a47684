//! Built-in directory theme using the Tera template engine
//!
//! The overview and detail templates are embedded directly in the binary,
//! together with the shared stylesheet asset.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Shared stylesheet asset, written once per run
pub const STYLESHEET: &str = include_str!("directory/style.css");

/// Template renderer with the embedded directory theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all directory templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Autoescaping stays off: context values are escaped when the
        // generator builds them, URLs and CSS classes included
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("overview.html", include_str!("directory/overview.html")),
            ("detail.html", include_str!("directory/detail.html")),
            (
                "partials/head.html",
                include_str!("directory/partials/head.html"),
            ),
            (
                "partials/footer.html",
                include_str!("directory/partials/footer.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context (all fields pre-escaped)

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub language: String,
    pub updated: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordData {
    pub slug: String,
    pub name: String,
    pub rating: String,
    pub category: String,
    pub address: String,
    pub status_label: String,
    pub status_class: String,
    pub map_url: String,
    pub phones: Vec<PhoneData>,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhoneData {
    pub label: String,
    pub href: String,
}
