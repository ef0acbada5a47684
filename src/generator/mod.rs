//! Generator module - renders the overview page, detail pages and assets

use anyhow::{Context as _, Result};
use std::fs;
use tera::Context;

use crate::helpers::{html_escape, tel_href};
use crate::records::{Record, StatusKind};
use crate::templates::{PhoneData, RecordData, SiteData, TemplateRenderer, STYLESHEET};
use crate::Bizdir;

/// Status label shown when the scraped status field is empty
const STATUS_UNKNOWN_LABEL: &str = "營業狀態未知";

/// Static site generator for the loaded record set
pub struct Generator {
    bizdir: Bizdir,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(bizdir: &Bizdir) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            bizdir: bizdir.clone(),
            renderer,
        })
    }

    /// Generate the entire site; returns the number of generated pages.
    ///
    /// Slugs are already final by the time records arrive here, so detail
    /// pages and the overview can be written in any order.
    pub fn generate(&self, records: &[Record]) -> Result<usize> {
        fs::create_dir_all(&self.bizdir.output_dir).with_context(|| {
            format!("failed to create output dir {:?}", self.bizdir.output_dir)
        })?;

        self.write_stylesheet()?;

        let site_data = self.build_site_data(records);
        let record_data: Vec<RecordData> =
            records.iter().map(|r| self.build_record_data(r)).collect();

        self.generate_overview(&site_data, &record_data)?;

        for record in &record_data {
            self.generate_detail(&site_data, record)?;
        }

        self.generate_data_export(records)?;

        Ok(1 + record_data.len())
    }

    /// Write the shared stylesheet, skipping the write when unchanged
    fn write_stylesheet(&self) -> Result<()> {
        let output_path = self.bizdir.output_dir.join("style.css");

        if let Ok(existing) = fs::read_to_string(&output_path) {
            if existing == STYLESHEET {
                tracing::debug!("Stylesheet unchanged, skipping");
                return Ok(());
            }
        }

        fs::write(&output_path, STYLESHEET)
            .with_context(|| format!("failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Build site-wide context data
    fn build_site_data(&self, records: &[Record]) -> SiteData {
        let config = &self.bizdir.config;
        SiteData {
            title: html_escape(&config.title),
            subtitle: html_escape(&config.subtitle),
            description: html_escape(&config.description),
            language: html_escape(&config.language),
            updated: html_escape(&config.updated),
            count: records.len(),
        }
    }

    /// Build per-record context data with every field escaped
    fn build_record_data(&self, record: &Record) -> RecordData {
        let status = StatusKind::classify(&record.status, &self.bizdir.config.open_marker);
        let status_label = if record.status.is_empty() {
            STATUS_UNKNOWN_LABEL.to_string()
        } else {
            html_escape(&record.status)
        };
        let rating = if record.rating.is_empty() {
            "N/A".to_string()
        } else {
            html_escape(&record.rating)
        };
        let phones = record
            .phones
            .iter()
            .map(|p| PhoneData {
                label: html_escape(p),
                href: html_escape(&tel_href(p)),
            })
            .collect();

        RecordData {
            slug: record.slug.clone(),
            name: html_escape(&record.name),
            rating,
            category: html_escape(&record.category),
            address: html_escape(&record.address),
            status_label,
            status_class: status.css_class().to_string(),
            map_url: html_escape(&record.map_url),
            phones,
            image_url: html_escape(&record.image_url),
        }
    }

    /// Generate the overview page listing every record as a card
    fn generate_overview(&self, site_data: &SiteData, records: &[RecordData]) -> Result<()> {
        let mut context = Context::new();
        context.insert("site", site_data);
        context.insert("records", records);
        context.insert("page_title", &site_data.title);
        context.insert("css_path", "style.css");

        let html = self.renderer.render("overview.html", &context)?;

        let output_path = self.bizdir.output_dir.join("index.html");
        fs::write(&output_path, html)
            .with_context(|| format!("failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Generate one detail page under the record's slug
    fn generate_detail(&self, site_data: &SiteData, record: &RecordData) -> Result<()> {
        let mut context = Context::new();
        context.insert("site", site_data);
        context.insert("record", record);
        context.insert("page_title", &format!("{} | {}", record.name, site_data.title));
        context.insert("css_path", "../style.css");

        let html = self.renderer.render("detail.html", &context)?;

        let output_path = self.bizdir.output_dir.join(&record.slug).join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("failed to write {:?}", output_path))?;
        tracing::debug!("Generated detail: {:?}", output_path);
        Ok(())
    }

    /// Write the raw record set as JSON alongside the pages
    fn generate_data_export(&self, records: &[Record]) -> Result<()> {
        let data_dir = self.bizdir.output_dir.join("data");
        fs::create_dir_all(&data_dir)?;

        let output_path = data_dir.join("records.json");
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&output_path, json)
            .with_context(|| format!("failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }
}
