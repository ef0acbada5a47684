//! List loaded records without generating

use anyhow::Result;

use crate::records::{RecordLoader, StatusKind};
use crate::Bizdir;

/// List loaded data by type
pub fn run(bizdir: &Bizdir, content_type: &str) -> Result<()> {
    let loader = RecordLoader::new(&bizdir.data_path);

    match content_type {
        "record" | "records" => {
            let records = loader.load()?;
            println!("Records ({}):", records.len());
            for record in records {
                let status = match StatusKind::classify(&record.status, &bizdir.config.open_marker)
                {
                    StatusKind::Open => "open",
                    StatusKind::Unknown => "unknown",
                };
                println!("  {} - {} [{}]", record.slug, record.name, status);
            }
        }
        "phone" | "phones" => {
            let records = loader.load()?;
            println!("Phones ({} records):", records.len());
            for record in records {
                if record.phones.is_empty() {
                    println!("  {} - 未提供", record.slug);
                } else {
                    println!("  {} - {}", record.slug, record.phones.join("、"));
                }
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: record, phone", content_type);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;

    #[test]
    fn test_unknown_type_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("businesses.csv"), "h\n").unwrap();
        let config = SiteConfig::default();
        let bizdir = Bizdir {
            data_path: dir.path().join(&config.data_file),
            output_dir: dir.path().join(&config.output_dir),
            base_dir: dir.path().to_path_buf(),
            config,
        };

        assert!(run(&bizdir, "route").is_err());
        assert!(run(&bizdir, "record").is_ok());
        assert!(run(&bizdir, "phones").is_ok());
    }
}
