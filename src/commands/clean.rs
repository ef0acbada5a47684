//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Bizdir;

/// Remove the generated output tree
pub fn run(bizdir: &Bizdir) -> Result<()> {
    if bizdir.output_dir.exists() {
        fs::remove_dir_all(&bizdir.output_dir)?;
        tracing::info!("Deleted: {:?}", bizdir.output_dir);
    }

    Ok(())
}
