//! Generate the static directory site

use anyhow::Result;

use crate::generator::Generator;
use crate::records::RecordLoader;
use crate::Bizdir;

/// Load every record and render all pages; returns the page count
pub fn run(bizdir: &Bizdir) -> Result<usize> {
    let start = std::time::Instant::now();

    let loader = RecordLoader::new(&bizdir.data_path);
    let records = loader.load()?;
    tracing::info!("Loaded {} records from {:?}", records.len(), bizdir.data_path);

    let generator = Generator::new(bizdir)?;
    let pages = generator.generate(&records)?;

    tracing::info!(
        "Generated {} pages in {:.2}s",
        pages,
        start.elapsed().as_secs_f64()
    );

    Ok(pages)
}
