use bhujal_core::error::BhujalError;
use bhujal_core::extraction::pdftotext::PdftotextExtractor;
use bhujal_core::store::JsonFileStore;
use std::path::PathBuf;

pub fn run(
    pdf_files: Vec<PathBuf>,
    store_file: PathBuf,
    config_file: Option<PathBuf>,
    preset: &str,
) -> Result<(), BhujalError> {
    let config = super::resolve_config(config_file, preset)?;
    let mut store = JsonFileStore::open(store_file)?;
    let extractor = PdftotextExtractor::new();

    // Each file replaces the readings written by the previous one.
    for pdf_file in &pdf_files {
        let pdf_bytes = std::fs::read(pdf_file)?;
        let summary = bhujal_core::import_pdf(&pdf_bytes, &extractor, &config, &mut store)?;
        println!(
            "{} entries processed from {}",
            summary.persisted,
            pdf_file.display()
        );
    }

    Ok(())
}
