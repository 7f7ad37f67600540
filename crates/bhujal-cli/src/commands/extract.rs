use bhujal_core::error::BhujalError;
use bhujal_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    config_file: Option<PathBuf>,
    preset: &str,
    output_format: &str,
) -> Result<(), BhujalError> {
    let config = super::resolve_config(config_file, preset)?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let records = bhujal_core::extract_pdf(&pdf_bytes, &extractor, &config)?;

    match output_format {
        "json" => output::json::print(&records)?,
        _ => {
            print!("{}", output::table::format_records(&records));
            eprintln!(
                "Found {} valid {} entries in {}",
                records.len(),
                config.district,
                pdf_file.display()
            );
        }
    }

    Ok(())
}
