pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod store;

use config::ExtractionConfig;
use error::BhujalError;
use extraction::PdfExtractor;
use model::ExtractedRecord;
use serde::Serialize;
use store::{replace_readings, GroundwaterStore};

/// Outcome of one import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub extracted: usize,
    pub persisted: usize,
}

/// Extract depth records from a PDF report without touching any store.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    config: &ExtractionConfig,
) -> Result<Vec<ExtractedRecord>, BhujalError> {
    tracing::info!(
        backend = extractor.backend_name(),
        first_page = config.pages.start,
        last_page = config.pages.end,
        "reading report pages"
    );
    let pages = extractor.extract_words(pdf_bytes, config.pages)?;
    Ok(parsing::extract_records(&pages, config))
}

/// Main API entry point: extract a report and replace the stored readings
/// of the configured district/parameter with the result.
///
/// Nothing is written if the document cannot be read. A store failure rolls
/// back the whole replacement.
pub fn import_pdf<S: GroundwaterStore + ?Sized>(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    config: &ExtractionConfig,
    store: &mut S,
) -> Result<ImportSummary, BhujalError> {
    let records = extract_pdf(pdf_bytes, extractor, config)?;
    let persisted = replace_readings(store, config, &records)?;

    tracing::info!(
        district = %config.district,
        parameter = %config.parameter,
        extracted = records.len(),
        persisted,
        "import finished"
    );

    Ok(ImportSummary {
        extracted: records.len(),
        persisted,
    })
}
