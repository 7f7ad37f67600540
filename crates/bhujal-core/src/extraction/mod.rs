pub mod lines;
pub mod pdftotext;

use serde::{Deserialize, Serialize};

use crate::error::BhujalError;

/// A positioned text token. Coordinates use a top-left origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub text: String,
}

impl Word {
    pub fn new(x0: f64, y0: f64, text: impl Into<String>) -> Self {
        Word {
            x0,
            y0,
            x1: x0,
            y1: y0,
            text: text.into(),
        }
    }
}

/// Words found on a single page, in no particular order.
#[derive(Debug, Clone, Default)]
pub struct PageWords {
    /// 0-indexed page number within the document.
    pub page_index: usize,
    pub words: Vec<Word>,
}

/// Inclusive, 0-indexed page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Self {
        PageRange { start, end }
    }

    pub fn contains(&self, page_index: usize) -> bool {
        (self.start..=self.end).contains(&page_index)
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for PDF word extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract positioned words for every page of `range` present in the document.
    ///
    /// Pages past the end of the document are left out; a page without text
    /// comes back with an empty word list.
    fn extract_words(&self, pdf_bytes: &[u8], range: PageRange)
        -> Result<Vec<PageWords>, BhujalError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
