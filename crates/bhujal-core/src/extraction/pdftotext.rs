use crate::error::BhujalError;
use crate::extraction::{PageRange, PageWords, PdfExtractor, Word};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -bbox` to get one box per word, limited to the
/// requested page window.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_words(
        &self,
        pdf_bytes: &[u8],
        range: PageRange,
    ) -> Result<Vec<PageWords>, BhujalError> {
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| BhujalError::Document(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| BhujalError::Document(e.to_string()))?;

        // pdftotext numbers pages from 1.
        let output = Command::new("pdftotext")
            .arg("-bbox")
            .arg("-f")
            .arg((range.start + 1).to_string())
            .arg("-l")
            .arg((range.end + 1).to_string())
            .arg(tmpfile.path())
            .arg("-")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    BhujalError::PdftotextNotFound
                } else {
                    BhujalError::Document(format!("pdftotext -bbox failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            // The whole window lies past the last page.
            if stderr.contains("Wrong page range") {
                tracing::debug!(%stderr, "page range outside document");
                return Ok(Vec::new());
            }
            return Err(BhujalError::PdftotextFailed { code, stderr });
        }

        let xml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_xml(&xml, range.start)?;
        tracing::debug!(
            pages = pages.len(),
            words = pages.iter().map(|p| p.words.len()).sum::<usize>(),
            "pdftotext extracted word boxes"
        );
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse `pdftotext -bbox` XHTML into per-page word lists.
///
/// `<page>` elements carry no number, so they are counted from
/// `first_page_index`.
fn parse_bbox_xml(xml: &str, first_page_index: usize) -> Result<Vec<PageWords>, BhujalError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut pages: Vec<PageWords> = Vec::new();
    let mut current_word: Option<Word> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"page" => pages.push(PageWords {
                    page_index: first_page_index + pages.len(),
                    words: Vec::new(),
                }),
                b"word" => current_word = parse_word_box(&e),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"page" => pages.push(PageWords {
                page_index: first_page_index + pages.len(),
                words: Vec::new(),
            }),
            Ok(Event::Text(t)) => {
                if let Some(word) = current_word.as_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| BhujalError::Document(format!("bad word text: {e}")))?;
                    word.text.push_str(&text);
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"word" => {
                if let (Some(word), Some(page)) = (current_word.take(), pages.last_mut()) {
                    let text = word.text.trim();
                    if !text.is_empty() {
                        page.words.push(Word {
                            text: text.to_string(),
                            ..word
                        });
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(BhujalError::Document(format!(
                    "malformed pdftotext output at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
    }

    Ok(pages)
}

fn parse_word_box(tag: &BytesStart<'_>) -> Option<Word> {
    Some(Word {
        x0: parse_attr_f64(tag, b"xMin")?,
        y0: parse_attr_f64(tag, b"yMin")?,
        x1: parse_attr_f64(tag, b"xMax")?,
        y1: parse_attr_f64(tag, b"yMax")?,
        text: String::new(),
    })
}

fn parse_attr_f64(tag: &BytesStart<'_>, name: &[u8]) -> Option<f64> {
    let attr = tag
        .attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)?;
    attr.unescape_value().ok()?.trim().parse().ok()
}
