use std::collections::BTreeMap;

use crate::extraction::{PageWords, Word};

/// Words whose top edges round to the same tenth of a unit share a line.
const Y_QUANTUM: f64 = 10.0;

/// A reconstructed table row: token texts in left-to-right order.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub page_index: usize,
    /// Quantized top coordinate shared by every word of the line.
    pub y: f64,
    pub tokens: Vec<String>,
}

impl Line {
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Rebuild visual lines from the unordered words of one page.
///
/// Words are grouped by `y0` rounded to one decimal, groups are returned
/// top to bottom and each group is sorted by `x0`. Ties in `x0` keep
/// their input order.
pub fn reconstruct_lines(page: &PageWords) -> Vec<Line> {
    let mut by_y: BTreeMap<i64, Vec<&Word>> = BTreeMap::new();
    for word in &page.words {
        by_y.entry(quantize(word.y0)).or_default().push(word);
    }

    by_y.into_iter()
        .map(|(key, mut words)| {
            words.sort_by(|a, b| a.x0.total_cmp(&b.x0));
            Line {
                page_index: page.page_index,
                y: key as f64 / Y_QUANTUM,
                tokens: words.into_iter().map(|w| w.text.clone()).collect(),
            }
        })
        .collect()
}

// Exact halves round away from zero, not half-to-even.
fn quantize(y: f64) -> i64 {
    (y * Y_QUANTUM).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(words: Vec<Word>) -> PageWords {
        PageWords {
            page_index: 0,
            words,
        }
    }

    #[test]
    fn test_jittered_words_share_a_line() {
        let lines = reconstruct_lines(&page(vec![
            Word::new(120.0, 300.04, "Village1-PZ"),
            Word::new(20.0, 299.96, "1"),
            Word::new(60.0, 300.01, "KARNAL"),
        ]));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].tokens, vec!["1", "KARNAL", "Village1-PZ"]);
        assert_eq!(lines[0].y, 300.0);
    }

    #[test]
    fn test_lines_ordered_top_to_bottom() {
        let lines = reconstruct_lines(&page(vec![
            Word::new(10.0, 500.0, "bottom"),
            Word::new(10.0, 100.0, "top"),
            Word::new(10.0, 300.0, "middle"),
        ]));
        let texts: Vec<String> = lines.iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["top", "middle", "bottom"]);
    }

    #[test]
    fn test_every_word_lands_in_one_line() {
        let words = vec![
            Word::new(30.0, 10.0, "c"),
            Word::new(10.0, 10.0, "a"),
            Word::new(20.0, 10.02, "b"),
            Word::new(10.0, 10.2, "d"),
            Word::new(5.0, 50.0, "e"),
        ];
        let lines = reconstruct_lines(&page(words.clone()));
        let total: usize = lines.iter().map(|l| l.tokens.len()).sum();
        assert_eq!(total, words.len());
        assert_eq!(lines.len(), 3);
        assert!(lines.windows(2).all(|w| w[0].y <= w[1].y));
        assert_eq!(lines[0].tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_equal_x_keeps_input_order() {
        let lines = reconstruct_lines(&page(vec![
            Word::new(10.0, 10.0, "first"),
            Word::new(10.0, 10.0, "second"),
        ]));
        assert_eq!(lines[0].tokens, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_page_has_no_lines() {
        assert!(reconstruct_lines(&page(vec![])).is_empty());
    }

    #[test]
    fn test_exact_half_rounds_away_from_zero() {
        assert_eq!(quantize(2.25), 23);
        assert_eq!(quantize(2.35), 24);
        assert_eq!(quantize(2.249), 22);
    }
}
