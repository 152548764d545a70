//! Page range arguments (`"1-3,5,7-"`)
//!
//! A range list is a comma separated sequence of single pages (`5`), closed
//! ranges (`2-4`), open ends (`7-`, `-3`) or `-` for the whole document.
//! Bounds are 1-based and clamped to the document independently.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid page range '{0}': only digits, ',' and '-' are allowed")]
    InvalidCharacters(String),
}

/// Inclusive page range, both ends 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Pages in ascending order; a reversed range yields nothing
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        self.start..=self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// True when `s` looks like a range list rather than a path
pub fn is_range(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '-')
}

/// Parse a single bound; a missing bound is `default`.
///
/// Callers have already checked for digits only, so the sole parse failure
/// is overflow, which saturates and later clamps to the last page.
fn parse_bound(s: &str, default: usize) -> usize {
    if s.is_empty() {
        default
    } else {
        s.parse().unwrap_or(usize::MAX)
    }
}

/// Parse a range list against a document of `page_count` pages.
///
/// Empty tokens (`"1,,3"`) are skipped. With `page_count == 0` every range is
/// empty.
pub fn parse_ranges(spec: &str, page_count: usize) -> Result<Vec<PageRange>, RangeError> {
    if !is_range(spec) {
        return Err(RangeError::InvalidCharacters(spec.to_string()));
    }

    let clamp = |n: usize| n.clamp(1, page_count.max(1));
    let mut ranges = Vec::new();

    for token in spec.split(',') {
        if token.is_empty() {
            continue;
        }
        if page_count == 0 {
            ranges.push(PageRange::new(1, 0));
            continue;
        }

        let range = match token.split_once('-') {
            Some((lo, hi)) => {
                let start = parse_bound(lo, 1);
                let end = parse_bound(hi.split('-').next().unwrap_or(""), page_count);
                PageRange::new(clamp(start), clamp(end))
            }
            None => {
                let page = clamp(parse_bound(token, 1));
                PageRange::new(page, page)
            }
        };
        ranges.push(range);
    }

    Ok(ranges)
}

/// First page a range list starts at, used to pick the initial interactive page
pub fn first_page(spec: &str) -> Option<usize> {
    let token = spec.split(',').find(|t| !t.is_empty())?;
    let lo = token.split('-').next().unwrap_or("");
    Some(parse_bound(lo, 1).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_end_runs_to_last_page() {
        assert_eq!(parse_ranges("1-", 10).unwrap(), vec![PageRange::new(1, 10)]);
    }

    #[test]
    fn test_bare_dash_is_whole_document() {
        assert_eq!(parse_ranges("-", 10).unwrap(), vec![PageRange::new(1, 10)]);
    }

    #[test]
    fn test_open_start() {
        assert_eq!(parse_ranges("-4", 10).unwrap(), vec![PageRange::new(1, 4)]);
    }

    #[test]
    fn test_single_page() {
        assert_eq!(parse_ranges("3-3", 10).unwrap(), vec![PageRange::new(3, 3)]);
        assert_eq!(parse_ranges("7", 10).unwrap(), vec![PageRange::new(7, 7)]);
    }

    #[test]
    fn test_bounds_clamp_independently() {
        assert_eq!(
            parse_ranges("0-50", 10).unwrap(),
            vec![PageRange::new(1, 10)]
        );
        assert_eq!(parse_ranges("99", 10).unwrap(), vec![PageRange::new(10, 10)]);
    }

    #[test]
    fn test_oversized_numbers_clamp_to_last_page() {
        assert_eq!(
            parse_ranges("99999999999999999999", 10).unwrap(),
            vec![PageRange::new(10, 10)]
        );
        assert_eq!(
            parse_ranges("3-99999999999999999999", 10).unwrap(),
            vec![PageRange::new(3, 10)]
        );
    }

    #[test]
    fn test_multiple_ranges_and_empty_tokens() {
        assert_eq!(
            parse_ranges("1-2,,5,8-", 10).unwrap(),
            vec![
                PageRange::new(1, 2),
                PageRange::new(5, 5),
                PageRange::new(8, 10)
            ]
        );
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let ranges = parse_ranges("5-2", 10).unwrap();
        assert!(ranges[0].is_empty());
        assert_eq!(ranges[0].pages().count(), 0);
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert_eq!(
            parse_ranges("1-a", 10),
            Err(RangeError::InvalidCharacters("1-a".to_string()))
        );
        assert!(!is_range("doc.pdf"));
        assert!(!is_range(""));
        assert!(is_range("1,3-"));
    }

    #[test]
    fn test_empty_document_gives_empty_ranges() {
        let ranges = parse_ranges("1-", 0).unwrap();
        assert!(ranges.iter().all(PageRange::is_empty));
    }

    #[test]
    fn test_first_page() {
        assert_eq!(first_page("4-6,9"), Some(4));
        assert_eq!(first_page("-3"), Some(1));
        assert_eq!(first_page(",,"), None);
    }
}
