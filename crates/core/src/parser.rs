use std::ops::Range;

const OPEN: &str = "[[";
const CLOSE: &str = "]]";

/// One parsed inline reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wikilink {
    /// Target phrase, trimmed, with any `#fragment` split off.
    pub target: String,
    /// Display alias after the first `|`, if present and non-empty.
    pub alias: Option<String>,
    /// Heading fragment after `#`, if present; ignored by resolution.
    pub fragment: Option<String>,
    /// Byte range of the whole `[[...]]` token in the scanned text.
    pub span: Range<usize>,
}

/// Scanner over wikilink tokens, yielding matches left to right.
///
/// References are opportunistic syntax: an unterminated `[[` or a blank
/// target produces no match and no error. Re-scanning the same text yields
/// the same sequence.
pub struct WikilinkScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> WikilinkScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for WikilinkScanner<'_> {
    type Item = Wikilink;

    fn next(&mut self) -> Option<Wikilink> {
        while self.pos < self.text.len() {
            let start = self.pos + self.text[self.pos..].find(OPEN)?;
            let inner_start = start + OPEN.len();
            let Some(rel_close) = self.text[inner_start..].find(CLOSE) else {
                // No closing delimiter anywhere ahead: nothing more can match.
                self.pos = self.text.len();
                return None;
            };
            let inner_end = inner_start + rel_close;
            let end = inner_end + CLOSE.len();
            self.pos = end;

            if let Some(link) = parse_inner(&self.text[inner_start..inner_end], start..end) {
                return Some(link);
            }
            // Blank target: skip this token and keep scanning.
        }
        None
    }
}

/// Splits the interior of a token into target, alias and fragment.
fn parse_inner(inner: &str, span: Range<usize>) -> Option<Wikilink> {
    let mut parts = inner.splitn(2, '|');
    let left = parts.next()?.trim();
    let alias = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut left_parts = left.splitn(2, '#');
    let target = left_parts.next()?.trim().to_string();
    let fragment = left_parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if target.is_empty() {
        return None;
    }
    Some(Wikilink {
        target,
        alias,
        fragment,
        span,
    })
}

/// Eagerly collects every wikilink in `text`, in order of appearance.
pub fn extract_wikilinks(text: &str) -> Vec<Wikilink> {
    WikilinkScanner::new(text).collect()
}
