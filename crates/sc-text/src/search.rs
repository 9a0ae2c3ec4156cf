//! `FIND` and `SEARCH` over `char` positions.

use sc_core::Size;

/// Index of the first window of `haystack` at or after `start` that equals
/// `needle` under `eq`.
fn position_by<F>(haystack: &[char], needle: &[char], start: Size, eq: F) -> Option<Size>
where
    F: Fn(char, char) -> bool,
{
    if start > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(start);
    }
    haystack[start..]
        .windows(needle.len())
        .position(|window| window.iter().zip(needle).all(|(&a, &b)| eq(a, b)))
        .map(|offset| start + offset)
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// `FIND` — case-sensitive position of `needle` in `text`, starting the scan
/// at char offset `start`.
///
/// An empty `needle` matches at `start`. A `start` past the end of `text`
/// never matches.
///
/// ```
/// assert_eq!(sc_text::find("hello world", "world", 0), Some(6));
/// assert_eq!(sc_text::find("hello world", "World", 0), None);
/// ```
pub fn find(text: &str, needle: &str, start: Size) -> Option<Size> {
    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = needle.chars().collect();
    position_by(&haystack, &needle, start, |a, b| a == b)
}

/// `SEARCH` — like [`find`] but ignoring case.
///
/// Case is folded one char at a time, so positions line up with the
/// original text.
///
/// ```
/// assert_eq!(sc_text::search("Hello World", "world", 0), Some(6));
/// ```
pub fn search(text: &str, needle: &str, start: Size) -> Option<Size> {
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = needle.chars().map(fold).collect();
    position_by(&haystack, &needle, start, |a, b| a == b)
}
