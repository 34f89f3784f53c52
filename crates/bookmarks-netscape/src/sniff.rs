//! Format sniffing
//!
//! Presence checks only. A document that passes can still produce a useless
//! tree if its lists are badly nested.

fn find_from(haystack: &str, needle: &str, start: usize) -> Option<usize> {
    haystack.get(start..)?.find(needle).map(|i| start + i)
}

/// Whether `html` looks enough like a Netscape bookmark file to attempt a parse.
///
/// The first non-whitespace character must open a tag, and the document must
/// contain `<dl`, `</dl`, `<dt` and an `<a ... href=` anchor, all matched
/// case-insensitively.
pub fn can_parse(html: &str) -> bool {
    let first = html
        .chars()
        .find(|c| !c.is_whitespace() && *c != '\u{feff}');
    if first != Some('<') {
        return false;
    }

    let lower = html.to_ascii_lowercase();
    lower.contains("<dl") && lower.contains("</dl") && lower.contains("<dt") && has_href_anchor(&lower)
}

/// `<a` followed, within the same tag, by `href` and an `=` (whitespace allowed)
fn has_href_anchor(lower: &str) -> bool {
    let mut pos = 0usize;
    while let Some(start) = find_from(lower, "<a", pos) {
        let body_start = start + 2;
        let body_end = lower[body_start..]
            .find(['<', '>'])
            .map(|i| body_start + i)
            .unwrap_or(lower.len());
        let body = &lower[body_start..body_end];

        let mut from = 0usize;
        while let Some(idx) = find_from(body, "href", from) {
            let rest = body[idx + 4..].trim_start();
            if rest.starts_with('=') {
                return true;
            }
            from = idx + 4;
        }

        pos = body_start;
    }
    false
}
