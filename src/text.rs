//! Small text helpers shared by the scraper and the enricher.

/// Decodes HTML character references: the common named set plus numeric
/// `&#NNN;` and `&#xHH;` forms. Unknown or malformed references are kept
/// verbatim; upstream markup is not trusted to be well-formed.
pub(crate) fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match decode_reference(rest) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Tries to decode one reference at the start of `text` (which begins with
/// `&`). Returns the decoded string and the byte length consumed.
fn decode_reference(text: &str) -> Option<(String, usize)> {
    let end = text[1..].find(';').filter(|&i| i <= 10)? + 1;
    let name = &text[1..end];
    let decoded = match name {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        "apos" => "'".to_string(),
        "nbsp" => " ".to_string(),
        "laquo" => "«".to_string(),
        "raquo" => "»".to_string(),
        "ndash" => "–".to_string(),
        "mdash" => "—".to_string(),
        "hellip" => "…".to_string(),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)?.to_string()
        }
    };
    Some((decoded, end + 1))
}

/// Collapses runs of whitespace to single spaces and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
