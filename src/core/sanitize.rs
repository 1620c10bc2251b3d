// src/core/sanitize.rs

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Label with every whitespace character removed.
/// The site sometimes fuses words across a `<br>`, so labels are compared in this form.
pub fn compact_key(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whitespace-insensitive label equality.
pub fn same_label(a: &str, b: &str) -> bool {
    let mut ai = a.chars().filter(|c| !c.is_whitespace());
    let mut bi = b.chars().filter(|c| !c.is_whitespace());
    loop {
        match (ai.next(), bi.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y => continue,
            _ => return false,
        }
    }
}

/// Remove the given marker characters and surrounding whitespace: `"#0025"` → `"0025"`.
pub fn strip_markers(s: &str, markers: &[char]) -> String {
    s.chars().filter(|c| !markers.contains(c)).collect::<String>().trim().to_string()
}

/// Zero-pad the leading dex number of a sprite filename to at least 3 digits.
///
/// The number runs up to the first `-` (form suffix) or, without one, up to the
/// extension: `"91.png"` → `"091.png"`, `"25-f.png"` → `"025-f.png"`.
/// Names whose head is not purely numeric are returned unchanged.
pub fn pad_dex_filename(name: &str) -> String {
    let cut = name
        .find('-')
        .or_else(|| name.find('.'))
        .unwrap_or(name.len());
    let (head, rest) = name.split_at(cut);
    if head.is_empty() || head.len() >= 3 || !head.bytes().all(|b| b.is_ascii_digit()) {
        return name.to_string();
    }
    format!("{head:0>3}{rest}")
}

/// Last path segment of a URL or relative `src`, without query or fragment.
pub fn last_path_segment(src: &str) -> &str {
    let end = src.find(['?', '#']).unwrap_or(src.len());
    let path = &src[..end];
    path.rsplit('/').next().unwrap_or(path)
}
