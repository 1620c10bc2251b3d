// src/core/html.rs
//! Small DOM helpers over `scraper` for the site's table-heavy markup.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

macro_rules! selector {
    ($name:ident, $css:literal) => {
        pub static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).expect(concat!("valid selector: ", $css)));
    };
}

selector!(TR, "tr");
selector!(TD, "td");
selector!(IMG, "img");
selector!(OPTION, "option");
selector!(BOLD, "b");
selector!(TD_FOOEVO, "td.fooevo");
selector!(TD_PKMN, "td.pkmn");

/// Concatenated descendant text, whitespace-normalized.
/// Text split by inline tags is fused (`A<br>B` → `"AB"`).
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Descendant text nodes joined with a space (`A<br>B` → `"A B"`).
pub fn spaced_text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<Vec<_>>().join(" "))
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// First `td.fooevo` header cell whose text is exactly `label`.
pub fn find_header_cell<'a>(doc: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    doc.select(&TD_FOOEVO).find(|td| text_of(*td) == label)
}

/// The row container (tbody or table) that owns a header cell's row.
pub fn header_block<'a>(cell: ElementRef<'a>) -> Option<ElementRef<'a>> {
    parent_element(cell).and_then(parent_element)
}

/// Direct `<td>` children of a row.
pub fn child_cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name() == "td")
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}
