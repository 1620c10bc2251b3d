// src/specs/species.rs
//! Scraping *spec* for one species detail page.
//!
//! Name block:
//! - The `td.fooevo` header cell reading exactly "Name" heads a table whose
//!   second row holds every data cell, nested tables included.
//! - Cells alternate label / value. Every cell whose text starts with a known
//!   label feeds the *next* cell into that field. Duplicate text blocks on the
//!   page (e.g. the combined "Other Names" cell) are tolerated: a value cell
//!   that is itself a label is never consumed, and the last assignment wins.
//! - Unknown cells are ignored. A missing field keeps its default.
//!
//! Forms:
//! - "Alternate Forms" / "Gender Differences" headers each own a sub-table of
//!   repeating (name row, image row, spacer row). Only name cells carry a
//!   `<b>` label; labels are collected in document order across all rows.
//!
//! No "Name" block means the page is unusable (`SchemaMiss`).

use scraper::Html;
use tracing::{debug, warn};

use crate::core::html::{
    BOLD, TD, TD_PKMN, TR, child_cells, find_header_cell, has_class, header_block,
    parent_element, spaced_text_of, text_of,
};
use crate::error::{Result, ScrapeError};
use crate::model::{Field, SpeciesBuilder};

pub const NAME_HEADER: &str = "Name";
pub const ALTERNATE_FORMS: &str = "Alternate Forms";
pub const GENDER_DIFFERENCES: &str = "Gender Differences";

/// Label prefix → field it introduces.
const LABELS: &[(&str, Field)] = &[
    ("Paldea:", Field::Regional),
    ("National:", Field::National),
    ("Male ♂:", Field::Male),
    ("Female ♀:", Field::Female),
    ("Japan:", Field::Japanese),
    ("French:", Field::French),
    ("German:", Field::German),
    ("Korean:", Field::Korean),
];

pub fn field_for(cell: &str) -> Option<Field> {
    let cell = cell.trim_start();
    LABELS
        .iter()
        .find(|(prefix, _)| cell.starts_with(prefix))
        .map(|(_, field)| *field)
}

/// Parse a fetched page into a builder with the name block and forms filled in.
pub fn parse_page(html: &str) -> Result<(Html, SpeciesBuilder)> {
    let doc = Html::parse_document(html);
    let builder = read_page(&doc)?;
    Ok((doc, builder))
}

pub fn read_page(doc: &Html) -> Result<SpeciesBuilder> {
    let mut builder = SpeciesBuilder::new();
    read_name_block(doc, &mut builder)?;
    builder.set_forms(
        form_labels(doc, GENDER_DIFFERENCES),
        form_labels(doc, ALTERNATE_FORMS),
    );
    debug!(
        name = builder.name(),
        genders = ?builder.gender_models(),
        forms = ?builder.form_models(),
        "read species page"
    );
    Ok(builder)
}

pub fn read_name_block(doc: &Html, builder: &mut SpeciesBuilder) -> Result<()> {
    let header = find_header_cell(doc, NAME_HEADER)
        .ok_or_else(|| ScrapeError::schema_miss("\"Name\" block"))?;
    let block = header_block(header)
        .ok_or_else(|| ScrapeError::schema_miss("\"Name\" block has no table"))?;
    let data_row = block
        .select(&TR)
        .nth(1)
        .ok_or_else(|| ScrapeError::schema_miss("\"Name\" block has no data row"))?;

    let cells: Vec<String> = data_row.select(&TD).map(text_of).collect();
    let name = cells
        .first()
        .ok_or_else(|| ScrapeError::schema_miss("\"Name\" data row is empty"))?;
    builder.set_name(name.as_str());

    scan_labeled_cells(&cells, builder);
    Ok(())
}

/// Label-then-next-cell scan over the flat cell list.
fn scan_labeled_cells(cells: &[String], builder: &mut SpeciesBuilder) {
    for (i, cell) in cells.iter().enumerate() {
        let Some(field) = field_for(cell) else { continue };
        match cells.get(i + 1) {
            Some(value) if field_for(value).is_none() => builder.assign(field, value),
            Some(_) => {}
            None => warn!(?field, "label is the last cell of the name block"),
        }
    }
}

/// Form labels under the section headed `heading`, or `None` when the page has
/// no such section (or it has no form-name cells).
pub fn form_labels(doc: &Html, heading: &str) -> Option<Vec<String>> {
    let header = find_header_cell(doc, heading)?;
    let section = header_block(header)?;
    let Some(first) = section.select(&TD_PKMN).next() else {
        warn!(heading, "section has no form cells");
        return None;
    };
    let names = parent_element(first).and_then(parent_element)?;

    let mut labels = Vec::new();
    for row in names.select(&TR) {
        for cell in child_cells(row).filter(|c| has_class(*c, "pkmn")) {
            if let Some(b) = cell.select(&BOLD).next() {
                let label = spaced_text_of(b);
                if !label.is_empty() {
                    labels.push(label);
                }
            }
        }
    }
    debug!(heading, ?labels, "form labels");
    Some(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRIGATITO: &str = r#"
    <html><body>
    <table class="dextable">
      <tr>
        <td class="fooevo">Name</td><td class="fooevo">Other Names</td>
        <td class="fooevo">No.</td><td class="fooevo">Gender Ratio</td>
      </tr>
      <tr>
        <td class="fooinfo">Sprigatito</td>
        <td class="fooinfo"><table class="tab">
          <tr><td class="fooinfo">Japan:</td><td class="fooinfo">Nyahoニャオハ</td></tr>
          <tr><td class="fooinfo">French:</td><td class="fooinfo">Poussacha</td></tr>
          <tr><td class="fooinfo">German:</td><td class="fooinfo">Felori</td></tr>
          <tr><td class="fooinfo">Korean:</td><td class="fooinfo">나오하</td></tr>
        </table></td>
        <td class="fooinfo"><table class="tab">
          <tr><td>National:</td><td>#0906</td></tr>
          <tr><td>Paldea:</td><td>#0001</td></tr>
        </table></td>
        <td class="fooinfo"><table class="tab">
          <tr><td>Male ♂:</td><td>87.5%</td></tr>
          <tr><td>Female ♀:</td><td>12.5%</td></tr>
        </table></td>
      </tr>
    </table>
    </body></html>
    "#;

    #[test]
    fn reads_name_block_with_nested_duplicates() {
        let doc = Html::parse_document(SPRIGATITO);
        let b = read_page(&doc).unwrap();
        assert_eq!(b.name(), "Sprigatito");
        assert_eq!(b.national_dex(), 906);
        assert_eq!(b.regional_dex(), 1);
        assert_eq!(b.ratios(), (87.5, 12.5));
        assert_eq!(b.localized(), ["Nyahoニャオハ", "Poussacha", "Felori", "나오하"]);
        assert_eq!(b.gender_models(), ["Uniform"]);
        assert!(b.form_models().is_empty());
    }

    #[test]
    fn footnote_marker_on_ratio() {
        let page = SPRIGATITO.replace("12.5%", "50%*").replace("87.5%", "50%*");
        let (_, b) = parse_page(&page).unwrap();
        assert_eq!(b.ratios(), (50.0, 50.0));
    }

    #[test]
    fn missing_name_block_is_schema_miss() {
        let err = parse_page("<table><tr><td class='fooevo'>Stats</td></tr></table>").unwrap_err();
        assert!(err.is_schema_miss());
    }

    #[test]
    fn unknown_labels_leave_defaults() {
        let page = r#"<table>
            <tr><td class="fooevo">Name</td></tr>
            <tr><td>Wiglett</td><td>Paldea No:</td><td>#0050</td><td>Gender:</td><td>??</td></tr>
        </table>"#;
        let (_, b) = parse_page(page).unwrap();
        assert_eq!(b.name(), "Wiglett");
        assert_eq!(b.regional_dex(), 0);
        assert_eq!(b.ratios(), (0.0, 0.0));
    }

    #[test]
    fn label_scan_last_assignment_wins() {
        let cells: Vec<String> = ["X", "Japan:Nyaho", "Japan:", "Nyaho", "Korean:"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut b = SpeciesBuilder::new();
        scan_labeled_cells(&cells, &mut b);
        assert_eq!(b.localized()[0], "Nyaho");
        assert_eq!(b.localized()[3], "");
    }

    #[test]
    fn field_lookup() {
        assert_eq!(field_for("  National:"), Some(Field::National));
        assert_eq!(field_for("Female ♀:"), Some(Field::Female));
        assert_eq!(field_for("Nationality"), None);
    }

    const FORMS: &str = r#"
    <table class="dextable">
      <tr><td class="fooevo">Name</td></tr>
      <tr><td>Tauros</td><td>National:</td><td>#0128</td></tr>
    </table>
    <table class="dextable">
      <tr><td class="fooevo" colspan="3">Alternate Forms</td></tr>
      <tr><td><table>
        <tr><td class="pkmn"><b>Kantonian Form</b></td><td class="pkmn"><b>Paldean Form<br>Combat Breed</b></td></tr>
        <tr><td class="pkmn"><img src="/p/128.png" alt="Kantonian Form"></td><td class="pkmn"><img src="/p/128-p.png" alt="Paldean Form Combat Breed"></td></tr>
        <tr><td></td></tr>
        <tr><td class="pkmn"><b>Paldean Form<br>Blaze Breed</b></td></tr>
        <tr><td class="pkmn"><img src="/p/128-b.png" alt="Paldean Form Blaze Breed"></td></tr>
        <tr><td></td></tr>
      </table></td></tr>
    </table>
    "#;

    #[test]
    fn alternate_forms_flatten_across_row_groups() {
        let doc = Html::parse_document(FORMS);
        let forms = form_labels(&doc, ALTERNATE_FORMS).unwrap();
        assert_eq!(forms, vec!["Kantonian Form", "Paldean Form Combat Breed", "Paldean Form Blaze Breed"]);
        assert!(form_labels(&doc, GENDER_DIFFERENCES).is_none());

        let b = read_page(&doc).unwrap();
        assert_eq!(b.gender_models(), ["Uniform"]);
        assert_eq!(b.form_models().len(), 3);
    }

    #[test]
    fn gender_differences_replace_uniform() {
        let page = FORMS.replace("Alternate Forms", "Gender Differences")
            .replace("Kantonian Form", "Male")
            .replace("Paldean Form<br>Combat Breed", "Female")
            .replace("<tr><td class=\"pkmn\"><b>Paldean Form<br>Blaze Breed</b></td></tr>", "");
        let (_, b) = parse_page(&page).unwrap();
        assert_eq!(b.gender_models(), ["Male", "Female"]);
        assert!(b.form_models().is_empty());
    }
}
