// src/pc_box.rs
//! In-game PC box placement for every model in dataset order.
//!
//! Boxes hold 30 slots in 5 rows of 6. `count` is the model's running index
//! across the whole dataset; the user's box offset shifts the first box.

use std::ops::RangeInclusive;

use tracing::warn;

use crate::config::consts::{BOX_COLS, BOX_SLOTS};
use crate::model::SpeciesRecord;
use crate::store::Dataset;

/// 1-based box/row/position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxSlot {
    pub box_no: u32,
    pub row: u32,
    pub pos: u32,
}

pub fn slot_for(count: usize, offset: u32) -> BoxSlot {
    let in_box = count % BOX_SLOTS;
    BoxSlot {
        box_no: (count / BOX_SLOTS) as u32 + offset,
        row: (in_box / BOX_COLS) as u32 + 1,
        pos: (in_box % BOX_COLS) as u32 + 1,
    }
}

/// One model in the living dex and where it sits.
#[derive(Clone, Debug, PartialEq)]
pub struct DexSlot {
    /// Index into `Dataset::records()`.
    pub record: usize,
    pub name: String,
    pub form_key: String,
    pub image: String,
    pub caught: bool,
    pub count: usize,
    pub slot: BoxSlot,
}

impl DexSlot {
    /// "Box 01, Row 02, Position 03"
    pub fn location_text(&self) -> String {
        format!(
            "Box {:02}, Row {:02}, Position {:02}",
            self.slot.box_no, self.slot.row, self.slot.pos
        )
    }

    /// "{pdex} / {ndex} - {name} - {form}"
    pub fn label(&self, record: &SpeciesRecord) -> String {
        format!(
            "{} / {} - {} - {}",
            record.regional_dex,
            record.national_dex,
            record.name,
            self.form_key.replace('|', " ")
        )
    }

    pub fn form_text(&self) -> String {
        self.form_key.replace('|', " ")
    }
}

pub fn layout(dex: &Dataset, offset: u32) -> Vec<DexSlot> {
    let mut out = Vec::new();
    for (ri, record) in dex.records().iter().enumerate() {
        for model in &record.unique_model_images {
            let count = out.len();
            out.push(DexSlot {
                record: ri,
                name: record.name.clone(),
                form_key: model.form.clone(),
                image: model.image.clone(),
                caught: record.is_caught(&model.form),
                count,
                slot: slot_for(count, offset),
            });
        }
    }
    out
}

/// Recompute positions after the box offset changed.
pub fn relayout(slots: &mut [DexSlot], offset: u32) {
    for s in slots {
        s.slot = slot_for(s.count, offset);
    }
}

/// (caught, total)
pub fn progress(slots: &[DexSlot]) -> (usize, usize) {
    (slots.iter().filter(|s| s.caught).count(), slots.len())
}

/// Box numbers in use, or `None` for an empty dex.
pub fn box_range(slots: &[DexSlot]) -> Option<RangeInclusive<u32>> {
    let first = slots.iter().map(|s| s.slot.box_no).min()?;
    let last = slots.iter().map(|s| s.slot.box_no).max()?;
    Some(first..=last)
}

/// The slot at an exact position. Two models on one position render as empty.
pub fn find(slots: &[DexSlot], box_no: u32, row: u32, pos: u32) -> Option<&DexSlot> {
    let want = BoxSlot { box_no, row, pos };
    let mut hits = slots.iter().filter(|s| s.slot == want);
    let first = hits.next()?;
    if hits.next().is_some() {
        warn!(box_no, row, pos, "Found more than 1 match for this position");
        return None;
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormImage;

    fn record(name: &str, ndex: u32, models: &[&str]) -> SpeciesRecord {
        SpeciesRecord {
            name: s!(name),
            regional_dex: ndex,
            national_dex: ndex,
            male: 50.0,
            female: 50.0,
            japanese: s!(),
            french: s!(),
            german: s!(),
            korean: s!(),
            complete: false,
            gender_models: models.iter().map(|m| m.to_string()).collect(),
            form_models: Vec::new(),
            unique_model_images: models
                .iter()
                .map(|m| FormImage::new(*m, &format!("{ndex}.png")))
                .collect(),
            caught: Vec::new(),
        }
    }

    #[test]
    fn slot_arithmetic() {
        assert_eq!(slot_for(0, 1), BoxSlot { box_no: 1, row: 1, pos: 1 });
        assert_eq!(slot_for(5, 1), BoxSlot { box_no: 1, row: 1, pos: 6 });
        assert_eq!(slot_for(6, 1), BoxSlot { box_no: 1, row: 2, pos: 1 });
        assert_eq!(slot_for(29, 1), BoxSlot { box_no: 1, row: 5, pos: 6 });
        assert_eq!(slot_for(30, 1), BoxSlot { box_no: 2, row: 1, pos: 1 });
        assert_eq!(slot_for(31, 3), BoxSlot { box_no: 4, row: 1, pos: 2 });
    }

    #[test]
    fn layout_flattens_in_order() {
        let mut pika = record("Pikachu", 25, &["Male", "Female"]);
        pika.set_caught("Female", true);
        let dex = Dataset::new(vec![record("Sprigatito", 906, &["Uniform"]), pika]);
        let slots = layout(&dex, 1);

        assert_eq!(slots.len(), 3);
        assert_eq!(slots[2].form_key, "Female");
        assert_eq!(slots[2].record, 1);
        assert!(slots[2].caught && !slots[1].caught);
        assert_eq!(slots[2].location_text(), "Box 01, Row 01, Position 03");
        assert_eq!(slots[1].label(&dex.records()[1]), "25 / 25 - Pikachu - Male");
        assert_eq!(progress(&slots), (1, 3));
    }

    #[test]
    fn offset_and_range() {
        let records: Vec<_> = (1..=31).map(|n| record("X", n, &["Uniform"])).collect();
        let dex = Dataset::new(records);
        let mut slots = layout(&dex, 1);
        assert_eq!(box_range(&slots), Some(1..=2));

        relayout(&mut slots, 5);
        assert_eq!(box_range(&slots), Some(5..=6));
        assert_eq!(find(&slots, 6, 1, 1).map(|s| s.count), Some(30));
        assert!(find(&slots, 6, 1, 2).is_none());
        assert!(box_range(&[]).is_none());
    }

    #[test]
    fn duplicate_position_is_empty() {
        let dex = Dataset::new(vec![record("A", 1, &["Uniform"])]);
        let mut slots = layout(&dex, 1);
        slots.push(slots[0].clone());
        assert!(find(&slots, 1, 1, 1).is_none());
    }

    #[test]
    fn form_text_uses_spaces() {
        let dex = Dataset::new(vec![record("Tauros", 128, &["Uniform|Paldean Form"])]);
        let slots = layout(&dex, 1);
        assert_eq!(slots[0].form_text(), "Uniform Paldean Form");
    }
}
