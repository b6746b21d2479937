// src/specs/pokedex.rs
//! Scraping *spec* for the full Pokedex listing (`/pokedex/all`).
//!
//! Ground truth lives in `<table id="pokedex">`, one `<tr>` per species or form:
//!
//! | col | content                                                     |
//! |-----|-------------------------------------------------------------|
//! | 0   | National Dex number (`0001`, inside a `<span>`)             |
//! | 1   | `<a class="ent-name">Base</a>` + optional `<small>Form</small>` |
//! | 2   | types                                                       |
//! | 3   | total                                                       |
//! | 4–9 | HP, Attack, Defense, Sp. Atk, Sp. Def, Speed                |
//!
//! A missing table is fatal. Rows that do not fit the layout (short rows,
//! non-numeric id, any stat outside `u8`) are dropped without error.

use crate::config::consts::{
    FIRST_STAT_COLUMN, ID_COLUMN, MIN_CELLS, NAME_COLUMN, TABLE_ID, UNKNOWN_NAME,
};
use crate::core::html::{
    blocks_ci, first_inner_ci, inner_after_open_tag, inner_by_id_ci, slice_between_ci, strip_tags,
};
use crate::core::sanitize::{clean_cell, decode_entities, normalize_name};
use crate::error::{Error, Result};
use crate::model::{Entry, EntryList, StatBlock};

/// Parse every data row of the Pokedex table, placeholder first.
pub fn parse_entries(html_doc: &str) -> Result<EntryList> {
    let table = inner_by_id_ci(html_doc, "table", TABLE_ID)
        .ok_or_else(|| Error::Parse(s!("Pokedex table not found.")))?;
    let body = slice_between_ci(table, "<tbody", "</tbody>")
        .ok_or_else(|| Error::Parse(s!("Pokedex table not found.")))?;

    let mut list = EntryList::new();
    let mut skipped = 0usize;
    for tr in blocks_ci(body, "tr") {
        match parse_row(tr) {
            Some(entry) => list.push(entry),
            None => skipped += 1,
        }
    }
    logf!("Parsed {} rows, skipped {}", list.real_count(), skipped);
    Ok(list)
}

/// One `<tr>` block → `Entry`, or `None` when the row is not a data row.
pub fn parse_row(tr: &str) -> Option<Entry> {
    let cells: Vec<String> = blocks_ci(tr, "td").into_iter().map(inner_after_open_tag).collect();
    if cells.len() < MIN_CELLS {
        logd!("Skipping row with {} cells", cells.len());
        return None;
    }

    let id_text = cell_text(&cells[ID_COLUMN]);
    let Ok(id) = id_text.parse::<u32>() else {
        logd!("Skipping row with id {:?}", id_text);
        return None;
    };

    let name = normalize_name(&working_name(&cells[NAME_COLUMN]));

    let mut stats = [0u8; 6];
    for (i, slot) in stats.iter_mut().enumerate() {
        let raw = cell_text(&cells[FIRST_STAT_COLUMN + i]);
        match raw.parse::<u8>() {
            Ok(v) => *slot = v,
            Err(_) => {
                logd!("Skipping #{id} {name}: stat column {} is {:?}", FIRST_STAT_COLUMN + i, raw);
                return None;
            }
        }
    }

    Some(Entry::new(id, name, StatBlock::from_array(stats)))
}

/// Base name from the first anchor, plus the `<small>` form label if any.
/// "Unknown" only stands in for a missing anchor; an empty one stays empty.
fn working_name(cell: &str) -> String {
    let base = first_inner_ci(cell, "a")
        .map(|a| element_text(&a))
        .unwrap_or_else(|| s!(UNKNOWN_NAME));

    match first_inner_ci(cell, "small").map(|f| element_text(&f)) {
        Some(form) if !form.is_empty() => format!("{base} {form}"),
        _ => base,
    }
}

fn element_text(inner: &str) -> String {
    decode_entities(&strip_tags(inner)).trim().to_string()
}

fn cell_text(inner: &str) -> String {
    clean_cell(&decode_entities(&strip_tags(inner)))
}
