// src/emit.rs
// Render buckets as C++ array literals. Pure: every function returns text,
// `render` joins the blocks once.

use crate::classify::Bucket;
use crate::config::consts::{ARRAY_TYPE, SOURCE_URL, STAT_WIDTH};
use crate::model::Entry;

/// Attribution and format legend, followed by a blank line.
pub fn header() -> String {
    [
        s!("// Pokemon Base Stats Table (National Dex #1 - #1025)"),
        format!("// Generated from {SOURCE_URL}"),
        s!("// Format: {ID, HP, ATK, DEF, SPA, SPD, SPE}, // ID Name"),
        s!(),
        s!(),
    ]
    .join("\n")
}

/// `    {  25,  35,  55,  40,  50,  50,  90 },  // 25 Pikachu`
pub fn entry_line(entry: &Entry, label: &str) -> String {
    let w = STAT_WIDTH;
    let [hp, atk, def, spa, spd, spe] = entry.stats.to_array();
    format!(
        "    {{ {:>w$}, {:>w$}, {:>w$}, {:>w$}, {:>w$}, {:>w$}, {:>w$} }},  // {} {}",
        entry.id, hp, atk, def, spa, spd, spe, entry.id, label
    )
}

pub fn bucket_block(bucket: &Bucket) -> String {
    let mut lines = Vec::with_capacity(bucket.len() + 2);
    lines.push(format!("static const {ARRAY_TYPE} {}[] = {{", bucket.table));
    lines.extend(bucket.rows.iter().map(|(e, label)| entry_line(e, label)));
    lines.push(s!("};"));
    lines.join("\n") + "\n"
}

/// Header, base table, then each form table separated by two blank lines.
pub fn render(base: &Bucket, buckets: &[Bucket]) -> String {
    let blocks: Vec<String> = std::iter::once(header() + &bucket_block(base))
        .chain(buckets.iter().map(bucket_block))
        .collect();
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatBlock;

    #[test]
    fn entry_line_pads_to_three() {
        let e = Entry::new(25, "Pikachu", StatBlock::from_array([35, 55, 40, 50, 50, 90]));
        assert_eq!(
            entry_line(&e, "Pikachu"),
            "    {  25,  35,  55,  40,  50,  50,  90 },  // 25 Pikachu"
        );
    }

    #[test]
    fn wide_ids_are_not_truncated() {
        let e = Entry::new(1025, "Pecharunt", StatBlock::from_array([88, 88, 160, 88, 88, 88]));
        assert_eq!(
            entry_line(&e, "Pecharunt"),
            "    { 1025,  88,  88, 160,  88,  88,  88 },  // 1025 Pecharunt"
        );
    }

    #[test]
    fn placeholder_line() {
        let e = Entry::placeholder();
        assert_eq!(entry_line(&e, "(placeholder)"), "    {   0,   0,   0,   0,   0,   0,   0 },  // 0 (placeholder)");
    }

    #[test]
    fn empty_bucket_still_declared() {
        let b = Bucket { table: "BASE_STATS_TABLE_X", rows: vec![] };
        assert_eq!(bucket_block(&b), "static const BaseStats BASE_STATS_TABLE_X[] = {\n};\n");
    }

    #[test]
    fn render_layout() {
        let p = Entry::placeholder();
        let base = Bucket { table: "BASE_STATS_TABLE", rows: vec![(&p, s!("(placeholder)"))] };
        let extra = [Bucket { table: "BASE_STATS_TABLE_MEGAS", rows: vec![] }];
        let text = render(&base, &extra);
        let expected = "\
// Pokemon Base Stats Table (National Dex #1 - #1025)
// Generated from https://pokemondb.net/pokedex/all
// Format: {ID, HP, ATK, DEF, SPA, SPD, SPE}, // ID Name

static const BaseStats BASE_STATS_TABLE[] = {
    {   0,   0,   0,   0,   0,   0,   0 },  // 0 (placeholder)
};


static const BaseStats BASE_STATS_TABLE_MEGAS[] = {
};
";
        assert_eq!(text, expected);
    }
}
