// src/core/html.rs
// Tolerant, case-insensitive tag scanning over raw markup. No DOM; callers
// narrow down to a known block first and scan locally inside it.
//
// Lowercasing is ASCII-only so byte offsets in the lowered copy line up with
// the original string.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find `<tag` at or after `from` in an already-lowered haystack, requiring a
/// tag-name boundary so `<a` does not match `<abbr`.
fn find_open_tag(lc: &str, tag_lc: &str, from: usize) -> Option<usize> {
    let pat = format!("<{tag_lc}");
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&pat)? + pos;
        let next = lc.as_bytes().get(at + pat.len()).copied();
        match next {
            Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r') => return Some(at),
            None => return None,
            _ => pos = at + pat.len(),
        }
    }
}

/// Return the markup between the end of the first opening tag that starts
/// with `open_pat` and the next `close_pat`.
///
/// ```
/// # use dex_export::core::html::slice_between_ci;
/// let doc = r#"<TABLE id="pokedex" class="data-table"><tbody></tbody></TABLE>"#;
/// assert_eq!(slice_between_ci(doc, r#"<table id="pokedex""#, "</table>"), Some("<tbody></tbody>"));
/// ```
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Inner markup of the first `<tag>` whose opening tag carries `id=<id>`
/// (double, single or no quotes), up to the next `</tag>`.
pub fn inner_by_id_ci<'a>(s: &'a str, tag: &str, id: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let tag_lc = to_lower(tag);
    let id_lc = to_lower(id);
    let wanted = [
        format!("id=\"{id_lc}\""),
        format!("id='{id_lc}'"),
        format!("id={id_lc}>"),
        format!("id={id_lc} "),
    ];
    let close = format!("</{tag_lc}>");

    let mut pos = 0usize;
    loop {
        let start = find_open_tag(&lc, &tag_lc, pos)?;
        let open_end = lc[start..].find('>')? + start + 1;
        let open_tag = &lc[start..open_end];
        if wanted.iter().any(|w| has_attr(open_tag, w)) {
            let end = lc[open_end..].find(&close)? + open_end;
            return Some(&s[open_end..end]);
        }
        pos = open_end;
    }
}

/// True if `attr` occurs in `open_tag` as a whole attribute, i.e. right after
/// whitespace. Keeps `data-id="x"` from passing for `id="x"`.
fn has_attr(open_tag: &str, attr: &str) -> bool {
    open_tag.match_indices(attr).any(|(at, _)| {
        matches!(open_tag.as_bytes().get(at.wrapping_sub(1)), Some(b' ' | b'\t' | b'\n' | b'\r'))
    })
}

/// Next complete `<tag ...>...</tag>` block at or after `from`, as a byte range.
/// Not nesting-aware: the block ends at the first matching close tag.
pub fn next_tag_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    next_block_in(s, &lc, &to_lower(tag), from)
}

fn next_block_in(s: &str, lc: &str, tag_lc: &str, from: usize) -> Option<(usize, usize)> {
    let close = format!("</{tag_lc}>");
    let start = find_open_tag(lc, tag_lc, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close)?;
    Some((start, open_end + end_rel + close.len()))
}

/// All `<tag ...>...</tag>` blocks in document order. Lowers the input once.
pub fn blocks_ci<'a>(s: &'a str, tag: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let tag_lc = to_lower(tag);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b, e)) = next_block_in(s, &lc, &tag_lc, pos) {
        out.push(&s[b..e]);
        pos = e;
    }
    out
}

/// Given `<td ...>INNER</td>`, return INNER (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return s!(&block[oe + 1..cs]);
            }
        }
    }
    s!()
}

/// Inner markup of the first `<tag>` element anywhere inside `s`.
pub fn first_inner_ci(s: &str, tag: &str) -> Option<String> {
    let (b, e) = next_tag_block_ci(s, tag, 0)?;
    Some(inner_after_open_tag(&s[b..e]))
}

/// Drop every `<...>` tag and keep the text between them untouched.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tag_needs_name_boundary() {
        let s = r#"<abbr title="x">no</abbr><a href="/p">yes</a>"#;
        assert_eq!(first_inner_ci(s, "a").as_deref(), Some("yes"));
    }

    #[test]
    fn blocks_in_order_and_case_insensitive() {
        let s = "<TR><td>1</td></TR>\n<tr class=\"x\"><td>2</td></tr>";
        let rows = blocks_ci(s, "tr");
        assert_eq!(rows.len(), 2);
        assert_eq!(blocks_ci(rows[0], "td"), vec!["<td>1</td>"]);
        assert_eq!(strip_tags(rows[1]), "2");
    }

    #[test]
    fn inner_after_open_tag_handles_nesting() {
        let td = r#"<td class="cell-name"><a>Venusaur</a></td>"#;
        assert_eq!(inner_after_open_tag(td), "<a>Venusaur</a>");
        assert_eq!(inner_after_open_tag("<br>"), "");
    }

    #[test]
    fn next_block_respects_from() {
        let s = "<small>a</small><small>b</small>";
        let (b, e) = next_tag_block_ci(s, "small", 1).unwrap();
        assert_eq!(&s[b..e], "<small>b</small>");
        assert!(next_tag_block_ci(s, "small", e).is_none());
    }

    #[test]
    fn inner_by_id_ignores_attribute_order() {
        let doc = r#"<table class="nav"><tr></tr></table><TABLE class="data-table" ID="pokedex"><tbody>x</tbody></TABLE>"#;
        assert_eq!(inner_by_id_ci(doc, "table", "pokedex"), Some("<tbody>x</tbody>"));
        assert_eq!(inner_by_id_ci("<table id=pokedex>y</table>", "table", "pokedex"), Some("y"));
        assert!(inner_by_id_ci("<table id=\"pokedex-2\">z</table>", "table", "pokedex").is_none());
    }

    #[test]
    fn inner_by_id_needs_whole_attribute() {
        let doc = r#"<table data-id="pokedex"><tbody>WRONG</tbody></table><table id="pokedex"><tbody>RIGHT</tbody></table>"#;
        assert_eq!(inner_by_id_ci(doc, "table", "pokedex"), Some("<tbody>RIGHT</tbody>"));
        assert!(inner_by_id_ci(r#"<table data-id="pokedex">x</table>"#, "table", "pokedex").is_none());
        assert_eq!(inner_by_id_ci("<table\n  id='pokedex'>y</table>", "table", "pokedex"), Some("y"));
    }

    #[test]
    fn slice_between_missing_returns_none() {
        assert!(slice_between_ci("<table id=\"other\"></table>", "<table id=\"pokedex\"", "</table>").is_none());
    }

    #[test]
    fn strip_tags_keeps_text_verbatim() {
        assert_eq!(strip_tags("<span> 0001 </span><img alt=\"x\">"), " 0001 ");
    }
}
