// src/core/sanitize.rs

/// Decode the handful of entities the Pokedex page actually emits.
/// `&amp;` goes last so `&amp;lt;` stays `&lt;`.
pub fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&rsquo;", "\u{2019}")
        .replace("&eacute;", "\u{e9}")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Cell text before integer parsing: trim, then drop embedded line breaks.
pub fn clean_cell(s: &str) -> String {
    s.trim().replace(['\n', '\r'], "")
}

/// Canonical display name. Order matters: the colon rewrite can introduce a
/// double space ("Type: Null" → "Type - Null" is fine, "A :B" → "A  -B" is not)
/// which the single collapse pass then folds.
///
/// The collapse is one `replace("  ", " ")`, so a run of three or more spaces
/// is only partially folded. Such names are not stable under repeated calls.
pub fn normalize_name(s: &str) -> String {
    s.replace('\u{e9}', "e") // Pokémon → Pokemon
        .replace('\u{2019}', "'") // Farfetch’d
        .replace(':', " -") // Type: Null → Type - Null
        .replace("  ", " ")
        .trim()
        .to_string()
}
