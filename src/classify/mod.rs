// src/classify/mod.rs
//! Split the parsed list into the base table and the form tables.
//!
//! Every rule is evaluated independently against every entry, so an entry can
//! land in several form tables. The base table is the complement of *all* rule
//! predicates: the catalogue is the only list of "special form" markers.

pub mod rules;

pub use rules::{CategoryRule, Label, Matcher, CATALOGUE};

use crate::config::consts::{BASE_TABLE, PLACEHOLDER_NAME};
use crate::model::{Entry, EntryList};

/// One output array: its identifier and the matched entries with their labels,
/// in list order.
#[derive(Debug)]
pub struct Bucket<'a> {
    pub table: &'a str,
    pub rows: Vec<(&'a Entry, String)>,
}

impl Bucket<'_> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub fn contains_id(&self, id: u32) -> bool {
        self.rows.iter().any(|(e, _)| e.id == id)
    }
}

/// Comment label for `entry` in `rule`'s table. The placeholder always keeps
/// its own name regardless of strategy.
pub fn label_for(rule: &CategoryRule, entry: &Entry) -> String {
    if entry.is_placeholder() {
        return s!(PLACEHOLDER_NAME);
    }
    rule.label.derive(&entry.name)
}

/// True if any rule claims this name.
pub fn is_special(name: &str, rules: &[CategoryRule]) -> bool {
    rules.iter().any(|r| r.matches(name))
}

/// One bucket per rule, in rule order.
pub fn classify<'a>(entries: &'a EntryList, rules: &[CategoryRule]) -> Vec<Bucket<'a>> {
    rules
        .iter()
        .map(|rule| {
            let rows = entries
                .iter()
                .filter(|e| rule.matches(&e.name))
                .map(|e| (e, label_for(rule, e)))
                .collect();
            Bucket { table: rule.table, rows }
        })
        .collect()
}

/// Everything no rule claims, labelled with the full name.
pub fn base_bucket<'a>(entries: &'a EntryList, rules: &[CategoryRule]) -> Bucket<'a> {
    let rows = entries
        .iter()
        .filter(|e| !is_special(&e.name, rules))
        .map(|e| {
            let label = if e.is_placeholder() { s!(PLACEHOLDER_NAME) } else { s!(e.name.trim()) };
            (e, label)
        })
        .collect();
    Bucket { table: BASE_TABLE, rows }
}
