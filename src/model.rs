// src/model.rs
//! Parsed records. Built once by the table parser, read-only afterwards.

use std::ops::Index;

use crate::config::consts::PLACEHOLDER_NAME;

/// Six base stats in site column order (HP, Atk, Def, SpA, SpD, Spe).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StatBlock {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}

impl StatBlock {
    pub fn from_array([hp, atk, def, spa, spd, spe]: [u8; 6]) -> Self {
        Self { hp, atk, def, spa, spd, spe }
    }

    pub fn to_array(self) -> [u8; 6] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// National Dex number. 0 is reserved for the placeholder.
    pub id: u32,
    pub name: String,
    pub stats: StatBlock,
}

impl Entry {
    pub fn new(id: u32, name: impl Into<String>, stats: StatBlock) -> Self {
        Self { id, name: name.into(), stats }
    }

    pub fn placeholder() -> Self {
        Self::new(0, PLACEHOLDER_NAME, StatBlock::default())
    }

    /// Id 0 is reserved, so any entry carrying it is treated as the placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.id == 0
    }
}

/// Entries in table order, with the placeholder always at index 0.
/// Append-only; there is no way to remove or reorder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryList(Vec<Entry>);

impl EntryList {
    pub fn new() -> Self {
        Self(vec![Entry::placeholder()])
    }

    pub fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the placeholder is never removed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parsed rows, i.e. everything except the placeholder.
    pub fn real_count(&self) -> usize {
        self.0.len() - 1
    }
}

impl Default for EntryList {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for EntryList {
    type Output = Entry;
    fn index(&self, i: usize) -> &Entry {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
