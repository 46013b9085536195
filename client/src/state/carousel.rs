//! Rotation state for the home-page directory carousel.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::net::types::{DirectoryEntry, Role};

/// Ordered entries plus the index of the first visible card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub entries: Vec<DirectoryEntry>,
    pub index: usize,
}

impl CarouselState {
    #[must_use]
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries, index: 0 }
    }

    /// Advance one position, wrapping at the end. No-op when empty.
    pub fn advance(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.entries.len();
    }

    /// `size` entries starting at the current index, wrapping around.
    ///
    /// Lists shorter than `size` repeat entries rather than leave gaps.
    #[must_use]
    pub fn visible_window(&self, size: usize) -> Vec<DirectoryEntry> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        (0..size)
            .map(|offset| self.entries[(self.index + offset) % self.entries.len()].clone())
            .collect()
    }
}

/// Seed directory shown until a real member feed exists.
#[must_use]
pub fn featured_members() -> Vec<DirectoryEntry> {
    let entry = |id: &str, name: &str, role: Role, region: &str| DirectoryEntry {
        id: id.to_owned(),
        name: name.to_owned(),
        role,
        image_ref: "/placeholder.svg".to_owned(),
        region: region.to_owned(),
    };
    vec![
        entry("1", "Pharmacie Centrale", Role::Pharmacist, "Alger"),
        entry("2", "Med Supply", Role::Supplier, "Oran"),
        entry("3", "Santé Plus", Role::Pharmacist, "Constantine"),
        entry("4", "Pharma Solutions", Role::Supplier, "Annaba"),
        entry("5", "Laboratoire El Kendi", Role::Supplier, "Blida"),
    ]
}
