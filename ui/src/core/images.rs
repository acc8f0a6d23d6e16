//! Per-item image load tracking.
//!
//! Each list keeps one [`ImageArena`] keyed by the registry item id, so a
//! failure on one card never leaks into its siblings.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl ImageStatus {
    pub fn css_modifier(self) -> &'static str {
        match self {
            ImageStatus::Loading => "media--loading",
            ImageStatus::Loaded => "media--loaded",
            ImageStatus::Failed => "media--failed",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageArena {
    entries: HashMap<u32, ImageStatus>,
}

impl ImageArena {
    /// Status for `id`; unknown items are still loading.
    pub fn status(&self, id: u32) -> ImageStatus {
        self.entries.get(&id).copied().unwrap_or_default()
    }

    /// Record a successful load. A failed item stays failed.
    pub fn mark_loaded(&mut self, id: u32) -> bool {
        self.settle(id, ImageStatus::Loaded)
    }

    /// Record a failed load. A loaded item stays loaded.
    pub fn mark_failed(&mut self, id: u32) -> bool {
        self.settle(id, ImageStatus::Failed)
    }

    pub fn failed_count(&self) -> usize {
        self.entries
            .values()
            .filter(|s| **s == ImageStatus::Failed)
            .count()
    }

    fn settle(&mut self, id: u32, status: ImageStatus) -> bool {
        let entry = self.entries.entry(id).or_default();
        if *entry != ImageStatus::Loading {
            return false;
        }
        *entry = status;
        true
    }
}
