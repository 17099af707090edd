//! Per-day slot occupancy bookkeeping for one allocation pass.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

/// Tracks which vertical slots are claimed on each visible day.
///
/// Built once from the visible date grid with every slot free, mutated in
/// place while events are assigned, and discarded when the grid changes.
/// Slot cells only move free → occupied; there is no release. Days the
/// grid does not contain are simply not tracked: claims against them are
/// ignored and lookups report nothing free.
#[derive(Debug, Clone)]
pub struct OccupancyTable {
    days: BTreeMap<NaiveDate, Vec<bool>>,
    capacity: usize,
}

impl OccupancyTable {
    /// One entry per distinct calendar day in `grid`, all slots free.
    /// An empty grid yields an empty table.
    pub fn from_grid(grid: &[NaiveDateTime], capacity: usize) -> Self {
        let mut days = BTreeMap::new();
        for cell in grid {
            days.entry(cell.date()).or_insert_with(|| vec![false; capacity]);
        }
        Self { days, capacity }
    }

    /// The per-day slot capacity the table was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many distinct days the table tracks.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether `day` is part of the visible grid.
    pub fn is_tracked(&self, day: NaiveDate) -> bool {
        self.days.contains_key(&day)
    }

    /// The lowest-indexed free slot for `day`, or `None` when the day is
    /// not tracked or every slot is already claimed.
    pub fn first_free(&self, day: NaiveDate) -> Option<usize> {
        self.days.get(&day)?.iter().position(|claimed| !claimed)
    }

    /// Mark `slot` claimed on `day`. Untracked days and out-of-capacity
    /// slot indices are ignored.
    pub fn claim(&mut self, day: NaiveDate, slot: usize) {
        if let Some(slots) = self.days.get_mut(&day) {
            if let Some(cell) = slots.get_mut(slot) {
                *cell = true;
            }
        }
    }

    /// Whether `slot` is claimed on `day`. Untracked days report `false`.
    pub fn is_claimed(&self, day: NaiveDate, slot: usize) -> bool {
        self.days
            .get(&day)
            .is_some_and(|slots| slots.get(slot).copied().unwrap_or(false))
    }

    /// The slot states for `day`, if tracked.
    pub fn slots(&self, day: NaiveDate) -> Option<&[bool]> {
        self.days.get(&day).map(Vec::as_slice)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
