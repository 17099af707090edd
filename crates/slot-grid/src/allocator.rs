//! Greedy first-fit slot assignment across the visible month grid.
//!
//! Long-term events are assigned before single-day events: a multi-day
//! event must hold one slot across its whole span atomically, and packing
//! single-day events first could fragment availability over that span
//! with no way to recover short of backtracking. Within each class the
//! input order is the tie-break under contention — earlier events get
//! lower slots and later events overflow first, so callers control
//! precedence by ordering their lists (the schedule API serves them
//! sorted by start time).
//!
//! First-fit is a deliberate simplification: it does not minimize the
//! peak slot index the way an optimal interval coloring would, in
//! exchange for a single linear pass with no backtracking. Which events
//! overflow under contention is part of the observable behavior, so the
//! greedy semantics must not be swapped for an optimal packer.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::AllocatorConfig;
use crate::event::Event;
use crate::occupancy::OccupancyTable;

/// The outcome of placing one event.
///
/// `slot` is 1-based and stable across the event's whole span. `None`
/// means the event could not be placed — either its start day is outside
/// the visible grid or that day's slots are exhausted. Callers that need
/// to tell the two apart can check [`OccupancyTable::is_tracked`] for the
/// start day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub event: Event,
    pub slot: Option<u32>,
}

impl Assignment {
    fn placed(event: &Event, slot: usize) -> Self {
        Self {
            event: event.clone(),
            slot: Some(slot as u32 + 1),
        }
    }

    fn unplaced(event: &Event) -> Self {
        Self {
            event: event.clone(),
            slot: None,
        }
    }
}

/// One allocation pass over one visible date grid.
///
/// The allocator privately owns its occupancy table for the duration of
/// the pass. [`assign_long_term`](Self::assign_long_term) must run to
/// completion before [`assign_single_day`](Self::assign_single_day):
/// the single-day pass reads the marks the long-term pass wrote. A new
/// grid (month navigation) means a new allocator — tables are never
/// reused across views.
pub struct SlotAllocator {
    grid_days: Vec<NaiveDate>,
    table: OccupancyTable,
    config: AllocatorConfig,
}

impl SlotAllocator {
    /// Build an allocator for `grid` with every slot free.
    pub fn new(grid: &[NaiveDateTime], config: AllocatorConfig) -> Self {
        Self {
            grid_days: grid.iter().map(|cell| cell.date()).collect(),
            table: OccupancyTable::from_grid(grid, config.slot_capacity),
            config,
        }
    }

    /// Assign slots to multi-day events, in input order.
    ///
    /// Each event takes the lowest slot free on its *start* day and marks
    /// it on every visible day through its effective end day. Days the
    /// span covers outside the grid are skipped without error, so an
    /// event may run past either edge of the rendered range. Events whose
    /// start day is not rendered get no slot at all — they belong to an
    /// adjacent month's view and must not consume capacity here.
    pub fn assign_long_term(&mut self, events: &[Event]) -> Vec<Assignment> {
        events
            .iter()
            .map(|event| self.place_long_term(event))
            .collect()
    }

    /// Assign slots to single-day events, in input order.
    ///
    /// Runs after the long-term pass by contract: single-day events only
    /// compete for the slots long-term events left free on their day.
    pub fn assign_single_day(&mut self, events: &[Event]) -> Vec<Assignment> {
        events.iter().map(|event| self.place_single(event)).collect()
    }

    /// The occupancy table accumulated so far (for diagnostics and for
    /// distinguishing overflow from out-of-range results).
    pub fn occupancy(&self) -> &OccupancyTable {
        &self.table
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    fn place_long_term(&mut self, event: &Event) -> Assignment {
        let start = event.start_day();
        if !self.table.is_tracked(start) {
            return Assignment::unplaced(event);
        }
        let Some(slot) = self.table.first_free(start) else {
            return Assignment::unplaced(event);
        };

        let end = event.effective_end_day(self.config.end_of_day);
        // Walk the grid rather than the raw date range so span days the
        // view does not render never touch the table.
        for day in &self.grid_days {
            if start <= *day && *day <= end {
                self.table.claim(*day, slot);
            }
        }
        Assignment::placed(event, slot)
    }

    fn place_single(&mut self, event: &Event) -> Assignment {
        let day = event.start_day();
        if !self.table.is_tracked(day) {
            return Assignment::unplaced(event);
        }
        let Some(slot) = self.table.first_free(day) else {
            return Assignment::unplaced(event);
        };
        self.table.claim(day, slot);
        Assignment::placed(event, slot)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
