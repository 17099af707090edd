//! # slot-grid
//!
//! Deterministic slot allocation for month-view calendars.
//!
//! Each day-cell in a month view can display a bounded number of event
//! bars. When events overlap in time, each needs its own vertical row
//! ("slot"), and a multi-day event must keep the *same* slot across every
//! day it spans. This crate implements that placement as a pure
//! computation: given the visible date grid and the events to render, it
//! assigns each event a 1-based slot number or marks it unplaceable, and
//! leaves fetching and pixel rendering to the caller. All inputs are
//! explicit (no system clock access), keeping the allocation testable and
//! reproducible.
//!
//! ## Modules
//!
//! - [`grid`] — visible month-grid generation (whole weeks, adjacent-month fill)
//! - [`occupancy`] — per-day slot occupancy table for one allocation pass
//! - [`allocator`] — greedy first-fit assignment, long-term before single-day
//! - [`event`] — the schedule event model and class partitioning
//! - [`config`] — slot capacity and end-of-day marker configuration
//! - [`error`] — error types

pub mod allocator;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod occupancy;

pub use allocator::{Assignment, SlotAllocator};
pub use config::{AllocatorConfig, END_OF_DAY, MAX_SCHEDULE_COUNT};
pub use error::GridError;
pub use event::{partition, Event};
pub use grid::{month_grid, WeekStart};
pub use occupancy::OccupancyTable;
