// Undo/Redo Snapshot History - linear timeline of full grid copies
//
// Provides:
// - Snapshot recording with redo-branch truncation
// - Undo/redo navigation that never empties the timeline
// - Optional entry cap (oldest snapshots dropped first)
// - Access to historical snapshots for export

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Configuration for snapshot history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of snapshots to keep (`None` = unbounded).
    pub max_entries: Option<usize>,
}

/// State change notification returned by history operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A snapshot was appended at this index
    Recorded(usize),
    /// Moved back to this index
    Undone(usize),
    /// Moved forward to this index
    Redone(usize),
    /// History limit reached, this many old snapshots dropped
    Trimmed(usize),
    /// Nothing to undo or redo
    Unchanged,
}

/// Linear undo/redo timeline of grid snapshots.
///
/// Always holds at least one entry; the entry at [`History::index`] is the
/// grid currently on display.
#[derive(Debug, Clone)]
pub struct History {
    config: HistoryConfig,
    entries: Vec<Grid>,
    index: usize,
}

impl History {
    /// Start a timeline whose only entry is a copy of `initial`.
    #[must_use]
    pub fn new(initial: &Grid) -> Self {
        Self::with_config(initial, HistoryConfig::default())
    }

    /// Start a timeline with an explicit configuration.
    #[must_use]
    pub fn with_config(initial: &Grid, config: HistoryConfig) -> Self {
        Self {
            config,
            entries: vec![initial.clone()],
            index: 0,
        }
    }

    /// Append a copy of `grid`, discarding any redo branch first.
    ///
    /// Returns `Recorded`, or `Trimmed` when the cap dropped old entries.
    pub fn record(&mut self, grid: &Grid) -> HistoryEvent {
        let discarded = self.entries.len() - (self.index + 1);
        self.entries.truncate(self.index + 1);
        self.entries.push(grid.clone());
        self.index = self.entries.len() - 1;
        if discarded > 0 {
            log::debug!("history: discarded {discarded} redo entries");
        }

        let trimmed = self.trim_if_needed();
        if trimmed > 0 {
            HistoryEvent::Trimmed(trimmed)
        } else {
            HistoryEvent::Recorded(self.index)
        }
    }

    /// Step back one entry. At the oldest entry this is a no-op.
    pub fn undo(&mut self) -> (&Grid, HistoryEvent) {
        let event = if self.index > 0 {
            self.index -= 1;
            HistoryEvent::Undone(self.index)
        } else {
            HistoryEvent::Unchanged
        };
        (&self.entries[self.index], event)
    }

    /// Step forward one entry. At the newest entry this is a no-op.
    pub fn redo(&mut self) -> (&Grid, HistoryEvent) {
        let event = if self.index + 1 < self.entries.len() {
            self.index += 1;
            HistoryEvent::Redone(self.index)
        } else {
            HistoryEvent::Unchanged
        };
        (&self.entries[self.index], event)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// The snapshot at the current index.
    pub fn current(&self) -> &Grid {
        &self.entries[self.index]
    }

    /// A historical snapshot, if `index` is in range.
    pub fn entry(&self, index: usize) -> Option<&Grid> {
        self.entries.get(index)
    }

    /// Current position in the timeline.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get configuration
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    fn trim_if_needed(&mut self) -> usize {
        let Some(max) = self.config.max_entries else {
            return 0;
        };
        let max = max.max(1);
        if self.entries.len() <= max {
            return 0;
        }
        let excess = self.entries.len() - max;
        self.entries.drain(..excess);
        self.index = self.index.saturating_sub(excess);
        log::debug!("history: trimmed {excess} oldest entries");
        excess
    }
}
