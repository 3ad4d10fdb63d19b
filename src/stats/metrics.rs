//! Tile lifecycle counters

/// Counters for one registry's lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileStats {
    /// Tiles currently on screen
    pub active: usize,
    /// Highest number of tiles on screen at once
    pub peak: usize,
    /// Tiles allocated
    pub allocated: u64,
    /// Tiles released
    pub released: u64,
    /// Offline notifications for participants without a tile
    pub ignored_releases: u64,
}

impl TileStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tile allocation
    pub fn record_allocated(&mut self) {
        self.allocated += 1;
        self.active += 1;
        self.peak = self.peak.max(self.active);
    }

    /// Record a tile release
    pub fn record_released(&mut self) {
        self.released += 1;
        self.active = self.active.saturating_sub(1);
    }

    /// Record an offline notification that had nothing to release
    pub fn record_ignored_release(&mut self) {
        self.ignored_releases += 1;
    }
}
