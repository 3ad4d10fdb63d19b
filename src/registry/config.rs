//! Tile layout configuration

/// Default fraction of the container width used as the tile side length
pub const DEFAULT_SCALE_FRACTION: f64 = 0.33;

/// Default horizontal inset from the container's left edge
pub const DEFAULT_LEFT_INSET: f64 = 15.0;

/// Default vertical margin above the first tile
pub const DEFAULT_TOP_MARGIN: f64 = 25.0;

/// Geometry constants for the tile column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Tile side length as a fraction of container width, in `(0, 1]`
    pub scale_fraction: f64,

    /// Distance from the container's left edge to every tile
    pub left_inset: f64,

    /// Distance from the top of the column to the first tile
    pub top_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale_fraction: DEFAULT_SCALE_FRACTION,
            left_inset: DEFAULT_LEFT_INSET,
            top_margin: DEFAULT_TOP_MARGIN,
        }
    }
}

impl LayoutConfig {
    /// Set the tile scale fraction
    ///
    /// Values outside `(0, 1]` are clamped; non-finite or non-positive values
    /// fall back to the default.
    pub fn scale_fraction(mut self, fraction: f64) -> Self {
        self.scale_fraction = if fraction.is_finite() && fraction > 0.0 {
            fraction.min(1.0)
        } else {
            DEFAULT_SCALE_FRACTION
        };
        self
    }

    /// Set the left inset
    pub fn left_inset(mut self, inset: f64) -> Self {
        self.left_inset = inset;
        self
    }

    /// Set the top margin
    pub fn top_margin(mut self, margin: f64) -> Self {
        self.top_margin = margin;
        self
    }

    /// Side length of a tile for a container of the given width
    pub fn tile_side(&self, container_width: f64) -> f64 {
        container_width * self.scale_fraction
    }
}
