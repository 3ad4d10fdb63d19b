//! Participant identifiers and tile slots

use std::fmt;

use crate::geometry::Rect;

/// Opaque identifier of a remote audio/video source
///
/// Assigned by the streaming SDK. The SDK may hand the same value out again
/// after the original participant has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(u64);

impl ParticipantId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ParticipantId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Geometry assigned to one participant's tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSlot {
    pub frame: Rect,
}

impl TileSlot {
    /// Square slot with its top-left corner at `(x, y)`
    pub fn square(x: f64, y: f64, side: f64) -> Self {
        Self {
            frame: Rect::new(x, y, side, side),
        }
    }

    /// Side length of the tile
    ///
    /// Tiles are created square; the width is authoritative.
    pub fn side(&self) -> f64 {
        self.frame.width
    }
}

/// A slot together with the host's render target for it
///
/// The target is whatever handle the UI layer uses for the view that shows
/// the participant's video. The registry only carries it around so the host
/// gets it back on release.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<T = ()> {
    pub slot: TileSlot,
    pub target: T,
}

impl<T> Tile<T> {
    pub fn new(slot: TileSlot, target: T) -> Self {
        Self { slot, target }
    }
}
