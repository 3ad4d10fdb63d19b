//! Remote participant tile registry for real-time video sessions
//!
//! Tracks which remote participants currently have a video tile on screen and
//! where each tile sits inside its container. Tiles are square and stack in a
//! single column from the top of the container, in the order participants
//! started decoding video.
//!
//! The streaming SDK, the renderer and the UI toolkit stay outside this crate.
//! The host forwards typed [`session::ParticipantEvent`]s and applies the
//! resulting [`session::TileChange`]s to its own view hierarchy.
//!
//! # Example
//!
//! ```
//! use remote_tiles::{allocate, relayout, release, ParticipantId, Rect, TileRegistry};
//!
//! let bounds = Rect::new(0.0, 0.0, 300.0, 600.0);
//! let mut registry: TileRegistry = TileRegistry::new();
//!
//! let a = ParticipantId::new(1);
//! let b = ParticipantId::new(2);
//! let slot = allocate(bounds, &registry, a);
//! registry.insert(a, slot, ());
//! let slot = allocate(bounds, &registry, b);
//! registry.insert(b, slot, ());
//!
//! release(&mut registry, a);
//! relayout(&mut registry);
//!
//! assert_eq!(registry.slot(b).unwrap().frame.y, 25.0);
//! ```

pub mod error;
pub mod geometry;
pub mod registry;
pub mod session;
pub mod stats;

pub use error::{ConfigError, Error, Result};
pub use geometry::Rect;
pub use registry::{
    allocate, relayout, release, LayoutConfig, ParticipantId, Tile, TileRegistry, TileSlot,
};
pub use session::{
    ClientRole, OfflineReason, ParticipantEvent, SessionConfig, TileChange, TileController,
    TileTask, VideoEncoderConfig, VideoState,
};
pub use stats::TileStats;
