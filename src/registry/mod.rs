//! Remote tile registry
//!
//! The registry keeps one square tile per remote participant whose video is
//! decoding, stacked in a single column down the left edge of the container.
//!
//! # Layout
//!
//! ```text
//!   container (width w)
//!  ┌──────────────────────────────┐
//!  │   top_margin                 │
//!  │  ┌──────┐                    │
//!  │  │  #0  │ side = w * 0.33    │
//!  │  ├──────┤                    │
//!  │  │  #1  │ y = side * i + 25  │
//!  │  ├──────┤                    │
//!  │  │  #2  │                    │
//!  │  └──────┘                    │
//!  │◄─► left_inset                │
//!  └──────────────────────────────┘
//! ```
//!
//! Stacking order is insertion order. Entries live in an ordered association
//! list rather than a hash map so that iteration order is guaranteed to match
//! it. After a participant leaves, [`relayout`] re-indexes the survivors so
//! the column stays contiguous.

pub mod config;
pub mod slot;
pub mod store;

pub use config::LayoutConfig;
pub use slot::{ParticipantId, Tile, TileSlot};
pub use store::{allocate, relayout, release, TileRegistry};
