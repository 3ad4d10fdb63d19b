//! Session-facing surface
//!
//! Typed participant events coming from the streaming collaborator, the tile
//! changes going back to the host, the controller that maps one to the other,
//! and the configuration used to join a channel.

pub mod config;
pub mod controller;
pub mod event;

pub use config::{ClientRole, SessionConfig, VideoEncoderConfig};
pub use controller::{TileController, TileTask};
pub use event::{OfflineReason, ParticipantEvent, TileChange, VideoState};
