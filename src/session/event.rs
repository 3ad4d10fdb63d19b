//! Participant events in, tile changes out

use crate::registry::{ParticipantId, TileSlot};

/// Remote video state reported by the streaming SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoState {
    /// First remote video packet received
    Starting,
    /// First remote video frame decoded
    Decoding,
    /// Remote video stopped (muted or disabled)
    Stopped,
}

/// Why a participant left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfflineReason {
    /// Left the channel
    Quit,
    /// Timed out
    Dropped,
    /// Switched from broadcaster to audience
    BecameAudience,
}

/// Lifecycle notification forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantEvent {
    /// A participant's remote video changed state
    VideoStateChanged {
        participant: ParticipantId,
        state: VideoState,
    },

    /// A participant went offline
    Offline {
        participant: ParticipantId,
        reason: OfflineReason,
    },
}

impl ParticipantEvent {
    pub fn video_decoding(participant: impl Into<ParticipantId>) -> Self {
        ParticipantEvent::VideoStateChanged {
            participant: participant.into(),
            state: VideoState::Decoding,
        }
    }

    pub fn offline(participant: impl Into<ParticipantId>, reason: OfflineReason) -> Self {
        ParticipantEvent::Offline {
            participant: participant.into(),
            reason,
        }
    }

    /// Participant the event is about
    pub fn participant(&self) -> ParticipantId {
        match self {
            ParticipantEvent::VideoStateChanged { participant, .. }
            | ParticipantEvent::Offline { participant, .. } => *participant,
        }
    }
}

/// Instruction for the host's view hierarchy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileChange {
    /// Create a render target at `slot` and bind the participant's video to it
    Attach {
        participant: ParticipantId,
        slot: TileSlot,
    },

    /// Remove the participant's render target from the view hierarchy
    Detach { participant: ParticipantId },

    /// Reposition an existing render target
    Move {
        participant: ParticipantId,
        slot: TileSlot,
    },
}

impl TileChange {
    pub fn participant(&self) -> ParticipantId {
        match self {
            TileChange::Attach { participant, .. }
            | TileChange::Detach { participant }
            | TileChange::Move { participant, .. } => *participant,
        }
    }
}
