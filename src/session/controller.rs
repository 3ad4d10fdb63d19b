//! Event-driven tile controller
//!
//! Turns participant lifecycle events into registry mutations and the
//! matching [`TileChange`]s for the host.
//!
//! The controller is not synchronized. Either call [`TileController::handle`]
//! from the host's main context, or hand the controller to
//! [`TileController::spawn`], which owns it on a single task and processes
//! events strictly in delivery order.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::geometry::Rect;
use crate::registry::{allocate, relayout, release, LayoutConfig, ParticipantId, TileRegistry};
use crate::stats::TileStats;

use super::event::{ParticipantEvent, TileChange, VideoState};

/// Capacity of the tile change channel
const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// Owns the tile registry for one screen
#[derive(Debug)]
pub struct TileController {
    registry: TileRegistry,
    bounds: Rect,
    stats: TileStats,
}

impl TileController {
    /// Create a controller for a container with default layout
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, LayoutConfig::default())
    }

    /// Create a controller for a container with custom layout
    pub fn with_config(bounds: Rect, config: LayoutConfig) -> Self {
        Self {
            registry: TileRegistry::with_config(config),
            bounds,
            stats: TileStats::new(),
        }
    }

    pub fn registry(&self) -> &TileRegistry {
        &self.registry
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn stats(&self) -> TileStats {
        self.stats
    }

    /// Apply one event and return what the host must change
    pub fn handle(&mut self, event: ParticipantEvent) -> Vec<TileChange> {
        match event {
            ParticipantEvent::VideoStateChanged {
                participant,
                state: VideoState::Decoding,
            } => self.on_decoding(participant),
            ParticipantEvent::VideoStateChanged { participant, state } => {
                tracing::debug!(participant = %participant, state = ?state, "Remote video state");
                Vec::new()
            }
            ParticipantEvent::Offline {
                participant,
                reason,
            } => {
                tracing::debug!(participant = %participant, reason = ?reason, "Participant offline");
                self.on_offline(participant)
            }
        }
    }

    /// Detach every tile, in stacking order
    ///
    /// Called when the owning screen goes away.
    pub fn teardown(&mut self) -> Vec<TileChange> {
        let tiles = self.registry.clear();

        for _ in &tiles {
            self.stats.record_released();
        }

        if !tiles.is_empty() {
            tracing::info!(tiles = tiles.len(), "Tiles torn down");
        }

        tiles
            .into_iter()
            .map(|(participant, _)| TileChange::Detach { participant })
            .collect()
    }

    fn on_decoding(&mut self, participant: ParticipantId) -> Vec<TileChange> {
        if self.registry.contains(participant) {
            tracing::debug!(participant = %participant, "Decoding participant already has a tile");
            return Vec::new();
        }

        let slot = allocate(self.bounds, &self.registry, participant);
        self.registry.insert(participant, slot, ());
        self.stats.record_allocated();

        tracing::info!(
            participant = %participant,
            tiles = self.registry.len(),
            "Remote tile attached"
        );

        vec![TileChange::Attach { participant, slot }]
    }

    fn on_offline(&mut self, participant: ParticipantId) -> Vec<TileChange> {
        if release(&mut self.registry, participant).is_none() {
            self.stats.record_ignored_release();
            return Vec::new();
        }
        self.stats.record_released();

        let before: Vec<_> = self.registry.iter().map(|(id, tile)| (id, tile.slot)).collect();
        relayout(&mut self.registry);

        let mut changes = vec![TileChange::Detach { participant }];
        for (id, old) in before {
            if let Some(slot) = self.registry.slot(id) {
                if *slot != old {
                    changes.push(TileChange::Move {
                        participant: id,
                        slot: *slot,
                    });
                }
            }
        }

        tracing::info!(
            participant = %participant,
            tiles = self.registry.len(),
            moved = changes.len() - 1,
            "Remote tile detached"
        );

        changes
    }

    /// Run the controller on its own task
    ///
    /// Events are processed one at a time in the order they arrive. The task
    /// finishes when every event sender is dropped, emitting a `Detach` for
    /// each remaining tile, or when the change receiver is dropped. It
    /// returns the final statistics.
    pub fn spawn(mut self, mut events: mpsc::Receiver<ParticipantEvent>) -> TileTask {
        let (tx, rx) = mpsc::channel(CHANGE_CHANNEL_CAPACITY);

        let handle = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                for change in self.handle(event) {
                    if tx.send(change).await.is_err() {
                        tracing::debug!("Tile change receiver dropped, stopping");
                        return self.stats;
                    }
                }
            }

            for change in self.teardown() {
                if tx.send(change).await.is_err() {
                    break;
                }
            }

            self.stats
        });

        TileTask {
            changes: rx,
            handle,
        }
    }
}

/// Handle to a spawned [`TileController`]
pub struct TileTask {
    /// Tile changes in the order they were produced
    pub changes: mpsc::Receiver<TileChange>,

    /// Resolves to the final statistics when the task ends
    pub handle: JoinHandle<TileStats>,
}
