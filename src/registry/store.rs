//! Tile registry implementation
//!
//! Ordered mapping from participant to tile, plus the three layout
//! operations the host drives from SDK callbacks.

use crate::geometry::Rect;

use super::config::LayoutConfig;
use super::slot::{ParticipantId, Tile, TileSlot};

/// Ordered mapping from participant to tile
///
/// Not synchronized. The owning screen drives it from one execution context;
/// callers sharing it across tasks must serialize access themselves (see
/// [`crate::session::TileController::spawn`]).
#[derive(Debug, Clone)]
pub struct TileRegistry<T = ()> {
    /// Entries in stacking order, keys unique
    tiles: Vec<(ParticipantId, Tile<T>)>,

    /// Configuration
    config: LayoutConfig,
}

impl<T> TileRegistry<T> {
    /// Create an empty registry with default layout
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create an empty registry with custom layout
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            tiles: Vec::new(),
            config,
        }
    }

    /// Get the layout configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of tiles currently present
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, participant: ParticipantId) -> bool {
        self.position(participant).is_some()
    }

    pub fn get(&self, participant: ParticipantId) -> Option<&Tile<T>> {
        self.tiles
            .iter()
            .find(|(id, _)| *id == participant)
            .map(|(_, tile)| tile)
    }

    pub fn get_mut(&mut self, participant: ParticipantId) -> Option<&mut Tile<T>> {
        self.tiles
            .iter_mut()
            .find(|(id, _)| *id == participant)
            .map(|(_, tile)| tile)
    }

    /// Slot geometry for a participant
    pub fn slot(&self, participant: ParticipantId) -> Option<&TileSlot> {
        self.get(participant).map(|tile| &tile.slot)
    }

    /// Stacking index of a participant (0 is the topmost tile)
    pub fn position(&self, participant: ParticipantId) -> Option<usize> {
        self.tiles.iter().position(|(id, _)| *id == participant)
    }

    /// Iterate tiles in stacking order
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &Tile<T>)> {
        self.tiles.iter().map(|(id, tile)| (*id, tile))
    }

    /// Participants in stacking order
    pub fn participants(&self) -> Vec<ParticipantId> {
        self.tiles.iter().map(|(id, _)| *id).collect()
    }

    /// Insert a tile
    ///
    /// A new participant is appended at the bottom of the column. An existing
    /// participant keeps its position; its slot and target are replaced and
    /// the previous tile is returned.
    pub fn insert(
        &mut self,
        participant: ParticipantId,
        slot: TileSlot,
        target: T,
    ) -> Option<Tile<T>> {
        let tile = Tile::new(slot, target);

        if let Some(index) = self.position(participant) {
            return Some(std::mem::replace(&mut self.tiles[index].1, tile));
        }

        self.tiles.push((participant, tile));
        None
    }

    /// Give a participant a tile unless it already has one
    ///
    /// Allocates below the current column and appends. A participant that
    /// already holds a slot keeps it unchanged, and `target` is dropped.
    pub fn admit(&mut self, bounds: Rect, participant: ParticipantId, target: T) -> TileSlot {
        if let Some(slot) = self.slot(participant) {
            tracing::debug!(participant = %participant, "Tile already allocated");
            return *slot;
        }

        let slot = allocate(bounds, self, participant);
        self.tiles.push((participant, Tile::new(slot, target)));

        tracing::info!(
            participant = %participant,
            tiles = self.tiles.len(),
            y = slot.frame.y,
            "Tile allocated"
        );

        slot
    }

    /// Drop every tile, returning them in stacking order
    ///
    /// Used when the owning screen is torn down.
    pub fn clear(&mut self) -> Vec<(ParticipantId, Tile<T>)> {
        std::mem::take(&mut self.tiles)
    }
}

impl<T> Default for TileRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for TileRegistry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles && self.config == other.config
    }
}

/// Compute the slot for a participant joining the column
///
/// The new tile goes directly below the `existing.len()` tiles already
/// present: side `width * scale_fraction`, `x = min_x + left_inset`,
/// `y = side * offset + top_margin`. Does not modify the registry.
pub fn allocate<T>(
    bounds: Rect,
    existing: &TileRegistry<T>,
    participant: ParticipantId,
) -> TileSlot {
    let config = existing.config();
    let offset = existing.len() as f64;
    let side = config.tile_side(bounds.width);
    let x = bounds.min_x() + config.left_inset;
    let y = side * offset + config.top_margin;

    tracing::trace!(
        participant = %participant,
        offset = existing.len(),
        x = x,
        y = y,
        side = side,
        "Slot computed"
    );

    TileSlot::square(x, y, side)
}

/// Remove a participant's tile
///
/// Returns the removed tile so the host can detach its render target.
/// Releasing a participant that never had a tile is a no-op: an offline
/// notification may arrive before the participant's video ever decoded.
/// Call [`relayout`] afterwards to close the gap.
pub fn release<T>(
    registry: &mut TileRegistry<T>,
    participant: ParticipantId,
) -> Option<Tile<T>> {
    let Some(index) = registry.position(participant) else {
        tracing::debug!(participant = %participant, "Release for unknown participant ignored");
        return None;
    };

    let (_, tile) = registry.tiles.remove(index);

    tracing::info!(
        participant = %participant,
        index = index,
        tiles = registry.tiles.len(),
        "Tile released"
    );

    Some(tile)
}

/// Restack every tile contiguously from the top
///
/// Tile `i` in stacking order gets `y = side * i + top_margin`, where `side`
/// is that tile's own width. `x` and size are left alone. Idempotent.
pub fn relayout<T>(registry: &mut TileRegistry<T>) {
    let margin = registry.config.top_margin;

    for (index, (participant, tile)) in registry.tiles.iter_mut().enumerate() {
        let y = tile.slot.side() * index as f64 + margin;
        if tile.slot.frame.y != y {
            tracing::trace!(
                participant = %participant,
                from = tile.slot.frame.y,
                to = y,
                "Tile moved"
            );
            tile.slot.frame.y = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn bounds(width: f64) -> Rect {
        Rect::new(0.0, 0.0, width, width * 2.0)
    }

    fn fill(registry: &mut TileRegistry, bounds: Rect, ids: &[u64]) {
        for &id in ids {
            let participant = ParticipantId::new(id);
            let slot = allocate(bounds, registry, participant);
            registry.insert(participant, slot, ());
        }
    }

    #[test]
    fn test_allocate_empty_registry() {
        for width in [1.0, 99.5, 300.0, 375.0, 1024.0] {
            let registry: TileRegistry = TileRegistry::new();
            let slot = allocate(bounds(width), &registry, ParticipantId::new(7));

            assert!((slot.side() - 0.33 * width).abs() < EPS);
            assert_eq!(slot.frame.width, slot.frame.height);
            assert_eq!(slot.frame.y, 25.0);
            assert_eq!(slot.frame.x, 15.0);
        }
    }

    #[test]
    fn test_allocate_uses_container_min_x() {
        let registry: TileRegistry = TileRegistry::new();
        let slot = allocate(
            Rect::new(40.0, 10.0, 300.0, 600.0),
            &registry,
            ParticipantId::new(1),
        );

        assert_eq!(slot.frame.x, 55.0);
        assert_eq!(slot.frame.y, 25.0);
    }

    #[test]
    fn test_allocate_stacks_down() {
        let width = 375.0;
        let mut registry = TileRegistry::new();
        fill(&mut registry, bounds(width), &[10, 20, 30, 40, 50]);

        let slots: Vec<TileSlot> = registry.iter().map(|(_, t)| t.slot).collect();
        for pair in slots.windows(2) {
            assert!(pair[1].frame.y > pair[0].frame.y);
            assert!((pair[1].frame.y - pair[0].frame.y - 0.33 * width).abs() < EPS);
            assert_eq!(pair[0].frame.x, pair[1].frame.x);
            assert!(!pair[0].frame.intersects(&pair[1].frame));
        }
    }

    #[test]
    fn test_scenario_width_300() {
        let b = bounds(300.0);
        let a = ParticipantId::new(1);
        let bb = ParticipantId::new(2);
        let mut registry = TileRegistry::new();

        let slot_a = allocate(b, &registry, a);
        assert_eq!(slot_a, TileSlot::square(15.0, 25.0, 99.0));
        registry.insert(a, slot_a, ());

        let slot_b = allocate(b, &registry, bb);
        assert_eq!(slot_b, TileSlot::square(15.0, 124.0, 99.0));
        registry.insert(bb, slot_b, ());

        assert!(release(&mut registry, a).is_some());
        relayout(&mut registry);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.slot(bb), Some(&TileSlot::square(15.0, 25.0, 99.0)));
    }

    #[test]
    fn test_release_middle_closes_gap() {
        let mut registry = TileRegistry::new();
        fill(&mut registry, bounds(300.0), &[1, 2, 3]);

        release(&mut registry, ParticipantId::new(2));
        relayout(&mut registry);

        assert_eq!(
            registry.participants(),
            vec![ParticipantId::new(1), ParticipantId::new(3)]
        );
        assert_eq!(registry.slot(ParticipantId::new(1)).unwrap().frame.y, 25.0);
        assert_eq!(registry.slot(ParticipantId::new(3)).unwrap().frame.y, 124.0);
    }

    #[test]
    fn test_release_unknown_is_noop() {
        let mut registry = TileRegistry::new();
        fill(&mut registry, bounds(300.0), &[1, 2]);
        let before = registry.clone();

        assert!(release(&mut registry, ParticipantId::new(99)).is_none());
        assert_eq!(registry, before);
    }

    #[test]
    fn test_release_returns_target() {
        let mut registry: TileRegistry<&str> = TileRegistry::new();
        let id = ParticipantId::new(5);
        registry.admit(bounds(300.0), id, "view-5");

        let tile = release(&mut registry, id).unwrap();
        assert_eq!(tile.target, "view-5");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_relayout_idempotent() {
        let mut registry = TileRegistry::new();
        fill(&mut registry, bounds(320.0), &[1, 2, 3, 4, 5]);
        release(&mut registry, ParticipantId::new(1));
        release(&mut registry, ParticipantId::new(4));

        relayout(&mut registry);
        let once = registry.clone();
        relayout(&mut registry);

        assert_eq!(registry, once);
    }

    #[test]
    fn test_relayout_keeps_x_and_size() {
        let mut registry = TileRegistry::new();
        fill(&mut registry, Rect::new(30.0, 0.0, 300.0, 600.0), &[1, 2, 3]);
        release(&mut registry, ParticipantId::new(1));
        relayout(&mut registry);

        for (_, tile) in registry.iter() {
            assert_eq!(tile.slot.frame.x, 45.0);
            assert_eq!(tile.slot.side(), 99.0);
        }
    }

    #[test]
    fn test_admit_keeps_existing_slot() {
        let mut registry: TileRegistry<u32> = TileRegistry::new();
        let id = ParticipantId::new(3);

        let first = registry.admit(bounds(300.0), id, 1);
        let second = registry.admit(bounds(300.0), id, 2);

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(id).unwrap().target, 1);
    }

    #[test]
    fn test_insert_existing_keeps_position() {
        let mut registry = TileRegistry::new();
        fill(&mut registry, bounds(300.0), &[1, 2, 3]);

        let replaced =
            registry.insert(ParticipantId::new(2), TileSlot::square(0.0, 0.0, 10.0), ());

        assert!(replaced.is_some());
        assert_eq!(registry.position(ParticipantId::new(2)), Some(1));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut registry = TileRegistry::new();
        fill(&mut registry, bounds(300.0), &[4, 5]);

        let drained = registry.clear();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].0, ParticipantId::new(4));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_custom_config() {
        let config = LayoutConfig::default()
            .scale_fraction(0.5)
            .left_inset(0.0)
            .top_margin(10.0);
        let mut registry: TileRegistry = TileRegistry::with_config(config);
        fill(&mut registry, bounds(200.0), &[1, 2]);

        assert_eq!(
            registry.slot(ParticipantId::new(2)),
            Some(&TileSlot::square(0.0, 110.0, 100.0))
        );
    }
}
