//! End-to-end participant lifecycle through the public API

use remote_tiles::{
    allocate, relayout, release, LayoutConfig, OfflineReason, ParticipantEvent, ParticipantId,
    Rect, TileChange, TileController, TileRegistry, TileSlot,
};
use tokio::sync::mpsc;

const EPS: f64 = 1e-9;

fn id(n: u64) -> ParticipantId {
    ParticipantId::new(n)
}

#[test]
fn test_column_never_has_gaps() {
    let width = 412.0;
    let bounds = Rect::new(0.0, 0.0, width, 900.0);
    let side = 0.33 * width;
    let mut registry: TileRegistry = TileRegistry::new();

    for n in 1..=6 {
        let slot = allocate(bounds, &registry, id(n));
        registry.insert(id(n), slot, ());
    }

    for gone in [3, 1, 6] {
        release(&mut registry, id(gone));
        relayout(&mut registry);

        for (index, (_, tile)) in registry.iter().enumerate() {
            let expected = side * index as f64 + 25.0;
            assert!((tile.slot.frame.y - expected).abs() < EPS);
        }
    }

    assert_eq!(registry.participants(), vec![id(2), id(4), id(5)]);
}

#[test]
fn test_registry_carries_render_targets() {
    #[derive(Debug, PartialEq)]
    struct View(&'static str);

    let bounds = Rect::new(0.0, 0.0, 300.0, 600.0);
    let mut registry: TileRegistry<View> = TileRegistry::new();
    registry.admit(bounds, id(1), View("first"));
    registry.admit(bounds, id(2), View("second"));

    let removed = release(&mut registry, id(1)).map(|tile| tile.target);
    relayout(&mut registry);

    assert_eq!(removed, Some(View("first")));
    assert_eq!(
        registry.get(id(2)).map(|tile| (&tile.target, tile.slot)),
        Some((&View("second"), TileSlot::square(15.0, 25.0, 99.0)))
    );
}

#[tokio::test]
async fn test_host_applies_changes_in_order() {
    let config = LayoutConfig::default().left_inset(10.0);
    let controller = TileController::with_config(Rect::new(20.0, 0.0, 200.0, 800.0), config);
    let (tx, rx) = mpsc::channel(8);
    let mut task = controller.spawn(rx);

    let events = [
        ParticipantEvent::video_decoding(id(7)),
        ParticipantEvent::offline(id(99), OfflineReason::Quit),
        ParticipantEvent::video_decoding(id(8)),
        ParticipantEvent::offline(id(7), OfflineReason::BecameAudience),
    ];
    for event in events {
        tx.send(event).await.unwrap();
    }
    drop(tx);

    // Host-side view of the screen: participant -> frame
    let mut screen: Vec<(ParticipantId, TileSlot)> = Vec::new();
    let mut log = Vec::new();
    while let Some(change) = task.changes.recv().await {
        log.push(change);
        match change {
            TileChange::Attach { participant, slot } => screen.push((participant, slot)),
            TileChange::Move { participant, slot } => {
                let entry = screen.iter_mut().find(|(p, _)| *p == participant).unwrap();
                entry.1 = slot;
            }
            TileChange::Detach { participant } => screen.retain(|(p, _)| *p != participant),
        }
        if log.len() == 4 {
            assert_eq!(screen, vec![(id(8), TileSlot::square(30.0, 25.0, 66.0))]);
        }
    }

    assert_eq!(log.len(), 5);
    assert!(screen.is_empty());

    let stats = task.handle.await.unwrap();
    assert_eq!(stats.ignored_releases, 1);
    assert_eq!(stats.peak, 2);
}
