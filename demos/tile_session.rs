//! Simulated session driving the tile controller
//!
//! Run with: cargo run --example tile_session [CONTAINER_WIDTH]
//!
//! Replays a scripted sequence of SDK callbacks (participants joining,
//! decoding video and leaving) through a spawned `TileController` and prints
//! each tile change the host would apply to its view hierarchy.
//!
//! Set `RUST_LOG=remote_tiles=trace` to see the geometry logs.

use remote_tiles::{
    ClientRole, OfflineReason, ParticipantEvent, ParticipantId, Rect, SessionConfig, TileChange,
    TileController, VideoState,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> remote_tiles::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("remote_tiles=info")),
        )
        .init();

    let width: f64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(375.0);

    let session = SessionConfig::new("demo-app-id", "demo-channel").role(ClientRole::Audience);
    session.validate()?;
    println!(
        "Joining channel '{}' as {:?} ({}x{} @ {}fps)",
        session.channel,
        session.role,
        session.video.width,
        session.video.height,
        session.video.frame_rate
    );

    let bounds = Rect::new(0.0, 0.0, width, width * 2.0);
    let (events_tx, events_rx) = mpsc::channel(32);
    let mut task = TileController::new(bounds).spawn(events_rx);

    let script = [
        ParticipantEvent::VideoStateChanged {
            participant: ParticipantId::new(101),
            state: VideoState::Starting,
        },
        ParticipantEvent::video_decoding(ParticipantId::new(101)),
        ParticipantEvent::video_decoding(ParticipantId::new(202)),
        ParticipantEvent::video_decoding(ParticipantId::new(303)),
        ParticipantEvent::offline(ParticipantId::new(404), OfflineReason::Quit),
        ParticipantEvent::offline(ParticipantId::new(101), OfflineReason::Dropped),
        ParticipantEvent::video_decoding(ParticipantId::new(101)),
    ];

    let producer = tokio::spawn(async move {
        for event in script {
            events_tx.send(event).await?;
        }
        Ok::<_, remote_tiles::Error>(())
    });

    while let Some(change) = task.changes.recv().await {
        match change {
            TileChange::Attach { participant, slot } => println!(
                "attach {:>4} at ({:.1}, {:.1}) side {:.1}",
                participant,
                slot.frame.x,
                slot.frame.y,
                slot.side()
            ),
            TileChange::Move { participant, slot } => {
                println!("move   {:>4} to y {:.1}", participant, slot.frame.y)
            }
            TileChange::Detach { participant } => println!("detach {:>4}", participant),
        }
    }

    if let Ok(result) = producer.await {
        result?;
    }

    match task.handle.await {
        Ok(stats) => println!(
            "Done: allocated={} released={} ignored={} peak={}",
            stats.allocated, stats.released, stats.ignored_releases, stats.peak
        ),
        Err(e) => eprintln!("Tile task failed: {}", e),
    }

    Ok(())
}
