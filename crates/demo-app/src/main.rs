//! Headless scroll-through of the marketing page.
//!
//! Builds the page model, registers every section's reveals, then drives
//! the controller with a simulated scroll from the top of the document to
//! the bottom, logging lifecycle events along the way. Finishes with a
//! full teardown and verifies that no watcher survives it.
//!
//! Run with: `RUST_LOG=debug cargo run -p demo-app`

use std::collections::BTreeMap;

use anyhow::{Context, Result, ensure};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use unveil_core::controller::{ControllerOptions, RevealController};
use unveil_core::events::RevealEvent;
use unveil_core::geometry::Viewport;
use unveil_config::UnveilConfig;

mod page;
mod sections;

use sections::HouseStyle;

/// Upper bound on settle ticks after the scroll ends, so a stuck playback
/// cannot hang the run.
const MAX_SETTLE_TICKS: u32 = 10_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = UnveilConfig::load();
    info!(
        motion = config.motion_enabled(),
        viewport_height = config.demo.viewport_height,
        "starting page walk"
    );

    let mut controller = RevealController::with_options(ControllerOptions {
        motion_enabled: config.motion_enabled(),
    });

    let style = HouseStyle::from_defaults(&config.defaults);
    let page = page::build(&mut controller, &style)
        .context("failed to register page reveals")?;
    info!(
        content_height = page.content_height,
        reveals = page.handles.len(),
        elements = controller.tracked_count(),
        "page mounted"
    );

    let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();

    // Scroll from top to bottom, one wheel step per animation frame.
    let mut viewport = Viewport::new(0.0, config.demo.viewport_height);
    let max_scroll = (page.content_height - viewport.height).max(0.0);
    let mut scroll = 0.0;
    controller.on_scroll(viewport);
    while scroll < max_scroll {
        scroll += config.demo.scroll_step;
        viewport = viewport.scrolled_to(scroll, page.content_height);
        controller.on_scroll(viewport);
        controller.advance(config.demo.tick_ms);
        drain_events(&mut controller, &mut counts);
    }

    // Let in-flight tweens finish once the scroll stops.
    let mut settle_ticks = 0;
    while controller.is_animating() && settle_ticks < MAX_SETTLE_TICKS {
        controller.advance(config.demo.tick_ms);
        drain_events(&mut controller, &mut counts);
        settle_ticks += 1;
    }
    info!(settle_ticks, "scroll walk complete");

    controller.release_all();
    drain_events(&mut controller, &mut counts);

    for (kind, count) in &counts {
        info!(kind, count, "event total");
    }
    info!(
        watchers = controller.watcher_count(),
        registrations = controller.registration_count(),
        "page torn down"
    );
    ensure!(
        controller.watcher_count() == 0,
        "watchers survived teardown"
    );

    Ok(())
}

/// Log and tally every event emitted since the last drain.
fn drain_events(controller: &mut RevealController, counts: &mut BTreeMap<&'static str, u32>) {
    for event in controller.drain_events() {
        let kind = match &event {
            RevealEvent::Registered { .. } => "registered",
            RevealEvent::Entered { .. } => "entered",
            RevealEvent::Exited { .. } => "exited",
            RevealEvent::PlaybackStarted { .. } => "playback_started",
            RevealEvent::PlaybackFinished { .. } => "playback_finished",
            RevealEvent::Cancelled { .. } => "cancelled",
            RevealEvent::Released { .. } => "released",
        };
        *counts.entry(kind).or_insert(0) += 1;
        debug!(?event, "reveal event");
    }
}
