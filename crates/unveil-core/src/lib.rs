//! Scroll-reveal orchestration for the unveil runtime.
//!
//! This crate provides:
//! - **Sequences**: declarative reveal definitions (targets, endpoint
//!   states, timing, trigger)
//! - **Timelines**: grouped steps with overlap offsets sharing one trigger
//! - **Triggers**: viewport-threshold watchers with once / play-reverse /
//!   scrub policies
//! - **The controller**: the registry that arms watchers, runs the
//!   interpolation clock, and guarantees deterministic cleanup
//!
//! # Architecture
//!
//! ```text
//! RevealController
//!   ├── Element registry (host-fed document-space rects)
//!   ├── Registrations (TriggerWatcher + per-step ActivePlayback)
//!   └── EventQueue (lifecycle events drained by the host)
//! ```
//!
//! The host drives the controller from its event loop: `on_scroll` when the
//! viewport moves, `advance` once per frame, `style_of` when painting.

pub mod controller;
pub mod easing;
pub mod error;
pub mod events;
pub mod geometry;
pub mod interpolate;
pub mod playback;
pub mod sequence;
pub mod timeline;
pub mod trigger;
pub mod types;

pub use controller::{ControllerOptions, RegistrationHandle, RevealController};
pub use easing::EasingFunction;
pub use error::{Result, RevealError};
pub use events::{EventQueue, RevealEvent};
pub use geometry::{Rect, Viewport};
pub use interpolate::Interpolate;
pub use playback::ActivePlayback;
pub use sequence::{RevealSequence, TimingSpec};
pub use timeline::{RevealTimeline, TimelineStep};
pub use trigger::{Crossing, TriggerMode, TriggerSpec, TriggerWatcher};
pub use types::{Direction, PropertyState, RegistrationId, RevealProperty};
