//! Viewport-intersection triggers.
//!
//! A trigger watches one anchor element and reports crossings of viewport
//! threshold lines. Thresholds are expressed as fractions of viewport
//! height measured from the viewport top: a `start` of 0.85 fires once the
//! element's top edge rises above the line 85% down the viewport — the
//! `top 85%` convention of scroll-trigger systems.
//!
//! Three policies govern what a crossing does:
//! - `Once`: play forward on first entry, never reverse.
//! - `PlayReverse`: play forward on entry, play backward when the element
//!   scrolls back out past the start line.
//! - `Scrub`: no clock at all; playback progress is bound to the element's
//!   scroll progress through the `[start, end]` window (parallax).

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Viewport};

/// What a trigger does on entry and exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Play forward on first entry; later crossings are ignored.
    #[default]
    Once,
    /// Play forward on entry, play backward on exit past the start line.
    PlayReverse,
    /// Bind progress directly to scroll position between start and end.
    Scrub,
}

/// Viewport-intersection policy for one registration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerSpec {
    /// Entry threshold: viewport-height fraction the anchor's top edge must
    /// rise above to count as entered.
    pub start: f32,
    /// Optional forward-exit threshold for the anchor's bottom edge.
    /// Required meaningfully only by `Scrub` (defaults to the viewport top).
    pub end: Option<f32>,
    /// Crossing policy.
    pub mode: TriggerMode,
}

impl Default for TriggerSpec {
    fn default() -> Self {
        Self {
            start: 0.8,
            end: None,
            mode: TriggerMode::Once,
        }
    }
}

impl TriggerSpec {
    /// Play forward once when the top edge crosses `start`.
    pub fn once(start: f32) -> Self {
        Self {
            start,
            end: None,
            mode: TriggerMode::Once,
        }
    }

    /// Play forward on entry at `start`, reverse when scrolling back out.
    pub fn play_reverse(start: f32) -> Self {
        Self {
            start,
            end: None,
            mode: TriggerMode::PlayReverse,
        }
    }

    /// Scrub progress from "top edge at `start`" to "bottom edge at `end`".
    /// `scrub(1.0, 0.0)` spans the element's whole trip through the
    /// viewport.
    pub fn scrub(start: f32, end: f32) -> Self {
        Self {
            start,
            end: Some(end),
            mode: TriggerMode::Scrub,
        }
    }

    /// Set the forward-exit threshold.
    pub fn with_end(mut self, end: f32) -> Self {
        self.end = Some(end);
        self
    }

    /// Scroll progress of `rect` through this spec's `[start, end]` window,
    /// clamped to [0, 1]. Progress is 0 when the top edge sits at the start
    /// line and 1 when the bottom edge reaches the end line.
    pub fn scroll_progress(&self, rect: &Rect, viewport: &Viewport) -> f32 {
        let end = self.end.unwrap_or(0.0);
        // Scroll offsets at which the two threshold crossings happen.
        let at_start = rect.y - self.start * viewport.height;
        let at_end = rect.bottom() - end * viewport.height;
        if at_end <= at_start {
            return 1.0;
        }
        ((viewport.scroll_y - at_start) / (at_end - at_start)).clamp(0.0, 1.0)
    }
}

/// A threshold crossing reported by a watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The anchor's top edge rose above the start line.
    Entered,
    /// The anchor scrolled back out below the start line.
    ExitedBack,
    /// The anchor's bottom edge rose above the end line.
    ExitedForward,
}

/// Edge-detecting watcher bound to one anchor element.
///
/// `evaluate` compares the anchor's current position against the previous
/// call and reports at most one crossing, so a registration reacts exactly
/// once per threshold transition.
#[derive(Debug, Clone)]
pub struct TriggerWatcher {
    pub spec: TriggerSpec,
    entered: bool,
    passed_end: bool,
}

impl TriggerWatcher {
    /// Create a watcher in the not-entered state.
    pub fn new(spec: TriggerSpec) -> Self {
        Self {
            spec,
            entered: false,
            passed_end: false,
        }
    }

    /// Whether the anchor is currently inside the start threshold.
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Evaluate the anchor against the viewport, reporting a crossing if
    /// one happened since the last call.
    pub fn evaluate(&mut self, rect: &Rect, viewport: &Viewport) -> Option<Crossing> {
        let top = viewport.top_fraction_of(rect);
        let inside = top <= self.spec.start;

        if inside != self.entered {
            self.entered = inside;
            return Some(if inside {
                Crossing::Entered
            } else {
                Crossing::ExitedBack
            });
        }

        if let Some(end) = self.spec.end {
            let beyond = viewport.bottom_fraction_of(rect) <= end;
            if beyond != self.passed_end {
                self.passed_end = beyond;
                if beyond {
                    return Some(Crossing::ExitedForward);
                }
            }
        }

        None
    }
}
