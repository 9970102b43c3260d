//! The reveal controller: registry, trigger dispatch, and playback clock.
//!
//! `RevealController` is the single point that turns declarative sequences
//! and timelines into armed watchers and running interpolations, with
//! deterministic cleanup. It owns three things:
//!
//! - an **element registry** the host feeds with document-space rects,
//! - a **registration registry** mapping handles to watchers and playback
//!   state,
//! - an **event queue** hosts drain after each update cycle.
//!
//! The host drives it from its event loop: `on_scroll` whenever the
//! viewport moves, `advance` once per animation frame with the elapsed
//! milliseconds. Everything runs on the caller's thread; there is no
//! hidden global state and no locking.
//!
//! # Usage
//!
//! ```
//! use unveil_core::controller::RevealController;
//! use unveil_core::geometry::{Rect, Viewport};
//! use unveil_core::sequence::RevealSequence;
//!
//! let mut controller = RevealController::new();
//! controller.track_element("card", Rect::new(0.0, 1200.0, 600.0, 300.0));
//!
//! let handle = controller.register(RevealSequence::fade_up("card")).unwrap();
//!
//! controller.on_scroll(Viewport::new(800.0, 1000.0));
//! controller.advance(16.7);
//!
//! controller.release(handle);
//! ```

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{Result, RevealError};
use crate::events::{EventQueue, RevealEvent};
use crate::geometry::{Rect, Viewport};
use crate::interpolate::Interpolate;
use crate::playback::ActivePlayback;
use crate::sequence::{RevealSequence, TimingSpec};
use crate::timeline::RevealTimeline;
use crate::trigger::{Crossing, TriggerMode, TriggerWatcher};
use crate::types::{Direction, PropertyState, RegistrationId};

/// Construction options for the controller.
///
/// Passing these at construction replaces any module-level plugin setup:
/// two controllers with different options coexist without touching shared
/// state.
#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    /// When false (kill switch or reduced-motion preference), registration
    /// applies the final state immediately and arms no watcher — content is
    /// visible without animation, never hidden.
    pub motion_enabled: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            motion_enabled: true,
        }
    }
}

/// Opaque handle returned by a successful registration.
///
/// A handle stays valid until its registration is released; releasing twice
/// is a no-op. Handles are plain copies — holding one does NOT keep the
/// watcher alive or collect it: an unreleased registration watches forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationHandle {
    id: RegistrationId,
}

impl RegistrationHandle {
    /// The underlying registration id.
    pub fn id(&self) -> RegistrationId {
        self.id
    }
}

/// Runtime state of one timeline step.
#[derive(Debug, Clone)]
struct StepRuntime {
    targets: Vec<String>,
    from: PropertyState,
    to: PropertyState,
    timing: TimingSpec,
    /// Absolute start offset from the timeline origin.
    start_offset_ms: f32,
    /// Per-target reveal fraction while no playback runs (0 armed, 1
    /// settled forward, intermediate when frozen by cancellation).
    resting: Vec<f32>,
    playback: Option<ActivePlayback>,
}

impl StepRuntime {
    fn fraction_of(&self, idx: usize) -> f32 {
        match &self.playback {
            Some(pb) => pb.fraction_of(idx),
            None => self.resting.get(idx).copied().unwrap_or(0.0),
        }
    }

    fn current_fractions(&self) -> Vec<f32> {
        (0..self.targets.len()).map(|i| self.fraction_of(i)).collect()
    }

    fn style_of(&self, idx: usize) -> PropertyState {
        self.from.interpolate(&self.to, self.fraction_of(idx))
    }
}

/// One registered sequence or timeline.
#[derive(Debug, Clone)]
struct Registration {
    anchor: String,
    watcher: TriggerWatcher,
    steps: Vec<StepRuntime>,
    /// False once the watcher is detached (motion disabled, cancellation).
    watcher_live: bool,
    /// Set on first forward playback; gates replay under `Once`.
    has_played: bool,
    /// Direction of the most recent playback, reported on finish.
    direction: Direction,
}

impl Registration {
    fn is_animating(&self) -> bool {
        self.steps.iter().any(|s| s.playback.is_some())
    }

    fn targets_element(&self, element: &str) -> bool {
        self.anchor == element
            || self
                .steps
                .iter()
                .any(|s| s.targets.iter().any(|t| t == element))
    }
}

/// Central registry turning declarative reveals into observed, timed
/// property transitions with deterministic cleanup.
#[derive(Debug, Default)]
pub struct RevealController {
    options: ControllerOptions,

    /// Host-reported element rects in document space.
    elements: HashMap<String, Rect>,

    /// Live registrations indexed by their ID.
    registrations: HashMap<RegistrationId, Registration>,

    /// Index from target element to the registrations styling it, in
    /// registration order.
    target_index: HashMap<String, Vec<RegistrationId>>,

    /// Last styles deposited by released or cancelled registrations.
    /// Mirrors the inline styles a killed tween leaves behind: release
    /// never snaps values to the final state.
    frozen: HashMap<String, PropertyState>,

    /// Queue of lifecycle events emitted during updates.
    events: EventQueue,
}

impl RevealController {
    /// Create a controller with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with explicit options.
    pub fn with_options(options: ControllerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    // ========================================================================
    // Element registry
    // ========================================================================

    /// Track an element's document-space rect. Targets resolve against
    /// tracked elements at registration time.
    pub fn track_element(&mut self, id: impl Into<String>, rect: Rect) {
        self.elements.insert(id.into(), rect);
    }

    /// Update a tracked element's rect (relayout, resize). Returns false
    /// if the element is unknown.
    pub fn update_element(&mut self, id: &str, rect: Rect) -> bool {
        match self.elements.get_mut(id) {
            Some(r) => {
                *r = rect;
                true
            }
            None => false,
        }
    }

    /// Stop tracking an element. Registrations anchored on it or targeting
    /// it are silently cancelled: their watchers detach and their values
    /// freeze where they are. This is cancellation, not an error.
    pub fn remove_element(&mut self, id: &str) {
        if self.elements.remove(id).is_none() {
            return;
        }
        let affected: Vec<RegistrationId> = self
            .registrations
            .iter()
            .filter(|(_, reg)| reg.targets_element(id))
            .map(|(rid, _)| *rid)
            .collect();
        for rid in affected {
            self.cancel(rid);
        }
    }

    /// The tracked rect for an element, if any.
    pub fn element_rect(&self, id: &str) -> Option<Rect> {
        self.elements.get(id).copied()
    }

    /// Number of tracked elements.
    pub fn tracked_count(&self) -> usize {
        self.elements.len()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a single reveal sequence.
    ///
    /// On success the sequence's initial state is applied to every target
    /// immediately and one watcher is armed on the first target.
    ///
    /// # Errors
    /// `InvalidTarget` if any target is not tracked; `InvalidTiming` if the
    /// duration is non-positive or stagger/delay are negative. A failed
    /// registration affects nothing else.
    pub fn register(&mut self, sequence: RevealSequence) -> Result<RegistrationHandle> {
        sequence.validate()?;
        self.register_timeline(sequence.into_timeline())
    }

    /// Register a timeline: several steps sharing one watcher anchored on
    /// a common ancestor element.
    pub fn register_timeline(&mut self, timeline: RevealTimeline) -> Result<RegistrationHandle> {
        timeline.validate()?;

        if !self.elements.contains_key(&timeline.anchor) {
            return Err(RevealError::InvalidTarget {
                id: timeline.anchor.clone(),
            });
        }
        for step in &timeline.steps {
            for target in &step.targets {
                if !self.elements.contains_key(target) {
                    return Err(RevealError::InvalidTarget { id: target.clone() });
                }
            }
        }

        let id = RegistrationId::new();
        let motion = self.options.motion_enabled;
        let schedule = timeline.schedule();

        let steps: Vec<StepRuntime> = timeline
            .steps
            .into_iter()
            .zip(schedule)
            .map(|(step, start_offset_ms)| {
                let n = step.targets.len();
                StepRuntime {
                    targets: step.targets,
                    from: step.from,
                    to: step.to,
                    timing: step.timing,
                    start_offset_ms,
                    // With motion suppressed the final state applies
                    // immediately; a degraded reveal must never hide
                    // content.
                    resting: vec![if motion { 0.0 } else { 1.0 }; n],
                    playback: None,
                }
            })
            .collect();

        for step in &steps {
            for target in &step.targets {
                self.target_index
                    .entry(target.clone())
                    .or_default()
                    .push(id);
            }
        }

        let registration = Registration {
            anchor: timeline.anchor.clone(),
            watcher: TriggerWatcher::new(timeline.trigger),
            steps,
            watcher_live: motion,
            has_played: !motion,
            direction: Direction::Forward,
        };
        self.registrations.insert(id, registration);

        debug!(
            registration = id.0,
            anchor = %timeline.anchor,
            motion,
            "registered reveal"
        );
        self.events.push(RevealEvent::Registered {
            registration_id: id,
            anchor: timeline.anchor,
        });

        Ok(RegistrationHandle { id })
    }

    /// Release a registration: detach its watcher and freeze its targets
    /// at their current values (no snap to the final state).
    ///
    /// Idempotent — releasing an already-released handle is a no-op.
    pub fn release(&mut self, handle: RegistrationHandle) {
        let Some(reg) = self.registrations.remove(&handle.id) else {
            trace!(registration = handle.id.0, "release of dead handle ignored");
            return;
        };
        self.deposit_frozen(&reg);
        self.unindex(handle.id);
        debug!(registration = handle.id.0, anchor = %reg.anchor, "released reveal");
        self.events.push(RevealEvent::Released {
            registration_id: handle.id,
        });
    }

    /// Release every live registration. Iterates a snapshot of the current
    /// ids so the registry is never mutated while being walked.
    pub fn release_all(&mut self) {
        let mut ids: Vec<RegistrationId> = self.registrations.keys().copied().collect();
        ids.sort_by_key(|id| id.0);
        debug!(count = ids.len(), "releasing all reveals");
        for id in ids {
            self.release(RegistrationHandle { id });
        }
    }

    fn cancel(&mut self, id: RegistrationId) {
        let Some(reg) = self.registrations.remove(&id) else {
            return;
        };
        self.deposit_frozen(&reg);
        self.unindex(id);
        trace!(registration = id.0, anchor = %reg.anchor, "cancelled reveal");
        self.events.push(RevealEvent::Cancelled {
            registration_id: id,
        });
    }

    /// Record a departing registration's current styles so values hold
    /// after it is gone.
    fn deposit_frozen(&mut self, reg: &Registration) {
        for step in &reg.steps {
            for (idx, target) in step.targets.iter().enumerate() {
                let style = step.style_of(idx);
                self.frozen.entry(target.clone()).or_default().merge_from(&style);
            }
        }
    }

    fn unindex(&mut self, id: RegistrationId) {
        self.target_index.retain(|_, ids| {
            ids.retain(|rid| *rid != id);
            !ids.is_empty()
        });
    }

    // ========================================================================
    // Update cycle
    // ========================================================================

    /// Evaluate every live watcher against the new viewport, starting or
    /// reversing playbacks per each registration's trigger policy.
    pub fn on_scroll(&mut self, viewport: Viewport) {
        let Self {
            elements,
            registrations,
            events,
            ..
        } = self;

        for (id, reg) in registrations.iter_mut() {
            if !reg.watcher_live {
                continue;
            }
            let Some(rect) = elements.get(&reg.anchor) else {
                continue;
            };

            let crossing = reg.watcher.evaluate(rect, &viewport);
            match crossing {
                Some(Crossing::Entered) => {
                    events.push(RevealEvent::Entered {
                        registration_id: *id,
                        anchor: reg.anchor.clone(),
                    });
                    if reg.watcher.spec.mode != TriggerMode::Scrub {
                        let replay = reg.watcher.spec.mode == TriggerMode::PlayReverse;
                        if !reg.has_played || replay {
                            Self::start_playback(*id, reg, Direction::Forward, events);
                        }
                    }
                }
                Some(Crossing::ExitedBack) | Some(Crossing::ExitedForward) => {
                    events.push(RevealEvent::Exited {
                        registration_id: *id,
                        anchor: reg.anchor.clone(),
                    });
                    if reg.watcher.spec.mode == TriggerMode::PlayReverse
                        && crossing == Some(Crossing::ExitedBack)
                    {
                        Self::start_playback(*id, reg, Direction::Backward, events);
                    }
                }
                None => {}
            }

            // Scrub registrations take their progress straight from the
            // scroll position; no clock is involved.
            if reg.watcher.spec.mode == TriggerMode::Scrub {
                let progress = reg.watcher.spec.scroll_progress(rect, &viewport);
                for step in &mut reg.steps {
                    let eased = step.timing.easing.evaluate(progress);
                    step.resting = vec![eased; step.targets.len()];
                    step.playback = None;
                }
            }
        }
    }

    fn start_playback(
        id: RegistrationId,
        reg: &mut Registration,
        direction: Direction,
        events: &mut EventQueue,
    ) {
        reg.direction = direction;
        for step in &mut reg.steps {
            let fractions = step.current_fractions();
            step.playback = Some(match direction {
                // Forward playbacks honor the timeline offsets; reversal
                // runs every step back simultaneously, each over its own
                // duration.
                Direction::Forward => {
                    ActivePlayback::forward_from(fractions, &step.timing, step.start_offset_ms)
                }
                Direction::Backward => ActivePlayback::backward_from(fractions, &step.timing, 0.0),
            });
        }
        if direction == Direction::Forward {
            reg.has_played = true;
        }
        trace!(registration = id.0, ?direction, "playback started");
        events.push(RevealEvent::PlaybackStarted {
            registration_id: id,
            direction,
        });
    }

    /// Advance every running playback by `delta_ms` of wall time.
    pub fn advance(&mut self, delta_ms: f32) {
        let Self {
            registrations,
            events,
            ..
        } = self;

        for (id, reg) in registrations.iter_mut() {
            if !reg.is_animating() {
                continue;
            }
            for step in &mut reg.steps {
                if let Some(pb) = &mut step.playback {
                    if !pb.update(delta_ms) {
                        step.resting = pb.current_fractions();
                        step.playback = None;
                    }
                }
            }
            if !reg.is_animating() {
                events.push(RevealEvent::PlaybackFinished {
                    registration_id: *id,
                    direction: reg.direction,
                });
            }
        }
    }

    // ========================================================================
    // Value resolution
    // ========================================================================

    /// Current resolved style for an element: frozen residue from departed
    /// registrations, overlaid by live registrations in registration order.
    pub fn style_of(&self, element: &str) -> PropertyState {
        let mut out = self.frozen.get(element).cloned().unwrap_or_default();

        let Some(ids) = self.target_index.get(element) else {
            return out;
        };
        for id in ids {
            let Some(reg) = self.registrations.get(id) else {
                continue;
            };
            for step in &reg.steps {
                for (idx, target) in step.targets.iter().enumerate() {
                    if target == element {
                        out.merge_from(&step.style_of(idx));
                    }
                }
            }
        }
        out
    }

    /// Current value of one property on an element, if any registration or
    /// frozen residue drives it.
    pub fn value_of(&self, element: &str, property: crate::types::RevealProperty) -> Option<f64> {
        self.style_of(element).get(property)
    }

    // ========================================================================
    // Introspection & events
    // ========================================================================

    /// Number of registrations with a live watcher.
    pub fn watcher_count(&self) -> usize {
        self.registrations.values().filter(|r| r.watcher_live).count()
    }

    /// Number of live registrations (including detached ones).
    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    /// Whether any playback is currently running.
    pub fn is_animating(&self) -> bool {
        self.registrations.values().any(|r| r.is_animating())
    }

    /// Drain all pending events from the queue.
    pub fn drain_events(&mut self) -> impl Iterator<Item = RevealEvent> + '_ {
        self.events.drain()
    }

    /// Check if there are any pending events.
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Pop a single event from the queue.
    pub fn pop_event(&mut self) -> Option<RevealEvent> {
        self.events.pop()
    }
}

// The controller crosses thread boundaries in hosts that build the page
// off-thread, so it must stay Send.
static_assertions::assert_impl_all!(RevealController: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingFunction;
    use crate::timeline::TimelineStep;
    use crate::trigger::TriggerSpec;
    use crate::types::RevealProperty;

    const VIEW_H: f32 = 1000.0;

    /// A controller tracking one 400-unit card 2000 units down the page.
    fn controller_with_card() -> RevealController {
        let mut c = RevealController::new();
        c.track_element("card", Rect::new(0.0, 2000.0, 600.0, 400.0));
        c
    }

    fn fade_seq(mode_start: f32, reverse: bool) -> RevealSequence {
        let trigger = if reverse {
            TriggerSpec::play_reverse(mode_start)
        } else {
            TriggerSpec::once(mode_start)
        };
        RevealSequence::new(["card"])
            .from(PropertyState::new().opacity(0.0).y(40.0))
            .to(PropertyState::new().opacity(1.0).y(0.0))
            .timing(TimingSpec::new(800.0).with_easing(EasingFunction::Linear))
            .trigger(trigger)
    }

    fn scroll_into_view(c: &mut RevealController) {
        // Card top at 25% of the viewport: well inside any start line.
        c.on_scroll(Viewport::new(1750.0, VIEW_H));
    }

    fn scroll_far_above(c: &mut RevealController) {
        c.on_scroll(Viewport::new(0.0, VIEW_H));
    }

    #[test]
    fn test_initial_state_applied_on_register() {
        let mut c = controller_with_card();
        c.register(fade_seq(0.75, false)).unwrap();

        assert_eq!(c.value_of("card", RevealProperty::Opacity), Some(0.0));
        assert_eq!(c.value_of("card", RevealProperty::TranslateY), Some(40.0));
        assert_eq!(c.watcher_count(), 1);
    }

    #[test]
    fn test_converges_to_final_within_duration() {
        let mut c = controller_with_card();
        c.register(fade_seq(0.75, false)).unwrap();

        scroll_into_view(&mut c);
        assert!(c.is_animating());

        c.advance(400.0);
        let mid = c.value_of("card", RevealProperty::Opacity).unwrap();
        assert!((mid - 0.5).abs() < 1e-4);

        c.advance(400.0);
        assert!(!c.is_animating());
        assert_eq!(c.value_of("card", RevealProperty::Opacity), Some(1.0));
        assert_eq!(c.value_of("card", RevealProperty::TranslateY), Some(0.0));
    }

    #[test]
    fn test_end_to_end_once_does_not_revert() {
        let mut c = controller_with_card();
        c.register(fade_seq(0.75, false)).unwrap();

        scroll_into_view(&mut c);
        c.advance(900.0);
        assert_eq!(c.value_of("card", RevealProperty::Opacity), Some(1.0));

        // Scrolling back out must not undo a play-once reveal.
        scroll_far_above(&mut c);
        c.advance(900.0);
        assert_eq!(c.value_of("card", RevealProperty::Opacity), Some(1.0));
        assert_eq!(c.value_of("card", RevealProperty::TranslateY), Some(0.0));
    }

    #[test]
    fn test_play_reverse_returns_to_initial() {
        let mut c = controller_with_card();
        c.register(fade_seq(0.8, true)).unwrap();

        scroll_into_view(&mut c);
        c.advance(900.0);
        assert_eq!(c.value_of("card", RevealProperty::Opacity), Some(1.0));

        scroll_far_above(&mut c);
        assert!(c.is_animating());
        c.advance(900.0);
        assert_eq!(c.value_of("card", RevealProperty::Opacity), Some(0.0));
        assert_eq!(c.value_of("card", RevealProperty::TranslateY), Some(40.0));
    }

    #[test]
    fn test_reverse_mid_flight_from_current_value() {
        let mut c = controller_with_card();
        c.register(fade_seq(0.8, true)).unwrap();

        scroll_into_view(&mut c);
        c.advance(400.0); // halfway up

        scroll_far_above(&mut c);
        c.advance(400.0); // halfway back over the full duration
        let opacity = c.value_of("card", RevealProperty::Opacity).unwrap();
        assert!((opacity - 0.25).abs() < 1e-3);

        c.advance(400.0);
        assert_eq!(c.value_of("card", RevealProperty::Opacity), Some(0.0));
    }

    #[test]
    fn test_stagger_start_times() {
        let mut c = RevealController::new();
        for i in 0..3 {
            c.track_element(
                format!("item-{i}"),
                Rect::new(0.0, 2000.0 + 50.0 * i as f32, 200.0, 40.0),
            );
        }

        let seq = RevealSequence::new(["item-0", "item-1", "item-2"])
            .from(PropertyState::new().opacity(0.0))
            .to(PropertyState::new().opacity(1.0))
            .timing(
                TimingSpec::new(800.0)
                    .with_stagger(100.0)
                    .with_easing(EasingFunction::Linear),
            )
            .trigger(TriggerSpec::once(0.8));
        c.register(seq).unwrap();

        c.on_scroll(Viewport::new(1750.0, VIEW_H));

        // Item i starts i × 100 ms after the trigger.
        c.advance(100.0);
        assert!(c.value_of("item-0", RevealProperty::Opacity).unwrap() > 0.0);
        assert_eq!(c.value_of("item-1", RevealProperty::Opacity), Some(0.0));
        assert_eq!(c.value_of("item-2", RevealProperty::Opacity), Some(0.0));

        c.advance(100.0);
        assert!(c.value_of("item-1", RevealProperty::Opacity).unwrap() > 0.0);
        assert_eq!(c.value_of("item-2", RevealProperty::Opacity), Some(0.0));

        c.advance(100.0);
        assert!(c.value_of("item-2", RevealProperty::Opacity).unwrap() > 0.0);

        // Everything settles after the stagger tail.
        c.advance(800.0);
        for i in 0..3 {
            assert_eq!(
                c.value_of(&format!("item-{i}"), RevealProperty::Opacity),
                Some(1.0)
            );
        }
    }

    #[test]
    fn test_invalid_target_creates_no_watcher() {
        let mut c = controller_with_card();

        let err = c.register(RevealSequence::fade_up("ghost")).unwrap_err();
        assert_eq!(
            err,
            RevealError::InvalidTarget {
                id: "ghost".to_string()
            }
        );
        assert_eq!(c.watcher_count(), 0);
        assert_eq!(c.registration_count(), 0);
    }

    #[test]
    fn test_invalid_timing_rejected() {
        let mut c = controller_with_card();

        let seq = fade_seq(0.8, false).timing(TimingSpec::new(0.0));
        assert!(matches!(
            c.register(seq),
            Err(RevealError::InvalidTiming(_))
        ));
        assert_eq!(c.watcher_count(), 0);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut c = controller_with_card();
        let handle = c.register(fade_seq(0.8, false)).unwrap();
        assert_eq!(c.watcher_count(), 1);

        c.release(handle);
        assert_eq!(c.watcher_count(), 0);

        // Second release: no error, no event, nothing to detach.
        let _ = c.drain_events().count();
        c.release(handle);
        assert_eq!(c.watcher_count(), 0);
        assert!(!c.has_pending_events());
    }

    #[test]
    fn test_release_freezes_intermediate_values() {
        let mut c = controller_with_card();
        let handle = c.register(fade_seq(0.8, false)).unwrap();

        scroll_into_view(&mut c);
        c.advance(400.0);
        c.release(handle);

        // Values hold where the interpolation was cut, no snap to final.
        let opacity = c.value_of("card", RevealProperty::Opacity).unwrap();
        assert!((opacity - 0.5).abs() < 1e-4);

        c.advance(1000.0);
        let opacity = c.value_of("card", RevealProperty::Opacity).unwrap();
        assert!((opacity - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_release_all_detaches_everything() {
        let mut c = controller_with_card();
        c.track_element("other", Rect::new(0.0, 4000.0, 600.0, 400.0));

        c.register(fade_seq(0.8, true)).unwrap();
        c.register(RevealSequence::fade_up("other")).unwrap();
        assert_eq!(c.watcher_count(), 2);

        c.release_all();
        assert_eq!(c.watcher_count(), 0);
        assert_eq!(c.registration_count(), 0);

        // Later scroll churn reaches no watcher and emits nothing.
        let _ = c.drain_events().count();
        scroll_into_view(&mut c);
        c.on_scroll(Viewport::new(3500.0, VIEW_H));
        c.advance(500.0);
        assert!(!c.has_pending_events());
        assert!(!c.is_animating());
    }

    #[test]
    fn test_unreleased_watchers_stay_alive() {
        // The deliberate leak: without release, scroll churn never collects
        // a registration.
        let mut c = controller_with_card();
        c.register(fade_seq(0.8, true)).unwrap();

        for i in 0..50 {
            c.on_scroll(Viewport::new((i % 10) as f32 * 300.0, VIEW_H));
            c.advance(16.7);
        }
        assert_eq!(c.watcher_count(), 1);
        assert_eq!(c.registration_count(), 1);
    }

    #[test]
    fn test_timeline_offsets_order_steps() {
        let mut c = RevealController::new();
        c.track_element("hero", Rect::new(0.0, 0.0, 1280.0, 900.0));
        c.track_element("headline", Rect::new(100.0, 200.0, 800.0, 100.0));
        c.track_element("subtext", Rect::new(100.0, 320.0, 800.0, 60.0));

        let timeline = RevealTimeline::new("hero")
            .trigger(TriggerSpec::once(0.85))
            .step(
                TimelineStep::new(["headline"])
                    .from(PropertyState::new().opacity(0.0))
                    .to(PropertyState::new().opacity(1.0))
                    .timing(TimingSpec::new(600.0).with_easing(EasingFunction::Linear)),
            )
            .step(
                TimelineStep::new(["subtext"])
                    .from(PropertyState::new().opacity(0.0))
                    .to(PropertyState::new().opacity(1.0))
                    .timing(TimingSpec::new(600.0).with_easing(EasingFunction::Linear))
                    .position(-300.0),
            );
        c.register_timeline(timeline).unwrap();

        // Hero is in the initial viewport: plays on the first scroll event.
        c.on_scroll(Viewport::new(0.0, VIEW_H));

        // 150 ms in: headline is moving, subtext still waiting (starts at 300).
        c.advance(150.0);
        assert!(c.value_of("headline", RevealProperty::Opacity).unwrap() > 0.0);
        assert_eq!(c.value_of("subtext", RevealProperty::Opacity), Some(0.0));

        // 450 ms in: subtext underway before headline finishes (overlap).
        c.advance(300.0);
        let headline = c.value_of("headline", RevealProperty::Opacity).unwrap();
        let subtext = c.value_of("subtext", RevealProperty::Opacity).unwrap();
        assert!(headline < 1.0);
        assert!(subtext > 0.0);

        // Both settle by the timeline total (900 ms).
        c.advance(500.0);
        assert_eq!(c.value_of("headline", RevealProperty::Opacity), Some(1.0));
        assert_eq!(c.value_of("subtext", RevealProperty::Opacity), Some(1.0));
    }

    #[test]
    fn test_scrub_tracks_scroll_bidirectionally() {
        let mut c = RevealController::new();
        c.track_element("backdrop", Rect::new(0.0, 2000.0, 1280.0, 400.0));

        let seq = RevealSequence::new(["backdrop"])
            .from(PropertyState::new().y(0.0))
            .to(PropertyState::new().y(-120.0))
            .timing(TimingSpec::new(1.0).with_easing(EasingFunction::Linear))
            .trigger(TriggerSpec::scrub(1.0, 0.0));
        c.register(seq).unwrap();

        // Mid-window: y halfway; no clock needed.
        c.on_scroll(Viewport::new(1700.0, VIEW_H));
        let y = c.value_of("backdrop", RevealProperty::TranslateY).unwrap();
        assert!((y + 60.0).abs() < 1e-3);
        assert!(!c.is_animating());

        // Further down, then back up: progress follows both ways.
        c.on_scroll(Viewport::new(2400.0, VIEW_H));
        assert!((c.value_of("backdrop", RevealProperty::TranslateY).unwrap() + 120.0).abs() < 1e-3);

        c.on_scroll(Viewport::new(1000.0, VIEW_H));
        assert!((c.value_of("backdrop", RevealProperty::TranslateY).unwrap() - 0.0).abs() < 1e-3);
    }

    #[test]
    fn test_remove_element_cancels_silently() {
        let mut c = controller_with_card();
        c.register(fade_seq(0.8, false)).unwrap();

        scroll_into_view(&mut c);
        c.advance(400.0);
        let _ = c.drain_events().count();

        c.remove_element("card");
        assert_eq!(c.watcher_count(), 0);
        assert_eq!(c.registration_count(), 0);

        let events: Vec<_> = c.drain_events().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], RevealEvent::Cancelled { .. }));

        // Values froze where the playback was cut.
        let opacity = c.value_of("card", RevealProperty::Opacity).unwrap();
        assert!((opacity - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_motion_disabled_degrades_to_visible() {
        let mut c = RevealController::with_options(ControllerOptions {
            motion_enabled: false,
        });
        c.track_element("card", Rect::new(0.0, 2000.0, 600.0, 400.0));

        let handle = c.register(fade_seq(0.8, true)).unwrap();

        // Final state applies immediately; nothing is armed or hidden.
        assert_eq!(c.watcher_count(), 0);
        assert_eq!(c.value_of("card", RevealProperty::Opacity), Some(1.0));
        assert_eq!(c.value_of("card", RevealProperty::TranslateY), Some(0.0));

        scroll_into_view(&mut c);
        c.advance(500.0);
        assert!(!c.is_animating());

        // Release still balances the registration.
        c.release(handle);
        assert_eq!(c.registration_count(), 0);
    }

    #[test]
    fn test_event_stream_for_full_cycle() {
        let mut c = controller_with_card();
        let handle = c.register(fade_seq(0.8, true)).unwrap();

        scroll_into_view(&mut c);
        c.advance(900.0);
        scroll_far_above(&mut c);
        c.advance(900.0);
        c.release(handle);

        let events: Vec<_> = c.drain_events().collect();
        let kinds: Vec<&str> = events
            .iter()
            .map(|e| match e {
                RevealEvent::Registered { .. } => "registered",
                RevealEvent::Entered { .. } => "entered",
                RevealEvent::Exited { .. } => "exited",
                RevealEvent::PlaybackStarted { .. } => "started",
                RevealEvent::PlaybackFinished { .. } => "finished",
                RevealEvent::Cancelled { .. } => "cancelled",
                RevealEvent::Released { .. } => "released",
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                "registered",
                "entered",
                "started",
                "finished",
                "exited",
                "started",
                "finished",
                "released"
            ]
        );
    }

    #[test]
    fn test_later_registration_overrides_earlier() {
        let mut c = controller_with_card();
        c.register(
            RevealSequence::new(["card"])
                .from(PropertyState::new().opacity(0.2))
                .to(PropertyState::new().opacity(1.0))
                .trigger(TriggerSpec::once(0.8)),
        )
        .unwrap();
        c.register(
            RevealSequence::new(["card"])
                .from(PropertyState::new().opacity(0.7))
                .to(PropertyState::new().opacity(1.0))
                .trigger(TriggerSpec::once(0.8)),
        )
        .unwrap();

        // Both armed; the later registration wins the overlay.
        assert_eq!(c.value_of("card", RevealProperty::Opacity), Some(0.7));
    }
}
