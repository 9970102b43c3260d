//! Declarative reveal sequences.
//!
//! A `RevealSequence` describes one animation unit: which tracked elements
//! it drives, the initial and final property states, timing (duration,
//! easing, per-target stagger, start delay), and the viewport trigger that
//! starts it. Sequences are plain data; the controller turns them into
//! armed watchers and running interpolations.
//!
//! # Example
//!
//! ```
//! use unveil_core::sequence::{RevealSequence, TimingSpec};
//! use unveil_core::trigger::TriggerSpec;
//! use unveil_core::types::PropertyState;
//!
//! let seq = RevealSequence::new(["services.card-0", "services.card-1"])
//!     .from(PropertyState::new().opacity(0.0).y(40.0))
//!     .to(PropertyState::new().opacity(1.0).y(0.0))
//!     .timing(TimingSpec::new(800.0).with_stagger(100.0))
//!     .trigger(TriggerSpec::play_reverse(0.8));
//! assert!(seq.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::easing::EasingFunction;
use crate::error::{Result, RevealError};
use crate::timeline::{RevealTimeline, TimelineStep};
use crate::trigger::TriggerSpec;
use crate::types::PropertyState;

/// Timing parameters for one reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSpec {
    /// Duration of the tween per target, in milliseconds.
    pub duration_ms: f32,
    /// Delay before the first target starts, in milliseconds.
    pub delay_ms: f32,
    /// Per-target stagger: target *i* starts `i × stagger_ms` after the
    /// first. The first target always has zero stagger delay.
    pub stagger_ms: f32,
    /// Easing curve applied to each target's local progress.
    pub easing: EasingFunction,
}

impl Default for TimingSpec {
    fn default() -> Self {
        Self {
            duration_ms: 800.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            easing: EasingFunction::PowerOut { exponent: 4 },
        }
    }
}

impl TimingSpec {
    /// Create a timing spec with the given duration.
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    /// Set the start delay.
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the per-target stagger.
    pub fn with_stagger(mut self, stagger_ms: f32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Total wall time to play `target_count` targets to completion.
    pub fn total_for(&self, target_count: usize) -> f32 {
        let staggered = target_count.saturating_sub(1) as f32 * self.stagger_ms;
        self.delay_ms + staggered + self.duration_ms
    }

    /// Check timing invariants: positive finite duration, non-negative
    /// finite delay and stagger.
    pub fn validate(&self) -> Result<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(RevealError::InvalidTiming(format!(
                "duration must be positive, got {}",
                self.duration_ms
            )));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(RevealError::InvalidTiming(format!(
                "delay must be non-negative, got {}",
                self.delay_ms
            )));
        }
        if !self.stagger_ms.is_finite() || self.stagger_ms < 0.0 {
            return Err(RevealError::InvalidTiming(format!(
                "stagger must be non-negative, got {}",
                self.stagger_ms
            )));
        }
        Ok(())
    }
}

/// A declarative reveal: targets, endpoint states, timing, and trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevealSequence {
    /// Ordered, non-empty list of tracked element ids. Stagger delays are
    /// applied in this order.
    pub targets: Vec<String>,
    /// Property values applied as soon as registration succeeds.
    pub from: PropertyState,
    /// Property values the tween converges to.
    pub to: PropertyState,
    /// Timing parameters.
    pub timing: TimingSpec,
    /// Viewport-intersection policy. The first target doubles as the
    /// trigger anchor.
    pub trigger: TriggerSpec,
}

impl RevealSequence {
    /// Create a sequence over the given targets.
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// The standard single-element reveal: fade in while drifting up from
    /// 60 units below, over one second.
    pub fn fade_up(target: impl Into<String>) -> Self {
        Self::new([target.into()])
            .from(PropertyState::new().opacity(0.0).y(60.0))
            .to(PropertyState::new().opacity(1.0).y(0.0))
            .timing(TimingSpec::new(1000.0))
            .trigger(TriggerSpec::play_reverse(0.85))
    }

    /// The standard list reveal: each item fades up 40 units, offset by
    /// `stagger_ms` from the previous one.
    pub fn stagger_fade_up<I, S>(targets: I, stagger_ms: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(targets)
            .from(PropertyState::new().opacity(0.0).y(40.0))
            .to(PropertyState::new().opacity(1.0).y(0.0))
            .timing(TimingSpec::new(800.0).with_stagger(stagger_ms))
            .trigger(TriggerSpec::play_reverse(0.8))
    }

    /// Set the initial state.
    pub fn from(mut self, state: PropertyState) -> Self {
        self.from = state;
        self
    }

    /// Set the final state.
    pub fn to(mut self, state: PropertyState) -> Self {
        self.to = state;
        self
    }

    /// Set the timing parameters.
    pub fn timing(mut self, timing: TimingSpec) -> Self {
        self.timing = timing;
        self
    }

    /// Set the trigger policy.
    pub fn trigger(mut self, trigger: TriggerSpec) -> Self {
        self.trigger = trigger;
        self
    }

    /// Check structural invariants (timing ranges, non-empty targets).
    /// Target existence is checked by the controller at registration time.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(RevealError::EmptyTargets);
        }
        self.timing.validate()
    }

    /// Convert into a single-step timeline anchored on the first target.
    /// An empty target list yields an empty anchor, which registration
    /// rejects as `InvalidTarget`.
    pub fn into_timeline(self) -> RevealTimeline {
        let anchor = self.targets.first().cloned().unwrap_or_default();
        RevealTimeline::new(anchor).trigger(self.trigger).step(
            TimelineStep::new(self.targets)
                .from(self.from)
                .to(self.to)
                .timing(self.timing),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RevealProperty;

    #[test]
    fn test_timing_defaults() {
        let timing = TimingSpec::default();
        assert_eq!(timing.duration_ms, 800.0);
        assert_eq!(timing.delay_ms, 0.0);
        assert_eq!(timing.stagger_ms, 0.0);
        assert_eq!(timing.easing, EasingFunction::PowerOut { exponent: 4 });
    }

    #[test]
    fn test_timing_total_for() {
        let timing = TimingSpec::new(800.0).with_stagger(100.0).with_delay(50.0);
        assert_eq!(timing.total_for(1), 850.0);
        assert_eq!(timing.total_for(3), 1050.0);
        // Zero targets degenerate to delay + duration.
        assert_eq!(timing.total_for(0), 850.0);
    }

    #[test]
    fn test_timing_validation() {
        assert!(TimingSpec::new(800.0).validate().is_ok());
        assert!(matches!(
            TimingSpec::new(0.0).validate(),
            Err(RevealError::InvalidTiming(_))
        ));
        assert!(matches!(
            TimingSpec::new(-1.0).validate(),
            Err(RevealError::InvalidTiming(_))
        ));
        assert!(matches!(
            TimingSpec::new(800.0).with_stagger(-0.1).validate(),
            Err(RevealError::InvalidTiming(_))
        ));
        assert!(matches!(
            TimingSpec::new(800.0).with_delay(f32::NAN).validate(),
            Err(RevealError::InvalidTiming(_))
        ));
    }

    #[test]
    fn test_sequence_validation() {
        let seq = RevealSequence::fade_up("hero.headline");
        assert!(seq.validate().is_ok());

        let empty = RevealSequence::new(Vec::<String>::new());
        assert!(matches!(empty.validate(), Err(RevealError::EmptyTargets)));
    }

    #[test]
    fn test_fade_up_preset() {
        let seq = RevealSequence::fade_up("hero.headline");
        assert_eq!(seq.targets, vec!["hero.headline".to_string()]);
        assert_eq!(seq.from.get(RevealProperty::Opacity), Some(0.0));
        assert_eq!(seq.from.get(RevealProperty::TranslateY), Some(60.0));
        assert_eq!(seq.to.get(RevealProperty::Opacity), Some(1.0));
        assert_eq!(seq.timing.duration_ms, 1000.0);
    }

    #[test]
    fn test_into_timeline() {
        let seq = RevealSequence::stagger_fade_up(["a", "b", "c"], 100.0);
        let timeline = seq.into_timeline();

        assert_eq!(timeline.anchor, "a");
        assert_eq!(timeline.steps.len(), 1);
        assert_eq!(timeline.steps[0].targets.len(), 3);
        assert_eq!(timeline.steps[0].timing.stagger_ms, 100.0);
    }

    #[test]
    fn test_sequence_serialization() {
        let seq = RevealSequence::stagger_fade_up(["a", "b"], 100.0);
        let json = serde_json::to_string(&seq).unwrap();
        let parsed: RevealSequence = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.targets, seq.targets);
        assert_eq!(parsed.timing, seq.timing);
    }
}
