//! Time-based playback state for a triggered step.
//!
//! An `ActivePlayback` advances a group of targets from their current
//! reveal fractions toward an end fraction (1.0 forward, 0.0 backward),
//! honoring a start delay, per-target stagger, and an easing curve. The
//! fraction is the single progress scalar the controller later feeds into
//! property interpolation, so reversing mid-flight simply starts a new
//! playback from the captured fractions — the counterpart of transition
//! retargeting.

use crate::easing::EasingFunction;
use crate::sequence::TimingSpec;
use crate::types::Direction;

/// A running tween over one step's targets.
#[derive(Debug, Clone)]
pub struct ActivePlayback {
    /// Fraction each target starts from, in declaration order.
    start_fractions: Vec<f32>,
    /// Fraction every target converges to.
    end_fraction: f32,
    duration_ms: f32,
    delay_ms: f32,
    stagger_ms: f32,
    easing: EasingFunction,
    elapsed_ms: f32,
    direction: Direction,
    finished: bool,
}

impl ActivePlayback {
    /// Start a forward playback toward fraction 1.0.
    ///
    /// `extra_delay_ms` folds in the step's timeline offset on top of the
    /// timing spec's own delay.
    pub fn forward_from(
        start_fractions: Vec<f32>,
        timing: &TimingSpec,
        extra_delay_ms: f32,
    ) -> Self {
        Self::new(start_fractions, 1.0, timing, extra_delay_ms, Direction::Forward)
    }

    /// Start a backward playback toward fraction 0.0.
    pub fn backward_from(
        start_fractions: Vec<f32>,
        timing: &TimingSpec,
        extra_delay_ms: f32,
    ) -> Self {
        Self::new(start_fractions, 0.0, timing, extra_delay_ms, Direction::Backward)
    }

    fn new(
        start_fractions: Vec<f32>,
        end_fraction: f32,
        timing: &TimingSpec,
        extra_delay_ms: f32,
        direction: Direction,
    ) -> Self {
        Self {
            start_fractions,
            end_fraction,
            duration_ms: timing.duration_ms,
            delay_ms: timing.delay_ms + extra_delay_ms,
            stagger_ms: timing.stagger_ms,
            easing: timing.easing,
            elapsed_ms: 0.0,
            direction,
            finished: false,
        }
    }

    /// Number of targets this playback drives.
    pub fn target_count(&self) -> usize {
        self.start_fractions.len()
    }

    /// Playback direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the playback has run to completion.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Wall time from start until the last target settles.
    pub fn total_ms(&self) -> f32 {
        let staggered = self.start_fractions.len().saturating_sub(1) as f32 * self.stagger_ms;
        self.delay_ms + staggered + self.duration_ms
    }

    /// Advance by `delta_ms`. Returns `true` while the playback is still
    /// running, `false` once every target has settled.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if self.finished {
            return false;
        }
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms >= self.total_ms() {
            self.finished = true;
        }
        !self.finished
    }

    /// Current reveal fraction of target `idx`.
    pub fn fraction_of(&self, idx: usize) -> f32 {
        let start = self
            .start_fractions
            .get(idx)
            .copied()
            .unwrap_or(self.end_fraction);
        if self.finished {
            return self.end_fraction;
        }

        let local_start = self.delay_ms + idx as f32 * self.stagger_ms;
        let local = ((self.elapsed_ms - local_start) / self.duration_ms).clamp(0.0, 1.0);
        let eased = self.easing.evaluate(local);
        start + (self.end_fraction - start) * eased
    }

    /// Current fractions of every target, in declaration order.
    pub fn current_fractions(&self) -> Vec<f32> {
        (0..self.start_fractions.len())
            .map(|i| self.fraction_of(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(duration_ms: f32) -> TimingSpec {
        TimingSpec::new(duration_ms).with_easing(EasingFunction::Linear)
    }

    #[test]
    fn test_forward_converges_within_duration() {
        let mut pb = ActivePlayback::forward_from(vec![0.0], &linear(800.0), 0.0);

        assert_eq!(pb.fraction_of(0), 0.0);

        assert!(pb.update(400.0));
        assert!((pb.fraction_of(0) - 0.5).abs() < 1e-4);

        assert!(!pb.update(400.0));
        assert!(pb.is_finished());
        assert_eq!(pb.fraction_of(0), 1.0);
    }

    #[test]
    fn test_stagger_offsets_each_target() {
        let timing = linear(800.0).with_stagger(100.0);
        let mut pb = ActivePlayback::forward_from(vec![0.0; 3], &timing, 0.0);

        // At t=100: target 0 is 1/8 in, target 1 just starting, target 2 idle.
        pb.update(100.0);
        assert!((pb.fraction_of(0) - 0.125).abs() < 1e-4);
        assert_eq!(pb.fraction_of(1), 0.0);
        assert_eq!(pb.fraction_of(2), 0.0);

        // At t=200: target 2 starts.
        pb.update(100.0);
        assert!((pb.fraction_of(1) - 0.125).abs() < 1e-4);
        assert_eq!(pb.fraction_of(2), 0.0);

        // Total runtime covers the stagger tail.
        assert_eq!(pb.total_ms(), 1000.0);
        assert!(pb.update(799.0));
        assert!(!pb.update(1.0));
        assert_eq!(pb.current_fractions(), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_delay_holds_start_values() {
        let timing = linear(400.0).with_delay(200.0);
        let mut pb = ActivePlayback::forward_from(vec![0.0], &timing, 0.0);

        pb.update(150.0);
        assert_eq!(pb.fraction_of(0), 0.0);

        pb.update(100.0);
        assert!(pb.fraction_of(0) > 0.0);
    }

    #[test]
    fn test_extra_delay_folds_into_schedule() {
        let mut pb = ActivePlayback::forward_from(vec![0.0], &linear(400.0), 300.0);
        assert_eq!(pb.total_ms(), 700.0);

        pb.update(300.0);
        assert_eq!(pb.fraction_of(0), 0.0);
        pb.update(200.0);
        assert!((pb.fraction_of(0) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_backward_returns_to_zero() {
        let mut pb = ActivePlayback::backward_from(vec![1.0], &linear(800.0), 0.0);
        assert_eq!(pb.direction(), Direction::Backward);

        pb.update(400.0);
        assert!((pb.fraction_of(0) - 0.5).abs() < 1e-4);

        pb.update(400.0);
        assert_eq!(pb.fraction_of(0), 0.0);
    }

    #[test]
    fn test_reverse_from_partial_progress() {
        // Reversing mid-flight starts from the captured fraction, not 1.0.
        let mut pb = ActivePlayback::backward_from(vec![0.6], &linear(600.0), 0.0);

        assert!((pb.fraction_of(0) - 0.6).abs() < 1e-4);
        pb.update(300.0);
        assert!((pb.fraction_of(0) - 0.3).abs() < 1e-4);
        pb.update(300.0);
        assert_eq!(pb.fraction_of(0), 0.0);
    }

    #[test]
    fn test_update_after_finish_is_inert() {
        let mut pb = ActivePlayback::forward_from(vec![0.0], &linear(100.0), 0.0);
        assert!(!pb.update(200.0));
        assert!(!pb.update(50.0));
        assert_eq!(pb.fraction_of(0), 1.0);
    }
}
