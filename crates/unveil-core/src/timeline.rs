//! Grouped reveals sharing one trigger.
//!
//! A `RevealTimeline` plays several steps off a single watcher anchored to
//! a common ancestor element — the hero pattern where badge, headline,
//! subtext, and call-to-action reveal as one choreographed unit. Each step
//! carries a `position_ms` offset relative to the end of the previous step:
//! negative values overlap the steps, zero chains them end-to-start,
//! positive inserts a gap. Steps begin in declaration order and no step can
//! start before the timeline origin.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RevealError};
use crate::sequence::TimingSpec;
use crate::trigger::TriggerSpec;
use crate::types::PropertyState;

/// One step of a timeline: a sequence body without its own trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineStep {
    /// Ordered, non-empty list of tracked element ids.
    pub targets: Vec<String>,
    /// Property values applied at registration.
    pub from: PropertyState,
    /// Property values the step converges to.
    pub to: PropertyState,
    /// Timing parameters for this step.
    pub timing: TimingSpec,
    /// Offset relative to the previous step's end. Negative overlaps.
    pub position_ms: f32,
}

impl TimelineStep {
    /// Create a step over the given targets.
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

    /// Set the offset relative to the previous step's end.
    pub fn position(mut self, position_ms: f32) -> Self {
        self.position_ms = position_ms;
        self
    }

    /// Wall time this step takes once started.
    pub fn total_duration_ms(&self) -> f32 {
        self.timing.total_for(self.targets.len())
    }
}

/// An ordered group of steps sharing one watcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealTimeline {
    /// Tracked element the shared watcher observes.
    pub anchor: String,
    /// Trigger policy for the whole group.
    pub trigger: TriggerSpec,
    /// Steps in declaration order.
    pub steps: Vec<TimelineStep>,
}

impl RevealTimeline {
    /// Create an empty timeline anchored on `anchor`.
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            trigger: TriggerSpec::default(),
            steps: Vec::new(),
        }
    }

    /// Set the trigger policy.
    pub fn trigger(mut self, trigger: TriggerSpec) -> Self {
        self.trigger = trigger;
        self
    }

    /// Append a step.
    pub fn step(mut self, step: TimelineStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Absolute start offset of each step from the timeline origin.
    ///
    /// The cursor advances by each step's total duration; `position_ms`
    /// shifts the next start relative to the cursor and is floored so no
    /// step starts before the origin.
    pub fn schedule(&self) -> Vec<f32> {
        let mut starts = Vec::with_capacity(self.steps.len());
        let mut cursor = 0.0_f32;
        for step in &self.steps {
            let start = (cursor + step.position_ms).max(0.0);
            cursor = start + step.total_duration_ms();
            starts.push(start);
        }
        starts
    }

    /// Total duration of the group: the latest step end. Overlapping
    /// offsets shorten this below the sum of member durations.
    pub fn total_duration_ms(&self) -> f32 {
        self.schedule()
            .iter()
            .zip(&self.steps)
            .map(|(start, step)| start + step.total_duration_ms())
            .fold(0.0, f32::max)
    }

    /// Check structural invariants across all steps.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(RevealError::EmptyTargets);
        }
        for step in &self.steps {
            if step.targets.is_empty() {
                return Err(RevealError::EmptyTargets);
            }
            if !step.position_ms.is_finite() {
                return Err(RevealError::InvalidTiming(format!(
                    "step position must be finite, got {}",
                    step.position_ms
                )));
            }
            step.timing.validate()?;
        }
        Ok(())
    }
}
