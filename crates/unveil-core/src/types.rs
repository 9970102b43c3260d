//! Core types for the reveal engine.
//!
//! This module defines the fundamental vocabulary shared across the crate:
//! - `RevealProperty`: the visual properties a reveal can drive
//! - `PropertyState`: a property → value snapshot (initial/final states)
//! - `RegistrationId`: unique identifier for a controller registration
//! - `Direction`: playback direction of a running reveal

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a controller registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistrationId(pub u64);

impl RegistrationId {
    /// Generate a new unique registration ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RegistrationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Playback direction of a running reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Playing from the initial state toward the final state.
    Forward,
    /// Playing from the current state back toward the initial state.
    Backward,
}

/// Visual properties a reveal can drive.
///
/// Values are plain scalars; translation is in document-space units, scale
/// is a factor, rotation is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealProperty {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
}

impl RevealProperty {
    /// The property's resting value when no state mentions it.
    pub fn identity(&self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::TranslateX | Self::TranslateY | Self::Rotate => 0.0,
        }
    }
}

/// A snapshot of visual property values, used for the initial and final
/// states of a reveal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyState {
    values: HashMap<RevealProperty, f64>,
}

impl PropertyState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value.
    pub fn set(&mut self, property: RevealProperty, value: f64) {
        self.values.insert(property, value);
    }

    /// Get a property value, if present.
    pub fn get(&self, property: RevealProperty) -> Option<f64> {
        self.values.get(&property).copied()
    }

    /// Get a property value, falling back to the property's identity.
    pub fn get_or_identity(&self, property: RevealProperty) -> f64 {
        self.get(property).unwrap_or_else(|| property.identity())
    }

    /// Builder: set opacity.
    pub fn opacity(mut self, value: f64) -> Self {
        self.set(RevealProperty::Opacity, value);
        self
    }

    /// Builder: set horizontal offset.
    pub fn x(mut self, value: f64) -> Self {
        self.set(RevealProperty::TranslateX, value);
        self
    }

    /// Builder: set vertical offset.
    pub fn y(mut self, value: f64) -> Self {
        self.set(RevealProperty::TranslateY, value);
        self
    }

    /// Builder: set scale factor.
    pub fn scale(mut self, value: f64) -> Self {
        self.set(RevealProperty::Scale, value);
        self
    }

    /// Builder: set rotation in degrees.
    pub fn rotate(mut self, value: f64) -> Self {
        self.set(RevealProperty::Rotate, value);
        self
    }

    /// Check if the state holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of properties in the state.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over all property-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&RevealProperty, &f64)> {
        self.values.iter()
    }

    /// Union of the properties named by `self` and `other`.
    pub fn union_properties(&self, other: &Self) -> Vec<RevealProperty> {
        let mut props: Vec<RevealProperty> = self.values.keys().copied().collect();
        for p in other.values.keys() {
            if !props.contains(p) {
                props.push(*p);
            }
        }
        props
    }

    /// Overlay `other` on top of `self`: properties present in `other`
    /// replace those in `self`.
    pub fn merge_from(&mut self, other: &Self) {
        for (p, v) in other.iter() {
            self.values.insert(*p, *v);
        }
    }
}
