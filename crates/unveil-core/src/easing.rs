//! Easing functions for reveal timing.
//!
//! Implements the standard CSS timing functions plus the power family the
//! original tween vocabulary leans on (`PowerOut { exponent: 4 }` is the
//! quartic ease-out most reveals use):
//! - Linear
//! - Ease, EaseIn, EaseOut, EaseInOut (standard CSS curves)
//! - CubicBezier (custom bezier curves)
//! - PowerIn / PowerOut / PowerInOut (polynomial curves of a given exponent)
//!
//! # Usage
//!
//! ```
//! use unveil_core::easing::EasingFunction;
//!
//! let ease = EasingFunction::power_out(4);
//! let progress = ease.evaluate(0.5); // Get eased progress at 50%
//! ```

use serde::{Deserialize, Serialize};

/// Easing function for reveal timing.
///
/// Easing functions map a linear progress value (0.0 to 1.0) to an eased
/// output value, controlling the rate of change over time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,

    /// CSS `ease` - Slow start, fast middle, slow end.
    /// Equivalent to `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    Ease,

    /// CSS `ease-in` - Slow start, accelerating.
    /// Equivalent to `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,

    /// CSS `ease-out` - Fast start, decelerating.
    /// Equivalent to `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,

    /// CSS `ease-in-out` - Slow start and end, fast middle.
    /// Equivalent to `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,

    /// Custom cubic bezier curve.
    /// Parameters: (x1, y1, x2, y2) - control points.
    /// x values must be in [0, 1], y values can be any float.
    CubicBezier {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },

    /// Polynomial ease-in: `t^exponent`. Slow start, hard finish.
    PowerIn { exponent: u32 },

    /// Polynomial ease-out: `1 - (1-t)^exponent`. Hard start, long tail.
    /// Exponent 4 matches the quartic `power3.out` reveal curve.
    PowerOut { exponent: u32 },

    /// Polynomial ease-in-out: symmetric acceleration and deceleration.
    PowerInOut { exponent: u32 },
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::Ease
    }
}

impl EasingFunction {
    /// Evaluate the easing function at the given progress.
    ///
    /// # Arguments
    /// * `t` - Progress value from 0.0 to 1.0
    ///
    /// # Returns
    /// Eased progress value (may be outside 0.0-1.0 for some bezier curves)
    pub fn evaluate(&self, t: f32) -> f32 {
        // Clamp input to valid range
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(*x1, *y1, *x2, *y2, t),
            Self::PowerIn { exponent } => power_in(*exponent, t),
            Self::PowerOut { exponent } => power_out(*exponent, t),
            Self::PowerInOut { exponent } => power_in_out(*exponent, t),
        }
    }

    /// Create a custom cubic bezier easing function.
    ///
    /// # Arguments
    /// * `x1`, `y1` - First control point
    /// * `x2`, `y2` - Second control point
    ///
    /// # Panics
    /// Panics if x1 or x2 are outside [0, 1].
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Create a polynomial ease-in of the given exponent.
    ///
    /// # Panics
    /// Panics if exponent is 0.
    pub fn power_in(exponent: u32) -> Self {
        assert!(exponent >= 1, "Power exponent must be at least 1");
        Self::PowerIn { exponent }
    }

    /// Create a polynomial ease-out of the given exponent.
    ///
    /// # Panics
    /// Panics if exponent is 0.
    pub fn power_out(exponent: u32) -> Self {
        assert!(exponent >= 1, "Power exponent must be at least 1");
        Self::PowerOut { exponent }
    }

    /// Create a polynomial ease-in-out of the given exponent.
    ///
    /// # Panics
    /// Panics if exponent is 0.
    pub fn power_in_out(exponent: u32) -> Self {
        assert!(exponent >= 1, "Power exponent must be at least 1");
        Self::PowerInOut { exponent }
    }
}

/// Evaluate a cubic bezier curve at time t.
///
/// This implementation uses Newton-Raphson iteration to find the t parameter
/// on the bezier curve corresponding to the input progress, then evaluates
/// the y coordinate at that point.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    // Handle edge cases
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    // Find the t parameter that gives us the desired x value
    let t = solve_bezier_x(x1, x2, progress);

    // Evaluate the y coordinate at t
    bezier_y(y1, y2, t)
}

/// Solve for t in the bezier x equation using Newton-Raphson iteration.
fn solve_bezier_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    // Initial guess
    let mut t = target_x;

    // Newton-Raphson iteration
    for _ in 0..8 {
        let x = bezier_x(x1, x2, t) - target_x;
        if x.abs() < 1e-6 {
            break;
        }

        let dx = bezier_x_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }

        t -= x / dx;
        t = t.clamp(0.0, 1.0);
    }

    t
}

/// Calculate x coordinate on the bezier curve at parameter t.
/// Bezier formula: x(t) = 3(1-t)²t·x1 + 3(1-t)t²·x2 + t³
#[inline]
fn bezier_x(x1: f32, x2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

/// Calculate y coordinate on the bezier curve at parameter t.
#[inline]
fn bezier_y(y1: f32, y2: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

/// Calculate derivative of x with respect to t.
/// dx/dt = 3(1-t)²·x1 + 6(1-t)t·(x2-x1) + 3t²·(1-x2)
#[inline]
fn bezier_x_derivative(x1: f32, x2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

#[inline]
fn power_in(exponent: u32, t: f32) -> f32 {
    t.powi(exponent.max(1) as i32)
}

#[inline]
fn power_out(exponent: u32, t: f32) -> f32 {
    1.0 - (1.0 - t).powi(exponent.max(1) as i32)
}

fn power_in_out(exponent: u32, t: f32) -> f32 {
    let n = exponent.max(1) as i32;
    if t < 0.5 {
        0.5 * (2.0 * t).powi(n)
    } else {
        1.0 - 0.5 * (2.0 - 2.0 * t).powi(n)
    }
}
