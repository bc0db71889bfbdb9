//! Fuzzy set shapes and linguistic hedges
//!
//! A membership function maps a crisp scalar to a degree of membership in
//! [0, 1]. Three shapes cover every set the engine uses: two shoulders for
//! the open ends of a variable's range and triangles for the interior.

use serde::{Deserialize, Serialize};

/// Shape of a fuzzy set's membership function
///
/// Breakpoints always satisfy `a <= peak <= b`. The `peak` doubles as the
/// set's representative value during defuzzification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MembershipShape {
    /// Full membership at and below the peak, falling off to the right
    LeftShoulder { a: f32, peak: f32, b: f32 },
    /// Full membership at and above the peak, falling off to the left
    RightShoulder { a: f32, peak: f32, b: f32 },
    /// Rises to full membership at the peak, falls back to zero
    Triangular { a: f32, peak: f32, b: f32 },
}

impl MembershipShape {
    pub fn left_shoulder(a: f32, peak: f32, b: f32) -> Self {
        assert!(a <= peak && peak <= b, "breakpoints out of order: {a} {peak} {b}");
        Self::LeftShoulder { a, peak, b }
    }

    pub fn right_shoulder(a: f32, peak: f32, b: f32) -> Self {
        assert!(a <= peak && peak <= b, "breakpoints out of order: {a} {peak} {b}");
        Self::RightShoulder { a, peak, b }
    }

    pub fn triangular(a: f32, peak: f32, b: f32) -> Self {
        assert!(a <= peak && peak <= b, "breakpoints out of order: {a} {peak} {b}");
        Self::Triangular { a, peak, b }
    }

    /// Degree of membership of `x` in this set, in [0, 1]
    pub fn membership(&self, x: f32) -> f32 {
        match *self {
            Self::Triangular { a, peak, b } => {
                if x < a || x > b {
                    0.0
                } else if x <= peak {
                    rising_edge(a, peak, x)
                } else {
                    falling_edge(peak, b, x)
                }
            }
            Self::LeftShoulder { a: _, peak, b } => {
                if x <= peak {
                    1.0
                } else if x <= b {
                    falling_edge(peak, b, x)
                } else {
                    0.0
                }
            }
            Self::RightShoulder { a, peak, b: _ } => {
                if x >= peak {
                    1.0
                } else if x >= a {
                    rising_edge(a, peak, x)
                } else {
                    0.0
                }
            }
        }
    }

    /// Crisp value this set contributes during max-of-averages
    /// defuzzification
    pub fn representative_value(&self) -> f32 {
        match *self {
            Self::LeftShoulder { peak, .. }
            | Self::RightShoulder { peak, .. }
            | Self::Triangular { peak, .. } => peak,
        }
    }
}

/// Linear rise from 0 at `from` to 1 at `to`
fn rising_edge(from: f32, to: f32, x: f32) -> f32 {
    if to <= from {
        // Degenerate edge: the peak sits on the breakpoint
        1.0
    } else {
        (x - from) / (to - from)
    }
}

/// Linear fall from 1 at `from` to 0 at `to`
fn falling_edge(from: f32, to: f32, x: f32) -> f32 {
    if to <= from {
        1.0
    } else {
        (to - x) / (to - from)
    }
}

/// Linguistic hedge applied to a term reference
///
/// `Very` concentrates a set (squares the membership), `Fairly` dilates it
/// (square root). Hedges wrap references to terms; the underlying term is
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Hedge {
    #[default]
    None,
    Very,
    Fairly,
}

impl Hedge {
    /// Apply the hedge to a degree of membership
    pub fn apply(&self, dom: f32) -> f32 {
        match self {
            Self::None => dom,
            Self::Very => dom * dom,
            Self::Fairly => dom.sqrt(),
        }
    }
}
