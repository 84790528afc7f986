//! Interpolation helpers and piecewise-linear curves.
//!
//! Used for opinion → factor mappings in scoring and for age-based fertility
//! and lovin-interval curves in the per-kind settings.

use serde::{Deserialize, Serialize};

/// Position of `value` between `a` and `b`, clamped to `[0, 1]`.
///
/// `a > b` is allowed and produces a descending mapping.  Returns 0 when
/// `a == b`.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

/// Map `x` from `[in_from, in_to]` onto `[out_from, out_to]` without clamping.
#[inline]
pub fn lerp_double(in_from: f32, in_to: f32, out_from: f32, out_to: f32, x: f32) -> f32 {
    if in_from == in_to {
        return out_from;
    }
    let t = (x - in_from) / (in_to - in_from);
    out_from + (out_to - out_from) * t
}

// ── Curve ─────────────────────────────────────────────────────────────────────

/// One `(x, y)` control point.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f32,
    pub y: f32,
}

impl CurvePoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A piecewise-linear curve.  Values outside the first/last point are held
/// constant at the end values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    /// Build a curve; points are sorted by `x`.
    pub fn new(mut points: Vec<CurvePoint>) -> Self {
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { points }
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_pairs(pairs: &[(f32, f32)]) -> Self {
        Self::new(pairs.iter().map(|&(x, y)| CurvePoint::new(x, y)).collect())
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluate the curve at `x`.  An empty curve evaluates to 0.
    pub fn evaluate(&self, x: f32) -> f32 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return 0.0,
        };
        if x <= first.x {
            return first.y;
        }
        if x >= last.x {
            return last.y;
        }
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if x <= b.x {
                if b.x == a.x {
                    return b.y;
                }
                let t = (x - a.x) / (b.x - a.x);
                return a.y + (b.y - a.y) * t;
            }
        }
        last.y
    }
}

impl From<Vec<CurvePoint>> for Curve {
    fn from(points: Vec<CurvePoint>) -> Self {
        Curve::new(points)
    }
}

impl From<Curve> for Vec<CurvePoint> {
    fn from(curve: Curve) -> Self {
        curve.points
    }
}
