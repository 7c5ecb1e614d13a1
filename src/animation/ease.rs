use std::fmt;

use kurbo::{CubicBez, ParamCurve, Point};

use crate::foundation::error::{BadgeError, BadgeResult};

/// Cubic Bezier easing curve between two keyframes, as used by SMIL `keySplines`.
///
/// The curve runs from `(0, 0)` to `(1, 1)` with control points `(x1, y1)` and `(x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeySpline {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl KeySpline {
    /// No easing.
    pub const LINEAR: Self = Self::new_unchecked(0.0, 0.0, 1.0, 1.0);
    /// Decelerates into the dwell position.
    pub const EASE_IN: Self = Self::new_unchecked(0.25, 0.1, 0.25, 1.0);
    /// Curve used while the page holds; near-flat so velocity stays close to zero.
    pub const EASE_HOLD: Self = Self::new_unchecked(0.25, 0.1, 0.25, 1.0);
    /// Accelerates out of the dwell position.
    pub const EASE_OUT: Self = Self::new_unchecked(0.42, 0.0, 0.58, 1.0);

    const fn new_unchecked(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// SMIL requires every control point coordinate to lie in `[0, 1]`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> BadgeResult<Self> {
        let s = Self { x1, y1, x2, y2 };
        s.validate()?;
        Ok(s)
    }

    pub fn validate(&self) -> BadgeResult<()> {
        let ok = [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v));
        if !ok {
            return Err(BadgeError::validation(format!(
                "key spline control points must be in [0, 1], got {self}"
            )));
        }
        Ok(())
    }

    fn curve(&self) -> CubicBez {
        CubicBez::new(
            Point::ORIGIN,
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(1.0, 1.0),
        )
    }

    /// Map normalized segment progress `t` in `[0, 1]` to eased progress.
    ///
    /// Solves `x(s) = t` by bisection (x is monotonic for control points in `[0, 1]`), then
    /// returns `y(s)`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 || self == Self::LINEAR {
            return t;
        }
        let curve = self.curve();
        let (mut lo, mut hi) = (0.0f64, 1.0f64);
        for _ in 0..48 {
            let mid = 0.5 * (lo + hi);
            if curve.eval(mid).x < t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        curve.eval(0.5 * (lo + hi)).y.clamp(0.0, 1.0)
    }
}

impl fmt::Display for KeySpline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x1, self.y1, self.x2, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [KeySpline; 4] = [
        KeySpline::LINEAR,
        KeySpline::EASE_IN,
        KeySpline::EASE_HOLD,
        KeySpline::EASE_OUT,
    ];

    #[test]
    fn endpoints_are_stable() {
        for s in ALL {
            assert_eq!(s.apply(0.0), 0.0);
            assert_eq!(s.apply(1.0), 1.0);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for s in ALL {
            let a = s.apply(0.25);
            let b = s.apply(0.5);
            let c = s.apply(0.75);
            assert!(a < b);
            assert!(b < c);
        }
    }

    #[test]
    fn ease_out_is_symmetric_around_midpoint() {
        let mid = KeySpline::EASE_OUT.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn display_matches_smil_syntax() {
        assert_eq!(KeySpline::LINEAR.to_string(), "0 0 1 1");
        assert_eq!(KeySpline::EASE_IN.to_string(), "0.25 0.1 0.25 1");
        assert_eq!(KeySpline::EASE_OUT.to_string(), "0.42 0 0.58 1");
    }

    #[test]
    fn rejects_out_of_range_points() {
        assert!(KeySpline::new(0.5, 1.5, 0.5, 0.5).is_err());
        assert!(KeySpline::new(0.1, 0.2, 0.3, 0.4).is_ok());
    }
}
