//! Numeric easing primitives behind the scroll cinematic and tilt effects.
//!
//! The bezier curve is parametric in its curve parameter `u`, not directly
//! invertible in `x`, so `eval` bisects for the `u` whose x-coordinate
//! matches the input and then samples the y-coordinate there. Twenty
//! bisections resolve ~6 decimal digits, far past visual precision. Valid
//! for monotone curves, which both presets are.

/// CSS-style cubic bezier timing curve anchored at (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    p1x: f64,
    p1y: f64,
    p2x: f64,
    p2y: f64,
}

const SOLVER_ITERATIONS: u32 = 20;

impl CubicBezier {
    pub const fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Self {
        Self { p1x, p1y, p2x, p2y }
    }

    /// Map `x` in [0,1] to the eased output in [0,1].
    pub fn eval(&self, x: f64) -> f64 {
        let mut lo = 0.0_f64;
        let mut hi = 1.0_f64;
        for _ in 0..SOLVER_ITERATIONS {
            let mid = (lo + hi) / 2.0;
            if coordinate(mid, self.p1x, self.p2x) < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let u = (lo + hi) / 2.0;
        coordinate(u, self.p1y, self.p2y)
    }
}

/// One bezier coordinate at curve parameter `u` for control values (c1, c2).
fn coordinate(u: f64, c1: f64, c2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * c1 * u * inv * inv + 3.0 * c2 * u * u * inv + u * u * u
}

/// Apple-style ease-in: slow start, accelerates away.
pub const EASE_IN_APPLE: CubicBezier = CubicBezier::new(0.55, 0.06, 0.68, 0.19);

/// Smooth ease-in-out for the text slide-outs.
pub const EASE_IN_OUT_SMOOTH: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

/// Remap `value` against [in_min, in_max] into [0,1], clamp, then ease.
/// Callers never pass `in_min == in_max`.
pub fn progress(value: f64, in_min: f64, in_max: f64, ease: Option<&CubicBezier>) -> f64 {
    let t = ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    match ease {
        Some(curve) => curve.eval(t),
        None => t,
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_to_unit_interval() {
        assert_eq!(progress(-5.0, 0.0, 0.6, None), 0.0);
        assert_eq!(progress(0.0, 0.0, 0.6, None), 0.0);
        assert_eq!(progress(0.6, 0.0, 0.6, None), 1.0);
        assert_eq!(progress(7.0, 0.0, 0.6, None), 1.0);
        for i in 0..=100 {
            let v = -1.0 + i as f64 * 0.03;
            let p = progress(v, 0.2, 0.8, None);
            assert!((0.0..=1.0).contains(&p), "progress({v}) = {p} out of range");
        }
    }

    #[test]
    fn progress_remaps_linearly_without_easing() {
        assert!((progress(0.3, 0.0, 0.6, None) - 0.5).abs() < 1e-12);
        assert!((progress(0.25, 0.2, 0.4, None) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn preset_endpoints_within_solver_tolerance() {
        for curve in [EASE_IN_APPLE, EASE_IN_OUT_SMOOTH] {
            assert!(curve.eval(0.0).abs() <= 1e-3);
            assert!((curve.eval(1.0) - 1.0).abs() <= 1e-3);
        }
    }

    #[test]
    fn presets_are_non_decreasing() {
        for curve in [EASE_IN_APPLE, EASE_IN_OUT_SMOOTH] {
            let mut prev = curve.eval(0.0);
            for i in 1..=200 {
                let y = curve.eval(i as f64 / 200.0);
                assert!(y >= prev - 1e-9, "curve decreased at sample {i}: {prev} -> {y}");
                prev = y;
            }
        }
    }

    #[test]
    fn ease_in_starts_below_linear() {
        // The whole point of the ease-in preset: the showcase creeps before
        // it accelerates, so the midpoint output sits well under 0.5.
        assert!(EASE_IN_APPLE.eval(0.5) < 0.5);
    }

    #[test]
    fn lerp_identities() {
        for (a, b) in [(0.0, 35.0), (-10.0, 10.0), (1.0, 0.5), (-800.0, 0.0)] {
            assert_eq!(lerp(a, b, 0.0), a);
            assert_eq!(lerp(a, b, 1.0), b);
        }
        assert_eq!(lerp(0.0, 20.0, 0.5), 10.0);
    }
}
