//! Classical easing equations
//!
//! Robert Penner's easing equations (<http://robertpenner.com/easing/>) over
//! the shared `(t, b, c, d)` contract: `t` is the elapsed time, `b` the start
//! value, `c` the total change in value, and `d` the duration. Every function
//! returns `b` at `t = 0` and `b + c` at `t = d`.
//!
//! Inputs are not clamped or validated. `t` outside `[0, d]` extrapolates,
//! and `d = 0` divides by zero in the families that divide unconditionally;
//! the resulting non-finite value propagates as an ordinary `f32`. Callers
//! own the well-formedness of their tuples.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Overshoot constant for the back family.
const BACK_OVERSHOOT: f32 = 1.70158;

// ============================================================================
// Linear
// ============================================================================

/// Linear ramp. The catalogue exposes this under four names; a straight
/// line has no acceleration to shape, so all of them share this formula.
pub fn linear_none(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

/// Alias of [`linear_none`].
pub fn linear_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    linear_none(t, b, c, d)
}

/// Alias of [`linear_none`].
pub fn linear_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    linear_none(t, b, c, d)
}

/// Alias of [`linear_none`].
pub fn linear_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    linear_none(t, b, c, d)
}

// ============================================================================
// Sine
// ============================================================================

/// Accelerate along a quarter cosine wave.
pub fn sine_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c * (t / d * FRAC_PI_2).cos() + c + b
}

/// Decelerate along a quarter sine wave.
pub fn sine_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d * FRAC_PI_2).sin() + b
}

/// Half cosine wave; one smooth formula, no midpoint branch.
pub fn sine_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

// ============================================================================
// Circular
// ============================================================================

/// Accelerate along a quarter circle.
pub fn circ_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

/// Decelerate along a quarter circle.
pub fn circ_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

/// Quarter circle rising through the first half, falling through the second.
pub fn circ_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let mut t = t / d * 2.0;
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    t -= 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

// ============================================================================
// Cubic
// ============================================================================

pub fn cubic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t + b
}

pub fn cubic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

pub fn cubic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let mut t = t / d * 2.0;
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

// ============================================================================
// Quadratic
// ============================================================================

pub fn quad_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t + b
}

pub fn quad_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

pub fn quad_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d * 2.0;
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    -c / 2.0 * ((t - 1.0) * (t - 3.0) - 1.0) + b
}

// ============================================================================
// Exponential
// ============================================================================

/// Exponential acceleration. `2^(10*(t/d - 1))` is `~0.001`, not `0`, at
/// `t = 0`, so the start boundary is an explicit special case.
pub fn expo_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    c * 2f32.powf(10.0 * (t / d - 1.0)) + b
}

/// Exponential deceleration; the end boundary is an explicit special case.
pub fn expo_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == d {
        return b + c;
    }
    c * (1.0 - 2f32.powf(-10.0 * t / d)) + b
}

pub fn expo_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let mut t = t / d * 2.0;
    if t < 1.0 {
        return c / 2.0 * 2f32.powf(10.0 * (t - 1.0)) + b;
    }
    t -= 1.0;
    c / 2.0 * (2.0 - 2f32.powf(-10.0 * t)) + b
}

// ============================================================================
// Back
// ============================================================================

/// Pull back below `b` before accelerating toward the target.
pub fn back_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

/// Overshoot past `b + c` before settling on it.
pub fn back_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let s = BACK_OVERSHOOT;
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

/// Overshoot on both ends, with the amount widened for the split curve.
pub fn back_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let s = BACK_OVERSHOOT * 1.525;
    let mut t = t / d * 2.0;
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}

// ============================================================================
// Bounce
// ============================================================================

/// Time-reversed [`bounce_out`].
pub fn bounce_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c - bounce_out(d - t, 0.0, c, d) + b
}

/// Four parabolic arcs of decaying height, like a ball settling on the
/// target value. The other two bounce variants derive from this one.
pub fn bounce_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let mut t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        t -= 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        t -= 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        t -= 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

pub fn bounce_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        bounce_in(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        bounce_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}

// ============================================================================
// Elastic
// ============================================================================

/// Damped sine with an exponentially growing envelope. Both boundaries are
/// special-cased; the generic formula is wrong at either end.
pub fn elastic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    let amp = c * 2f32.powf(10.0 * (t - 1.0));
    -(amp * ((t * d - s) * TAU / p).sin()) + b
}

/// Damped sine decaying onto the target value.
pub fn elastic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    c * 2f32.powf(-10.0 * t) * ((t * d - s) * TAU / p).sin() + c + b
}

/// Growing oscillation through the first half, decaying through the second,
/// with a longer period than the one-sided variants.
pub fn elastic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let mut t = t / d * 2.0;
    if t == 2.0 {
        return b + c;
    }
    let p = d * (0.3 * 1.5);
    let s = p / 4.0;
    t -= 1.0;
    if t < 0.0 {
        let amp = c * 2f32.powf(10.0 * t);
        return -0.5 * (amp * ((t * d - s) * TAU / p).sin()) + b;
    }
    let amp = c * 2f32.powf(-10.0 * t);
    amp * ((t * d - s) * TAU / p).sin() * 0.5 + c + b
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn linear_names_share_one_formula() {
        for f in [linear_none, linear_in, linear_out, linear_in_out] {
            assert_eq!(f(5.0, 10.0, 20.0, 10.0), 20.0);
            assert_eq!(f(0.0, 10.0, 20.0, 10.0), 10.0);
            assert_eq!(f(10.0, 10.0, 20.0, 10.0), 30.0);
        }
    }

    #[test]
    fn quad_halfway_values() {
        assert_eq!(quad_in(0.5, 0.0, 1.0, 1.0), 0.25);
        assert_eq!(quad_out(0.5, 0.0, 1.0, 1.0), 0.75);
        assert_eq!(quad_in_out(0.25, 0.0, 1.0, 1.0), 0.125);
    }

    #[test]
    fn expo_guards_pin_the_boundaries() {
        assert_eq!(expo_in(0.0, 3.0, 7.0, 2.0), 3.0);
        assert_eq!(expo_out(2.0, 3.0, 7.0, 2.0), 10.0);
        assert_eq!(expo_in_out(0.0, 3.0, 7.0, 2.0), 3.0);
        assert_eq!(expo_in_out(2.0, 3.0, 7.0, 2.0), 10.0);
        // Away from the guards the curve is strictly between the endpoints.
        let mid = expo_in(1.0, 3.0, 7.0, 2.0);
        assert!(mid > 3.0 && mid < 10.0);
    }

    #[test]
    fn elastic_guards_pin_the_boundaries() {
        assert_eq!(elastic_in(0.0, 5.0, 10.0, 2.0), 5.0);
        assert_eq!(elastic_in(2.0, 5.0, 10.0, 2.0), 15.0);
        assert_eq!(elastic_out(0.0, 5.0, 10.0, 2.0), 5.0);
        assert_eq!(elastic_out(2.0, 5.0, 10.0, 2.0), 15.0);
        assert_eq!(elastic_in_out(0.0, 5.0, 10.0, 2.0), 5.0);
        assert_eq!(elastic_in_out(2.0, 5.0, 10.0, 2.0), 15.0);
    }

    #[test]
    fn elastic_oscillates_outside_the_range() {
        // The In variant swings below the start value before the final rise.
        let mut dipped = false;
        for i in 1..100 {
            let t = i as f32 / 100.0;
            if elastic_in(t, 0.0, 1.0, 1.0) < -1e-3 {
                dipped = true;
            }
        }
        assert!(dipped, "elastic_in never swung below the start value");
    }

    #[test]
    fn bounce_out_lands_on_the_target() {
        let v = bounce_out(1.0, 0.0, 1.0, 1.0);
        assert!((v - 1.0).abs() < EPS);
        // Segment joins are continuous.
        for boundary in [1.0 / 2.75, 2.0 / 2.75, 2.5 / 2.75] {
            let lo = bounce_out(boundary - 1e-4, 0.0, 1.0, 1.0);
            let hi = bounce_out(boundary + 1e-4, 0.0, 1.0, 1.0);
            assert!((lo - hi).abs() < 1e-2, "gap at segment boundary {boundary}");
        }
    }

    #[test]
    fn bounce_in_is_time_reversed_bounce_out() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let forward = bounce_in(t, 0.0, 1.0, 1.0);
            let reversed = 1.0 - bounce_out(1.0 - t, 0.0, 1.0, 1.0);
            assert!((forward - reversed).abs() < EPS);
        }
    }

    #[test]
    fn back_in_dips_below_start() {
        let mut min = f32::MAX;
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            min = min.min(back_in(t, 0.0, 1.0, 1.0));
        }
        assert!(min < -0.05, "expected an undershoot, got min {min}");
    }

    #[test]
    fn back_out_overshoots_target() {
        let mut max = f32::MIN;
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            max = max.max(back_out(t, 0.0, 1.0, 1.0));
        }
        assert!(max > 1.05, "expected an overshoot, got max {max}");
    }

    #[test]
    fn zero_duration_is_not_trapped() {
        // Families that divide unconditionally propagate non-finite output.
        assert!(!linear_none(1.0, 0.0, 1.0, 0.0).is_finite());
        assert!(!quad_in(1.0, 0.0, 1.0, 0.0).is_finite());
        // Guarded families still short-circuit their special cases.
        assert_eq!(expo_in(0.0, 0.0, 1.0, 0.0), 0.0);
        assert_eq!(elastic_in(0.0, 0.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn out_of_range_time_extrapolates() {
        assert_eq!(linear_none(20.0, 0.0, 10.0, 10.0), 20.0);
        assert_eq!(quad_in(2.0, 0.0, 1.0, 1.0), 4.0);
    }
}
