//! Per-frame procedural signals for the hero scene.
//!
//! Everything here is a pure function of elapsed time or scroll progress so
//! the frame loop stays deterministic and the mappings stay testable without
//! a browser.

/// Fraction of the tracked scroll range over which the scene fades out.
pub const FADE_RANGE: f64 = 0.15;

/// Vertical bobbing of the rocket. Sinusoidal, so it returns to baseline on
/// every multiple of its base period and accumulates no drift.
pub fn bob_offset(time: f64) -> f64 {
    (time * 0.5).sin() * 0.5
}

/// Slow rotational sway around the roll axis, in radians.
pub fn sway_angle(time: f64) -> f64 {
    (time * 0.3).sin() * 0.05
}

/// Exhaust flicker: two incommensurate frequencies layered so the flame never
/// settles into a mechanical pulse.
pub fn flame_scale(time: f64) -> f64 {
    1.0 + (time * 15.0).sin() * 0.1 + (time * 23.0).sin() * 0.05
}

/// Root-level scene opacity for a page progress value: linear 1 → 0 across
/// the first `FADE_RANGE` of the scroll range, holding at 0 afterwards.
pub fn scene_opacity(progress: f64) -> f64 {
    (1.0 - progress / FADE_RANGE).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_scene_opacity_matches_reference_curve() {
        assert_eq!(scene_opacity(0.0), 1.0);
        assert!((scene_opacity(0.075) - 0.5).abs() < 1e-9);
        assert_eq!(scene_opacity(0.15), 0.0);
        assert_eq!(scene_opacity(0.5), 0.0, "opacity holds at zero past the threshold");
        assert_eq!(scene_opacity(1.0), 0.0);
    }

    #[test]
    fn test_scene_opacity_clamped_for_out_of_range_input() {
        assert_eq!(scene_opacity(-0.2), 1.0);
        assert_eq!(scene_opacity(2.0), 0.0);
    }

    #[test]
    fn test_bob_has_no_net_drift_over_full_periods() {
        // Base angular frequency 0.5 rad/s gives a period of 4*pi seconds.
        let period = 4.0 * PI;
        for multiple in 1..=5 {
            for start in [0.0, 1.3, 7.7] {
                let a = bob_offset(start);
                let b = bob_offset(start + period * multiple as f64);
                assert!(
                    (a - b).abs() < 1e-9,
                    "bob drifted by {} after {} periods",
                    (a - b).abs(),
                    multiple
                );
            }
        }
    }

    #[test]
    fn test_bob_amplitude_bounded() {
        let mut t = 0.0;
        while t < 30.0 {
            assert!(bob_offset(t).abs() <= 0.5 + 1e-9);
            t += 0.05;
        }
    }

    #[test]
    fn test_sway_stays_subtle() {
        let mut t = 0.0;
        while t < 30.0 {
            assert!(sway_angle(t).abs() <= 0.05 + 1e-9);
            t += 0.05;
        }
    }

    #[test]
    fn test_flame_scale_bounded_and_nontrivial() {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut t = 0.0;
        while t < 10.0 {
            let s = flame_scale(t);
            assert!((0.85..=1.15).contains(&s), "flame scale {} out of bounds", s);
            min = min.min(s);
            max = max.max(s);
            t += 0.01;
        }
        assert!(max - min > 0.1, "flicker should actually vary, spread was {}", max - min);
    }
}
