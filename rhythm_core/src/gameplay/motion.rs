use std::f32::consts::PI;

use glam::Vec2;

use crate::chart::MotionParams;

/// Position on a note's approach path. `progress` runs from 1 at spawn to 0 at
/// the hit instant; the path oscillates around the straight line towards
/// `target` and enters from `angle` degrees (0 = from above).
pub fn sine_point(progress: f32, target: Vec2, motion: &MotionParams) -> Vec2 {
    if motion.distance == 0.0 {
        return target;
    }

    let frequency = if motion.frequency % 2.0 != 0.0 {
        -motion.frequency
    } else {
        motion.frequency
    };

    let x = progress * motion.distance;
    let y = (progress * PI * frequency).sin() / 12.0 * motion.amplitude;
    let rotation = Vec2::from_angle((motion.angle - 90.0).to_radians());

    rotation.rotate(Vec2::new(x, y)) + target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion(angle: f32, frequency: f32, amplitude: f32, distance: f32) -> MotionParams {
        MotionParams {
            angle,
            frequency,
            amplitude,
            distance,
        }
    }

    #[test]
    fn zero_distance_sits_on_target() {
        let target = Vec2::new(640.0, 360.0);
        assert_eq!(sine_point(0.7, target, &motion(45.0, 2.0, 500.0, 0.0)), target);
    }

    #[test]
    fn reaches_target_at_zero_progress() {
        let target = Vec2::new(640.0, 360.0);
        let p = sine_point(0.0, target, &motion(30.0, 2.0, 500.0, 1200.0));
        assert!((p - target).length() < 1e-3);
    }

    #[test]
    fn entry_angle_ninety_starts_to_the_right() {
        let target = Vec2::new(100.0, 100.0);
        let p = sine_point(1.0, target, &motion(90.0, 0.0, 0.0, 200.0));
        assert!((p - Vec2::new(300.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn entry_angle_zero_starts_above() {
        let target = Vec2::new(100.0, 300.0);
        let p = sine_point(1.0, target, &motion(0.0, 0.0, 0.0, 200.0));
        assert!((p - Vec2::new(100.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn odd_frequency_mirrors_the_wave() {
        let target = Vec2::ZERO;
        let even = sine_point(0.25, target, &motion(90.0, 2.0, 120.0, 100.0));
        let odd = sine_point(0.25, target, &motion(90.0, 1.0, 120.0, 100.0));
        // angle 90 leaves the path unrotated: y is the oscillation
        assert!(even.y > 0.0);
        assert!(odd.y < 0.0);
    }
}
