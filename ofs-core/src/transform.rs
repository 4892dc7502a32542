//! Hand-set model and view transforms shared by the demos.

use glam::{Mat4, Vec3};

/// Where the ten cubes of the camera and lighting demos are placed.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

const CUBE_TILT_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);
const CUBE_TILT_STEP_DEGREES: f32 = 20.0;
const SPIN_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);
const SPIN_DEGREES_PER_SECOND: f32 = 50.0;
const LIGHT_MARKER_SCALE: f32 = 0.2;

/// Oscillates between 0 and 1 over time, used for the pulsing green uniform.
pub fn pulse(time: f32) -> f32 {
    time.sin() / 2.0 + 0.5
}

/// Model matrix for the `index`-th cube: translated to `position`, then tilted by
/// `20° * index` around a fixed skewed axis.
pub fn cube_model(index: usize, position: Vec3) -> Mat4 {
    let angle = (CUBE_TILT_STEP_DEGREES * index as f32).to_radians();
    Mat4::from_translation(position) * Mat4::from_axis_angle(CUBE_TILT_AXIS.normalize(), angle)
}

/// Iterates over the model matrices of all ten cubes.
pub fn cube_models() -> impl Iterator<Item = Mat4> {
    CUBE_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &position)| cube_model(i, position))
}

/// A cube tumbling around a fixed axis as time passes.
pub fn spinning_model(time: f32) -> Mat4 {
    Mat4::from_axis_angle(
        SPIN_AXIS.normalize(),
        time * SPIN_DEGREES_PER_SECOND.to_radians(),
    )
}

/// Fixed view used before the camera exists: the world pushed three units away.
pub fn fixed_view() -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0))
}

/// Small cube marking where the light is.
pub fn light_marker_model(position: Vec3) -> Mat4 {
    Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(LIGHT_MARKER_SCALE))
}

/// Width over height, falling back to 1 for a minimised window.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn pulse_stays_in_unit_range() {
        assert!((pulse(0.0) - 0.5).abs() < EPSILON);
        assert!((pulse(std::f32::consts::FRAC_PI_2) - 1.0).abs() < EPSILON);
        assert!((pulse(-std::f32::consts::FRAC_PI_2)).abs() < EPSILON);
        for i in 0..100 {
            let value = pulse(i as f32 * 0.37);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn first_cube_is_untransformed() {
        assert!(cube_model(0, Vec3::ZERO).abs_diff_eq(Mat4::IDENTITY, EPSILON));
    }

    #[test]
    fn cube_models_translate_to_their_positions() {
        for (model, position) in cube_models().zip(CUBE_POSITIONS) {
            let centre = model.transform_point3(Vec3::ZERO);
            assert!(centre.abs_diff_eq(position, EPSILON));
        }
        assert_eq!(cube_models().count(), 10);
    }

    #[test]
    fn cube_rotation_preserves_size() {
        let model = cube_model(7, Vec3::ZERO);
        let corner = model.transform_point3(Vec3::splat(0.5));
        assert!((corner.length() - Vec3::splat(0.5).length()).abs() < EPSILON);
    }

    #[test]
    fn spinning_model_keeps_axis_fixed() {
        let axis = SPIN_AXIS.normalize();
        let spun = spinning_model(3.2).transform_vector3(axis);
        assert!(spun.abs_diff_eq(axis, EPSILON));
    }

    #[test]
    fn light_marker_is_scaled_down() {
        let model = light_marker_model(Vec3::new(1.2, 0.5, 2.0));
        let corner = model.transform_point3(Vec3::splat(0.5));
        assert!(corner.abs_diff_eq(Vec3::new(1.3, 0.6, 2.1), EPSILON));
    }

    #[test]
    fn aspect_ratio_handles_zero_height() {
        assert!((aspect_ratio(1920, 1080) - 16.0 / 9.0).abs() < EPSILON);
        assert_eq!(aspect_ratio(800, 0), 1.0);
    }
}
