//! First-person fly camera.
//!
//! The [`Camera`] keeps a position and a yaw/pitch orientation (in degrees) and derives its
//! basis vectors from them. Keyboard movement is scaled by the frame's delta time so the camera
//! moves at the same speed regardless of frame rate.

use glam::{Mat4, Vec3};

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

/// Direction of a keyboard-driven camera movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// A fly camera driven by keyboard, mouse motion and the scroll wheel.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
}

impl Camera {
    /// Creates a camera at `position` looking along the direction given by `yaw` and `pitch`.
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Overrides the movement speed and mouse sensitivity.
    pub fn with_tuning(mut self, movement_speed: f32, mouse_sensitivity: f32) -> Self {
        self.movement_speed = movement_speed;
        self.mouse_sensitivity = mouse_sensitivity;
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as the vertical field of view.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect_ratio, NEAR, FAR)
    }

    /// Moves the camera in `direction` for `delta_time` seconds.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.world_up * velocity,
            CameraMovement::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Rotates the camera by a mouse offset. A positive `y_offset` looks up.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Narrows or widens the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        // Looking straight along `world_up` leaves the cross product empty, so keep the old
        // right vector, squared up against the new front.
        self.right = self
            .front
            .cross(self.world_up)
            .try_normalize()
            .or_else(|| self.right.reject_from_normalized(self.front).try_normalize())
            .unwrap_or_else(|| self.front.any_orthonormal_vector());
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, YAW, PITCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(camera.front.abs_diff_eq(Vec3::NEG_Z, EPSILON));
        assert!(camera.right.abs_diff_eq(Vec3::X, EPSILON));
        assert!(camera.up.abs_diff_eq(Vec3::Y, EPSILON));
    }

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let camera = Camera::default();
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), EPSILON));
    }

    #[test]
    fn keyboard_movement_scales_with_delta_time() {
        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::Forward, 0.5);
        assert!(
            camera
                .position
                .abs_diff_eq(Vec3::new(0.0, 0.0, 3.0 - SPEED * 0.5), EPSILON)
        );

        camera.process_keyboard(CameraMovement::Right, 1.0);
        assert!((camera.position.x - SPEED).abs() < EPSILON);

        camera.process_keyboard(CameraMovement::Up, 2.0);
        assert!((camera.position.y - SPEED * 2.0).abs() < EPSILON);
    }

    #[test]
    fn opposite_movements_cancel_out() {
        let mut camera = Camera::default();
        let start = camera.position;
        camera.process_keyboard(CameraMovement::Left, 0.3);
        camera.process_keyboard(CameraMovement::Right, 0.3);
        camera.process_keyboard(CameraMovement::Down, 0.3);
        camera.process_keyboard(CameraMovement::Up, 0.3);
        assert!(camera.position.abs_diff_eq(start, EPSILON));
    }

    #[test]
    fn pitch_is_clamped_when_constrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(camera.pitch, PITCH_LIMIT);
        camera.process_mouse_movement(0.0, -100_000.0, true);
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn pitch_is_free_when_unconstrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 1_000.0, false);
        assert!((camera.pitch - 100.0).abs() < EPSILON);
    }

    #[test]
    fn looking_along_world_up_stays_finite() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::X, 0.0, 0.0);
        assert!(camera.front.abs_diff_eq(Vec3::X, EPSILON));
        assert!(camera.right.is_finite() && camera.up.is_finite());
        assert!(camera.front.dot(camera.right).abs() < EPSILON);
        assert!(camera.view_matrix().is_finite());

        camera = Camera::default();
        camera.process_mouse_movement(0.0, 900.0, false);
        assert!(camera.view_matrix().is_finite());
        assert!((camera.right.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn yaw_turns_towards_positive_x() {
        let mut camera = Camera::default();
        // 900 * 0.1 = 90 degrees, from -90 to 0.
        camera.process_mouse_movement(900.0, 0.0, true);
        assert!((camera.yaw).abs() < EPSILON);
        assert!(camera.front.abs_diff_eq(Vec3::X, EPSILON));
    }

    #[test]
    fn basis_stays_orthonormal() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(123.0, -45.0, true);
        assert!((camera.front.length() - 1.0).abs() < EPSILON);
        assert!(camera.front.dot(camera.right).abs() < EPSILON);
        assert!(camera.front.dot(camera.up).abs() < EPSILON);
        assert!(camera.right.dot(camera.up).abs() < EPSILON);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.zoom, 35.0);
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom, ZOOM_MIN);
        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom, ZOOM_MAX);
    }

    #[test]
    fn with_tuning_overrides_speed() {
        let mut camera = Camera::default().with_tuning(10.0, 0.5);
        camera.process_keyboard(CameraMovement::Backward, 1.0);
        assert!((camera.position.z - 13.0).abs() < EPSILON);
        camera.process_mouse_movement(2.0, 0.0, true);
        assert!((camera.yaw - (YAW + 1.0)).abs() < EPSILON);
    }
}
