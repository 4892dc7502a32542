//! Mouse and keyboard handling for demos with a fly camera.

use ofs_core::{Camera, Config, cursor::CursorTracker};
use sdl2::mouse::MouseButton;

use crate::input::UpdateContext;

/// How mouse motion turns the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookMode {
    /// The cursor is captured and every motion turns the camera.
    Captured,
    /// The cursor is free and the camera only turns while the left button is held.
    HoldToLook,
}

/// A [`Camera`] driven by the frame's keyboard and mouse state.
pub struct FlyControls {
    pub camera: Camera,
    mode: LookMode,
    cursor: CursorTracker,
}

impl FlyControls {
    pub fn new(config: &Config, mode: LookMode) -> Self {
        Self {
            camera: Camera::default()
                .with_tuning(config.camera.movement_speed, config.camera.mouse_sensitivity),
            mode,
            cursor: CursorTracker::new(),
        }
    }

    /// Turns, zooms and moves the camera from one frame of input.
    pub fn update(&mut self, ctx: &UpdateContext) {
        let mouse = ctx.mouse;
        match self.mode {
            LookMode::Captured => {
                if mouse.moved {
                    self.camera
                        .process_mouse_movement(mouse.delta.x, -mouse.delta.y, true);
                }
            }
            LookMode::HoldToLook => {
                // Track the cursor even while the button is up so pressing it does not jump.
                if mouse.moved {
                    let offset = self.cursor.offset(mouse.position);
                    if mouse.down.contains(&MouseButton::Left) {
                        self.camera.process_mouse_movement(offset.x, offset.y, true);
                    }
                }
            }
        }

        if mouse.scroll_delta.y != 0.0 {
            self.camera.process_mouse_scroll(mouse.scroll_delta.y);
        }

        for movement in ctx.keyboard.camera_movements() {
            self.camera.process_keyboard(movement, ctx.delta_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use ofs_core::camera::{SENSITIVITY, YAW, ZOOM};
    use sdl2::{event::Event, keyboard::Keycode};

    use super::*;
    use crate::input::{KeyboardState, MouseState, events::*};

    const EPSILON: f32 = 1e-5;

    /// Feeds one frame of events through fresh input state and updates `controls` with it.
    fn frame(
        controls: &mut FlyControls,
        keyboard: &mut KeyboardState,
        mouse: &mut MouseState,
        events: &[Event],
        delta_time: f32,
    ) {
        keyboard.begin_frame();
        mouse.begin_frame();
        for event in events {
            keyboard.handle_event(event);
            mouse.handle_event(event);
        }
        controls.update(&UpdateContext {
            keyboard,
            mouse,
            delta_time,
            time: 0.0,
            viewport: (1920, 1080),
        });
    }

    #[test]
    fn captured_motion_turns_and_inverts_y() {
        let mut controls = FlyControls::new(&Config::default(), LookMode::Captured);
        let (mut keyboard, mut mouse) = (KeyboardState::default(), MouseState::default());

        frame(
            &mut controls,
            &mut keyboard,
            &mut mouse,
            &[motion(0, 0, 10, -20)],
            0.0,
        );
        assert!((controls.camera.yaw - (YAW + 10.0 * SENSITIVITY)).abs() < EPSILON);
        // Moving the mouse up gives a negative yrel and looks up.
        assert!((controls.camera.pitch - 20.0 * SENSITIVITY).abs() < EPSILON);
    }

    #[test]
    fn hold_to_look_ignores_motion_without_the_button() {
        let mut controls = FlyControls::new(&Config::default(), LookMode::HoldToLook);
        let (mut keyboard, mut mouse) = (KeyboardState::default(), MouseState::default());

        frame(
            &mut controls,
            &mut keyboard,
            &mut mouse,
            &[motion(100, 100, 100, 100), motion(400, 300, 300, 200)],
            0.0,
        );
        assert_eq!(controls.camera.yaw, YAW);
        assert_eq!(controls.camera.pitch, 0.0);
    }

    #[test]
    fn pressing_the_button_does_not_jump() {
        let mut controls = FlyControls::new(&Config::default(), LookMode::HoldToLook);
        let (mut keyboard, mut mouse) = (KeyboardState::default(), MouseState::default());

        frame(
            &mut controls,
            &mut keyboard,
            &mut mouse,
            &[motion(100, 100, 100, 100)],
            0.0,
        );
        frame(
            &mut controls,
            &mut keyboard,
            &mut mouse,
            &[motion(600, 500, 500, 400)],
            0.0,
        );
        frame(
            &mut controls,
            &mut keyboard,
            &mut mouse,
            &[button_down(MouseButton::Left)],
            0.0,
        );
        assert_eq!(controls.camera.yaw, YAW);

        frame(
            &mut controls,
            &mut keyboard,
            &mut mouse,
            &[motion(610, 495, 10, -5)],
            0.0,
        );
        assert!((controls.camera.yaw - (YAW + 10.0 * SENSITIVITY)).abs() < EPSILON);
        assert!((controls.camera.pitch - 5.0 * SENSITIVITY).abs() < EPSILON);

        frame(
            &mut controls,
            &mut keyboard,
            &mut mouse,
            &[button_up(MouseButton::Left), motion(900, 900, 290, 405)],
            0.0,
        );
        assert!((controls.camera.yaw - (YAW + 10.0 * SENSITIVITY)).abs() < EPSILON);
    }

    #[test]
    fn wheel_zooms() {
        let mut controls = FlyControls::new(&Config::default(), LookMode::Captured);
        let (mut keyboard, mut mouse) = (KeyboardState::default(), MouseState::default());

        frame(&mut controls, &mut keyboard, &mut mouse, &[wheel(2.5)], 0.0);
        assert!((controls.camera.zoom - (ZOOM - 2.5)).abs() < EPSILON);

        frame(&mut controls, &mut keyboard, &mut mouse, &[], 0.0);
        assert!((controls.camera.zoom - (ZOOM - 2.5)).abs() < EPSILON);
    }

    #[test]
    fn held_keys_move_with_configured_speed() {
        let mut config = Config::default();
        config.camera.movement_speed = 4.0;
        let mut controls = FlyControls::new(&config, LookMode::Captured);
        let (mut keyboard, mut mouse) = (KeyboardState::default(), MouseState::default());

        frame(
            &mut controls,
            &mut keyboard,
            &mut mouse,
            &[key_down(Keycode::W)],
            0.5,
        );
        // Still held in the next frame without a new event.
        frame(&mut controls, &mut keyboard, &mut mouse, &[], 0.25);
        assert!(
            controls
                .camera
                .position
                .abs_diff_eq(Vec3::new(0.0, 0.0, 3.0 - 4.0 * 0.75), EPSILON)
        );
    }
}
