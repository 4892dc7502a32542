//! Keyboard and mouse state collected from SDL events each frame.

use std::collections::HashSet;

use glam::Vec2;
use ofs_core::{CameraMovement, lighting::LightNudge};
use sdl2::{event::Event, keyboard::Keycode, mouse::MouseButton};

const MOVEMENT_KEYS: [(Keycode, CameraMovement); 6] = [
    (Keycode::W, CameraMovement::Forward),
    (Keycode::S, CameraMovement::Backward),
    (Keycode::A, CameraMovement::Left),
    (Keycode::D, CameraMovement::Right),
    (Keycode::Q, CameraMovement::Up),
    (Keycode::E, CameraMovement::Down),
];

const LIGHT_KEYS: [(Keycode, LightNudge); 4] = [
    (Keycode::Up, LightNudge::Up),
    (Keycode::Down, LightNudge::Down),
    (Keycode::Left, LightNudge::Left),
    (Keycode::Right, LightNudge::Right),
];

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
}

impl KeyboardState {
    /// Forgets the presses of the previous frame. Held keys stay down.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => {
                self.down.insert(keycode);
                self.pressed.insert(keycode);
            }
            Event::KeyUp {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => {
                self.down.remove(&keycode);
            }
            _ => {}
        }
    }

    /// Camera movements for every held W/A/S/D/Q/E key.
    pub fn camera_movements(&self) -> impl Iterator<Item = CameraMovement> + '_ {
        MOVEMENT_KEYS
            .iter()
            .filter(|(key, _)| self.down.contains(key))
            .map(|&(_, movement)| movement)
    }

    /// Light nudges for every held arrow key.
    pub fn light_nudges(&self) -> impl Iterator<Item = LightNudge> + '_ {
        LIGHT_KEYS
            .iter()
            .filter(|(key, _)| self.down.contains(key))
            .map(|&(_, nudge)| nudge)
    }
}

/// The current state of the mouse.
#[derive(Default)]
pub struct MouseState {
    /// Cursor position in window coordinates.
    pub position: Vec2,
    /// Relative motion this frame, with y growing downwards.
    pub delta: Vec2,
    /// Whether any motion event arrived this frame.
    pub moved: bool,
    pub down: HashSet<MouseButton>,
    pub scroll_delta: Vec2,
}

impl MouseState {
    pub fn begin_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.moved = false;
        self.scroll_delta = Vec2::ZERO;
    }

    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::MouseMotion {
                x, y, xrel, yrel, ..
            } => {
                self.position = Vec2::new(x as f32, y as f32);
                self.delta += Vec2::new(xrel as f32, yrel as f32);
                self.moved = true;
            }
            Event::MouseWheel { precise_x, precise_y, .. } => {
                self.scroll_delta += Vec2::new(precise_x, precise_y);
            }
            Event::MouseButtonDown { mouse_btn, .. } => {
                self.down.insert(mouse_btn);
            }
            Event::MouseButtonUp { mouse_btn, .. } => {
                self.down.remove(&mouse_btn);
            }
            _ => {}
        }
    }
}

/// Everything a demo may look at while updating and rendering a frame.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub mouse: &'a MouseState,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Seconds since the demo started.
    pub time: f32,
    /// Drawable size in pixels.
    pub viewport: (u32, u32),
}

impl UpdateContext<'_> {
    pub fn aspect_ratio(&self) -> f32 {
        ofs_core::transform::aspect_ratio(self.viewport.0, self.viewport.1)
    }
}


#[cfg(test)]
mod tests {
    use super::{events::*, *};

    #[test]
    fn held_keys_map_to_camera_movements() {
        let mut keyboard = KeyboardState::default();
        keyboard.handle_event(&key_down(Keycode::W));
        keyboard.handle_event(&key_down(Keycode::D));
        keyboard.handle_event(&key_down(Keycode::Up));

        let movements: Vec<_> = keyboard.camera_movements().collect();
        assert_eq!(
            movements,
            vec![CameraMovement::Forward, CameraMovement::Right]
        );
        let nudges: Vec<_> = keyboard.light_nudges().collect();
        assert_eq!(nudges, vec![LightNudge::Up]);
    }

    #[test]
    fn presses_last_one_frame() {
        let mut keyboard = KeyboardState::default();
        keyboard.handle_event(&key_down(Keycode::Return));
        assert!(keyboard.pressed.contains(&Keycode::Return));

        keyboard.begin_frame();
        assert!(keyboard.pressed.is_empty());
        assert!(keyboard.down.contains(&Keycode::Return));

        keyboard.handle_event(&key_up(Keycode::Return));
        assert!(keyboard.down.is_empty());
    }

    #[test]
    fn mouse_deltas_accumulate_within_a_frame() {
        let mut mouse = MouseState::default();
        mouse.handle_event(&motion(10, 0, 10, -2));
        mouse.handle_event(&motion(15, 0, 5, -2));
        mouse.handle_event(&wheel(1.5));
        assert!(mouse.moved);
        assert_eq!(mouse.position, Vec2::new(15.0, 0.0));
        assert_eq!(mouse.delta, Vec2::new(15.0, -4.0));
        assert_eq!(mouse.scroll_delta, Vec2::new(0.0, 1.5));

        mouse.begin_frame();
        assert!(!mouse.moved);
        assert_eq!(mouse.delta, Vec2::ZERO);
        assert_eq!(mouse.scroll_delta, Vec2::ZERO);
        assert_eq!(mouse.position, Vec2::new(15.0, 0.0));
    }

    #[test]
    fn buttons_stay_down_until_released() {
        let mut mouse = MouseState::default();
        mouse.handle_event(&button_down(MouseButton::Left));
        mouse.begin_frame();
        assert!(mouse.down.contains(&MouseButton::Left));
        mouse.handle_event(&button_up(MouseButton::Left));
        assert!(mouse.down.is_empty());
    }
}
