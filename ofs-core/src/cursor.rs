//! Converts absolute cursor positions into look offsets.

use glam::Vec2;

/// Remembers the previous cursor position so each motion event can be turned into an offset.
///
/// The first position only primes the tracker, which keeps the camera from jumping when the
/// cursor enters the window far from the centre. The returned y offset is inverted because
/// window coordinates grow downwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorTracker {
    last: Option<Vec2>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&mut self, position: Vec2) -> Vec2 {
        let last = self.last.replace(position).unwrap_or(position);
        Vec2::new(position.x - last.x, last.y - position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_has_no_offset() {
        let mut tracker = CursorTracker::new();
        assert_eq!(tracker.offset(Vec2::new(500.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn y_offset_is_inverted() {
        let mut tracker = CursorTracker::new();
        tracker.offset(Vec2::new(960.0, 540.0));
        assert_eq!(
            tracker.offset(Vec2::new(970.0, 530.0)),
            Vec2::new(10.0, 10.0)
        );
        assert_eq!(
            tracker.offset(Vec2::new(965.0, 540.0)),
            Vec2::new(-5.0, -10.0)
        );
    }

    #[test]
    fn offsets_do_not_accumulate() {
        let mut tracker = CursorTracker::new();
        tracker.offset(Vec2::ZERO);
        assert_eq!(tracker.offset(Vec2::new(40.0, 0.0)), Vec2::new(40.0, 0.0));
        assert_eq!(tracker.offset(Vec2::new(41.0, 0.0)), Vec2::new(1.0, 0.0));
        assert_eq!(tracker.offset(Vec2::new(41.0, 0.0)), Vec2::ZERO);
    }
}
