use std::collections::{HashMap, HashSet};

pub use winit::event::MouseButton;

use crate::math::Point2D;

/// Per-frame snapshot of the pointer state the aiming demo reads: the cursor
/// position, any active touches, and buttons pressed this frame. Positions
/// are stored in the caller's coordinate space.
pub struct InputState {
    pressed_buttons: HashSet<MouseButton>,
    held_buttons: HashSet<MouseButton>,
    cursor_position: Option<Point2D>,
    touch_positions: HashMap<u64, Point2D>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pressed_buttons: HashSet::new(),
            held_buttons: HashSet::new(),
            cursor_position: None,
            touch_positions: HashMap::new(),
        }
    }

    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    pub fn is_held(&self, button: MouseButton) -> bool {
        self.held_buttons.contains(&button)
    }

    pub fn cursor_position(&self) -> Option<Point2D> {
        self.cursor_position
    }

    /// The point the user is aiming at: the most recent touch if any finger
    /// is down, otherwise the cursor.
    pub fn aim_point(&self) -> Option<Point2D> {
        self.touch_positions
            .values()
            .next()
            .copied()
            .or(self.cursor_position)
    }

    pub fn set_pressed(&mut self, button: MouseButton) {
        self.pressed_buttons.insert(button);
        self.held_buttons.insert(button);
    }

    pub fn set_released(&mut self, button: MouseButton) {
        self.held_buttons.remove(&button);
    }

    pub fn set_cursor_position(&mut self, position: Point2D) {
        self.cursor_position = Some(position);
    }

    pub fn set_touch_position(&mut self, id: u64, position: Point2D) {
        self.touch_positions.insert(id, position);
    }

    pub fn clear_touch(&mut self, id: u64) {
        self.touch_positions.remove(&id);
    }

    pub fn end_frame(&mut self) {
        self.pressed_buttons.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_touch_takes_priority_over_cursor() {
        let mut input = InputState::new();
        input.set_cursor_position(Point2D::new(10.0, 10.0));
        assert_eq!(input.aim_point(), Some(Point2D::new(10.0, 10.0)));

        input.set_touch_position(0, Point2D::new(20.0, 30.0));
        assert_eq!(input.aim_point(), Some(Point2D::new(20.0, 30.0)));

        input.clear_touch(0);
        assert_eq!(input.aim_point(), Some(Point2D::new(10.0, 10.0)));
    }

    #[test]
    fn test_pressed_is_cleared_at_frame_end_but_held_is_not() {
        let mut input = InputState::new();
        input.set_pressed(MouseButton::Left);
        assert!(input.is_pressed(MouseButton::Left));
        assert!(input.is_held(MouseButton::Left));

        input.end_frame();
        assert!(!input.is_pressed(MouseButton::Left));
        assert!(input.is_held(MouseButton::Left));

        input.set_released(MouseButton::Left);
        assert!(!input.is_held(MouseButton::Left));
    }
}
