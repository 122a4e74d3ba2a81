//! Input vocabulary shared by the match controller and front ends

use glam::Vec2;

/// Logical keys the match reacts to. Front ends map physical keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Pause,
}

/// One input event, in playfield coordinates for pointer presses
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    PointerDown(Vec2),
}

/// Whether the frame loop should keep running after a batch of events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Handle key down event
pub fn handle_key_down(key: Key, current_dir: i8) -> i8 {
    match key {
        Key::Up => -1,
        Key::Down => 1,
        Key::Pause => current_dir,
    }
}

/// Handle key up event
pub fn handle_key_up(key: Key, current_dir: i8) -> i8 {
    match key {
        Key::Up | Key::Down => 0,
        Key::Pause => current_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_sets_direction() {
        assert_eq!(handle_key_down(Key::Up, 0), -1);
        assert_eq!(handle_key_down(Key::Down, -1), 1);
        assert_eq!(handle_key_down(Key::Pause, 1), 1, "Pause keeps direction");
    }

    #[test]
    fn test_key_up_stops_on_either_movement_key() {
        assert_eq!(handle_key_up(Key::Up, 1), 0, "Releasing up stops a down move");
        assert_eq!(handle_key_up(Key::Down, -1), 0);
        assert_eq!(handle_key_up(Key::Pause, -1), -1);
    }
}
