//! Keyboard and pointer mapping

use game_core::{InputEvent, Key};
use glam::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Map a physical key to a match event. Unbound keys map to `None`.
pub fn map_key(code: KeyCode, state: ElementState) -> Option<InputEvent> {
    let key = match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Key::Up,
        KeyCode::KeyS | KeyCode::ArrowDown => Key::Down,
        KeyCode::KeyP => Key::Pause,
        KeyCode::Escape => {
            return state.is_pressed().then_some(InputEvent::Quit);
        }
        _ => return None,
    };

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

/// Convert a cursor position in window pixels to playfield units
pub fn to_playfield(
    position: PhysicalPosition<f64>,
    window: PhysicalSize<u32>,
    playfield: Vec2,
) -> Option<Vec2> {
    if window.width == 0 || window.height == 0 {
        return None;
    }
    Some(Vec2::new(
        position.x as f32 * playfield.x / window.width as f32,
        position.y as f32 * playfield.y / window.height as f32,
    ))
}

/// Pointer press at the last known cursor position. Nothing until the
/// cursor has been seen over the window.
pub fn pointer_press(cursor: Option<Vec2>) -> Option<InputEvent> {
    cursor.map(InputEvent::PointerDown)
}
