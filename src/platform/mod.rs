//! Platform abstraction layer
//!
//! Translates host input events into simulation keys.

use crate::sim::Key;

/// Map a DOM `KeyboardEvent.code` to a game key
pub fn key_from_code(code: &str) -> Option<Key> {
    match code {
        "ArrowRight" => Some(Key::Right),
        "ArrowLeft" => Some(Key::Left),
        "Space" => Some(Key::Jump),
        _ => None,
    }
}
