use serde::{Deserialize, Serialize};

use crate::Point;

/// Raw input events delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed {
        button: MouseButton,
        position: Point,
    },
    /// Mouse button released.
    MouseReleased {
        button: MouseButton,
        position: Point,
    },
    /// Mouse moved.
    MouseMoved { position: Point },
    /// Keyboard key pressed.
    KeyPressed { key: Key },
    /// Keyboard key released.
    KeyReleased { key: Key },
}

impl Event {
    /// The pointer subtype of this event, if it is a pointer event.
    pub fn pointer_kind(&self) -> Option<PointerEventKind> {
        match self {
            Event::MousePressed { .. } => Some(PointerEventKind::Down),
            Event::MouseMoved { .. } => Some(PointerEventKind::Move),
            Event::MouseReleased { .. } => Some(PointerEventKind::Up),
            Event::KeyPressed { .. } | Event::KeyReleased { .. } => None,
        }
    }

    /// Cursor position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::MousePressed { position, .. }
            | Event::MouseReleased { position, .. }
            | Event::MouseMoved { position } => Some(*position),
            Event::KeyPressed { .. } | Event::KeyReleased { .. } => None,
        }
    }
}

/// Pointer event subtypes the editing engines react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard keys, named the way key combos report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Control,
    Shift,
    Alt,
    Meta,
    Escape,
    Enter,
    Delete,
    Backspace,
    Space,
    Char(char),
}

/// The set of keys currently held down, in press order.
///
/// Tracking presses and releases is the host's job; the editor only asks
/// whether a given key is part of the combo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCombo(Vec<Key>);

impl KeyCombo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key to the combo, ignoring repeats.
    pub fn press(&mut self, key: Key) {
        if !self.0.contains(&key) {
            self.0.push(key);
        }
    }

    /// Remove a key from the combo.
    pub fn release(&mut self, key: Key) {
        self.0.retain(|held| *held != key);
    }

    pub fn contains(&self, key: Key) -> bool {
        self.0.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> &[Key] {
        &self.0
    }
}

impl FromIterator<Key> for KeyCombo {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut combo = KeyCombo::new();
        for key in iter {
            combo.press(key);
        }
        combo
    }
}
