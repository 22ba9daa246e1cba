use winit::keyboard::KeyCode;

/// Keys the demos react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    Z,
    X,
    Plus,
    Minus,
}

impl Key {
    /// Map a typed character, case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(Key::W),
            'a' => Some(Key::A),
            's' => Some(Key::S),
            'd' => Some(Key::D),
            'q' => Some(Key::Q),
            'e' => Some(Key::E),
            'z' => Some(Key::Z),
            'x' => Some(Key::X),
            '+' | '=' => Some(Key::Plus),
            '-' => Some(Key::Minus),
            _ => None,
        }
    }

    /// Map a winit physical key
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(Key::W),
            KeyCode::KeyA => Some(Key::A),
            KeyCode::KeyS => Some(Key::S),
            KeyCode::KeyD => Some(Key::D),
            KeyCode::KeyQ => Some(Key::Q),
            KeyCode::KeyE => Some(Key::E),
            KeyCode::KeyZ => Some(Key::Z),
            KeyCode::KeyX => Some(Key::X),
            KeyCode::Equal | KeyCode::NumpadAdd => Some(Key::Plus),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(Key::Minus),
            _ => None,
        }
    }
}
