use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Backspace,
    Delete,
    Enter,
    Esc,
    Left,
    Right,
    Tab,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    bits: u8,
}

impl KeyModifiers {
    pub const NONE: KeyModifiers = KeyModifiers { bits: 0 };
    pub const SHIFT: KeyModifiers = KeyModifiers { bits: 1 << 0 };
    pub const CONTROL: KeyModifiers = KeyModifiers { bits: 1 << 1 };
    pub const ALT: KeyModifiers = KeyModifiers { bits: 1 << 2 };

    pub fn contains(self, other: KeyModifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }
}

impl BitOr for KeyModifiers {
    type Output = KeyModifiers;

    fn bitor(self, rhs: KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for KeyModifiers {
    fn bitor_assign(&mut self, rhs: KeyModifiers) {
        self.bits |= rhs.bits;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn alt(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::ALT)
    }
}

/// Translate a crossterm key event. Callers filter on
/// `KeyEventKind::Press` first; release and repeat events pass through
/// unchanged.
pub fn map_key_event(event: crossterm::event::KeyEvent) -> KeyEvent {
    use crossterm::event::KeyCode as CtKeyCode;

    let code = match event.code {
        CtKeyCode::Char(ch) => KeyCode::Char(ch),
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Delete => KeyCode::Delete,
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Esc,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        CtKeyCode::Tab => KeyCode::Tab,
        _ => KeyCode::Other,
    };

    let mut modifiers = KeyModifiers::NONE;
    if event
        .modifiers
        .contains(crossterm::event::KeyModifiers::SHIFT)
    {
        modifiers |= KeyModifiers::SHIFT;
    }
    if event
        .modifiers
        .contains(crossterm::event::KeyModifiers::CONTROL)
    {
        modifiers |= KeyModifiers::CONTROL;
    }
    if event
        .modifiers
        .contains(crossterm::event::KeyModifiers::ALT)
    {
        modifiers |= KeyModifiers::ALT;
    }

    KeyEvent { code, modifiers }
}
