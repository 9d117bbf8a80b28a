//! Platform-independent keyboard events.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    KeyDown,
    KeyUp,
}

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Windows key, Cmd on macOS.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    /// The platform's shortcut modifier held down.
    pub const COMMAND: Modifiers = Modifiers {
        ctrl: cfg!(not(target_os = "macos")),
        meta: cfg!(target_os = "macos"),
        ..Modifiers::NONE
    };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }

    /// Ctrl, or Cmd on macOS.
    pub fn command_or_ctrl(&self) -> bool {
        if cfg!(target_os = "macos") {
            self.meta
        } else {
            self.ctrl
        }
    }
}

/// Keys a form field reacts to. Printable keys arrive as [`KeyCode::Character`]
/// with their text in [`KeyEvent::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Character,
    A,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Unknown,
}

/// A keyboard event routed to the focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    /// Text produced by the key, after layout and modifiers; empty for
    /// non-character keys.
    pub text: String,
    pub modifiers: Modifiers,
    pub event_type: KeyEventType,
}

impl KeyEvent {
    pub fn new(
        key_code: KeyCode,
        text: impl Into<String>,
        modifiers: Modifiers,
        event_type: KeyEventType,
    ) -> Self {
        Self {
            key_code,
            text: text.into(),
            modifiers,
            event_type,
        }
    }

    pub fn key_down(key_code: KeyCode) -> Self {
        Self::new(key_code, "", Modifiers::NONE, KeyEventType::KeyDown)
    }

    pub fn key_down_with_modifiers(key_code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(key_code, "", modifiers, KeyEventType::KeyDown)
    }

    /// A key press that types `ch`.
    pub fn character(ch: char) -> Self {
        Self::new(
            KeyCode::Character,
            ch.to_string(),
            Modifiers::NONE,
            KeyEventType::KeyDown,
        )
    }

    pub fn is_key_down(&self) -> bool {
        self.event_type == KeyEventType::KeyDown
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyEvent({:?}, text=\"{}\", {:?})",
            self.key_code, self.text, self.event_type
        )
    }
}

/// Focus change of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    Gained,
    /// `temporary` is set when focus moves to another window or a popup and is
    /// expected to return.
    Lost { temporary: bool },
}

impl FocusEvent {
    pub const LOST: FocusEvent = FocusEvent::Lost { temporary: false };

    /// True for the focus losses that end an editing session.
    pub fn is_permanent_loss(&self) -> bool {
        matches!(self, FocusEvent::Lost { temporary: false })
    }
}
