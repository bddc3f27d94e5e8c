//! Key event source.
//!
//! The prompt consumes keys through the narrow [`KeySource`] trait: an
//! endless, non-restartable stream of decoded [`KeyEvent`]s. The crate ships
//! two sources:
//!
//! - [`CrosstermKeySource`] reads the controlling terminal. When stdin is
//!   piped, crossterm falls back to `/dev/tty`, so candidates can be piped in
//!   while keys still come from the keyboard.
//! - [`ScriptedKeys`] replays a fixed list, for tests and demos.

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;

/// Named (non-character) keys the prompt distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyName {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Space,
    Backspace,
    Return,
    Escape,
}

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyEvent {
    /// The character produced, if any.
    pub character: Option<char>,
    /// The named key, if any.
    pub name: Option<KeyName>,
    /// Whether Control was held.
    pub ctrl: bool,
}

impl KeyEvent {
    /// A plain character key.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self {
            character: Some(c),
            name: None,
            ctrl: false,
        }
    }

    /// A character pressed with Control held.
    #[must_use]
    pub const fn ctrl(c: char) -> Self {
        Self {
            character: Some(c),
            name: None,
            ctrl: true,
        }
    }

    /// A named key. Space also carries its character.
    #[must_use]
    pub const fn named(name: KeyName) -> Self {
        Self {
            character: if matches!(name, KeyName::Space) {
                Some(' ')
            } else {
                None
            },
            name: Some(name),
            ctrl: false,
        }
    }

    /// Decodes a crossterm key event. Unknown keys decode to an empty event,
    /// which the prompt drops.
    #[must_use]
    pub fn from_crossterm(key: &event::KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let named = |name| Self {
            character: None,
            name: Some(name),
            ctrl,
        };

        match key.code {
            KeyCode::Up => named(KeyName::Up),
            KeyCode::Down => named(KeyName::Down),
            KeyCode::Left => named(KeyName::Left),
            KeyCode::Right => named(KeyName::Right),
            KeyCode::Tab | KeyCode::BackTab => named(KeyName::Tab),
            KeyCode::Backspace => named(KeyName::Backspace),
            KeyCode::Enter => named(KeyName::Return),
            KeyCode::Esc => named(KeyName::Escape),
            KeyCode::Char(' ') if !ctrl => Self::named(KeyName::Space),
            KeyCode::Char(c) => Self {
                character: Some(c),
                name: None,
                ctrl,
            },
            _ => Self {
                ctrl,
                ..Self::default()
            },
        }
    }
}

/// Source of decoded key events.
pub trait KeySource {
    /// Blocks until the next key press.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying input fails or is exhausted.
    fn next_key(&mut self) -> io::Result<KeyEvent>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        (**self).next_key()
    }
}

/// Reads key presses from the controlling terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeySource;

impl KeySource for CrosstermKeySource {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let TermEvent::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                return Ok(KeyEvent::from_crossterm(&key));
            }
        }
    }
}

/// Replays a fixed sequence of keys, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    /// Builds a script that yields `keys` in order.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Builds a script that types `text` one character at a time.
    #[must_use]
    pub fn typing(text: &str) -> Self {
        Self::new(text.chars().map(|c| {
            if c == ' ' {
                KeyEvent::named(KeyName::Space)
            } else {
                KeyEvent::char(c)
            }
        }))
    }

    /// Appends a key to the script.
    #[must_use]
    pub fn then(mut self, key: KeyEvent) -> Self {
        self.keys.push_back(key);
        self
    }

    /// Keys not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}
