//! Keyboard handling: one-shot events (quit, fire) and held directions.
//!
//! Input model: directions are not acted on per event.  `HeldKeys` records
//! the frame number of the last press/repeat event for every key, and each
//! frame the game asks which keys are still "fresh" (within `HOLD_WINDOW`
//! frames).  Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper
//!   `Press` / `Repeat` / `Release` events, so keys drop on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::HOLD_WINDOW;
use crate::entities::Controls;

/// Discrete input the game loop reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Fire,
    Resize { cols: u16, rows: u16 },
}

/// Map a raw terminal event to a game event.  Unrecognised events are
/// ignored.
///
/// Fire triggers on every `Press` of Space and never on `Repeat` or
/// `Release`.  Terminals without key-event kinds report auto-repeat as
/// `Press`, so there the fire rate follows the OS repeat rate.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            KeyCode::Char(' ') => Some(InputEvent::Fire),
            _ => None,
        },
        Event::Resize(cols, rows) => Some(InputEvent::Resize {
            cols: *cols,
            rows: *rows,
        }),
        _ => None,
    }
}

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Tracks which keys are currently held down.
#[derive(Debug, Default)]
pub struct HeldKeys {
    // key → frame it was last seen (press or repeat)
    last_seen: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw event observed during `frame`.
    pub fn observe(&mut self, event: &Event, frame: u64) {
        if let Event::Key(KeyEvent { code, kind, .. }) = event {
            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    self.last_seen.insert(*code, frame);
                }
                KeyEventKind::Release => {
                    self.last_seen.remove(code);
                }
            }
        }
    }

    /// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn controls(&self, frame: u64) -> Controls {
        Controls {
            left: LEFT_KEYS.iter().any(|k| self.is_held(k, frame)),
            right: RIGHT_KEYS.iter().any(|k| self.is_held(k, frame)),
        }
    }
}
