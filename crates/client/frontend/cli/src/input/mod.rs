//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use adventure_core::{KeySymbol, MovementInput};

mod held;
pub use held::HeldKeys;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward a discrete key press to the adventure manager.
    Key(KeySymbol),
    /// An arrow key went down (or repeated).
    Hold(MovementInput),
    /// An arrow key went up. Only terminals with enhanced keyboard
    /// reporting send these.
    Release(MovementInput),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into adventure input.
///
/// Arrow keys drive movement and are never forwarded as symbols; `q`, `Esc`
/// and `Ctrl+C` quit; every other key is forwarded.
#[derive(Clone, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if let Some(direction) = arrow(key.code) {
            return match key.kind {
                KeyEventKind::Release => KeyAction::Release(direction),
                KeyEventKind::Press | KeyEventKind::Repeat => KeyAction::Hold(direction),
            };
        }

        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Esc => KeyAction::Quit,
            code => symbol(code).map_or(KeyAction::None, KeyAction::Key),
        }
    }
}

fn arrow(code: KeyCode) -> Option<MovementInput> {
    match code {
        KeyCode::Right => Some(MovementInput::RIGHT),
        KeyCode::Left => Some(MovementInput::LEFT),
        KeyCode::Down => Some(MovementInput::DOWN),
        KeyCode::Up => Some(MovementInput::UP),
        _ => None,
    }
}

/// Names a key the way the state tables spell it.
fn symbol(code: KeyCode) -> Option<KeySymbol> {
    let name = match code {
        KeyCode::Char(ch) => return Some(KeySymbol::from_char(ch)),
        KeyCode::Enter => "ENTER",
        KeyCode::Tab => "TAB",
        KeyCode::Backspace => "BACKSPACE",
        KeyCode::Delete => "DELETE",
        KeyCode::Home => "HOME",
        KeyCode::End => "END",
        KeyCode::PageUp => "PAGEUP",
        KeyCode::PageDown => "PAGEDOWN",
        KeyCode::F(n) => return Some(KeySymbol::new(format!("F{n}"))),
        _ => return None,
    };
    Some(KeySymbol::new(name))
}
