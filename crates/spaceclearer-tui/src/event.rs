//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Selection within the page
    MoveUp,
    MoveDown,

    // Paging
    NextPage,
    PreviousPage,

    // File operations
    /// Move the selected file to the trash (with confirmation).
    Recycle,
    /// Delete the selected file for good (with confirmation).
    PermanentDelete,
    /// Open the selected file with its default application.
    Open,

    // Directory
    ChangeDirectory,
    Rescan,

    // Confirmation
    Confirm,
    Cancel,

    // Application
    Quit,
    ForceQuit,

    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,
            (KeyCode::Esc, _) => KeyAction::Cancel,

            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => KeyAction::MoveUp,

            (KeyCode::Char('n'), KeyModifiers::NONE)
            | (KeyCode::Right, _)
            | (KeyCode::PageDown, _) => KeyAction::NextPage,
            (KeyCode::Char('p'), KeyModifiers::NONE)
            | (KeyCode::Left, _)
            | (KeyCode::PageUp, _) => KeyAction::PreviousPage,

            (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Recycle,
            (KeyCode::Char('D'), KeyModifiers::SHIFT) | (KeyCode::Delete, _) => {
                KeyAction::PermanentDelete
            }
            (KeyCode::Char('o'), KeyModifiers::NONE) | (KeyCode::Enter, _) => KeyAction::Open,

            (KeyCode::Char('c'), KeyModifiers::NONE) => KeyAction::ChangeDirectory,
            (KeyCode::Char('R'), KeyModifiers::SHIFT) => KeyAction::Rescan,

            _ => KeyAction::None,
        }
    }

    /// Convert a key event to an action while a confirmation prompt is open.
    pub fn from_confirm_key(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => KeyAction::Cancel,
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::ForceQuit
            }
            _ => KeyAction::None,
        }
    }
}
