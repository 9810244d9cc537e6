//! Keyboard mapping from terminal events to engine actions
//!
//! The mapping depends on the current status: gameplay keys only bind
//! while running, menu keys follow the screen being shown. Quit is
//! handled by the caller through [`is_quit`] and works everywhere.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Action, Shift, Spin, Status};

/// Map a key press to an action for the current status.
pub fn action_for_key(key: KeyEvent, status: Status) -> Option<Action> {
    match status {
        Status::Running => running_action(key.code),
        Status::Paused => match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::Resume),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
            _ => None,
        },
        Status::Idle => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Start),
            _ => None,
        },
        Status::Over => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
            _ => None,
        },
    }
}

fn running_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left => Some(Action::Move(Shift::Left)),
        KeyCode::Right => Some(Action::Move(Shift::Right)),
        KeyCode::Down => Some(Action::SoftDrop),
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => Some(Action::Rotate(Spin::Cw)),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Action::Rotate(Spin::Ccw)),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Action::Rotate(Spin::Half))
        }
        KeyCode::Char(' ') => Some(Action::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        _ => None,
    }
}

/// q, Q or Ctrl-C quit from any screen.
pub fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
