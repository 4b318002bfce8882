/// Mapping from terminal events to scene actions
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use cube3d_core::Action;

/// Translate a terminal event into an action, or `None` if it is ignored.
///
/// | event                 | action        |
/// |-----------------------|---------------|
/// | Esc, `q`, Ctrl-C      | `Quit`        |
/// | wheel up / down       | `ScrollUp` / `ScrollDown` |
/// | Left / Right arrow    | `ViewCloser` / `ViewFarther` |
/// | `+` `=` / `-` `_`     | `SpeedUp` / `SpeedDown` |
pub fn action_for(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(key),
        Event::Mouse(mouse) => mouse_action(mouse),
        _ => None,
    }
}

fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Left => Some(Action::ViewCloser),
        KeyCode::Right => Some(Action::ViewFarther),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::SpeedUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::SpeedDown),
        _ => None,
    }
}

fn mouse_action(mouse: &MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::ScrollUp),
        MouseEventKind::ScrollDown => Some(Action::ScrollDown),
        _ => None,
    }
}
