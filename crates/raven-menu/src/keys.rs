//! Maps crossterm events onto menu input events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use raven_menu_core::{InputEvent, KeyAction, Point, PointerButton};

pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_action(key).map(InputEvent::Key),
        Event::Mouse(mouse) => pointer_event(mouse),
        Event::Resize(_, _) | Event::FocusGained => Some(InputEvent::Expose),
        _ => None,
    }
}

fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::Cancel),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Up => KeyAction::MoveUp,
        KeyCode::Down => KeyAction::MoveDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        KeyCode::Enter => KeyAction::Activate,
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Char('d') => KeyAction::OpacityUp,
        KeyCode::Char('l') => KeyAction::OpacityDown,
        _ => return None,
    };
    Some(action)
}

fn pointer_event(mouse: MouseEvent) -> Option<InputEvent> {
    let position = Point::new(mouse.column as i32, mouse.row as i32);

    let button = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerButton::Primary,
        MouseEventKind::Down(MouseButton::Middle) => PointerButton::Middle,
        MouseEventKind::Down(MouseButton::Right) => PointerButton::Secondary,
        MouseEventKind::ScrollUp => PointerButton::WheelUp,
        MouseEventKind::ScrollDown => PointerButton::WheelDown,
        MouseEventKind::Moved | MouseEventKind::Drag(_) => return Some(InputEvent::Motion(position)),
        _ => return None,
    };
    Some(InputEvent::Button { button, position })
}
