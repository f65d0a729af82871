//! 输入事件映射 (Input -> Action)
//!
//! 将按键与鼠标事件转换为 Action

use std::io;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::FocusPrevHeader),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::FocusNextHeader),
        KeyCode::Enter | KeyCode::Char('s') => Some(Action::SortFocused),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollBottom),
        _ => None,
    }
}

/// 根据鼠标事件获取对应的 Action
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app
            .header_at(mouse.column, mouse.row)
            .map(Action::HeaderClicked),
        MouseEventKind::Moved => {
            let target = app.header_at(mouse.column, mouse.row);
            // 只在悬停目标变化时发出
            if target != app.headers.hovered() || target.is_some() != app.hint.is_some() {
                Some(Action::HeaderHovered(target))
            } else {
                None
            }
        }
        MouseEventKind::ScrollDown => Some(Action::ScrollDown),
        MouseEventKind::ScrollUp => Some(Action::ScrollUp),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> io::Result<bool> {
    if let Some(action) = get_mouse_action(app, mouse) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Row, Table};
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn app() -> App {
        let table = Table::new(
            "t".to_string(),
            vec![Column::new("Name", false), Column::new("TVL", true)],
            vec![Row::new(vec!["a".into(), "1".into()])],
        )
        .unwrap();
        let mut app = App::new(table, true);
        app.header_hitboxes = vec![Rect::new(1, 2, 10, 1), Rect::new(12, 2, 8, 1)];
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(get_action(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get_action(KeyCode::Enter), Some(Action::SortFocused));
        assert_eq!(get_action(KeyCode::Right), Some(Action::FocusNextHeader));
        assert_eq!(get_action(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_click_hit_testing() {
        let app = app();
        let click = MouseEventKind::Down(MouseButton::Left);

        assert_eq!(
            get_mouse_action(&app, mouse(click, 14, 2)),
            Some(Action::HeaderClicked(1))
        );
        assert_eq!(
            get_mouse_action(&app, mouse(click, 3, 2)),
            Some(Action::HeaderClicked(0))
        );
        // 列间空隙与表体都不是表头
        assert_eq!(get_mouse_action(&app, mouse(click, 11, 2)), None);
        assert_eq!(get_mouse_action(&app, mouse(click, 14, 5)), None);
    }

    #[test]
    fn test_hover_emits_on_change_only() {
        let mut app = app();

        let enter = get_mouse_action(&app, mouse(MouseEventKind::Moved, 14, 2));
        assert_eq!(enter, Some(Action::HeaderHovered(Some(1))));
        app.dispatch(enter.unwrap());

        assert_eq!(
            get_mouse_action(&app, mouse(MouseEventKind::Moved, 15, 2)),
            None
        );
        assert_eq!(
            get_mouse_action(&app, mouse(MouseEventKind::Moved, 15, 6)),
            Some(Action::HeaderHovered(None))
        );
    }

    #[test]
    fn test_mouse_click_sorts() {
        let mut app = app();
        let quit = handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 13, 2),
        )
        .unwrap();
        assert!(!quit);
        assert!(app.headers.active().is_some());
    }
}
