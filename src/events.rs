//! Event handling module for keyboard and mouse events.
//!
//! This module extracts the event handling code from the main loop into
//! dedicated functions for better organization and maintainability.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::App;
use crate::viewer::ExampleView;

/// Result of handling a key event.
pub enum KeyEventResult {
    /// Continue the event loop normally
    Continue,
    /// Should quit the application
    Quit,
}

/// Handle a key press event.
///
/// Returns `KeyEventResult::Quit` if the application should exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> KeyEventResult {
    match key.code {
        KeyCode::Char('q') => return KeyEventResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyEventResult::Quit;
        }
        KeyCode::Char('1') => app.select_view(ExampleView::Original),
        KeyCode::Char('2') => app.select_view(ExampleView::Diff),
        KeyCode::Char('3') => app.select_view(ExampleView::Optimized),
        KeyCode::Tab => app.select_next_view(),
        KeyCode::BackTab => app.select_prev_view(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('s') => app.toggle_syntax_highlight(),
        KeyCode::Char('n') => app.toggle_line_numbers(),
        KeyCode::Char('y') => app.copy_active_view(),
        KeyCode::Char('i') => app.copy_install_command(),
        _ => {}
    }
    KeyEventResult::Continue
}

/// Handle a mouse event: wheel scrolling and click-zone hits.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_up(3),
        MouseEventKind::ScrollDown => app.scroll_down(3),
        MouseEventKind::Down(MouseButton::Left) => {
            let pos = Position::new(mouse.column, mouse.row);
            let action = app
                .zones
                .iter()
                .find(|z| z.rect.contains(pos))
                .map(|z| z.action);
            if let Some(action) = action {
                app.apply_action(action);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_select_views() {
        let mut app = App::new(sample::sources());
        handle_key_event(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.state.active(), ExampleView::Diff);
        handle_key_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.state.active(), ExampleView::Optimized);
        handle_key_event(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.state.active(), ExampleView::Original);
    }

    #[test]
    fn tab_cycles_views_in_order_and_wraps() {
        let mut app = App::new(sample::sources());
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.state.active(), ExampleView::Diff);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.state.active(), ExampleView::Optimized);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.state.active(), ExampleView::Original);
        handle_key_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.state.active(), ExampleView::Optimized);
    }

    #[test]
    fn q_requests_quit() {
        let mut app = App::new(sample::sources());
        assert!(matches!(
            handle_key_event(&mut app, key(KeyCode::Char('q'))),
            KeyEventResult::Quit
        ));
    }

    #[test]
    fn copy_key_queues_the_active_source() {
        let mut app = App::new(sample::sources());
        handle_key_event(&mut app, key(KeyCode::Char('y')));
        let queued = app.take_pending_clipboard();
        assert_eq!(queued.as_deref(), Some(app.sources.original.as_str()));
    }
}
