//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::view::{self, Tab};
use crate::ui::layout::AppLayout;
use crate::ui::{stage, tabs};

use super::state::{AppState, Session};

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Only process Press events (ignore Release/Repeat on supported terminals).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+c always quits, regardless of session.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
        }
        _ => match state.session {
            Session::Ready { .. } => handle_content_key(state, key),
            // A failed load is terminal for the session: tab and scroll
            // input is accepted but ignored, quit is the only way out.
            Session::Failed { .. } => {}
        },
    }
}

fn handle_content_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => {
            if let Some(tab) = Tab::from_digit(c) {
                state.set_active_tab(tab);
            } else {
                match c {
                    'k' => scroll_up(state),
                    'j' => scroll_down(state),
                    _ => {}
                }
            }
        }
        KeyCode::Left => state.set_active_tab(state.active_tab.prev()),
        KeyCode::Right => state.set_active_tab(state.active_tab.next()),
        KeyCode::Up => scroll_up(state),
        KeyCode::Down => scroll_down(state),
        KeyCode::Home => state.scroll = 0,
        _ => {}
    }
}

/// Process a mouse event — tab-bar clicks and stage scrolling.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if matches!(state.session, Session::Failed { .. }) {
        return;
    }

    let layout = AppLayout::from_area(state.terminal_area);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(tab) = tabs::tab_hit(layout.tabs_area, mouse.column, mouse.row) {
                state.set_active_tab(tab);
            }
        }
        MouseEventKind::ScrollUp => scroll_up(state),
        MouseEventKind::ScrollDown => scroll_down(state),
        _ => {}
    }
}

fn scroll_up(state: &mut AppState) {
    state.scroll = state.scroll.saturating_sub(1);
}

fn scroll_down(state: &mut AppState) {
    state.scroll = state.scroll.saturating_add(1).min(scroll_limit(state));
}

/// Upper scroll bound: the stage's unwrapped line count. Wrapping can only
/// add lines, so this never cuts reachable content off.
fn scroll_limit(state: &AppState) -> u16 {
    let Session::Ready { doc } = &state.session else {
        return 0;
    };
    let nodes = view::build(state.active_tab, doc);
    stage::line_count(&nodes)
        .saturating_sub(1)
        .min(u16::MAX as usize) as u16
}
