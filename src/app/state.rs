//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use crate::core::content::ContentDocument;
use crate::core::store::LoadError;
use crate::core::view::Tab;

/// Outcome of the one-shot startup load, fixed for the whole session.
pub enum Session {
    /// The document loaded; tabs render from it, read-only.
    Ready { doc: ContentDocument },
    /// The load failed; only the error view is ever shown.
    Failed { error: LoadError },
}

/// Top-level application state.
pub struct AppState {
    /// Loaded document or the load failure — never changes after startup.
    pub session: Session,
    /// The single active tab. Mutated only by the input handler.
    pub active_tab: Tab,
    /// Vertical scroll offset of the stage, reset on every tab switch.
    pub scroll: u16,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Terminal size as of the last draw/resize, for mouse hit-testing.
    pub terminal_area: ratatui::layout::Rect,
}

impl AppState {
    pub fn new(session: Session, start_tab: Tab) -> Self {
        Self {
            session,
            active_tab: start_tab,
            scroll: 0,
            should_quit: false,
            terminal_area: ratatui::layout::Rect::default(),
        }
    }

    /// Switch to `tab` and discard the previous tab's viewport position.
    /// Re-selecting the current tab is allowed; the next frame re-renders
    /// either way.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.scroll = 0;
    }
}
