//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* display nodes and turns them into pixels on
//! the terminal.  No content loading happens here.

pub mod error;
pub mod layout;
pub mod markup;
pub mod stage;
pub mod tabs;
pub mod theme;
