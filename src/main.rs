//! A keyboard-driven TUI portfolio viewer.
//!
//! Renders intro, about, and work tabs into the terminal from a JSON
//! content document. Point it at a file (default `content.json`) or pass
//! `--url` to fetch one over HTTP.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{AppState, Session},
};
use crate::core::store::{self, ContentSource};
use crate::core::view::{self, Tab};
use crate::ui::{
    error::ErrorView, layout::AppLayout, stage::StageWidget, tabs::TabBar, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Terminal portfolio viewer")]
struct Cli {
    /// Content document to load (defaults to `content.json`).
    content: Option<PathBuf>,

    /// Fetch the content document from an http(s) URL instead of a file.
    #[arg(long, conflicts_with = "content")]
    url: Option<String>,

    /// Tab shown on startup: intro, about, or work.
    #[arg(long)]
    tab: Option<String>,
}

const STATUS_HINT: &str = "1/2/3: tabs | ←/→: switch | ↑/↓: scroll | q: quit";
const ERROR_HINT: &str = "q: quit";

// ───────────────────────────────────────── main ──────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let user_config = config::AppConfig::load();

    // ── resolve content source and startup tab ────────────────
    let source = if let Some(url) = cli.url {
        ContentSource::Url(url)
    } else if let Some(path) = cli.content {
        ContentSource::File(path)
    } else if let Some(configured) = user_config.content.as_deref() {
        ContentSource::parse(configured)
    } else {
        ContentSource::File(PathBuf::from("content.json"))
    };

    let start_tab = cli
        .tab
        .as_deref()
        .and_then(Tab::parse)
        .or(user_config.start_tab)
        .unwrap_or_default();

    // ── one-shot content load ─────────────────────────────────
    // The only suspension point of the session. A failure is terminal:
    // the loop below then only ever draws the error view.
    let session = match store::load(&source).await {
        Ok(doc) => Session::Ready { doc },
        Err(error) => {
            tracing::warn!("content load from {source} failed: {error}");
            Session::Failed { error }
        }
    };
    let mut state = AppState::new(session, start_tab);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(100));

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            state.terminal_area = frame.area();
            let layout = AppLayout::from_area(frame.area());

            match &state.session {
                Session::Ready { doc } => {
                    frame.render_widget(
                        TabBar {
                            active: state.active_tab,
                        },
                        layout.tabs_area,
                    );

                    // Re-derive the stage from the document every frame —
                    // the previous frame's nodes are gone, nothing leaks
                    // across tab switches.
                    let nodes = view::build(state.active_tab, doc);
                    frame.render_widget(
                        StageWidget::new(&nodes)
                            .scroll(state.scroll)
                            .block(stage_block(state.active_tab.label())),
                        layout.stage_area,
                    );

                    frame.render_widget(
                        Paragraph::new(STATUS_HINT).style(Theme::status_bar_style()),
                        layout.status_area,
                    );
                }
                Session::Failed { error } => {
                    // No tab bar: tab content is never shown this session.
                    frame.render_widget(
                        ErrorView::new(error).block(stage_block("error")),
                        layout.stage_area,
                    );
                    frame.render_widget(
                        Paragraph::new(ERROR_HINT).style(Theme::status_bar_style()),
                        layout.status_area,
                    );
                }
            }
        })?;

        match events.recv().await {
            Some(AppEvent::Key(k)) => handler::handle_key(&mut state, k),
            Some(AppEvent::Mouse(m)) => handler::handle_mouse(&mut state, m),
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
            None => break,
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn stage_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style())
}
