//! Terminal User Interface for the tool directory.
//!
//! Two pages share one filter state:
//! - **Home**: Featured tools and category tiles
//! - **Browse**: Search and category results with the filter panel
//!
//! Tool details, the submission form and help are overlays on top of
//! either page. The TUI runs on the tokio runtime owned by `main`.

mod app;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use input::{KeyEvent, TextInput};
pub use runner::TuiRunner;
pub use state::{AppState, InteractionMode, View};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Palette shared by the views.
pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const DIM: Color = Color::DarkGray;
    pub const SELECTED: Color = Color::Rgb(48, 48, 72);
    pub const FEATURED: Color = Color::Rgb(255, 215, 0); // Gold
    pub const PENDING: Color = Color::Rgb(255, 215, 0); // Gold
    pub const SUCCESS: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const FAILURE: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const FREE: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const FREEMIUM: Color = Color::Rgb(100, 149, 237); // Cornflower
    pub const PAID: Color = Color::Rgb(218, 112, 214); // Orchid
}
