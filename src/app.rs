use crate::config::hotkeys::format_hotkey_display;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogEntries};
use crate::state::State;
use crate::storage::FileStorage;
use crate::ui::Theme;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. A
    /// storage directory passed on the command line wins over the one in the
    /// configuration. Returns the result of the application execution.
    ///
    pub fn start(config: Config, storage_dir: Option<PathBuf>) -> AppResult<()> {
        let log_entries = LogEntries::default();
        logger::init(config.log_level_filter(), Arc::clone(&log_entries))?;

        info!("Starting application...");
        let storage_dir = match storage_dir {
            Some(dir) => dir,
            None => config.storage_dir()?,
        };
        let storage = FileStorage::open(&storage_dir)?;
        debug!("Using storage file {}", storage.path().display());

        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', expected one of: {}",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });

        for conflict in config.hotkeys.conflicts() {
            warn!(
                "Key '{}' is bound to {:?} in the {:?} view; {:?} takes precedence",
                format_hotkey_display(&conflict.hotkey),
                conflict.actions,
                conflict.context,
                conflict.actions[0]
            );
        }

        let mut state = State::new(Box::new(storage), theme, config.hotkeys, log_entries);
        state.load_saved_questions();

        let mut app = App { state };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Take over the terminal, run the event loop and restore the terminal
    /// even when the loop fails.
    ///
    fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).map_err(terminal_error("enter alternate screen"))?;
        enable_raw_mode().map_err(terminal_error("enable raw mode"))?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(terminal_error("create terminal"))?;
        terminal.hide_cursor().map_err(terminal_error("hide cursor"))?;

        let result = self.run(&mut terminal);

        disable_raw_mode().map_err(terminal_error("disable raw mode"))?;
        execute!(io::stdout(), LeaveAlternateScreen)
            .map_err(terminal_error("leave alternate screen"))?;
        terminal.show_cursor().map_err(terminal_error("show cursor"))?;

        result
    }

    /// Draw, then wait for and apply the next key press, until exit is
    /// requested.
    ///
    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

/// Wrap a failed terminal setup or teardown step in `AppError::Terminal`.
///
fn terminal_error(step: &'static str) -> impl Fn(io::Error) -> AppError {
    move |e| AppError::Terminal(format!("failed to {}: {}", step, e))
}
