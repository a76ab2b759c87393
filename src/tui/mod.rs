//! Terminal form for entering height and weight.
//!
//! The form shows two inputs, a result card with a scale gauge once a
//! result exists, and a legend of the four bands. Validation messages appear
//! only after the first submit; from then on they follow every edit.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bodyscale::config::BodyscaleConfig;
//! use bodyscale::tui::FormTui;
//!
//! let mut tui = FormTui::new(&BodyscaleConfig::default())?;
//! tui.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod animation;
pub mod app;
pub mod input;
pub mod layout;
pub mod renderer;
pub mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::config::BodyscaleConfig;
use crate::observability::set_tui_active;
use app::FormApp;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Owns the terminal while the form is open
pub struct FormTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: FormApp,
}

impl FormTui {
    /// Enter raw mode and the alternate screen
    pub fn new(config: &BodyscaleConfig) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        set_tui_active(true);

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: FormApp::new(config),
        })
    }

    pub fn app(&self) -> &FormApp {
        &self.app
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.app.tick_at(Instant::now());
            self.terminal.draw(|f| self.app.render(f))?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Paste(text) => self.app.paste(&text),
                _ => {}
            }
        }

        self.cleanup()?;
        Ok(())
    }

    /// Restore the terminal
    pub fn cleanup(&mut self) -> Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for FormTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
