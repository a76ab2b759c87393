//! Application state for the terminal form.

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use super::animation::Highlight;
use super::input::{classify_key, FormAction};
use super::layout::render_adaptive;
use crate::config::BodyscaleConfig;
use crate::core::Field;
use crate::form::{FormController, SubmitOutcome};

/// Form plus the view state around it.
pub struct FormApp {
    form: FormController,
    focus: Field,
    highlight: Highlight,
    show_legend: bool,
}

impl FormApp {
    pub fn new(config: &BodyscaleConfig) -> Self {
        Self {
            form: FormController::new(config.bounds),
            focus: Field::Height,
            highlight: Highlight::new(config.display.highlight_duration()),
            show_legend: config.display.show_legend,
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_active()
    }

    pub fn shows_legend(&self) -> bool {
        self.show_legend
    }

    /// Handle a key. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match classify_key(key) {
            Some(action) => self.apply(action, Instant::now()),
            None => false,
        }
    }

    /// Insert pasted text into the focused field, dropping control characters.
    pub fn paste(&mut self, text: &str) {
        let mut value = self.form.text(self.focus).to_string();
        value.extend(text.chars().filter(|c| !c.is_control()));
        self.form.set_text(self.focus, value);
    }

    /// Perform an action at time `now`. Returns `true` on quit.
    pub fn apply(&mut self, action: FormAction, now: Instant) -> bool {
        match action {
            FormAction::Insert(c) => self.form.push_char(self.focus, c),
            FormAction::Backspace => self.form.pop_char(self.focus),
            FormAction::ClearField => self.form.set_text(self.focus, String::new()),
            FormAction::FocusNext | FormAction::FocusPrev => self.focus = self.focus.other(),
            FormAction::ToggleLegend => self.show_legend = !self.show_legend,
            FormAction::Submit => {
                if let SubmitOutcome::Evaluated(_) = self.form.submit() {
                    self.highlight.trigger_at(now);
                }
            }
            FormAction::Quit => return true,
        }
        false
    }

    /// Advance timers.
    pub fn tick_at(&mut self, now: Instant) {
        self.highlight.tick_at(now);
    }

    pub fn render(&self, frame: &mut Frame) {
        render_adaptive(frame, self);
    }
}
