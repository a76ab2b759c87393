//! Responsive layout management for different terminal sizes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::app::FormApp;
use super::renderer::{render_minimal, render_ui};

/// Layout mode based on terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Form on the left, legend on the right (>=80 cols)
    Wide,
    /// Single column, legend under the result (40-79 cols)
    Stacked,
    /// Plain lines, no boxes (<40 cols or <16 rows)
    Minimal,
}

impl LayoutMode {
    pub fn from_terminal_size(width: u16, height: u16) -> Self {
        if width < 40 || height < 16 {
            return Self::Minimal;
        }
        match width {
            40..=79 => Self::Stacked,
            _ => Self::Wide,
        }
    }
}

/// Areas of the boxed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    pub title: Rect,
    pub height: Rect,
    pub weight: Rect,
    pub banner: Rect,
    pub result: Rect,
    pub legend: Option<Rect>,
    pub hints: Rect,
}

const LEGEND_HEIGHT: u16 = 6;
const LEGEND_WIDTH: u16 = 30;

fn split_column(area: Rect, legend_below: bool) -> FormAreas {
    let mut constraints = vec![
        Constraint::Length(2), // Title
        Constraint::Length(4), // Height box + error line
        Constraint::Length(4), // Weight box + error line
        Constraint::Length(1), // General banner
        Constraint::Min(6),    // Result card
    ];
    if legend_below {
        constraints.push(Constraint::Length(LEGEND_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // Key hints

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    FormAreas {
        title: chunks[0],
        height: chunks[1],
        weight: chunks[2],
        banner: chunks[3],
        result: chunks[4],
        legend: legend_below.then(|| chunks[5]),
        hints: chunks[chunks.len() - 1],
    }
}

/// Calculate the boxed layout for `mode`
pub fn calculate_layout(area: Rect, mode: LayoutMode, show_legend: bool) -> FormAreas {
    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0)])
        .split(area)[0];

    match mode {
        LayoutMode::Wide if show_legend => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(40), Constraint::Length(LEGEND_WIDTH)])
                .split(inner);
            let mut areas = split_column(columns[0], false);
            let legend_column = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Length(LEGEND_HEIGHT),
                    Constraint::Min(0),
                ])
                .split(columns[1]);
            areas.legend = Some(legend_column[1]);
            areas
        }
        LayoutMode::Stacked => split_column(inner, show_legend),
        _ => split_column(inner, false),
    }
}

/// Render the form with adaptive layout
pub fn render_adaptive(frame: &mut Frame, app: &FormApp) {
    let area = frame.area();
    let mode = LayoutMode::from_terminal_size(area.width, area.height);

    match mode {
        LayoutMode::Minimal => render_minimal(frame, app),
        _ => render_ui(frame, app, calculate_layout(area, mode, app.shows_legend())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_selection() {
        assert_eq!(LayoutMode::from_terminal_size(30, 40), LayoutMode::Minimal);
        assert_eq!(LayoutMode::from_terminal_size(100, 10), LayoutMode::Minimal);
        assert_eq!(LayoutMode::from_terminal_size(60, 30), LayoutMode::Stacked);
        assert_eq!(LayoutMode::from_terminal_size(120, 30), LayoutMode::Wide);
    }

    #[test]
    fn test_wide_layout_puts_legend_right() {
        let areas = calculate_layout(Rect::new(0, 0, 100, 30), LayoutMode::Wide, true);
        let legend = areas.legend.unwrap();
        assert!(legend.x > areas.result.x);
        assert_eq!(legend.height, LEGEND_HEIGHT);
        assert_eq!(areas.height.height, 4);
        assert_eq!(areas.hints.height, 1);
    }

    #[test]
    fn test_stacked_layout_puts_legend_below() {
        let areas = calculate_layout(Rect::new(0, 0, 60, 40), LayoutMode::Stacked, true);
        let legend = areas.legend.unwrap();
        assert!(legend.y > areas.result.y);
        assert_eq!(legend.x, areas.result.x);
    }

    #[test]
    fn test_hidden_legend() {
        let areas = calculate_layout(Rect::new(0, 0, 100, 30), LayoutMode::Wide, false);
        assert!(areas.legend.is_none());
        let areas = calculate_layout(Rect::new(0, 0, 60, 40), LayoutMode::Stacked, false);
        assert!(areas.legend.is_none());
    }
}
