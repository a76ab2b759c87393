//! Core rendering logic for the form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::FormApp;
use super::layout::FormAreas;
use super::theme::Theme;
use crate::core::{Category, ErrorTarget, EvaluationResult, Field};
use crate::scale::{marker_index, SCALE_MAX, SCALE_MIN};

const HINTS: &str = "Enter submit  Tab switch field  Ctrl-L legend  Esc quit";

/// Render the boxed form into precomputed areas
pub fn render_ui(frame: &mut Frame, app: &FormApp, areas: FormAreas) {
    let theme = Theme::default_theme();

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Body Mass Index",
            theme.title_style(),
        ))),
        areas.title,
    );

    render_field(frame, app, Field::Height, &theme, areas.height);
    render_field(frame, app, Field::Weight, &theme, areas.weight);

    if let Some(error) = app.form().visible_error(ErrorTarget::General) {
        frame.render_widget(
            Paragraph::new(error.message.as_str()).style(theme.banner_style()),
            areas.banner,
        );
    }

    if let Some(result) = app.form().result() {
        render_result(frame, result, app.is_highlighted(), &theme, areas.result);
    }

    if let Some(legend) = areas.legend {
        render_legend(frame, &theme, legend);
    }

    frame.render_widget(
        Paragraph::new(HINTS).style(theme.hint_style()),
        areas.hints,
    );
}

/// Render plain lines for very small terminals
pub fn render_minimal(frame: &mut Frame, app: &FormApp) {
    let theme = Theme::default_theme();
    let form = app.form();
    let mut lines = Vec::new();

    for field in Field::ALL {
        let marker = if app.focus() == field { ">" } else { " " };
        lines.push(Line::from(format!(
            "{marker}{} ({}): {}",
            field.label(),
            field.unit(),
            form.text(field)
        )));
        if let Some(error) = form.visible_error(ErrorTarget::Field(field)) {
            lines.push(Line::from(Span::styled(
                format!("  {}", error.message),
                theme.error_style(),
            )));
        }
    }

    if let Some(error) = form.visible_error(ErrorTarget::General) {
        lines.push(Line::from(Span::styled(
            error.message.clone(),
            theme.banner_style(),
        )));
    }

    if let Some(result) = form.result() {
        lines.push(Line::from(vec![
            Span::raw(format!("BMI {:.1} ", result.score)),
            Span::styled(result.category.label(), theme.category_style(result.category)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), frame.area());
}

fn render_field(frame: &mut Frame, app: &FormApp, field: Field, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let focused = app.focus() == field;
    let error = app.form().visible_error(ErrorTarget::Field(field));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", field.label(), field.unit()))
        .border_style(theme.field_border_style(focused, error.is_some()));

    let mut spans = vec![Span::styled(
        app.form().text(field).to_string(),
        theme.input_text_style(),
    )];
    if focused {
        spans.push(Span::styled("_", theme.hint_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(error.message.as_str()).style(theme.error_style()),
            chunks[1],
        );
    }
}

fn render_result(
    frame: &mut Frame,
    result: &EvaluationResult,
    highlighted: bool,
    theme: &Theme,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Result ")
        .border_style(theme.result_border_style(result.category, highlighted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:.1}", result.score), theme.category_style(result.category)),
            Span::raw("  "),
            Span::styled(result.category.label(), theme.category_style(result.category)),
        ]),
        Line::from(""),
        Line::from(render_gauge_spans(width, theme)),
        Line::from(Span::raw(render_marker_line(result.score, width))),
        Line::from(Span::styled(
            format!(
                "{:<w$}{}",
                SCALE_MIN,
                SCALE_MAX,
                w = width.saturating_sub(SCALE_MAX.to_string().len()) + 1
            ),
            theme.hint_style(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_legend(frame: &mut Frame, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Categories ")
        .border_style(theme.hint_style());

    let lines: Vec<Line> = Category::ALL
        .iter()
        .map(|&category| {
            Line::from(vec![
                Span::styled("■ ", theme.category_style(category)),
                Span::raw(format!("{:<12}", category.label())),
                Span::styled(category.range_label(), theme.hint_style()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Band shown under cell `index` of a gauge `width` cells wide
pub fn gauge_cell_category(index: usize, width: usize) -> Category {
    if width <= 1 {
        return Category::from_score(SCALE_MIN);
    }
    let fraction = index as f64 / (width - 1) as f64;
    Category::from_score(SCALE_MIN + fraction * (SCALE_MAX - SCALE_MIN))
}

fn render_gauge_spans(width: usize, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    let mut run_start = 0;
    for i in 1..=width {
        let boundary = i == width
            || gauge_cell_category(i, width) != gauge_cell_category(run_start, width);
        if boundary {
            let category = gauge_cell_category(run_start, width);
            spans.push(Span::styled(
                "━".repeat(i - run_start),
                theme.category_style(category),
            ));
            run_start = i;
        }
    }
    spans
}

/// Line with a single `▲` under the score's gauge cell
pub fn render_marker_line(score: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    format!("{}▲", " ".repeat(marker_index(score, width) + 1))
}
