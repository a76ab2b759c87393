//! Text and JSON rendering of evaluation results and the legend.

use serde::Serialize;

use crate::core::{Category, ErrorTarget, EvaluationResult, ValidationErrorKind};
use crate::form::FormErrors;
use crate::formatting::OutputFormatter;
use crate::scale::{marker_index, scale_position, SCALE_MAX, SCALE_MIN};

/// Width of the text gauge in cells.
pub const GAUGE_WIDTH: usize = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Serializable view of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub score: f64,
    pub raw_score: f64,
    pub category: Category,
    pub range: &'static str,
    pub scale_position: f64,
}

impl From<&EvaluationResult> for EvaluationReport {
    fn from(result: &EvaluationResult) -> Self {
        Self {
            height_cm: result.height_cm,
            weight_kg: result.weight_kg,
            score: result.score,
            raw_score: result.raw_score,
            category: result.category,
            range: result.category.range_label(),
            scale_position: scale_position(result.score),
        }
    }
}

/// One row of the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub category: Category,
    pub range: &'static str,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

pub fn legend_entries() -> Vec<LegendEntry> {
    Category::ALL
        .iter()
        .map(|&category| {
            let (lower, upper) = category.bounds();
            LegendEntry {
                category,
                range: category.range_label(),
                lower,
                upper,
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct ErrorEntry<'a> {
    target: ErrorTarget,
    kind: ValidationErrorKind,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    errors: Vec<ErrorEntry<'a>>,
}

/// Text gauge from `SCALE_MIN` to `SCALE_MAX` with a marker at `score`.
pub fn render_gauge(score: f64, width: usize) -> String {
    let marker = marker_index(score, width);
    let track: String = (0..width)
        .map(|i| if i == marker { '|' } else { '-' })
        .collect();
    format!("{} [{}] {}", SCALE_MIN, track, SCALE_MAX)
}

pub fn render_evaluation(
    result: &EvaluationResult,
    format: OutputFormat,
    formatter: &dyn OutputFormatter,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&EvaluationReport::from(result)),
        OutputFormat::Terminal => {
            let score = format!("{:.1}", result.score);
            let label = result.category.label();
            Ok(format!(
                "{} {}  {}\n{}\n",
                formatter.header("BMI"),
                formatter.bold(&score),
                formatter.category(label, result.category),
                formatter.dim(&render_gauge(result.score, GAUGE_WIDTH)),
            ))
        }
    }
}

pub fn render_errors(
    errors: &FormErrors,
    format: OutputFormat,
    formatter: &dyn OutputFormatter,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => {
            let report = ErrorReport {
                errors: errors
                    .iter()
                    .map(|e| ErrorEntry {
                        target: e.target,
                        kind: e.kind,
                        message: &e.message,
                    })
                    .collect(),
            };
            serde_json::to_string_pretty(&report)
        }
        OutputFormat::Terminal => Ok(errors
            .iter()
            .map(|e| format!("{} {}\n", formatter.error("error:"), e.message))
            .collect()),
    }
}

pub fn render_legend(
    format: OutputFormat,
    formatter: &dyn OutputFormatter,
) -> serde_json::Result<String> {
    let entries = legend_entries();
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&entries),
        OutputFormat::Terminal => Ok(entries
            .iter()
            .map(|entry| {
                let label = format!("{:<12}", entry.category.label());
                format!(
                    "{} {}\n",
                    formatter.category(&label, entry.category),
                    entry.range
                )
            })
            .collect()),
    }
}
