use anyhow::Result;
use std::io::Write;

use crate::config::BodyscaleConfig;
use crate::core::Field;
use crate::form::{FormController, SubmitOutcome};
use crate::formatting::{ColoredFormatter, FormattingConfig};
use crate::output::{render_errors, render_evaluation, OutputFormat};

pub struct EvaluateConfig {
    pub height: String,
    pub weight: String,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

/// Submit the given text once and print the outcome.
///
/// Results go to `out`. Validation messages go to `err` in terminal format,
/// and to `out` in JSON format so scripts get one document either way.
pub fn evaluate_once(
    config: &EvaluateConfig,
    settings: &BodyscaleConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let formatter = ColoredFormatter::new(config.formatting);

    let mut form = FormController::new(settings.bounds);
    form.set_text(Field::Height, config.height.as_str());
    form.set_text(Field::Weight, config.weight.as_str());

    match form.submit() {
        SubmitOutcome::Evaluated(result) => {
            let text = render_evaluation(&result, config.format, &formatter)?;
            writeln!(out, "{}", text.trim_end())?;
            Ok(())
        }
        SubmitOutcome::Rejected | SubmitOutcome::Failed(_) => {
            if let Some(errors) = form.visible_errors() {
                let text = render_errors(errors, config.format, &formatter)?;
                match config.format {
                    OutputFormat::Json => writeln!(out, "{}", text.trim_end())?,
                    OutputFormat::Terminal => writeln!(err, "{}", text.trim_end())?,
                }
            }
            anyhow::bail!("Evaluation failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(height: &str, weight: &str, format: OutputFormat) -> (Result<()>, String, String) {
        let config = EvaluateConfig {
            height: height.into(),
            weight: weight.into(),
            format,
            formatting: FormattingConfig::plain(),
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = evaluate_once(&config, &BodyscaleConfig::default(), &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_valid_terminal_output() {
        let (result, out, err) = run("170", "70", OutputFormat::Terminal);
        assert!(result.is_ok());
        assert!(out.starts_with("BMI 24.2  Normal"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_invalid_terminal_output_goes_to_stderr() {
        let (result, out, err) = run("170", "-5", OutputFormat::Terminal);
        assert!(result.is_err());
        assert!(out.is_empty());
        assert_eq!(err.trim(), "error: Please enter a valid weight");
    }

    #[test]
    fn test_invalid_json_output_goes_to_stdout() {
        let (result, out, err) = run("", "700", OutputFormat::Json);
        assert!(result.is_err());
        assert!(err.is_empty());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["errors"][0]["message"], "Height is required");
        assert_eq!(value["errors"][1]["message"], "Weight must be at most 500 kg");
    }
}
