use anyhow::Result;
use std::io::Write;

use crate::formatting::{ColoredFormatter, FormattingConfig};
use crate::output::{render_legend, OutputFormat};

pub fn print_legend(
    format: OutputFormat,
    formatting: FormattingConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let formatter = ColoredFormatter::new(formatting);
    let text = render_legend(format, &formatter)?;
    writeln!(out, "{}", text.trim_end())?;
    Ok(())
}
