use anyhow::Result;

use crate::config::BodyscaleConfig;
use crate::tui::FormTui;

/// Open the terminal form and block until the user quits.
pub fn run_form(config: &BodyscaleConfig) -> Result<()> {
    tracing::debug!(?config, "opening form");
    let mut tui = FormTui::new(config)?;
    tui.run()
}
