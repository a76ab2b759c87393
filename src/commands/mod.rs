//! CLI command implementations.
//!
//! - **form**: open the interactive terminal form
//! - **evaluate**: run the form once from command-line text
//! - **legend**: print the category bands
//! - **init**: write a default `.bodyscale.toml`

pub mod evaluate;
pub mod form;
pub mod init;
pub mod legend;

pub use evaluate::{evaluate_once, EvaluateConfig};
pub use form::run_form;
pub use init::init_config;
pub use legend::print_legend;
