//! Logging setup and crash reporting.
//!
//! ## Usage
//!
//! ```ignore
//! use bodyscale::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     init_tracing();
//!     install_panic_hook();
//!     // ... rest of application
//! }
//! ```
//!
//! Log output goes to stderr and is filtered by `BODYSCALE_LOG`
//! (`warn` when unset). While the terminal form owns the screen, log output
//! is discarded so it cannot corrupt the alternate screen.

pub mod panic_hook;
pub mod tracing;

pub use self::tracing::{init_tracing, is_tui_active, set_tui_active, LOG_ENV};
pub use panic_hook::install_panic_hook;
