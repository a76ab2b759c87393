use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "BODYSCALE_LOG";

const DEFAULT_FILTER: &str = "warn";

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark whether the terminal form currently owns the screen.
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

fn log_writer() -> Box<dyn io::Write> {
    if is_tui_active() {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

/// Install the global subscriber. `log` records are bridged into it.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_writer)
        .with_target(false)
        .try_init();
}
