//! Panic hook that restores the terminal before reporting.
//!
//! A panic while the form is on screen would otherwise leave the terminal in
//! raw mode on the alternate screen, with the message invisible.

use super::tracing::{is_tui_active, set_tui_active};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════";

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let was_tui = is_tui_active();
    exit_tui_mode();

    eprintln!();
    eprintln!("{RULE}");
    eprintln!("  BODYSCALE CRASH REPORT  v{} ({})", VERSION, std::env::consts::OS);
    eprintln!("{RULE}");
    eprintln!("  panic: {}", truncate(&extract_panic_message(info), 120));
    if let Some(location) = info.location() {
        eprintln!(
            "  at: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    if was_tui {
        eprintln!("  while: terminal form active");
    }
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{RULE}");
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("  Run with RUST_BACKTRACE=1 for stack trace");
    }
    eprintln!("{RULE}");
}

fn exit_tui_mode() {
    set_tui_active(false);

    // Ignore errors - we're already panicking
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen);
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
