//! Custom panic hook for structured crash reports.
//!
//! The hook leaves the alternate screen and raw mode before printing, so
//! the report is visible after a crash inside the dashboard.

use super::context::{get_current_context, SessionContext};
use super::tracing::set_tui_active;
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ISSUE_URL: &str = "https://github.com/iepathos/depmap/issues/new";

/// Inner width of the report box.
const BOX_WIDTH: usize = 78;

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal();
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()));
        let report = crash_report(
            &panic_message(info),
            location.as_deref(),
            &get_current_context(),
            std::env::var_os("RUST_BACKTRACE").is_some(),
        );
        eprintln!();
        for line in report {
            eprintln!("{line}");
        }
        if std::env::var_os("RUST_BACKTRACE").is_some() {
            eprintln!("{}", std::backtrace::Backtrace::capture());
        }
    }));
}

fn restore_terminal() {
    set_tui_active(false);

    // Already panicking; nothing useful to do with these errors.
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
}

/// Lines of the crash report, without the backtrace itself.
pub fn crash_report(
    message: &str,
    location: Option<&str>,
    context: &SessionContext,
    backtrace: bool,
) -> Vec<String> {
    let rule = |left: char, right: char| format!("{left}{}{right}", "═".repeat(BOX_WIDTH));
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    let mut lines = vec![
        rule('╔', '╗'),
        boxed(&format!("{:^width$}", "DEPMAP CRASH REPORT", width = BOX_WIDTH - 2)),
        rule('╠', '╣'),
        boxed(&format!("Version: {VERSION}")),
        boxed(&format!("Platform: {}", std::env::consts::OS)),
        boxed(&format!("Time: {timestamp}")),
        rule('╠', '╣'),
        boxed(&format!("PANIC: {message}")),
    ];
    if let Some(location) = location {
        lines.push(boxed(&format!("Location: {location}")));
    }

    lines.push(rule('╠', '╣'));
    lines.push(boxed("SESSION CONTEXT:"));
    match context.phase {
        Some(phase) => lines.push(boxed(&format!("  Phase: {phase}"))),
        None => lines.push(boxed("  Phase: (not set, crashed before the dashboard started)")),
    }
    if let Some(snapshot) = &context.snapshot {
        lines.push(boxed(&format!("  Snapshot: {}", snapshot.display())));
    }
    if let Some(panel) = context.panel {
        lines.push(boxed(&format!("  Panel: {panel}")));
    }

    lines.push(rule('╠', '╣'));
    lines.push(boxed(if backtrace {
        "STACK TRACE:"
    } else {
        "Run with RUST_BACKTRACE=1 for stack trace"
    }));
    lines.push(rule('╚', '╝'));

    lines.push(String::new());
    lines.push(format!("To report this issue: {ISSUE_URL}"));
    if let Some(snapshot) = &context.snapshot {
        lines.push(format!(
            "Include this crash report and the snapshot: {}",
            snapshot.display()
        ));
    }
    lines
}

/// One row of the box, padded or cut to fit.
fn boxed(text: &str) -> String {
    let inner = BOX_WIDTH - 2;
    format!("║ {:<inner$} ║", truncate(text, inner))
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::SessionPhase;
    use std::path::PathBuf;

    #[test]
    fn test_truncate_long_string() {
        let result = truncate("this is a long string that needs truncation", 20);
        assert_eq!(result.len(), 20);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_path() {
        let result = truncate("snapshots/ünïcödé/graph.json", 12);
        assert_eq!(result.chars().count(), 12);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_rows_have_fixed_width() {
        let context = SessionContext::default();
        let report = crash_report(&"x".repeat(200), Some("src/main.rs:1:1"), &context, false);
        for line in report.iter().take_while(|l| !l.is_empty()) {
            assert_eq!(line.chars().count(), BOX_WIDTH + 2, "{line}");
        }
    }

    #[test]
    fn test_report_includes_session_context() {
        let context = SessionContext {
            phase: Some(SessionPhase::Rendering),
            snapshot: Some(PathBuf::from("graph.json")),
            panel: Some("Hubs"),
        };
        let report = crash_report("boom", None, &context, true).join("\n");
        assert!(report.contains("PANIC: boom"));
        assert!(report.contains("Phase: rendering"));
        assert!(report.contains("Snapshot: graph.json"));
        assert!(report.contains("Panel: Hubs"));
        assert!(report.contains("STACK TRACE:"));
        assert!(report.contains("Include this crash report and the snapshot: graph.json"));
    }

    #[test]
    fn test_report_without_context() {
        let report = crash_report("boom", None, &SessionContext::default(), false).join("\n");
        assert!(report.contains("crashed before the dashboard started"));
        assert!(report.contains("RUST_BACKTRACE=1"));
        assert!(!report.contains("Snapshot:"));
    }
}
