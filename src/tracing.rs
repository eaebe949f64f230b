//! Logging for the maskedit driver
//!
//! The binary prints the rendered field (or its JSON) on stdout, so every log
//! line goes elsewhere: warnings to stderr, and a full debug trail of each
//! replayed op to `~/.config/maskedit/logs/maskedit.log` (rotated daily).
//!
//! Useful `RUST_LOG` filters for the stderr output:
//! - `RUST_LOG=maskedit=debug` - accepted edits, pattern changes, op diffs
//! - `RUST_LOG=maskedit::mask=trace` - rejected characters and empty deletes
//! - `RUST_LOG=maskedit::mask::sync=debug` - peer synchronisation only

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::mask::{MaskState, SlotRange};

/// Install the stderr and file layers.
///
/// stderr honours `RUST_LOG` and defaults to `warn`. The file always records
/// `debug`, so a replay can be inspected after the fact without rerunning it.
/// If the logs directory cannot be created, only stderr logging is set up.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "maskedit.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of a field's caret, selection and value for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub caret: usize,
    pub selection: Option<SlotRange>,
    pub value: String,
}

impl StateSnapshot {
    pub fn capture(state: &MaskState) -> Self {
        Self {
            caret: state.caret(),
            selection: state.selection().range(),
            value: state.value(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.value != other.value {
            changes.push(format!("value: {:?} → {:?}", self.value, other.value));
        }
        if self.caret != other.caret {
            changes.push(format!("caret: {} → {}", self.caret, other.caret));
        }
        if self.selection != other.selection {
            let status = match other.selection {
                Some(range) => format!("selection [{}, {})", range.start(), range.end()),
                None => "selection cleared".to_string(),
            };
            changes.push(status);
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{CharClassTable, MaskOptions};

    fn field() -> MaskState {
        MaskState::from_mask("000-000", &CharClassTable::default(), MaskOptions::default())
            .unwrap()
    }

    #[test]
    fn test_unchanged_state_has_no_diff() {
        let state = field();
        let a = StateSnapshot::capture(&state);
        let b = StateSnapshot::capture(&state);
        assert_eq!(a.diff(&b), None);
    }

    #[test]
    fn test_diff_reports_value_and_caret() {
        let mut state = field();
        let before = StateSnapshot::capture(&state);
        state.type_char('4');
        let after = StateSnapshot::capture(&state);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("value: \"\" → \"4\""));
        assert!(diff.contains("caret: 0 → 1"));
    }

    #[test]
    fn test_diff_reports_selection() {
        let mut state = field();
        let before = StateSnapshot::capture(&state);
        state.set_selection(0, 3);
        let selected = StateSnapshot::capture(&state);
        assert!(before.diff(&selected).unwrap().contains("selection [0, 3)"));

        state.clear_selection();
        let cleared = StateSnapshot::capture(&state);
        assert!(selected.diff(&cleared).unwrap().contains("selection cleared"));
    }
}
