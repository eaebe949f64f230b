//! Command-line argument parsing for the maskedit driver
//!
//! Supports:
//! - An inline mask (`--mask`) or one named in the config file (`--named`)
//! - Overriding the configured policy, placeholder and case transform
//! - A list of edit operations replayed in order against the field

use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};

use maskedit::config::MaskConfig;
use maskedit::mask::{CaseTransform, MaskEditMsg, MaskOptions, MaskState, Pattern, ReflowPolicy};
use maskedit::tracing::StateSnapshot;

/// Replay edits against a masked input field
#[derive(Parser, Debug)]
#[command(
    name = "maskedit",
    version,
    about = "Replay edits against a masked input field",
    after_help = "OPS: type:<chars> paste:<text> backspace ctrl-backspace delete \
                  caret:<n> select:<a>-<b> cut clear"
)]
pub struct CliArgs {
    /// Mask to compile, e.g. "(000) 000-0000"
    #[arg(short, long, conflicts_with = "named", required_unless_present = "named")]
    pub mask: Option<String>,

    /// Use a mask from the config file by name
    #[arg(long, value_name = "NAME")]
    pub named: Option<String>,

    /// How insert and delete treat the following characters
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Character shown in empty slots
    #[arg(long, value_name = "CHAR")]
    pub placeholder: Option<char>,

    /// Hide trailing empty slots and literals
    #[arg(long)]
    pub clean_delimiters: bool,

    /// Case mapping applied to typed and pasted characters
    #[arg(long, value_enum)]
    pub transform: Option<TransformArg>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Edit operations, applied in order
    #[arg(value_name = "OPS")]
    pub ops: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Compacting,
    KeepPositions,
}

impl From<PolicyArg> for ReflowPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Compacting => ReflowPolicy::Compacting,
            PolicyArg::KeepPositions => ReflowPolicy::KeepPositions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransformArg {
    None,
    Upper,
    Lower,
}

impl From<TransformArg> for CaseTransform {
    fn from(arg: TransformArg) -> Self {
        match arg {
            TransformArg::None => CaseTransform::None,
            TransformArg::Upper => CaseTransform::Upper,
            TransformArg::Lower => CaseTransform::Lower,
        }
    }
}

/// A ready-to-run session derived from CLI arguments and config
#[derive(Debug)]
pub struct ReplayPlan {
    pub state: MaskState,
    pub ops: Vec<MaskEditMsg>,
    pub json: bool,
}

/// Final field state after a replay
#[derive(Debug)]
pub struct ReplayResult {
    pub state: MaskState,
    /// Edit operations the field ignored (no matching slot, nothing to delete)
    pub rejected: usize,
}

impl ReplayPlan {
    /// Apply every op in order, logging what each one changed
    pub fn run(self) -> ReplayResult {
        let mut state = self.state;
        let mut rejected = 0;
        tracing::debug!(pattern = %state.pattern(), ops = self.ops.len(), "replaying");

        for op in self.ops {
            let before = StateSnapshot::capture(&state);
            state.apply(op.clone());
            let after = StateSnapshot::capture(&state);

            match before.diff(&after) {
                Some(diff) if op.is_selection() => tracing::trace!(?op, "{}", diff),
                Some(diff) => tracing::debug!(?op, "{}", diff),
                None if op.is_editing() => {
                    rejected += 1;
                    tracing::debug!(?op, "input rejected");
                }
                None => {}
            }
        }

        ReplayResult { state, rejected }
    }
}

impl CliArgs {
    /// Resolve the mask, merge options over the config and parse every op
    pub fn into_plan(self, config: &MaskConfig) -> Result<ReplayPlan> {
        let pattern = match (&self.mask, &self.named) {
            (Some(mask), _) => {
                let table = config.class_table().context("invalid class in config")?;
                Pattern::compile(mask, &table).with_context(|| format!("invalid mask {mask:?}"))?
            }
            (None, Some(name)) => config
                .compile(name)
                .with_context(|| format!("cannot use mask {name:?}"))?,
            (None, None) => bail!("either --mask or --named is required"),
        };

        let options = self.options(config.options());

        let mut ops = Vec::new();
        for op in &self.ops {
            ops.extend(parse_op(op)?);
        }

        Ok(ReplayPlan {
            state: MaskState::new(Arc::new(pattern), options),
            ops,
            json: self.json,
        })
    }

    fn options(&self, base: MaskOptions) -> MaskOptions {
        MaskOptions {
            placeholder: self.placeholder.unwrap_or(base.placeholder),
            clean_delimiters: self.clean_delimiters || base.clean_delimiters,
            policy: self.policy.map(Into::into).unwrap_or(base.policy),
            transform: self.transform.map(Into::into).unwrap_or(base.transform),
        }
    }
}

/// Parse one OPS argument. `type:` expands to one message per character.
pub fn parse_op(op: &str) -> Result<Vec<MaskEditMsg>> {
    let (name, arg) = match op.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (op, None),
    };

    let msgs = match (name, arg) {
        ("type", Some(chars)) => chars.chars().map(MaskEditMsg::TypeChar).collect(),
        ("paste", Some(text)) => vec![MaskEditMsg::Paste(text.to_string())],
        ("backspace", None) => vec![MaskEditMsg::Backspace { ctrl: false }],
        ("ctrl-backspace", None) => vec![MaskEditMsg::Backspace { ctrl: true }],
        ("delete", None) => vec![MaskEditMsg::Delete],
        ("cut", None) => vec![MaskEditMsg::Cut],
        ("clear", None) => vec![MaskEditMsg::Clear],
        ("caret", Some(pos)) => vec![MaskEditMsg::SetCaret(parse_index(pos)?)],
        ("select", Some(range)) => {
            let (start, end) = range
                .split_once('-')
                .ok_or_else(|| anyhow!("expected select:<start>-<end>, got {op:?}"))?;
            vec![MaskEditMsg::SetSelection {
                start: parse_index(start)?,
                end: parse_index(end)?,
            }]
        }
        _ => bail!("unknown operation {op:?}"),
    };
    Ok(msgs)
}

fn parse_index(s: &str) -> Result<usize> {
    s.trim()
        .parse()
        .with_context(|| format!("expected a slot index, got {s:?}"))
}
