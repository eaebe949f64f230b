//! Per-field options for masked input.
//!
//! Options decide how a field renders and which reflow policy its edits use.

use serde::{Deserialize, Serialize};

/// Placeholder rendered for empty typed slots unless configured otherwise
pub const DEFAULT_PLACEHOLDER: char = '_';

/// How insertions and deletions treat the characters around them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflowPolicy {
    /// Inserts and deletes shift later characters so the value stays contiguous
    #[default]
    Compacting,
    /// Every slot is edited in place; neighbours never move
    KeepPositions,
}

/// Case mapping applied to input before it is matched against a slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseTransform {
    #[default]
    None,
    Upper,
    Lower,
}

impl CaseTransform {
    /// Map `ch`; characters whose case mapping expands to several
    /// characters (e.g. `ß` → `SS`) are left unchanged
    pub fn apply(&self, ch: char) -> char {
        match self {
            CaseTransform::None => ch,
            CaseTransform::Upper => single(ch.to_uppercase()).unwrap_or(ch),
            CaseTransform::Lower => single(ch.to_lowercase()).unwrap_or(ch),
        }
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    match chars.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Options for a masked field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskOptions {
    /// Character shown in empty typed slots
    pub placeholder: char,

    /// Trim trailing delimiters and placeholders after the last typed character
    pub clean_delimiters: bool,

    pub policy: ReflowPolicy,

    pub transform: CaseTransform,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
            clean_delimiters: false,
            policy: ReflowPolicy::Compacting,
            transform: CaseTransform::None,
        }
    }
}

impl MaskOptions {
    /// Default options with the compacting policy
    pub fn compacting() -> Self {
        Self::default()
    }

    /// Default options with the keep-positions policy
    pub fn keep_positions() -> Self {
        Self {
            policy: ReflowPolicy::KeepPositions,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_clean_delimiters(mut self, clean: bool) -> Self {
        self.clean_delimiters = clean;
        self
    }

    pub fn with_policy(mut self, policy: ReflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_transform(mut self, transform: CaseTransform) -> Self {
        self.transform = transform;
        self
    }
}
