//! Mask configuration persistence
//!
//! Stores defaults, custom character classes and named masks in
//! `~/.config/maskedit/config.yaml`:
//!
//! ```yaml
//! placeholder: "_"
//! clean_delimiters: false
//! policy: compacting        # or keep_positions
//! transform: none           # or upper / lower
//! classes:
//!   - symbol: "h"
//!     regex: "[0-9a-fA-F]"
//!   - symbol: "v"
//!     chars: "aeiou"
//! masks:
//!   phone: "(000) 000-0000"
//!   mac: "hh:hh:hh:hh:hh:hh"
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::MaskError;
use crate::mask::{
    CaseTransform, CharClass, CharClassTable, EnumeratedClass, MaskOptions, Pattern,
    ReflowPolicy, RegexClass, DEFAULT_PLACEHOLDER,
};

/// A custom character class from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConfig {
    /// Mask character that stands for this class
    pub symbol: char,
    /// Accept exactly these characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chars: Option<String>,
    /// Accept characters matching this expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl ClassConfig {
    /// Build the predicate; exactly one of `chars` / `regex` must be set
    pub fn build(&self) -> Result<Arc<dyn CharClass>, MaskError> {
        match (&self.chars, &self.regex) {
            (Some(chars), None) => Ok(Arc::new(EnumeratedClass::new(chars.chars()))),
            (None, Some(regex)) => Ok(Arc::new(RegexClass::new(regex)?)),
            (Some(_), Some(_)) => Err(MaskError::InvalidClassConfig {
                symbol: self.symbol,
                reason: "set either `chars` or `regex`, not both".to_string(),
            }),
            (None, None) => Err(MaskError::InvalidClassConfig {
                symbol: self.symbol,
                reason: "one of `chars` or `regex` is required".to_string(),
            }),
        }
    }
}

/// Mask configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Character rendered in empty typed slots
    #[serde(default = "default_placeholder")]
    pub placeholder: char,

    #[serde(default)]
    pub clean_delimiters: bool,

    #[serde(default)]
    pub policy: ReflowPolicy,

    #[serde(default)]
    pub transform: CaseTransform,

    /// Classes added to (or overriding) the default `a` / `0` / `*` table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<ClassConfig>,

    /// Named masks, e.g. `phone: "(000) 000-0000"`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub masks: BTreeMap<String, String>,
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            clean_delimiters: false,
            policy: ReflowPolicy::default(),
            transform: CaseTransform::default(),
            classes: Vec::new(),
            masks: BTreeMap::new(),
        }
    }
}

impl MaskConfig {
    /// Load config from disk, or return defaults if not found or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, MaskError> {
        let content = std::fs::read_to_string(path).map_err(|e| MaskError::io(path, e))?;
        Self::parse_yaml(&content)
    }

    /// Parse config from YAML, validating the class definitions
    pub fn parse_yaml(yaml: &str) -> Result<Self, MaskError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.class_table()?;
        Ok(config)
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), MaskError> {
        let dir = crate::config_paths::ensure_config_dir()?;
        self.save_to(&dir.join("config.yaml"))
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), MaskError> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|e| MaskError::io(path, e))?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Field options described by this config
    pub fn options(&self) -> MaskOptions {
        MaskOptions {
            placeholder: self.placeholder,
            clean_delimiters: self.clean_delimiters,
            policy: self.policy,
            transform: self.transform,
        }
    }

    /// Default class table extended with the configured classes
    pub fn class_table(&self) -> Result<CharClassTable, MaskError> {
        let mut table = CharClassTable::default();
        let mut seen = BTreeSet::new();
        for class in &self.classes {
            if !seen.insert(class.symbol) {
                return Err(MaskError::DuplicateClass {
                    symbol: class.symbol,
                });
            }
            table.insert(class.symbol, class.build()?);
        }
        Ok(table)
    }

    /// Mask string registered under `name`
    pub fn mask(&self, name: &str) -> Option<&str> {
        self.masks.get(name).map(String::as_str)
    }

    /// Compile the mask registered under `name` with the configured classes
    pub fn compile(&self, name: &str) -> Result<Pattern, MaskError> {
        let mask = self
            .mask(name)
            .ok_or_else(|| MaskError::UnknownMask(name.to_string()))?;
        Pattern::compile(mask, &self.class_table()?)
    }
}
