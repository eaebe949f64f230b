//! Character classes for typed mask slots.
//!
//! A class is identified by the symbol used for it in mask strings
//! (`a`, `0`, `*` by default) and decides which characters may occupy
//! a slot of that class.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::MaskError;

/// Predicate deciding whether a character may occupy a typed slot.
///
/// Case folding and locale-specific letters are the predicate's business;
/// the pattern compiler and edit engine never look past `matches`.
pub trait CharClass: fmt::Debug + Send + Sync {
    fn matches(&self, ch: char) -> bool;
}

/// The classes every default table starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinClass {
    /// Any alphabetic character, including non-ASCII letters such as `ı`
    Letter,
    /// ASCII digits `0`-`9`
    Digit,
    LetterOrDigit,
}

impl CharClass for BuiltinClass {
    fn matches(&self, ch: char) -> bool {
        match self {
            BuiltinClass::Letter => ch.is_alphabetic(),
            BuiltinClass::Digit => ch.is_ascii_digit(),
            BuiltinClass::LetterOrDigit => ch.is_alphabetic() || ch.is_ascii_digit(),
        }
    }
}

/// Class accepting an explicit set of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratedClass {
    chars: BTreeSet<char>,
}

impl EnumeratedClass {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl CharClass for EnumeratedClass {
    fn matches(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

/// Class backed by a regular expression.
///
/// The expression is anchored on both ends and tested against the single
/// candidate character, so `[0-9a-f]` accepts exactly one hex digit.
#[derive(Debug, Clone)]
pub struct RegexClass {
    source: String,
    regex: Regex,
}

impl RegexClass {
    pub fn new(pattern: &str) -> Result<Self, MaskError> {
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            MaskError::InvalidClassRegex {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The expression as written, without the anchors
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl CharClass for RegexClass {
    fn matches(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.regex.is_match(ch.encode_utf8(&mut buf))
    }
}

/// Immutable lookup from class symbol to predicate.
///
/// Built once and passed to every [`Pattern::compile`](super::Pattern::compile)
/// call. Classes are reference counted, so cloning a table (which every
/// compiled pattern does) is cheap.
#[derive(Debug, Clone)]
pub struct CharClassTable {
    classes: BTreeMap<char, Arc<dyn CharClass>>,
}

impl Default for CharClassTable {
    /// `a` letter, `0` digit, `*` letter or digit
    fn default() -> Self {
        Self::empty()
            .with('a', BuiltinClass::Letter)
            .with('0', BuiltinClass::Digit)
            .with('*', BuiltinClass::LetterOrDigit)
    }
}

impl CharClassTable {
    /// A table without any classes; every mask character compiles to a literal
    pub fn empty() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, symbol: char, class: impl CharClass + 'static) -> Self {
        self.insert(symbol, Arc::new(class));
        self
    }

    /// Register a class under `symbol`, returning the class it replaces
    pub fn insert(
        &mut self,
        symbol: char,
        class: Arc<dyn CharClass>,
    ) -> Option<Arc<dyn CharClass>> {
        self.classes.insert(symbol, class)
    }

    pub fn get(&self, symbol: char) -> Option<&Arc<dyn CharClass>> {
        self.classes.get(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.classes.contains_key(&symbol)
    }

    /// Whether `ch` satisfies the class registered under `symbol`.
    /// Unknown symbols accept nothing.
    pub fn matches(&self, symbol: char, ch: char) -> bool {
        self.classes
            .get(&symbol)
            .is_some_and(|class| class.matches(ch))
    }

    /// Registered symbols in ascending order
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.classes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
