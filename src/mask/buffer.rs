//! Slot contents of a masked field and their rendering.

use std::ops::Range;
use std::sync::Arc;

use super::pattern::{Pattern, Slot};

/// A compiled pattern plus one optional character per slot.
///
/// Literal slots always hold `None`; typed slots hold `Some(ch)` once filled.
/// The content vector has exactly `pattern.len()` entries at all times.
#[derive(Debug, Clone)]
pub struct MaskBuffer {
    pattern: Arc<Pattern>,
    chars: Vec<Option<char>>,
}

impl MaskBuffer {
    /// Create an empty buffer for `pattern`
    pub fn new(pattern: Arc<Pattern>) -> Self {
        let chars = vec![None; pattern.len()];
        Self { pattern, chars }
    }

    /// Create a buffer for `pattern` holding `value`, placed as if typed
    /// from the start of the mask
    pub fn with_value(pattern: Arc<Pattern>, value: &str) -> Self {
        let mut buffer = Self::new(pattern);
        buffer.fit(value.chars(), 0);
        buffer
    }

    pub fn pattern(&self) -> &Arc<Pattern> {
        &self.pattern
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when no typed slot is filled
    pub fn is_empty(&self) -> bool {
        self.chars.iter().all(Option::is_none)
    }

    /// True when every typed slot is filled
    pub fn is_full(&self) -> bool {
        self.pattern
            .slots()
            .iter()
            .zip(&self.chars)
            .all(|(slot, ch)| slot.is_literal() || ch.is_some())
    }

    /// Character stored at `index`, if that typed slot is filled
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied().flatten()
    }

    pub fn is_filled(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn filled_count(&self) -> usize {
        self.chars.iter().filter(|ch| ch.is_some()).count()
    }

    /// Index of the last filled typed slot
    pub fn last_filled(&self) -> Option<usize> {
        self.chars.iter().rposition(Option::is_some)
    }

    /// Whether any typed slot before `index` is filled
    pub fn has_filled_before(&self, index: usize) -> bool {
        self.chars[..index.min(self.len())]
            .iter()
            .any(Option::is_some)
    }

    /// Nearest filled slot strictly before `before`
    pub fn prev_filled(&self, before: usize) -> Option<usize> {
        self.chars[..before.min(self.len())]
            .iter()
            .rposition(Option::is_some)
    }

    /// Nearest filled slot at or after `from`
    pub fn next_filled(&self, from: usize) -> Option<usize> {
        let from = from.min(self.len());
        self.chars[from..]
            .iter()
            .position(Option::is_some)
            .map(|offset| from + offset)
    }

    /// Canonical value: filled characters in slot order, no literals or
    /// placeholders
    pub fn value(&self) -> String {
        self.chars.iter().flatten().collect()
    }

    /// Value characters stored in `range`
    pub fn value_in(&self, range: Range<usize>) -> String {
        let range = self.clamp(range);
        self.chars[range].iter().flatten().collect()
    }

    /// Full-length rendering: filled characters, `placeholder` for empty
    /// typed slots and literals as written
    pub fn render(&self, placeholder: char) -> String {
        self.pattern
            .slots()
            .iter()
            .zip(&self.chars)
            .map(|(slot, ch)| match (*slot, *ch) {
                (Slot::Literal(lit), _) => lit,
                (Slot::Typed(_), Some(ch)) => ch,
                (Slot::Typed(_), None) => placeholder,
            })
            .collect()
    }

    /// Rendering cut off after the last filled typed slot, dropping the
    /// trailing delimiters and placeholders. Empty when nothing is filled.
    pub fn render_clean(&self, placeholder: char) -> String {
        match self.last_filled() {
            Some(last) => self.render(placeholder).chars().take(last + 1).collect(),
            None => String::new(),
        }
    }

    /// Caret position just past the content: after the last filled slot and
    /// any literals following it, or 0 for an empty buffer
    pub fn end_of_content(&self) -> usize {
        match self.last_filled() {
            Some(last) => self.pattern.skip_literals(last + 1),
            None => 0,
        }
    }

    /// Store `ch` in a typed slot, or clear it with `None`.
    ///
    /// Writes to literal or out-of-range slots are ignored so the literal
    /// invariant cannot be broken from inside the crate.
    pub(crate) fn set(&mut self, index: usize, ch: Option<char>) {
        if self.pattern.is_typed(index) {
            self.chars[index] = ch;
        }
    }

    /// Empty every slot
    pub(crate) fn clear(&mut self) {
        self.chars.iter_mut().for_each(|ch| *ch = None);
    }

    /// Remove and return the filled characters in `range`, in slot order
    pub(crate) fn lift(&mut self, range: Range<usize>) -> Vec<char> {
        let range = self.clamp(range);
        self.chars[range].iter_mut().filter_map(Option::take).collect()
    }

    /// Place `raw` characters in order starting at slot `from`.
    ///
    /// Each character goes into the nearest slot at or after the running
    /// position that is empty, typed and accepts it; the running position then
    /// moves past it. Characters with no such slot left are dropped.
    /// Returns the number of dropped characters.
    pub(crate) fn fit(&mut self, raw: impl IntoIterator<Item = char>, from: usize) -> usize {
        let mut pos = from;
        let mut dropped = 0;
        for ch in raw {
            let target = (pos..self.len())
                .find(|&i| self.chars[i].is_none() && self.pattern.accepts(i, ch));
            match target {
                Some(i) => {
                    self.chars[i] = Some(ch);
                    pos = i + 1;
                }
                None => dropped += 1,
            }
        }
        dropped
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.len());
        range.start.min(end)..end
    }
}
