//! Mask compilation: turns a mask string into an immutable slot list.

use std::fmt;

use super::class::CharClassTable;
use crate::error::MaskError;

/// Escape character forcing the next mask character to be a literal
pub const ESCAPE: char = '\\';

/// One position of a compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Fixed delimiter rendered as-is, e.g. `(` or `-`
    Literal(char),
    /// Position accepting one character of the class with this symbol
    Typed(char),
}

impl Slot {
    pub fn is_typed(&self) -> bool {
        matches!(self, Slot::Typed(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Slot::Literal(_))
    }
}

/// Compiled mask: a fixed-length sequence of slots plus the classes they use.
///
/// Patterns are immutable and meant to be shared (`Arc<Pattern>`) by every
/// buffer that uses the same mask. Two patterns compare equal when their slot
/// lists are equal.
#[derive(Debug, Clone)]
pub struct Pattern {
    slots: Vec<Slot>,
    classes: CharClassTable,
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl Eq for Pattern {}

impl Pattern {
    /// Compile `mask` against `table`.
    ///
    /// Characters registered in the table become typed slots, everything else
    /// is a literal. A backslash makes the following character a literal even
    /// when it is a class symbol.
    pub fn compile(mask: &str, table: &CharClassTable) -> Result<Self, MaskError> {
        if mask.is_empty() {
            return Err(MaskError::EmptyMask);
        }

        let mut slots = Vec::with_capacity(mask.len());
        let mut chars = mask.chars().enumerate();
        while let Some((position, ch)) = chars.next() {
            if ch == ESCAPE {
                match chars.next() {
                    Some((_, escaped)) => slots.push(Slot::Literal(escaped)),
                    None => return Err(MaskError::DanglingEscape { position }),
                }
            } else if table.contains(ch) {
                slots.push(Slot::Typed(ch));
            } else {
                slots.push(Slot::Literal(ch));
            }
        }

        Ok(Self {
            slots,
            classes: table.clone(),
        })
    }

    /// Build a pattern from an explicit slot list.
    ///
    /// Fails if the list is empty or a typed slot names a symbol the table
    /// does not define.
    pub fn from_slots(slots: Vec<Slot>, table: &CharClassTable) -> Result<Self, MaskError> {
        if slots.is_empty() {
            return Err(MaskError::EmptyMask);
        }
        for (position, slot) in slots.iter().enumerate() {
            if let Slot::Typed(symbol) = *slot {
                if !table.contains(symbol) {
                    return Err(MaskError::UnknownClass { symbol, position });
                }
            }
        }
        Ok(Self {
            slots,
            classes: table.clone(),
        })
    }

    /// Number of slots (literal and typed)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a compiled pattern; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    pub fn classes(&self) -> &CharClassTable {
        &self.classes
    }

    pub fn is_typed(&self, index: usize) -> bool {
        self.slot(index).is_some_and(|slot| slot.is_typed())
    }

    pub fn typed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_typed()).count()
    }

    /// Whether the slot at `index` is typed and its class accepts `ch`
    pub fn accepts(&self, index: usize, ch: char) -> bool {
        match self.slot(index) {
            Some(Slot::Typed(symbol)) => self.classes.matches(symbol, ch),
            _ => false,
        }
    }

    /// First typed slot at or after `from`
    pub fn next_typed(&self, from: usize) -> Option<usize> {
        (from..self.len()).find(|&i| self.is_typed(i))
    }

    /// Last typed slot strictly before `before`
    pub fn prev_typed(&self, before: usize) -> Option<usize> {
        (0..before.min(self.len())).rev().find(|&i| self.is_typed(i))
    }

    /// First slot at or after `from` that is typed and accepts `ch`
    pub fn find_accepting(&self, from: usize, ch: char) -> Option<usize> {
        (from..self.len()).find(|&i| self.accepts(i, ch))
    }

    /// Advance `from` over any run of literal slots
    pub fn skip_literals(&self, from: usize) -> usize {
        let mut pos = from;
        while pos < self.len() && self.slots[pos].is_literal() {
            pos += 1;
        }
        pos.min(self.len())
    }
}

impl fmt::Display for Pattern {
    /// Writes the mask string back out, escaping literals that collide
    /// with class symbols
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match *slot {
                Slot::Typed(symbol) => write!(f, "{}", symbol)?,
                Slot::Literal(ch) if ch == ESCAPE || self.classes.contains(ch) => {
                    write!(f, "{}{}", ESCAPE, ch)?
                }
                Slot::Literal(ch) => write!(f, "{}", ch)?,
            }
        }
        Ok(())
    }
}

/// Incremental construction of a slot list.
///
/// ```ignore
/// let pattern = PatternBuilder::new()
///     .literal('#')
///     .typed_n('0', 3)
///     .build(&CharClassTable::default())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    slots: Vec<Slot>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn literal(mut self, ch: char) -> Self {
        self.slots.push(Slot::Literal(ch));
        self
    }

    pub fn literals(mut self, text: &str) -> Self {
        self.slots.extend(text.chars().map(Slot::Literal));
        self
    }

    pub fn typed(mut self, symbol: char) -> Self {
        self.slots.push(Slot::Typed(symbol));
        self
    }

    pub fn typed_n(mut self, symbol: char, count: usize) -> Self {
        self.slots
            .extend(std::iter::repeat(Slot::Typed(symbol)).take(count));
        self
    }

    pub fn build(self, table: &CharClassTable) -> Result<Pattern, MaskError> {
        Pattern::from_slots(self.slots, table)
    }
}
