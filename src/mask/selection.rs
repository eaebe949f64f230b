//! Caret and selection bookkeeping over slot indices.

use std::ops::Range;

/// A selected slot range, normalized so `start <= end`. `end` is exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlotRange {
    start: usize,
    end: usize,
}

impl SlotRange {
    /// Create a range from two positions in either order
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// The selected slots as an index range
    pub fn slots(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether slot `index` is selected
    pub fn contains_slot(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Whether caret position `pos` lies within the range, boundaries included
    pub fn touches(&self, pos: usize) -> bool {
        pos >= self.start && pos <= self.end
    }
}

/// Caret position plus an optional non-empty selection, both within
/// `0..=len` of the owning buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionModel {
    caret: usize,
    selection: Option<SlotRange>,
    len: usize,
}

impl SelectionModel {
    /// Caret at 0 for a buffer of `len` slots
    pub fn new(len: usize) -> Self {
        Self {
            caret: 0,
            selection: None,
            len,
        }
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Active selection, if any. Never empty.
    pub fn range(&self) -> Option<SlotRange> {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    pub fn is_caret_inside_selection(&self) -> bool {
        self.selection.is_some_and(|sel| sel.touches(self.caret))
    }

    /// Move the caret, clamped to the buffer.
    ///
    /// A selection survives only if the new caret lies inside it or on one of
    /// its boundaries.
    pub fn set_caret(&mut self, pos: usize) {
        self.caret = pos.min(self.len);
        if let Some(sel) = self.selection {
            if !sel.touches(self.caret) {
                self.selection = None;
            }
        }
    }

    /// Select `start..end` (either order, clamped); the caret moves to the
    /// end of the range. An empty range leaves just a caret.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let range = SlotRange::new(start.min(self.len), end.min(self.len));
        self.caret = range.end;
        self.selection = (!range.is_empty()).then_some(range);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Drop the selection, keeping the caret where it is
    pub fn collapse_to_caret(&mut self) {
        self.selection = None;
    }

    /// Drop the selection and place the caret at `pos`
    pub fn collapse_to(&mut self, pos: usize) {
        self.selection = None;
        self.caret = pos.min(self.len);
    }

    /// Caret-only state for a buffer of `len` slots
    pub fn reset(&mut self, len: usize, caret: usize) {
        self.len = len;
        self.collapse_to(caret);
    }
}
