//! MaskState - a masked field: buffer, caret/selection and options.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use super::buffer::MaskBuffer;
use super::class::CharClassTable;
use super::engine;
use super::messages::MaskEditMsg;
use super::options::MaskOptions;
use super::pattern::Pattern;
use super::selection::SelectionModel;
use super::sync::MaskEvent;
use crate::error::MaskError;

/// What the input layer needs after every call: the text to show, the
/// canonical value and where to put the native caret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    pub text: String,
    pub value: String,
    pub caret: usize,
}

/// A masked input field.
///
/// Every operation runs to completion and leaves the field consistent.
/// Input the mask cannot take (a letter in a digit slot, backspace on an
/// empty field, typing into a full field) is ignored; the returned outcome
/// is then simply unchanged.
#[derive(Debug, Clone)]
pub struct MaskState {
    buffer: MaskBuffer,
    selection: SelectionModel,
    /// Rendering and reflow options
    pub options: MaskOptions,
    events: Vec<MaskEvent>,
}

impl MaskState {
    /// Create an empty field for `pattern`
    pub fn new(pattern: Arc<Pattern>, options: MaskOptions) -> Self {
        let buffer = MaskBuffer::new(pattern);
        let selection = SelectionModel::new(buffer.len());
        Self {
            buffer,
            selection,
            options,
            events: Vec::new(),
        }
    }

    /// Compile `mask` and create an empty field for it
    pub fn from_mask(
        mask: &str,
        table: &CharClassTable,
        options: MaskOptions,
    ) -> Result<Self, MaskError> {
        let pattern = Pattern::compile(mask, table)?;
        Ok(Self::new(Arc::new(pattern), options))
    }

    pub fn buffer(&self) -> &MaskBuffer {
        &self.buffer
    }

    pub fn pattern(&self) -> &Arc<Pattern> {
        self.buffer.pattern()
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn caret(&self) -> usize {
        self.selection.caret()
    }

    /// Rendered text, trimmed when `clean_delimiters` is set
    pub fn text(&self) -> String {
        if self.options.clean_delimiters {
            self.buffer.render_clean(self.options.placeholder)
        } else {
            self.buffer.render(self.options.placeholder)
        }
    }

    /// Rendered text at full pattern length regardless of options
    pub fn full_text(&self) -> String {
        self.buffer.render(self.options.placeholder)
    }

    pub fn value(&self) -> String {
        self.buffer.value()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    /// Value characters inside the selection (empty without one)
    pub fn selected_value(&self) -> String {
        match self.selection.range() {
            Some(range) => self.buffer.value_in(range.slots()),
            None => String::new(),
        }
    }

    pub fn outcome(&self) -> EditOutcome {
        EditOutcome {
            text: self.text(),
            value: self.value(),
            caret: self.caret(),
        }
    }

    /// Drain the events queued since the last call
    pub fn take_events(&mut self) -> Vec<MaskEvent> {
        std::mem::take(&mut self.events)
    }

    /// Dispatch a message to the matching operation
    pub fn apply(&mut self, msg: MaskEditMsg) -> EditOutcome {
        match msg {
            MaskEditMsg::TypeChar(ch) => self.type_char(ch),
            MaskEditMsg::Paste(text) => self.paste(&text),
            MaskEditMsg::Backspace { ctrl: false } => self.backspace(),
            MaskEditMsg::Backspace { ctrl: true } => self.ctrl_backspace(),
            MaskEditMsg::Delete => self.delete(),
            MaskEditMsg::Cut => self.cut().1,
            MaskEditMsg::Clear => self.clear(),
            MaskEditMsg::SetCaret(pos) => self.set_caret(pos),
            MaskEditMsg::SetSelection { start, end } => self.set_selection(start, end),
            MaskEditMsg::ClearSelection => self.clear_selection(),
        }
    }
}

// =============================================================================
// Caret and selection
// =============================================================================

impl MaskState {
    /// Move the caret; a selection survives if the caret stays on or inside it
    pub fn set_caret(&mut self, pos: usize) -> EditOutcome {
        self.selection.set_caret(pos);
        self.outcome()
    }

    pub fn set_selection(&mut self, start: usize, end: usize) -> EditOutcome {
        self.selection.set_selection(start, end);
        self.outcome()
    }

    pub fn clear_selection(&mut self) -> EditOutcome {
        self.selection.clear_selection();
        self.outcome()
    }
}

// =============================================================================
// Editing
// =============================================================================

impl MaskState {
    /// Type one character.
    ///
    /// An active selection is deleted first. The character then goes to the
    /// nearest slot at or after the caret that accepts it.
    pub fn type_char(&mut self, ch: char) -> EditOutcome {
        let before = self.buffer.value();
        self.delete_selection();
        let ch = self.options.transform.apply(ch);
        self.insert_at_caret(ch);
        self.finish_edit(&before)
    }

    /// Remove the nearest character before the caret, or the selection
    pub fn backspace(&mut self) -> EditOutcome {
        let before = self.buffer.value();
        if self.delete_selection().is_none() {
            let caret = self.selection.caret();
            match engine::backspace_target(&self.buffer, caret) {
                Some(slot) => {
                    engine::remove(&mut self.buffer, slot, self.options.policy);
                    let caret = engine::caret_after_removal(&self.buffer, slot, self.options.policy);
                    self.selection.collapse_to(caret);
                }
                None => trace!(caret, "backspace: nothing to remove"),
            }
        }
        self.finish_edit(&before)
    }

    /// Ctrl+Backspace: clear the whole field
    pub fn ctrl_backspace(&mut self) -> EditOutcome {
        let before = self.buffer.value();
        self.reset_contents();
        self.finish_edit(&before)
    }

    /// Remove the nearest character at or after the caret, or the selection.
    /// The caret stays put.
    pub fn delete(&mut self) -> EditOutcome {
        let before = self.buffer.value();
        if self.delete_selection().is_none() {
            let caret = self.selection.caret();
            match engine::delete_target(&self.buffer, caret) {
                Some(slot) => {
                    engine::remove(&mut self.buffer, slot, self.options.policy);
                }
                None => trace!(caret, "delete: nothing to remove"),
            }
        }
        self.finish_edit(&before)
    }

    /// Insert clipboard text.
    ///
    /// Walks `text` slot by slot from the caret: a character the next typed
    /// slot rejects is dropped, and pasting stops once no typed slot is left
    /// or the field is full.
    pub fn paste(&mut self, text: &str) -> EditOutcome {
        let before = self.buffer.value();
        self.delete_selection();

        let mut accepted = 0usize;
        let mut rejected = 0usize;
        for ch in text.chars() {
            let ch = self.options.transform.apply(ch);
            if self.buffer.is_full() {
                break;
            }
            let Some(next) = self.buffer.pattern().next_typed(self.selection.caret()) else {
                break;
            };
            if !self.buffer.pattern().accepts(next, ch) {
                rejected += 1;
                continue;
            }
            if self.insert_at_caret(ch) {
                accepted += 1;
            }
        }
        debug!(accepted, rejected, "paste");

        self.finish_edit(&before)
    }

    /// Remove the selection, returning the value characters it held
    pub fn cut(&mut self) -> (String, EditOutcome) {
        let before = self.buffer.value();
        let removed = self.delete_selection().unwrap_or_default();
        (removed, self.finish_edit(&before))
    }

    /// Empty the field; caret to 0
    pub fn clear(&mut self) -> EditOutcome {
        let before = self.buffer.value();
        self.reset_contents();
        self.finish_edit(&before)
    }

    /// Switch to another pattern, carrying the current value over as if it
    /// were typed into the new one from the start
    pub fn set_pattern(&mut self, pattern: Arc<Pattern>) -> EditOutcome {
        let before = self.buffer.value();
        self.buffer = MaskBuffer::with_value(pattern, &before);
        self.selection
            .reset(self.buffer.len(), self.buffer.end_of_content());
        debug!(
            mask = %self.buffer.pattern(),
            carried = %self.buffer.value(),
            "pattern replaced"
        );
        self.finish_edit(&before)
    }

    /// Compile `mask` and switch to it, see [`set_pattern`](Self::set_pattern)
    pub fn set_mask(
        &mut self,
        mask: &str,
        table: &CharClassTable,
    ) -> Result<EditOutcome, MaskError> {
        let pattern = Pattern::compile(mask, table)?;
        Ok(self.set_pattern(Arc::new(pattern)))
    }

    /// Replace the contents with `value` from outside, e.g. a bound peer.
    ///
    /// This is a direct re-render, not an edit: no event is queued, so a
    /// synchronized peer never echoes the value back.
    pub fn set_value(&mut self, value: &str) -> EditOutcome {
        if value != self.buffer.value() {
            self.buffer = MaskBuffer::with_value(Arc::clone(self.buffer.pattern()), value);
            self.selection
                .reset(self.buffer.len(), self.buffer.end_of_content());
            trace!(value, "value set externally");
        }
        self.outcome()
    }

    /// Place `ch` relative to the caret and move the caret past it.
    /// Returns false if the character was rejected.
    fn insert_at_caret(&mut self, ch: char) -> bool {
        if self.buffer.is_full() {
            trace!(?ch, "field full, input rejected");
            return false;
        }
        let caret = self.selection.caret();
        let Some(slot) = engine::insert_target(&self.buffer, caret, ch) else {
            trace!(?ch, caret, "no slot accepts input");
            return false;
        };

        let dropped = engine::insert(&mut self.buffer, slot, ch, self.options.policy);
        if dropped > 0 {
            debug!(dropped, "reflow truncated characters");
        }
        self.selection
            .collapse_to(engine::caret_after_insert(&self.buffer, slot));
        true
    }

    /// Delete the active selection, if any, leaving the caret at its start
    fn delete_selection(&mut self) -> Option<String> {
        let range = self.selection.range()?;
        let removed = engine::remove_range(&mut self.buffer, range, self.options.policy);
        self.selection.collapse_to(range.start());
        Some(removed)
    }

    fn reset_contents(&mut self) {
        self.buffer.clear();
        self.selection.collapse_to(0);
    }

    /// Queue a `ValueChanged` event if the value moved away from `before`
    fn finish_edit(&mut self, before: &str) -> EditOutcome {
        let outcome = self.outcome();
        if outcome.value != before {
            debug!(value = %outcome.value, caret = outcome.caret, "value changed");
            self.events.push(MaskEvent::ValueChanged(outcome.value.clone()));
        }
        outcome
    }
}
