//! Keeping several masked fields on one canonical value.
//!
//! Fields never share slot arrays. When an edit changes a field's value, the
//! field queues [`MaskEvent::ValueChanged`]; [`MaskSync`] forwards the raw
//! value to every peer, which re-expands it through its own pattern with
//! [`MaskState::set_value`]. That call queues no events, so updates cannot
//! bounce back and forth.

use super::messages::MaskEditMsg;
use super::state::{EditOutcome, MaskState};

/// Notification queued by a [`MaskState`] after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskEvent {
    /// The canonical value changed; carries the new value
    ValueChanged(String),
}

/// Handle to a field registered with a [`MaskSync`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(usize);

/// A group of fields bound to the same value.
#[derive(Debug, Clone, Default)]
pub struct MaskSync {
    fields: Vec<MaskState>,
}

impl MaskSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field. A field joining a non-empty group adopts the
    /// group's current value.
    pub fn add(&mut self, mut state: MaskState) -> FieldId {
        if let Some(first) = self.fields.first() {
            let value = first.value();
            state.set_value(&value);
        }
        // Anything the field queued before joining concerns nobody here
        state.take_events();
        self.fields.push(state);
        FieldId(self.fields.len() - 1)
    }

    pub fn field(&self, id: FieldId) -> Option<&MaskState> {
        self.fields.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Apply `msg` to one field and propagate any value change to its peers
    pub fn apply(&mut self, id: FieldId, msg: MaskEditMsg) -> Option<EditOutcome> {
        self.edit(id, |state| state.apply(msg))
    }

    /// Run `f` against one field, then propagate any value change it caused.
    /// Use this for operations without a message form, like `set_pattern`.
    pub fn edit<R>(&mut self, id: FieldId, f: impl FnOnce(&mut MaskState) -> R) -> Option<R> {
        let source = self.fields.get_mut(id.0)?;
        let result = f(source);
        let events = source.take_events();
        for event in &events {
            self.broadcast(id, event);
        }
        Some(result)
    }

    fn broadcast(&mut self, source: FieldId, event: &MaskEvent) {
        match event {
            MaskEvent::ValueChanged(value) => {
                tracing::debug!(source = source.0, %value, "syncing peers");
                for (index, peer) in self.fields.iter_mut().enumerate() {
                    if index != source.0 {
                        peer.set_value(value);
                    }
                }
            }
        }
    }
}
