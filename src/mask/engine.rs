//! Reflow primitives shared by every edit operation.
//!
//! These functions mutate a [`MaskBuffer`] under a [`ReflowPolicy`] and
//! compute where the caret lands afterwards. They know nothing about
//! selections, events or case transforms; [`MaskState`](super::MaskState)
//! layers those on top.

use super::buffer::MaskBuffer;
use super::options::ReflowPolicy;
use super::selection::SlotRange;

/// Slot a typed `ch` goes to: the nearest typed slot at or after `caret`
/// whose class accepts it
pub fn insert_target(buffer: &MaskBuffer, caret: usize, ch: char) -> Option<usize> {
    buffer.pattern().find_accepting(caret, ch)
}

/// Slot a Backspace at `caret` removes
pub fn backspace_target(buffer: &MaskBuffer, caret: usize) -> Option<usize> {
    buffer.prev_filled(caret)
}

/// Slot a Delete at `caret` removes
pub fn delete_target(buffer: &MaskBuffer, caret: usize) -> Option<usize> {
    buffer.next_filled(caret)
}

/// Put `ch` into `slot`.
///
/// Compacting lifts everything stored at or after `slot` and re-places it
/// behind the new character; KeepPositions overwrites the slot alone.
/// Returns the number of characters that no longer fit.
pub fn insert(buffer: &mut MaskBuffer, slot: usize, ch: char, policy: ReflowPolicy) -> usize {
    match policy {
        ReflowPolicy::Compacting => {
            let tail = buffer.lift(slot..buffer.len());
            buffer.set(slot, Some(ch));
            buffer.fit(tail, slot + 1)
        }
        ReflowPolicy::KeepPositions => {
            buffer.set(slot, Some(ch));
            0
        }
    }
}

/// Empty `slot` and return what it held.
///
/// Compacting pulls every later character back towards `slot`.
pub fn remove(buffer: &mut MaskBuffer, slot: usize, policy: ReflowPolicy) -> Option<char> {
    let removed = buffer.get(slot);
    buffer.set(slot, None);
    if policy == ReflowPolicy::Compacting {
        let tail = buffer.lift(slot + 1..buffer.len());
        buffer.fit(tail, slot);
    }
    removed
}

/// Empty every typed slot in `range` and return the removed characters.
pub fn remove_range(buffer: &mut MaskBuffer, range: SlotRange, policy: ReflowPolicy) -> String {
    let removed: String = buffer.lift(range.slots()).into_iter().collect();
    if policy == ReflowPolicy::Compacting {
        let tail = buffer.lift(range.end()..buffer.len());
        buffer.fit(tail, range.start());
    }
    removed
}

/// Caret after a character was placed at `slot`: the next slot, moved past
/// any literals that follow
pub fn caret_after_insert(buffer: &MaskBuffer, slot: usize) -> usize {
    buffer.pattern().skip_literals(slot + 1)
}

/// Caret after the character at `slot` was removed.
///
/// KeepPositions leaves the caret on the cleared slot. Compacting does the
/// same unless no filled slot precedes it, in which case the caret returns
/// to 0 so repeated backspaces always end at the start.
pub fn caret_after_removal(buffer: &MaskBuffer, slot: usize, policy: ReflowPolicy) -> usize {
    match policy {
        ReflowPolicy::Compacting if !buffer.has_filled_before(slot) => 0,
        _ => slot,
    }
}
