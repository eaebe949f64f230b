//! Selection tests: caret rules, replacement, cut and copy

mod common;

use common::{full_phone, phone, type_str};
use maskedit::mask::{MaskEditMsg, ReflowPolicy, SlotRange};

// ========================================================================
// Caret and Range Tests
// ========================================================================

#[test]
fn test_selection_is_normalized_and_caret_moves_to_end() {
    let mut state = full_phone(ReflowPolicy::Compacting);
    let out = state.set_selection(11, 6);

    assert_eq!(state.selection().range(), Some(SlotRange::new(6, 11)));
    assert_eq!(out.caret, 11);
}

#[test]
fn test_reversed_range_is_normalized_before_use() {
    let range = SlotRange::new(9, 4);
    assert_eq!(range.start(), 4);
    assert_eq!(range.end(), 9);
    assert_eq!(range.len(), 5);
    assert!(range.touches(9));
    assert!(!range.contains_slot(9));

    let mut state = full_phone(ReflowPolicy::Compacting);
    state.set_selection(9, 4);
    assert_eq!(state.selection().range().map(|r| r.slots()), Some(4..9));
    assert_eq!(state.selected_value(), "120");
}

#[test]
fn test_empty_selection_is_just_a_caret() {
    let mut state = full_phone(ReflowPolicy::Compacting);
    state.set_selection(4, 4);

    assert!(!state.selection().has_selection());
    assert_eq!(state.caret(), 4);
}

#[test]
fn test_selection_is_clamped_to_pattern() {
    let mut state = phone(ReflowPolicy::Compacting);
    state.set_selection(3, 99);
    assert_eq!(state.selection().range(), Some(SlotRange::new(3, 12)));
}

#[test]
fn test_caret_inside_selection_keeps_it() {
    let mut state = full_phone(ReflowPolicy::Compacting);
    state.set_selection(2, 7);

    state.set_caret(2);
    assert!(state.selection().has_selection());
    state.set_caret(5);
    assert!(state.selection().is_caret_inside_selection());

    state.set_caret(9);
    assert!(!state.selection().has_selection());
    assert_eq!(state.caret(), 9);
}

#[test]
fn test_clear_selection_keeps_caret() {
    let mut state = full_phone(ReflowPolicy::Compacting);
    state.set_selection(2, 7);
    let out = state.clear_selection();

    assert!(!state.selection().has_selection());
    assert_eq!(out.caret, 7);
}

// ========================================================================
// Replacement Tests
// ========================================================================

#[test]
fn test_typing_replaces_selection() {
    let mut state = phone(ReflowPolicy::Compacting);
    type_str(&mut state, "abC");
    state.set_selection(1, 4);

    let out = state.type_char('x');
    assert_eq!(out.text, "(x__) ___-__");
    assert_eq!(out.caret, 2);
}

#[test]
fn test_backspace_removes_selection_only() {
    let mut state = full_phone(ReflowPolicy::Compacting);
    state.set_selection(6, 9);

    let out = state.backspace();
    assert_eq!(out.text, "(abC) ___-Aı");
    assert_eq!(out.caret, 6);
}

#[test]
fn test_delete_removes_selection_keep_positions() {
    let mut state = full_phone(ReflowPolicy::KeepPositions);
    state.set_selection(2, 7);

    let out = state.delete();
    assert_eq!(out.text, "(a__) _20-Aı");
    assert_eq!(out.caret, 2);
}

#[test]
fn test_rejected_char_still_removes_selection() {
    let mut state = full_phone(ReflowPolicy::Compacting);
    state.set_selection(1, 4);

    let out = state.type_char('+');
    assert_eq!(out.value, "120Aı");
    assert_eq!(out.caret, 1);
}

// ========================================================================
// Cut and Copy Tests
// ========================================================================

#[test]
fn test_selected_value_skips_literals() {
    let mut state = full_phone(ReflowPolicy::Compacting);
    state.set_selection(2, 8);
    assert_eq!(state.selected_value(), "bC12");

    state.clear_selection();
    assert_eq!(state.selected_value(), "");
}

#[test]
fn test_cut_returns_removed_value() {
    let mut state = full_phone(ReflowPolicy::Compacting);
    state.set_selection(6, 9);

    let (removed, out) = state.cut();
    assert_eq!(removed, "120");
    assert_eq!(out.text, "(abC) ___-Aı");
    assert_eq!(out.caret, 6);
}

#[test]
fn test_cut_without_selection_is_noop() {
    let mut state = full_phone(ReflowPolicy::Compacting);
    state.take_events();

    let out = state.apply(MaskEditMsg::Cut);
    assert_eq!(out.value, "abC120Aı");
    assert!(state.take_events().is_empty());
}
