//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use maskedit::mask::{CharClassTable, MaskOptions, MaskState, ReflowPolicy};

/// Mask used throughout: three letters, three digits, two letters
pub const PHONE: &str = "(aaa) 000-aa";

/// The value that fills every slot of [`PHONE`]
pub const FULL_VALUE: &str = "abC120Aı";

/// Create an empty field for `mask` with default classes
pub fn field(mask: &str, options: MaskOptions) -> MaskState {
    MaskState::from_mask(mask, &CharClassTable::default(), options).unwrap()
}

/// Create an empty [`PHONE`] field under `policy`
pub fn phone(policy: ReflowPolicy) -> MaskState {
    field(PHONE, MaskOptions::default().with_policy(policy))
}

/// Create a [`PHONE`] field with every slot typed in
pub fn full_phone(policy: ReflowPolicy) -> MaskState {
    let mut state = phone(policy);
    type_str(&mut state, FULL_VALUE);
    state
}

/// Type each character of `s` in order
pub fn type_str(state: &mut MaskState, s: &str) {
    for ch in s.chars() {
        state.type_char(ch);
    }
}

/// Press backspace `n` times
pub fn backspace_n(state: &mut MaskState, n: usize) {
    for _ in 0..n {
        state.backspace();
    }
}
