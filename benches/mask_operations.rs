//! Benchmarks for mask compilation and field edits
//!
//! Run with: cargo bench mask_operations

use std::sync::Arc;

use maskedit::mask::{CharClassTable, MaskOptions, MaskState, Pattern, ReflowPolicy};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const PHONE: &str = "(000) 000-0000";

fn long_mask() -> String {
    "aaaa-0000 ".repeat(100)
}

fn long_value() -> String {
    "abcd1234".repeat(100)
}

fn compiled(mask: &str) -> Arc<Pattern> {
    Arc::new(Pattern::compile(mask, &CharClassTable::default()).unwrap())
}

fn long_field(policy: ReflowPolicy) -> MaskState {
    let mut state = MaskState::new(
        compiled(&long_mask()),
        MaskOptions::default().with_policy(policy),
    );
    state.set_value(&long_value());
    state
}

// ============================================================================
// Compilation
// ============================================================================

#[divan::bench]
fn compile_phone() -> Pattern {
    Pattern::compile(divan::black_box(PHONE), &CharClassTable::default()).unwrap()
}

#[divan::bench]
fn compile_1000_slots(bencher: divan::Bencher) {
    let mask = long_mask();
    let table = CharClassTable::default();
    bencher.bench(|| Pattern::compile(divan::black_box(&mask), &table).unwrap());
}

// ============================================================================
// Typing
// ============================================================================

fn type_phone_number(bencher: divan::Bencher, policy: ReflowPolicy) {
    let pattern = compiled(PHONE);
    let options = MaskOptions::default().with_policy(policy);
    bencher.bench(|| {
        let mut state = MaskState::new(Arc::clone(&pattern), options);
        for ch in "5551234567".chars() {
            state.type_char(divan::black_box(ch));
        }
        state
    });
}

#[divan::bench]
fn type_phone_compacting(bencher: divan::Bencher) {
    type_phone_number(bencher, ReflowPolicy::Compacting);
}

#[divan::bench]
fn type_phone_keep_positions(bencher: divan::Bencher) {
    type_phone_number(bencher, ReflowPolicy::KeepPositions);
}

#[divan::bench]
fn insert_at_start_of_long_field(bencher: divan::Bencher) {
    let mut field = long_field(ReflowPolicy::Compacting);
    field.set_caret(field.pattern().len());
    field.backspace();

    bencher
        .with_inputs(|| field.clone())
        .bench_local_values(|mut state| {
            state.set_caret(0);
            state.type_char(divan::black_box('z'));
            state
        });
}

// ============================================================================
// Deletion
// ============================================================================

fn backspace_from_middle(bencher: divan::Bencher, policy: ReflowPolicy) {
    let field = long_field(policy);
    bencher
        .with_inputs(|| field.clone())
        .bench_local_values(|mut state| {
            state.set_caret(500);
            state.backspace();
            state
        });
}

#[divan::bench]
fn backspace_middle_compacting(bencher: divan::Bencher) {
    backspace_from_middle(bencher, ReflowPolicy::Compacting);
}

#[divan::bench]
fn backspace_middle_keep_positions(bencher: divan::Bencher) {
    backspace_from_middle(bencher, ReflowPolicy::KeepPositions);
}

#[divan::bench]
fn delete_selection_of_long_field(bencher: divan::Bencher) {
    let field = long_field(ReflowPolicy::Compacting);
    bencher
        .with_inputs(|| field.clone())
        .bench_local_values(|mut state| {
            state.set_selection(100, 600);
            state.delete();
            state
        });
}

// ============================================================================
// Paste and pattern change
// ============================================================================

#[divan::bench]
fn paste_formatted_phone(bencher: divan::Bencher) {
    let pattern = compiled(PHONE);
    bencher.bench(|| {
        let mut state = MaskState::new(Arc::clone(&pattern), MaskOptions::default());
        state.paste(divan::black_box("(555) 123-4567"));
        state
    });
}

#[divan::bench]
fn set_pattern_long_value(bencher: divan::Bencher) {
    let to = compiled(&"0000 aaaa ".repeat(100));
    let field = long_field(ReflowPolicy::Compacting);

    bencher
        .with_inputs(|| field.clone())
        .bench_local_values(|mut state| {
            state.set_pattern(Arc::clone(&to));
            state
        });
}
