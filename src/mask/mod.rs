//! Pattern-based text masking for masked input fields.
//!
//! A mask such as `(000) 000-0000` is compiled once into a [`Pattern`] of
//! literal and typed slots. Each field owns a [`MaskBuffer`] holding one
//! character per typed slot and a [`SelectionModel`] for its caret. Edits
//! arrive as discrete operations (or [`MaskEditMsg`]s) and every call returns
//! an [`EditOutcome`] with the text to render, the canonical value and the
//! new caret.
//!
//! # Architecture
//!
//! - [`CharClassTable`]: symbol → [`CharClass`] predicate (letter, digit,
//!   enumerated set, regex)
//! - [`Pattern`]: compiled, immutable, shared slot list
//! - [`MaskBuffer`]: slot contents plus `render` / `value`
//! - [`SelectionModel`]: caret and selection range
//! - [`engine`]: insert/remove primitives under a [`ReflowPolicy`]
//! - [`MaskState`]: a field tying the above together
//! - [`MaskSync`]: fields bound to one value via [`MaskEvent`]s
//!
//! # Example
//!
//! ```
//! use maskedit::mask::{CharClassTable, MaskOptions, MaskState};
//!
//! let mut field =
//!     MaskState::from_mask("(000) 000-0000", &CharClassTable::default(), MaskOptions::default())
//!         .unwrap();
//! field.paste("555 123 4567");
//!
//! assert_eq!(field.text(), "(555) 123-4567");
//! assert_eq!(field.value(), "5551234567");
//! ```

mod buffer;
mod class;
pub mod engine;
mod messages;
mod options;
mod pattern;
mod selection;
mod state;
mod sync;

pub use buffer::MaskBuffer;
pub use class::{BuiltinClass, CharClass, CharClassTable, EnumeratedClass, RegexClass};
pub use messages::MaskEditMsg;
pub use options::{CaseTransform, MaskOptions, ReflowPolicy, DEFAULT_PLACEHOLDER};
pub use pattern::{Pattern, PatternBuilder, Slot, ESCAPE};
pub use selection::{SelectionModel, SlotRange};
pub use state::{EditOutcome, MaskState};
pub use sync::{FieldId, MaskEvent, MaskSync};
