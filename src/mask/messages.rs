//! Message type for masked-field edits.

/// One discrete operation reported by the input layer.
///
/// Key events arrive pre-filtered: a single logical character, or a named
/// control key with its Ctrl flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskEditMsg {
    // === Insertion ===
    /// A typed character
    TypeChar(char),
    /// Clipboard text, filtered slot by slot
    Paste(String),

    // === Deletion ===
    /// Backspace; with `ctrl` the whole field is cleared
    Backspace { ctrl: bool },
    /// Forward delete
    Delete,
    /// Remove the selection (the caller already copied `selected_value`)
    Cut,
    /// Empty the field
    Clear,

    // === Caret / Selection ===
    SetCaret(usize),
    SetSelection { start: usize, end: usize },
    ClearSelection,
}

impl MaskEditMsg {
    /// Check if this message may change the field's contents
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            MaskEditMsg::TypeChar(_)
                | MaskEditMsg::Paste(_)
                | MaskEditMsg::Backspace { .. }
                | MaskEditMsg::Delete
                | MaskEditMsg::Cut
                | MaskEditMsg::Clear
        )
    }

    /// Check if this message only moves the caret or selection
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            MaskEditMsg::SetCaret(_)
                | MaskEditMsg::SetSelection { .. }
                | MaskEditMsg::ClearSelection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_editing() {
        assert!(MaskEditMsg::TypeChar('a').is_editing());
        assert!(MaskEditMsg::Backspace { ctrl: true }.is_editing());
        assert!(MaskEditMsg::Paste("12".into()).is_editing());
        assert!(!MaskEditMsg::SetCaret(3).is_editing());
        assert!(!MaskEditMsg::ClearSelection.is_editing());
    }

    #[test]
    fn test_is_selection() {
        assert!(MaskEditMsg::SetSelection { start: 1, end: 4 }.is_selection());
        assert!(!MaskEditMsg::Delete.is_selection());
    }
}
