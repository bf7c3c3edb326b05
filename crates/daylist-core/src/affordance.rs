//! Keyboard and input-state helpers shared by the add bar and edit rows.

/// Whether the add button should look active for the current input.
pub fn add_control_active(input: &str) -> bool {
    !input.trim().is_empty()
}

/// The parts of a key press the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>, shift: bool) -> Self {
        Self {
            key: key.into(),
            shift,
        }
    }

    /// Enter without Shift submits the add input.
    pub fn submits_new_task(&self) -> bool {
        self.key == "Enter" && !self.shift
    }

    pub fn saves_edit(&self) -> bool {
        self.key == "Enter"
    }

    pub fn cancels_edit(&self) -> bool {
        self.key == "Escape"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_only_with_visible_text() {
        assert!(!add_control_active(""));
        assert!(!add_control_active("  \t"));
        assert!(add_control_active(" a "));
    }

    #[test]
    fn shift_enter_does_not_submit() {
        assert!(KeyChord::new("Enter", false).submits_new_task());
        assert!(!KeyChord::new("Enter", true).submits_new_task());
        assert!(!KeyChord::new("a", false).submits_new_task());
    }

    #[test]
    fn edit_keys() {
        assert!(KeyChord::new("Enter", true).saves_edit());
        assert!(KeyChord::new("Escape", false).cancels_edit());
        assert!(!KeyChord::new("Escape", false).saves_edit());
    }
}
