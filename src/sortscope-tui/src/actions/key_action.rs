//! KeyAction enum - All possible user actions.

use std::fmt;

use sortscope_core::Algorithm;

/// All possible actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // === Core ===
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    Help,
    /// Close the overlay or prompt, otherwise stop the running sort.
    Cancel,

    // === Sorting ===
    /// Start an algorithm.
    Sort(Algorithm),
    /// Stop the running sort.
    Stop,

    // === Array ===
    /// Open the range prompt and generate a new array.
    NewArray,
    /// Grow the array by one step.
    GrowSize,
    /// Shrink the array by one step.
    ShrinkSize,
    /// Open the size prompt.
    EnterSize,

    // === Display ===
    /// Lengthen the step delay.
    Slower,
    /// Shorten the step delay.
    Faster,
    /// Switch between ascending and descending order.
    ToggleOrder,
    /// Switch between fitted and absolute bar heights.
    ToggleScale,

    // === Prompt ===
    /// Submit the prompt.
    Submit,
    /// Move to the next prompt field.
    NextField,
    /// Move to the previous prompt field.
    PrevField,
    /// Delete the last character.
    Backspace,

    /// No action.
    None,
}

impl KeyAction {
    /// Short label for the help overlay.
    pub fn label(self) -> &'static str {
        match self {
            KeyAction::Quit => "quit",
            KeyAction::Help => "help",
            KeyAction::Cancel => "cancel",
            KeyAction::Sort(Algorithm::Bubble) => "bubble sort",
            KeyAction::Sort(Algorithm::Selection) => "selection sort",
            KeyAction::Sort(Algorithm::Merge) => "merge sort",
            KeyAction::Stop => "stop",
            KeyAction::NewArray => "new array",
            KeyAction::GrowSize => "size +",
            KeyAction::ShrinkSize => "size -",
            KeyAction::EnterSize => "set size",
            KeyAction::Slower => "delay +",
            KeyAction::Faster => "delay -",
            KeyAction::ToggleOrder => "order",
            KeyAction::ToggleScale => "scale",
            KeyAction::Submit => "submit",
            KeyAction::NextField => "next field",
            KeyAction::PrevField => "previous field",
            KeyAction::Backspace => "delete",
            KeyAction::None => "",
        }
    }

    /// Whether this action is a no-op.
    pub fn is_none(self) -> bool {
        self == KeyAction::None
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
