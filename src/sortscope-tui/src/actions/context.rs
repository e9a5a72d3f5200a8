//! ActionContext - Context for key mappings.

use std::fmt;

/// The context in which key bindings are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionContext {
    /// Main screen; also the fallback for [`ActionContext::Help`].
    Global,
    /// A numeric prompt is open. Unbound keys are typed into it.
    Prompt,
    /// The help overlay is shown.
    Help,
}

impl fmt::Display for ActionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionContext::Global => write!(f, "Global"),
            ActionContext::Prompt => write!(f, "Prompt"),
            ActionContext::Help => write!(f, "Help"),
        }
    }
}

impl ActionContext {
    /// Whether global bindings apply when this context has no match.
    pub fn falls_back_to_global(self) -> bool {
        !matches!(self, ActionContext::Prompt)
    }
}
