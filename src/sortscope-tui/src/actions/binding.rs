//! KeyBinding - A single key binding.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{ActionContext, KeyAction};

/// A key binding that maps a key event to an action in a specific context.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// The key event that triggers this binding.
    pub key: KeyEvent,
    /// The action to perform.
    pub action: KeyAction,
    /// The context in which this binding is active.
    pub context: ActionContext,
    /// Human-readable description of the binding.
    pub description: &'static str,
}

impl KeyBinding {
    /// Create a new key binding.
    pub fn new(
        key: KeyEvent,
        action: KeyAction,
        context: ActionContext,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            action,
            context,
            description,
        }
    }

    /// Create a global binding for a plain character.
    pub fn char(c: char, action: KeyAction, description: &'static str) -> Self {
        Self::new(
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
            action,
            ActionContext::Global,
            description,
        )
    }

    /// Create a global key binding.
    pub fn global(key: KeyEvent, action: KeyAction, description: &'static str) -> Self {
        Self::new(key, action, ActionContext::Global, description)
    }

    /// Create a prompt context key binding.
    pub fn prompt(key: KeyEvent, action: KeyAction, description: &'static str) -> Self {
        Self::new(key, action, ActionContext::Prompt, description)
    }

    /// Create a help context key binding.
    pub fn help(key: KeyEvent, action: KeyAction, description: &'static str) -> Self {
        Self::new(key, action, ActionContext::Help, description)
    }

    /// Whether `key` triggers this binding.
    ///
    /// Shift is ignored for characters, since terminals report `+` or `?`
    /// with or without it.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.key.code != key.code {
            return false;
        }
        match key.code {
            KeyCode::Char(_) => {
                self.key.modifiers.difference(KeyModifiers::SHIFT)
                    == key.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.key.modifiers == key.modifiers,
        }
    }
}
