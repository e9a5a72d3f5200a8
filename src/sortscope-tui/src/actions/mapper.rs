//! ActionMapper - Maps keys to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sortscope_core::Algorithm;

use super::{ActionContext, KeyAction, KeyBinding};

/// Maps key events to actions based on the current context.
#[derive(Debug)]
pub struct ActionMapper {
    /// All registered key bindings.
    bindings: Vec<KeyBinding>,
}

impl ActionMapper {
    /// Create a new empty action mapper.
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Create an action mapper with default bindings.
    pub fn default_bindings() -> Self {
        let mut mapper = Self::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        // === Global bindings ===
        mapper.add_bindings(vec![
            KeyBinding::char('n', KeyAction::NewArray, "New array (prompts for range)"),
            KeyBinding::char('b', KeyAction::Sort(Algorithm::Bubble), "Bubble sort"),
            KeyBinding::char(
                's',
                KeyAction::Sort(Algorithm::Selection),
                "Selection sort",
            ),
            KeyBinding::char('m', KeyAction::Sort(Algorithm::Merge), "Merge sort"),
            KeyBinding::char('x', KeyAction::Stop, "Stop sorting"),
            KeyBinding::global(
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                KeyAction::Cancel,
                "Stop sorting / close",
            ),
            KeyBinding::char('+', KeyAction::GrowSize, "Size +5"),
            KeyBinding::char('=', KeyAction::GrowSize, "Size +5"),
            KeyBinding::char('-', KeyAction::ShrinkSize, "Size -5"),
            KeyBinding::char('z', KeyAction::EnterSize, "Enter size (1-1000)"),
            KeyBinding::char(']', KeyAction::Slower, "Delay +10 ms"),
            KeyBinding::char('.', KeyAction::Slower, "Delay +10 ms"),
            KeyBinding::char('[', KeyAction::Faster, "Delay -10 ms"),
            KeyBinding::char(',', KeyAction::Faster, "Delay -10 ms"),
            KeyBinding::char('o', KeyAction::ToggleOrder, "Toggle ascending/descending"),
            KeyBinding::char('v', KeyAction::ToggleScale, "Toggle fit/absolute bars"),
            KeyBinding::char('?', KeyAction::Help, "Show help"),
            KeyBinding::global(
                KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE),
                KeyAction::Help,
                "Show help",
            ),
            KeyBinding::char('q', KeyAction::Quit, "Quit"),
            KeyBinding::global(ctrl_c, KeyAction::Quit, "Quit"),
        ]);

        // === Prompt bindings ===
        mapper.add_bindings(vec![
            KeyBinding::prompt(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                KeyAction::Submit,
                "Apply",
            ),
            KeyBinding::prompt(
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                KeyAction::Cancel,
                "Cancel",
            ),
            KeyBinding::prompt(
                KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
                KeyAction::NextField,
                "Next field",
            ),
            KeyBinding::prompt(
                KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
                KeyAction::NextField,
                "Next field",
            ),
            KeyBinding::prompt(
                KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
                KeyAction::PrevField,
                "Previous field",
            ),
            KeyBinding::prompt(
                KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
                KeyAction::PrevField,
                "Previous field",
            ),
            KeyBinding::prompt(
                KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
                KeyAction::Backspace,
                "Delete character",
            ),
            KeyBinding::prompt(ctrl_c, KeyAction::Quit, "Quit"),
        ]);

        // === Help bindings ===
        mapper.add_bindings(vec![
            KeyBinding::help(
                KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
                KeyAction::Help,
                "Close help",
            ),
            KeyBinding::help(
                KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                KeyAction::Help,
                "Close help",
            ),
        ]);

        mapper
    }

    /// Add multiple bindings.
    pub fn add_bindings(&mut self, bindings: Vec<KeyBinding>) {
        self.bindings.extend(bindings);
    }

    /// Get the action for a key event in the given context.
    ///
    /// Context-specific bindings take precedence over global bindings;
    /// the prompt context never falls back.
    pub fn get_action(&self, key: KeyEvent, context: ActionContext) -> KeyAction {
        if context != ActionContext::Global
            && let Some(binding) = self.find(&key, context)
        {
            return binding.action;
        }

        if context.falls_back_to_global()
            && let Some(binding) = self.find(&key, ActionContext::Global)
        {
            return binding.action;
        }

        KeyAction::None
    }

    /// Get all bindings for a specific context.
    pub fn bindings_for_context(&self, context: ActionContext) -> Vec<&KeyBinding> {
        self.bindings
            .iter()
            .filter(|b| b.context == context)
            .collect()
    }

    /// Get all unique bindings.
    pub fn all_bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Global bindings with one row per action, keys joined with " / ".
    pub fn help_rows(&self) -> Vec<(String, &'static str)> {
        let mut rows: Vec<(KeyAction, Vec<String>, &'static str)> = Vec::new();
        for binding in self.bindings_for_context(ActionContext::Global) {
            let key = super::format_key(&binding.key);
            match rows.iter_mut().find(|(action, _, _)| *action == binding.action) {
                Some((_, keys, _)) => keys.push(key),
                None => rows.push((binding.action, vec![key], binding.description)),
            }
        }
        rows.into_iter()
            .map(|(_, keys, description)| (keys.join(" / "), description))
            .collect()
    }

    fn find(&self, key: &KeyEvent, context: ActionContext) -> Option<&KeyBinding> {
        self.bindings
            .iter()
            .find(|b| b.context == context && b.matches(key))
    }
}

impl Default for ActionMapper {
    fn default() -> Self {
        Self::default_bindings()
    }
}
