//! Inline numeric prompts for the value range and the array size.

use sortscope_core::Settings;
use sortscope_core::settings::SIZE_ENTRY_RANGE;

use crate::error::InputError;

/// Longest text a prompt field accepts.
const MAX_FIELD_LEN: usize = 11;

/// Which prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Min and max of the generated values.
    Range,
    /// Exact array length.
    Size,
}

impl PromptKind {
    /// Title shown on the prompt box.
    pub fn title(self) -> &'static str {
        match self {
            Self::Range => "New array: value range",
            Self::Size => "Array size",
        }
    }
}

/// A validated prompt submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptValue {
    /// New inclusive range.
    Range {
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },
    /// New length.
    Size(usize),
}

/// One editable text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptField {
    /// Label shown before the text.
    pub label: &'static str,
    /// Current text.
    pub text: String,
}

impl PromptField {
    fn new(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// State of an open prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    kind: PromptKind,
    fields: Vec<PromptField>,
    focus: usize,
    error: Option<String>,
}

impl PromptState {
    /// Range prompt pre-filled with the current bounds.
    pub fn range(settings: &Settings) -> Self {
        Self {
            kind: PromptKind::Range,
            fields: vec![
                PromptField::new("min", settings.min.to_string()),
                PromptField::new("max", settings.max.to_string()),
            ],
            focus: 0,
            error: None,
        }
    }

    /// Size prompt pre-filled with the current length.
    pub fn size(settings: &Settings) -> Self {
        Self {
            kind: PromptKind::Size,
            fields: vec![PromptField::new("size", settings.size.to_string())],
            focus: 0,
            error: None,
        }
    }

    /// Prompt kind.
    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    /// All fields, in tab order.
    pub fn fields(&self) -> &[PromptField] {
        &self.fields
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Error from the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Types a character into the focused field.
    ///
    /// Only digits and a leading minus sign are accepted.
    pub fn insert_char(&mut self, c: char) {
        let field = &mut self.fields[self.focus];
        let accepted = c.is_ascii_digit() || (c == '-' && field.text.is_empty());
        if accepted && field.text.len() < MAX_FIELD_LEN {
            field.text.push(c);
            self.error = None;
        }
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.fields[self.focus].text.pop();
        self.error = None;
    }

    /// Clears the focused field.
    pub fn clear_field(&mut self) {
        self.fields[self.focus].text.clear();
        self.error = None;
    }

    /// Moves focus to the next field, wrapping.
    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping.
    pub fn prev_field(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Parses the fields. On failure the error is kept for display.
    pub fn submit(&mut self) -> Result<PromptValue, InputError> {
        let parsed = match self.kind {
            PromptKind::Range => {
                parse_range(&self.fields[0].text, &self.fields[1].text)
                    .map(|(min, max)| PromptValue::Range { min, max })
            }
            PromptKind::Size => parse_size(&self.fields[0].text).map(PromptValue::Size),
        };
        self.error = parsed.as_ref().err().map(ToString::to_string);
        parsed
    }
}

/// Parses an `i32`, naming `field` in the error.
pub fn parse_int(field: &'static str, text: &str) -> Result<i32, InputError> {
    text.trim().parse::<i32>().map_err(|_| InputError::NotANumber {
        field,
        input: text.to_string(),
    })
}

/// Parses a min/max pair.
pub fn parse_range(min: &str, max: &str) -> Result<(i32, i32), InputError> {
    let min = parse_int("min", min)?;
    let max = parse_int("max", max)?;
    if min > max {
        return Err(InputError::MinGreaterThanMax { min, max });
    }
    Ok((min, max))
}

/// Parses an array length accepted by direct entry.
pub fn parse_size(text: &str) -> Result<usize, InputError> {
    let value = i64::from(parse_int("size", text)?);
    let (lo, hi) = (*SIZE_ENTRY_RANGE.start(), *SIZE_ENTRY_RANGE.end());
    if value < lo as i64 || value > hi as i64 {
        return Err(InputError::OutOfRange {
            field: "size",
            value,
            min: lo as i64,
            max: hi as i64,
        });
    }
    Ok(value as usize)
}
