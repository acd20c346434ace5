//! Output Records
//!
//! The terminal never renders anything itself. Every response is a list of
//! records: styled text lines, or effects the embedding page carries out.

use serde::Serialize;

/// Visual category a renderer uses to style a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CommandEcho,
    Error,
    Success,
    Info,
    Warning,
    SectionHeader,
    Listing,
    FileContent,
    Link,
    Glitch,
}

/// Screen-wide animations the terminal can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    Glitch,
}

/// Environment actions handled outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Open an external link in a new tab.
    OpenUrl { url: String },
    /// Run an animation once; it switches itself off after `duration_ms`.
    Animate { animation: Animation, duration_ms: u64 },
    /// Wipe the output log.
    ClearOutput,
    /// Give keyboard focus back to the input field.
    FocusInput,
}

/// One entry of the append-only output log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Line { category: Category, text: String },
    Effect { effect: Effect },
}

impl Record {
    pub fn line(category: Category, text: impl Into<String>) -> Self {
        Record::Line { category, text: text.into() }
    }

    pub fn effect(effect: Effect) -> Self {
        Record::Effect { effect }
    }

    pub fn echo(text: impl Into<String>) -> Self {
        Self::line(Category::CommandEcho, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::line(Category::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::line(Category::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::line(Category::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::line(Category::Warning, text)
    }

    /// Category of a text line, `None` for effects.
    pub fn category(&self) -> Option<Category> {
        match self {
            Record::Line { category, .. } => Some(*category),
            Record::Effect { .. } => None,
        }
    }

    /// Text of a line, `None` for effects.
    pub fn text(&self) -> Option<&str> {
        match self {
            Record::Line { text, .. } => Some(text),
            Record::Effect { .. } => None,
        }
    }

    pub fn as_effect(&self) -> Option<&Effect> {
        match self {
            Record::Effect { effect } => Some(effect),
            Record::Line { .. } => None,
        }
    }
}
