//! Question model for exam paper conversion.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A scalar metadata value from the front matter block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Bool(bool),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Bool(_) => None,
        }
    }

    /// True only for the boolean `true`; string values are never truthy.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Front matter metadata, in insertion order.
pub type Metadata = IndexMap<String, Value>;

/// Question classification. Starts as `Short`; an option line switches it to
/// `Choice`, a requirement-box directive to `Essay`. On conflicting signals
/// the later directive wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum QuestionKind {
    Choice,
    #[default]
    Short,
    Essay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub points: u32,
    pub stem: String,
    pub kind: QuestionKind,
    /// Option texts in source order, letter prefixes dropped.
    pub options: Vec<String>,
    pub answer: String,
    /// 1-4 for a parsed A-D choice answer, 0 when unset.
    pub answer_index: u8,
    pub answer_lines: u32,
    pub staff_lines: u32,
    pub piano_staff: u32,
    pub requirement_title: Option<String>,
    pub requirement_items: Vec<String>,
}

impl Question {
    pub fn new(points: u32) -> Self {
        Self {
            points,
            stem: String::new(),
            kind: QuestionKind::Short,
            options: Vec::new(),
            answer: String::new(),
            answer_index: 0,
            answer_lines: 0,
            staff_lines: 0,
            piano_staff: 0,
            requirement_title: None,
            requirement_items: Vec::new(),
        }
    }
}

/// A top-level named group of questions. Sections with identical titles stay
/// distinct; order is source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }
}

/// A fully parsed exam source, built fresh per conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exam {
    pub metadata: Metadata,
    pub sections: Vec<Section>,
}

impl Exam {
    pub fn new(metadata: Metadata, sections: Vec<Section>) -> Self {
        Self { metadata, sections }
    }
}
