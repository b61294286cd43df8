use serde::{Deserialize, Serialize};

use crate::{ChoiceId, QuestionId};

/// A recorded file upload: the filename and size reported by the file input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileAnswer {
    /// The uploaded file's name, including its extension.
    pub name: String,

    /// The reported size in kilobytes.
    pub size_kb: u64,
}

impl FileAnswer {
    /// Create a new file answer.
    pub fn new(name: impl Into<String>, size_kb: u64) -> Self {
        Self {
            name: name.into(),
            size_kb,
        }
    }

    /// The lowercased extension of the filename, if it has one.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// The value stored for an answered question.
///
/// Exactly one shape is meaningful per question kind; which one is decided
/// by the kind's registry entry, never by inspecting which variant happens
/// to be stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnswerValue {
    /// Free text (short/long text, numeric, email, phone, url, date kinds).
    Text(String),

    /// A single selected choice (single-choice kinds).
    Choice(ChoiceId),

    /// A set of selected choices (multi-choice kinds).
    ///
    /// Once any multi-select toggle has been applied this is always the
    /// stored shape, never a bare `Choice`.
    Choices(Vec<ChoiceId>),

    /// An uploaded file record (file kind).
    File(FileAnswer),
}

impl AnswerValue {
    /// Try to get this value as a text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a single selected choice.
    pub fn as_choice(&self) -> Option<&ChoiceId> {
        match self {
            Self::Choice(id) => Some(id),
            _ => None,
        }
    }

    /// Try to get this value as a set of selected choices.
    pub fn as_choices(&self) -> Option<&[ChoiceId]> {
        match self {
            Self::Choices(ids) => Some(ids),
            _ => None,
        }
    }

    /// Try to get this value as a file record.
    pub fn as_file(&self) -> Option<&FileAnswer> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    /// Check whether this value counts as empty for required and
    /// is-empty checks.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Choice(_) => false,
            Self::Choices(ids) => ids.is_empty(),
            Self::File(file) => file.name.is_empty(),
        }
    }

    /// Get the shape name of this value for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Choices(_) => "Choices",
            Self::File(_) => "File",
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<ChoiceId> for AnswerValue {
    fn from(id: ChoiceId) -> Self {
        Self::Choice(id)
    }
}

impl From<Vec<ChoiceId>> for AnswerValue {
    fn from(ids: Vec<ChoiceId>) -> Self {
        Self::Choices(ids)
    }
}

impl From<FileAnswer> for AnswerValue {
    fn from(file: FileAnswer) -> Self {
        Self::File(file)
    }
}

/// One record of the payload handed to the persistence layer.
///
/// Each answered question contributes exactly one record with exactly one
/// populated value shape. The wire format is the consumer's concern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// The answered question.
    pub question_id: QuestionId,

    /// The collected value.
    pub value: AnswerValue,
}

impl Answer {
    /// Create a new answer record.
    pub fn new(question_id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}
