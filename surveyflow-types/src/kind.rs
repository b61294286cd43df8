use serde::{Deserialize, Serialize};

/// The canonical, language-agnostic category of a question.
///
/// Raw type labels (possibly localized) are normalized to this closed set by
/// the type registry. The kind - not the populated fields of an answer -
/// determines which answer field is meaningful for a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Single-line free text.
    ShortText,

    /// Multi-line free text.
    LongText,

    /// Pick exactly one choice.
    SingleChoice,

    /// Pick exactly one image choice.
    SingleChoiceImage,

    /// Pick any number of choices.
    MultiChoice,

    /// Pick any number of image choices.
    MultiChoiceImage,

    /// Star rating on a scale of the given size.
    Rating(u8),

    /// Grid of per-row single selections.
    Matrix,

    /// Numeric text entry.
    Number,

    /// Email address entry.
    Email,

    /// Phone number entry.
    Phone,

    /// URL entry.
    Url,

    /// Date picker.
    Date,

    /// Time picker.
    Time,

    /// Combined date and time picker.
    DateTime,

    /// File upload, answered with a filename and size.
    File,
}

/// Which answer field a question kind stores its data in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerField {
    /// The answer lives in `text`.
    Text,

    /// The answer lives in `selection`.
    Selection,

    /// The answer is an uploaded file record.
    File,
}

/// Whether a selection-shaped kind stores one choice or many.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionArity {
    /// A single choice id.
    Scalar,

    /// A set of choice ids.
    Array,
}

impl QuestionKind {
    /// The answer field this kind stores its data in.
    pub fn answer_field(self) -> AnswerField {
        match self {
            Self::SingleChoice
            | Self::SingleChoiceImage
            | Self::MultiChoice
            | Self::MultiChoiceImage
            | Self::Matrix => AnswerField::Selection,
            Self::File => AnswerField::File,
            _ => AnswerField::Text,
        }
    }

    /// The arity of the selection, for selection-shaped kinds.
    ///
    /// Returns `None` for text- and file-shaped kinds.
    pub fn selection_arity(self) -> Option<SelectionArity> {
        match self {
            Self::SingleChoice | Self::SingleChoiceImage => Some(SelectionArity::Scalar),
            Self::MultiChoice | Self::MultiChoiceImage | Self::Matrix => {
                Some(SelectionArity::Array)
            }
            _ => None,
        }
    }

    /// Check if this kind stores free text.
    pub fn is_text(self) -> bool {
        self.answer_field() == AnswerField::Text
    }

    /// Check if this kind stores exactly one selected choice.
    pub fn is_single_select(self) -> bool {
        self.selection_arity() == Some(SelectionArity::Scalar)
    }

    /// Check if this kind stores a set of selected choices.
    pub fn is_multi_select(self) -> bool {
        self.selection_arity() == Some(SelectionArity::Array)
    }

    /// Check if this kind requires a non-empty choice list.
    pub fn needs_choices(self) -> bool {
        self.answer_field() == AnswerField::Selection
    }

    /// Check if text answers for this kind must parse as a number.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Rating(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_kinds_need_choices() {
        assert!(QuestionKind::SingleChoice.needs_choices());
        assert!(QuestionKind::MultiChoiceImage.needs_choices());
        assert!(!QuestionKind::ShortText.needs_choices());
        assert!(!QuestionKind::File.needs_choices());
    }

    #[test]
    fn arity() {
        assert!(QuestionKind::SingleChoiceImage.is_single_select());
        assert!(QuestionKind::MultiChoice.is_multi_select());
        assert_eq!(QuestionKind::Number.selection_arity(), None);
    }

    #[test]
    fn numeric_kinds() {
        assert!(QuestionKind::Number.is_numeric());
        assert!(QuestionKind::Rating(5).is_numeric());
        assert!(!QuestionKind::Email.is_numeric());
    }
}
