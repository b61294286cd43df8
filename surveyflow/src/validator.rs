//! Advisory validation of question/answer pairs.

use surveyflow_types::{AnswerValue, Question, RequiredLevel};

use crate::registry::{RuleKind, validation_chain};

/// Why a question/answer pair failed validation.
///
/// All of these are recoverable and surfaced to the respondent; none is
/// fatal to the session.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationFailure {
    /// A required question has no meaningful answer.
    #[error("an answer is required")]
    MissingRequired,

    /// The text exceeds the question's maximum length.
    #[error("answer is {length} characters, at most {max} allowed")]
    TooLong { length: usize, max: u32 },

    /// The text does not parse as a finite number.
    #[error("answer is not a number")]
    NotNumeric,

    /// The number exceeds the question's inclusive upper bound.
    #[error("value {value} exceeds the maximum of {max}")]
    OutOfRange { value: f64, max: f64 },

    /// The file's extension is not in the accepted list.
    #[error("file type {extension:?} is not accepted")]
    FileTypeRejected { extension: Option<String> },

    /// The file exceeds the question's size cap.
    #[error("file is {size_kb} KB, at most {max_kb} KB allowed")]
    FileTooLarge { size_kb: u64, max_kb: u64 },
}

/// The result of checking one question/answer pair.
///
/// `Warn` carries a reason the caller may surface as a hint without gating
/// navigation or submission; only `Fail` blocks.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationOutcome {
    /// The pair passes every applicable rule.
    Pass,

    /// A soft-required question is unanswered.
    Warn(ValidationFailure),

    /// The pair fails a blocking rule.
    Fail(ValidationFailure),
}

impl ValidationOutcome {
    /// Check whether submission may proceed.
    pub fn ok(&self) -> bool {
        !matches!(self, Self::Fail(_))
    }

    /// Get the reason, for `Warn` and `Fail`.
    pub fn reason(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Pass => None,
            Self::Warn(reason) | Self::Fail(reason) => Some(reason),
        }
    }
}

/// Applies the kind's validation chain to a question/answer pair.
///
/// Rules run in chain order and short-circuit on the first failure. The
/// checks are independent of any input-capping the UI performs - text can
/// arrive pre-formed (pasted), so length and numeric rules always re-check
/// the stored value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator;

impl Validator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Check a question against its current answer.
    pub fn check(&self, question: &Question, answer: Option<&AnswerValue>) -> ValidationOutcome {
        for rule in validation_chain(question.kind) {
            let outcome = match rule {
                RuleKind::Required => return_if_empty(question, answer),
                RuleKind::Length => check_length(question, answer),
                RuleKind::Numeric => check_numeric(question, answer),
                RuleKind::FileConstraints => check_file(question, answer),
            };
            if let Some(outcome) = outcome {
                return outcome;
            }
        }
        ValidationOutcome::Pass
    }
}

/// Required-tristate rule. An empty answer ends the chain: there is nothing
/// left for later rules to inspect.
fn return_if_empty(
    question: &Question,
    answer: Option<&AnswerValue>,
) -> Option<ValidationOutcome> {
    let empty = answer.is_none_or(AnswerValue::is_empty);
    if !empty {
        return None;
    }
    Some(match question.required {
        RequiredLevel::Required => ValidationOutcome::Fail(ValidationFailure::MissingRequired),
        RequiredLevel::Soft => ValidationOutcome::Warn(ValidationFailure::MissingRequired),
        RequiredLevel::Off => ValidationOutcome::Pass,
    })
}

fn check_length(question: &Question, answer: Option<&AnswerValue>) -> Option<ValidationOutcome> {
    // For numeric questions max_length is a value bound, handled below.
    if question.is_numeric() {
        return None;
    }
    let max = question.max_length?;
    let text = answer?.as_text()?;
    let length = text.chars().count();
    if length > max as usize {
        return Some(ValidationOutcome::Fail(ValidationFailure::TooLong {
            length,
            max,
        }));
    }
    None
}

fn check_numeric(question: &Question, answer: Option<&AnswerValue>) -> Option<ValidationOutcome> {
    if !question.is_numeric() {
        return None;
    }
    let text = answer?.as_text()?;
    let Ok(value) = text.trim().parse::<f64>() else {
        return Some(ValidationOutcome::Fail(ValidationFailure::NotNumeric));
    };
    if !value.is_finite() {
        return Some(ValidationOutcome::Fail(ValidationFailure::NotNumeric));
    }
    // For numeric questions, max_length is the inclusive upper bound on the
    // value, not a string length.
    if let Some(max) = question.max_length {
        let max = f64::from(max);
        if value > max {
            return Some(ValidationOutcome::Fail(ValidationFailure::OutOfRange {
                value,
                max,
            }));
        }
    }
    None
}

fn check_file(question: &Question, answer: Option<&AnswerValue>) -> Option<ValidationOutcome> {
    let file = answer?.as_file()?;
    if let Some(allowed) = &question.allowed_file_types {
        let extension = file.extension();
        let accepted = extension.as_deref().is_some_and(|ext| {
            allowed
                .iter()
                .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(ext))
        });
        if !accepted {
            return Some(ValidationOutcome::Fail(ValidationFailure::FileTypeRejected {
                extension,
            }));
        }
    }
    if let Some(max_kb) = question.max_file_size_kb {
        if file.size_kb > max_kb {
            return Some(ValidationOutcome::Fail(ValidationFailure::FileTooLarge {
                size_kb: file.size_kb,
                max_kb,
            }));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveyflow_types::{Choice, QuestionKind, ScenarioId};

    fn text_question(required: RequiredLevel) -> Question {
        Question::new("q", QuestionKind::ShortText, "Name?", ScenarioId::new("main"))
            .with_required(required)
    }

    #[test]
    fn required_blocks_on_empty() {
        let question = text_question(RequiredLevel::Required);
        let validator = Validator::new();

        let outcome = validator.check(&question, None);
        assert_eq!(
            outcome,
            ValidationOutcome::Fail(ValidationFailure::MissingRequired)
        );
        assert!(!outcome.ok());

        let blank = AnswerValue::Text("   ".into());
        assert!(!validator.check(&question, Some(&blank)).ok());
    }

    #[test]
    fn soft_required_warns_without_blocking() {
        let question = text_question(RequiredLevel::Soft);
        let outcome = Validator::new().check(&question, None);

        assert_eq!(
            outcome,
            ValidationOutcome::Warn(ValidationFailure::MissingRequired)
        );
        assert!(outcome.ok());
        assert_eq!(outcome.reason(), Some(&ValidationFailure::MissingRequired));
    }

    #[test]
    fn off_required_never_flags() {
        let question = text_question(RequiredLevel::Off);
        assert_eq!(Validator::new().check(&question, None), ValidationOutcome::Pass);
    }

    #[test]
    fn empty_selection_array_counts_as_empty() {
        let question = Question::new(
            "q",
            QuestionKind::MultiChoice,
            "Pick some",
            ScenarioId::new("main"),
        )
        .with_choices(vec![Choice::new("a", "A")])
        .with_required(RequiredLevel::Required);

        let empty = AnswerValue::Choices(vec![]);
        assert!(!Validator::new().check(&question, Some(&empty)).ok());
    }

    #[test]
    fn length_is_enforced_on_preformed_text() {
        let question = Question::new("q", QuestionKind::ShortText, "Bio", ScenarioId::new("main"))
            .with_max_length(5);

        let pasted = AnswerValue::Text("pasted text well past the cap".into());
        let outcome = Validator::new().check(&question, Some(&pasted));
        assert!(matches!(
            outcome,
            ValidationOutcome::Fail(ValidationFailure::TooLong { max: 5, .. })
        ));

        let fits = AnswerValue::Text("okay!".into());
        assert_eq!(
            Validator::new().check(&question, Some(&fits)),
            ValidationOutcome::Pass
        );
    }

    #[test]
    fn numeric_parse_failure() {
        let question = Question::new("q", QuestionKind::Number, "Age", ScenarioId::new("main"));
        let answer = AnswerValue::Text("not a number".into());

        assert_eq!(
            Validator::new().check(&question, Some(&answer)),
            ValidationOutcome::Fail(ValidationFailure::NotNumeric)
        );
    }

    #[test]
    fn numeric_only_flag_applies_to_text_kinds() {
        let question = Question::new("q", QuestionKind::ShortText, "Code", ScenarioId::new("main"))
            .with_numeric_only();
        let answer = AnswerValue::Text("abc".into());

        assert!(!Validator::new().check(&question, Some(&answer)).ok());
    }

    #[test]
    fn max_length_is_a_value_bound_for_numbers() {
        // "150" parses fine; it must fail the bound, not the parse.
        let question = Question::new("q", QuestionKind::Number, "Score", ScenarioId::new("main"))
            .with_max_length(100);

        let over = AnswerValue::Text("150".into());
        assert_eq!(
            Validator::new().check(&question, Some(&over)),
            ValidationOutcome::Fail(ValidationFailure::OutOfRange {
                value: 150.0,
                max: 100.0
            })
        );

        // The bound is inclusive.
        let at_bound = AnswerValue::Text("100".into());
        assert_eq!(
            Validator::new().check(&question, Some(&at_bound)),
            ValidationOutcome::Pass
        );
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let question = Question::new("q", QuestionKind::Number, "Score", ScenarioId::new("main"));
        let answer = AnswerValue::Text("inf".into());

        assert_eq!(
            Validator::new().check(&question, Some(&answer)),
            ValidationOutcome::Fail(ValidationFailure::NotNumeric)
        );
    }

    #[test]
    fn file_type_allow_list() {
        let question = Question::new("q", QuestionKind::File, "CV", ScenarioId::new("main"))
            .with_allowed_file_types(vec!["pdf".into(), ".docx".into()]);

        let pdf = AnswerValue::File(surveyflow_types::FileAnswer::new("cv.PDF", 100));
        assert_eq!(
            Validator::new().check(&question, Some(&pdf)),
            ValidationOutcome::Pass
        );

        let exe = AnswerValue::File(surveyflow_types::FileAnswer::new("cv.exe", 100));
        assert!(matches!(
            Validator::new().check(&question, Some(&exe)),
            ValidationOutcome::Fail(ValidationFailure::FileTypeRejected { .. })
        ));
    }

    #[test]
    fn file_size_cap() {
        let question = Question::new("q", QuestionKind::File, "CV", ScenarioId::new("main"))
            .with_max_file_size_kb(512);

        let big = AnswerValue::File(surveyflow_types::FileAnswer::new("cv.pdf", 1024));
        assert_eq!(
            Validator::new().check(&question, Some(&big)),
            ValidationOutcome::Fail(ValidationFailure::FileTooLarge {
                size_kb: 1024,
                max_kb: 512
            })
        );
    }
}
