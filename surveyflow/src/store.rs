//! Collected answers for a response session.

use std::collections::HashMap;

use surveyflow_types::{Answer, AnswerValue, ChoiceId, FileAnswer, QuestionId};

/// Collected answers, keyed by question id.
///
/// The store is exclusively owned by one response session. Every mutation
/// is a total function of the current value and the operation's operands -
/// there is no hidden dependence on render state, and no operation fails.
/// Answers are created on first interaction and only removed by an explicit
/// [`AnswerStore::clear`].
#[derive(Clone, Debug, Default)]
pub struct AnswerStore {
    answers: HashMap<QuestionId, AnswerValue>,
}

impl AnswerStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    /// Store free text, overwriting any previous value (including a
    /// selection left over from a prior kind).
    pub fn set_text(&mut self, question_id: impl Into<QuestionId>, value: impl Into<String>) {
        let question_id = question_id.into();
        tracing::trace!(question = %question_id, "set text answer");
        self.answers.insert(question_id, AnswerValue::Text(value.into()));
    }

    /// Store a single selected choice, overwriting any previous value
    /// (including text left over from a prior kind).
    pub fn set_single_selection(
        &mut self,
        question_id: impl Into<QuestionId>,
        choice_id: impl Into<ChoiceId>,
    ) {
        let question_id = question_id.into();
        tracing::trace!(question = %question_id, "set single selection");
        self.answers
            .insert(question_id, AnswerValue::Choice(choice_id.into()));
    }

    /// Toggle a choice in a multi-selection.
    ///
    /// This is the single authoritative conversion point for stale answer
    /// shapes: if the stored value is anything other than a choice array
    /// (missing, text, a scalar selection from a prior single-choice kind),
    /// it is replaced by a one-element array holding the toggled choice.
    /// The previous scalar is dropped, not merged. If the stored value is
    /// already an array, the choice is added when absent and removed when
    /// present.
    pub fn toggle_multi_selection(
        &mut self,
        question_id: impl Into<QuestionId>,
        choice_id: impl Into<ChoiceId>,
    ) {
        let question_id = question_id.into();
        let choice_id = choice_id.into();
        tracing::trace!(question = %question_id, choice = %choice_id, "toggle multi selection");
        match self.answers.get_mut(&question_id) {
            Some(AnswerValue::Choices(ids)) => {
                if let Some(pos) = ids.iter().position(|id| id == &choice_id) {
                    ids.remove(pos);
                } else {
                    ids.push(choice_id);
                }
            }
            _ => {
                self.answers
                    .insert(question_id, AnswerValue::Choices(vec![choice_id]));
            }
        }
    }

    /// Store a file answer from a file-input change event.
    pub fn set_file(
        &mut self,
        question_id: impl Into<QuestionId>,
        name: impl Into<String>,
        size_kb: u64,
    ) {
        let question_id = question_id.into();
        tracing::trace!(question = %question_id, "set file answer");
        self.answers.insert(
            question_id,
            AnswerValue::File(FileAnswer::new(name, size_kb)),
        );
    }

    /// Remove a question's answer (explicit clear action from the UI).
    pub fn clear(&mut self, question_id: &QuestionId) -> Option<AnswerValue> {
        tracing::trace!(question = %question_id, "clear answer");
        self.answers.remove(question_id)
    }

    /// Get the current answer for a question.
    pub fn get(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// Check if a question has been answered at all (possibly emptily).
    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.answers.contains_key(question_id)
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Check if no question has been answered.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over all answers, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }

    /// Produce the payload records handed to the persistence layer, in no
    /// particular order. [`crate::ResponseSession::payload`] orders them by
    /// the survey's answering order.
    pub fn payload(&self) -> Vec<Answer> {
        self.answers
            .iter()
            .map(|(id, value)| Answer::new(id.clone(), value.clone()))
            .collect()
    }
}
