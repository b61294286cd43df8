//! One respondent's pass through a survey.

use surveyflow_types::{
    Answer, AnswerField, AnswerValue, ChoiceId, ConfigError, Question, QuestionId,
    SurveyDefinition,
};

use crate::{
    AnswerStore, ConditionEvaluator, ConditionInfo, ConditionInfoProjector, Resolution,
    TypeRegistry, ValidationOutcome, Validator,
};

/// Owns the state of one response session: the immutable survey, the
/// answers collected so far, and the branching evaluator.
///
/// Every mutation applies the store update and then invalidates the
/// evaluator's dependent resolutions before returning, so the caller can
/// never observe a stale scenario for a previously answered question.
/// Everything is synchronous and single-threaded; nothing here suspends or
/// performs I/O.
#[derive(Debug)]
pub struct ResponseSession {
    survey: SurveyDefinition,
    registry: TypeRegistry,
    store: AnswerStore,
    evaluator: ConditionEvaluator,
    validator: Validator,
}

impl ResponseSession {
    /// Start a session over a survey.
    pub fn new(survey: SurveyDefinition) -> Self {
        let evaluator = ConditionEvaluator::new(&survey);
        Self {
            survey,
            registry: TypeRegistry::default(),
            store: AnswerStore::new(),
            evaluator,
            validator: Validator::new(),
        }
    }

    /// The survey this session runs against.
    pub fn survey(&self) -> &SurveyDefinition {
        &self.survey
    }

    /// The answers collected so far.
    pub fn answers(&self) -> &AnswerStore {
        &self.store
    }

    /// Authoring defects detected when branching was registered.
    pub fn config_errors(&self) -> &[ConfigError] {
        self.evaluator.config_errors()
    }

    /// Store free text for a question.
    pub fn set_text(&mut self, question_id: impl Into<QuestionId>, value: impl Into<String>) {
        let question_id = question_id.into();
        self.store.set_text(question_id.clone(), value);
        self.evaluator.invalidate(&question_id);
    }

    /// Store a single selected choice for a question.
    pub fn set_single_selection(
        &mut self,
        question_id: impl Into<QuestionId>,
        choice_id: impl Into<ChoiceId>,
    ) {
        let question_id = question_id.into();
        self.store.set_single_selection(question_id.clone(), choice_id);
        self.evaluator.invalidate(&question_id);
    }

    /// Toggle a choice in a question's multi-selection.
    pub fn toggle_multi_selection(
        &mut self,
        question_id: impl Into<QuestionId>,
        choice_id: impl Into<ChoiceId>,
    ) {
        let question_id = question_id.into();
        self.store.toggle_multi_selection(question_id.clone(), choice_id);
        self.evaluator.invalidate(&question_id);
    }

    /// Store a file answer from a file-input change event.
    pub fn set_file(
        &mut self,
        question_id: impl Into<QuestionId>,
        name: impl Into<String>,
        size_kb: u64,
    ) {
        let question_id = question_id.into();
        self.store.set_file(question_id.clone(), name, size_kb);
        self.evaluator.invalidate(&question_id);
    }

    /// Remove a question's answer (explicit clear action from the UI).
    pub fn clear_answer(&mut self, question_id: &QuestionId) -> Option<AnswerValue> {
        let removed = self.store.clear(question_id);
        if removed.is_some() {
            self.evaluator.invalidate(question_id);
        }
        removed
    }

    /// Apply a raw selection event from the UI.
    ///
    /// Interaction events arrive with the question's raw, possibly
    /// localized type label. The label is canonicalized through the
    /// registry (with the survey's own kind taking precedence when the
    /// question is known) and the value is routed to the right mutation:
    /// multi-select kinds toggle, single-select kinds overwrite, everything
    /// else is stored as text.
    pub fn answer_event(
        &mut self,
        question_id: impl Into<QuestionId>,
        value: impl Into<String>,
        raw_kind_label: &str,
    ) {
        let question_id = question_id.into();
        let value = value.into();
        let kind = match self.survey.question(&question_id) {
            Some(question) => question.kind,
            // Unknown question: no authored choice list to fall back on.
            None => self.registry.canonicalize(raw_kind_label, false),
        };
        match kind.answer_field() {
            AnswerField::Selection if kind.is_multi_select() => {
                self.toggle_multi_selection(question_id, value);
            }
            AnswerField::Selection => {
                self.set_single_selection(question_id, value);
            }
            AnswerField::Text | AnswerField::File => {
                self.set_text(question_id, value);
            }
        }
    }

    /// Validate a question against its current answer (advisory).
    pub fn check(&self, question_id: &QuestionId) -> Option<ValidationOutcome> {
        let question = self.survey.question(question_id)?;
        Some(self.validator.check(question, self.store.get(question_id)))
    }

    /// Check that every question either passes validation or is hidden.
    ///
    /// A hidden question never blocks submission, whatever its required
    /// level. Returns the first blocking question, if any.
    pub fn first_blocking_question(&mut self) -> Option<QuestionId> {
        let questions: Vec<QuestionId> =
            self.survey.questions().iter().map(|q| q.id.clone()).collect();
        for question_id in questions {
            let visible = self
                .resolve(&question_id)
                .is_some_and(|resolution| resolution.visible);
            if !visible {
                continue;
            }
            if let Some(outcome) = self.check(&question_id) {
                if !outcome.ok() {
                    return Some(question_id);
                }
            }
        }
        None
    }

    /// Resolve a question's active scenario. Returns `None` for unknown ids.
    pub fn resolve(&mut self, question_id: &QuestionId) -> Option<Resolution> {
        self.evaluator.resolve(question_id, &self.store)
    }

    /// Resolve every question, in answering order.
    pub fn visibility(&mut self) -> Vec<(QuestionId, Resolution)> {
        let ids: Vec<QuestionId> = self.survey.questions().iter().map(|q| q.id.clone()).collect();
        ids.into_iter()
            .filter_map(|id| {
                let resolution = self.evaluator.resolve(&id, &self.store)?;
                Some((id, resolution))
            })
            .collect()
    }

    /// Annotate a question with its branching info for the authoring UI.
    pub fn describe(&mut self, question_id: &QuestionId) -> Option<ConditionInfo> {
        ConditionInfoProjector::new(&self.survey).describe(
            question_id,
            &mut self.evaluator,
            &self.store,
        )
    }

    /// Produce the payload for the persistence layer: one record per
    /// answered question, in answering order. Answers to questions that no
    /// longer exist in the survey are dropped.
    pub fn payload(&self) -> Vec<Answer> {
        self.survey
            .questions()
            .iter()
            .filter_map(|question| {
                let value = self.store.get(&question.id)?;
                Some(Answer::new(question.id.clone(), value.clone()))
            })
            .collect()
    }

    /// Look up a question definition.
    pub fn question(&self, question_id: &QuestionId) -> Option<&Question> {
        self.survey.question(question_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveyflow_types::{
        Choice, Condition, ConditionOperator, QuestionKind, RequiredLevel, ScenarioId,
    };

    fn student_survey() -> SurveyDefinition {
        SurveyDefinition::new(vec![
            Question::new("q1", QuestionKind::SingleChoice, "Are you a student?", "main")
                .with_choices(vec![Choice::new("yes", "Yes"), Choice::new("no", "No")]),
            Question::new("q2", QuestionKind::ShortText, "Which school?", ScenarioId::skip())
                .with_conditions(vec![Condition::new(
                    "q1",
                    ConditionOperator::Equals("yes".into()),
                    "show_student_questions",
                )])
                .with_required(RequiredLevel::Required),
        ])
    }

    #[test]
    fn mutation_reevaluates_inline() {
        let mut session = ResponseSession::new(student_survey());
        assert!(!session.resolve(&"q2".into()).unwrap().visible);

        session.set_single_selection("q1", "yes");
        // No tick in between: the next read already sees the new scenario.
        let resolution = session.resolve(&"q2".into()).unwrap();
        assert_eq!(resolution.scenario_id.as_str(), "show_student_questions");
    }

    #[test]
    fn hidden_required_question_does_not_block() {
        let mut session = ResponseSession::new(student_survey());
        // q2 is required but hidden while q1 is unanswered; only q1 remains
        // and it is optional.
        assert_eq!(session.first_blocking_question(), None);

        session.set_single_selection("q1", "yes");
        // Now q2 is visible, required, and empty.
        assert_eq!(session.first_blocking_question(), Some(QuestionId::new("q2")));

        session.set_text("q2", "Springfield High");
        assert_eq!(session.first_blocking_question(), None);
    }

    #[test]
    fn answer_event_routes_by_kind() {
        let survey = SurveyDefinition::new(vec![
            Question::new("single", QuestionKind::SingleChoice, "Pick one", "main")
                .with_choices(vec![Choice::new("a", "A"), Choice::new("b", "B")]),
            Question::new("multi", QuestionKind::MultiChoice, "Pick some", "main")
                .with_choices(vec![Choice::new("a", "A"), Choice::new("b", "B")]),
            Question::new("free", QuestionKind::ShortText, "Say anything", "main"),
        ]);
        let mut session = ResponseSession::new(survey);

        session.answer_event("single", "a", "trắc nghiệm");
        session.answer_event("single", "b", "trắc nghiệm");
        assert_eq!(
            session.answers().get(&"single".into()),
            Some(&AnswerValue::Choice("b".into()))
        );

        session.answer_event("multi", "a", "checkbox");
        session.answer_event("multi", "b", "checkbox");
        assert_eq!(
            session.answers().get(&"multi".into()),
            Some(&AnswerValue::Choices(vec!["a".into(), "b".into()]))
        );

        session.answer_event("free", "hello", "văn bản ngắn");
        assert_eq!(
            session.answers().get(&"free".into()),
            Some(&AnswerValue::Text("hello".into()))
        );
    }

    #[test]
    fn stale_kind_label_defers_to_survey_kind() {
        // The UI may still send the old label after a question's type
        // changed; the survey's canonical kind decides the answer shape.
        let survey = SurveyDefinition::new(vec![
            Question::new("q", QuestionKind::MultiChoice, "Pick some", "main")
                .with_choices(vec![Choice::new("a", "A")]),
        ]);
        let mut session = ResponseSession::new(survey);

        session.answer_event("q", "a", "trắc nghiệm"); // stale single-choice label
        assert_eq!(
            session.answers().get(&"q".into()),
            Some(&AnswerValue::Choices(vec!["a".into()]))
        );
    }

    #[test]
    fn payload_is_in_answering_order() {
        let mut session = ResponseSession::new(student_survey());
        session.set_text("q2", "Springfield High");
        session.set_single_selection("q1", "yes");

        let payload = session.payload();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].question_id, QuestionId::new("q1"));
        assert_eq!(payload[1].question_id, QuestionId::new("q2"));
    }

    #[test]
    fn clear_answer_reverts_branching() {
        let mut session = ResponseSession::new(student_survey());
        session.set_single_selection("q1", "yes");
        assert!(session.resolve(&"q2".into()).unwrap().visible);

        session.clear_answer(&"q1".into());
        assert!(!session.resolve(&"q2".into()).unwrap().visible);
    }

    #[test]
    fn visibility_lists_every_question_in_order() {
        let mut session = ResponseSession::new(student_survey());
        let visibility = session.visibility();

        assert_eq!(visibility.len(), 2);
        assert_eq!(visibility[0].0, QuestionId::new("q1"));
        assert!(visibility[0].1.visible);
        assert!(!visibility[1].1.visible);
    }
}
