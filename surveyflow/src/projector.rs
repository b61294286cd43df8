//! Read-only "why is this shown" annotation for the authoring UI.

use surveyflow_types::{QuestionId, ScenarioId, SurveyDefinition};

use crate::{AnswerStore, ConditionEvaluator};

/// Everything the authoring UI needs to annotate a question's branching.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionInfo {
    /// Whether the question has any branching rules at all.
    pub is_conditional: bool,

    /// The earlier questions whose answers can change this question's
    /// scenario, in rule order, deduplicated.
    pub triggering_question_ids: Vec<QuestionId>,

    /// The scenario the question currently resolves to.
    pub resolved_scenario_id: ScenarioId,
}

/// Projects evaluator output into [`ConditionInfo`] records.
///
/// Purely derived state: it reads the survey and the evaluator's
/// resolutions and never mutates answers or rules.
#[derive(Debug)]
pub struct ConditionInfoProjector<'a> {
    survey: &'a SurveyDefinition,
}

impl<'a> ConditionInfoProjector<'a> {
    /// Create a projector over a survey.
    pub fn new(survey: &'a SurveyDefinition) -> Self {
        Self { survey }
    }

    /// Describe a question's branching. Returns `None` for unknown ids.
    pub fn describe(
        &self,
        question_id: &QuestionId,
        evaluator: &mut ConditionEvaluator,
        store: &AnswerStore,
    ) -> Option<ConditionInfo> {
        let question = self.survey.question(question_id)?;
        let resolution = evaluator.resolve(question_id, store)?;

        let mut triggering_question_ids: Vec<QuestionId> = Vec::new();
        for condition in &question.conditions {
            if !triggering_question_ids.contains(&condition.source_question_id) {
                triggering_question_ids.push(condition.source_question_id.clone());
            }
        }

        Some(ConditionInfo {
            is_conditional: question.is_conditional(),
            triggering_question_ids,
            resolved_scenario_id: resolution.scenario_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveyflow_types::{Condition, ConditionOperator, Question, QuestionKind};

    #[test]
    fn describes_conditional_question() {
        let survey = SurveyDefinition::new(vec![
            Question::new("q1", QuestionKind::ShortText, "First", "main"),
            Question::new("q2", QuestionKind::ShortText, "Second", "main"),
            Question::new("q3", QuestionKind::ShortText, "Third", ScenarioId::skip())
                .with_conditions(vec![
                    Condition::new("q1", ConditionOperator::IsAnswered, "a"),
                    Condition::new("q2", ConditionOperator::IsAnswered, "b"),
                    Condition::new("q1", ConditionOperator::IsEmpty, "c"),
                ]),
        ]);
        let mut evaluator = ConditionEvaluator::new(&survey);
        let store = AnswerStore::new();
        let projector = ConditionInfoProjector::new(&survey);

        let info = projector
            .describe(&"q3".into(), &mut evaluator, &store)
            .unwrap();
        assert!(info.is_conditional);
        // Sources in rule order, deduplicated.
        assert_eq!(
            info.triggering_question_ids,
            vec![QuestionId::new("q1"), QuestionId::new("q2")]
        );
        // Nothing answered: the IsEmpty rule on q1 is the first match.
        assert_eq!(info.resolved_scenario_id.as_str(), "c");
    }

    #[test]
    fn describes_plain_question() {
        let survey = SurveyDefinition::new(vec![Question::new(
            "q1",
            QuestionKind::ShortText,
            "First",
            "main",
        )]);
        let mut evaluator = ConditionEvaluator::new(&survey);
        let projector = ConditionInfoProjector::new(&survey);

        let info = projector
            .describe(&"q1".into(), &mut evaluator, &AnswerStore::new())
            .unwrap();
        assert!(!info.is_conditional);
        assert!(info.triggering_question_ids.is_empty());
        assert_eq!(info.resolved_scenario_id.as_str(), "main");
    }

    #[test]
    fn unknown_question_yields_none() {
        let survey = SurveyDefinition::empty();
        let mut evaluator = ConditionEvaluator::new(&survey);
        let projector = ConditionInfoProjector::new(&survey);

        assert!(
            projector
                .describe(&"ghost".into(), &mut evaluator, &AnswerStore::new())
                .is_none()
        );
    }
}
