//! Scenario resolution for conditional questions.

use std::collections::{HashMap, HashSet};

use surveyflow_types::{
    AnswerValue, Condition, ConditionOperator, ConfigError, QuestionId, ScenarioId,
    SurveyDefinition,
};

use crate::AnswerStore;

/// The resolved branching state of one question.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The scenario the question's conditions resolved to.
    pub scenario_id: ScenarioId,

    /// Whether the question is shown. False iff the scenario is the
    /// reserved skip scenario.
    pub visible: bool,
}

impl Resolution {
    fn from_scenario(scenario_id: ScenarioId) -> Self {
        let visible = !scenario_id.is_skip();
        Self {
            scenario_id,
            visible,
        }
    }
}

#[derive(Clone, Debug)]
struct QuestionRules {
    conditions: Vec<Condition>,
    default_scenario_id: ScenarioId,
}

/// Resolves each question's active scenario from its conditions and the
/// current answers.
///
/// Built once per response session from the immutable survey definition.
/// Construction derives the condition dependency graph and checks it:
/// a condition referencing an unknown or later question, or a dependency
/// cycle, is a survey-authoring defect. Branching is disabled for the
/// affected questions - they always resolve their default scenario - and
/// the defects are reported through [`ConditionEvaluator::config_errors`]
/// rather than raised.
///
/// Resolutions are memoized per question. [`ConditionEvaluator::invalidate`]
/// drops exactly the memo entries of the changed question's transitive
/// dependents, so a keystroke never forces re-evaluating the whole survey.
#[derive(Clone, Debug)]
pub struct ConditionEvaluator {
    rules: HashMap<QuestionId, QuestionRules>,
    dependents: HashMap<QuestionId, Vec<QuestionId>>,
    disabled: HashSet<QuestionId>,
    errors: Vec<ConfigError>,
    cache: HashMap<QuestionId, Resolution>,
}

impl ConditionEvaluator {
    /// Build an evaluator for a survey.
    pub fn new(survey: &SurveyDefinition) -> Self {
        let mut rules = HashMap::new();
        let mut dependents: HashMap<QuestionId, Vec<QuestionId>> = HashMap::new();
        let mut disabled = HashSet::new();
        let mut errors = Vec::new();

        for (position, question) in survey.questions().iter().enumerate() {
            let mut defective = false;
            for condition in &question.conditions {
                match survey.position(&condition.source_question_id) {
                    None => {
                        errors.push(ConfigError::UnknownSource {
                            question: question.id.clone(),
                            source: condition.source_question_id.clone(),
                        });
                        defective = true;
                    }
                    Some(source_position) if source_position >= position => {
                        errors.push(ConfigError::ForwardReference {
                            question: question.id.clone(),
                            source: condition.source_question_id.clone(),
                        });
                        defective = true;
                    }
                    Some(_) => {}
                }
            }
            if defective {
                disabled.insert(question.id.clone());
            }
            rules.insert(
                question.id.clone(),
                QuestionRules {
                    conditions: question.conditions.clone(),
                    default_scenario_id: question.default_scenario_id.clone(),
                },
            );
        }

        for question in survey.questions() {
            if disabled.contains(&question.id) {
                continue;
            }
            for condition in &question.conditions {
                dependents
                    .entry(condition.source_question_id.clone())
                    .or_default()
                    .push(question.id.clone());
            }
        }

        let mut evaluator = Self {
            rules,
            dependents,
            disabled,
            errors,
            cache: HashMap::new(),
        };
        evaluator.disable_cycles(survey);
        evaluator
    }

    /// Detect dependency cycles and disable branching for every question on
    /// one. With only back-references this cannot trigger, but authoring
    /// tools can hand us surveys with duplicated ids or patched orderings.
    fn disable_cycles(&mut self, survey: &SurveyDefinition) {
        let mut visiting: HashSet<QuestionId> = HashSet::new();
        let mut done: HashSet<QuestionId> = HashSet::new();
        let mut path: Vec<QuestionId> = Vec::new();
        for question in survey.questions() {
            self.visit(&question.id, &mut visiting, &mut done, &mut path);
        }
    }

    fn visit(
        &mut self,
        current: &QuestionId,
        visiting: &mut HashSet<QuestionId>,
        done: &mut HashSet<QuestionId>,
        path: &mut Vec<QuestionId>,
    ) {
        if done.contains(current) {
            return;
        }
        if visiting.contains(current) {
            let cycle_start = path.iter().position(|id| id == current).unwrap_or(0);
            for id in path[cycle_start..].to_vec() {
                if self.disabled.insert(id.clone()) {
                    self.errors.push(ConfigError::DependencyCycle { question: id });
                }
            }
            return;
        }

        visiting.insert(current.clone());
        path.push(current.clone());
        // Defective questions already fall back to their default scenario;
        // their conditions never fire, so their edges are not walked.
        let sources: Vec<QuestionId> = if self.disabled.contains(current) {
            Vec::new()
        } else {
            self.rules
                .get(current)
                .map(|rules| {
                    rules
                        .conditions
                        .iter()
                        .map(|c| c.source_question_id.clone())
                        .collect()
                })
                .unwrap_or_default()
        };
        for source in &sources {
            self.visit(source, visiting, done, path);
        }
        path.pop();
        visiting.remove(current);
        done.insert(current.clone());
    }

    /// Authoring defects detected at construction.
    pub fn config_errors(&self) -> &[ConfigError] {
        &self.errors
    }

    /// Check whether a question's branching was disabled by a defect.
    pub fn branching_disabled(&self, question_id: &QuestionId) -> bool {
        self.disabled.contains(question_id)
    }

    /// Resolve a question's active scenario against the current answers.
    ///
    /// Conditions are tried in declared order; the first match selects its
    /// target scenario, otherwise the default applies. Total over partially
    /// answered surveys: an operator applied to a missing answer or to an
    /// answer of the wrong shape simply does not match. Returns `None` only
    /// for unknown question ids.
    pub fn resolve(
        &mut self,
        question_id: &QuestionId,
        store: &AnswerStore,
    ) -> Option<Resolution> {
        if let Some(cached) = self.cache.get(question_id) {
            tracing::trace!(question = %question_id, "scenario resolution cache hit");
            return Some(cached.clone());
        }

        let rules = self.rules.get(question_id)?;
        let mut scenario = rules.default_scenario_id.clone();
        if !self.disabled.contains(question_id) {
            for condition in &rules.conditions {
                let answer = store.get(&condition.source_question_id);
                if condition_matches(&condition.operator, answer) {
                    scenario = condition.target_scenario_id.clone();
                    break;
                }
            }
        }

        let resolution = Resolution::from_scenario(scenario);
        tracing::debug!(
            question = %question_id,
            scenario = %resolution.scenario_id,
            visible = resolution.visible,
            "resolved scenario"
        );
        self.cache.insert(question_id.clone(), resolution.clone());
        Some(resolution)
    }

    /// Drop memoized resolutions for every question that transitively
    /// depends on the changed question's answer.
    pub fn invalidate(&mut self, changed: &QuestionId) {
        let mut queue: Vec<&QuestionId> = match self.dependents.get(changed) {
            Some(direct) => direct.iter().collect(),
            None => return,
        };
        let mut seen: HashSet<&QuestionId> = HashSet::new();
        let mut dropped = 0usize;
        while let Some(id) = queue.pop() {
            if !seen.insert(id) {
                continue;
            }
            if self.cache.remove(id).is_some() {
                dropped += 1;
            }
            if let Some(next) = self.dependents.get(id) {
                queue.extend(next.iter());
            }
        }
        tracing::debug!(changed = %changed, dropped, "invalidated dependent resolutions");
    }

    #[cfg(test)]
    fn is_cached(&self, question_id: &QuestionId) -> bool {
        self.cache.contains_key(question_id)
    }
}

/// Evaluate one operator against the source question's current answer.
///
/// Shape mismatches (e.g. `Includes` against a scalar selection) evaluate
/// to "does not match" instead of raising, which keeps evaluation total
/// over partially answered surveys.
fn condition_matches(operator: &ConditionOperator, answer: Option<&AnswerValue>) -> bool {
    match operator {
        ConditionOperator::Equals(comparand) => match answer {
            Some(AnswerValue::Text(text)) => text == comparand,
            Some(AnswerValue::Choice(id)) => id.as_str() == comparand,
            _ => false,
        },
        ConditionOperator::NotEquals(comparand) => match answer {
            Some(AnswerValue::Text(text)) => text != comparand,
            Some(AnswerValue::Choice(id)) => id.as_str() != comparand,
            _ => false,
        },
        ConditionOperator::Includes(comparand) => match answer {
            Some(AnswerValue::Choices(ids)) => ids.iter().any(|id| id.as_str() == comparand),
            _ => false,
        },
        ConditionOperator::IsEmpty => answer.is_none_or(AnswerValue::is_empty),
        ConditionOperator::IsAnswered => answer.is_some_and(|value| !value.is_empty()),
    }
}
