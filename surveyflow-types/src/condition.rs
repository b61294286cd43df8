use serde::{Deserialize, Serialize};

use crate::{QuestionId, ScenarioId};

/// A comparison applied to the source question's current answer.
///
/// This is the minimum operator set; it is closed so evaluation stays
/// exhaustive, and extending it is a source-level change. Comparands are
/// carried in the variant and compared against the answer's text or its
/// choice ids, whichever shape the answer holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConditionOperator {
    /// Matches a text answer or a scalar selection equal to the comparand.
    Equals(String),

    /// Matches a text answer or a scalar selection different from the
    /// comparand. An unanswered source never matches.
    NotEquals(String),

    /// Matches a multi-selection containing the comparand choice id.
    Includes(String),

    /// Matches a missing or empty answer.
    IsEmpty,

    /// Matches any non-empty answer.
    IsAnswered,
}

/// One branching rule of a question.
///
/// Rules are evaluated in declared order against the current answer store;
/// the first rule that matches selects its target scenario. Rules may only
/// reference questions that come earlier in the survey's declared order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// The earlier question whose answer this rule inspects.
    pub source_question_id: QuestionId,

    /// The comparison to apply.
    pub operator: ConditionOperator,

    /// The scenario selected when this rule matches.
    pub target_scenario_id: ScenarioId,
}

impl Condition {
    /// Create a new condition.
    pub fn new(
        source_question_id: impl Into<QuestionId>,
        operator: ConditionOperator,
        target_scenario_id: impl Into<ScenarioId>,
    ) -> Self {
        Self {
            source_question_id: source_question_id.into(),
            operator,
            target_scenario_id: target_scenario_id.into(),
        }
    }
}
