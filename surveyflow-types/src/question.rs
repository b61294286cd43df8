use serde::{Deserialize, Serialize};

use crate::{Choice, Condition, QuestionId, QuestionKind, RequiredLevel, ScenarioId};

/// A single question in a survey.
///
/// Questions are authored by the survey editor and are immutable inputs to
/// the engine for the lifetime of a response session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique, stable identifier. Conditions reference it.
    pub id: QuestionId,

    /// The canonical answer shape of this question.
    pub kind: QuestionKind,

    /// The prompt shown to the respondent.
    pub label: String,

    /// Optional helper text shown under the prompt.
    pub help_text: Option<String>,

    /// Selectable choices. Non-empty for any selection-shaped kind.
    pub choices: Vec<Choice>,

    /// How strictly an answer is demanded.
    pub required: RequiredLevel,

    /// Maximum text length, reinterpreted as an inclusive numeric upper
    /// bound for numeric kinds.
    pub max_length: Option<u32>,

    /// Restrict text input to numbers even for non-`Number` kinds.
    pub numeric_only: bool,

    /// Accepted file extensions (lowercased, without the dot), for the
    /// file kind. `None` accepts anything.
    pub allowed_file_types: Option<Vec<String>>,

    /// Maximum accepted file size in kilobytes, for the file kind.
    pub max_file_size_kb: Option<u64>,

    /// Branching rules, evaluated in order; first match wins.
    pub conditions: Vec<Condition>,

    /// The scenario used when no condition matches.
    pub default_scenario_id: ScenarioId,
}

impl Question {
    /// Create a new question with no choices, no constraints and no
    /// branching. The default scenario is the question's own visible branch.
    pub fn new(
        id: impl Into<QuestionId>,
        kind: QuestionKind,
        label: impl Into<String>,
        default_scenario_id: impl Into<ScenarioId>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            help_text: None,
            choices: Vec::new(),
            required: RequiredLevel::default(),
            max_length: None,
            numeric_only: false,
            allowed_file_types: None,
            max_file_size_kb: None,
            conditions: Vec::new(),
            default_scenario_id: default_scenario_id.into(),
        }
    }

    /// Set the helper text.
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Set the selectable choices.
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    /// Set the required level.
    pub fn with_required(mut self, required: RequiredLevel) -> Self {
        self.required = required;
        self
    }

    /// Set the maximum length (or numeric upper bound, for numeric kinds).
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Restrict text input to numbers.
    pub fn with_numeric_only(mut self) -> Self {
        self.numeric_only = true;
        self
    }

    /// Set the accepted file extensions.
    pub fn with_allowed_file_types(mut self, types: Vec<String>) -> Self {
        self.allowed_file_types = Some(types);
        self
    }

    /// Set the maximum file size in kilobytes.
    pub fn with_max_file_size_kb(mut self, size_kb: u64) -> Self {
        self.max_file_size_kb = Some(size_kb);
        self
    }

    /// Set the branching rules.
    pub fn with_conditions(mut self, conditions: Vec<Condition>) -> Self {
        self.conditions = conditions;
        self
    }

    /// Check whether this question has any branching rules.
    pub fn is_conditional(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Look up a choice by id.
    pub fn choice(&self, id: &crate::ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| &c.id == id)
    }

    /// Check whether text answers must parse as numbers, either because of
    /// the kind or the explicit flag.
    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric() || self.numeric_only
    }
}
