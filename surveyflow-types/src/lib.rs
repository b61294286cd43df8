//! Core types for the surveyflow crate.
//!
//! This crate provides the foundational types for survey branching:
//! - `Question`, `QuestionKind`, `Choice` - Individual questions and their shapes
//! - `Answer` and `AnswerValue` - Collected response data
//! - `Condition` and `ScenarioId` - Branching rules and routing tokens
//! - `SurveyDefinition` - The ordered question list a session runs against

mod ids;
pub use ids::{ChoiceId, QuestionId, ScenarioId};

mod choice;
pub use choice::Choice;

mod required;
pub use required::RequiredLevel;

mod kind;
pub use kind::{AnswerField, QuestionKind, SelectionArity};

mod answer;
pub use answer::{Answer, AnswerValue, FileAnswer};

mod condition;
pub use condition::{Condition, ConditionOperator};

mod question;
pub use question::Question;

mod survey;
pub use survey::SurveyDefinition;

mod error;
pub use error::ConfigError;
