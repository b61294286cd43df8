//! # surveyflow
//!
//! Question model and conditional-branching engine for surveys.
//! Presentation-agnostic.
//!
//! This crate normalizes heterogeneous, possibly localized question type
//! labels into a canonical [`QuestionKind`] set, stores and validates
//! answers per kind, and evaluates per-question branching conditions
//! against the collected answers to decide which scenario each question
//! resolves to.
//!
//! ## Usage
//!
//! ```rust
//! use surveyflow::{
//!     Choice, Condition, ConditionOperator, Question, QuestionKind,
//!     ResponseSession, ScenarioId, SurveyDefinition,
//! };
//!
//! let survey = SurveyDefinition::new(vec![
//!     Question::new("q1", QuestionKind::SingleChoice, "Are you a student?", "main")
//!         .with_choices(vec![Choice::new("yes", "Yes"), Choice::new("no", "No")]),
//!     Question::new("q2", QuestionKind::ShortText, "Which school?", ScenarioId::skip())
//!         .with_conditions(vec![Condition::new(
//!             "q1",
//!             ConditionOperator::Equals("yes".into()),
//!             "show_student_questions",
//!         )]),
//! ]);
//!
//! let mut session = ResponseSession::new(survey);
//! assert!(!session.resolve(&"q2".into()).unwrap().visible);
//!
//! session.set_single_selection("q1", "yes");
//! let resolution = session.resolve(&"q2".into()).unwrap();
//! assert!(resolution.visible);
//! assert_eq!(resolution.scenario_id.as_str(), "show_student_questions");
//! ```
//!
//! The engine is single-threaded and synchronous: every mutation runs to
//! completion, including the scoped re-evaluation of dependent questions,
//! before control returns to the caller.

// Re-export all types from surveyflow-types
pub use surveyflow_types::*;

mod registry;
pub use registry::{RuleKind, TypeRegistry, validation_chain};

mod store;
pub use store::AnswerStore;

mod validator;
pub use validator::{ValidationFailure, ValidationOutcome, Validator};

mod evaluator;
pub use evaluator::{ConditionEvaluator, Resolution};

mod projector;
pub use projector::{ConditionInfo, ConditionInfoProjector};

mod session;
pub use session::ResponseSession;
