use crate::QuestionId;

/// A survey-authoring defect detected when branching is registered.
///
/// These are configuration problems, not runtime answer problems. A question
/// with a configuration error has its branching disabled and always resolves
/// its default scenario; the error is reported to the authoring UI instead
/// of being raised during a response session.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A condition references a question id that does not exist.
    UnknownSource {
        question: QuestionId,
        source: QuestionId,
    },

    /// A condition references a question that comes later in the declared
    /// order. Conditions may only look backwards.
    ForwardReference {
        question: QuestionId,
        source: QuestionId,
    },

    /// The condition dependency graph contains a cycle through this question.
    DependencyCycle { question: QuestionId },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownSource { question, source } => write!(
                f,
                "question '{question}' has a condition on unknown question '{source}'"
            ),
            ConfigError::ForwardReference { question, source } => write!(
                f,
                "question '{question}' has a condition on later question '{source}'"
            ),
            ConfigError::DependencyCycle { question } => {
                write!(f, "condition dependency cycle through question '{question}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
