use std::fmt;

use serde::{Deserialize, Serialize};

/// The reserved scenario id meaning "do not show this question".
pub const SKIP_SCENARIO: &str = "skip";

/// Identifier of a question, unique and stable for the lifetime of a survey.
///
/// Conditions reference questions by this id, so it must never change while
/// a response session is running.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a new question id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Identifier of a choice, unique within its question.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(String);

impl ChoiceId {
    /// Create a new choice id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChoiceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ChoiceId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A routing token selected by condition resolution.
///
/// A scenario is not a UI screen - it only names the branch a question's
/// conditions resolved to. The reserved [`SKIP_SCENARIO`] id hides the
/// question instead of routing anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Create a new scenario id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved scenario meaning "do not show".
    pub fn skip() -> Self {
        Self::new(SKIP_SCENARIO)
    }

    /// Check whether this is the reserved skip scenario.
    pub fn is_skip(&self) -> bool {
        self.0 == SKIP_SCENARIO
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScenarioId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ScenarioId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_is_reserved() {
        assert!(ScenarioId::skip().is_skip());
        assert!(ScenarioId::new("skip").is_skip());
        assert!(!ScenarioId::new("show_student_questions").is_skip());
    }

    #[test]
    fn display() {
        let id = QuestionId::new("q1");
        assert_eq!(format!("{id}"), "q1");
    }

    #[test]
    fn from_str() {
        let id: ChoiceId = "yes".into();
        assert_eq!(id.as_str(), "yes");
    }
}
