use crate::{Question, QuestionId};

/// The ordered question list a response session runs against.
///
/// Declared order is answering order: a question's conditions may only
/// reference questions at earlier positions.
#[derive(Clone, Debug, Default)]
pub struct SurveyDefinition {
    /// All questions, in answering order.
    pub questions: Vec<Question>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Create an empty survey definition.
    pub fn empty() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Get the questions in answering order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// The position of a question in the answering order.
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| &q.id == id)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuestionKind, ScenarioId};

    fn survey() -> SurveyDefinition {
        SurveyDefinition::new(vec![
            Question::new("q1", QuestionKind::ShortText, "Name?", ScenarioId::new("main")),
            Question::new("q2", QuestionKind::ShortText, "Email?", ScenarioId::new("main")),
        ])
    }

    #[test]
    fn lookup_and_position() {
        let survey = survey();
        assert_eq!(survey.position(&"q2".into()), Some(1));
        assert!(survey.question(&"q1".into()).is_some());
        assert!(survey.question(&"missing".into()).is_none());
    }
}
