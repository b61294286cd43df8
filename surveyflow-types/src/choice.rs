use serde::{Deserialize, Serialize};

use crate::ChoiceId;

/// A selectable option of a single- or multi-choice question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier, unique within the owning question.
    pub id: ChoiceId,

    /// The text shown to the respondent.
    pub text: String,

    /// Optional image reference, for the image-choice kinds.
    pub image: Option<String>,
}

impl Choice {
    /// Create a new text choice.
    pub fn new(id: impl Into<ChoiceId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            image: None,
        }
    }

    /// Attach an image reference to this choice.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
