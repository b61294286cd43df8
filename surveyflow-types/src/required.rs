use serde::{Deserialize, Serialize};

/// How strictly a question demands an answer.
///
/// The authoring UI exposes this as a tri-state toggle ("Bật" / "Soft" /
/// "Tắt"). `Soft` flags the question but never blocks submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequiredLevel {
    /// An empty answer blocks submission.
    Required,

    /// An empty answer is surfaced as a warning but does not block.
    Soft,

    /// An empty answer is always acceptable.
    #[default]
    Off,
}

impl RequiredLevel {
    /// Check whether an empty answer should block submission.
    pub fn is_blocking(self) -> bool {
        self == Self::Required
    }

    /// Check whether an empty answer should be surfaced at all.
    pub fn is_advisory(self) -> bool {
        matches!(self, Self::Required | Self::Soft)
    }
}
