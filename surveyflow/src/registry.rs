//! Canonicalization of raw question type labels.
//!
//! The authoring data carries question types as free-form, possibly
//! localized strings ("short_text", "văn bản ngắn", "Checkbox", ...).
//! `TypeRegistry` normalizes them to the closed [`QuestionKind`] set in one
//! table-driven step, so that everything downstream dispatches on the
//! canonical kind instead of re-matching strings.

use std::collections::HashMap;

use surveyflow_types::QuestionKind;

/// The validation rule families the validator chains for a kind, in
/// application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Required-tristate check.
    Required,

    /// Maximum text length check.
    Length,

    /// Finite-number parse and upper-bound check.
    Numeric,

    /// File extension and size checks.
    FileConstraints,
}

/// The default validation chain for a question kind, in application order.
///
/// The numeric rule is also chained for text kinds because any text
/// question can carry the numeric-only flag.
pub fn validation_chain(kind: QuestionKind) -> &'static [RuleKind] {
    use RuleKind::*;
    match kind {
        QuestionKind::Number | QuestionKind::Rating(_) => &[Required, Numeric],
        QuestionKind::File => &[Required, FileConstraints],
        kind if kind.is_text() => &[Required, Length, Numeric],
        // Selection kinds: only emptiness can be wrong.
        _ => &[Required],
    }
}

/// Registry of raw type label synonyms.
///
/// Matching is case-insensitive and trimmed, but exact - no fuzzy or
/// partial matching. An unmatched label degrades to a fallback kind chosen
/// by whether the question has choices; that is a deliberate, observable
/// policy, not an error path.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    synonyms: HashMap<String, QuestionKind>,
}

impl TypeRegistry {
    /// Create a registry with no synonyms registered. Every label falls
    /// back. Prefer [`TypeRegistry::default`].
    pub fn empty() -> Self {
        Self {
            synonyms: HashMap::new(),
        }
    }

    /// Register an additional synonym for a kind.
    pub fn register_synonym(&mut self, label: impl AsRef<str>, kind: QuestionKind) {
        self.synonyms.insert(normalize(label.as_ref()), kind);
    }

    /// Canonicalize a raw type label.
    ///
    /// `has_choices` selects the fallback for unmatched labels: a question
    /// with choices becomes [`QuestionKind::SingleChoice`], one without
    /// becomes the default short free-text answer.
    pub fn canonicalize(&self, raw: &str, has_choices: bool) -> QuestionKind {
        if let Some(kind) = self.synonyms.get(&normalize(raw)) {
            return *kind;
        }
        if has_choices {
            QuestionKind::SingleChoice
        } else {
            QuestionKind::ShortText
        }
    }

    /// Check whether a label is registered (after normalization).
    pub fn knows(&self, raw: &str) -> bool {
        self.synonyms.contains_key(&normalize(raw))
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        let entries: &[(&str, QuestionKind)] = &[
            // Free text
            ("text", QuestionKind::ShortText),
            ("short_text", QuestionKind::ShortText),
            ("short text", QuestionKind::ShortText),
            ("văn bản ngắn", QuestionKind::ShortText),
            ("câu trả lời ngắn", QuestionKind::ShortText),
            ("textarea", QuestionKind::LongText),
            ("long_text", QuestionKind::LongText),
            ("long text", QuestionKind::LongText),
            ("paragraph", QuestionKind::LongText),
            ("văn bản dài", QuestionKind::LongText),
            ("đoạn văn", QuestionKind::LongText),
            // Selections
            ("radio", QuestionKind::SingleChoice),
            ("single_choice", QuestionKind::SingleChoice),
            ("single choice", QuestionKind::SingleChoice),
            ("trắc nghiệm", QuestionKind::SingleChoice),
            ("một lựa chọn", QuestionKind::SingleChoice),
            ("single_choice_image", QuestionKind::SingleChoiceImage),
            ("image_choice", QuestionKind::SingleChoiceImage),
            ("trắc nghiệm hình ảnh", QuestionKind::SingleChoiceImage),
            ("checkbox", QuestionKind::MultiChoice),
            ("multi_choice", QuestionKind::MultiChoice),
            ("multiple_answers", QuestionKind::MultiChoice),
            ("nhiều lựa chọn", QuestionKind::MultiChoice),
            ("hộp kiểm", QuestionKind::MultiChoice),
            ("multi_choice_image", QuestionKind::MultiChoiceImage),
            ("checkbox_image", QuestionKind::MultiChoiceImage),
            ("nhiều lựa chọn hình ảnh", QuestionKind::MultiChoiceImage),
            // Scales
            ("rating", QuestionKind::Rating(5)),
            ("stars", QuestionKind::Rating(5)),
            ("đánh giá", QuestionKind::Rating(5)),
            ("xếp hạng", QuestionKind::Rating(5)),
            ("rating_10", QuestionKind::Rating(10)),
            ("nps", QuestionKind::Rating(10)),
            ("matrix", QuestionKind::Matrix),
            ("grid", QuestionKind::Matrix),
            ("ma trận", QuestionKind::Matrix),
            // Typed text
            ("number", QuestionKind::Number),
            ("numeric", QuestionKind::Number),
            ("số", QuestionKind::Number),
            ("email", QuestionKind::Email),
            ("e-mail", QuestionKind::Email),
            ("thư điện tử", QuestionKind::Email),
            ("phone", QuestionKind::Phone),
            ("tel", QuestionKind::Phone),
            ("điện thoại", QuestionKind::Phone),
            ("số điện thoại", QuestionKind::Phone),
            ("url", QuestionKind::Url),
            ("link", QuestionKind::Url),
            ("website", QuestionKind::Url),
            ("liên kết", QuestionKind::Url),
            ("date", QuestionKind::Date),
            ("ngày", QuestionKind::Date),
            ("ngày tháng", QuestionKind::Date),
            ("time", QuestionKind::Time),
            ("giờ", QuestionKind::Time),
            ("thời gian", QuestionKind::Time),
            ("datetime", QuestionKind::DateTime),
            ("date_time", QuestionKind::DateTime),
            ("ngày giờ", QuestionKind::DateTime),
            // Uploads
            ("file", QuestionKind::File),
            ("upload", QuestionKind::File),
            ("tệp", QuestionKind::File),
            ("tập tin", QuestionKind::File),
            ("tải tệp", QuestionKind::File),
        ];
        for (label, kind) in entries {
            registry.register_synonym(label, *kind);
        }
        registry
    }
}
