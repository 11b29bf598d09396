use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::image::ImageRef;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question must offer at least one choice")]
    NoChoices,

    #[error("choice label cannot be empty")]
    EmptyChoiceLabel,

    #[error("choice text cannot be empty")]
    EmptyChoiceText,

    #[error("duplicate choice label: {0}")]
    DuplicateLabel(ChoiceLabel),

    #[error("answer references a label that is not offered: {0}")]
    AnswerNotOffered(ChoiceLabel),

    #[error("multiple-answer key cannot be empty")]
    EmptyAnswerSet,
}

//
// ─── CHOICES ───────────────────────────────────────────────────────────────────
//

/// Short key identifying one choice within a question ("a", "b", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceLabel(String);

impl ChoiceLabel {
    /// Creates a label, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyChoiceLabel` for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, QuestionError> {
        let s = raw.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::EmptyChoiceLabel);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable option. Display order follows the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: ChoiceLabel,
    pub text: String,
}

//
// ─── ANSWER KEY ────────────────────────────────────────────────────────────────
//

/// The expected response for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    /// Exactly one choice is correct.
    Single(ChoiceLabel),
    /// A set of choices must all be picked, and nothing else.
    Multiple(BTreeSet<ChoiceLabel>),
    /// The source dataset carried no usable key; never matches anything.
    Unknown,
}

impl AnswerKey {
    /// True for keys that expect set-building (checkbox) input.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        matches!(self, AnswerKey::Multiple(_))
    }

    /// Labels that make up the key, in label order. Empty for `Unknown`.
    #[must_use]
    pub fn labels(&self) -> Vec<&ChoiceLabel> {
        match self {
            AnswerKey::Single(label) => vec![label],
            AnswerKey::Multiple(set) => set.iter().collect(),
            AnswerKey::Unknown => Vec::new(),
        }
    }

    #[must_use]
    pub fn contains(&self, label: &ChoiceLabel) -> bool {
        match self {
            AnswerKey::Single(expected) => expected == label,
            AnswerKey::Multiple(set) => set.contains(label),
            AnswerKey::Unknown => false,
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated quiz question.
///
/// Construction checks the structural invariants once, so the session engine
/// can trust every key label to resolve to an offered choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    choices: Vec<Choice>,
    answer: AnswerKey,
    image: Option<ImageRef>,
    explanation: Option<String>,
}

impl Question {
    /// Creates a new Question.
    ///
    /// # Errors
    ///
    /// Returns a `QuestionError` when the text is blank, no choices are
    /// offered, labels repeat, or the answer key names a label that is not
    /// among the choices.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        choices: Vec<Choice>,
        answer: AnswerKey,
        image: Option<ImageRef>,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if choices.is_empty() {
            return Err(QuestionError::NoChoices);
        }

        let mut seen: BTreeSet<&ChoiceLabel> = BTreeSet::new();
        for choice in &choices {
            if choice.text.trim().is_empty() {
                return Err(QuestionError::EmptyChoiceText);
            }
            if !seen.insert(&choice.label) {
                return Err(QuestionError::DuplicateLabel(choice.label.clone()));
            }
        }

        match &answer {
            AnswerKey::Single(label) => {
                if !seen.contains(label) {
                    return Err(QuestionError::AnswerNotOffered(label.clone()));
                }
            }
            AnswerKey::Multiple(set) => {
                if set.is_empty() {
                    return Err(QuestionError::EmptyAnswerSet);
                }
                for label in set {
                    if !seen.contains(label) {
                        return Err(QuestionError::AnswerNotOffered(label.clone()));
                    }
                }
            }
            AnswerKey::Unknown => {}
        }

        let explanation = explanation
            .map(|e| e.trim().to_owned())
            .filter(|e| !e.is_empty());

        Ok(Self {
            id,
            text: text.trim().to_owned(),
            choices,
            answer,
            image,
            explanation,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn answer(&self) -> &AnswerKey {
        &self.answer
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Delegates to the key; true when this question takes checkbox input.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.answer.is_multiple()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
