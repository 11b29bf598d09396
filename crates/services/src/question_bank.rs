use serde::Deserialize;
use std::collections::BTreeSet;

use hub_core::model::{AnswerKey, Choice, ChoiceLabel, ImageRef, Question, QuestionId};

use crate::error::QuestionBankError;

const BUNDLED_DATASET: &str = include_str!("data/questions.json");

/// The bundled driving-theory dataset, parsed and validated once at startup.
///
/// Questions keep dataset order, which is the order study mode walks them in.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Loads the dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError` when the dataset is malformed or violates
    /// a question invariant. Either is fatal at startup; the quiz never runs
    /// over a partial bank.
    pub fn load_bundled() -> Result<Self, QuestionBankError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Parses a dataset from raw JSON.
    ///
    /// # Errors
    ///
    /// Same conditions as [`QuestionBank::load_bundled`].
    pub fn from_json(raw: &str) -> Result<Self, QuestionBankError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(raw)?;
        let mut questions = Vec::with_capacity(records.len());
        for record in records {
            questions.push(record.into_question()?);
        }
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One dataset entry as it sits in the JSON file.
///
/// `options` is an object keyed by choice label; `preserve_order` keeps the
/// file's insertion order. `answer` is a label, a list of labels, or null
/// where the source material had no usable key.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    id: u64,
    question: String,
    options: serde_json::Map<String, serde_json::Value>,
    answer: Option<AnswerField>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerField {
    One(String),
    Many(Vec<String>),
}

impl QuestionRecord {
    fn into_question(self) -> Result<Question, QuestionBankError> {
        let id = QuestionId::new(self.id);

        let mut choices = Vec::with_capacity(self.options.len());
        for (label, text) in self.options {
            let text = text
                .as_str()
                .ok_or_else(|| QuestionBankError::OptionNotText {
                    id,
                    label: label.clone(),
                })?
                .to_owned();
            let label =
                ChoiceLabel::new(label).map_err(|source| QuestionBankError::Invalid { id, source })?;
            choices.push(Choice { label, text });
        }

        let answer = match self.answer {
            None => AnswerKey::Unknown,
            Some(AnswerField::One(label)) => AnswerKey::Single(
                ChoiceLabel::new(label)
                    .map_err(|source| QuestionBankError::Invalid { id, source })?,
            ),
            Some(AnswerField::Many(labels)) => {
                let mut set = BTreeSet::new();
                for label in labels {
                    set.insert(
                        ChoiceLabel::new(label)
                            .map_err(|source| QuestionBankError::Invalid { id, source })?,
                    );
                }
                AnswerKey::Multiple(set)
            }
        };

        let image = self
            .image
            .map(ImageRef::parse)
            .transpose()
            .map_err(|source| QuestionBankError::Image { id, source })?;

        Question::new(id, self.question, choices, answer, image, self.explanation)
            .map_err(|source| QuestionBankError::Invalid { id, source })
    }
}
