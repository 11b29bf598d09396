use std::collections::{BTreeSet, HashMap};

use crate::model::ids::QuestionId;
use crate::model::question::{AnswerKey, ChoiceLabel, Question};

/// Correct answers required to pass the official exam.
pub const PASS_MARK: usize = 33;

//
// ─── MODE & RESPONSE ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    Study,
    Exam,
}

/// What the user has picked for one question so far.
///
/// Mirrors the key shape: radio questions hold one label, checkbox questions
/// hold a set built by toggling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Single(ChoiceLabel),
    Multiple(BTreeSet<ChoiceLabel>),
}

impl Response {
    #[must_use]
    pub fn contains(&self, label: &ChoiceLabel) -> bool {
        match self {
            Response::Single(picked) => picked == label,
            Response::Multiple(set) => set.contains(label),
        }
    }

    /// Whether this response satisfies the given key.
    ///
    /// Single keys need label equality; multiple keys need set equality.
    /// An `Unknown` key matches nothing.
    #[must_use]
    pub fn matches(&self, key: &AnswerKey) -> bool {
        match (key, self) {
            (AnswerKey::Single(expected), Response::Single(picked)) => expected == picked,
            (AnswerKey::Multiple(expected), Response::Multiple(picked)) => expected == picked,
            _ => false,
        }
    }
}

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// One pass over an active question set.
///
/// The cursor always points inside `questions`; responses are keyed by
/// question id so revisiting a question shows the earlier pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    mode: QuizMode,
    questions: Vec<Question>,
    cursor: usize,
    responses: HashMap<QuestionId, Response>,
}

impl QuizRound {
    #[must_use]
    pub fn new(mode: QuizMode, questions: Vec<Question>) -> Self {
        Self {
            mode,
            questions,
            cursor: 0,
            responses: HashMap::new(),
        }
    }

    // Accessors
    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.mode
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

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The question under the cursor, if the round has any.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn response(&self, id: QuestionId) -> Option<&Response> {
        self.responses.get(&id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// Records a pick for the given question.
    ///
    /// Radio questions overwrite the earlier pick; checkbox questions toggle
    /// set membership. A toggle that empties the set clears the response
    /// entirely. Ids outside the active set are ignored.
    pub fn select(&mut self, id: QuestionId, label: ChoiceLabel) {
        let Some(question) = self.questions.iter().find(|q| q.id() == id) else {
            return;
        };

        if question.is_multiple() {
            let entry = self
                .responses
                .entry(id)
                .or_insert_with(|| Response::Multiple(BTreeSet::new()));
            let Response::Multiple(set) = entry else {
                *entry = Response::Multiple(BTreeSet::from([label]));
                return;
            };
            if !set.remove(&label) {
                set.insert(label);
            }
            if set.is_empty() {
                self.responses.remove(&id);
            }
        } else {
            self.responses.insert(id, Response::Single(label));
        }
    }

    /// Correctly answered questions: stored response matches the key.
    #[must_use]
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| {
                self.responses
                    .get(&q.id())
                    .is_some_and(|r| r.matches(q.answer()))
            })
            .count()
    }

    fn advance(&mut self) {
        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
        }
    }

    fn retreat(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The quiz page's whole state. Only these three shapes exist, so a result
/// cannot coexist with an open round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizSession {
    #[default]
    Menu,
    InProgress(QuizRound),
    Finished { round: QuizRound, score: usize },
}

impl QuizSession {
    /// Starts a fresh round over the given active set.
    #[must_use]
    pub fn begin(mode: QuizMode, questions: Vec<Question>) -> Self {
        QuizSession::InProgress(QuizRound::new(mode, questions))
    }

    /// The live or finished round, if any.
    #[must_use]
    pub fn round(&self) -> Option<&QuizRound> {
        match self {
            QuizSession::Menu => None,
            QuizSession::InProgress(round) | QuizSession::Finished { round, .. } => Some(round),
        }
    }

    /// The final score, once finished.
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        match self {
            QuizSession::Finished { score, .. } => Some(*score),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, QuizSession::Finished { .. })
    }

    /// Records a pick. Outside `InProgress` this is a no-op.
    pub fn select(&mut self, id: QuestionId, label: ChoiceLabel) {
        if let QuizSession::InProgress(round) = self {
            round.select(id, label);
        }
    }

    /// Moves forward one question.
    ///
    /// At the last question of an open round this finishes the round and
    /// fixes the score; calling again once finished never rescores. In the
    /// finished state it pages forward through the reviewed questions.
    pub fn next(&mut self) {
        match std::mem::take(self) {
            QuizSession::Menu => {}
            QuizSession::InProgress(mut round) => {
                if round.is_last() {
                    let score = round.score();
                    *self = QuizSession::Finished { round, score };
                } else {
                    round.advance();
                    *self = QuizSession::InProgress(round);
                }
            }
            QuizSession::Finished { mut round, score } => {
                if !round.is_last() {
                    round.advance();
                }
                *self = QuizSession::Finished { round, score };
            }
        }
    }

    /// Moves back one question; a no-op at the first question and in `Menu`.
    pub fn previous(&mut self) {
        match self {
            QuizSession::Menu => {}
            QuizSession::InProgress(round) | QuizSession::Finished { round, .. } => {
                round.retreat();
            }
        }
    }

    /// Discards any round and returns to the menu.
    pub fn exit_to_menu(&mut self) {
        *self = QuizSession::Menu;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
