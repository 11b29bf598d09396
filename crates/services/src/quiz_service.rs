use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;
use tracing::info;

use hub_core::model::{QuizMode, QuizSession};

use crate::question_bank::QuestionBank;

/// Questions drawn for a simulated exam.
pub const EXAM_DRAW: usize = 35;

/// Builds quiz rounds over the loaded bank.
///
/// Randomness stays here; the session machine itself is deterministic.
#[derive(Clone)]
pub struct QuizService {
    bank: QuestionBank,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// A study round over the whole bank, in dataset order.
    #[must_use]
    pub fn start_study(&self) -> QuizSession {
        info!(questions = self.bank.len(), "study round started");
        QuizSession::begin(QuizMode::Study, self.bank.questions().to_vec())
    }

    /// An exam round over a random draw of distinct questions.
    ///
    /// Draws `EXAM_DRAW` questions, or the whole bank shuffled when the bank
    /// is smaller than that.
    #[must_use]
    pub fn start_exam(&self) -> QuizSession {
        let mut rng = rng();
        self.start_exam_with_rng(&mut rng)
    }

    /// Exam draw with a caller-supplied source of randomness.
    pub fn start_exam_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> QuizSession {
        let mut drawn = self.bank.questions().to_vec();
        drawn.shuffle(rng);
        drawn.truncate(EXAM_DRAW);
        info!(questions = drawn.len(), "exam round started");
        QuizSession::begin(QuizMode::Exam, drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::model::QuestionId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn tiny_bank(n: u64) -> QuestionBank {
        let entries: Vec<String> = (1..=n)
            .map(|id| {
                format!(
                    r#"{{"id": {id}, "question": "q {id}", "options": {{"a": "yes", "b": "no"}}, "answer": "a"}}"#
                )
            })
            .collect();
        QuestionBank::from_json(&format!("[{}]", entries.join(","))).unwrap()
    }

    #[test]
    fn study_round_uses_the_bank_in_order() {
        let service = QuizService::new(tiny_bank(10));
        let session = service.start_study();
        let round = session.round().unwrap();

        assert_eq!(round.mode(), QuizMode::Study);
        let ids: Vec<u64> = round.questions().iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn exam_draw_is_capped_and_distinct() {
        let service = QuizService::new(tiny_bank(40));
        let mut rng = StdRng::seed_from_u64(7);
        let session = service.start_exam_with_rng(&mut rng);
        let round = session.round().unwrap();

        assert_eq!(round.mode(), QuizMode::Exam);
        assert_eq!(round.len(), EXAM_DRAW);
        let ids: BTreeSet<QuestionId> = round.questions().iter().map(|q| q.id()).collect();
        assert_eq!(ids.len(), EXAM_DRAW);
    }

    #[test]
    fn small_bank_degrades_to_all_questions_shuffled() {
        let service = QuizService::new(tiny_bank(10));
        let mut rng = StdRng::seed_from_u64(7);
        let session = service.start_exam_with_rng(&mut rng);
        let round = session.round().unwrap();

        assert_eq!(round.len(), 10);
        let ids: BTreeSet<QuestionId> = round.questions().iter().map(|q| q.id()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let service = QuizService::new(tiny_bank(40));

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = service.start_exam_with_rng(&mut a);
        let second = service.start_exam_with_rng(&mut b);

        let ids = |s: &QuizSession| -> Vec<u64> {
            s.round()
                .unwrap()
                .questions()
                .iter()
                .map(|q| q.id().value())
                .collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }
}
