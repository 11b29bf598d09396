use hub_core::model::{ChoiceLabel, PASS_MARK, Question, QuestionId, QuizMode, QuizRound};

/// A user gesture on the quiz page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    StartStudy,
    StartExam,
    Select(QuestionId, ChoiceLabel),
    Next,
    Previous,
    ExitToMenu,
}

/// How one option row is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Plain,
    Selected,
    Correct,
    Incorrect,
}

impl OptionTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionTone::Plain => "option",
            OptionTone::Selected => "option option--selected",
            OptionTone::Correct => "option option--correct",
            OptionTone::Incorrect => "option option--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRowVm {
    pub label: ChoiceLabel,
    pub key_str: String,
    pub text: String,
    pub tone: OptionTone,
}

/// Rows for the question under the cursor.
///
/// While the round is open a row is plain or selected. Once finished, key
/// labels paint correct and wrong picks paint incorrect; the stored picks
/// themselves no longer change.
#[must_use]
pub fn map_option_rows(round: &QuizRound, question: &Question, finished: bool) -> Vec<OptionRowVm> {
    let response = round.response(question.id());
    question
        .choices()
        .iter()
        .map(|choice| {
            let selected = response.is_some_and(|r| r.contains(&choice.label));
            let tone = if finished {
                if question.answer().contains(&choice.label) {
                    OptionTone::Correct
                } else if selected {
                    OptionTone::Incorrect
                } else {
                    OptionTone::Plain
                }
            } else if selected {
                OptionTone::Selected
            } else {
                OptionTone::Plain
            };
            OptionRowVm {
                label: choice.label.clone(),
                key_str: format!("{})", choice.label),
                text: choice.text.clone(),
                tone,
            }
        })
        .collect()
}

#[must_use]
pub fn progress_label(round: &QuizRound) -> String {
    format!("Question {} / {}", round.cursor() + 1, round.len())
}

#[must_use]
pub fn mode_label(mode: QuizMode) -> &'static str {
    match mode {
        QuizMode::Study => "Study Mode",
        QuizMode::Exam => "Exam Mode",
    }
}

#[must_use]
pub fn verdict_label(score: usize) -> String {
    if score >= PASS_MARK {
        "PASSED".to_owned()
    } else {
        format!("FAILED (Needs {PASS_MARK})")
    }
}

#[must_use]
pub fn score_class(score: usize) -> &'static str {
    if score >= PASS_MARK {
        "result-score result-score--pass"
    } else {
        "result-score result-score--fail"
    }
}

/// "a, c" style listing of the key. `None` when the dataset carries no key.
#[must_use]
pub fn answer_reveal(question: &Question) -> Option<String> {
    let labels = question.answer().labels();
    if labels.is_empty() {
        return None;
    }
    Some(
        labels
            .iter()
            .map(|label| label.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}
