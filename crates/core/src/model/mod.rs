mod animal;
mod ids;
mod image;
mod question;
mod quiz;

pub use animal::{
    Animal, AnimalReport, AnimalStatus, ReportError, Species, StatusFilter, ValidatedReport,
    filter_by_status,
};
pub use ids::{AnimalId, ParseIdError, QuestionId};
pub use image::{ImageRef, ImageRefError};
pub use question::{AnswerKey, Choice, ChoiceLabel, Question, QuestionError};
pub use quiz::{PASS_MARK, QuizMode, QuizRound, QuizSession, Response};
