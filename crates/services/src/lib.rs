#![forbid(unsafe_code)]

pub mod error;
pub mod pet_board_service;
pub mod question_bank;
pub mod quiz_service;

pub use hub_core::Clock;

pub use error::{PetBoardError, QuestionBankError};
pub use pet_board_service::{PetBoardService, REPORT_PLACEHOLDER_IMAGE};
pub use question_bank::QuestionBank;
pub use quiz_service::{EXAM_DRAW, QuizService};
