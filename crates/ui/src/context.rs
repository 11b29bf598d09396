use std::sync::Arc;

use services::{PetBoardService, QuizService};

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
    fn pet_board(&self) -> Arc<PetBoardService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    pet_board: Arc<PetBoardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let quiz = app.quiz();
        let pet_board = app.pet_board();

        Self { quiz, pet_board }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn pet_board(&self) -> Arc<PetBoardService> {
        Arc::clone(&self.pet_board)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
