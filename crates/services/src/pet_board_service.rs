use std::sync::Arc;

use tracing::info;

use hub_core::Clock;
use hub_core::model::{Animal, AnimalReport};
use storage::repository::{AnimalRepository, NewAnimalRecord};

use crate::error::PetBoardError;

/// Stock photo used while reports cannot attach their own picture.
pub const REPORT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?auto=format&fit=crop&w=500&q=80";

/// Orchestrates the pet board over an injected store.
///
/// The clock stamps report dates, so tests can pin them.
#[derive(Clone)]
pub struct PetBoardService {
    store: Arc<dyn AnimalRepository>,
    clock: Clock,
}

impl PetBoardService {
    #[must_use]
    pub fn new(store: Arc<dyn AnimalRepository>, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Every report on the board, newest first.
    ///
    /// # Errors
    ///
    /// Returns `PetBoardError::Storage` when the store cannot be reached or
    /// a row cannot be mapped.
    pub async fn list_animals(&self) -> Result<Vec<Animal>, PetBoardError> {
        Ok(self.store.list_animals().await?)
    }

    /// Validates and files a new lost report, returning the stored record.
    ///
    /// The report is dated today, filed as lost, and given the placeholder
    /// photo.
    ///
    /// # Errors
    ///
    /// Returns `PetBoardError::Report` for blank fields, before the store is
    /// touched, and `PetBoardError::Storage` when the write fails.
    pub async fn report_lost(&self, report: AnimalReport) -> Result<Animal, PetBoardError> {
        let validated = report.validate(self.clock.today())?;
        let record =
            NewAnimalRecord::from_report(validated, Some(REPORT_PLACEHOLDER_IMAGE.to_owned()));
        let stored = self.store.insert_animal(record).await?;
        info!(id = %stored.id, name = %stored.name, "lost report filed");
        Ok(stored)
    }
}
