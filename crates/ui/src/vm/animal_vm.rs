use hub_core::model::{Animal, AnimalStatus};
use services::PetBoardError;

use crate::views::ViewError;
use crate::vm::time_fmt::format_date;

/// Shown when a stored record has no photo of its own.
const CARD_IMAGE_FALLBACK: &str = "https://via.placeholder.com/500";

/// One board card, formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimalCardVm {
    pub id: i64,
    pub name: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub date_str: String,
    pub location: String,
    pub description: String,
    pub contact: String,
    pub image_url: String,
}

impl From<&Animal> for AnimalCardVm {
    fn from(animal: &Animal) -> Self {
        let (status_label, status_class) = match animal.status {
            AnimalStatus::Lost => ("lost", "status-badge status-badge--lost"),
            AnimalStatus::Found => ("found", "status-badge status-badge--found"),
        };
        Self {
            id: animal.id.value(),
            name: animal.name.clone(),
            status_label,
            status_class,
            date_str: format_date(animal.date),
            location: animal.location.clone(),
            description: animal.description.clone().unwrap_or_default(),
            contact: animal.contact.clone().unwrap_or_default(),
            image_url: animal
                .image
                .clone()
                .unwrap_or_else(|| CARD_IMAGE_FALLBACK.to_owned()),
        }
    }
}

#[must_use]
pub fn map_animal_cards(animals: &[Animal]) -> Vec<AnimalCardVm> {
    animals.iter().map(AnimalCardVm::from).collect()
}

/// Folds a board failure into something the page can show.
#[must_use]
pub fn view_error_from_board(err: &PetBoardError) -> ViewError {
    ViewError::Message(err.to_string())
}
