use chrono::NaiveDate;
use thiserror::Error;

use crate::model::ids::AnimalId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("pet name cannot be empty")]
    EmptyName,

    #[error("location cannot be empty")]
    EmptyLocation,

    #[error("contact cannot be empty")]
    EmptyContact,

    #[error("description cannot be empty")]
    EmptyDescription,
}

//
// ─── SPECIES & STATUS ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Species {
    #[default]
    Dog,
    Cat,
    Other,
}

impl Species {
    /// Lenient mapping for remote rows; unrecognized tags become `Other`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dog" => Species::Dog,
            "cat" => Species::Cat,
            _ => Species::Other,
        }
    }

    /// The wire tag the remote store uses for this species.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalStatus {
    Lost,
    Found,
}

impl AnimalStatus {
    /// The wire tag the remote store uses for this status.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            AnimalStatus::Lost => "lost",
            AnimalStatus::Found => "found",
        }
    }
}

//
// ─── ANIMAL RECORD ─────────────────────────────────────────────────────────────
//

/// A stored lost-or-found report as the board shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub species: Species,
    pub status: AnimalStatus,
    pub location: String,
    pub date: NaiveDate,
    pub image: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
}

//
// ─── REPORT DRAFT ──────────────────────────────────────────────────────────────
//

/// Raw form input for a new lost-pet report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalReport {
    pub name: String,
    pub species: Species,
    pub location: String,
    pub description: String,
    pub contact: String,
}

impl AnimalReport {
    /// Trims the fields and checks that each one carries content.
    ///
    /// New reports are always filed as `Lost`, dated with the given day.
    ///
    /// # Errors
    ///
    /// Returns the first `ReportError` for a blank field.
    pub fn validate(self, date: NaiveDate) -> Result<ValidatedReport, ReportError> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(ReportError::EmptyName);
        }
        let location = self.location.trim().to_owned();
        if location.is_empty() {
            return Err(ReportError::EmptyLocation);
        }
        let description = self.description.trim().to_owned();
        if description.is_empty() {
            return Err(ReportError::EmptyDescription);
        }
        let contact = self.contact.trim().to_owned();
        if contact.is_empty() {
            return Err(ReportError::EmptyContact);
        }

        Ok(ValidatedReport {
            name,
            species: self.species,
            status: AnimalStatus::Lost,
            location,
            date,
            description,
            contact,
        })
    }
}

/// A report that passed validation and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReport {
    pub name: String,
    pub species: Species,
    pub status: AnimalStatus,
    pub location: String,
    pub date: NaiveDate,
    pub description: String,
    pub contact: String,
}

//
// ─── STATUS FILTER ─────────────────────────────────────────────────────────────
//

/// Board filter over records that are already fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Lost,
    Found,
}

impl StatusFilter {
    #[must_use]
    pub fn admits(&self, status: AnimalStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Lost => status == AnimalStatus::Lost,
            StatusFilter::Found => status == AnimalStatus::Found,
        }
    }
}

/// Narrows a fetched list by status without touching the store.
#[must_use]
pub fn filter_by_status(animals: &[Animal], filter: StatusFilter) -> Vec<Animal> {
    animals
        .iter()
        .filter(|a| filter.admits(a.status))
        .cloned()
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
