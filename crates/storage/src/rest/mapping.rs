use chrono::NaiveDate;
use hub_core::model::{Animal, AnimalId, AnimalStatus, Species};
use serde::{Deserialize, Serialize};

use crate::repository::{NewAnimalRecord, StorageError};

/// One row of the remote `animals` table as it comes off the wire.
///
/// The remote column is called `type`; everything past the required columns
/// is nullable.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AnimalRow {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub species: String,
    pub status: String,
    pub location: String,
    pub date: NaiveDate,
    pub image: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
}

impl AnimalRow {
    /// Convert the row into a domain `Animal`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for a status tag the board does
    /// not know. Species degrades to `Other` instead, since the remote data
    /// predates this client.
    pub(crate) fn into_animal(self) -> Result<Animal, StorageError> {
        let status = parse_status(&self.status)?;
        Ok(Animal {
            id: AnimalId::new(self.id),
            name: self.name,
            species: Species::from_tag(&self.species),
            status,
            location: self.location,
            date: self.date,
            image: self.image,
            description: self.description,
            contact: self.contact,
        })
    }
}

pub(crate) fn parse_status(s: &str) -> Result<AnimalStatus, StorageError> {
    match s {
        "lost" => Ok(AnimalStatus::Lost),
        "found" => Ok(AnimalStatus::Found),
        _ => Err(StorageError::Serialization(format!("invalid status: {s}"))),
    }
}

/// Outgoing shape for an insert.
#[derive(Debug, Serialize)]
pub(crate) struct NewAnimalRow {
    pub name: String,
    #[serde(rename = "type")]
    pub species: &'static str,
    pub status: &'static str,
    pub location: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl NewAnimalRow {
    pub(crate) fn from_record(record: NewAnimalRecord) -> Self {
        Self {
            name: record.name,
            species: record.species.tag(),
            status: record.status.tag(),
            location: record.location,
            date: record.date,
            image: record.image,
            description: record.description,
            contact: record.contact,
        }
    }
}
