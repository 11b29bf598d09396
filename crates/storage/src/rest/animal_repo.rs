use hub_core::model::Animal;
use tracing::{debug, warn};

use super::RestStore;
use super::mapping::{AnimalRow, NewAnimalRow};
use crate::repository::{AnimalRepository, NewAnimalRecord, StorageError};

#[async_trait::async_trait]
impl AnimalRepository for RestStore {
    async fn list_animals(&self) -> Result<Vec<Animal>, StorageError> {
        let url = self.animals_url();
        debug!(%url, "listing animal reports");

        let response = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let response = check_status(response).await?;

        let rows: Vec<AnimalRow> = response
            .json()
            .await
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        debug!(rows = rows.len(), "animal reports fetched");

        rows.into_iter().map(AnimalRow::into_animal).collect()
    }

    async fn insert_animal(&self, record: NewAnimalRecord) -> Result<Animal, StorageError> {
        let url = self.animals_url();
        debug!(%url, name = %record.name, "inserting animal report");

        // The wire contract takes a one-element array and, with
        // return=representation, answers with the stored rows.
        let payload = [NewAnimalRow::from_record(record)];
        let response = self
            .client
            .post(&url)
            .header("Prefer", "return=representation")
            .json(&payload)
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let response = check_status(response).await?;

        let rows: Vec<AnimalRow> = response
            .json()
            .await
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| StorageError::Serialization("insert returned no rows".into()))?;
        row.into_animal()
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    warn!(status = status.as_u16(), "remote store returned an error");
    let message = response.text().await.unwrap_or_default();
    Err(StorageError::Remote {
        status: status.as_u16(),
        message: if message.is_empty() {
            status.to_string()
        } else {
            message
        },
    })
}
