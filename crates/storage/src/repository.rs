use async_trait::async_trait;
use chrono::NaiveDate;
use hub_core::model::{Animal, AnimalId, AnimalStatus, Species, ValidatedReport};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("remote store rejected the request ({status}): {message}")]
    Remote { status: u16, message: String },
}

/// Persisted shape for a new report, one row about to be inserted.
///
/// This mirrors the validated domain report plus the columns the service
/// stamps on top, so stores can serialize without leaking wire concerns into
/// the domain layer.
#[derive(Debug, Clone)]
pub struct NewAnimalRecord {
    pub name: String,
    pub species: Species,
    pub status: AnimalStatus,
    pub location: String,
    pub date: NaiveDate,
    pub image: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
}

impl NewAnimalRecord {
    /// Builds the row for a validated report with an optional photo.
    #[must_use]
    pub fn from_report(report: ValidatedReport, image: Option<String>) -> Self {
        Self {
            name: report.name,
            species: report.species,
            status: report.status,
            location: report.location,
            date: report.date,
            image,
            description: Some(report.description),
            contact: Some(report.contact),
        }
    }
}

/// Repository contract for the pet board.
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Fetch every report, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be reached or a row cannot
    /// be mapped.
    async fn list_animals(&self) -> Result<Vec<Animal>, StorageError>;

    /// Insert one report and return the stored row, id assigned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store rejects the write.
    async fn insert_animal(&self, record: NewAnimalRecord) -> Result<Animal, StorageError>;
}

#[derive(Default)]
struct MemoryInner {
    animals: Vec<Animal>,
    next_id: i64,
}

/// In-memory store for tests and the offline demo.
///
/// Keeps records newest first, the same order the remote store serves.
#[derive(Clone)]
pub struct InMemoryAnimalStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl InMemoryAnimalStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryInner {
                animals: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// A store seeded with the three demo reports the board ships with.
    #[must_use]
    pub fn with_demo_records() -> Self {
        let mut animals = demo_records();
        let next_id = animals.iter().map(|a| a.id.value()).max().unwrap_or(0) + 1;
        // Listing order is newest insertion first, like the remote store.
        animals.reverse();
        Self {
            inner: Arc::new(Mutex::new(MemoryInner { animals, next_id })),
        }
    }
}

impl Default for InMemoryAnimalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalStore {
    async fn list_animals(&self) -> Result<Vec<Animal>, StorageError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(inner.animals.clone())
    }

    async fn insert_animal(&self, record: NewAnimalRecord) -> Result<Animal, StorageError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let animal = Animal {
            id: AnimalId::new(inner.next_id),
            name: record.name,
            species: record.species,
            status: record.status,
            location: record.location,
            date: record.date,
            image: record.image,
            description: record.description,
            contact: record.contact,
        };
        inner.next_id += 1;
        inner.animals.insert(0, animal.clone());
        Ok(animal)
    }
}

fn demo_records() -> Vec<Animal> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    vec![
        Animal {
            id: AnimalId::new(1),
            name: "Rex".into(),
            species: Species::Dog,
            status: AnimalStatus::Lost,
            location: "Parque Central, Santiago".into(),
            date: date(2025, 4, 10),
            image: Some(
                "https://images.unsplash.com/photo-1543466835-00a7907e9de1?auto=format&fit=crop&w=500&q=80"
                    .into(),
            ),
            description: Some("Golden Retriever, collar rojo. Muy amigable.".into()),
            contact: Some("+56 9 1234 5678".into()),
        },
        Animal {
            id: AnimalId::new(2),
            name: "Luna".into(),
            species: Species::Cat,
            status: AnimalStatus::Lost,
            location: "Providencia, cerca del Metro".into(),
            date: date(2025, 4, 12),
            image: Some(
                "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?auto=format&fit=crop&w=500&q=80"
                    .into(),
            ),
            description: Some("Gata negra, ojos verdes. Se asusta facilmente.".into()),
            contact: Some("contacto@email.com".into()),
        },
        Animal {
            id: AnimalId::new(3),
            name: "Bobby".into(),
            species: Species::Dog,
            status: AnimalStatus::Found,
            location: "La Florida".into(),
            date: date(2025, 4, 11),
            image: Some(
                "https://images.unsplash.com/photo-1587300003388-59208cc962cb?auto=format&fit=crop&w=500&q=80"
                    .into(),
            ),
            description: Some("Encontrado cerca del mall. Sin collar.".into()),
            contact: Some("Veterinaria Local".into()),
        },
    ]
}

/// Aggregates the board's repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub animals: Arc<dyn AnimalRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            animals: Arc::new(InMemoryAnimalStore::new()),
        }
    }

    /// An in-memory backend preloaded with the demo reports.
    #[must_use]
    pub fn in_memory_demo() -> Self {
        Self {
            animals: Arc::new(InMemoryAnimalStore::with_demo_records()),
        }
    }
}
