use std::sync::Arc;

use async_trait::async_trait;
use hub_core::model::{Animal, AnimalReport, AnimalStatus, ReportError, Species};
use hub_core::time::fixed_clock;
use services::{Clock, PetBoardError, PetBoardService, REPORT_PLACEHOLDER_IMAGE};
use storage::repository::{
    AnimalRepository, InMemoryAnimalStore, NewAnimalRecord, StorageError,
};

fn report(name: &str) -> AnimalReport {
    AnimalReport {
        name: name.into(),
        species: Species::Dog,
        location: "Parque Central".into(),
        description: "Brown collar".into(),
        contact: "555-1234".into(),
    }
}

#[tokio::test]
async fn filed_report_comes_back_stored_and_listed_first() {
    let store = Arc::new(InMemoryAnimalStore::with_demo_records());
    let service = PetBoardService::new(store, fixed_clock());

    let stored = service.report_lost(report("Michi")).await.unwrap();
    assert_eq!(stored.id.value(), 4);
    assert_eq!(stored.status, AnimalStatus::Lost);
    assert_eq!(stored.date, fixed_clock().today());
    assert_eq!(stored.image.as_deref(), Some(REPORT_PLACEHOLDER_IMAGE));

    let listed = service.list_animals().await.unwrap();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].name, "Michi");
}

#[tokio::test]
async fn blank_report_never_reaches_the_store() {
    let store = Arc::new(CountingStore::default());
    let service = PetBoardService::new(store.clone(), Clock::default_clock());

    let err = service
        .report_lost(AnimalReport {
            name: "  ".into(),
            ..report("x")
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PetBoardError::Report(ReportError::EmptyName)
    ));
    assert_eq!(store.inserts(), 0);
}

#[tokio::test]
async fn store_failures_surface_as_errors_not_panics() {
    let service = PetBoardService::new(Arc::new(FailingStore), Clock::default_clock());

    let list_err = service.list_animals().await.unwrap_err();
    assert!(matches!(
        list_err,
        PetBoardError::Storage(StorageError::Remote { status: 503, .. })
    ));

    let write_err = service.report_lost(report("Michi")).await.unwrap_err();
    assert!(matches!(write_err, PetBoardError::Storage(_)));
}

/// Store double that always refuses, the way an unreachable backend would.
struct FailingStore;

#[async_trait]
impl AnimalRepository for FailingStore {
    async fn list_animals(&self) -> Result<Vec<Animal>, StorageError> {
        Err(StorageError::Remote {
            status: 503,
            message: "service unavailable".into(),
        })
    }

    async fn insert_animal(&self, _record: NewAnimalRecord) -> Result<Animal, StorageError> {
        Err(StorageError::Remote {
            status: 503,
            message: "service unavailable".into(),
        })
    }
}

/// Store double that counts writes so tests can assert none happened.
#[derive(Default)]
struct CountingStore {
    inserts: std::sync::atomic::AtomicUsize,
}

impl CountingStore {
    fn inserts(&self) -> usize {
        self.inserts.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[async_trait]
impl AnimalRepository for CountingStore {
    async fn list_animals(&self) -> Result<Vec<Animal>, StorageError> {
        Ok(Vec::new())
    }

    async fn insert_animal(&self, _record: NewAnimalRecord) -> Result<Animal, StorageError> {
        self.inserts
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Err(StorageError::NotFound)
    }
}
