#![forbid(unsafe_code)]

//! Storage adapters for the pet board.
//!
//! The `AnimalRepository` trait is the seam the rest of the app sees; behind
//! it sit an in-memory store for tests and offline demos and a REST store
//! speaking the remote table's PostgREST protocol.

pub mod repository;
pub mod rest;

pub use repository::{
    AnimalRepository, InMemoryAnimalStore, NewAnimalRecord, Storage, StorageError,
};
pub use rest::{RestInitError, RestStore, RestStoreConfig};
