use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};
use thiserror::Error;

use crate::repository::{AnimalRepository, Storage};

mod animal_repo;
mod mapping;

/// Where the remote store lives and the key that opens it.
///
/// The key doubles as the bearer token, the way the hosted table expects.
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    pub base_url: String,
    pub api_key: String,
}

/// REST adapter for the hosted `animals` table.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RestInitError {
    #[error("store key is not a valid header value")]
    InvalidKey(#[from] InvalidHeaderValue),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl RestStore {
    /// Build a client carrying the store credentials on every request.
    ///
    /// # Errors
    ///
    /// Returns `RestInitError` if the key cannot be encoded as a header or
    /// the HTTP client cannot be constructed.
    pub fn connect(config: &RestStoreConfig) -> Result<Self, RestInitError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.api_key)?;
        key.set_sensitive(true);
        headers.insert("apikey", key);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn animals_url(&self) -> String {
        format!("{}/rest/v1/animals", self.base_url)
    }
}

impl Storage {
    /// Build a `Storage` backed by the remote REST table.
    ///
    /// # Errors
    ///
    /// Returns `RestInitError` if the client cannot be constructed.
    pub fn rest(config: &RestStoreConfig) -> Result<Self, RestInitError> {
        let store = RestStore::connect(config)?;
        let animals: Arc<dyn AnimalRepository> = Arc::new(store);
        Ok(Self { animals })
    }
}
