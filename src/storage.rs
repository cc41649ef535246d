//! Storage service contract.
//!
//! Persistence is an external collaborator: handlers read and write CTF
//! records through this trait and never see the backing format. The
//! in-memory implementation backs the console gateway and the test suite.

use crate::models::Ctf;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;

/// Storage backend failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<StorageError> for crate::error::HandlerError {
    fn from(err: StorageError) -> Self {
        Self::Internal(anyhow::anyhow!(err))
    }
}

/// CTF record store.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Insert or replace a CTF record, keyed by its short name.
    async fn put_ctf(&self, ctf: Ctf) -> Result<(), StorageError>;

    /// Fetch a CTF by short name.
    async fn get_ctf(&self, name: &str) -> Result<Option<Ctf>, StorageError>;

    /// List all known CTFs, running and finished.
    async fn list_ctfs(&self) -> Result<Vec<Ctf>, StorageError>;
}

/// In-memory store.
#[derive(Default)]
pub struct MemoryStorage {
    ctfs: RwLock<HashMap<String, Ctf>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put_ctf(&self, ctf: Ctf) -> Result<(), StorageError> {
        self.ctfs.write().insert(ctf.name.clone(), ctf);
        Ok(())
    }

    async fn get_ctf(&self, name: &str) -> Result<Option<Ctf>, StorageError> {
        Ok(self.ctfs.read().get(name).cloned())
    }

    async fn list_ctfs(&self) -> Result<Vec<Ctf>, StorageError> {
        let mut ctfs: Vec<Ctf> = self.ctfs.read().values().cloned().collect();
        ctfs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ctfs)
    }
}
