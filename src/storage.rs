//! Storage contract (§6, §4.8): abstract operations over persisted sync
//! height, per-height block hashes, owned outputs, and spent key images.
//!
//! `WalletStorage` replaces the teacher's concrete encrypted-file
//! persistence (`WalletState::save`/`load_from_file`, AES-256-GCM +
//! Argon2id); only the trait contract is specified here, matching
//! spec.md §1's "persistent storage engine... out of scope, only a
//! storage contract is specified." `InMemoryWalletStorage` is the
//! reference implementation used by tests, guarded by a `tokio::sync::RwLock`
//! the way the teacher guards `WalletState`'s shared fields.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::types::{KeyImage, OwnedOutput};

/// Async persistence contract consumed by the sync engine. All operations
/// must be atomic at the call granularity (§6).
#[async_trait]
pub trait WalletStorage: Send + Sync {
    /// `-1` if sync has never run.
    async fn last_synced_height(&self) -> Result<i64, StorageError>;
    async fn set_last_synced_height(&self, height: u64) -> Result<(), StorageError>;
    async fn block_hash(&self, height: u64) -> Result<Option<[u8; 32]>, StorageError>;
    async fn set_block_hash(&self, height: u64, hash: [u8; 32]) -> Result<(), StorageError>;
    async fn save_output(&self, output: OwnedOutput) -> Result<(), StorageError>;
    async fn mark_output_spent(&self, key_image: KeyImage) -> Result<(), StorageError>;
    /// Removes all outputs with `blockHeight > h`, block hashes with
    /// `height > h`, and sets `lastSyncedHeight = h`.
    async fn rollback_to_height(&self, h: u64) -> Result<(), StorageError>;
    async fn owned_outputs(&self) -> Result<Vec<OwnedOutput>, StorageError>;
}

struct InMemoryState {
    last_synced_height: i64,
    block_hashes: HashMap<u64, [u8; 32]>,
    outputs: Vec<OwnedOutput>,
}

impl Default for InMemoryState {
    fn default() -> Self {
        InMemoryState {
            last_synced_height: -1,
            block_hashes: HashMap::new(),
            outputs: Vec::new(),
        }
    }
}

/// In-memory `WalletStorage` sufficient for tests and for callers that
/// haven't yet plugged in a real persistence layer.
pub struct InMemoryWalletStorage {
    state: RwLock<InMemoryState>,
}

impl InMemoryWalletStorage {
    pub fn new() -> InMemoryWalletStorage {
        InMemoryWalletStorage {
            state: RwLock::new(InMemoryState::default()),
        }
    }
}

impl Default for InMemoryWalletStorage {
    fn default() -> Self {
        InMemoryWalletStorage::new()
    }
}

#[async_trait]
impl WalletStorage for InMemoryWalletStorage {
    async fn last_synced_height(&self) -> Result<i64, StorageError> {
        Ok(self.state.read().await.last_synced_height)
    }

    async fn set_last_synced_height(&self, height: u64) -> Result<(), StorageError> {
        self.state.write().await.last_synced_height = height as i64;
        Ok(())
    }

    async fn block_hash(&self, height: u64) -> Result<Option<[u8; 32]>, StorageError> {
        Ok(self.state.read().await.block_hashes.get(&height).copied())
    }

    async fn set_block_hash(&self, height: u64, hash: [u8; 32]) -> Result<(), StorageError> {
        self.state.write().await.block_hashes.insert(height, hash);
        Ok(())
    }

    async fn save_output(&self, output: OwnedOutput) -> Result<(), StorageError> {
        self.state.write().await.outputs.push(output);
        Ok(())
    }

    async fn mark_output_spent(&self, key_image: KeyImage) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        for output in state.outputs.iter_mut() {
            if output.key_image == Some(key_image) {
                output.spent = true;
            }
        }
        Ok(())
    }

    async fn rollback_to_height(&self, h: u64) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        state.outputs.retain(|o| o.block_height <= h);
        state.block_hashes.retain(|&height, _| height <= h);
        state.last_synced_height = h as i64;
        Ok(())
    }

    async fn owned_outputs(&self) -> Result<Vec<OwnedOutput>, StorageError> {
        Ok(self.state.read().await.outputs.clone())
    }
}
