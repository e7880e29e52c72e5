//! Block provider contract (§6) and an in-memory reference implementation.
//!
//! Grounded on the teacher's `mock_rpc.rs` replay-based test double, but
//! generalized from "replay a fixed JSON-RPC script" to "hold a mutable
//! height-indexed block table" — the reorg scenario in spec.md §8 needs to
//! mutate served blocks mid-test, not just replay a recorded script.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ProviderError;
use crate::types::BlockData;

/// Async block source consumed by the sync engine (§6).
#[async_trait]
pub trait BlockProvider: Send + Sync {
    async fn height(&self) -> Result<u64, ProviderError>;
    async fn block_by_height(&self, h: u64) -> Result<BlockData, ProviderError>;
    /// Inclusive range `[start, end]`.
    async fn blocks_by_range(&self, start: u64, end: u64) -> Result<Vec<BlockData>, ProviderError>;
}

/// In-memory `BlockProvider` backed by a mutable height-indexed table.
/// Tests populate it directly, then call [`InMemoryBlockProvider::reorg`]
/// to simulate a chain reorganization.
pub struct InMemoryBlockProvider {
    blocks: RwLock<HashMap<u64, BlockData>>,
}

impl InMemoryBlockProvider {
    pub fn new() -> InMemoryBlockProvider {
        InMemoryBlockProvider {
            blocks: RwLock::new(HashMap::new()),
        }
    }

    pub async fn push_block(&self, block: BlockData) {
        self.blocks.write().await.insert(block.height, block);
    }

    /// Replace the blocks at the given heights (and everything chained
    /// after them) with new `BlockData`, simulating a chain reorg.
    pub async fn reorg(&self, replacement_blocks: Vec<BlockData>) {
        let mut blocks = self.blocks.write().await;
        for block in replacement_blocks {
            blocks.insert(block.height, block);
        }
    }

    pub async fn current_height(&self) -> u64 {
        self.blocks.read().await.keys().copied().max().unwrap_or(0)
    }
}

impl Default for InMemoryBlockProvider {
    fn default() -> Self {
        InMemoryBlockProvider::new()
    }
}

#[async_trait]
impl BlockProvider for InMemoryBlockProvider {
    async fn height(&self) -> Result<u64, ProviderError> {
        Ok(self.current_height().await)
    }

    async fn block_by_height(&self, h: u64) -> Result<BlockData, ProviderError> {
        self.blocks
            .read()
            .await
            .get(&h)
            .cloned()
            .ok_or_else(|| ProviderError::Permanent(format!("no block at height {}", h)))
    }

    async fn blocks_by_range(&self, start: u64, end: u64) -> Result<Vec<BlockData>, ProviderError> {
        let blocks = self.blocks.read().await;
        let mut out = Vec::with_capacity((end.saturating_sub(start) + 1) as usize);
        for h in start..=end {
            let block = blocks
                .get(&h)
                .cloned()
                .ok_or_else(|| ProviderError::Permanent(format!("no block at height {}", h)))?;
            out.push(block);
        }
        Ok(out)
    }
}

/// Build a deterministic chain of empty blocks `[start, end]` whose
/// `prev_hash` links consecutively, for use in sync-engine tests. `salt`
/// lets tests produce a differently-hashed chain over the same height
/// range (for reorg scenarios).
pub fn build_test_chain(start: u64, end: u64, salt: u8) -> Vec<BlockData> {
    let mut blocks = Vec::with_capacity((end - start + 1) as usize);
    let mut prev_hash = if start > 0 {
        crate::hash::keccak256(&[salt, (start - 1) as u8, ((start - 1) >> 8) as u8])
    } else {
        [0u8; 32]
    };
    for h in start..=end {
        let hash = crate::hash::keccak256(&[salt, h as u8, (h >> 8) as u8]);
        blocks.push(BlockData {
            height: h,
            hash,
            timestamp: h,
            prev_hash,
            transactions: Vec::new(),
        });
        prev_hash = hash;
    }
    blocks
}
