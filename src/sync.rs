//! Sync engine (§4.7): pulls blocks from a [`BlockProvider`] in bounded
//! batches, scans their transactions, persists progress and owned outputs
//! via a [`WalletStorage`], handles reorgs, retries with backoff, and
//! emits a progress/event stream.
//!
//! Grounded on the teacher's `wallet_state.rs` (`sync_once`,
//! `detect_reorganization`, `handle_reorganization`, `start_syncing`,
//! `stop_syncing`) and `rpc.rs`'s `ReconnectionPolicy` for the
//! builder-pattern config shape. The single-actor, `tokio::sync::broadcast`
//! event-stream design mirrors the concurrency model the teacher already
//! uses throughout `wallet_state.rs`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use tokio::sync::broadcast;
use tokio::time::{sleep, Duration};

use crate::error::{CoreError, ProviderError};
use crate::provider::BlockProvider;
use crate::scanner::{Scanner, SubaddressTable};
use crate::storage::WalletStorage;
use crate::types::{BlockData, SyncEvent, SyncState};

/// Sync engine configuration, mirroring the teacher's
/// `ConnectionConfig`/`ReconnectionPolicy` builder pattern (`rpc.rs`).
#[derive(Clone, Debug)]
pub struct SyncConfig {
    pub batch_size: u64,
    pub batch_delay_ms: u64,
    pub max_retries: u32,
    pub retry_base_delay_ms: u64,
    pub retry_max_delay_ms: u64,
    pub auto_retry: bool,
    pub confirmations: u64,
    pub scan_from_height: u64,
    /// Policy choice (spec.md §9 Open Questions), not a correctness
    /// requirement: how far back the reorg walk-back is allowed to search
    /// before giving up and surfacing an error.
    pub reorg_depth_cap: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            batch_size: 100,
            batch_delay_ms: 0,
            max_retries: 3,
            retry_base_delay_ms: 250,
            retry_max_delay_ms: 8000,
            auto_retry: true,
            confirmations: 10,
            scan_from_height: 0,
            reorg_depth_cap: 100,
        }
    }
}

impl SyncConfig {
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }

    pub fn with_scan_from_height(mut self, height: u64) -> Self {
        self.scan_from_height = height;
        self
    }

    pub fn with_batch_delay_ms(mut self, batch_delay_ms: u64) -> Self {
        self.batch_delay_ms = batch_delay_ms;
        self
    }

    pub fn aggressive() -> Self {
        SyncConfig {
            batch_size: 500,
            retry_base_delay_ms: 100,
            retry_max_delay_ms: 2000,
            ..Default::default()
        }
    }

    pub fn conservative() -> Self {
        SyncConfig {
            batch_size: 20,
            retry_base_delay_ms: 500,
            retry_max_delay_ms: 16000,
            ..Default::default()
        }
    }

    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp = self.retry_base_delay_ms.saturating_mul(2u64.saturating_pow(attempt));
        Duration::from_millis(exp.min(self.retry_max_delay_ms))
    }
}

/// Drives scanning of a block stream against a [`BlockProvider`] and
/// [`WalletStorage`], per spec.md §4.7/§5. Owns the secret key material for
/// the run; callers must drop the engine to zeroize it.
pub struct SyncEngine<P: BlockProvider, S: WalletStorage> {
    provider: Arc<P>,
    storage: Arc<S>,
    table: SubaddressTable,
    private_view: Scalar,
    public_spend: EdwardsPoint,
    /// Spend scalar, present only for a full (non-view-only) wallet; passed
    /// to the scanner so owned outputs get key images and can later be
    /// recognized as spent (§4.7 step 6).
    private_spend: Option<Scalar>,
    config: SyncConfig,
    events: broadcast::Sender<SyncEvent>,
    cancel: Arc<AtomicBool>,
}

impl<P: BlockProvider, S: WalletStorage> SyncEngine<P, S> {
    pub fn new(
        provider: Arc<P>,
        storage: Arc<S>,
        table: SubaddressTable,
        private_view: Scalar,
        public_spend: EdwardsPoint,
        private_spend: Option<Scalar>,
        config: SyncConfig,
    ) -> SyncEngine<P, S> {
        let (events, _) = broadcast::channel(1024);
        SyncEngine {
            provider,
            storage,
            table,
            private_view,
            public_spend,
            private_spend,
            config,
            events,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe to the engine's event stream. Multi-consumer; lossless
    /// delivery for a slow subscriber is not guaranteed (newest-wins on
    /// overflow), per spec.md §6.
    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.events.subscribe()
    }

    /// Cooperative cancellation: interrupts between batches within at most
    /// one batch's worth of work (§5).
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    fn emit(&self, event: SyncEvent) {
        // A broadcast channel with no receivers returns Err; that's not a
        // failure condition for the engine, just an unobserved event.
        let _ = self.events.send(event);
    }

    fn emit_state(&self, state: SyncState) {
        self.emit(SyncEvent::SyncStateChanged(state));
    }

    /// Run the sync loop to completion: catch up to the provider's current
    /// tip, re-checking the tip once more in case it advanced while
    /// catching up, per §4.7 step 10. Returns once `Synced` or `Error`.
    pub async fn run(&self) -> Result<(), CoreError> {
        self.cancel.store(false, Ordering::SeqCst);
        loop {
            let advanced = self.run_once().await?;
            if !advanced {
                break;
            }
        }
        Ok(())
    }

    /// One pass of the algorithm in §4.7: resolves any pending reorg at the
    /// tip, then fetches and scans batches up to the provider's height at
    /// the time this call started. Returns `true` if progress was made
    /// towards the (possibly moved) target, `false` once fully caught up.
    pub async fn run_once(&self) -> Result<bool, CoreError> {
        let stored_tip = self.resolve_initial_height().await?;

        // Re-validate the tip we already believe we've synced: if the
        // provider's hash at that height no longer matches what we stored,
        // the chain reorganized while we were caught up (spec.md §8's reorg
        // scenario exercises exactly this path).
        if stored_tip >= 0 {
            self.check_and_handle_reorg_at_tip(stored_tip as u64).await?;
        }

        // `None` means storage has never completed a single height: the
        // first height to fetch is then `scan_from_height` itself (not
        // `scan_from_height + 1` — a never-synced wallet must not skip its
        // configured starting height, including height 0).
        let last_synced = self.storage.last_synced_height().await.map_err(CoreError::Storage)?;
        let last_synced: Option<u64> = if last_synced < 0 { None } else { Some(last_synced as u64) };

        let next_height = match last_synced {
            Some(h) => h + 1,
            None => self.config.scan_from_height,
        };

        let target = self.fetch_height_with_retry().await?;

        if next_height > target {
            self.emit_state(SyncState::Synced {
                height: last_synced.unwrap_or(next_height),
            });
            return Ok(false);
        }

        let start_time_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut next_height = next_height;
        let mut last_height_synced = last_synced;
        let mut processed = 0u64;

        self.emit_state(SyncState::Syncing {
            current: last_height_synced.unwrap_or(next_height.saturating_sub(1)),
            target,
            processed,
            start_time_ms,
        });

        while next_height <= target && !self.cancel.load(Ordering::SeqCst) {
            let batch_end = (next_height + self.config.batch_size - 1).min(target);

            let blocks = self.fetch_batch_with_retry(next_height, batch_end).await?;

            if let Some(first) = blocks.first() {
                if self.check_prev_hash(first).await? {
                    // §4.7 step 5: a reorg was found and storage rolled back
                    // mid-run. `blocks` was fetched under the old chain for
                    // `[next_height, batch_end]` and is now stale over the
                    // rolled-back range — discard it and restart the loop
                    // from the post-rollback height instead of applying it.
                    let rolled_back = self.storage.last_synced_height().await.map_err(CoreError::Storage)?;
                    last_height_synced = if rolled_back < 0 { None } else { Some(rolled_back as u64) };
                    next_height = last_height_synced.map_or(self.config.scan_from_height, |h| h + 1);
                    continue;
                }
            }

            for block in &blocks {
                self.apply_block(block, target).await?;
                last_height_synced = Some(block.height);
                next_height = block.height + 1;
                processed += 1;
                self.emit(SyncEvent::ProgressUpdate { current: block.height, target });
            }

            if self.config.batch_delay_ms > 0 {
                sleep(Duration::from_millis(self.config.batch_delay_ms)).await;
            }
        }

        if self.cancel.load(Ordering::SeqCst) {
            self.emit_state(SyncState::Idle);
            return Err(CoreError::Cancelled);
        }

        // §4.7 step 10: the tip may have advanced while we were catching up.
        let fresh_target = self.fetch_height_with_retry().await?;
        if fresh_target > target {
            return Ok(true);
        }

        self.emit_state(SyncState::Synced {
            height: last_height_synced.unwrap_or(next_height),
        });
        Ok(false)
    }

    async fn resolve_initial_height(&self) -> Result<i64, CoreError> {
        self.storage.last_synced_height().await.map_err(CoreError::Storage)
    }

    async fn check_and_handle_reorg_at_tip(&self, tip: u64) -> Result<(), CoreError> {
        let stored_hash = self.storage.block_hash(tip).await.map_err(CoreError::Storage)?;
        let Some(stored_hash) = stored_hash else {
            return Ok(());
        };
        let live_block = self.fetch_block_with_retry(tip).await?;
        if live_block.hash != stored_hash {
            self.handle_reorg(tip).await?;
        }
        Ok(())
    }

    /// Returns `true` if a reorg was detected and storage rolled back, in
    /// which case the caller must discard any already-fetched batch and
    /// restart from the rolled-back height rather than applying it.
    async fn check_prev_hash(&self, first_in_batch: &BlockData) -> Result<bool, CoreError> {
        if first_in_batch.height == 0 {
            return Ok(false);
        }
        let stored_prev = self
            .storage
            .block_hash(first_in_batch.height - 1)
            .await
            .map_err(CoreError::Storage)?;
        if let Some(stored_prev) = stored_prev {
            if stored_prev != first_in_batch.prev_hash {
                self.handle_reorg(first_in_batch.height - 1).await?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Walk backward from `current` comparing stored hashes to the
    /// provider's, find the agreement point `h*`, roll storage back to it,
    /// and emit `ReorgDetected{h*, current}` (§4.7 "Reorg handler").
    async fn handle_reorg(&self, current: u64) -> Result<(), CoreError> {
        let mut h = current;
        let floor = current.saturating_sub(self.config.reorg_depth_cap);

        loop {
            let stored = self.storage.block_hash(h).await.map_err(CoreError::Storage)?;
            let live = self.fetch_block_with_retry(h).await?;

            let agrees = match stored {
                Some(stored_hash) => stored_hash == live.hash,
                None => true, // never synced this height; nothing to disagree with
            };

            if agrees || h == 0 {
                break;
            }
            if h <= floor {
                let message = format!("reorg depth exceeded cap of {} blocks", self.config.reorg_depth_cap);
                self.emit_state(SyncState::Error {
                    message: message.clone(),
                    cause: None,
                });
                return Err(CoreError::Provider(ProviderError::Permanent(message)));
            }
            h -= 1;
        }

        self.storage.rollback_to_height(h).await.map_err(CoreError::Storage)?;
        self.emit(SyncEvent::ReorgDetected {
            from_height: h,
            to_height: current,
        });
        Ok(())
    }

    async fn apply_block(&self, block: &BlockData, target: u64) -> Result<(), CoreError> {
        self.storage
            .set_block_hash(block.height, block.hash)
            .await
            .map_err(CoreError::Storage)?;

        let scanner = Scanner::new(self.private_view, self.public_spend, &self.table, self.private_spend);
        let confirmed = block.height <= target.saturating_sub(self.config.confirmations);

        // Scanning each transaction is a pure function of keys + tx data
        // (§5): fan the batch's transactions out with `join_all` so they
        // can run concurrently, then persist the results sequentially on
        // this task, as the single-actor model requires.
        let scanned: Vec<Vec<_>> = futures::future::join_all(
            block
                .transactions
                .iter()
                .map(|tx| async { scanner.scan_transaction(tx, block.height, block.timestamp) }),
        )
        .await;

        for (tx, owned) in block.transactions.iter().zip(scanned) {
            for output in owned {
                self.storage.save_output(output.clone()).await.map_err(CoreError::Storage)?;
                self.emit(SyncEvent::OutputReceived { output, confirmed });
            }

            for key_image in &tx.input_key_images {
                self.storage.mark_output_spent(*key_image).await.map_err(CoreError::Storage)?;
            }
        }

        self.storage
            .set_last_synced_height(block.height)
            .await
            .map_err(CoreError::Storage)?;

        Ok(())
    }

    async fn fetch_height_with_retry(&self) -> Result<u64, CoreError> {
        self.with_retry(|| {
            let provider = self.provider.clone();
            async move { provider.height().await }
        })
        .await
    }

    async fn fetch_block_with_retry(&self, h: u64) -> Result<BlockData, CoreError> {
        self.with_retry(|| {
            let provider = self.provider.clone();
            async move { provider.block_by_height(h).await }
        })
        .await
    }

    async fn fetch_batch_with_retry(&self, start: u64, end: u64) -> Result<Vec<BlockData>, CoreError> {
        self.with_retry(|| {
            let provider = self.provider.clone();
            async move { provider.blocks_by_range(start, end).await }
        })
        .await
    }

    /// Exponential-backoff retry for transient provider failures (§4.7
    /// "Retry policy"); a permanent failure transitions to `Error`
    /// immediately.
    async fn with_retry<F, Fut, T>(&self, mut op: F) -> Result<T, CoreError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, ProviderError>>,
    {
        let mut attempt = 0u32;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(ProviderError::Permanent(message)) => {
                    self.emit_state(SyncState::Error {
                        message: message.clone(),
                        cause: None,
                    });
                    return Err(CoreError::Provider(ProviderError::Permanent(message)));
                }
                Err(err @ ProviderError::Transient { .. }) => {
                    if !self.config.auto_retry || attempt >= self.config.max_retries {
                        self.emit_state(SyncState::Error {
                            message: format!("{}", err),
                            cause: None,
                        });
                        return Err(CoreError::Provider(err));
                    }
                    eprintln!("monero_wallet_core: transient provider error, retrying (attempt {}): {}", attempt + 1, err);
                    sleep(self.config.delay_for_attempt(attempt)).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::reduce32;
    use crate::keys::KeyPair;
    use crate::provider::{build_test_chain, InMemoryBlockProvider};
    use crate::storage::InMemoryWalletStorage;

    fn make_engine(
        provider: Arc<InMemoryBlockProvider>,
        storage: Arc<InMemoryWalletStorage>,
    ) -> SyncEngine<InMemoryBlockProvider, InMemoryWalletStorage> {
        let keys = KeyPair::from_seed(&[5u8; 32]);
        let private_view = reduce32(keys.private_view.as_bytes());
        let table = SubaddressTable::build(&private_view, &keys.public_spend, 1, 1);
        SyncEngine::new(
            provider,
            storage,
            table,
            private_view,
            keys.public_spend.decompress().unwrap(),
            keys.private_spend_scalar(),
            SyncConfig::default().with_batch_size(100),
        )
    }

    #[tokio::test]
    async fn syncs_from_resume_height_to_target() {
        let provider = Arc::new(InMemoryBlockProvider::new());
        for block in build_test_chain(1, 1000, 1) {
            provider.push_block(block).await;
        }
        let storage = Arc::new(InMemoryWalletStorage::new());
        storage.set_last_synced_height(50).await.unwrap();
        for block in build_test_chain(1, 50, 1) {
            storage.set_block_hash(block.height, block.hash).await.unwrap();
        }

        let engine = make_engine(provider, storage.clone());
        let mut rx = engine.subscribe();

        engine.run().await.unwrap();

        assert_eq!(storage.last_synced_height().await.unwrap(), 1000);

        let mut progress_events = 0u32;
        let mut last_current = -1i64;
        while let Ok(event) = rx.try_recv() {
            if let SyncEvent::ProgressUpdate { current, .. } = event {
                assert!(current as i64 >= last_current);
                last_current = current as i64;
                progress_events += 1;
            }
        }
        assert!(progress_events >= 950, "expected >=950 progress events, got {}", progress_events);
    }

    #[tokio::test]
    async fn detects_and_recovers_from_reorg() {
        let provider = Arc::new(InMemoryBlockProvider::new());
        for block in build_test_chain(0, 100, 1) {
            provider.push_block(block).await;
        }
        let storage = Arc::new(InMemoryWalletStorage::new());
        let engine = make_engine(provider.clone(), storage.clone());

        engine.run().await.unwrap();
        assert_eq!(storage.last_synced_height().await.unwrap(), 100);

        provider.reorg(build_test_chain(95, 100, 2)).await;

        let mut rx = engine.subscribe();
        engine.run().await.unwrap();

        let mut saw_reorg = false;
        while let Ok(event) = rx.try_recv() {
            if let SyncEvent::ReorgDetected { from_height, to_height } = event {
                assert_eq!(from_height, 94);
                assert_eq!(to_height, 100);
                saw_reorg = true;
            }
        }
        assert!(saw_reorg, "expected a ReorgDetected event");
        assert_eq!(storage.last_synced_height().await.unwrap(), 100);
    }

    #[tokio::test]
    async fn mid_batch_reorg_rescans_the_rolled_back_range_instead_of_skipping_it() {
        let provider = Arc::new(InMemoryBlockProvider::new());
        let original_chain = build_test_chain(0, 300, 1);
        for block in original_chain.clone() {
            provider.push_block(block).await;
        }
        let storage = Arc::new(InMemoryWalletStorage::new());

        let keys = KeyPair::from_seed(&[20u8; 32]);
        let private_view = reduce32(keys.private_view.as_bytes());
        let table = SubaddressTable::build(&private_view, &keys.public_spend, 1, 1);
        let engine = Arc::new(SyncEngine::new(
            provider.clone(),
            storage.clone(),
            table,
            private_view,
            keys.public_spend.decompress().unwrap(),
            keys.private_spend_scalar(),
            SyncConfig::default().with_batch_size(50).with_batch_delay_ms(20),
        ));

        let mut rx = engine.subscribe();
        let run_engine = engine.clone();
        let handle = tokio::spawn(async move { run_engine.run().await });

        // Give the first two batches ([0,49], [50,99]) time to land, then
        // rewrite the chain from height 70 onward — correctly re-linked to
        // the unchanged height-69 block — before the batch covering it is
        // fetched. This reorg lands between two batches of the same run(),
        // the case §4.7 step 5 describes, not the already-synced-tip case
        // `detects_and_recovers_from_reorg` exercises.
        tokio::time::sleep(std::time::Duration::from_millis(30)).await;
        let mut replacement = build_test_chain(70, 300, 2);
        replacement[0].prev_hash = original_chain[69].hash;
        provider.reorg(replacement.clone()).await;

        handle.await.unwrap().unwrap();

        let mut saw_reorg = false;
        while let Ok(event) = rx.try_recv() {
            if let SyncEvent::ReorgDetected { .. } = event {
                saw_reorg = true;
            }
        }
        assert!(saw_reorg, "expected a mid-run ReorgDetected event");
        assert_eq!(storage.last_synced_height().await.unwrap(), 300);

        // The range [70,300] must be re-scanned under the replacement
        // chain's hashes, not left stale under the pre-rollback batch that
        // was already fetched when the reorg landed.
        for block in &replacement {
            let stored = storage.block_hash(block.height).await.unwrap().unwrap();
            assert_eq!(stored, block.hash, "height {} was not rescanned under the replacement chain", block.height);
        }
    }
}
