//! End-to-end sync engine tests against the in-memory provider/storage
//! reference implementations, exercising the scenarios from spec §8.

use std::sync::Arc;

use monero_wallet_core::keys::KeyPair;
use monero_wallet_core::provider::{build_test_chain, InMemoryBlockProvider};
use monero_wallet_core::storage::InMemoryWalletStorage;
use monero_wallet_core::types::{SyncEvent, SyncState, TxData, TxOutput};
use monero_wallet_core::{Scanner, SubaddressTable, SyncConfig, SyncEngine, WalletStorage};

fn build_sync_engine(
    seed: [u8; 32],
) -> (
    SyncEngine<InMemoryBlockProvider, InMemoryWalletStorage>,
    Arc<InMemoryBlockProvider>,
    Arc<InMemoryWalletStorage>,
    KeyPair,
) {
    let keys = KeyPair::from_seed(&seed);
    let private_view = monero_wallet_core::curve::reduce32(keys.private_view.as_bytes());
    let table = SubaddressTable::build(&private_view, &keys.public_spend, 2, 2);
    let provider = Arc::new(InMemoryBlockProvider::new());
    let storage = Arc::new(InMemoryWalletStorage::new());
    let engine = SyncEngine::new(
        provider.clone(),
        storage.clone(),
        table,
        private_view,
        keys.public_spend.decompress().unwrap(),
        keys.private_spend_scalar(),
        SyncConfig::default().with_batch_size(50),
    );
    (engine, provider, storage, keys)
}

#[tokio::test]
async fn full_sync_from_empty_storage_reaches_target() {
    let (engine, provider, storage, _keys) = build_sync_engine([1u8; 32]);
    for block in build_test_chain(0, 1000, 1) {
        provider.push_block(block).await;
    }

    engine.run().await.unwrap();

    assert_eq!(storage.last_synced_height().await.unwrap(), 1000);
}

#[tokio::test]
async fn fresh_sync_does_not_skip_genesis_height() {
    let (engine, provider, storage, keys) = build_sync_engine([10u8; 32]);

    let r = monero_wallet_core::curve::reduce32(&[8u8; 32]);
    let big_r = monero_wallet_core::curve::scalar_mult_base(&r);
    let big_a = keys.public_view.decompress().unwrap();
    let d = monero_wallet_core::curve::scalar_mult(&r, &big_a);
    let d_compressed = monero_wallet_core::curve::compress_point(&d);

    let mut hs_input = Vec::new();
    hs_input.extend_from_slice(&d_compressed);
    hs_input.extend_from_slice(&monero_wallet_core::hash::varint_encode(0));
    let s = monero_wallet_core::curve::hash_to_scalar(&hs_input);

    let big_b = keys.public_spend.decompress().unwrap();
    let p_out = monero_wallet_core::curve::compress_point(&monero_wallet_core::curve::point_add(
        &monero_wallet_core::curve::scalar_mult_base(&s),
        &big_b,
    ));

    let pay_tx = TxData {
        tx_hash: [33u8; 32],
        tx_pubkey: Some(monero_wallet_core::curve::compress_point(&big_r)),
        additional_pubkeys: vec![],
        outputs: vec![TxOutput {
            public_key: p_out,
            view_tag: None,
            global_index: 0,
        }],
        input_key_images: vec![],
    };

    // A transaction paying this wallet lives in the genesis block itself;
    // a fresh wallet (storage never synced) must still scan height 0.
    let mut blocks = build_test_chain(0, 5, 1);
    blocks[0].transactions.push(pay_tx);
    for block in blocks {
        provider.push_block(block).await;
    }

    engine.run().await.unwrap();

    assert_eq!(storage.last_synced_height().await.unwrap(), 5);
    let outputs = storage.owned_outputs().await.unwrap();
    assert_eq!(outputs.len(), 1, "the genesis-height output must not be skipped");
    assert_eq!(outputs[0].block_height, 0);
}

#[tokio::test]
async fn resuming_sync_only_rescans_unsynced_heights() {
    let (engine, provider, storage, _keys) = build_sync_engine([2u8; 32]);
    for block in build_test_chain(0, 1000, 1) {
        provider.push_block(block).await;
    }
    storage.set_last_synced_height(600).await.unwrap();
    for block in build_test_chain(0, 600, 1) {
        storage.set_block_hash(block.height, block.hash).await.unwrap();
    }

    let mut rx = engine.subscribe();
    engine.run().await.unwrap();

    assert_eq!(storage.last_synced_height().await.unwrap(), 1000);

    let mut min_progress_current = u64::MAX;
    while let Ok(event) = rx.try_recv() {
        if let SyncEvent::ProgressUpdate { current, .. } = event {
            min_progress_current = min_progress_current.min(current);
        }
    }
    assert!(min_progress_current > 600, "resumed sync should not rescan heights <= 600");
}

#[tokio::test]
async fn sync_emits_synced_state_at_completion() {
    let (engine, provider, _storage, _keys) = build_sync_engine([3u8; 32]);
    for block in build_test_chain(0, 10, 1) {
        provider.push_block(block).await;
    }

    let mut rx = engine.subscribe();
    engine.run().await.unwrap();

    let mut saw_synced = false;
    while let Ok(event) = rx.try_recv() {
        if let SyncEvent::SyncStateChanged(SyncState::Synced { height }) = event {
            assert_eq!(height, 10);
            saw_synced = true;
        }
    }
    assert!(saw_synced);
}

#[tokio::test]
async fn cancelling_mid_run_stops_within_a_batch_and_leaves_storage_consistent() {
    let keys = KeyPair::from_seed(&[4u8; 32]);
    let private_view = monero_wallet_core::curve::reduce32(keys.private_view.as_bytes());
    let table = SubaddressTable::build(&private_view, &keys.public_spend, 1, 1);
    let provider = Arc::new(InMemoryBlockProvider::new());
    let storage = Arc::new(InMemoryWalletStorage::new());
    for block in build_test_chain(0, 200, 1) {
        provider.push_block(block).await;
    }

    // Small batches with a delay between them give the spawned cancel()
    // call a window to land before the run completes on its own.
    let engine = Arc::new(SyncEngine::new(
        provider,
        storage.clone(),
        table,
        private_view,
        keys.public_spend.decompress().unwrap(),
        keys.private_spend_scalar(),
        SyncConfig::default().with_batch_size(1).with_batch_delay_ms(2),
    ));

    let run_engine = engine.clone();
    let handle = tokio::spawn(async move { run_engine.run().await });

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    engine.cancel();

    let result = handle.await.unwrap();
    assert!(matches!(result, Err(monero_wallet_core::CoreError::Cancelled)));

    let synced = storage.last_synced_height().await.unwrap();
    assert!(synced < 200, "cancellation should interrupt before reaching the target");
}

#[tokio::test]
async fn owned_output_is_scanned_and_later_marked_spent_via_key_image() {
    let (engine, provider, storage, keys) = build_sync_engine([6u8; 32]);

    // Build a block whose single transaction pays the main address.
    let r = monero_wallet_core::curve::reduce32(&[7u8; 32]);
    let big_r = monero_wallet_core::curve::scalar_mult_base(&r);
    let big_a = keys.public_view.decompress().unwrap();
    let d = monero_wallet_core::curve::scalar_mult(&r, &big_a);
    let d_compressed = monero_wallet_core::curve::compress_point(&d);

    let mut hs_input = Vec::new();
    hs_input.extend_from_slice(&d_compressed);
    hs_input.extend_from_slice(&monero_wallet_core::hash::varint_encode(0));
    let s = monero_wallet_core::curve::hash_to_scalar(&hs_input);

    let big_b = keys.public_spend.decompress().unwrap();
    let p_out = monero_wallet_core::curve::compress_point(&monero_wallet_core::curve::point_add(
        &monero_wallet_core::curve::scalar_mult_base(&s),
        &big_b,
    ));

    let pay_tx = TxData {
        tx_hash: [11u8; 32],
        tx_pubkey: Some(monero_wallet_core::curve::compress_point(&big_r)),
        additional_pubkeys: vec![],
        outputs: vec![TxOutput {
            public_key: p_out,
            view_tag: None,
            global_index: 42,
        }],
        input_key_images: vec![],
    };

    let mut blocks = build_test_chain(0, 2, 1);
    blocks[1].transactions.push(pay_tx);
    for block in blocks {
        provider.push_block(block).await;
    }

    engine.run().await.unwrap();

    let outputs = storage.owned_outputs().await.unwrap();
    assert_eq!(outputs.len(), 1);
    let key_image = outputs[0].key_image.expect("full wallet should compute a key image");
    assert!(!outputs[0].spent);

    // A later block spends that output; the scanner reports the key image
    // as an input, and the engine must mark the stored output spent.
    let mut more_blocks = build_test_chain(3, 4, 1);
    more_blocks[0].transactions.push(TxData {
        tx_hash: [22u8; 32],
        tx_pubkey: None,
        additional_pubkeys: vec![],
        outputs: vec![],
        input_key_images: vec![key_image],
    });
    for block in more_blocks {
        provider.push_block(block).await;
    }

    engine.run().await.unwrap();

    let outputs = storage.owned_outputs().await.unwrap();
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0].spent, "output should be marked spent once its key image appears as an input");
}

#[tokio::test]
async fn view_only_wallet_recognizes_outputs_but_never_computes_key_images() {
    let seed = [9u8; 32];
    let full_keys = KeyPair::from_seed(&seed);
    let view_only = KeyPair::view_only(
        monero_wallet_core::keys::PrivateKey::from_bytes(*full_keys.private_view.as_bytes()),
        full_keys.public_spend,
    );

    let private_view = monero_wallet_core::curve::reduce32(view_only.private_view.as_bytes());
    let table = SubaddressTable::build(&private_view, &view_only.public_spend, 1, 1);
    let scanner = Scanner::new(
        private_view,
        view_only.public_spend.decompress().unwrap(),
        &table,
        view_only.private_spend_scalar(),
    );
    assert!(view_only.private_spend_scalar().is_none());

    let r = monero_wallet_core::curve::reduce32(&[13u8; 32]);
    let big_r = monero_wallet_core::curve::scalar_mult_base(&r);
    let d = monero_wallet_core::curve::scalar_mult(&r, &view_only.public_view.decompress().unwrap());
    let d_compressed = monero_wallet_core::curve::compress_point(&d);
    let mut hs_input = Vec::new();
    hs_input.extend_from_slice(&d_compressed);
    hs_input.extend_from_slice(&monero_wallet_core::hash::varint_encode(0));
    let s = monero_wallet_core::curve::hash_to_scalar(&hs_input);
    let p_out = monero_wallet_core::curve::compress_point(&monero_wallet_core::curve::point_add(
        &monero_wallet_core::curve::scalar_mult_base(&s),
        &view_only.public_spend.decompress().unwrap(),
    ));

    let tx = TxData {
        tx_hash: [5u8; 32],
        tx_pubkey: Some(monero_wallet_core::curve::compress_point(&big_r)),
        additional_pubkeys: vec![],
        outputs: vec![TxOutput {
            public_key: p_out,
            view_tag: None,
            global_index: 0,
        }],
        input_key_images: vec![],
    };

    let owned = scanner.scan_transaction(&tx, 1, 0);
    assert_eq!(owned.len(), 1);
    assert!(owned[0].key_image.is_none());
}
