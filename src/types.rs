//! Shared data types that cross module boundaries (§3): owned outputs,
//! block data, key images, and sync state.
//!
//! Grounded on the teacher's `types.rs` (`Transaction`,
//! `SerializableOutput`) for field shape and derive conventions, adapted to
//! the entities spec.md §3 names.

use serde::{Deserialize, Serialize};

use crate::keys::SubaddressIndex;

/// A 32-byte Ed25519 point uniquely identifying a spent output (§3).
pub type KeyImage = [u8; 32];

/// An output the wallet has matched to one of its subaddresses (§3).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedOutput {
    pub tx_hash: [u8; 32],
    pub output_index: u32,
    pub global_index: u64,
    pub amount: Option<u64>,
    pub public_key: [u8; 32],
    pub block_height: u64,
    pub timestamp: u64,
    pub subaddress_index: SubaddressIndex,
    pub spent: bool,
    /// Computed by the scanner when the output is first matched, from the
    /// one-time private key `x` and `Hp(public_key)`; `None` for a
    /// view-only wallet (no spend scalar), which can detect incoming funds
    /// but not recognize its own spends.
    pub key_image: Option<KeyImage>,
}

/// A single transaction's fields relevant to scanning: its extra-data
/// public keys and its outputs (amount decryption and ring-signature
/// material are out of scope, §4.6).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TxData {
    pub tx_hash: [u8; 32],
    pub tx_pubkey: Option<[u8; 32]>,
    pub additional_pubkeys: Vec<[u8; 32]>,
    pub outputs: Vec<TxOutput>,
    /// Key images of this transaction's inputs, used to mark prior owned
    /// outputs spent (§4.7 step 6).
    pub input_key_images: Vec<KeyImage>,
}

/// A single transaction output as seen by the scanner.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TxOutput {
    pub public_key: [u8; 32],
    pub view_tag: Option<u8>,
    pub global_index: u64,
}

/// A block as served by a [`crate::provider::BlockProvider`] (§3).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub height: u64,
    pub hash: [u8; 32],
    pub timestamp: u64,
    pub prev_hash: [u8; 32],
    pub transactions: Vec<TxData>,
}

/// The sync engine's externally observable state (§3, §4.7).
#[derive(Clone, Debug, PartialEq)]
pub enum SyncState {
    Idle,
    Syncing {
        current: u64,
        target: u64,
        processed: u64,
        start_time_ms: u64,
    },
    Synced {
        height: u64,
    },
    Error {
        message: String,
        cause: Option<String>,
    },
}

/// Events emitted on the sync engine's broadcast stream (§6).
#[derive(Clone, Debug)]
pub enum SyncEvent {
    SyncStateChanged(SyncState),
    ProgressUpdate { current: u64, target: u64 },
    /// `confirmed` is a read-time property derived from `(blockHeight,
    /// target, confirmations)` (§4.7), not a field stored on the output
    /// itself — it would go stale as the tip advances.
    OutputReceived { output: OwnedOutput, confirmed: bool },
    ReorgDetected { from_height: u64, to_height: u64 },
}
