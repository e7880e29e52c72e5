//! Core of a non-custodial Monero wallet: the cryptographic key hierarchy,
//! address construction, view-key output scanning, and the sync engine
//! that drives scanning over a (potentially reorging) block stream.
//!
//! Out of scope, handled by callers behind [`provider::BlockProvider`] and
//! [`storage::WalletStorage`]: RPC transport, a persistent storage engine,
//! CLI/config loading, full transaction construction (ring signatures,
//! Bulletproofs+, fee estimation, relay), and mnemonic localization beyond
//! English.

pub mod address;
pub mod base58;
pub mod curve;
pub mod error;
pub mod hash;
mod hash_to_point;
pub mod keys;
pub mod mnemonic;
pub mod provider;
pub mod scanner;
pub mod storage;
pub mod sync;
pub mod types;

mod wordlist_english;

pub use address::{Address, AddressKind, Network};
pub use error::CoreError;
pub use keys::{KeyPair, PrivateKey, PublicKey, SubaddressIndex};
pub use provider::BlockProvider;
pub use scanner::{Scanner, SubaddressTable};
pub use storage::WalletStorage;
pub use sync::{SyncConfig, SyncEngine};
pub use types::{BlockData, KeyImage, OwnedOutput, SyncEvent, SyncState, TxData, TxOutput};
