//! Tagged errors for every layer of the core (§7).
//!
//! Each component defines its own narrow error type; [`CoreError`] is the
//! umbrella the public API surfaces, following the manual `Display`/
//! `std::error::Error` + `From` layering the teacher crate uses for its own
//! `WalletError` (see `wallet_state.rs`/`lib.rs` in the teacher repository).

use std::fmt;

/// Errors from the curve primitives (§4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// A 32-byte blob did not decompress to a point on the curve.
    InvalidPoint,
    /// A scalar was rejected by a canonicity check.
    InvalidScalar,
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::InvalidPoint => write!(f, "invalid point encoding"),
            CurveError::InvalidScalar => write!(f, "invalid scalar encoding"),
        }
    }
}

impl std::error::Error for CurveError {}

/// Errors from the Base58 codec (§4.3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A character outside the Base58 alphabet was encountered.
    InvalidCharacter(char),
    /// A decoded block did not have one of the allowed lengths.
    InvalidLength,
    /// The trailing checksum did not match the payload.
    InvalidChecksum,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidCharacter(c) => write!(f, "invalid base58 character: {:?}", c),
            CodecError::InvalidLength => write!(f, "invalid base58 block length"),
            CodecError::InvalidChecksum => write!(f, "base58 checksum mismatch"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Errors from the mnemonic codec (§4.4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    /// The phrase did not have exactly 25 words.
    WrongWordCount(usize),
    /// A word was not present in the word list.
    UnknownWord(String),
    /// The checksum word did not match the expected word.
    ChecksumMismatch,
    /// Entropy passed to `entropy_to_mnemonic` was not 32 bytes.
    InvalidEntropyLength(usize),
}

impl fmt::Display for MnemonicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MnemonicError::WrongWordCount(n) => {
                write!(f, "expected 25 words, got {}", n)
            }
            MnemonicError::UnknownWord(w) => write!(f, "unknown word: {:?}", w),
            MnemonicError::ChecksumMismatch => write!(f, "mnemonic checksum mismatch"),
            MnemonicError::InvalidEntropyLength(n) => {
                write!(f, "expected 32 bytes of entropy, got {}", n)
            }
        }
    }
}

impl std::error::Error for MnemonicError {}

/// Errors surfaced by a [`crate::provider::BlockProvider`] (§6).
#[derive(Debug, Clone)]
pub enum ProviderError {
    /// A retriable failure (timeout, connection reset, 5xx, ...).
    Transient { retry_after_ms: Option<u64> },
    /// A non-retriable failure (invalid request, unsupported height, ...).
    Permanent(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Transient { retry_after_ms } => {
                write!(f, "transient provider error (retry_after_ms={:?})", retry_after_ms)
            }
            ProviderError::Permanent(msg) => write!(f, "permanent provider error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Errors surfaced by a [`crate::storage::WalletStorage`] (§6).
#[derive(Debug, Clone)]
pub struct StorageError(pub String);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage error: {}", self.0)
    }
}

impl std::error::Error for StorageError {}

/// The top-level error type exposed by the public API.
#[derive(Debug)]
pub enum CoreError {
    InvalidSeed(String),
    InvalidKey(String),
    Curve(CurveError),
    Codec(CodecError),
    Mnemonic(MnemonicError),
    Provider(ProviderError),
    Storage(StorageError),
    /// Cooperative cancellation of an in-progress sync run. Not an error
    /// condition in the usual sense — a clean terminal state (§7).
    Cancelled,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidSeed(msg) => write!(f, "invalid seed: {}", msg),
            CoreError::InvalidKey(msg) => write!(f, "invalid key: {}", msg),
            CoreError::Curve(e) => write!(f, "{}", e),
            CoreError::Codec(e) => write!(f, "{}", e),
            CoreError::Mnemonic(e) => write!(f, "{}", e),
            CoreError::Provider(e) => write!(f, "{}", e),
            CoreError::Storage(e) => write!(f, "{}", e),
            CoreError::Cancelled => write!(f, "sync cancelled"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoreError::Curve(e) => Some(e),
            CoreError::Codec(e) => Some(e),
            CoreError::Mnemonic(e) => Some(e),
            CoreError::Provider(e) => Some(e),
            CoreError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CurveError> for CoreError {
    fn from(e: CurveError) -> Self {
        CoreError::Curve(e)
    }
}

impl From<CodecError> for CoreError {
    fn from(e: CodecError) -> Self {
        CoreError::Codec(e)
    }
}

impl From<MnemonicError> for CoreError {
    fn from(e: MnemonicError) -> Self {
        CoreError::Mnemonic(e)
    }
}

impl From<ProviderError> for CoreError {
    fn from(e: ProviderError) -> Self {
        CoreError::Provider(e)
    }
}

impl From<StorageError> for CoreError {
    fn from(e: StorageError) -> Self {
        CoreError::Storage(e)
    }
}
