//! Standard, subaddress, and integrated address construction/parsing
//! (§3, §4.5).
//!
//! Base58Check layout is spec-mandated byte-for-byte; grounded on
//! `monumexyz-libmonero/src/keys.rs::derive_address` for the
//! prefix-byte-then-keys-then-checksum shape.

use crate::base58::{decode_check, encode_check};
use crate::error::{CodecError as Base58Error, CoreError};
use crate::keys::PublicKey;

/// Which Monero network an address is encoded for (§3).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Network {
    Mainnet,
    Testnet,
    Stagenet,
}

/// The kind of address, determining which network prefix byte is used.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AddressKind {
    Standard,
    Subaddress,
    Integrated,
}

impl Network {
    fn prefix(&self, kind: AddressKind) -> u8 {
        match (self, kind) {
            (Network::Mainnet, AddressKind::Standard) => 18,
            (Network::Mainnet, AddressKind::Subaddress) => 42,
            (Network::Mainnet, AddressKind::Integrated) => 19,
            (Network::Testnet, AddressKind::Standard) => 53,
            (Network::Testnet, AddressKind::Subaddress) => 63,
            (Network::Testnet, AddressKind::Integrated) => 54,
            (Network::Stagenet, AddressKind::Standard) => 24,
            (Network::Stagenet, AddressKind::Subaddress) => 36,
            (Network::Stagenet, AddressKind::Integrated) => 25,
        }
    }

    fn from_prefix(prefix: u8) -> Option<(Network, AddressKind)> {
        match prefix {
            18 => Some((Network::Mainnet, AddressKind::Standard)),
            42 => Some((Network::Mainnet, AddressKind::Subaddress)),
            19 => Some((Network::Mainnet, AddressKind::Integrated)),
            53 => Some((Network::Testnet, AddressKind::Standard)),
            63 => Some((Network::Testnet, AddressKind::Subaddress)),
            54 => Some((Network::Testnet, AddressKind::Integrated)),
            24 => Some((Network::Stagenet, AddressKind::Standard)),
            36 => Some((Network::Stagenet, AddressKind::Subaddress)),
            25 => Some((Network::Stagenet, AddressKind::Integrated)),
            _ => None,
        }
    }
}

/// A decoded Monero address: network, kind, the two 32-byte keys, and an
/// optional 8-byte payment ID (integrated addresses only).
#[derive(Clone, Debug)]
pub struct Address {
    pub network: Network,
    pub kind: AddressKind,
    pub public_spend: PublicKey,
    pub public_view: PublicKey,
    pub payment_id: Option<[u8; 8]>,
}

impl Address {
    /// `Base58Check(prefix ‖ B ‖ A)` for a standard or subaddress address.
    pub fn standard(network: Network, kind: AddressKind, public_spend: PublicKey, public_view: PublicKey) -> Address {
        debug_assert!(kind != AddressKind::Integrated);
        Address {
            network,
            kind,
            public_spend,
            public_view,
            payment_id: None,
        }
    }

    /// `Base58Check(prefix_int ‖ B ‖ A ‖ payment_id_8bytes)`, main account
    /// only.
    pub fn integrated(network: Network, public_spend: PublicKey, public_view: PublicKey, payment_id: [u8; 8]) -> Address {
        Address {
            network,
            kind: AddressKind::Integrated,
            public_spend,
            public_view,
            payment_id: Some(payment_id),
        }
    }

    pub fn encode(&self) -> String {
        let prefix = self.network.prefix(self.kind);
        let mut payload = Vec::with_capacity(1 + 32 + 32 + 8);
        payload.push(prefix);
        payload.extend_from_slice(self.public_spend.as_bytes());
        payload.extend_from_slice(self.public_view.as_bytes());
        if let Some(payment_id) = self.payment_id {
            payload.extend_from_slice(&payment_id);
        }
        encode_check(&payload)
    }

    pub fn parse(s: &str) -> Result<Address, CoreError> {
        let payload = decode_check(s).map_err(CoreError::Codec)?;
        if payload.len() != 65 && payload.len() != 73 {
            return Err(CoreError::Codec(Base58Error::InvalidLength));
        }
        let prefix = payload[0];
        let (network, kind) = Network::from_prefix(prefix)
            .ok_or_else(|| CoreError::InvalidKey(format!("unrecognized address prefix byte {}", prefix)))?;

        let expect_payment_id = kind == AddressKind::Integrated;
        if expect_payment_id != (payload.len() == 73) {
            return Err(CoreError::Codec(Base58Error::InvalidLength));
        }

        let mut spend = [0u8; 32];
        spend.copy_from_slice(&payload[1..33]);
        let mut view = [0u8; 32];
        view.copy_from_slice(&payload[33..65]);
        let payment_id = if expect_payment_id {
            let mut id = [0u8; 8];
            id.copy_from_slice(&payload[65..73]);
            Some(id)
        } else {
            None
        };

        Ok(Address {
            network,
            kind,
            public_spend: PublicKey(spend),
            public_view: PublicKey(view),
            payment_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyPair;

    fn test_seed() -> [u8; 32] {
        let full = hex::decode("b0ef6bd527b9b23b9ceef70dc8b4cd1ee83ca14541964e764ad23f5151204f0f").unwrap();
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&full);
        seed
    }

    #[test]
    fn mainnet_address_starts_with_4_and_is_95_chars() {
        let keys = KeyPair::from_seed(&test_seed());
        let addr = Address::standard(Network::Mainnet, AddressKind::Standard, keys.public_spend, keys.public_view);
        let encoded = addr.encode();
        assert!(encoded.starts_with('4'));
        assert_eq!(encoded.len(), 95);
    }

    #[test]
    fn stagenet_address_starts_with_5() {
        let keys = KeyPair::from_seed(&test_seed());
        let addr = Address::standard(Network::Stagenet, AddressKind::Standard, keys.public_spend, keys.public_view);
        assert!(addr.encode().starts_with('5'));
    }

    #[test]
    fn testnet_address_starts_with_9_or_a() {
        let keys = KeyPair::from_seed(&test_seed());
        let addr = Address::standard(Network::Testnet, AddressKind::Standard, keys.public_spend, keys.public_view);
        let encoded = addr.encode();
        let first = encoded.chars().next().unwrap();
        assert!(first == '9' || first == 'A', "unexpected leading char {}", first);
    }

    #[test]
    fn roundtrip_standard_address() {
        let keys = KeyPair::from_seed(&test_seed());
        let addr = Address::standard(Network::Mainnet, AddressKind::Standard, keys.public_spend, keys.public_view);
        let encoded = addr.encode();
        let parsed = Address::parse(&encoded).unwrap();
        assert_eq!(parsed.network, Network::Mainnet);
        assert_eq!(parsed.kind, AddressKind::Standard);
        assert_eq!(parsed.public_spend, keys.public_spend);
        assert_eq!(parsed.public_view, keys.public_view);
        assert!(parsed.payment_id.is_none());
    }

    #[test]
    fn roundtrip_integrated_address() {
        let keys = KeyPair::from_seed(&test_seed());
        let payment_id = [1, 2, 3, 4, 5, 6, 7, 8];
        let addr = Address::integrated(Network::Mainnet, keys.public_spend, keys.public_view, payment_id);
        let encoded = addr.encode();
        assert_eq!(encoded.len(), 106);
        let parsed = Address::parse(&encoded).unwrap();
        assert_eq!(parsed.payment_id, Some(payment_id));
    }

    #[test]
    fn rejects_unrecognized_prefix() {
        // Valid Base58Check payload, bogus network prefix byte.
        let payload = vec![255u8; 65];
        let encoded = encode_check(&payload);
        assert!(Address::parse(&encoded).is_err());
    }
}
