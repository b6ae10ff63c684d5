use blake2::digest::consts::U20;
use blake2::{Blake2b, Digest};
use super::{AddressEncoder, KeyType};

type Blake2b160 = Blake2b<U20>;

const TZ1: [u8; 3] = [6, 161, 159];
const TZ2: [u8; 3] = [6, 161, 161];
const TZ3: [u8; 3] = [6, 161, 164];

/// Tezos implicit account address: base58check(prefix || blake2b-160(key)).
#[derive(Debug, Clone, Copy, Default)]
pub struct TezosAddress;

impl AddressEncoder for TezosAddress {
    fn encode(&self, key_type: KeyType, key: &[u8]) -> String {
        let prefix = match key_type {
            KeyType::Ed25519 => TZ1,
            KeyType::Secp256k1 => TZ2,
            KeyType::P256 => TZ3,
        };
        let hash = Blake2b160::digest(key);
        let mut payload = Vec::with_capacity(prefix.len() + hash.len());
        payload.extend_from_slice(&prefix);
        payload.extend_from_slice(&hash);
        bs58::encode(payload).with_check().into_string()
    }
}
