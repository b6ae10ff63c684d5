//! Turning raw public-key bytes into the identity printed for a device.
//!
//! Both steps are pure functions injected into the decoder: an
//! [`AddressEncoder`] renders the key as an address and a [`Namer`]
//! turns the address into a memorable name.

pub mod address;
pub mod names;

pub use address::TezosAddress;
pub use names::WordNamer;

/// Key type tag handed to the address encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Ed25519,
    Secp256k1,
    P256,
}

pub trait AddressEncoder {
    fn encode(&self, key_type: KeyType, key: &[u8]) -> String;
}

/// Must be deterministic: equal input, equal name.
pub trait Namer {
    fn name(&self, bytes: &[u8]) -> String;
}

impl<F> AddressEncoder for F
where
    F: Fn(KeyType, &[u8]) -> String,
{
    fn encode(&self, key_type: KeyType, key: &[u8]) -> String {
        self(key_type, key)
    }
}

impl<F> Namer for F
where
    F: Fn(&[u8]) -> String,
{
    fn name(&self, bytes: &[u8]) -> String {
        self(bytes)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Identity<E, N> {
    pub encoder: E,
    pub namer: N,
}

impl<E: AddressEncoder, N: Namer> Identity<E, N> {
    pub fn new(encoder: E, namer: N) -> Self {
        Self { encoder, namer }
    }

    pub fn identify(&self, key_type: KeyType, key: &[u8]) -> String {
        let address = self.encoder.encode(key_type, key);
        self.namer.name(address.as_bytes())
    }
}

/// tz-address encoding followed by the word namer.
pub fn tezos() -> Identity<TezosAddress, WordNamer> {
    Identity::new(TezosAddress, WordNamer)
}
