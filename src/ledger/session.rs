use super::{LedgerError, commands, path::DerivationPath, response};
use crate::apdu;
use crate::hid::Channel;
use crate::identity::{AddressEncoder, Identity, Namer};

/// One device's APDU channel. Each method is a single request/response
/// exchange; nothing is kept between calls.
pub struct Ledger<C> {
    channel: C,
}

impl<C: Channel> Ledger<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    pub fn into_inner(self) -> C {
        self.channel
    }

    fn call(&mut self, request: &[u8]) -> Result<Vec<u8>, LedgerError> {
        let data = apdu::exchange(&mut self.channel, request)?.into_result()?;
        Ok(data)
    }

    /// Public key under `44'/1729'`, rendered through `identity`.
    pub fn ledger_id<E, N>(&mut self, identity: &Identity<E, N>) -> Result<String, LedgerError>
    where
        E: AddressEncoder,
        N: Namer,
    {
        let data = self.call(&commands::encode_get_public_key(&DerivationPath::tezos_root()))?;
        Ok(response::decode_ledger_id(&data, identity)?)
    }

    pub fn app_version(&mut self) -> Result<String, LedgerError> {
        let data = self.call(&commands::encode_get_version())?;
        Ok(response::decode_version(&data)?)
    }

    pub fn authorized_path(&mut self) -> Result<String, LedgerError> {
        let data = self.call(&commands::encode_get_authorized_path())?;
        Ok(response::decode_authorized_path(&data)?)
    }
}
