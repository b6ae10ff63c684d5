pub const HARDENED: u32 = 0x8000_0000;
/// Deepest BIP32 path the Ledger apps accept.
pub const MAX_DEPTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("derivation path too deep: {0} components, max {max}", max = MAX_DEPTH)]
pub struct PathTooDeep(pub usize);

/// Mark `n` as a hardened derivation index.
pub const fn hard(n: u32) -> u32 {
    n | HARDENED
}

/// Strip the hardened bit for display.
pub const fn unhard(n: u32) -> u32 {
    n & !HARDENED
}

/// BIP32 derivation path, one `u32` per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    pub fn new(components: Vec<u32>) -> Result<Self, PathTooDeep> {
        if components.len() > MAX_DEPTH {
            return Err(PathTooDeep(components.len()));
        }
        Ok(Self(components))
    }

    /// `44'/1729'`, the Tezos root the device derives ledger ids from.
    pub fn tezos_root() -> Self {
        Self(vec![hard(44), hard(1729)])
    }

    /// Component count byte followed by each component, 4 bytes BE.
    /// At most `1 + 4 * MAX_DEPTH` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 4 * self.0.len());
        out.push(self.0.len() as u8);
        for c in &self.0 {
            out.extend_from_slice(&c.to_be_bytes());
        }
        out
    }
}
