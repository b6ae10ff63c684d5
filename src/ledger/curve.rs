use std::fmt;

/// Signing curve as reported by the Tezos app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Curve {
    Ed25519 = 0,
    Secp256k1 = 1,
    Secp256r1 = 2,
    Bip32Ed25519 = 3,
}

impl Curve {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Self::Ed25519),
            1 => Some(Self::Secp256k1),
            2 => Some(Self::Secp256r1),
            3 => Some(Self::Bip32Ed25519),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
            Self::Secp256r1 => "P-256",
            Self::Bip32Ed25519 => "bip25519",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_byte_round_trip() {
        for c in [Curve::Ed25519, Curve::Secp256k1, Curve::Secp256r1, Curve::Bip32Ed25519] {
            assert_eq!(Curve::from_byte(c as u8), Some(c));
        }
        assert_eq!(Curve::from_byte(4), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Curve::Ed25519.to_string(), "ed25519");
        assert_eq!(Curve::Secp256r1.to_string(), "P-256");
        assert_eq!(Curve::Bip32Ed25519.to_string(), "bip25519");
    }
}
