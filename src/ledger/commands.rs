use super::path::DerivationPath;

pub const CLA: u8 = 0x80;
pub const INS_VERSION: u8 = 0x00;
pub const INS_GET_PUBLIC_KEY: u8 = 0x02;
pub const INS_GET_AUTHORIZED_PATH: u8 = 0x0D;

fn header(ins: u8, lc: u8) -> Vec<u8> {
    vec![CLA, ins, 0x00, 0x00, lc]
}

/// `80 02 00 00 L` followed by the serialized root path.
pub fn encode_get_public_key(root: &DerivationPath) -> Vec<u8> {
    let path = root.to_bytes();
    // bounded by MAX_DEPTH, always fits Lc and a single packet
    let mut apdu = header(INS_GET_PUBLIC_KEY, path.len() as u8);
    apdu.extend_from_slice(&path);
    apdu
}

pub fn encode_get_version() -> Vec<u8> {
    header(INS_VERSION, 0)
}

pub fn encode_get_authorized_path() -> Vec<u8> {
    header(INS_GET_AUTHORIZED_PATH, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::path::{hard, MAX_DEPTH};

    #[test]
    fn test_get_public_key_apdu() {
        let apdu = encode_get_public_key(&DerivationPath::tezos_root());
        assert_eq!(
            apdu,
            vec![0x80, 0x02, 0x00, 0x00, 0x09, 0x02, 0x80, 0x00, 0x00, 0x2C, 0x80, 0x00, 0x06, 0xC1]
        );
        assert_eq!(apdu[4] as usize, apdu.len() - 5, "Lc must match payload length");
    }

    #[test]
    fn test_get_public_key_deepest_path_fits_one_packet() {
        let root = DerivationPath::new(vec![hard(7); MAX_DEPTH]).unwrap();
        let apdu = encode_get_public_key(&root);
        assert_eq!(apdu[4] as usize, 1 + 4 * MAX_DEPTH);
        assert_eq!(apdu.len(), 5 + 1 + 4 * MAX_DEPTH);
        assert!(apdu.len() <= crate::apdu::types::INIT_DATA_SIZE);
    }

    #[test]
    fn test_fixed_apdus() {
        assert_eq!(encode_get_version(), vec![0x80, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(encode_get_authorized_path(), vec![0x80, 0x0D, 0x00, 0x00, 0x00]);
    }
}
