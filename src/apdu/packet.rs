use super::{ApduError, types::*};
use crate::hid::Channel;

/// Build the single initialization packet carrying `apdu`.
///
/// Layout: channel id (2, BE), tag (1), sequence 0 (2, BE), total APDU
/// length (2, BE), then the APDU zero-padded to `PACKET_SIZE`.
pub fn encode_packet(apdu: &[u8]) -> Result<[u8; PACKET_SIZE], ApduError> {
    if apdu.len() > INIT_DATA_SIZE {
        return Err(ApduError::TooLong(apdu.len()));
    }
    let mut pkt = [0u8; PACKET_SIZE];
    pkt[0..2].copy_from_slice(&CHANNEL_ID.to_be_bytes());
    pkt[2] = TAG_APDU;
    pkt[3..5].copy_from_slice(&0u16.to_be_bytes());
    pkt[5..7].copy_from_slice(&(apdu.len() as u16).to_be_bytes());
    pkt[INIT_HEADER_SIZE..INIT_HEADER_SIZE + apdu.len()].copy_from_slice(apdu);
    Ok(pkt)
}

/// Frame `apdu` into one packet and write it. Multi-packet requests are
/// not supported; oversized APDUs are rejected before touching the channel.
pub(crate) fn write_apdu<C: Channel + ?Sized>(channel: &mut C, apdu: &[u8]) -> Result<(), ApduError> {
    let pkt = encode_packet(apdu)?;
    let written = channel.write(&pkt).map_err(ApduError::Write)?;
    if written != PACKET_SIZE {
        return Err(ApduError::ShortWrite {
            written,
            expected: PACKET_SIZE,
        });
    }
    tracing::trace!(len = apdu.len(), "APDU tx");
    Ok(())
}

fn read_packet<C: Channel + ?Sized>(channel: &mut C, seq: u16) -> Result<[u8; PACKET_SIZE], ApduError> {
    let mut pkt = [0u8; PACKET_SIZE];
    let got = channel
        .read(&mut pkt)
        .map_err(|source| ApduError::Read { seq, source })?;
    if got != PACKET_SIZE {
        return Err(ApduError::ShortRead {
            seq,
            got,
            expected: PACKET_SIZE,
        });
    }
    if pkt[2] != TAG_APDU {
        return Err(ApduError::BadTag { seq, got: pkt[2] });
    }
    let actual = u16::from_be_bytes([pkt[3], pkt[4]]);
    if actual != seq {
        return Err(ApduError::BadSequence {
            got: actual,
            expected: seq,
        });
    }
    Ok(pkt)
}

/// Read packets until the whole response is reassembled.
///
/// Returns the status word (last two bytes, BE) and the data before it.
pub(crate) fn read_apdu<C: Channel + ?Sized>(channel: &mut C) -> Result<(u16, Vec<u8>), ApduError> {
    let first = read_packet(channel, 0)?;
    let total = u16::from_be_bytes([first[5], first[6]]);
    if total == 0 {
        return Err(ApduError::InvalidLength(total));
    }
    let total = total as usize;

    let mut data = vec![0u8; total];
    let first_chunk = total.min(INIT_DATA_SIZE);
    data[..first_chunk].copy_from_slice(&first[INIT_HEADER_SIZE..INIT_HEADER_SIZE + first_chunk]);
    let mut offset = first_chunk;
    let mut seq: u16 = 1;

    while offset < total {
        let pkt = read_packet(channel, seq)?;
        let chunk = (total - offset).min(CONT_DATA_SIZE);
        data[offset..offset + chunk].copy_from_slice(&pkt[CONT_HEADER_SIZE..CONT_HEADER_SIZE + chunk]);
        offset += chunk;
        seq = seq.wrapping_add(1);
    }
    tracing::trace!(len = total, packets = seq, "APDU rx");

    if total < STATUS_WORD_SIZE {
        return Err(ApduError::MissingStatusWord);
    }
    let sw = u16::from_be_bytes([data[total - 2], data[total - 1]]);
    data.truncate(total - STATUS_WORD_SIZE);
    Ok((sw, data))
}
