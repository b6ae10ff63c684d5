use std::collections::VecDeque;

use ledger_check::apdu::{exchange, types::*, ApduError, StatusError};
use ledger_check::hid::{Channel, HidError};

#[derive(Default)]
struct MockChannel {
    written: Vec<Vec<u8>>,
    incoming: VecDeque<[u8; 64]>,
}

impl Channel for MockChannel {
    fn write(&mut self, data: &[u8]) -> Result<usize, HidError> {
        self.written.push(data.to_vec());
        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, HidError> {
        let pkt = self
            .incoming
            .pop_front()
            .ok_or_else(|| HidError::Read("device closed".into()))?;
        buf[..64].copy_from_slice(&pkt);
        Ok(64)
    }
}

fn response_packets(response: &[u8]) -> VecDeque<[u8; 64]> {
    let mut packets = VecDeque::new();
    let mut pkt = [0u8; 64];
    pkt[0..2].copy_from_slice(&[0x01, 0x01]);
    pkt[2] = 0x05;
    pkt[5..7].copy_from_slice(&(response.len() as u16).to_be_bytes());
    let first = response.len().min(57);
    pkt[7..7 + first].copy_from_slice(&response[..first]);
    packets.push_back(pkt);

    for (i, chunk) in response[first..].chunks(59).enumerate() {
        let mut cpkt = [0u8; 64];
        cpkt[0..2].copy_from_slice(&[0x01, 0x01]);
        cpkt[2] = 0x05;
        cpkt[3..5].copy_from_slice(&(i as u16 + 1).to_be_bytes());
        cpkt[5..5 + chunk.len()].copy_from_slice(chunk);
        packets.push_back(cpkt);
    }
    packets
}

#[test]
fn test_exchange_writes_single_framed_packet() {
    let mut ch = MockChannel {
        incoming: response_packets(&[0x90, 0x00]),
        ..Default::default()
    };
    let apdu: Vec<u8> = (0..57u8).collect();
    exchange(&mut ch, &apdu).unwrap();

    assert_eq!(ch.written.len(), 1, "exactly one packet must be written");
    let pkt = &ch.written[0];
    assert_eq!(pkt.len(), PACKET_SIZE);
    assert_eq!(u16::from_be_bytes([pkt[0], pkt[1]]), CHANNEL_ID);
    assert_eq!(pkt[2], TAG_APDU);
    assert_eq!(u16::from_be_bytes([pkt[3], pkt[4]]), 0);
    assert_eq!(u16::from_be_bytes([pkt[5], pkt[6]]), 57);
    assert_eq!(&pkt[7..64], &apdu[..]);
}

#[test]
fn test_exchange_rejects_oversized_request() {
    let mut ch = MockChannel {
        incoming: response_packets(&[0x90, 0x00]),
        ..Default::default()
    };
    let res = exchange(&mut ch, &[0u8; 58]);
    assert!(matches!(res, Err(ApduError::TooLong(58))));
    assert!(ch.written.is_empty(), "nothing may be written");
    assert_eq!(ch.incoming.len(), 1, "nothing may be read");
}

#[test]
fn test_exchange_reassembles_long_response() {
    let mut response: Vec<u8> = (0..=255u8).cycle().take(200).collect();
    response.extend_from_slice(&[0x90, 0x00]);
    let mut ch = MockChannel {
        incoming: response_packets(&response),
        ..Default::default()
    };
    assert_eq!(ch.incoming.len(), 4);

    let resp = exchange(&mut ch, &[0x80, 0x00, 0x00, 0x00, 0x00]).unwrap();
    assert_eq!(resp.status, 0x9000);
    assert_eq!(resp.data, &response[..200]);
    assert_eq!(resp.into_result().unwrap().len(), 200);
}

#[test]
fn test_exchange_maps_status_word() {
    let mut ch = MockChannel {
        incoming: response_packets(&[0x6B, 0x00]),
        ..Default::default()
    };
    let resp = exchange(&mut ch, &[0x80, 0x00, 0x00, 0x00, 0x00]).unwrap();
    assert_eq!(resp.status, 0x6B00);
    assert_eq!(resp.into_result(), Err(StatusError::WrongParameter));

    let mut ch = MockChannel {
        incoming: response_packets(&[0x6A, 0x80]),
        ..Default::default()
    };
    let resp = exchange(&mut ch, &[0x80, 0x00, 0x00, 0x00, 0x00]).unwrap();
    assert_eq!(resp.into_result(), Err(StatusError::Unknown(0x6A80)));
}

#[test]
fn test_exchange_rejects_sequence_gap() {
    let response = vec![0x33u8; 150];
    let mut packets = response_packets(&response);
    packets[2][3..5].copy_from_slice(&3u16.to_be_bytes());
    let mut ch = MockChannel {
        incoming: packets,
        ..Default::default()
    };
    let res = exchange(&mut ch, &[0x80, 0x00, 0x00, 0x00, 0x00]);
    assert!(matches!(res, Err(ApduError::BadSequence { got: 3, expected: 2 })));
}

#[test]
fn test_exchange_fails_when_device_goes_away() {
    let mut ch = MockChannel::default();
    let res = exchange(&mut ch, &[0x80, 0x00, 0x00, 0x00, 0x00]);
    assert!(matches!(res, Err(ApduError::Read { seq: 0, .. })));
}
