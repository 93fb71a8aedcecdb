use super::*;

mod parsing;

#[test]
fn emit_disassoc() {
    let repr = DisassocFrameRepr {
        dst_address: MacAddress([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
        src_address: MacAddress([0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]),
        bssid: MacAddress([0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]),
        sequence_number: 100,
        reason_code: ReasonCode::DISASSOC_LEAVING_BSS,
        protected: false,
    };

    let mut buffer = vec![0; repr.buffer_len()];
    repr.emit(&mut MgmtFrame::new_unchecked(&mut buffer[..]));

    assert_eq!(
        buffer,
        [
            0xa0, 0x00, 0x00, 0x00, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99,
            0xaa, 0xbb, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0x40, 0x06, 0x08, 0x00,
        ]
    );

    let frame = MgmtFrame::new(&buffer[..]).unwrap();
    assert_eq!(DisassocFrameRepr::parse(&frame).unwrap(), repr);
}

#[test]
fn emit_protected_disassoc() {
    let repr = DisassocFrameRepr {
        dst_address: MacAddress::BROADCAST,
        src_address: MacAddress([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]),
        bssid: MacAddress([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]),
        sequence_number: 0x1fff,
        reason_code: ReasonCode::INACTIVITY,
        protected: true,
    };

    let mut buffer = vec![0; repr.buffer_len()];
    repr.emit(&mut MgmtFrame::new_unchecked(&mut buffer[..]));

    let frame = MgmtFrame::new(&buffer[..]).unwrap();
    assert!(frame.frame_control().protected());
    assert!(frame.dst_address().is_broadcast());
    // Sequence numbers are 12 bits wide.
    assert_eq!(frame.sequence_number(), 0x0fff);
    assert_eq!(frame.fragment_number(), 0);
}

#[test]
fn parse_rejects_other_subtypes() {
    // Deauthentication carries the same body but is not a Disassociation.
    let data = hex::decode("c0003a0100112233445566778899aabb66778899aabb40060300").unwrap();
    let frame = MgmtFrame::new(&data[..]).unwrap();
    assert!(DisassocFrameRepr::parse(&frame).is_err());
}
