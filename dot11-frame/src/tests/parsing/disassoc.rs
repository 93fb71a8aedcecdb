use crate::*;

#[test]
fn parse_disassoc_from_ap() {
    let frame = hex::decode("a0003a0100112233445566778899aabb66778899aabb40060800").unwrap();
    let frame = MgmtFrame::new(&frame[..]).unwrap();

    test!(
        frame.frame_control().protocol_version() => 0,
        frame.frame_control().frame_type() => FrameType::Management,
        frame.frame_control().mgmt_subtype() => Some(MgmtSubtype::Disassociation),
        frame.frame_control().to_ds() => false,
        frame.frame_control().from_ds() => false,
        frame.frame_control().retry() => false,
        frame.frame_control().protected() => false,
        frame.frame_control().order() => false,
        frame.header().duration() => 314,
        frame.dst_address() => MacAddress([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
        frame.src_address() => MacAddress([0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]),
        frame.bssid() => MacAddress([0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]),
        frame.sequence_number() => 100,
        frame.body().len() => 2,
    );

    let body = ReasonCodeBody::new(frame.body()).unwrap();
    test!(
        body.reason_code() => ReasonCode::DISASSOC_LEAVING_BSS,
        body.elements().len() => 0,
    );
}

#[test]
fn parse_protected_broadcast_disassoc() {
    // Retry and Protected set, broadcast destination, reason 6 followed by
    // an 18 byte Management MIC element.
    let frame = hex::decode(
        "a0480000ffffffffffff020000000001020000000001f0ff06004c1004000000000000000102030405060708",
    )
    .unwrap();
    let frame = MgmtFrame::new(&frame[..]).unwrap();

    test!(
        frame.frame_control().mgmt_subtype() => Some(MgmtSubtype::Disassociation),
        frame.frame_control().retry() => true,
        frame.frame_control().protected() => true,
        frame.dst_address() => MacAddress::BROADCAST,
        frame.dst_address().is_group() => true,
        frame.sequence_number() => 0x0fff,
    );

    let body = ReasonCodeBody::new(frame.body()).unwrap();
    test!(
        body.reason_code() => ReasonCode::CLASS2_FRAME_FROM_NONAUTH_STA,
        body.elements()[0] => 0x4c,
        body.elements()[1] => 16,
        body.elements().len() => 18,
    );
}

#[test]
fn unknown_reason_is_preserved() {
    let frame = hex::decode("a0000000001122334455667788990a0b667788990a0b0000ff00").unwrap();
    let frame = MgmtFrame::new(&frame[..]).unwrap();
    let body = frame.reason_code_body().unwrap();

    test!(
        body.reason_code() => ReasonCode(255),
        body.reason_code().name() => None,
    );
    assert_eq!(format!("{}", body.reason_code()), "255 (unknown)");
}
