use dot11_cat::FrameParser;

use strip_ansi_escapes::strip;

#[test]
fn disassociation() {
    let input = "a0003a0100112233445566778899aabb66778899aabb40060800";
    let output = String::from_utf8(strip(FrameParser::parse_hex(input).unwrap())).unwrap();
    assert_eq!(
        output,
        "Frame Control
  frame type: Management
  subtype: Disassociation
  version: 0
  to ds: 0
  from ds: 0
  more fragments: 0
  retry: 0
  power management: 0
  more data: 0
  protected: 0
  order: 0
Duration
  duration: 314
Addressing
  dst addr: 00:11:22:33:44:55
  src addr: 66:77:88:99:aa:bb
  bssid: 66:77:88:99:aa:bb
Sequence Control
  sequence number: 100
  fragment number: 0
Reason Code
  reason code: 8 (disassociated, leaving BSS)
"
    );
}

#[test]
fn protected_broadcast_disassociation_with_mic() {
    let input = "a0480000ffffffffffff020000000001020000000001f0ff06004c1004000000000000000102030405060708";
    let output = String::from_utf8(strip(FrameParser::parse_hex(input).unwrap())).unwrap();
    assert_eq!(
        output,
        "Frame Control
  frame type: Management
  subtype: Disassociation
  version: 0
  to ds: 0
  from ds: 0
  more fragments: 0
  retry: 1
  power management: 0
  more data: 0
  protected: 1
  order: 0
Duration
  duration: 0
Addressing
  dst addr: ff:ff:ff:ff:ff:ff (broadcast)
  src addr: 02:00:00:00:00:01
  bssid: 02:00:00:00:00:01
Sequence Control
  sequence number: 4095
  fragment number: 0
Reason Code
  reason code: 6 (class 2 frame from non-authenticated STA)
Elements
  [4c, 10, 4, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8]
"
    );
}

#[test]
fn other_subtype_body_as_hex() {
    // Action frame, category 3 (block ack).
    let input = "d0003a0100112233445566778899aabb66778899aabb5006030100";
    let output = String::from_utf8(strip(FrameParser::parse_hex(input).unwrap())).unwrap();
    assert!(output.contains("  subtype: Action\n"));
    assert!(output.contains("  sequence number: 101\n"));
    assert!(output.ends_with("Body\n  [3, 1, 0]\n"));
    assert!(!output.contains("Reason Code"));
}

#[test]
fn fcs() {
    let input = "a0003a0100112233445566778899aabb66778899aabb40060800";
    let mut data = hex::decode(input).unwrap();
    data.extend_from_slice(&[0; 4]);
    let fcs = dot11_frame::MgmtFrameWithFcs::new_unchecked(&data[..]).calculate_fcs();
    let len = data.len();
    data[len - 4..].copy_from_slice(&fcs.to_le_bytes());

    let output = String::from_utf8(strip(
        FrameParser::parse_hex_with_fcs(&hex::encode(&data)).unwrap(),
    ))
    .unwrap();
    assert!(output.starts_with("Frame Control\n"));
    assert!(output.ends_with(&format!("FCS\n  fcs: {fcs:#010x} (valid)\n")));

    // Corrupt the FCS.
    let last = data.len() - 1;
    data[last] ^= 0xff;
    assert!(FrameParser::parse_hex_with_fcs(&hex::encode(&data)).is_err());
}

#[test]
fn invalid_input() {
    assert!(FrameParser::parse_hex("zz").is_err());
    // Data frame.
    assert!(FrameParser::parse_hex("08003a0100112233445566778899aabb66778899aabb4006").is_err());
    // Too short.
    assert!(FrameParser::parse_hex("a0003a01001122334455").is_err());
}
