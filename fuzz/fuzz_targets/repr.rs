#![no_main]

use dot11_frame::{DisassocFrameRepr, MgmtFrame};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|repr: DisassocFrameRepr| {
    let mut buffer = vec![0; repr.buffer_len()];
    repr.emit(&mut MgmtFrame::new_unchecked(&mut buffer[..]));

    let frame = MgmtFrame::new(&buffer[..]).unwrap();
    let parsed = DisassocFrameRepr::parse(&frame).unwrap();
    assert_eq!(parsed.sequence_number, repr.sequence_number & 0x0fff);
    assert_eq!(parsed.reason_code, repr.reason_code);
    assert_eq!(parsed.src_address, repr.src_address);
});
