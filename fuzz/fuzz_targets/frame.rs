#![no_main]

use dot11_frame::{DisassocFrameRepr, MgmtFrame, MgmtFrameWithFcs};

use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: &[u8]| -> Corpus {
    if data.len() > 2304 {
        return Corpus::Reject;
    }

    if let Ok(frame) = MgmtFrame::new(data) {
        let _ = DisassocFrameRepr::parse(&frame);
        let _ = frame.ht_control();
        if let Some(body) = frame.reason_code_body() {
            let _ = body.elements();
        }
    }

    if let Ok(with_fcs) = MgmtFrameWithFcs::new(data) {
        let _ = with_fcs.frame();
    }

    Corpus::Keep
});
