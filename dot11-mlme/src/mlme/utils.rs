use crate::frame::{FrameType, MacAddress, MgmtFrame};

/// Checks if the current frame is intended for us: group addressed frames
/// are, individually addressed ones only when sent to our own address.
pub fn is_frame_for_us(self_address: &MacAddress, frame: &MgmtFrame<&'_ [u8]>) -> bool {
    // Check if this is a management frame, otherwise drop
    if frame.frame_control().frame_type() != FrameType::Management {
        return false;
    }

    let dst = frame.dst_address();
    dst.is_group() || dst == *self_address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{DisassocFrameRepr, ReasonCode};

    fn frame_to(dst: MacAddress) -> std::vec::Vec<u8> {
        let repr = DisassocFrameRepr {
            dst_address: dst,
            src_address: MacAddress([0x02, 0, 0, 0, 0, 1]),
            bssid: MacAddress([0x02, 0, 0, 0, 0, 1]),
            sequence_number: 1,
            reason_code: ReasonCode::UNSPECIFIED,
            protected: false,
        };
        let mut buffer = vec![0; repr.buffer_len()];
        repr.emit(&mut MgmtFrame::new_unchecked(&mut buffer[..]));
        buffer
    }

    #[test]
    fn frame_for_us() {
        let me = MacAddress([0x02, 0, 0, 0, 0, 0x10]);

        let data = frame_to(me);
        assert!(is_frame_for_us(&me, &MgmtFrame::new(&data[..]).unwrap()));

        let data = frame_to(MacAddress::BROADCAST);
        assert!(is_frame_for_us(&me, &MgmtFrame::new(&data[..]).unwrap()));

        let data = frame_to(MacAddress([0x02, 0, 0, 0, 0, 0x11]));
        assert!(!is_frame_for_us(&me, &MgmtFrame::new(&data[..]).unwrap()));
    }
}
