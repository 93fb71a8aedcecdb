//! IEEE 802.11 management frame readers.

use dot11_macros::frame;

use crate::{Error, Result};
use crate::{FrameControl, FrameType, MacAddress, MgmtSubtype};

mod disassoc;
pub use disassoc::*;

/// Length of the HT Control field present when the Order bit is set.
const HT_CONTROL_LEN: usize = 4;
/// Length of the trailing Frame Check Sequence.
const FCS_LEN: usize = 4;

#[frame]
#[derive(Debug, Clone, Copy)]
/// A reader/writer for the fixed part of an IEEE 802.11 management frame
/// header.
pub struct MgmtHeader {
    /// Return a [`FrameControl`] reader.
    #[bytes(2)]
    frame_control: FrameControl,
    /// Return the duration field value.
    duration: u16,
    /// Return address 1, the receiver (destination) address.
    #[bytes(6)]
    #[into(MacAddress)]
    addr1: &[u8],
    /// Return address 2, the transmitter (source) address.
    #[bytes(6)]
    #[into(MacAddress)]
    addr2: &[u8],
    /// Return address 3, the BSSID.
    #[bytes(6)]
    #[into(MacAddress)]
    addr3: &[u8],
    /// Return the raw sequence control field value.
    sequence_control: u16,
}

/// A reader/writer for an IEEE 802.11 management frame, without FCS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MgmtFrame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> MgmtFrame<T> {
    /// Create a new [`MgmtFrame`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short to contain the header, if
    /// the protocol version is not 0 or if this is not a management frame.
    pub fn new(buffer: T) -> Result<Self> {
        let frame = Self::new_unchecked(buffer);

        if !frame.check_len() {
            return Err(Error);
        }

        let fc = frame.frame_control();

        if fc.protocol_version() != 0 {
            return Err(Error);
        }

        if fc.frame_type() != FrameType::Management {
            return Err(Error);
        }

        Ok(frame)
    }

    /// Returns `false` if the buffer is too short to contain the header.
    pub fn check_len(&self) -> bool {
        let len = self.buffer.as_ref().len();

        if len < MgmtHeader::<&[u8]>::size() {
            return false;
        }

        len >= self.header_len()
    }

    /// Create a new [`MgmtFrame`] reader/writer from a given buffer without
    /// length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return a [`FrameControl`] reader.
    pub fn frame_control(&self) -> FrameControl<&'_ [u8]> {
        FrameControl::new_unchecked(&self.buffer.as_ref()[..FrameControl::<&[u8]>::size()])
    }

    /// Return a [`MgmtHeader`] reader.
    pub fn header(&self) -> MgmtHeader<&'_ [u8]> {
        MgmtHeader::new_unchecked(&self.buffer.as_ref()[..MgmtHeader::<&[u8]>::size()])
    }

    /// Return the destination address (address 1).
    pub fn dst_address(&self) -> MacAddress {
        self.header().addr1()
    }

    /// Return the source address (address 2).
    pub fn src_address(&self) -> MacAddress {
        self.header().addr2()
    }

    /// Return the BSSID (address 3).
    pub fn bssid(&self) -> MacAddress {
        self.header().addr3()
    }

    /// Return the sequence number.
    pub fn sequence_number(&self) -> u16 {
        self.header().sequence_control() >> 4
    }

    /// Return the fragment number.
    pub fn fragment_number(&self) -> u8 {
        (self.header().sequence_control() & 0x0f) as u8
    }

    /// Return the HT Control field, if present.
    pub fn ht_control(&self) -> Option<u32> {
        if !self.frame_control().order() {
            return None;
        }

        let start = MgmtHeader::<&[u8]>::size();
        let b = &self.buffer.as_ref()[start..start + HT_CONTROL_LEN];
        Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Return the length of the header in octets, including the HT Control
    /// field when present.
    pub fn header_len(&self) -> usize {
        MgmtHeader::<&[u8]>::size()
            + if self.frame_control().order() {
                HT_CONTROL_LEN
            } else {
                0
            }
    }
}

impl<'f, T: AsRef<[u8]> + ?Sized> MgmtFrame<&'f T> {
    /// Return the frame body.
    pub fn body(&self) -> &'f [u8] {
        &self.buffer.as_ref()[self.header_len()..]
    }

    /// Return the complete frame, header and body.
    pub fn as_bytes(&self) -> &'f [u8] {
        self.buffer.as_ref()
    }

    /// Return a [`ReasonCodeBody`] reader when this is a Disassociation or
    /// Deauthentication frame whose body holds a reason code.
    pub fn reason_code_body(&self) -> Option<ReasonCodeBody<&'f [u8]>> {
        match self.frame_control().mgmt_subtype() {
            Some(MgmtSubtype::Disassociation | MgmtSubtype::Deauthentication) => {
                ReasonCodeBody::new(self.body()).ok()
            }
            _ => None,
        }
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> MgmtFrame<T> {
    /// Return a [`FrameControl`] writer.
    pub fn frame_control_mut(&mut self) -> FrameControl<&'_ mut [u8]> {
        FrameControl::new_unchecked(&mut self.buffer.as_mut()[..FrameControl::<&[u8]>::size()])
    }

    /// Return a [`MgmtHeader`] writer.
    pub fn header_mut(&mut self) -> MgmtHeader<&'_ mut [u8]> {
        MgmtHeader::new_unchecked(&mut self.buffer.as_mut()[..MgmtHeader::<&[u8]>::size()])
    }

    /// Return the frame body for writing.
    pub fn body_mut(&mut self) -> &mut [u8] {
        let start = self.header_len();
        &mut self.buffer.as_mut()[start..]
    }
}

/// A management frame still carrying its trailing Frame Check Sequence (FCS).
pub struct MgmtFrameWithFcs<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> MgmtFrameWithFcs<T> {
    /// Create a new [`MgmtFrameWithFcs`] from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short or the FCS does not match.
    pub fn new(buffer: T) -> Result<Self> {
        let frame = Self::new_unchecked(buffer);

        if !frame.check_len() {
            return Err(Error);
        }

        if !frame.check_fcs() {
            return Err(Error);
        }

        Ok(frame)
    }

    /// Check the length of the frame.
    pub fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= FCS_LEN
    }

    /// Calculate the Frame Check Sequence (FCS) of the frame.
    #[inline]
    pub fn calculate_fcs(&self) -> u32 {
        // IEEE 802.3 CRC-32, computed over the header and the body.
        crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(self.content())
    }

    /// Check the Frame Check Sequence (FCS) of the frame.
    #[inline]
    pub fn check_fcs(&self) -> bool {
        self.calculate_fcs() == self.fcs()
    }

    /// Create a new [`MgmtFrameWithFcs`] without checking the FCS.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the content of the frame, excluding the FCS.
    pub fn content(&self) -> &[u8] {
        let len = self.buffer.as_ref().len();
        &self.buffer.as_ref()[..len - FCS_LEN]
    }

    /// Return the Frame Check Sequence (FCS) of the frame.
    pub fn fcs(&self) -> u32 {
        let b = &self.buffer.as_ref()[self.buffer.as_ref().len() - FCS_LEN..];
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Return a management frame reader over the content, excluding the FCS.
    pub fn frame(&self) -> Result<MgmtFrame<&'_ [u8]>> {
        MgmtFrame::new(self.content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReasonCode;

    const DISASSOC: &str = "a0003a0100112233445566778899aabb66778899aabb40060800";

    #[test]
    fn header_fields() {
        let data = hex::decode(DISASSOC).unwrap();
        let frame = MgmtFrame::new(&data[..]).unwrap();

        assert_eq!(frame.header().duration(), 314);
        assert_eq!(
            frame.dst_address(),
            MacAddress([0x00, 0x11, 0x22, 0x33, 0x44, 0x55])
        );
        assert_eq!(
            frame.src_address(),
            MacAddress([0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb])
        );
        assert_eq!(frame.bssid(), frame.src_address());
        assert_eq!(frame.sequence_number(), 100);
        assert_eq!(frame.fragment_number(), 0);
        assert_eq!(frame.ht_control(), None);
        assert_eq!(frame.header_len(), 24);
        assert_eq!(frame.body(), &[0x08, 0x00]);
        assert_eq!(
            frame.reason_code_body().unwrap().reason_code(),
            ReasonCode::DISASSOC_LEAVING_BSS
        );
    }

    #[test]
    fn ht_control_shifts_body() {
        // Order bit set: 4 bytes of HT Control precede the body.
        let data = hex::decode(
            "a0803a0100112233445566778899aabb66778899aabb4006aabbccdd0300",
        )
        .unwrap();
        let frame = MgmtFrame::new(&data[..]).unwrap();

        assert_eq!(frame.header_len(), 28);
        assert_eq!(frame.ht_control(), Some(0xddccbbaa));
        assert_eq!(
            frame.reason_code_body().unwrap().reason_code(),
            ReasonCode::DEAUTH_LEAVING_BSS
        );
    }

    #[test]
    fn rejects_short_and_foreign_frames() {
        let data = hex::decode(DISASSOC).unwrap();
        assert!(MgmtFrame::new(&data[..23]).is_err());

        // Data frame type.
        let mut data_frame = data.clone();
        data_frame[0] = 0x08;
        assert!(MgmtFrame::new(&data_frame[..]).is_err());

        // Protocol version 1.
        let mut bad_version = data.clone();
        bad_version[0] |= 0x01;
        assert!(MgmtFrame::new(&bad_version[..]).is_err());

        // Order bit set but no room for HT Control.
        let mut truncated = data;
        truncated[1] |= 0x80;
        assert!(MgmtFrame::new(&truncated[..26]).is_err());
    }

    #[test]
    fn reason_body_requires_two_octets() {
        let data = hex::decode(DISASSOC).unwrap();
        let frame = MgmtFrame::new(&data[..25]).unwrap();
        assert!(frame.reason_code_body().is_none());
    }

    #[test]
    fn fcs() {
        // CRC-32 check value over "123456789".
        let mut data = std::vec::Vec::from(&b"123456789"[..]);
        data.extend_from_slice(&0xcbf43926u32.to_le_bytes());
        let frame = MgmtFrameWithFcs::new(&data[..]).unwrap();
        assert_eq!(frame.calculate_fcs(), 0xcbf43926);
        assert_eq!(frame.content(), b"123456789");

        let mut corrupted = data.clone();
        corrupted[0] ^= 0x01;
        assert!(MgmtFrameWithFcs::new(&corrupted[..]).is_err());
    }

    #[test]
    fn fcs_then_frame() {
        let mut data = hex::decode(DISASSOC).unwrap();
        data.extend_from_slice(&[0; 4]);
        let fcs = MgmtFrameWithFcs::new_unchecked(&data[..]).calculate_fcs();
        let len = data.len();
        data[len - 4..].copy_from_slice(&fcs.to_le_bytes());

        let with_fcs = MgmtFrameWithFcs::new(&data[..]).unwrap();
        let frame = with_fcs.frame().unwrap();
        assert_eq!(frame.sequence_number(), 100);
    }
}
