use crate::{Error, Result};
use crate::{FrameType, MacAddress, MgmtFrame, MgmtHeader, MgmtSubtype, ReasonCode, ReasonCodeBody};

/// A high-level representation of an IEEE 802.11 Disassociation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisassocFrameRepr {
    /// Address 1.
    pub dst_address: MacAddress,
    /// Address 2.
    pub src_address: MacAddress,
    /// Address 3.
    pub bssid: MacAddress,
    /// The 12-bit sequence number.
    pub sequence_number: u16,
    /// The reason code.
    pub reason_code: ReasonCode,
    /// Whether the Protected Frame bit is set.
    pub protected: bool,
}

impl DisassocFrameRepr {
    /// Parse a Disassociation frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is not a Disassociation frame or if its
    /// body is too short to hold a reason code.
    pub fn parse<T: AsRef<[u8]> + ?Sized>(reader: &MgmtFrame<&T>) -> Result<Self> {
        let fc = reader.frame_control();

        if fc.mgmt_subtype() != Some(MgmtSubtype::Disassociation) {
            return Err(Error);
        }

        let body = ReasonCodeBody::new(reader.body())?;

        Ok(Self {
            dst_address: reader.dst_address(),
            src_address: reader.src_address(),
            bssid: reader.bssid(),
            sequence_number: reader.sequence_number(),
            reason_code: body.reason_code(),
            protected: fc.protected(),
        })
    }

    /// Return the length of the frame when emitted into a buffer.
    pub fn buffer_len(&self) -> usize {
        MgmtHeader::<&[u8]>::size() + ReasonCodeBody::<&[u8]>::size()
    }

    /// Emit the frame into a buffer of at least [`Self::buffer_len`] octets.
    pub fn emit(&self, frame: &mut MgmtFrame<&'_ mut [u8]>) {
        let mut fc = frame.frame_control_mut();
        fc.set_protocol_version(0);
        fc.set_frame_type(FrameType::Management);
        fc.set_subtype(MgmtSubtype::Disassociation.into());
        fc.set_to_ds(false);
        fc.set_from_ds(false);
        fc.set_more_fragments(false);
        fc.set_retry(false);
        fc.set_power_management(false);
        fc.set_more_data(false);
        fc.set_protected(self.protected);
        fc.set_order(false);

        let mut header = frame.header_mut();
        header.set_duration(0);
        header.set_addr1(self.dst_address);
        header.set_addr2(self.src_address);
        header.set_addr3(self.bssid);
        header.set_sequence_control((self.sequence_number & 0x0fff) << 4);

        ReasonCodeBody::new_unchecked(frame.body_mut()).set_reason_code(self.reason_code);
    }
}
