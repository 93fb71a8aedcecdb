//! IEEE 802.11 Frame Control field readers and writers.

use dot11_macros::frame;

/// IEEE 802.11 frame type.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameType {
    /// Management frame.
    Management = 0b00,
    /// Control frame.
    Control = 0b01,
    /// Data frame.
    Data = 0b10,
    /// Extension frame.
    Extension = 0b11,
}

impl From<u8> for FrameType {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::Management,
            0b01 => Self::Control,
            0b10 => Self::Data,
            _ => Self::Extension,
        }
    }
}

impl From<FrameType> for u8 {
    fn from(value: FrameType) -> Self {
        value as u8
    }
}

/// IEEE 802.11 management frame subtype.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MgmtSubtype {
    /// Association Request.
    AssociationRequest = 0,
    /// Association Response.
    AssociationResponse = 1,
    /// Reassociation Request.
    ReassociationRequest = 2,
    /// Reassociation Response.
    ReassociationResponse = 3,
    /// Probe Request.
    ProbeRequest = 4,
    /// Probe Response.
    ProbeResponse = 5,
    /// Timing Advertisement.
    TimingAdvertisement = 6,
    /// Beacon.
    Beacon = 8,
    /// ATIM.
    Atim = 9,
    /// Disassociation.
    Disassociation = 10,
    /// Authentication.
    Authentication = 11,
    /// Deauthentication.
    Deauthentication = 12,
    /// Action.
    Action = 13,
    /// Action No Ack.
    ActionNoAck = 14,
    /// Reserved subtype.
    Unknown = 15,
}

impl From<u8> for MgmtSubtype {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::AssociationRequest,
            1 => Self::AssociationResponse,
            2 => Self::ReassociationRequest,
            3 => Self::ReassociationResponse,
            4 => Self::ProbeRequest,
            5 => Self::ProbeResponse,
            6 => Self::TimingAdvertisement,
            8 => Self::Beacon,
            9 => Self::Atim,
            10 => Self::Disassociation,
            11 => Self::Authentication,
            12 => Self::Deauthentication,
            13 => Self::Action,
            14 => Self::ActionNoAck,
            _ => Self::Unknown,
        }
    }
}

impl From<MgmtSubtype> for u8 {
    fn from(value: MgmtSubtype) -> Self {
        value as u8
    }
}

#[frame]
#[derive(Debug, Clone, Copy)]
/// A reader/writer for the IEEE 802.11 Frame Control field.
pub struct FrameControl {
    /// Return the protocol version field value.
    #[bits(2)]
    protocol_version: u8,
    /// Return the [`FrameType`].
    #[bits(2)]
    #[into(FrameType)]
    frame_type: u8,
    /// Return the raw subtype field value. Its meaning depends on the frame
    /// type, see [`FrameControl::mgmt_subtype`].
    #[bits(4)]
    subtype: u8,
    /// Returns `true` when the To DS field is set.
    to_ds: bool,
    /// Returns `true` when the From DS field is set.
    from_ds: bool,
    /// Returns `true` when the More Fragments field is set.
    more_fragments: bool,
    /// Returns `true` when the Retry field is set.
    retry: bool,
    /// Returns `true` when the Power Management field is set.
    power_management: bool,
    /// Returns `true` when the More Data field is set.
    more_data: bool,
    /// Returns `true` when the Protected Frame field is set.
    protected: bool,
    /// Returns `true` when the +HTC/Order field is set. For management frames
    /// this means an HT Control field follows the sequence control.
    order: bool,
}

impl<T: AsRef<[u8]>> FrameControl<T> {
    /// Return the [`MgmtSubtype`] if this is a management frame.
    pub fn mgmt_subtype(&self) -> Option<MgmtSubtype> {
        match self.frame_type() {
            FrameType::Management => Some(MgmtSubtype::from(self.subtype())),
            _ => None,
        }
    }
}

impl<T: AsRef<[u8]>> core::fmt::Display for FrameControl<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Frame Control")?;
        writeln!(f, "  version: {}", self.protocol_version())?;
        writeln!(f, "  type: {:?}", self.frame_type())?;
        match self.mgmt_subtype() {
            Some(subtype) => writeln!(f, "  subtype: {subtype:?}")?,
            None => writeln!(f, "  subtype: {}", self.subtype())?,
        }
        writeln!(f, "  to ds: {}", self.to_ds() as usize)?;
        writeln!(f, "  from ds: {}", self.from_ds() as usize)?;
        writeln!(f, "  more fragments: {}", self.more_fragments() as usize)?;
        writeln!(f, "  retry: {}", self.retry() as usize)?;
        writeln!(f, "  power management: {}", self.power_management() as usize)?;
        writeln!(f, "  more data: {}", self.more_data() as usize)?;
        writeln!(f, "  protected: {}", self.protected() as usize)?;
        writeln!(f, "  order: {}", self.order() as usize)?;
        Ok(())
    }
}
