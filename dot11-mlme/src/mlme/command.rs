use crate::frame::{MacAddress, MgmtSubtype, ReasonCode};
use crate::peer::CleanupTrigger;

/// Tells the MLME that a peer disassociated from us.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisassocIndication {
    pub peer_address: MacAddress,
    /// The received reason code, truncated to 8 bits.
    pub reason_code: u8,
    /// Always [`CleanupTrigger::PeerDisassoc`] for received frames.
    pub trigger: CleanupTrigger,
    pub pe_session_id: u8,
}

/// Result codes reported to the SME.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SmeResultCode {
    Success,
    /// The reassociation was refused, the session went back to its previous
    /// state.
    ReassocRefused,
}

/// Tells the SME how a reassociation ended.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReassocConfirm {
    pub sme_session_id: u8,
    pub result: SmeResultCode,
    pub reason_code: ReasonCode,
}

/// Link loss diagnostics for station sessions.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LostLinkInfo {
    pub sme_session_id: u8,
    /// RSSI of the frame that tore down the link, in dBm.
    pub rssi: i8,
}

/// An unprotected management frame received on a session with management
/// frame protection. The SME is expected to start an SA Query.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct UnprotectedMgmtFrameIndication<'a> {
    pub sme_session_id: u8,
    pub subtype: MgmtSubtype,
    /// The complete frame, header and body.
    pub frame: &'a [u8],
}
