//! Per-session state the disassociation handler reads and updates.

use heapless::Vec;

use crate::constants::{DISASSOC_LOG_INTERVAL, MAX_REASSOC_RSP_LEN};
use crate::frame::MacAddress;

/// The role the local device plays in a session.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemRole {
    /// Non-AP station.
    Station,
    /// Access point.
    AccessPoint,
    /// BT-AMP station, handled like [`SystemRole::Station`].
    BtAmpStation,
    /// BT-AMP access point, handled like [`SystemRole::AccessPoint`].
    BtAmpAccessPoint,
    /// Member of an independent BSS.
    Ibss,
    #[default]
    Unknown,
}

impl SystemRole {
    /// Returns `true` for the access point roles.
    pub fn is_ap(&self) -> bool {
        matches!(self, Self::AccessPoint | Self::BtAmpAccessPoint)
    }

    /// Returns `true` for the non-AP station roles.
    pub fn is_station(&self) -> bool {
        matches!(self, Self::Station | Self::BtAmpStation)
    }
}

/// Connection state as tracked by the station management entity (SME).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SmeState {
    #[default]
    Offline,
    Idle,
    WaitJoin,
    WaitAuth,
    WaitAssoc,
    WaitReassoc,
    /// Reassociating after the link to the current AP failed.
    WaitReassocLinkFail,
    WaitDisassoc,
    WaitDeauth,
    Connected,
}

impl SmeState {
    /// Returns `true` while a connection is still being set up.
    pub fn is_establishing(&self) -> bool {
        matches!(
            self,
            Self::WaitJoin | Self::WaitAuth | Self::WaitAssoc | Self::WaitReassoc
        )
    }

    /// Returns `true` while a locally initiated teardown is outstanding.
    pub fn is_tearing_down(&self) -> bool {
        matches!(self, Self::WaitDisassoc | Self::WaitDeauth)
    }

    /// Returns `true` while a reassociation is ongoing.
    pub fn is_reassociating(&self) -> bool {
        matches!(self, Self::WaitReassoc | Self::WaitReassocLinkFail)
    }
}

/// MLME state, used both for sessions and for peers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MlmeState {
    #[default]
    Offline,
    Idle,
    BssStarted,
    WaitProbeResponse,
    WaitJoinBeacon,
    Joined,
    WaitAuthFrame2,
    WaitAuthFrame4,
    WaitAssocResponse,
    WaitReassocResponse,
    WaitAssocConfirm,
    LinkEstablished,
    WaitAddStaResponse,
    WaitDeleteStaResponse,
    WaitDeleteBssResponse,
}

/// Channel switch state of a session.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelSwitchState {
    #[default]
    Idle,
    InProgress,
}

/// A buffered Reassociation Response, kept until the reassociation either
/// completes or is aborted.
pub type ReassocResponse = Vec<u8, MAX_REASSOC_RSP_LEN>;

/// Error returned when a reassociation response does not fit the buffer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResponseTooLong;

/// An ongoing reassociation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Reassociation {
    /// The AP we are reassociating with.
    pub target_bssid: MacAddress,
    /// SME state before the reassociation started.
    pub(crate) saved_sme_state: SmeState,
    /// MLME state before the reassociation started.
    pub(crate) saved_mlme_state: MlmeState,
}

/// A session: one BSS the local device is part of, either as station or as
/// access point.
#[derive(Debug, Default)]
pub struct Session {
    /// The role of the local device in this session.
    pub role: SystemRole,
    /// Current SME state.
    pub sme_state: SmeState,
    /// SME state before the last transition.
    pub prev_sme_state: SmeState,
    /// Current MLME state.
    pub mlme_state: MlmeState,
    /// MLME state before the last transition.
    pub prev_mlme_state: MlmeState,
    /// The BSSID of the BSS we are currently part of.
    pub bssid: MacAddress,
    /// Our own MAC address in this session.
    pub self_address: MacAddress,
    /// Channel switch state.
    pub channel_switch: ChannelSwitchState,
    /// Whether management frame protection (802.11w) was negotiated.
    pub pmf_enabled: bool,
    /// Session identifier towards the MLME.
    pub pe_session_id: u8,
    /// Session identifier towards the SME.
    pub sme_session_id: u8,
    /// Disassociation frames received while a teardown was outstanding.
    pub(crate) disassoc_rx_count: u32,
    pub(crate) reassoc: Option<Reassociation>,
    pub(crate) reassoc_response: Option<ReassocResponse>,
}

impl Session {
    /// Create a new session with the given role, own address and BSSID. All
    /// state starts out at its default.
    pub fn new(role: SystemRole, self_address: MacAddress, bssid: MacAddress) -> Self {
        Self {
            role,
            self_address,
            bssid,
            ..Default::default()
        }
    }

    /// Move to a new SME state, remembering the current one.
    pub fn set_sme_state(&mut self, state: SmeState) {
        self.prev_sme_state = self.sme_state;
        self.sme_state = state;
    }

    /// Move to a new MLME state, remembering the current one.
    pub fn set_mlme_state(&mut self, state: MlmeState) {
        self.prev_mlme_state = self.mlme_state;
        self.mlme_state = state;
    }

    /// Start reassociating with `target`. The current SME and MLME states are
    /// saved so that they can be restored if the reassociation is aborted.
    ///
    /// `link_failure` selects [`SmeState::WaitReassocLinkFail`], used when the
    /// link to the current AP was lost.
    pub fn begin_reassociation(&mut self, target: MacAddress, link_failure: bool) {
        self.reassoc = Some(Reassociation {
            target_bssid: target,
            saved_sme_state: self.sme_state,
            saved_mlme_state: self.mlme_state,
        });

        self.set_sme_state(if link_failure {
            SmeState::WaitReassocLinkFail
        } else {
            SmeState::WaitReassoc
        });
        self.set_mlme_state(MlmeState::WaitReassocResponse);
    }

    /// Returns `true` while a station session is reassociating. Access points
    /// never reassociate, whatever their SME state.
    pub fn is_reassoc_in_progress(&self) -> bool {
        self.role.is_station() && self.sme_state.is_reassociating()
    }

    /// The AP we are reassociating with, if any.
    pub fn reassoc_target(&self) -> Option<MacAddress> {
        self.reassoc.map(|r| r.target_bssid)
    }

    /// Buffer a Reassociation Response until the reassociation completes.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is larger than the buffer.
    pub fn buffer_reassoc_response(&mut self, payload: &[u8]) -> Result<(), ResponseTooLong> {
        let rsp = ReassocResponse::from_slice(payload).map_err(|_| ResponseTooLong)?;
        self.reassoc_response = Some(rsp);
        Ok(())
    }

    /// The buffered Reassociation Response, if any.
    pub fn reassoc_response(&self) -> Option<&[u8]> {
        self.reassoc_response.as_deref()
    }

    /// Release the buffered Reassociation Response.
    pub(crate) fn release_reassoc_response(&mut self) {
        if let Some(rsp) = self.reassoc_response.take() {
            debug!("released {} byte reassociation response", rsp.len());
        }
    }

    /// Restore the SME and MLME states saved when the reassociation started
    /// and forget about the reassociation. Without saved states, the session
    /// falls back to [`SmeState::Connected`] and [`MlmeState::LinkEstablished`].
    pub(crate) fn restore_pre_reassoc_state(&mut self) {
        let (sme_state, mlme_state) = match self.reassoc.take() {
            Some(r) => (r.saved_sme_state, r.saved_mlme_state),
            None => (SmeState::Connected, MlmeState::LinkEstablished),
        };

        self.set_sme_state(sme_state);
        self.set_mlme_state(mlme_state);
    }

    /// Number of disassociation frames received while a teardown was
    /// outstanding, since the last accepted one.
    pub fn disassoc_rx_count(&self) -> u32 {
        self.disassoc_rx_count
    }

    /// Count a disassociation frame received while a teardown is outstanding.
    /// Returns `true` when this occurrence should be logged.
    pub(crate) fn count_suppressed_disassoc(&mut self) -> bool {
        let log = self.disassoc_rx_count % DISASSOC_LOG_INTERVAL == 0;
        self.disassoc_rx_count = self.disassoc_rx_count.wrapping_add(1);
        log
    }

    pub(crate) fn reset_disassoc_rx_count(&mut self) {
        self.disassoc_rx_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AP: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x01]);
    const TARGET: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x02]);
    const ME: MacAddress = MacAddress([0x02, 0, 0, 0, 0, 0x10]);

    fn connected() -> Session {
        let mut session = Session::new(SystemRole::Station, ME, AP);
        session.set_sme_state(SmeState::Connected);
        session.set_mlme_state(MlmeState::LinkEstablished);
        session
    }

    #[test]
    fn reassociation_round_trip() {
        let mut session = connected();
        assert!(!session.is_reassoc_in_progress());
        assert_eq!(session.reassoc_target(), None);

        session.begin_reassociation(TARGET, false);
        assert!(session.is_reassoc_in_progress());
        assert_eq!(session.sme_state, SmeState::WaitReassoc);
        assert_eq!(session.prev_sme_state, SmeState::Connected);
        assert_eq!(session.reassoc_target(), Some(TARGET));

        session.restore_pre_reassoc_state();
        assert!(!session.is_reassoc_in_progress());
        assert_eq!(session.sme_state, SmeState::Connected);
        assert_eq!(session.mlme_state, MlmeState::LinkEstablished);
        assert_eq!(session.prev_sme_state, SmeState::WaitReassoc);
        assert_eq!(session.reassoc_target(), None);
    }

    #[test]
    fn link_failure_reassociation() {
        let mut session = connected();
        session.begin_reassociation(TARGET, true);
        assert_eq!(session.sme_state, SmeState::WaitReassocLinkFail);
        assert!(session.is_reassoc_in_progress());
        assert!(!session.sme_state.is_establishing());
    }

    #[test]
    fn access_point_never_reassociates() {
        for state in [SmeState::WaitReassoc, SmeState::WaitReassocLinkFail] {
            let mut session = Session::new(SystemRole::AccessPoint, ME, ME);
            session.set_sme_state(state);
            assert!(!session.is_reassoc_in_progress());

            session.role = SystemRole::BtAmpStation;
            assert!(session.is_reassoc_in_progress());
        }
    }

    #[test]
    fn restore_without_saved_state() {
        let mut session = Session::new(SystemRole::Station, ME, AP);
        session.set_sme_state(SmeState::WaitReassoc);
        session.restore_pre_reassoc_state();
        assert_eq!(session.sme_state, SmeState::Connected);
        assert_eq!(session.mlme_state, MlmeState::LinkEstablished);
    }

    #[test]
    fn reassoc_response_buffer() {
        let mut session = connected();
        assert_eq!(session.reassoc_response(), None);

        session.buffer_reassoc_response(&[1, 2, 3]).unwrap();
        assert_eq!(session.reassoc_response(), Some(&[1, 2, 3][..]));

        let too_long = [0u8; MAX_REASSOC_RSP_LEN + 1];
        assert_eq!(
            session.buffer_reassoc_response(&too_long),
            Err(ResponseTooLong)
        );
        // The previous response is kept.
        assert_eq!(session.reassoc_response(), Some(&[1, 2, 3][..]));

        session.release_reassoc_response();
        assert_eq!(session.reassoc_response(), None);
    }

    #[test]
    fn suppressed_disassoc_logging() {
        let mut session = connected();
        let logged = (0..3 * DISASSOC_LOG_INTERVAL)
            .filter(|_| session.count_suppressed_disassoc())
            .count();
        assert_eq!(logged, 3);
        assert_eq!(session.disassoc_rx_count(), 3 * DISASSOC_LOG_INTERVAL);

        session.reset_disassoc_rx_count();
        assert!(session.count_suppressed_disassoc());
    }
}
