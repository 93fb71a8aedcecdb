//! Handling of received Disassociation frames.
//!
//! A frame goes through the following stages, any of which may end the
//! processing:
//!
//! 1. frame validation (addresses, body length),
//! 2. suppression of repeated frames while we are tearing down ourselves,
//! 3. the management frame protection guard,
//! 4. the peer lookup and the pending acknowledgment check,
//! 5. the reassociation check,
//! 6. the role and reason code policy,
//! 7. the peer state check,
//! 8. the teardown of the peer and the indications to the upper layer.
//!
//! Stages return `Err(outcome)` to end the processing, so they compose with
//! `?`.

use crate::constants::MIN_DISASSOC_BODY_LEN;
use crate::frame::{MacAddress, MgmtFrame, MgmtSubtype, ReasonCode, ReasonCodeBody};
use crate::mlme::command::{DisassocIndication, LostLinkInfo, UnprotectedMgmtFrameIndication};
use crate::mlme::utils::is_frame_for_us;
use crate::mlme::{DropReason, Mlme, Outcome, RxFeedback, RxFrame};
use crate::peer::{CleanupTrigger, PeerContext, PeerTable};
use crate::session::{ChannelSwitchState, MlmeState, Session, SystemRole};
use crate::upper::UpperLayer;

type StageResult<T> = Result<T, Outcome>;

/// Reason codes an access point expects to receive.
const AP_REASON_CODES: &[ReasonCode] = &[
    ReasonCode::UNSPECIFIED,
    ReasonCode::INACTIVITY,
    ReasonCode::DISASSOC_LEAVING_BSS,
    ReasonCode::MIC_FAILURE,
    ReasonCode::FOURWAY_HANDSHAKE_TIMEOUT,
    ReasonCode::GROUP_KEY_HANDSHAKE_TIMEOUT,
    ReasonCode::RSN_ELEMENT_MISMATCH,
    ReasonCode::IEEE8021X_AUTH_FAILED,
];

/// Reason codes a station expects to receive from its AP.
const STATION_REASON_CODES: &[ReasonCode] = &[
    ReasonCode::UNSPECIFIED,
    ReasonCode::INACTIVITY,
    ReasonCode::AP_OVERLOADED,
    ReasonCode::CLASS2_FRAME_FROM_NONAUTH_STA,
    ReasonCode::CLASS3_FRAME_FROM_NONASSOC_STA,
    ReasonCode::MIC_FAILURE,
    ReasonCode::FOURWAY_HANDSHAKE_TIMEOUT,
    ReasonCode::GROUP_KEY_HANDSHAKE_TIMEOUT,
    ReasonCode::RSN_ELEMENT_MISMATCH,
    ReasonCode::IEEE8021X_AUTH_FAILED,
    ReasonCode::PREV_AUTH_NOT_VALID,
    ReasonCode::PEER_REJECT_MECHANISM,
    ReasonCode::EXCESS_UNACKED_FRAMES,
    ReasonCode::DEAUTH_LEAVING_BSS,
    ReasonCode::DISASSOC_LEAVING_BSS,
];

impl<U: UpperLayer> Mlme<'_, U> {
    /// Process a Disassociation frame received on `session`.
    ///
    /// `peers` is the association table of the session. Only the record of
    /// the frame's transmitter is updated, and only when the frame is
    /// accepted.
    pub fn process_disassoc_frame<P, T>(
        &mut self,
        session: &mut Session,
        peers: &mut T,
        rx: &RxFrame<'_>,
    ) -> Outcome
    where
        P: PeerContext,
        T: PeerTable<P>,
    {
        match self.disassoc_stages(session, peers, rx) {
            Ok(outcome) | Err(outcome) => outcome,
        }
    }

    fn disassoc_stages<P, T>(
        &mut self,
        session: &mut Session,
        peers: &mut T,
        rx: &RxFrame<'_>,
    ) -> StageResult<Outcome>
    where
        P: PeerContext,
        T: PeerTable<P>,
    {
        let reason = validate_frame(session, &rx.frame)?;

        suppress_during_teardown(session)?;

        self.pmf_guard(session, rx)?;

        let src = rx.frame.src_address();
        let peer = self.lookup_peer(peers, &src)?;

        self.check_reassociation(session, &src, reason)?;

        check_reason_code(session, reason)?;

        check_peer_state(&*peer)?;

        Ok(self.dispatch(session, peer, rx, reason))
    }

    /// Escalate unprotected frames received on a protected session, except
    /// right after joining.
    fn pmf_guard(&mut self, session: &Session, rx: &RxFrame<'_>) -> StageResult<()> {
        if !session.pmf_enabled || !rx.feedback.contains(RxFeedback::UNPROTECTED_ERROR) {
            return Ok(());
        }

        if (session.mlme_state, session.prev_mlme_state)
            == (MlmeState::LinkEstablished, MlmeState::Joined)
        {
            return Ok(());
        }

        info!(
            "unprotected disassociation from {} on a protected session",
            rx.frame.src_address()
        );

        self.upper_layer.unprotected_mgmt_frame(UnprotectedMgmtFrameIndication {
            sme_session_id: session.sme_session_id,
            subtype: MgmtSubtype::from(rx.frame.frame_control().subtype()),
            frame: rx.frame.as_bytes(),
        });

        Err(Outcome::Escalated)
    }

    /// Find the association context of `src`. A teardown towards `src` that
    /// still awaits its acknowledgment takes care of the cleanup, so the
    /// frame is dropped in that case.
    fn lookup_peer<'p, P, T>(
        &mut self,
        peers: &'p mut T,
        src: &MacAddress,
    ) -> StageResult<&'p mut P>
    where
        P: PeerContext,
        T: PeerTable<P>,
    {
        let Some(peer) = peers.get_peer_mut(src) else {
            warn!("disassociation from {}, which is not associated", src);
            return Err(Outcome::Dropped(DropReason::UnknownPeer));
        };

        if self.pending.is_pending(src) {
            debug!("teardown towards {} awaits its ack, dropping disassociation", src);
            self.pending.clear(src);
            return Err(Outcome::Dropped(DropReason::PendingAck));
        }

        Ok(peer)
    }

    /// While reassociating, only frames from the current AP continue. A frame
    /// from the target AP aborts the reassociation.
    fn check_reassociation(
        &mut self,
        session: &mut Session,
        src: &MacAddress,
        reason: ReasonCode,
    ) -> StageResult<()> {
        if !session.is_reassoc_in_progress() || *src == session.bssid {
            return Ok(());
        }

        if session.reassoc_target() != Some(*src) {
            warn!("disassociation from {} while reassociating, ignoring", src);
            return Err(Outcome::Dropped(DropReason::UnrelatedAp));
        }

        self.abort_reassociation(session, reason);
        Err(Outcome::ReassocAborted)
    }

    /// Tear the peer down and tell the upper layer.
    fn dispatch<P: PeerContext>(
        &mut self,
        session: &mut Session,
        peer: &mut P,
        rx: &RxFrame<'_>,
        reason: ReasonCode,
    ) -> Outcome {
        let src = rx.frame.src_address();
        let station = session.role == SystemRole::Station;

        if station
            && matches!(peer.mlme_state(), MlmeState::LinkEstablished | MlmeState::Idle)
            && src == session.bssid
        {
            self.upper_layer.delete_tdls_peers(session);
        }

        if peer.mlme_state() != MlmeState::LinkEstablished {
            warn!(
                "disassociation from {} in peer state {:?}",
                src,
                peer.mlme_state()
            );

            if peer.mlme_state() == MlmeState::WaitAssocConfirm {
                peer.set_update_context_on_confirm(true);
            }
        }

        peer.set_cleanup_trigger(CleanupTrigger::PeerDisassoc);
        peer.set_disassoc_reason(reason);

        let indication = DisassocIndication {
            peer_address: src,
            reason_code: reason.0 as u8,
            trigger: CleanupTrigger::PeerDisassoc,
            pe_session_id: session.pe_session_id,
        };

        session.reset_disassoc_rx_count();

        if session.is_reassoc_in_progress() {
            self.abort_reassociation(session, reason);
            return Outcome::ReassocAborted;
        }

        info!("{} disassociated, reason {}", src, reason);

        if station {
            self.upper_layer.lost_link_info(LostLinkInfo {
                sme_session_id: session.sme_session_id,
                rssi: rx.rssi,
            });
        }

        self.upper_layer.mlme_disassoc_indication(indication);
        self.upper_layer.sme_disassoc_indication(&*peer, session);

        Outcome::Indicated
    }
}

/// Structural checks on the frame. Returns the reason code.
fn validate_frame(session: &Session, frame: &MgmtFrame<&[u8]>) -> StageResult<ReasonCode> {
    if frame.frame_control().mgmt_subtype() != Some(MgmtSubtype::Disassociation) {
        return Err(Outcome::Dropped(DropReason::NotDisassociation));
    }

    let src = frame.src_address();
    let dst = frame.dst_address();

    if src.is_group() {
        warn!("disassociation from group address {}", src);
        return Err(Outcome::Dropped(DropReason::GroupSource));
    }

    if dst.is_multicast() {
        warn!("disassociation from {} to multicast address {}", src, dst);
        return Err(Outcome::Dropped(DropReason::MulticastDestination));
    }

    if !is_frame_for_us(&session.self_address, frame) {
        debug!("disassociation from {} for {}, not for us", src, dst);
        return Err(Outcome::Dropped(DropReason::NotForUs));
    }

    let body = frame.body();
    if body.len() < MIN_DISASSOC_BODY_LEN {
        warn!("disassociation from {} with a {} byte body", src, body.len());
        return Err(Outcome::Dropped(DropReason::BodyTooShort));
    }

    Ok(ReasonCodeBody::new_unchecked(body).reason_code())
}

/// Stations that are tearing down the session themselves ignore further
/// Disassociation frames, logging only every so often.
fn suppress_during_teardown(session: &mut Session) -> StageResult<()> {
    if session.role != SystemRole::Station || !session.sme_state.is_tearing_down() {
        return Ok(());
    }

    if session.count_suppressed_disassoc() {
        info!(
            "disassociation while in {:?}, {} received so far",
            session.sme_state,
            session.disassoc_rx_count()
        );
    }

    Err(Outcome::Dropped(DropReason::TeardownInProgress))
}

/// Check whether a disassociation is acceptable in the role and state of the
/// session. Unexpected reason codes are only logged.
fn check_reason_code(session: &Session, reason: ReasonCode) -> StageResult<()> {
    match session.role {
        role if role.is_ap() => {
            if !AP_REASON_CODES.contains(&reason) {
                debug!("unexpected disassociation reason {} for an AP", reason);
            }
            Ok(())
        }
        role if role.is_station() && !session.sme_state.is_establishing() => match reason {
            ReasonCode::DEAUTH_LEAVING_BSS | ReasonCode::DISASSOC_LEAVING_BSS
                if session.channel_switch == ChannelSwitchState::InProgress =>
            {
                info!("disassociation reason {} during channel switch, ignoring", reason);
                Err(Outcome::Dropped(DropReason::ChannelSwitchInProgress))
            }
            reason if STATION_REASON_CODES.contains(&reason) => Ok(()),
            reason => {
                debug!("unexpected disassociation reason {} for a station", reason);
                Ok(())
            }
        },
        role => {
            debug!(
                "disassociation in role {:?}, SME state {:?}, ignoring",
                role, session.sme_state
            );
            Err(Outcome::Dropped(DropReason::RoleOrState))
        }
    }
}

/// Drop the frame when the peer is already being deleted.
fn check_peer_state<P: PeerContext>(peer: &P) -> StageResult<()> {
    match peer.mlme_state() {
        MlmeState::WaitDeleteStaResponse | MlmeState::WaitDeleteBssResponse => {
            debug!(
                "peer {} already being deleted ({:?}), teardown in progress: {}",
                peer.address(),
                peer.mlme_state(),
                peer.teardown_in_progress()
            );
            Err(Outcome::Dropped(DropReason::PeerDeletePending))
        }
        _ => Ok(()),
    }
}
