use crate::frame::ReasonCode;
use crate::mlme::command::{ReassocConfirm, SmeResultCode};
use crate::mlme::Mlme;
use crate::session::Session;
use crate::upper::UpperLayer;

impl<U: UpperLayer> Mlme<'_, U> {
    /// Abort the ongoing reassociation of `session`: release the buffered
    /// Reassociation Response, go back to the state from before the
    /// reassociation and report the refusal to the SME.
    pub(crate) fn abort_reassociation(&mut self, session: &mut Session, reason: ReasonCode) {
        info!(
            "aborting reassociation with {:?}, reason {}",
            session.reassoc_target(),
            reason
        );

        session.release_reassoc_response();
        session.restore_pre_reassoc_state();

        self.upper_layer.reassoc_confirm(ReassocConfirm {
            sme_session_id: session.sme_session_id,
            result: SmeResultCode::ReassocRefused,
            reason_code: reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::MacAddress;
    use crate::session::{MlmeState, SmeState, SystemRole};
    use crate::upper::tests::{TestUpperLayer, UpperLayerEvent};

    #[test]
    fn abort_restores_and_confirms() {
        let mut session = Session::new(
            SystemRole::Station,
            MacAddress([0x02, 0, 0, 0, 0, 0x10]),
            MacAddress([0x02, 0, 0, 0, 0, 0x01]),
        );
        session.sme_session_id = 3;
        session.set_sme_state(SmeState::Connected);
        session.set_mlme_state(MlmeState::LinkEstablished);
        session.begin_reassociation(MacAddress([0x02, 0, 0, 0, 0, 0x02]), false);
        session.buffer_reassoc_response(&[0xaa; 64]).unwrap();

        let mut upper = TestUpperLayer::new();
        Mlme::new(&mut upper).abort_reassociation(&mut session, ReasonCode::INACTIVITY);

        assert_eq!(session.sme_state, SmeState::Connected);
        assert_eq!(session.mlme_state, MlmeState::LinkEstablished);
        assert_eq!(session.reassoc_target(), None);
        assert_eq!(session.reassoc_response(), None);
        assert_eq!(
            upper.events,
            [UpperLayerEvent::ReassocConfirm(ReassocConfirm {
                sme_session_id: 3,
                result: SmeResultCode::ReassocRefused,
                reason_code: ReasonCode::INACTIVITY,
            })]
        );
    }
}
