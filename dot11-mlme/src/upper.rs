use crate::mlme::command::{
    DisassocIndication, LostLinkInfo, ReassocConfirm, UnprotectedMgmtFrameIndication,
};
use crate::peer::PeerContext;
use crate::session::Session;

/// This traits provides interactions with the layers above the MLME: the MLME
/// event queue and the SME. All calls are made from within
/// [`crate::Mlme::process_disassoc_frame`] and must not block.
pub trait UpperLayer {
    /// Queues a disassociation indication for the MLME state machine.
    fn mlme_disassoc_indication(&mut self, indication: DisassocIndication);
    /// Notifies the SME that `peer` disassociated from `session`.
    fn sme_disassoc_indication<P: PeerContext>(&mut self, peer: &P, session: &Session);
    /// Forwards an unprotected management frame received on a protected
    /// session.
    fn unprotected_mgmt_frame(&mut self, indication: UnprotectedMgmtFrameIndication<'_>);
    /// Reports the end of a reassociation.
    fn reassoc_confirm(&mut self, confirm: ReassocConfirm);
    /// Reports link loss diagnostics.
    fn lost_link_info(&mut self, info: LostLinkInfo);
    /// Tears down all TDLS peers of `session`.
    fn delete_tdls_peers(&mut self, session: &Session);
}

#[cfg(test)]
pub mod tests {
    use std::vec::Vec;

    use super::*;
    use crate::frame::{MacAddress, MgmtSubtype, ReasonCode};

    #[derive(Debug, PartialEq, Eq, Clone)]
    pub enum UpperLayerEvent {
        MlmeDisassoc(DisassocIndication),
        SmeDisassoc {
            peer: MacAddress,
            reason: ReasonCode,
            pe_session_id: u8,
        },
        UnprotectedMgmtFrame {
            sme_session_id: u8,
            subtype: MgmtSubtype,
            frame: Vec<u8>,
        },
        ReassocConfirm(ReassocConfirm),
        LostLinkInfo(LostLinkInfo),
        DeleteTdlsPeers {
            sme_session_id: u8,
        },
    }

    /// Records everything handed to the upper layer.
    #[derive(Debug, Default)]
    pub struct TestUpperLayer {
        pub events: Vec<UpperLayerEvent>,
    }

    impl TestUpperLayer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn disassoc_indications(&self) -> usize {
            self.events
                .iter()
                .filter(|e| {
                    matches!(
                        e,
                        UpperLayerEvent::MlmeDisassoc(_) | UpperLayerEvent::SmeDisassoc { .. }
                    )
                })
                .count()
        }
    }

    impl UpperLayer for TestUpperLayer {
        fn mlme_disassoc_indication(&mut self, indication: DisassocIndication) {
            self.events.push(UpperLayerEvent::MlmeDisassoc(indication));
        }

        fn sme_disassoc_indication<P: PeerContext>(&mut self, peer: &P, session: &Session) {
            self.events.push(UpperLayerEvent::SmeDisassoc {
                peer: peer.address(),
                reason: peer.disassoc_reason(),
                pe_session_id: session.pe_session_id,
            });
        }

        fn unprotected_mgmt_frame(&mut self, indication: UnprotectedMgmtFrameIndication<'_>) {
            self.events.push(UpperLayerEvent::UnprotectedMgmtFrame {
                sme_session_id: indication.sme_session_id,
                subtype: indication.subtype,
                frame: indication.frame.to_vec(),
            });
        }

        fn reassoc_confirm(&mut self, confirm: ReassocConfirm) {
            self.events.push(UpperLayerEvent::ReassocConfirm(confirm));
        }

        fn lost_link_info(&mut self, info: LostLinkInfo) {
            self.events.push(UpperLayerEvent::LostLinkInfo(info));
        }

        fn delete_tdls_peers(&mut self, session: &Session) {
            self.events.push(UpperLayerEvent::DeleteTdlsPeers {
                sme_session_id: session.sme_session_id,
            });
        }
    }
}
