#![no_main]

use arbitrary::Arbitrary;
use dot11_frame::{MacAddress, MgmtFrame};
use dot11_mlme::mlme::command::{
    DisassocIndication, LostLinkInfo, ReassocConfirm, UnprotectedMgmtFrameIndication,
};
use dot11_mlme::*;

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    role: SystemRole,
    sme_state: SmeState,
    mlme_state: MlmeState,
    prev_mlme_state: MlmeState,
    channel_switch: ChannelSwitchState,
    pmf_enabled: bool,
    unprotected: bool,
    self_address: MacAddress,
    bssid: MacAddress,
    reassoc_target: Option<(MacAddress, bool)>,
    peer_state: MlmeState,
    rssi: i8,
    frame: &'a [u8],
}

#[derive(Default)]
struct Sink {
    indications: usize,
}

impl UpperLayer for Sink {
    fn mlme_disassoc_indication(&mut self, _indication: DisassocIndication) {
        self.indications += 1;
    }

    fn sme_disassoc_indication<P: PeerContext>(&mut self, _peer: &P, _session: &Session) {
        self.indications += 1;
    }

    fn unprotected_mgmt_frame(&mut self, _indication: UnprotectedMgmtFrameIndication<'_>) {}

    fn reassoc_confirm(&mut self, _confirm: ReassocConfirm) {}

    fn lost_link_info(&mut self, _info: LostLinkInfo) {}

    fn delete_tdls_peers(&mut self, _session: &Session) {}
}

fuzz_target!(|input: Input<'_>| {
    let Ok(frame) = MgmtFrame::new(input.frame) else {
        return;
    };

    let mut session = Session::new(input.role, input.self_address, input.bssid);
    session.set_sme_state(input.sme_state);
    session.prev_mlme_state = input.prev_mlme_state;
    session.mlme_state = input.mlme_state;
    session.channel_switch = input.channel_switch;
    session.pmf_enabled = input.pmf_enabled;
    if let Some((target, link_failure)) = input.reassoc_target {
        session.begin_reassociation(target, link_failure);
    }

    let mut peers = StaticPeerTable::<1>::new();
    peers
        .add_peer(frame.src_address(), 1)
        .unwrap()
        .set_mlme_state(input.peer_state);
    let before = *peers.get_peer(&frame.src_address()).unwrap();

    let feedback = if input.unprotected {
        RxFeedback::UNPROTECTED_ERROR
    } else {
        RxFeedback::empty()
    };
    let rx = RxFrame::new(frame, input.rssi, feedback);

    let mut sink = Sink::default();
    let outcome = Mlme::new(&mut sink).process_disassoc_frame(&mut session, &mut peers, &rx);

    match outcome {
        Outcome::Dropped(_) | Outcome::Escalated => {
            assert_eq!(*peers.get_peer(&frame.src_address()).unwrap(), before);
            assert_eq!(sink.indications, 0);
        }
        Outcome::ReassocAborted => {
            assert_eq!(sink.indications, 0);
            assert_eq!(session.reassoc_target(), None);
        }
        Outcome::Indicated => {
            assert_eq!(sink.indications, 2);
            assert_eq!(
                peers.get_peer(&frame.src_address()).unwrap().cleanup_trigger(),
                CleanupTrigger::PeerDisassoc
            );
        }
    }
});
