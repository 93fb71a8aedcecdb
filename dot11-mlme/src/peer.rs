//! Peer association records and the table holding them.

use heapless::Vec;

use crate::constants::PEER_TABLE_SIZE;
use crate::frame::{MacAddress, ReasonCode};
use crate::session::MlmeState;

/// What triggered the cleanup of a peer's association context.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CleanupTrigger {
    #[default]
    None,
    /// The peer sent a Disassociation frame.
    PeerDisassoc,
    /// The peer sent a Deauthentication frame.
    PeerDeauth,
    /// The host requested a disassociation.
    HostDisassoc,
    /// The host requested a deauthentication.
    HostDeauth,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    Full,
}

/// This trait needs to be implemented by systems keeping their own peer
/// records, so that the disassociation handler can read and update them.
pub trait PeerContext {
    /// The MAC address of the peer.
    fn address(&self) -> MacAddress;
    /// The association identifier of the peer.
    fn assoc_id(&self) -> u16;
    /// The MLME state of the peer.
    fn mlme_state(&self) -> MlmeState;
    /// What triggered the cleanup of this peer, if anything.
    fn cleanup_trigger(&self) -> CleanupTrigger;
    /// The reason code of the last disassociation.
    fn disassoc_reason(&self) -> ReasonCode;
    /// Whether the next association confirm has to update the context,
    /// because the association was superseded.
    fn update_context_on_confirm(&self) -> bool;
    /// Whether the peer is already being torn down.
    fn teardown_in_progress(&self) -> bool;
    /// Set the MLME state of the peer.
    fn set_mlme_state(&mut self, state: MlmeState);
    /// Set the cleanup trigger.
    fn set_cleanup_trigger(&mut self, trigger: CleanupTrigger);
    /// Set the reason code of the last disassociation.
    fn set_disassoc_reason(&mut self, reason: ReasonCode);
    /// Set the update-context-on-next-confirm flag.
    fn set_update_context_on_confirm(&mut self, update: bool);
    /// Set the teardown-in-progress flag.
    fn set_teardown_in_progress(&mut self, in_progress: bool);
}

/// A table of peers, keyed by MAC address.
pub trait PeerTable<P: PeerContext> {
    /// Add a peer, or return the existing one with the same address.
    fn add_peer(&mut self, address: MacAddress, assoc_id: u16) -> Result<&mut P, TableError>;
    fn get_peer(&self, address: &MacAddress) -> Option<&P>;
    fn get_peer_mut(&mut self, address: &MacAddress) -> Option<&mut P>;
    fn remove_peer(&mut self, address: &MacAddress);
}

/// A plain peer record.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Peer {
    address: MacAddress,
    assoc_id: u16,
    mlme_state: MlmeState,
    cleanup_trigger: CleanupTrigger,
    disassoc_reason: ReasonCode,
    update_context_on_confirm: bool,
    teardown_in_progress: bool,
}

impl Peer {
    pub fn new(address: MacAddress, assoc_id: u16) -> Self {
        Self {
            address,
            assoc_id,
            mlme_state: MlmeState::Idle,
            cleanup_trigger: CleanupTrigger::None,
            disassoc_reason: ReasonCode::default(),
            update_context_on_confirm: false,
            teardown_in_progress: false,
        }
    }
}

impl PeerContext for Peer {
    fn address(&self) -> MacAddress {
        self.address
    }

    fn assoc_id(&self) -> u16 {
        self.assoc_id
    }

    fn mlme_state(&self) -> MlmeState {
        self.mlme_state
    }

    fn cleanup_trigger(&self) -> CleanupTrigger {
        self.cleanup_trigger
    }

    fn disassoc_reason(&self) -> ReasonCode {
        self.disassoc_reason
    }

    fn update_context_on_confirm(&self) -> bool {
        self.update_context_on_confirm
    }

    fn teardown_in_progress(&self) -> bool {
        self.teardown_in_progress
    }

    fn set_mlme_state(&mut self, state: MlmeState) {
        self.mlme_state = state;
    }

    fn set_cleanup_trigger(&mut self, trigger: CleanupTrigger) {
        self.cleanup_trigger = trigger;
    }

    fn set_disassoc_reason(&mut self, reason: ReasonCode) {
        self.disassoc_reason = reason;
    }

    fn set_update_context_on_confirm(&mut self, update: bool) {
        self.update_context_on_confirm = update;
    }

    fn set_teardown_in_progress(&mut self, in_progress: bool) {
        self.teardown_in_progress = in_progress;
    }
}

/// A fixed capacity [`PeerTable`] of [`Peer`]s.
#[derive(Debug, Default)]
pub struct StaticPeerTable<const N: usize = PEER_TABLE_SIZE> {
    peers: Vec<Peer, N>,
}

impl<const N: usize> StaticPeerTable<N> {
    pub fn new() -> Self {
        Self { peers: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Peer> {
        self.peers.iter()
    }
}

impl<const N: usize> PeerTable<Peer> for StaticPeerTable<N> {
    fn add_peer(&mut self, address: MacAddress, assoc_id: u16) -> Result<&mut Peer, TableError> {
        let index = match self.peers.iter().position(|p| p.address == address) {
            Some(index) => index,
            None => {
                self.peers
                    .push(Peer::new(address, assoc_id))
                    .map_err(|_| TableError::Full)?;
                self.peers.len() - 1
            }
        };

        Ok(&mut self.peers[index])
    }

    fn get_peer(&self, address: &MacAddress) -> Option<&Peer> {
        self.peers.iter().find(|p| p.address == *address)
    }

    fn get_peer_mut(&mut self, address: &MacAddress) -> Option<&mut Peer> {
        self.peers.iter_mut().find(|p| p.address == *address)
    }

    fn remove_peer(&mut self, address: &MacAddress) {
        self.peers.retain(|p| p.address != *address);
    }
}
