//! The MAC sublayer management entity, as far as received Disassociation
//! frames are concerned.

pub mod command;
pub mod disassoc;
pub mod pending;
pub mod reassoc;
pub mod utils;

use bitflags::bitflags;

use crate::frame::MgmtFrame;
use crate::upper::UpperLayer;

pub use pending::PendingTeardown;

bitflags! {
    /// Security feedback from the receive path.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RxFeedback: u8 {
        /// The frame was not cryptographically protected.
        const UNPROTECTED_ERROR = 1 << 0;
        /// The frame was protected but its MIC did not verify.
        const MIC_ERROR = 1 << 1;
        /// The frame could not be decrypted.
        const DECRYPT_ERROR = 1 << 2;
    }
}

/// A received management frame, as handed over by the receive path.
#[derive(Debug, Clone, Copy)]
pub struct RxFrame<'a> {
    pub frame: MgmtFrame<&'a [u8]>,
    /// Normalised signal strength, in dBm.
    pub rssi: i8,
    pub feedback: RxFeedback,
}

impl<'a> RxFrame<'a> {
    pub fn new(frame: MgmtFrame<&'a [u8]>, rssi: i8, feedback: RxFeedback) -> Self {
        Self {
            frame,
            rssi,
            feedback,
        }
    }
}

/// Why a frame was dropped.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DropReason {
    /// Not a Disassociation frame.
    NotDisassociation,
    /// The source address is a group address.
    GroupSource,
    /// The destination is a multicast address other than broadcast.
    MulticastDestination,
    /// The destination is neither a group address nor our own address.
    NotForUs,
    /// The body is too short to hold a reason code.
    BodyTooShort,
    /// We are already tearing the session down.
    TeardownInProgress,
    /// No association context for the source address.
    UnknownPeer,
    /// A disassociation or deauthentication towards the peer is awaiting its
    /// acknowledgment.
    PendingAck,
    /// Reassociating, and the frame is from neither the current nor the
    /// target AP.
    UnrelatedAp,
    /// Leaving-BSS reason code while a channel switch is in progress.
    ChannelSwitchInProgress,
    /// Disassociation is not meaningful in the current role and state.
    RoleOrState,
    /// The peer is already being deleted.
    PeerDeletePending,
}

/// What happened to a received Disassociation frame.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// The frame was dropped without any state change.
    Dropped(DropReason),
    /// The frame was unprotected on a protected session and was forwarded to
    /// the SME instead.
    Escalated,
    /// The frame aborted the ongoing reassociation.
    ReassocAborted,
    /// The peer is being torn down and the upper layer was notified.
    Indicated,
}

/// Structure handling received Disassociation frames. It borrows the upper
/// layer for the duration of the processing and keeps the bookkeeping of
/// teardowns awaiting acknowledgment.
pub struct Mlme<'a, U: UpperLayer> {
    /// Upper layer to which indications and confirms are passed.
    upper_layer: &'a mut U,
    /// Locally initiated teardowns waiting for their acknowledgment.
    pending: PendingTeardown,
}

impl<'a, U: UpperLayer> Mlme<'a, U> {
    pub fn new(upper_layer: &'a mut U) -> Self {
        Self {
            upper_layer,
            pending: PendingTeardown::default(),
        }
    }

    pub fn pending(&self) -> &PendingTeardown {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut PendingTeardown {
        &mut self.pending
    }
}
