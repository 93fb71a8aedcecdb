//! Receive-side handling of IEEE 802.11 Disassociation frames for a station
//! or access point MAC sublayer management entity (MLME).
//!
//! The entry point is [`Mlme::process_disassoc_frame`]. It takes the
//! [`Session`] the frame was received on, the table of associated peers and
//! the received frame, and runs the frame through a fixed sequence of checks.
//! Every call ends in exactly one [`Outcome`]: the frame is dropped, escalated
//! to the SME as an unprotected management frame, aborts an ongoing
//! reassociation, or tears down the peer and is indicated to the upper layer.
//!
//! Everything the handler reports goes through the [`UpperLayer`] trait,
//! which has to be implemented by the user of this crate.
#![no_std]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[macro_use]
pub(crate) mod utils;

pub use dot11_frame as frame;

pub mod constants;
pub mod mlme;
pub mod peer;
pub mod session;
pub mod upper;

pub use mlme::{DropReason, Mlme, Outcome, RxFeedback, RxFrame};
pub use peer::{CleanupTrigger, Peer, PeerContext, PeerTable, StaticPeerTable, TableError};
pub use session::{ChannelSwitchState, MlmeState, Session, SmeState, SystemRole};
pub use upper::UpperLayer;
