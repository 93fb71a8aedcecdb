//! Zero-copy read and write structures for handling IEEE 802.11 management
//! frames.
//!
//! Each reader contains the following functions:
//! - [`new`]: Create a new reader, checking the buffer length.
//! - [`check_len`]: Check if the buffer is long enough.
//! - [`new_unchecked`]: Create a new reader without checking the buffer length.
//!
//! The most important reader is [`MgmtFrame`], which reads a full management
//! frame (without FCS). It provides:
//! - [`frame_control`]: returns a [`FrameControl`] reader.
//! - [`header`]: returns a [`MgmtHeader`] reader (addresses, duration,
//!   sequence control).
//! - [`src_address`], [`dst_address`], [`bssid`]: shortcuts into the header.
//! - [`body`]: the frame body following the header.
//!
//! Received frames that still carry their trailing CRC-32 can be checked with
//! [`MgmtFrameWithFcs`].
//!
//! ## Reading a frame
//! ```
//! # use dot11_frame::{MgmtFrame, MgmtSubtype, ReasonCode, ReasonCodeBody};
//! let frame: [u8; 26] = [
//!     0xa0, 0x00, 0x3a, 0x01, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88,
//!     0x99, 0xaa, 0xbb, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0x40, 0x06, 0x08, 0x00,
//! ];
//! let frame = MgmtFrame::new(&frame[..]).unwrap();
//!
//! assert_eq!(
//!     frame.frame_control().mgmt_subtype(),
//!     Some(MgmtSubtype::Disassociation)
//! );
//! assert_eq!(frame.sequence_number(), 100);
//!
//! let body = ReasonCodeBody::new(frame.body()).unwrap();
//! assert_eq!(body.reason_code(), ReasonCode::DISASSOC_LEAVING_BSS);
//! ```
//!
//! ## Writing a frame
//!
//! Only Disassociation frames can be built, through [`DisassocFrameRepr`].
//!
//! [`new`]: MgmtFrame::new
//! [`check_len`]: MgmtFrame::check_len
//! [`new_unchecked`]: MgmtFrame::new_unchecked
//! [`frame_control`]: MgmtFrame::frame_control
//! [`header`]: MgmtFrame::header
//! [`src_address`]: MgmtFrame::src_address
//! [`dst_address`]: MgmtFrame::dst_address
//! [`bssid`]: MgmtFrame::bssid
//! [`body`]: MgmtFrame::body
#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(test)]
mod tests;

mod address;
pub use address::*;

mod frame_control;
pub use frame_control::*;

mod reason;
pub use reason::*;

mod frames;
pub use frames::*;

mod repr;
pub use repr::*;

/// An error that can occur when reading or writing an IEEE 802.11 frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Error;

/// A type alias for `Result<T, frame::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
