//! Compile-time configuration.
//!
//! The values below can be overridden at build time through environment
//! variables prefixed with `DOT11_MLME_`, e.g.
//! `DOT11_MLME_DISASSOC_LOG_INTERVAL=64`.

include!(concat!(env!("OUT_DIR"), "/config.rs"));

/// Minimum length of a Disassociation frame body: the 2 octet reason code.
pub const MIN_DISASSOC_BODY_LEN: usize = 2;

const _: () = assert!(DISASSOC_LOG_INTERVAL > 0, "log interval must not be zero");
