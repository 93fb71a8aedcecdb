//! IEEE Std 802.11-2016, 9.4.1.7 Reason Code field.

/// A reason code as carried in Disassociation and Deauthentication frames.
///
/// Unknown and reserved values are preserved as-is.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReasonCode(pub u16);

#[allow(missing_docs)]
impl ReasonCode {
    // 0 Reserved
    pub const UNSPECIFIED: Self = Self(1);
    pub const PREV_AUTH_NOT_VALID: Self = Self(2);
    pub const DEAUTH_LEAVING_BSS: Self = Self(3);
    pub const INACTIVITY: Self = Self(4);
    pub const AP_OVERLOADED: Self = Self(5);
    pub const CLASS2_FRAME_FROM_NONAUTH_STA: Self = Self(6);
    pub const CLASS3_FRAME_FROM_NONASSOC_STA: Self = Self(7);
    pub const DISASSOC_LEAVING_BSS: Self = Self(8);
    pub const NOT_AUTHENTICATED: Self = Self(9);
    pub const POWER_CAPABILITY_UNACCEPTABLE: Self = Self(10);
    pub const SUPPORTED_CHANNELS_UNACCEPTABLE: Self = Self(11);
    pub const BSS_TRANSITION_DISASSOC: Self = Self(12);
    pub const INVALID_ELEMENT: Self = Self(13);
    pub const MIC_FAILURE: Self = Self(14);
    pub const FOURWAY_HANDSHAKE_TIMEOUT: Self = Self(15);
    pub const GROUP_KEY_HANDSHAKE_TIMEOUT: Self = Self(16);
    pub const RSN_ELEMENT_MISMATCH: Self = Self(17);
    pub const INVALID_GROUP_CIPHER: Self = Self(18);
    pub const INVALID_PAIRWISE_CIPHER: Self = Self(19);
    pub const INVALID_AKMP: Self = Self(20);
    pub const UNSUPPORTED_RSNE_VERSION: Self = Self(21);
    pub const INVALID_RSNE_CAPABILITIES: Self = Self(22);
    pub const IEEE8021X_AUTH_FAILED: Self = Self(23);
    pub const CIPHER_SUITE_REJECTED: Self = Self(24);
    pub const TDLS_PEER_UNREACHABLE: Self = Self(25);
    pub const TDLS_UNSPECIFIED: Self = Self(26);
    pub const QOS_UNSPECIFIED: Self = Self(32);
    pub const QOS_INSUFFICIENT_BANDWIDTH: Self = Self(33);
    pub const EXCESS_UNACKED_FRAMES: Self = Self(34);
    pub const EXCEEDED_TXOP: Self = Self(35);
    pub const STA_LEAVING: Self = Self(36);
    pub const PEER_REJECT_MECHANISM: Self = Self(37);
    pub const UNKNOWN_TS_BA: Self = Self(38);
    pub const QOS_TIMEOUT: Self = Self(39);
}

impl ReasonCode {
    /// A short human readable name, if the code is known.
    pub fn name(&self) -> Option<&'static str> {
        Some(match *self {
            Self::UNSPECIFIED => "unspecified",
            Self::PREV_AUTH_NOT_VALID => "previous authentication no longer valid",
            Self::DEAUTH_LEAVING_BSS => "deauthenticated, leaving BSS",
            Self::INACTIVITY => "disassociated due to inactivity",
            Self::AP_OVERLOADED => "AP unable to handle all associated STAs",
            Self::CLASS2_FRAME_FROM_NONAUTH_STA => "class 2 frame from non-authenticated STA",
            Self::CLASS3_FRAME_FROM_NONASSOC_STA => "class 3 frame from non-associated STA",
            Self::DISASSOC_LEAVING_BSS => "disassociated, leaving BSS",
            Self::NOT_AUTHENTICATED => "association request from non-authenticated STA",
            Self::POWER_CAPABILITY_UNACCEPTABLE => "power capability unacceptable",
            Self::SUPPORTED_CHANNELS_UNACCEPTABLE => "supported channels unacceptable",
            Self::BSS_TRANSITION_DISASSOC => "BSS transition management",
            Self::INVALID_ELEMENT => "invalid element",
            Self::MIC_FAILURE => "MIC failure",
            Self::FOURWAY_HANDSHAKE_TIMEOUT => "4-way handshake timeout",
            Self::GROUP_KEY_HANDSHAKE_TIMEOUT => "group key handshake timeout",
            Self::RSN_ELEMENT_MISMATCH => "RSN element mismatch in 4-way handshake",
            Self::INVALID_GROUP_CIPHER => "invalid group cipher",
            Self::INVALID_PAIRWISE_CIPHER => "invalid pairwise cipher",
            Self::INVALID_AKMP => "invalid AKMP",
            Self::UNSUPPORTED_RSNE_VERSION => "unsupported RSNE version",
            Self::INVALID_RSNE_CAPABILITIES => "invalid RSNE capabilities",
            Self::IEEE8021X_AUTH_FAILED => "IEEE 802.1X authentication failed",
            Self::CIPHER_SUITE_REJECTED => "cipher suite rejected",
            Self::TDLS_PEER_UNREACHABLE => "TDLS peer unreachable",
            Self::TDLS_UNSPECIFIED => "TDLS teardown, unspecified",
            Self::QOS_UNSPECIFIED => "unspecified QoS reason",
            Self::QOS_INSUFFICIENT_BANDWIDTH => "insufficient QoS bandwidth",
            Self::EXCESS_UNACKED_FRAMES => "excessive unacknowledged frames",
            Self::EXCEEDED_TXOP => "TXOP limit exceeded",
            Self::STA_LEAVING => "STA leaving",
            Self::PEER_REJECT_MECHANISM => "peer does not want to use the mechanism",
            Self::UNKNOWN_TS_BA => "unknown TS or block ack agreement",
            Self::QOS_TIMEOUT => "QoS timeout",
            _ => return None,
        })
    }
}

impl From<u16> for ReasonCode {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<ReasonCode> for u16 {
    fn from(value: ReasonCode) -> Self {
        value.0
    }
}

impl core::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", self.0, name),
            None => write!(f, "{} (unknown)", self.0),
        }
    }
}
