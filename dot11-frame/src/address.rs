//! IEEE 802 MAC addresses.

/// A 48-bit IEEE 802 MAC address.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// The broadcast address.
    pub const BROADCAST: MacAddress = MacAddress([0xff; 6]);

    /// Create an address from its six octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Query whether the individual/group bit is set. This covers both
    /// multicast addresses and the broadcast address.
    pub const fn is_group(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether this is a group address other than broadcast.
    pub fn is_multicast(&self) -> bool {
        self.is_group() && !self.is_broadcast()
    }

    /// Query whether this is an individual address.
    pub const fn is_unicast(&self) -> bool {
        !self.is_group()
    }

    /// Return the octets of the address.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

/// # Panics
///
/// Panics if the slice is shorter than six octets.
impl From<&[u8]> for MacAddress {
    fn from(a: &[u8]) -> Self {
        let mut b = [0u8; 6];
        b.copy_from_slice(&a[..6]);
        Self(b)
    }
}

impl AsRef<[u8]> for MacAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let a = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a[0], a[1], a[2], a[3], a[4], a[5]
        )
    }
}
