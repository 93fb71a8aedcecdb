use crate::frame::MacAddress;

/// Locally initiated Disassociation and Deauthentication frames that are
/// waiting for their over-the-air acknowledgment. At most one of each is
/// outstanding.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct PendingTeardown {
    disassoc: Option<MacAddress>,
    deauth: Option<MacAddress>,
}

impl PendingTeardown {
    /// Record a Disassociation sent to `peer`.
    pub fn set_disassoc(&mut self, peer: MacAddress) {
        self.disassoc = Some(peer);
    }

    /// Record a Deauthentication sent to `peer`.
    pub fn set_deauth(&mut self, peer: MacAddress) {
        self.deauth = Some(peer);
    }

    pub fn disassoc(&self) -> Option<MacAddress> {
        self.disassoc
    }

    pub fn deauth(&self) -> Option<MacAddress> {
        self.deauth
    }

    /// Returns `true` if a teardown towards `peer` awaits its acknowledgment.
    pub fn is_pending(&self, peer: &MacAddress) -> bool {
        self.disassoc.as_ref() == Some(peer) || self.deauth.as_ref() == Some(peer)
    }

    /// Forget the teardowns towards `peer`.
    pub fn clear(&mut self, peer: &MacAddress) {
        if self.disassoc.as_ref() == Some(peer) {
            self.disassoc = None;
        }

        if self.deauth.as_ref() == Some(peer) {
            self.deauth = None;
        }
    }
}
