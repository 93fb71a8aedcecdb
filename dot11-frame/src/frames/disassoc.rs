use dot11_macros::frame;

use crate::ReasonCode;

#[frame]
#[derive(Debug, Clone, Copy)]
/// A reader/writer for the fixed part of a Disassociation or
/// Deauthentication frame body.
pub struct ReasonCodeBody {
    /// Return the [`ReasonCode`].
    #[bytes(2)]
    #[into(ReasonCode)]
    reason_code: u16,
}

impl<'f, T: AsRef<[u8]> + ?Sized> ReasonCodeBody<&'f T> {
    /// Return the elements following the reason code, such as vendor
    /// specific elements or a Management MIC element.
    pub fn elements(&self) -> &'f [u8] {
        &self.buffer.as_ref()[Self::size()..]
    }
}
