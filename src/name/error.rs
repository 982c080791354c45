//! The error type of the name codec.
//!
//! This is a private module. Its public types are re-exported by the parent.

use core::fmt;
use octseq::builder::ShortBuf;

//------------ NameError -----------------------------------------------------

/// An error happened while decoding, encoding, or composing a name.
///
/// All of these errors concern the one name handed to the failing function.
/// The name should be rejected, retrying will not help.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// An invalid escape sequence was encountered.
    ///
    /// This is a backslash at the very end of the text or a decimal escape
    /// that isn’t exactly three digits or whose value exceeds 255.
    MalformedEscape,

    /// A label would exceed the 63 octet limit.
    LabelTooLong,

    /// An empty label appeared in a place other than the root.
    EmptyLabel,

    /// The textual name would exceed [`MAX_NAME_LEN`] octets.
    ///
    /// [`MAX_NAME_LEN`]: super::MAX_NAME_LEN
    NameTooLong,

    /// The output builder ran out of space.
    BufferTooSmall,

    /// The name has fewer labels than required.
    TruncatedName,
}

//--- From

impl From<ShortBuf> for NameError {
    fn from(_: ShortBuf) -> Self {
        NameError::BufferTooSmall
    }
}

//--- Display and Error

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            NameError::MalformedEscape => "invalid escape sequence found",
            NameError::LabelTooLong => {
                "domain name label longer than 63 octets"
            }
            NameError::EmptyLabel => "empty domain name label",
            NameError::NameTooLong => "domain name too long",
            NameError::BufferTooSmall => "the output buffer was too short",
            NameError::TruncatedName => "too few labels in domain name",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NameError {}
