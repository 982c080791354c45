//! Canonical text of names.
//!
//! This is a private module. Its public items are re-exported by the parent.

use super::error::NameError;
use super::label::{append, Labels};
use super::MAX_NAME_LEN;
use octseq::array::Array;
use octseq::builder::OctetsBuilder;
#[cfg(feature = "std")]
use std::string::String;

//------------ normalize -----------------------------------------------------

/// Appends the canonical text of a name to an octets builder.
///
/// The canonical text is produced by unescaping each label and escaping it
/// again, so that every raw label has exactly one spelling. A final dot is
/// kept if the name had one. The empty name and `"."` both denote the root
/// and are normalized to `"."`.
///
/// Fails if a label fails to unescape, if an empty label appears anywhere
/// but as the root, if the canonical text would be longer than
/// [`MAX_NAME_LEN`] octets, or if `target` runs out of space.
pub fn normalize_into<N, Target>(
    name: &N,
    target: &mut Target,
) -> Result<(), NameError>
where
    N: AsRef<[u8]> + ?Sized,
    Target: OctetsBuilder + ?Sized,
{
    let mut buf = Array::<MAX_NAME_LEN>::new();
    compose_normal(name.as_ref(), &mut buf).map_err(|err| match err {
        NameError::BufferTooSmall => NameError::NameTooLong,
        err => err,
    })?;
    append(target, AsRef::<[u8]>::as_ref(&buf))
}

/// Returns the canonical text of a name.
///
/// See [`normalize_into`] for the details.
#[cfg(feature = "std")]
pub fn normalize<N: AsRef<[u8]> + ?Sized>(
    name: &N,
) -> Result<String, NameError> {
    let mut buf = Array::<MAX_NAME_LEN>::new();
    normalize_into(name, &mut buf)?;
    // Escaped text is ASCII only.
    let text: &[u8] = buf.as_ref();
    Ok(text.iter().copied().map(char::from).collect())
}

fn compose_normal<Target: OctetsBuilder + ?Sized>(
    text: &[u8],
    target: &mut Target,
) -> Result<(), NameError> {
    if text.is_empty() || text == b"." {
        return append(target, b".");
    }
    let mut labels = Labels::new(text);
    let mut first = true;
    for label in labels.by_ref() {
        let label = label?;
        if label.is_empty() {
            return Err(NameError::EmptyLabel);
        }
        if !first {
            append(target, b".")?;
        }
        first = false;
        label.compose_escaped(target)?;
    }
    if labels.is_absolute() {
        append(target, b".")?;
    }
    Ok(())
}

//------------ NameKey -------------------------------------------------------

/// A name in canonical text usable as a key.
///
/// The key keeps the normalized text of a name. Two keys compare equal if
/// their names are [`equal`][super::equal], i.e., ASCII case is ignored,
/// and the hash value follows [`hash`][super::hash]. This makes the type
/// suitable for indexing records by name.
#[cfg(feature = "std")]
#[derive(Clone)]
pub struct NameKey(String);

#[cfg(feature = "std")]
impl NameKey {
    /// Creates a key from a name by normalizing it.
    pub fn new<N: AsRef<[u8]> + ?Sized>(name: &N) -> Result<Self, NameError> {
        normalize(name).map(NameKey)
    }

    /// Returns the canonical text of the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an iterator over the raw labels of the name.
    pub fn labels(&self) -> Labels<'_> {
        Labels::new(self.0.as_bytes())
    }

    /// Returns the roles the name can play.
    ///
    /// Returns `None` if the name is not a valid domain name.
    pub fn roles(&self) -> Option<super::Roles> {
        super::classify(self.as_str())
    }

    /// Converts the key into its canonical text.
    pub fn into_string(self) -> String {
        self.0
    }
}

//--- FromStr and TryFrom

#[cfg(feature = "std")]
impl core::str::FromStr for NameKey {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(feature = "std")]
impl<'a> TryFrom<&'a str> for NameKey {
    type Error = NameError;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

//--- AsRef

#[cfg(feature = "std")]
impl AsRef<str> for NameKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "std")]
impl AsRef<[u8]> for NameKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

//--- PartialEq, Eq, and Hash

#[cfg(feature = "std")]
impl PartialEq for NameKey {
    fn eq(&self, other: &Self) -> bool {
        super::equal(&self.0, &other.0)
    }
}

#[cfg(feature = "std")]
impl Eq for NameKey {}

#[cfg(feature = "std")]
impl core::hash::Hash for NameKey {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write_u32(super::hash(&self.0))
    }
}

//--- Display and Debug

#[cfg(feature = "std")]
impl core::fmt::Display for NameKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "std")]
impl core::fmt::Debug for NameKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("NameKey").field(&self.0).finish()
    }
}

//--- Serialize and Deserialize

#[cfg(all(feature = "serde", feature = "std"))]
impl serde::Serialize for NameKey {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(all(feature = "serde", feature = "std"))]
impl<'de> serde::Deserialize<'de> for NameKey {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        NameKey::new(&text).map_err(D::Error::custom)
    }
}

//============ Testing =======================================================
