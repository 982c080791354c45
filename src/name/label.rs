//! Labels and their escaped text representation.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::error::NameError;
use core::{borrow, cmp, fmt, hash, iter, ops, slice};
use octseq::builder::{OctetsBuilder, ShortBuf};

//------------ RawLabel ------------------------------------------------------

/// The raw content of a single domain name label.
///
/// A label is a sequence of up to 63 octets. Any octet value is allowed,
/// the label carries no charset. Since labels are short, this type doesn’t
/// allocate but keeps the content in a 64 octet array.
///
/// Like labels in the DNS, raw labels compare and hash ignoring ASCII case.
/// The [`Display`][fmt::Display] implementation produces the escaped form
/// also produced by [`escape_label`].
//
//  The first octet of the array is the length of the label, the remainder
//  is the content.
#[derive(Clone, Copy)]
pub struct RawLabel([u8; 64]);

/// # Creation
///
impl RawLabel {
    /// Domain name labels have a maximum length of 63 octets.
    pub const MAX_LEN: usize = 63;

    /// Returns a new, empty label.
    #[must_use]
    pub const fn empty() -> Self {
        RawLabel([0; 64])
    }

    /// Creates a label from an octets slice.
    ///
    /// Fails if the slice is longer than 63 octets.
    pub fn from_slice(slice: &[u8]) -> Result<Self, NameError> {
        if slice.len() > Self::MAX_LEN {
            return Err(NameError::LabelTooLong);
        }
        let mut res = Self::empty();
        res.0[0] = slice.len() as u8;
        res.0[1..=slice.len()].copy_from_slice(slice);
        Ok(res)
    }

    /// Appends an octet to the label.
    ///
    /// Fails if the label is already 63 octets long.
    pub fn push(&mut self, ch: u8) -> Result<(), NameError> {
        let len = usize::from(self.0[0]);
        if len >= Self::MAX_LEN {
            return Err(NameError::LabelTooLong);
        }
        self.0[len + 1] = ch;
        self.0[0] += 1;
        Ok(())
    }
}

/// # Properties
///
impl RawLabel {
    /// Returns the length of the label’s content.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.0[0])
    }

    /// Returns whether this is the empty label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }

    /// Returns a reference to the label’s content.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0[1..=self.len()]
    }

    /// Iterator over the octets of the label.
    pub fn iter(&self) -> iter::Copied<slice::Iter<u8>> {
        self.as_slice().iter().copied()
    }

    /// Returns whether the label starts with an underscore.
    ///
    /// Labels of service types, service subtypes and protocols all do.
    #[must_use]
    pub fn is_underscored(&self) -> bool {
        self.as_slice().first() == Some(&b'_')
    }

    /// Returns whether the label is one of the protocols `_tcp` or `_udp`.
    #[must_use]
    pub fn is_protocol(&self) -> bool {
        self.as_slice().eq_ignore_ascii_case(b"_tcp")
            || self.as_slice().eq_ignore_ascii_case(b"_udp")
    }

    /// Returns whether the label is the subtype marker `_sub`.
    #[must_use]
    pub fn is_subtype_marker(&self) -> bool {
        self.as_slice().eq_ignore_ascii_case(b"_sub")
    }

    /// Appends the escaped form of the label to an octets builder.
    pub fn compose_escaped<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), NameError> {
        escape_label(self.as_slice(), target)
    }
}

//--- Default

impl Default for RawLabel {
    fn default() -> Self {
        Self::empty()
    }
}

//--- Deref, AsRef, and Borrow

impl ops::Deref for RawLabel {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for RawLabel {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl borrow::Borrow<[u8]> for RawLabel {
    fn borrow(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- PartialEq and Eq

impl<T: AsRef<[u8]> + ?Sized> PartialEq<T> for RawLabel {
    fn eq(&self, other: &T) -> bool {
        self.as_slice().eq_ignore_ascii_case(other.as_ref())
    }
}

impl Eq for RawLabel {}

//--- PartialOrd and Ord

impl PartialOrd for RawLabel {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RawLabel {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.iter()
            .map(|ch| ch.to_ascii_lowercase())
            .cmp(other.iter().map(|ch| ch.to_ascii_lowercase()))
    }
}

//--- Hash

impl hash::Hash for RawLabel {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        (self.len() as u8).hash(state);
        for ch in self.iter() {
            ch.to_ascii_lowercase().hash(state)
        }
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a RawLabel {
    type Item = u8;
    type IntoIter = iter::Copied<slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display and Debug

impl fmt::Display for RawLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ch in self.iter() {
            if ch == b'.' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if !is_printable(ch) {
                write!(f, "\\{:03}", ch)?;
            } else {
                write!(f, "{}", ch as char)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for RawLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("RawLabel(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ Escaping ------------------------------------------------------

/// Returns whether an octet can appear unescaped in a label’s text.
fn is_printable(ch: u8) -> bool {
    (0x20..0x7F).contains(&ch)
}

/// Appends a slice to a builder, translating its error.
pub(super) fn append<Target: OctetsBuilder + ?Sized>(
    target: &mut Target,
    slice: &[u8],
) -> Result<(), NameError> {
    target
        .append_slice(slice)
        .map_err(|err| NameError::from(Into::<ShortBuf>::into(err)))
}

/// Appends the escaped text of a raw label to an octets builder.
///
/// Dots and backslashes are escaped by a preceding backslash. Octets outside
/// the printable ASCII range are replaced by a backslash followed by their
/// value as exactly three decimal digits. All other octets are copied.
///
/// The function doesn’t check the length of `raw`. It fails only if the
/// builder runs out of space, in which case the builder may contain part
/// of the escaped label.
pub fn escape_label<Target: OctetsBuilder + ?Sized>(
    raw: &[u8],
    target: &mut Target,
) -> Result<(), NameError> {
    for &ch in raw {
        if ch == b'.' || ch == b'\\' {
            append(target, &[b'\\', ch])?;
        } else if !is_printable(ch) {
            append(
                target,
                &[
                    b'\\',
                    b'0' + ch / 100,
                    b'0' + (ch / 10) % 10,
                    b'0' + ch % 10,
                ],
            )?;
        } else {
            append(target, &[ch])?;
        }
    }
    Ok(())
}

//------------ Unescaping ----------------------------------------------------

/// Reads the value of a decimal digit at the given position.
fn digit_at(text: &[u8], pos: usize) -> Result<u16, NameError> {
    match text.get(pos) {
        Some(ch) if ch.is_ascii_digit() => Ok(u16::from(ch - b'0')),
        _ => Err(NameError::MalformedEscape),
    }
}

/// Reads one possibly escaped octet starting at `pos`.
///
/// Returns the octet, whether it was escaped, and the position after it.
/// `pos` must be within `text`.
fn octet_at(text: &[u8], pos: usize) -> Result<(u8, bool, usize), NameError> {
    let ch = text[pos];
    if ch != b'\\' {
        return Ok((ch, false, pos + 1));
    }
    let ch = match text.get(pos + 1) {
        Some(ch) => *ch,
        None => return Err(NameError::MalformedEscape),
    };
    if !ch.is_ascii_digit() {
        return Ok((ch, true, pos + 2));
    }
    let value = u16::from(ch - b'0') * 100
        + digit_at(text, pos + 2)? * 10
        + digit_at(text, pos + 3)?;
    match u8::try_from(value) {
        Ok(value) => Ok((value, true, pos + 4)),
        Err(_) => Err(NameError::MalformedEscape),
    }
}

/// Unescapes the label starting at `pos` without consuming its separator.
///
/// Returns the label and the position of the unescaped dot that ended it
/// or the length of `text` if the label ran to the end.
pub(super) fn scan_label(
    text: &[u8],
    mut pos: usize,
) -> Result<(RawLabel, usize), NameError> {
    let mut label = RawLabel::empty();
    while pos < text.len() {
        let (ch, escaped, next) = octet_at(text, pos)?;
        if ch == b'.' && !escaped {
            break;
        }
        label.push(ch)?;
        pos = next;
    }
    Ok((label, pos))
}

/// Unescapes the label of a textual name starting at position `pos`.
///
/// The label ends at the first unescaped dot or the end of `text`. The dot
/// is consumed, too. Returns the raw label and the position of the
/// next label. If `pos` is at the end of `text`, the empty label is
/// returned.
///
/// A backslash followed by three decimal digits is the octet of that
/// value. A backslash followed by any other octet is that octet. The
/// function fails with [`NameError::MalformedEscape`] on a backslash at the
/// end of the text, on a decimal escape with less than three digits or a
/// value over 255, and with [`NameError::LabelTooLong`] if the label has
/// more than 63 octets.
pub fn unescape_label(
    text: &[u8],
    pos: usize,
) -> Result<(RawLabel, usize), NameError> {
    let (label, end) = scan_label(text, pos)?;
    if end < text.len() {
        Ok((label, end + 1))
    } else {
        Ok((label, end))
    }
}

//------------ Labels --------------------------------------------------------

/// Returns an iterator over the raw labels of a textual name.
pub fn labels<N: AsRef<[u8]> + ?Sized>(name: &N) -> Labels<'_> {
    Labels::new(name.as_ref())
}

/// An iterator over the raw labels of a textual name.
///
/// The iterator splits the text at unescaped dots. A dot at the very end
/// does not produce an empty label, so both `"local"` and `"local."` result
/// in one label, while the empty text produces no labels at all and `"."`
/// a single empty label.
///
/// If a label fails to unescape, the iterator returns the error and stops.
#[derive(Clone, Debug)]
pub struct Labels<'a> {
    /// The text of the name.
    text: &'a [u8],

    /// The position of the next label.
    pos: usize,

    /// Whether the label returned last was followed by a dot.
    dotted: bool,
}

impl<'a> Labels<'a> {
    /// Creates an iterator over the labels in `text`.
    pub fn new(text: &'a [u8]) -> Self {
        Labels {
            text,
            pos: 0,
            dotted: true,
        }
    }

    /// Returns the text that hasn’t been iterated over yet.
    pub fn remaining(&self) -> &'a [u8] {
        &self.text[self.pos..]
    }

    /// Returns whether the name ends in an unescaped dot.
    ///
    /// This is only meaningful once the iterator is exhausted. The empty
    /// name counts as absolute.
    pub fn is_absolute(&self) -> bool {
        self.dotted
    }
}

impl Iterator for Labels<'_> {
    type Item = Result<RawLabel, NameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }
        match scan_label(self.text, self.pos) {
            Ok((label, end)) => {
                self.dotted = end < self.text.len();
                self.pos = if self.dotted { end + 1 } else { end };
                Some(Ok(label))
            }
            Err(err) => {
                self.pos = self.text.len();
                self.dotted = false;
                Some(Err(err))
            }
        }
    }
}

//------------ LabelPrefix ---------------------------------------------------

/// The first few labels of a name plus some facts about all of them.
///
/// This is used by the predicates that only need to look at a fixed number
/// of labels at the start of a name.
#[derive(Clone, Debug)]
pub(super) struct LabelPrefix<const N: usize> {
    /// The first `N` labels.
    labels: [RawLabel; N],

    /// The total number of labels in the name.
    count: usize,

    /// Whether any of the labels is empty.
    has_empty: bool,

    /// Whether the name ends in an unescaped dot.
    absolute: bool,
}

impl<const N: usize> LabelPrefix<N> {
    /// Scans a textual name.
    pub fn scan(text: &[u8]) -> Result<Self, NameError> {
        let mut res = LabelPrefix {
            labels: [RawLabel::empty(); N],
            count: 0,
            has_empty: false,
            absolute: true,
        };
        let mut labels = Labels::new(text);
        for label in labels.by_ref() {
            let label = label?;
            res.has_empty |= label.is_empty();
            if let Some(slot) = res.labels.get_mut(res.count) {
                *slot = label;
            }
            res.count += 1;
        }
        res.absolute = labels.is_absolute();
        Ok(res)
    }

    /// Returns the label with the given index if it is within the prefix.
    pub fn get(&self, index: usize) -> Option<&RawLabel> {
        if index < self.count {
            self.labels.get(index)
        } else {
            None
        }
    }

    /// Returns the total number of labels.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns whether any label of the name is empty.
    pub fn has_empty(&self) -> bool {
        self.has_empty
    }

    /// Returns whether the name ended in an unescaped dot.
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Returns whether the label at `index` exists and matches `op`.
    pub fn check(
        &self,
        index: usize,
        op: impl FnOnce(&RawLabel) -> bool,
    ) -> bool {
        self.get(index).map(op).unwrap_or(false)
    }
}

//============ Testing =======================================================
