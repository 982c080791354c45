//! Comparing and hashing names.
//!
//! This is a private module. Its public items are re-exported by the parent.

use super::label::{unescape_label, Labels};

//------------ equal ---------------------------------------------------------

/// Returns the labels of a name, treating `"."` like the empty name.
fn name_labels(text: &[u8]) -> Labels<'_> {
    if text == b"." {
        Labels::new(b"")
    } else {
        Labels::new(text)
    }
}

/// Returns whether two names are equal.
///
/// Both names are split into their raw labels. They are equal if they have
/// the same number of labels and each pair of labels is equal when ignoring
/// ASCII case. Thus, the way a label has been escaped doesn’t matter and
/// neither does a final dot.
///
/// A name with a label that fails to unescape is not equal to anything,
/// not even itself.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: AsRef<[u8]> + ?Sized,
    B: AsRef<[u8]> + ?Sized,
{
    let mut a = name_labels(a.as_ref());
    let mut b = name_labels(b.as_ref());
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(Ok(left)), Some(Ok(right))) => {
                if left != right {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

//------------ hash ----------------------------------------------------------

/// Returns a hash value for a name.
///
/// The hash is calculated over the length and the lowercased content of
/// each raw label. Names that are [`equal`] therefore have the same hash
/// value.
///
/// Hashing stops at the first label that fails to unescape.
pub fn hash<N: AsRef<[u8]> + ?Sized>(name: &N) -> u32 {
    let mut res = 0u32;
    for label in name_labels(name.as_ref()) {
        let label = match label {
            Ok(label) => label,
            Err(_) => break,
        };
        res = res.wrapping_mul(31).wrapping_add(label.len() as u32);
        for ch in label.iter() {
            res = res
                .wrapping_mul(31)
                .wrapping_add(u32::from(ch.to_ascii_lowercase()));
        }
    }
    res
}

//------------ ends_with -----------------------------------------------------

/// Returns whether a name ends with the given suffix.
///
/// This is the case if the name, starting at one of its labels, is
/// [`equal`] to `suffix`. Every name but the root ends with itself. The
/// root doesn’t end with anything.
pub fn ends_with<N, S>(name: &N, suffix: &S) -> bool
where
    N: AsRef<[u8]> + ?Sized,
    S: AsRef<[u8]> + ?Sized,
{
    let name = name.as_ref();
    let mut pos = 0;
    while pos < name.len() {
        if equal(&name[pos..], suffix) {
            return true;
        }
        pos = match unescape_label(name, pos) {
            Ok((_, pos)) => pos,
            Err(_) => return false,
        };
    }
    false
}

/// Returns whether a name is inside the `local` domain.
///
/// Names in this domain are resolved via multicast DNS.
pub fn is_local<N: AsRef<[u8]> + ?Sized>(name: &N) -> bool {
    ends_with(name, "local")
}

//============ Testing =======================================================
