//! Checking the syntax of names.
//!
//! This is a private module. Its public items are re-exported by the parent.
//!
//! None of the predicates here fail. Text that doesn’t unescape or exceeds
//! the length limits simply isn’t valid.

use super::label::{labels, scan_label, unescape_label, LabelPrefix, RawLabel};
use super::MAX_NAME_LEN;

//------------ Host and Domain Names -----------------------------------------

/// Returns whether the text is a valid host name.
///
/// A host name is a single, non-empty label without a final dot.
pub fn is_valid_host_name<N: AsRef<[u8]> + ?Sized>(name: &N) -> bool {
    let text = name.as_ref();
    if text.is_empty() || text.len() > MAX_NAME_LEN {
        return false;
    }
    match scan_label(text, 0) {
        Ok((label, end)) => !label.is_empty() && end == text.len(),
        Err(_) => false,
    }
}

/// Returns whether the text is a valid domain name.
///
/// The empty text and `"."` are valid and denote the root. Any other name
/// needs to consist of non-empty labels separated by single dots. It may
/// end in a dot.
pub fn is_valid_domain_name<N: AsRef<[u8]> + ?Sized>(name: &N) -> bool {
    let text = name.as_ref();
    if text.len() > MAX_NAME_LEN {
        return false;
    }
    if text.is_empty() || text == b"." {
        return true;
    }
    labels(text).all(|label| matches!(label, Ok(label) if !label.is_empty()))
}

/// Returns whether the text is a valid fully qualified domain name.
///
/// This is a valid domain name with at least two labels that doesn’t look
/// like an IPv4 address in dotted-quad notation or an IPv6 address.
pub fn is_valid_fqdn<N: AsRef<[u8]> + ?Sized>(name: &N) -> bool {
    let text = name.as_ref();
    if !is_valid_domain_name(text) || text.contains(&b':') {
        return false;
    }
    let mut count = 0;
    let mut numeric = true;
    for label in labels(text) {
        match label {
            Ok(label) => {
                numeric &= label.iter().all(|ch| ch.is_ascii_digit());
                count += 1;
            }
            Err(_) => return false,
        }
    }
    count >= 2 && !(numeric && count == 4)
}

//------------ Service Names -------------------------------------------------

/// Returns whether the text is a valid service instance name.
///
/// Instance names are free-form. They only must fit into a single label,
/// i.e., be between 1 and 63 octets long.
pub fn is_valid_service_name<N: AsRef<[u8]> + ?Sized>(name: &N) -> bool {
    (1..=RawLabel::MAX_LEN).contains(&name.as_ref().len())
}

/// Returns whether the text is a service type in the wider sense.
///
/// This is the case for any name of two or more labels that all start with
/// an underscore. It includes service types with unknown protocols as well
/// as service subtypes.
pub fn is_valid_service_type_generic<N: AsRef<[u8]> + ?Sized>(
    name: &N,
) -> bool {
    let text = name.as_ref();
    if text.len() > MAX_NAME_LEN {
        return false;
    }
    let mut count = 0;
    for label in labels(text) {
        match label {
            Ok(label) if label.is_underscored() => count += 1,
            _ => return false,
        }
    }
    count >= 2
}

/// Returns whether the text is a service type with a known protocol.
///
/// Such a service type has exactly two labels. The first starts with an
/// underscore, the second is either `_tcp` or `_udp`.
pub fn is_valid_service_type_strict<N: AsRef<[u8]> + ?Sized>(
    name: &N,
) -> bool {
    let text = name.as_ref();
    if text.len() > MAX_NAME_LEN {
        return false;
    }
    match LabelPrefix::<2>::scan(text) {
        Ok(prefix) => {
            prefix.count() == 2
                && prefix.check(0, RawLabel::is_underscored)
                && prefix.check(1, RawLabel::is_protocol)
        }
        Err(_) => false,
    }
}

/// Returns whether the text is a service subtype.
///
/// A service subtype has exactly four labels: the subtype which must start
/// with an underscore, the label `_sub`, and a service type with a known
/// protocol as accepted by [`is_valid_service_type_strict`].
pub fn is_valid_service_subtype<N: AsRef<[u8]> + ?Sized>(name: &N) -> bool {
    let text = name.as_ref();
    if text.len() > MAX_NAME_LEN {
        return false;
    }
    match LabelPrefix::<4>::scan(text) {
        Ok(prefix) => {
            prefix.count() == 4
                && prefix.check(0, RawLabel::is_underscored)
                && prefix.check(1, RawLabel::is_subtype_marker)
                && prefix.check(2, RawLabel::is_underscored)
                && prefix.check(3, RawLabel::is_protocol)
        }
        Err(_) => false,
    }
}

/// Returns the service type of a service subtype.
///
/// The service type is returned as the text of the last two labels of
/// `name` exactly as it appears in `name`. Returns `None` if `name` isn’t a
/// valid service subtype.
pub fn get_type_from_subtype<N: AsRef<[u8]> + ?Sized>(
    name: &N,
) -> Option<&[u8]> {
    let text = name.as_ref();
    if !is_valid_service_subtype(text) {
        return None;
    }
    let (_, pos) = unescape_label(text, 0).ok()?;
    let (_, pos) = unescape_label(text, pos).ok()?;
    Some(&text[pos..])
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn host_names() {
        assert!(!is_valid_host_name(""));
        assert!(!is_valid_host_name("."));
        assert!(!is_valid_host_name("sf.ooo."));
        assert!(!is_valid_host_name("sfooo."));
        assert!(is_valid_host_name("sfooo"));
        assert!(is_valid_host_name("sf\\.ooo"));
        assert!(!is_valid_host_name("sfooo\\"));
        assert!(!is_valid_host_name(&[b'a'; 64][..]));
    }

    #[test]
    fn domain_names() {
        assert!(!is_valid_domain_name(".."));
        assert!(is_valid_domain_name("."));
        assert!(is_valid_domain_name(""));
        assert!(!is_valid_domain_name("com.."));
        assert!(is_valid_domain_name("com."));
        assert!(is_valid_domain_name("com"));
        assert!(!is_valid_domain_name(".com"));
        assert!(!is_valid_domain_name("a..com"));
        assert!(!is_valid_domain_name("a.\\2"));
        assert!(!is_valid_domain_name(&[b'a'; MAX_NAME_LEN + 1][..]));
    }

    #[test]
    fn fqdns() {
        assert!(!is_valid_fqdn("."));
        assert!(!is_valid_fqdn(""));
        assert!(!is_valid_fqdn("foo"));
        assert!(is_valid_fqdn("foo.bar"));
        assert!(is_valid_fqdn("foo.bar."));
        assert!(is_valid_fqdn("gnurz.foo.bar."));
        assert!(!is_valid_fqdn("192.168.50.1"));
        assert!(!is_valid_fqdn("::1"));
        assert!(!is_valid_fqdn(".192.168.50.1."));
        assert!(is_valid_fqdn("192.168.50.1.in-addr"));
        assert!(is_valid_fqdn("168.50.1"));
    }

    #[test]
    fn service_names() {
        assert!(is_valid_service_name("My Printer. Second floor"));
        assert!(!is_valid_service_name(""));
        assert!(is_valid_service_name(&[b'a'; 63][..]));
        assert!(!is_valid_service_name(&[b'a'; 64][..]));
    }

    #[test]
    fn service_types() {
        assert!(is_valid_service_type_generic("_foo._bar._waldo"));
        assert!(!is_valid_service_type_strict("_foo._bar._waldo"));
        assert!(!is_valid_service_subtype("_foo._bar._waldo"));

        assert!(is_valid_service_type_generic("_foo._tcp"));
        assert!(is_valid_service_type_strict("_foo._tcp"));
        assert!(is_valid_service_type_strict("_foo._UDP."));
        assert!(!is_valid_service_subtype("_foo._tcp"));

        assert!(!is_valid_service_type_generic("_foo._bar.waldo"));
        assert!(!is_valid_service_type_strict("_foo._bar.waldo"));
        assert!(!is_valid_service_subtype("_foo._bar.waldo"));

        assert!(!is_valid_service_type_generic(""));
        assert!(!is_valid_service_type_strict(""));
        assert!(!is_valid_service_subtype(""));

        assert!(is_valid_service_type_generic("_foo._sub._bar._tcp"));
        assert!(!is_valid_service_type_strict("_foo._sub._bar._tcp"));
        assert!(is_valid_service_subtype("_foo._sub._bar._tcp"));

        assert!(!is_valid_service_type_generic("_foo"));
        assert!(!is_valid_service_type_strict("foo._tcp"));
        assert!(!is_valid_service_subtype("_foo._sub._bar._tcp.local"));
        assert!(!is_valid_service_subtype("_foo._sub.bar._tcp"));
    }

    #[test]
    fn type_from_subtype() {
        assert_eq!(
            get_type_from_subtype("_foo._sub._bar._tcp"),
            Some(&b"_bar._tcp"[..])
        );
        assert_eq!(
            get_type_from_subtype("_f\\.o._SUB._bar._tcp."),
            Some(&b"_bar._tcp."[..])
        );
        assert_eq!(get_type_from_subtype("_bar._tcp"), None);
    }
}
