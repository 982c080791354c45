#![cfg(feature = "std")]

use std::collections::HashMap;

use octseq::array::Array;
use rstest::rstest;

use domain_sd::name::{
    equal, escape_label, get_type_from_subtype, hash, is_valid_domain_name,
    is_valid_fqdn, is_valid_host_name, is_valid_service_subtype,
    is_valid_service_type_generic, is_valid_service_type_strict,
    join_service_name, labels, normalize, split_service_name,
    unescape_label, NameError, NameKey, RawLabel, MAX_ESCAPED_LABEL_LEN,
};

//----------- Escaping -------------------------------------------------------

#[rstest]
#[case(&b"foo.bar"[..], "foo\\.bar")]
#[case(&b"back\\slash"[..], "back\\\\slash")]
#[case(&b"sp ace"[..], "sp ace")]
#[case(&b"\x00\x7f"[..], "\\000\\127")]
#[case(&b""[..], "")]
fn escape_raw_labels(#[case] raw: &[u8], #[case] text: &str) {
    let mut buf = Vec::new();
    escape_label(raw, &mut buf).unwrap();
    assert_eq!(buf, text.as_bytes());

    let (label, pos) = unescape_label(text.as_bytes(), 0).unwrap();
    assert_eq!(label.as_slice(), raw);
    assert_eq!(pos, text.len());
}

#[test]
fn escape_worst_case_fits() {
    let raw = [0xffu8; RawLabel::MAX_LEN];
    let mut buf = Array::<MAX_ESCAPED_LABEL_LEN>::new();
    escape_label(&raw, &mut buf).unwrap();
    assert_eq!(AsRef::<[u8]>::as_ref(&buf).len(), MAX_ESCAPED_LABEL_LEN);
}

#[test]
fn walk_labels() {
    let text = b"foo\\.bar.\\066az.local.";
    let raw: Vec<_> = labels(text)
        .map(|label| label.unwrap().as_slice().to_vec())
        .collect();
    assert_eq!(raw, [&b"foo.bar"[..], b"Baz", b"local"]);

    let mut pos = 0;
    let mut count = 0;
    while pos < text.len() {
        let (_, next) = unescape_label(text, pos).unwrap();
        assert!(next > pos);
        pos = next;
        count += 1;
    }
    assert_eq!(count, 3);
}

//----------- Normalizing and comparing --------------------------------------

#[rstest]
#[case("foo.foo\\046.", "foo.foo\\..")]
#[case("foo.foo\\.foo.", "foo.foo\\.foo.")]
#[case("fo\\\\o\\..f oo.", "fo\\\\o\\..f oo.")]
#[case("", ".")]
#[case(".", ".")]
fn normalize_names(#[case] name: &str, #[case] expected: &str) {
    let normal = normalize(name).unwrap();
    assert_eq!(normal, expected);
    assert!(equal(name, &normal));
    assert_eq!(hash(name), hash(&normal));
    assert_eq!(normalize(&normal).unwrap(), normal);
}

#[test]
fn normalize_failures() {
    assert_eq!(normalize("a..b"), Err(NameError::EmptyLabel));
    assert_eq!(normalize("a\\"), Err(NameError::MalformedEscape));
    assert_eq!(normalize("a\\256"), Err(NameError::MalformedEscape));
}

#[test]
fn equal_and_hash() {
    let a = "\\065aa bbb\\.\\046cc.cc\\\\.dee.fff.";
    let b = "Aaa BBB\\.\\.cc.cc\\\\.dee.fff";
    assert!(equal(a, b));
    assert_eq!(hash(a), hash(b));

    assert!(equal("A", "a"));
    assert!(!equal("a", "aaa"));
    assert_eq!(
        hash("ccc\\065aa.aa\\.b\\\\."),
        hash("cccAaa.aa\\.b\\\\")
    );
}

#[test]
fn index_by_name() {
    let mut records = HashMap::new();
    records.insert(NameKey::new("MyPrinter._ipp._tcp.local.").unwrap(), 1);
    records.insert(NameKey::new("host.local").unwrap(), 2);

    let key = NameKey::new("myprinter._IPP._TCP.local").unwrap();
    assert_eq!(records.get(&key), Some(&1));
    let key = NameKey::new("\\104ost.local.").unwrap();
    assert_eq!(records.get(&key), Some(&2));
    let key = NameKey::new("other.local").unwrap();
    assert_eq!(records.get(&key), None);
}

//----------- Service names --------------------------------------------------

#[test]
fn service_name_round_trip() {
    let name = join_service_name(
        Some(b"foo.foo.foo \\."),
        "_http._tcp",
        "test.local",
    )
    .unwrap();
    assert_eq!(name, b"foo\\.foo\\.foo \\\\\\.._http._tcp.test.local");

    let parts = split_service_name(&name).unwrap();
    assert_eq!(parts.instance.unwrap().as_slice(), b"foo.foo.foo \\.");
    assert_eq!(parts.service_type.to_vec(), b"_http._tcp");
    assert_eq!(parts.domain, b"test.local");
}

#[test]
fn service_name_failures() {
    assert_eq!(
        join_service_name(Some(&[b'x'; 64]), "_http._tcp", "local"),
        Err(NameError::LabelTooLong)
    );
    assert_eq!(
        split_service_name("instance._http"),
        Err(NameError::TruncatedName)
    );
}

//----------- Validators -----------------------------------------------------

#[rstest]
#[case("_foo._bar._waldo", true, false, false)]
#[case("_foo._tcp", true, true, false)]
#[case("_foo._bar.waldo", false, false, false)]
#[case("", false, false, false)]
#[case("_foo._sub._bar._tcp", true, false, true)]
fn service_types(
    #[case] name: &str,
    #[case] generic: bool,
    #[case] strict: bool,
    #[case] subtype: bool,
) {
    assert_eq!(is_valid_service_type_generic(name), generic);
    assert_eq!(is_valid_service_type_strict(name), strict);
    assert_eq!(is_valid_service_subtype(name), subtype);
}

#[test]
fn subtype_to_type() {
    assert_eq!(
        get_type_from_subtype("_foo._sub._bar._tcp"),
        Some(&b"_bar._tcp"[..])
    );
    assert_eq!(get_type_from_subtype("_foo._bar._tcp"), None);
}

#[rstest]
#[case("..", false, false, false)]
#[case(".", true, false, false)]
#[case("", true, false, false)]
#[case("com..", false, false, false)]
#[case("com.", true, false, false)]
#[case("com", true, true, false)]
#[case("foo.bar", true, false, true)]
#[case("gnurz.foo.bar.", true, false, true)]
#[case("192.168.50.1", true, false, false)]
#[case("sf\\.ooo", true, true, false)]
fn domain_names(
    #[case] name: &str,
    #[case] domain: bool,
    #[case] host: bool,
    #[case] fqdn: bool,
) {
    assert_eq!(is_valid_domain_name(name), domain);
    assert_eq!(is_valid_host_name(name), host);
    assert_eq!(is_valid_fqdn(name), fqdn);
}

#[cfg(feature = "bytes")]
#[test]
fn normalize_into_bytes() {
    use bytes::BytesMut;
    use domain_sd::name::normalize_into;

    let mut buf = BytesMut::new();
    normalize_into("\\070oo.local.", &mut buf).unwrap();
    assert_eq!(&buf[..], b"Foo.local.");
}
