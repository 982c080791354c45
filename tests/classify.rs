use rstest::rstest;

use domain_sd::name::{classify, classify_opt, Roles};

//----------- Tests ----------------------------------------------------------

/// Classifies a name and compares the result with the expected roles.
///
/// Expected roles are given in their text notation or as `None` for names
/// that are invalid.
#[rstest]
#[case("", Some("DR"))]
#[case(".", Some("DR"))]
#[case("..", None)]
#[case("domain", Some("DN"))]
#[case("domain.", Some("DN DR"))]
#[case(".domain", Some("DN"))]
#[case("domain..", None)]
#[case("a..b", None)]
#[case("foo._bar", Some("DN"))]
#[case("_foo._bar.domain", Some("DN"))]
#[case("name._foo._bar.domain", Some("DN"))]
#[case("foo._tcp", None)]
#[case("foo._udp.local", None)]
#[case("_svc._tcp", Some("ST"))]
#[case("_svc._udp.", Some("ST DR"))]
#[case("_svc._tcp.domain", Some("ST DN"))]
#[case("name._svc._tcp", Some("SN ST"))]
#[case("name._svc._tcp.domain", Some("SN ST DN"))]
#[case("name.svc._tcp.domain", None)]
#[case("Some\\032Name\\.x._svc._TCP.local.", Some("SN ST DN DR"))]
#[case("_inst._sub._svc._tcp", Some("SST ST"))]
#[case("_inst._sub._svc._tcp.domain.", Some("SST ST DN DR"))]
#[case("inst._sub._svc._tcp", None)]
#[case("_inst._sub.svc._tcp", None)]
#[case("name._inst._sub._svc._tcp", Some("SN SST ST"))]
#[case("name._inst._sub._svc._tcp.domain", Some("SN SST ST DN"))]
#[case("name.inst._sub._svc._tcp.domain", None)]
#[case("a.b.c.d.e.f.g._tcp", Some("DN"))]
#[case("foo.\\", None)]
#[case("foo.\\25x", None)]
fn classify_names(#[case] name: &str, #[case] expected: Option<&str>) {
    init_logging();

    let expected = expected.map(|roles| roles.parse::<Roles>().unwrap());
    assert_eq!(classify(name), expected, "{:?}", name);
    assert_eq!(classify_opt(Some(name)), expected, "{:?}", name);
}

#[test]
fn missing_name_is_invalid() {
    init_logging();

    assert_eq!(classify_opt::<str>(None), None);
}

#[cfg(feature = "std")]
#[test]
fn classify_keys() {
    use domain_sd::name::NameKey;

    init_logging();

    let key = NameKey::new("Printer\\.2._IPP._tcp.local.").unwrap();
    assert_eq!(key.roles(), Some("SN ST DN DR".parse().unwrap()));

    let key = NameKey::new("").unwrap();
    assert_eq!(key.roles(), Some("DR".parse().unwrap()));
}

#[rstest]
#[case("", Roles::new())]
#[case("DN", Roles::DOMAIN_NAME)]
#[case("SN ST", Roles {
    service_name: true,
    service_type: true,
    ..Roles::new()
})]
fn roles_notation(#[case] text: &str, #[case] roles: Roles) {
    assert_eq!(text.parse::<Roles>(), Ok(roles));
    assert_eq!(roles.to_string(), text);
}

//----------- Helpers --------------------------------------------------------

fn init_logging() {
    #[cfg(feature = "tracing-subscriber")]
    domain_sd::logging::init_logging();
}
