//! Classifying names by the roles they can play.
//!
//! This is a private module. Its public items are re-exported by the parent.

use super::label::{LabelPrefix, RawLabel};
use super::MAX_NAME_LEN;
use core::{fmt, str};
use tracing::trace;

//------------ Roles ---------------------------------------------------------

/// The roles a name can play in DNS-SD.
///
/// A name can play several roles at once. For instance,
/// `_http._tcp.local.` is a service type, a domain name, and it is
/// absolute.
///
/// This type has a text notation and can be created from it as well. Each
/// role that is present is represented by a token, the roles being
/// `SN` for a service name, `SST` for a service subtype, `ST` for a service
/// type, `DN` for a domain name, and `DR` for the root. Tokens are
/// separated by space.
///
/// ```
/// use core::str::FromStr;
/// use domain_sd::name::Roles;
///
/// let roles = Roles::from_str("ST DN").unwrap();
/// assert!(roles.service_type && roles.domain_name);
/// assert_eq!(format!("{}", roles), "ST DN");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Roles {
    /// The name is a service instance, i.e., `<instance>.<type>`.
    pub service_name: bool,

    /// The name contains a service subtype, i.e., `<sub>._sub.<type>`.
    pub service_subtype: bool,

    /// The name contains a service type, i.e., `_<service>._tcp` or
    /// `_<service>._udp`.
    pub service_type: bool,

    /// The name is or ends with an ordinary domain name.
    pub domain_name: bool,

    /// The name is absolute, i.e., ends in the root.
    pub domain_root: bool,
}

impl Roles {
    /// A name that only is a domain name.
    pub const DOMAIN_NAME: Self = Roles {
        service_name: false,
        service_subtype: false,
        service_type: false,
        domain_name: true,
        domain_root: false,
    };

    /// Creates new roles with all roles unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether no role is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

//--- BitOr

impl core::ops::BitOr for Roles {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Roles {
            service_name: self.service_name || other.service_name,
            service_subtype: self.service_subtype || other.service_subtype,
            service_type: self.service_type || other.service_type,
            domain_name: self.domain_name || other.domain_name,
            domain_root: self.domain_root || other.domain_root,
        }
    }
}

//--- Display & FromStr

impl fmt::Display for Roles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for (set, token) in [
            (self.service_name, "SN"),
            (self.service_subtype, "SST"),
            (self.service_type, "ST"),
            (self.domain_name, "DN"),
            (self.domain_root, "DR"),
        ] {
            if set {
                write!(f, "{}{}", sep, token)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

impl str::FromStr for Roles {
    type Err = RolesFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut res = Roles::new();
        for token in s.split(' ') {
            match token {
                "SN" | "sn" => res.service_name = true,
                "SST" | "sst" => res.service_subtype = true,
                "ST" | "st" => res.service_type = true,
                "DN" | "dn" => res.domain_name = true,
                "DR" | "dr" => res.domain_root = true,
                "" => {}
                _ => return Err(RolesFromStrError),
            }
        }
        Ok(res)
    }
}

//------------ Rule ----------------------------------------------------------

/// The number of leading labels the rules look at.
const PREFIX_LEN: usize = 5;

/// A pattern for service names.
///
/// A rule matches if the label at index `protocol` is one of the known
/// protocols and, if `subtype` is given, the label at that index is `_sub`.
/// Once it matches, all labels listed in `underscored` must start with an
/// underscore or the name is invalid.
struct Rule {
    subtype: Option<usize>,
    protocol: usize,
    underscored: &'static [usize],
    roles: Roles,
}

/// The service name rules in the order they are tried.
const RULES: [Rule; 4] = [
    // _sub._sub._svc._tcp
    Rule {
        subtype: Some(1),
        protocol: 3,
        underscored: &[0, 2],
        roles: Roles {
            service_name: false,
            service_subtype: true,
            service_type: true,
            domain_name: false,
            domain_root: false,
        },
    },
    // _svc._tcp
    Rule {
        subtype: None,
        protocol: 1,
        underscored: &[0],
        roles: Roles {
            service_name: false,
            service_subtype: false,
            service_type: true,
            domain_name: false,
            domain_root: false,
        },
    },
    // name._sub._sub._svc._tcp
    Rule {
        subtype: Some(2),
        protocol: 4,
        underscored: &[1, 3],
        roles: Roles {
            service_name: true,
            service_subtype: true,
            service_type: true,
            domain_name: false,
            domain_root: false,
        },
    },
    // name._svc._tcp
    Rule {
        subtype: None,
        protocol: 2,
        underscored: &[1],
        roles: Roles {
            service_name: true,
            service_subtype: false,
            service_type: true,
            domain_name: false,
            domain_root: false,
        },
    },
];

impl Rule {
    fn matches(&self, prefix: &LabelPrefix<PREFIX_LEN>) -> bool {
        prefix.check(self.protocol, RawLabel::is_protocol)
            && self.subtype.map_or(true, |idx| {
                prefix.check(idx, RawLabel::is_subtype_marker)
            })
    }

    /// Returns the roles of a matching name or `None` if it is invalid.
    fn apply(&self, prefix: &LabelPrefix<PREFIX_LEN>) -> Option<Roles> {
        for &idx in self.underscored {
            if !prefix.check(idx, RawLabel::is_underscored) {
                trace!("label {} of a service name lacks underscore", idx);
                return None;
            }
        }
        let mut res = self.roles;
        res.domain_name = prefix.count() > self.protocol + 1;
        Some(res)
    }
}

//------------ classify ------------------------------------------------------

/// Determines the roles a name can play.
///
/// Returns `None` if the name is invalid.
///
/// The empty name and `"."` are the root. A single leading dot is ignored,
/// any other empty label makes the name invalid. As do labels that fail to
/// unescape.
///
/// Names with one of the protocol labels `_tcp` or `_udp` at the right
/// place are considered service types, subtypes, or service names. If such
/// a name lacks the underscore where the service grammar requires one, it is
/// invalid. All other names are plain domain names, even if some of their
/// labels start with an underscore.
pub fn classify<N: AsRef<[u8]> + ?Sized>(name: &N) -> Option<Roles> {
    let text = name.as_ref();
    if text.len() > MAX_NAME_LEN {
        trace!("name of {} octets is too long", text.len());
        return None;
    }
    let text = match text.first() {
        Some(b'.') => &text[1..],
        _ => text,
    };
    let prefix = match LabelPrefix::<PREFIX_LEN>::scan(text) {
        Ok(prefix) => prefix,
        Err(err) => {
            trace!("invalid name: {}", err);
            return None;
        }
    };
    if prefix.has_empty() {
        trace!("name contains an empty label");
        return None;
    }
    let mut res = if prefix.count() == 0 {
        Roles::new()
    } else {
        match RULES.iter().find(|rule| rule.matches(&prefix)) {
            Some(rule) => rule.apply(&prefix)?,
            None => Roles::DOMAIN_NAME,
        }
    };
    res.domain_root = prefix.is_absolute();
    Some(res)
}

/// Determines the roles of a name that may be missing.
///
/// A missing name is invalid. Otherwise this is the same as [`classify`].
pub fn classify_opt<N: AsRef<[u8]> + ?Sized>(
    name: Option<&N>,
) -> Option<Roles> {
    name.and_then(classify)
}

//============ Error Types ===================================================

//------------ RolesFromStrError ---------------------------------------------

/// An error happened when converting a string to roles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RolesFromStrError;

impl fmt::Display for RolesFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal roles token")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RolesFromStrError {}

//============ Testing =======================================================
