//! Domain names for multicast DNS and DNS-based service discovery.
//!
//! Names are handled in their textual form: a sequence of labels separated
//! by dots, optionally followed by a final dot marking the name as
//! absolute. Since labels may contain any octet, including the dot itself,
//! the text escapes dots and backslashes with a backslash and all octets
//! outside printable ASCII as a backslash followed by three decimal digits.
//! [`escape_label`] and [`unescape_label`] translate between raw labels and
//! this text.
//!
//! On top of this codec, the module provides:
//!
//! * [`normalize`] for turning a name into its canonical text,
//! * [`equal`] and [`hash`] that treat names as equal regardless of ASCII
//!   case and the way labels have been escaped,
//! * [`join_service_name`] and [`split_service_name`] for composing and
//!   decomposing names of the form `<instance>.<service>.<protocol>.<domain>`
//!   used by DNS-SD,
//! * a number of predicates such as [`is_valid_domain_name`] or
//!   [`is_valid_service_type_strict`], and
//! * [`classify`] which determines the [`Roles`] a name can play.
//!
//! Text is accepted as anything that is `AsRef<[u8]>`. No charset is
//! assumed, all octets are treated alike. Functions producing text write to
//! an [`OctetsBuilder`][octseq::builder::OctetsBuilder] which allows using
//! fixed size buffers. With the `std` feature, variants returning a `String`
//! are available, too.

pub use self::cmp::{ends_with, equal, hash, is_local};
pub use self::error::NameError;
pub use self::label::{
    escape_label, labels, unescape_label, Labels, RawLabel,
};
#[cfg(feature = "std")]
pub use self::normal::{normalize, NameKey};
pub use self::normal::normalize_into;
pub use self::roles::{classify, classify_opt, Roles, RolesFromStrError};
pub use self::service::{
    join_service_name_into, split_service_name,
    split_service_name_skip_instance, split_service_type, ServiceNameParts,
    ServiceType,
};
#[cfg(feature = "std")]
pub use self::service::join_service_name;
pub use self::valid::{
    get_type_from_subtype, is_valid_domain_name, is_valid_fqdn,
    is_valid_host_name, is_valid_service_name, is_valid_service_subtype,
    is_valid_service_type_generic, is_valid_service_type_strict,
};

mod cmp;
mod error;
mod label;
mod normal;
mod roles;
mod service;
mod valid;

//------------ Limits --------------------------------------------------------

/// The maximum length of the textual form of a name in octets.
///
/// This is the limit for escaped names. Since escaping can grow a label to
/// four times its size, it is considerably larger than the 255 octets a name
/// may have on the wire.
pub const MAX_NAME_LEN: usize = 1014;

/// The maximum length of the escaped form of a single label in octets.
pub const MAX_ESCAPED_LABEL_LEN: usize = RawLabel::MAX_LEN * 4;
