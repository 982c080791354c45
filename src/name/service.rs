//! Composing and decomposing service names.
//!
//! This is a private module. Its public items are re-exported by the parent.
//!
//! DNS-SD names a service instance by
//! `<instance>.<service>.<protocol>.<domain>` where the instance name is a
//! single label of free-form text, service and protocol form the service
//! type, and the domain is where the service has been registered.

use super::error::NameError;
use super::label::{append, escape_label, unescape_label, RawLabel};
use super::MAX_NAME_LEN;
use core::fmt;
use octseq::array::Array;
use octseq::builder::OctetsBuilder;
#[cfg(feature = "std")]
use std::vec::Vec;
use tracing::trace;

//------------ join ----------------------------------------------------------

/// Appends a service name composed from its parts to an octets builder.
///
/// The instance name is escaped as a single label, so any dots it contains
/// end up as part of the label. Service type and domain are already expected
/// in their textual form and are copied without checking. If `instance` is
/// `None`, the result is only `<service_type>.<domain>`. If `domain` is
/// empty, it is left out together with its separator.
///
/// Fails if the instance is empty or longer than 63 octets, if the result
/// is longer than [`MAX_NAME_LEN`] octets, or if `target` runs out of
/// space.
pub fn join_service_name_into<T, D, Target>(
    instance: Option<&[u8]>,
    service_type: &T,
    domain: &D,
    target: &mut Target,
) -> Result<(), NameError>
where
    T: AsRef<[u8]> + ?Sized,
    D: AsRef<[u8]> + ?Sized,
    Target: OctetsBuilder + ?Sized,
{
    let mut buf = Array::<MAX_NAME_LEN>::new();
    compose_service_name(
        instance,
        service_type.as_ref(),
        domain.as_ref(),
        &mut buf,
    )
    .map_err(|err| match err {
        NameError::BufferTooSmall => NameError::NameTooLong,
        err => err,
    })?;
    append(target, AsRef::<[u8]>::as_ref(&buf))
}

/// Returns a service name composed from its parts.
///
/// See [`join_service_name_into`] for the details. The result is returned
/// as octets since service type and domain are copied verbatim.
#[cfg(feature = "std")]
pub fn join_service_name<T, D>(
    instance: Option<&[u8]>,
    service_type: &T,
    domain: &D,
) -> Result<Vec<u8>, NameError>
where
    T: AsRef<[u8]> + ?Sized,
    D: AsRef<[u8]> + ?Sized,
{
    let mut res = Vec::new();
    join_service_name_into(instance, service_type, domain, &mut res)?;
    Ok(res)
}

fn compose_service_name<Target: OctetsBuilder + ?Sized>(
    instance: Option<&[u8]>,
    service_type: &[u8],
    domain: &[u8],
    target: &mut Target,
) -> Result<(), NameError> {
    if let Some(instance) = instance {
        if instance.is_empty() {
            return Err(NameError::EmptyLabel);
        }
        if instance.len() > RawLabel::MAX_LEN {
            return Err(NameError::LabelTooLong);
        }
        escape_label(instance, target)?;
        append(target, b".")?;
    }
    append(target, service_type)?;
    if !domain.is_empty() {
        append(target, b".")?;
        append(target, domain)?;
    }
    Ok(())
}

//------------ split ---------------------------------------------------------

/// Unescapes the label at `pos` which must exist.
fn take_label(
    text: &[u8],
    pos: usize,
) -> Result<(RawLabel, usize), NameError> {
    if pos >= text.len() {
        trace!("service name ends after {} octets", pos);
        return Err(NameError::TruncatedName);
    }
    unescape_label(text, pos)
}

/// Splits the service type and domain off the text starting at `pos`.
fn split_tail(
    text: &[u8],
    pos: usize,
) -> Result<(ServiceType, &[u8]), NameError> {
    let (service, pos) = take_label(text, pos)?;
    let (protocol, pos) = take_label(text, pos)?;
    Ok((ServiceType { service, protocol }, &text[pos..]))
}

/// Splits a service name into its parts.
///
/// The first label is unescaped and becomes the instance name. The next two
/// labels are unescaped to form the service type. The remaining text is the
/// domain. It is returned as is, i.e., still escaped.
///
/// Fails if a label fails to unescape or if the name has fewer than three
/// labels.
pub fn split_service_name<N: AsRef<[u8]> + ?Sized>(
    name: &N,
) -> Result<ServiceNameParts<'_>, NameError> {
    let text = name.as_ref();
    let (instance, pos) = take_label(text, 0)?;
    let (service_type, domain) = split_tail(text, pos)?;
    Ok(ServiceNameParts {
        instance: Some(instance),
        service_type,
        domain,
    })
}

/// Splits a service name into its parts but skips the instance name.
///
/// This behaves like [`split_service_name`] except that the instance name
/// is not kept and the returned parts’ `instance` is `None`. The instance
/// label still needs to be well-formed.
pub fn split_service_name_skip_instance<N: AsRef<[u8]> + ?Sized>(
    name: &N,
) -> Result<ServiceNameParts<'_>, NameError> {
    let text = name.as_ref();
    let (_, pos) = take_label(text, 0)?;
    let (service_type, domain) = split_tail(text, pos)?;
    Ok(ServiceNameParts {
        instance: None,
        service_type,
        domain,
    })
}

/// Splits a name without an instance into service type and domain.
///
/// This is the counterpart to [`join_service_name`] without an instance.
/// The first two labels form the service type, the remaining text is the
/// domain.
pub fn split_service_type<N: AsRef<[u8]> + ?Sized>(
    name: &N,
) -> Result<ServiceNameParts<'_>, NameError> {
    let (service_type, domain) = split_tail(name.as_ref(), 0)?;
    Ok(ServiceNameParts {
        instance: None,
        service_type,
        domain,
    })
}

//------------ ServiceNameParts ----------------------------------------------

/// The parts of a service name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceNameParts<'a> {
    /// The raw instance name if it was requested.
    pub instance: Option<RawLabel>,

    /// The service type.
    pub service_type: ServiceType,

    /// The escaped text of the domain.
    pub domain: &'a [u8],
}

//------------ ServiceType ---------------------------------------------------

/// The two raw labels of a service type.
///
/// The textual form of the type as produced by [`compose`][Self::compose]
/// are the two raw labels joined by a dot without any escaping, e.g.,
/// `_http._tcp`. The [`Display`][fmt::Display] implementation, on the
/// other hand, escapes both labels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServiceType {
    /// The service label, e.g., `_http`.
    service: RawLabel,

    /// The protocol label, e.g., `_tcp`.
    protocol: RawLabel,
}

impl ServiceType {
    /// Returns the service label.
    pub fn service(&self) -> &RawLabel {
        &self.service
    }

    /// Returns the protocol label.
    pub fn protocol(&self) -> &RawLabel {
        &self.protocol
    }

    /// Returns whether the type uses one of the protocols `_tcp` or `_udp`.
    pub fn has_known_protocol(&self) -> bool {
        self.service.is_underscored() && self.protocol.is_protocol()
    }

    /// Appends the unescaped text of the service type to an octets builder.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), NameError> {
        append(target, self.service.as_slice())?;
        append(target, b".")?;
        append(target, self.protocol.as_slice())
    }

    /// Returns the unescaped text of the service type.
    #[cfg(feature = "std")]
    pub fn to_vec(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(
            self.service.len() + self.protocol.len() + 1,
        );
        res.extend_from_slice(self.service.as_slice());
        res.push(b'.');
        res.extend_from_slice(self.protocol.as_slice());
        res
    }
}

//--- Display

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.service, self.protocol)
    }
}

//============ Testing =======================================================
