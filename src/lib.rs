//! Domain names for multicast DNS and DNS-based service discovery.
//!
//! This crate provides the building blocks for handling domain names the
//! way mDNS responders and DNS-SD browsers see them: as text with escaped
//! labels. It can translate between escaped text and raw labels, bring a
//! name into a canonical form, compare and hash names, compose and
//! decompose service names, check names against the DNS-SD grammar, and
//! determine which roles a name can play.
//!
//! All of this lives in the [name] module.
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables using the types `Bytes` and `BytesMut` from the
//!    [bytes](https://github.com/tokio-rs/bytes) crate as octets builders.
//! * `serde`: Enables serde serialization for a number of basic types.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default. Without it, the crate only writes to fixed size buffers.
//! * `tracing-subscriber`: Enables the
#![cfg_attr(feature = "tracing-subscriber", doc = "  [logging]")]
#![cfg_attr(not(feature = "tracing-subscriber"), doc = "  logging")]
//!   module which sets up a subscriber for the events this crate emits.
//!   This feature also enables the `std` feature.

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

#[macro_use]
extern crate core;

#[cfg(feature = "tracing-subscriber")]
pub mod logging;
pub mod name;
