//! Core components for building Azure and JWT authorization tokens.
//!
//! This crate provides the building blocks shared by the azsign service crates.
//! Every routine is a pure function over its arguments: given the same inputs
//! it returns the same string, or an [`Error`].
//!
//! ## Overview
//!
//! - **Codec**: base64, base64url and percent-encoding over byte sequences
//! - **Digest Engine**: MD5 and HMAC-SHA256 behind the [`DigestEngine`] trait
//! - **Clock**: current time for expiry calculation behind the [`Clock`] trait
//! - **Context**: a container holding the digest engine, clock and environment
//!
//! ## Example
//!
//! ```
//! use azsign_core::codec::{base64_encode, base64_url_escape};
//! use azsign_core::hash::hex_md5;
//! use azsign_core::percent::{percent_encode, EncodeOptions};
//!
//! assert_eq!(base64_encode(b"hello.world"), "aGVsbG8ud29ybGQ=");
//! assert_eq!(base64_url_escape("a+b/c=="), "a-b_c");
//! assert_eq!(hex_md5(b"happy"), "56ab24c15b72a457069c5ea42fcfc640");
//! assert_eq!(
//!     percent_encode("ns.servicebus.windows.net/hub", EncodeOptions::RFC3986_LOWER),
//!     "ns.servicebus.windows.net%2fhub"
//! );
//! ```
//!
//! ## Utilities
//!
//! - [`codec`]: Base64 encoding utilities
//! - [`percent`]: Percent-encoding utilities
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time and clock utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod codec;
pub mod hash;
pub mod percent;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

mod key;
pub use key::SigningKey;

pub use hash::{DigestAlgorithm, DigestEngine, RustCryptoDigest};
pub use time::{Clock, FixedClock, SystemClock};
