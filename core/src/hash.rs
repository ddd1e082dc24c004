// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash related utils.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;
use sha2::Digest;
use sha2::Sha256;

use crate::codec::base64_encode;
use crate::{Error, Result};

/// Digest algorithms understood by [`digest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// MD5, 16 bytes.
    ///
    /// Kept only to reproduce existing signed artifacts. It is not a
    /// security primitive.
    Md5,
    /// SHA-1, 20 bytes.
    Sha1,
    /// SHA-256, 32 bytes.
    Sha256,
}

impl DigestAlgorithm {
    /// Length of the digest in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "MD5" => Ok(DigestAlgorithm::Md5),
            "SHA1" | "SHA-1" => Ok(DigestAlgorithm::Sha1),
            "SHA256" | "SHA-256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(Error::unsupported_algorithm(format!(
                "unknown or unsupported `{s}` digest type"
            ))),
        }
    }
}

impl Display for DigestAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestAlgorithm::Md5 => f.write_str("MD5"),
            DigestAlgorithm::Sha1 => f.write_str("SHA1"),
            DigestAlgorithm::Sha256 => f.write_str("SHA256"),
        }
    }
}

/// DigestEngine computes the digests used by token builders.
///
/// Implementations must be deterministic and must not keep state between
/// calls. [`RustCryptoDigest`] is the production implementation.
pub trait DigestEngine: Debug + Send + Sync + 'static {
    /// Compute `algorithm` over `data`, returning raw bytes.
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>>;

    /// HMAC-SHA256 of `content` keyed by `key`, returning 32 raw bytes.
    fn hmac_sha256(&self, key: &[u8], content: &[u8]) -> Result<Vec<u8>>;
}

/// DigestEngine backed by the RustCrypto `md5`, `sha1`, `sha2` and `hmac` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoDigest;

impl DigestEngine for RustCryptoDigest {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        Ok(match algorithm {
            DigestAlgorithm::Md5 => md5::compute(data).0.to_vec(),
            DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        })
    }

    fn hmac_sha256(&self, key: &[u8], content: &[u8]) -> Result<Vec<u8>> {
        hmac_sha256(key, content)
    }
}

/// Digest `data` with the algorithm called `name` (`"MD5"`, `"SHA1"`, `"SHA256"`).
pub fn digest(name: &str, data: &[u8]) -> Result<Vec<u8>> {
    RustCryptoDigest.digest(name.parse()?, data)
}

/// Lowercase hex encoded digest of `data` with the algorithm called `name`.
pub fn hex_digest(name: &str, data: &[u8]) -> Result<String> {
    digest(name, data).map(hex::encode)
}

/// Lowercase hex encoded MD5 hash.
///
/// For compatibility with existing artifacts only.
pub fn hex_md5(content: &[u8]) -> String {
    format!("{:x}", md5::compute(content))
}

/// HMAC with SHA256 hash.
///
/// The key must not be empty. An empty message is accepted.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::invalid_argument("hmac key may not be empty"));
    }

    let mut h = Hmac::<Sha256>::new_from_slice(key)
        .map_err(|e| Error::provider_failure(format!("hmac-sha256 rejected the key: {e}")))?;
    h.update(content);

    Ok(h.finalize().into_bytes().to_vec())
}

/// Base64 encoded HMAC with SHA256 hash.
pub fn base64_hmac_sha256(key: &[u8], content: &[u8]) -> Result<String> {
    hmac_sha256(key, content).map(|v| base64_encode(&v))
}
