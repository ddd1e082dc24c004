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

//! Percent-encoding (URL escaping) utils.

use percent_encoding::percent_decode;
use percent_encoding::percent_encode as encode_with_set;
use percent_encoding::AsciiSet;
use percent_encoding::CONTROLS;
use percent_encoding::NON_ALPHANUMERIC;

use crate::{Error, Result};

/// AsciiSet for [RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986#section-2.3)
///
/// Everything except `A-Z a-z 0-9 - . _ ~` is encoded.
pub static RFC3986_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet used by Azure shared access signatures.
///
/// Controls, non-ASCII bytes and the reserved characters below are encoded.
/// Note `~` is encoded here while RFC 3986 keeps it.
pub static AZURE_SAS_ENCODE_SET: AsciiSet = CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'~');

/// Which characters get escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeMode {
    /// Keep only the RFC 3986 unreserved set.
    #[default]
    Rfc3986,
    /// Escape the reserved set required by Azure signing.
    AzureSas,
}

/// Case of the hex digits in `%XX` triplets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexCase {
    /// `%2F`
    #[default]
    Upper,
    /// `%2f`
    Lower,
}

/// Options for [`percent_encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Escaping alphabet.
    pub mode: EncodeMode,
    /// Hex digit case.
    pub case: HexCase,
}

impl EncodeOptions {
    /// Strict RFC 3986 escaping with uppercase triplets.
    pub const RFC3986: Self = Self {
        mode: EncodeMode::Rfc3986,
        case: HexCase::Upper,
    };

    /// Strict RFC 3986 escaping with lowercase triplets, used for SAS resource urls.
    pub const RFC3986_LOWER: Self = Self {
        mode: EncodeMode::Rfc3986,
        case: HexCase::Lower,
    };

    /// Azure signing escaping with lowercase triplets, used for signatures.
    pub const AZURE_SAS_LOWER: Self = Self {
        mode: EncodeMode::AzureSas,
        case: HexCase::Lower,
    };

    /// Set the escaping mode.
    pub fn with_mode(mut self, mode: EncodeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the hex digit case.
    pub fn with_case(mut self, case: HexCase) -> Self {
        self.case = case;
        self
    }

    fn ascii_set(&self) -> &'static AsciiSet {
        match self.mode {
            EncodeMode::Rfc3986 => &RFC3986_ENCODE_SET,
            EncodeMode::AzureSas => &AZURE_SAS_ENCODE_SET,
        }
    }
}

/// Percent-encode the UTF-8 bytes of `content`.
///
/// Multi-byte characters produce one `%XX` triplet per byte.
pub fn percent_encode(content: &str, opts: EncodeOptions) -> String {
    percent_encode_bytes(content.as_bytes(), opts)
}

/// Percent-encode raw bytes.
pub fn percent_encode_bytes(content: &[u8], opts: EncodeOptions) -> String {
    let encoded = encode_with_set(content, opts.ascii_set());
    match opts.case {
        HexCase::Upper => encoded.to_string(),
        HexCase::Lower => {
            let mut s = String::with_capacity(content.len() * 3);
            // `%` is in every set, so only encoded triplets start with it.
            for chunk in encoded {
                if chunk.starts_with('%') {
                    s.push_str(&chunk.to_ascii_lowercase());
                } else {
                    s.push_str(chunk);
                }
            }
            s
        }
    }
}

/// Decode percent-encoded text back into bytes.
///
/// Every `%` must be followed by two hex digits; hex case does not matter.
pub fn percent_decode_bytes(content: &str) -> Result<Vec<u8>> {
    let bytes = content.as_bytes();
    let mut idx = 0;
    while let Some(pos) = bytes[idx..].iter().position(|b| *b == b'%') {
        let start = idx + pos;
        let triplet = bytes.get(start + 1..start + 3);
        if !triplet.is_some_and(|v| v.iter().all(u8::is_ascii_hexdigit)) {
            return Err(Error::decode(format!(
                "invalid percent-encoded triplet at offset {start}"
            )));
        }
        idx = start + 3;
    }

    Ok(percent_decode(bytes).collect())
}

/// Decode percent-encoded text and require the result to be UTF-8.
pub fn percent_decode_utf8(content: &str) -> Result<String> {
    Ok(String::from_utf8(percent_decode_bytes(content)?)?)
}
