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

//! Base64 related utils.

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::DecodePaddingMode;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;

use crate::Result;

/// Standard alphabet that accepts input with or without trailing `=`.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// URL-safe alphabet, never padded on encode, padding tolerated on decode.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64 encode with the RFC 4648 standard alphabet and `=` padding.
///
/// The output never contains line breaks.
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}

/// Base64 decode.
///
/// A missing trailing `=` is tolerated. Any byte outside the standard
/// alphabet returns a decode error.
pub fn base64_decode(content: &str) -> Result<Vec<u8>> {
    Ok(STANDARD_LENIENT.decode(content)?)
}

/// Turn standard base64 text into base64url text.
///
/// `+` becomes `-`, `/` becomes `_`, and every `=`, `\r` and `\n` is
/// removed. Running it on already escaped text is a no-op.
pub fn base64_url_escape(content: &str) -> String {
    content
        .chars()
        .filter_map(|ch| match ch {
            '+' => Some('-'),
            '/' => Some('_'),
            '=' | '\r' | '\n' => None,
            c => Some(c),
        })
        .collect()
}

/// Unpadded base64url encode.
///
/// Same output as `base64_url_escape(&base64_encode(content))` without the
/// intermediate string.
pub fn base64url_encode(content: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(content)
}

/// Base64url decode, with or without padding.
pub fn base64url_decode(content: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE_LENIENT.decode(content)?)
}
