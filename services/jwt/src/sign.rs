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
use azsign_core::codec::base64url_encode;
use azsign_core::utils::require_non_empty;
use azsign_core::{Context, Error, Result};
use log::debug;
use serde::Serialize;

use crate::Header;

const SCOPE: &str = "JWTHMAC256";

/// JwtSigner produces HS256 JWTs in compact serialization.
///
/// Header and payload are treated as opaque text. They are not parsed or
/// validated as JSON.
#[derive(Debug, Clone, Default)]
pub struct JwtSigner {
    ctx: Context,
}

impl JwtSigner {
    /// Create a new signer on top of the given context.
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Sign already serialized `header` and `payload`.
    ///
    /// ## Format
    ///
    /// ```text
    /// base64url(header) + "." + base64url(payload) + "." + base64url(HMAC-SHA256(secret, signing input))
    /// ```
    pub fn sign(&self, secret: &[u8], header: &str, payload: &str) -> Result<String> {
        require_non_empty(SCOPE, "secret", secret)?;
        require_non_empty(SCOPE, "header", header)?;
        require_non_empty(SCOPE, "payload", payload)?;

        let signing_input = format!(
            "{}.{}",
            base64url_encode(header.as_bytes()),
            base64url_encode(payload.as_bytes())
        );
        debug!("jwt signing input: {signing_input}");

        let signature = self.ctx.hmac_sha256(secret, signing_input.as_bytes())?;
        Ok(format!("{signing_input}.{}", base64url_encode(&signature)))
    }

    /// Serialize `header` and `claims` as JSON and sign them.
    pub fn encode<T: Serialize>(&self, secret: &[u8], header: &Header, claims: &T) -> Result<String> {
        let header = serde_json::to_string(header).map_err(|e| {
            Error::invalid_argument("failed to serialize jwt header").with_source(e)
        })?;
        let payload = serde_json::to_string(claims).map_err(|e| {
            Error::invalid_argument("failed to serialize jwt claims").with_source(e)
        })?;

        self.sign(secret, &header, &payload)
    }
}

/// Build an HS256 JWT from serialized header and payload with the default context.
pub fn jwt_hmac256(secret: &[u8], header: &str, payload: &str) -> Result<String> {
    JwtSigner::default().sign(secret, header, payload)
}

/// Build an HS256 JWT from a header and serializable claims with the default context.
pub fn encode<T: Serialize>(secret: &[u8], header: &Header, claims: &T) -> Result<String> {
    JwtSigner::default().encode(secret, header, claims)
}
