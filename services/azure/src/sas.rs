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

use std::time::Duration;

use azsign_core::codec::base64_encode;
use azsign_core::percent::{percent_encode, EncodeOptions};
use azsign_core::time::expiry_after;
use azsign_core::utils::require_non_empty;
use azsign_core::{Context, Result};
use log::debug;

use crate::constants::SAS_TOKEN_PREFIX;
use crate::SasCredential;

const SCOPE: &str = "SASToken";

/// When a shared access signature stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    /// Absolute expiry as seconds since epoch, used verbatim.
    At(String),
    /// Valid for this long from the current time of the context clock.
    After(Duration),
}

impl From<&str> for Expiry {
    fn from(value: &str) -> Self {
        Expiry::At(value.to_string())
    }
}

impl From<String> for Expiry {
    fn from(value: String) -> Self {
        Expiry::At(value)
    }
}

impl From<i64> for Expiry {
    fn from(value: i64) -> Self {
        Expiry::At(value.to_string())
    }
}

impl From<Duration> for Expiry {
    fn from(value: Duration) -> Self {
        Expiry::After(value)
    }
}

/// Builder for Service Bus, Event Hubs and Relay shared access signatures.
///
/// - [Generate SAS token](https://learn.microsoft.com/en-us/rest/api/eventhub/generate-sas-token)
///
/// ```
/// use azsign_azure::SasTokenBuilder;
/// use azsign_core::Context;
///
/// let token = SasTokenBuilder::new(Context::new())
///     .build(
///         b"myPrimaryKey",
///         "myNamespace.servicebus.windows.net/myEventHub",
///         "RootManageSharedAccessKey",
///         "1629608276",
///     )
///     .unwrap();
/// assert!(token.starts_with("SharedAccessSignature sr=myNamespace.servicebus.windows.net%2fmyEventHub&sig="));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SasTokenBuilder {
    ctx: Context,
}

impl SasTokenBuilder {
    /// Create a new builder on top of the given context.
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Build a SAS token.
    ///
    /// ## Format
    ///
    /// ```text
    /// SharedAccessSignature sr=<url>&sig=<signature>&se=<expiry>&skn=<key_name>
    /// ```
    ///
    /// `url` is percent-encoded with lowercase hex digits, `signature` is the
    /// base64 HMAC-SHA256 of the string to sign, percent-encoded the same way.
    pub fn build(
        &self,
        key: &[u8],
        url: &str,
        key_name: &str,
        expiry: impl Into<Expiry>,
    ) -> Result<String> {
        require_non_empty(SCOPE, "url", url)?;
        require_non_empty(SCOPE, "keyName", key_name)?;
        require_non_empty(SCOPE, "key", key)?;

        let expiry = match expiry.into() {
            Expiry::At(v) => v,
            Expiry::After(ttl) => expiry_after(self.ctx.clock(), ttl)?.to_string(),
        };
        require_non_empty(SCOPE, "expiry", &expiry)?;

        let encoded_url = percent_encode(url, EncodeOptions::RFC3986_LOWER);
        let string_to_sign = string_to_sign(&encoded_url, &expiry);
        let signature = base64_encode(&self.ctx.hmac_sha256(key, string_to_sign.as_bytes())?);
        let signature = percent_encode(&signature, EncodeOptions::AZURE_SAS_LOWER);

        Ok(format!(
            "{SAS_TOKEN_PREFIX} sr={encoded_url}&sig={signature}&se={expiry}&skn={key_name}"
        ))
    }

    /// Build a SAS token for the resource described by `cred`.
    pub fn build_with_credential(
        &self,
        cred: &SasCredential,
        expiry: impl Into<Expiry>,
    ) -> Result<String> {
        self.build(
            cred.key.as_bytes(),
            &cred.resource_url,
            &cred.key_name,
            expiry,
        )
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// URL-encoded-resourceURI + "\n" + expiry
/// ```
fn string_to_sign(encoded_url: &str, expiry: &str) -> String {
    let s = format!("{encoded_url}\n{expiry}");
    debug!("string to sign: {}", &s);
    s
}

/// Build a SAS token that expires at `expiry` (seconds since epoch).
pub fn sas_token(key: &[u8], url: &str, key_name: &str, expiry: &str) -> Result<String> {
    SasTokenBuilder::default().build(key, url, key_name, expiry)
}

/// Build a SAS token valid for `ttl` from now.
pub fn sas_token_after(key: &[u8], url: &str, key_name: &str, ttl: Duration) -> Result<String> {
    SasTokenBuilder::default().build(key, url, key_name, ttl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use azsign_core::{ErrorKind, FixedClock};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const KEY: &[u8] = b"myPrimaryKey";
    const URL: &str = "myNamespace.servicebus.windows.net/myEventHub";
    const KEY_NAME: &str = "RootManageSharedAccessKey";
    const EXPECTED: &str = "SharedAccessSignature sr=myNamespace.servicebus.windows.net%2fmyEventHub&sig=%2bl9P4WDuWjGTXrA8PeFKGl0g9Nj5OnynM55TK3huc1M%3d&se=1629608276&skn=RootManageSharedAccessKey";

    #[test]
    fn test_sas_token() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert_eq!(sas_token(KEY, URL, KEY_NAME, "1629608276").unwrap(), EXPECTED);
    }

    #[test]
    fn test_sas_token_after_uses_clock() {
        let ctx = Context::new().with_clock(FixedClock::from_timestamp(1629607976).unwrap());
        let builder = SasTokenBuilder::new(ctx);

        let token = builder
            .build(KEY, URL, KEY_NAME, Duration::from_secs(300))
            .unwrap();
        assert_eq!(token, EXPECTED);
        assert_eq!(
            builder.build(KEY, URL, KEY_NAME, 1629608276i64).unwrap(),
            EXPECTED
        );
    }

    #[test]
    fn test_sas_token_with_credential() {
        let cred = SasCredential::new(URL, KEY_NAME, "myPrimaryKey");
        let token = SasTokenBuilder::default()
            .build_with_credential(&cred, "1629608276")
            .unwrap();
        assert_eq!(token, EXPECTED);
    }

    #[test_case(b"", URL, KEY_NAME, "1629608276", "key"; "empty key")]
    #[test_case(KEY, "", KEY_NAME, "1629608276", "url"; "empty url")]
    #[test_case(KEY, URL, "", "1629608276", "keyName"; "empty key name")]
    #[test_case(KEY, URL, KEY_NAME, "", "expiry"; "empty expiry")]
    fn test_sas_token_rejects_empty(key: &[u8], url: &str, key_name: &str, expiry: &str, field: &str) {
        let err = sas_token(key, url, key_name, expiry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), format!("SASToken: {field} may not be empty"));
    }

    #[test]
    fn test_sas_token_after_rejects_empty_before_reading_clock() {
        let err = sas_token_after(KEY, URL, "", Duration::from_secs(60)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
