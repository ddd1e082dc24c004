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

use azsign_core::codec::base64_encode;
use azsign_core::percent::{percent_encode, EncodeOptions};
use azsign_core::utils::require_non_empty;
use azsign_core::{Context, Result};
use log::debug;

use crate::constants::COSMOS_TOKEN_PREFIX;
use crate::{Config, CosmosCredential};

const SCOPE: &str = "CosmosToken";

/// Builder for Cosmos DB master key authorization tokens.
///
/// - [Access control in the Azure Cosmos DB SQL API](https://learn.microsoft.com/en-us/rest/api/cosmos-db/access-control-on-cosmosdb-resources)
///
/// `resource_type` and `resource_link` may be empty for account level
/// operations such as listing databases. Turn on strict mode to reject them.
#[derive(Debug, Clone, Default)]
pub struct CosmosTokenBuilder {
    ctx: Context,
    strict_resource: bool,
}

impl CosmosTokenBuilder {
    /// Create a new builder on top of the given context.
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            strict_resource: false,
        }
    }

    /// Reject empty `resource_type` and `resource_link`.
    pub fn with_strict_resource(mut self, strict: bool) -> Self {
        self.strict_resource = strict;
        self
    }

    /// Apply the options carried by `config`, such as `strict_resource`.
    pub fn with_config(self, config: &Config) -> Self {
        self.with_strict_resource(config.strict_resource.unwrap_or(false))
    }

    /// Build the value of the `Authorization` header.
    ///
    /// `key` is the decoded master key. `date` must be the same RFC 7231
    /// string sent in the `x-ms-date` header.
    pub fn build(
        &self,
        key: &[u8],
        verb: &str,
        resource_type: &str,
        resource_link: &str,
        date: &str,
    ) -> Result<String> {
        require_non_empty(SCOPE, "key", key)?;
        require_non_empty(SCOPE, "date", date)?;
        require_non_empty(SCOPE, "verb", verb)?;
        if self.strict_resource {
            require_non_empty(SCOPE, "type", resource_type)?;
            require_non_empty(SCOPE, "resourceLink", resource_link)?;
        }

        let string_to_sign = string_to_sign(verb, resource_type, resource_link, date);
        let signature = base64_encode(&self.ctx.hmac_sha256(key, string_to_sign.as_bytes())?);

        Ok(format!(
            "{COSMOS_TOKEN_PREFIX}{}",
            percent_encode(&signature, EncodeOptions::AZURE_SAS_LOWER)
        ))
    }

    /// Build the `Authorization` header value with the master key from `cred`.
    pub fn build_with_credential(
        &self,
        cred: &CosmosCredential,
        verb: &str,
        resource_type: &str,
        resource_link: &str,
        date: &str,
    ) -> Result<String> {
        self.build(
            cred.master_key.as_bytes(),
            verb,
            resource_type,
            resource_link,
            date,
        )
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// lower(Verb) + "\n" +
/// lower(ResourceType) + "\n" +
/// ResourceLink + "\n" +
/// lower(Date) + "\n" +
/// "" + "\n"
/// ```
///
/// Only ASCII letters are folded. The resource link keeps its case.
fn string_to_sign(verb: &str, resource_type: &str, resource_link: &str, date: &str) -> String {
    let s = format!(
        "{}\n{}\n{}\n{}\n\n",
        verb.to_ascii_lowercase(),
        resource_type.to_ascii_lowercase(),
        resource_link,
        date.to_ascii_lowercase()
    );
    debug!("string to sign: {}", &s);
    s
}

/// Build a Cosmos DB authorization token with the default context.
pub fn cosmos_auth_token(
    key: &[u8],
    verb: &str,
    resource_type: &str,
    resource_link: &str,
    date: &str,
) -> Result<String> {
    CosmosTokenBuilder::default().build(key, verb, resource_type, resource_link, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use azsign_core::codec::base64_decode;
    use azsign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const MASTER_KEY: &str =
        "dsZQi3KtZmCv1ljt3VNWNm7sQUF1y5rJfC6kv5JiwvW0EndXdDku/dkKBp8/ufDToSxLzR4y+O/0H/t4bQtVNw==";
    const DATE: &str = "Thu, 27 Apr 2017 00:51:12 GMT";
    const EXPECTED: &str =
        "type%3dmaster%26ver%3d1.0%26sig%3dc09PEVJrgp2uQRkr934kFbTqhByc7TVr3OHyqlu%2bc%2bc%3d";

    #[test]
    fn test_string_to_sign() {
        assert_eq!(
            string_to_sign("GET", "dbs", "dbs/ToDoList", DATE),
            "get\ndbs\ndbs/ToDoList\nthu, 27 apr 2017 00:51:12 gmt\n\n"
        );

        // Non-ASCII letters are signed as given.
        assert_eq!(
            string_to_sign("GET", "DBS", "dbs/Ä", "Thu, 27 Apr 2017 İ GMT"),
            "get\ndbs\ndbs/Ä\nthu, 27 apr 2017 İ gmt\n\n"
        );
    }

    #[test]
    fn test_cosmos_auth_token() {
        let _ = env_logger::builder().is_test(true).try_init();

        let key = base64_decode(MASTER_KEY).unwrap();
        let token = cosmos_auth_token(&key, "GET", "dbs", "dbs/ToDoList", DATE).unwrap();
        assert_eq!(token, EXPECTED);

        // Verb, type and date are case-folded before signing.
        let token = cosmos_auth_token(&key, "get", "DBS", "dbs/ToDoList", &DATE.to_uppercase())
            .unwrap();
        assert_eq!(token, EXPECTED);

        // The resource link is not.
        let token = cosmos_auth_token(&key, "GET", "dbs", "dbs/todolist", DATE).unwrap();
        assert_ne!(token, EXPECTED);
    }

    #[test]
    fn test_cosmos_auth_token_with_credential() {
        let cred = CosmosCredential::from_account_key("https://x.documents.azure.com", MASTER_KEY)
            .unwrap();
        let token = CosmosTokenBuilder::default()
            .build_with_credential(&cred, "GET", "dbs", "dbs/ToDoList", DATE)
            .unwrap();
        assert_eq!(token, EXPECTED);
    }

    #[test_case(b"", "GET", DATE, "key"; "empty key")]
    #[test_case(b"k", "", DATE, "verb"; "empty verb")]
    #[test_case(b"k", "GET", "", "date"; "empty date")]
    fn test_cosmos_auth_token_rejects_empty(key: &[u8], verb: &str, date: &str, field: &str) {
        let err = cosmos_auth_token(key, verb, "dbs", "dbs/ToDoList", date).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), format!("CosmosToken: {field} may not be empty"));
    }

    #[test]
    fn test_cosmos_auth_token_resource_policy() {
        let key = base64_decode(MASTER_KEY).unwrap();

        // Listing databases signs an empty type and link.
        let lenient = CosmosTokenBuilder::default();
        assert!(lenient.build(&key, "GET", "", "", DATE).is_ok());

        let strict = CosmosTokenBuilder::default().with_strict_resource(true);
        let err = strict.build(&key, "GET", "", "dbs/ToDoList", DATE).unwrap_err();
        assert_eq!(err.to_string(), "CosmosToken: type may not be empty");
        let err = strict.build(&key, "GET", "dbs", "", DATE).unwrap_err();
        assert_eq!(err.to_string(), "CosmosToken: resourceLink may not be empty");
        assert_eq!(
            strict.build(&key, "GET", "dbs", "dbs/ToDoList", DATE).unwrap(),
            EXPECTED
        );
    }

    #[test]
    fn test_cosmos_builder_with_config() {
        let key = base64_decode(MASTER_KEY).unwrap();

        let config = Config {
            strict_resource: Some(true),
            ..Default::default()
        };
        let builder = CosmosTokenBuilder::default().with_config(&config);
        let err = builder.build(&key, "GET", "", "", DATE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let builder = CosmosTokenBuilder::default().with_config(&Config::default());
        assert!(builder.build(&key, "GET", "", "", DATE).is_ok());
    }
}
