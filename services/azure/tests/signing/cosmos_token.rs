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
use azsign_azure::{cosmos_auth_token, CosmosCredential, CosmosTokenBuilder};
use azsign_core::codec::{base64_decode, base64_encode};
use azsign_core::hash::hmac_sha256;
use azsign_core::percent::percent_decode_utf8;
use azsign_core::{Context, ErrorKind, Result};
use pretty_assertions::assert_eq;

const MASTER_KEY: &str =
    "dsZQi3KtZmCv1ljt3VNWNm7sQUF1y5rJfC6kv5JiwvW0EndXdDku/dkKBp8/ufDToSxLzR4y+O/0H/t4bQtVNw==";
const DATE: &str = "Thu, 27 Apr 2017 00:51:12 GMT";

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_cosmos_token_list_documents() -> Result<()> {
    init();

    let key = base64_decode(MASTER_KEY)?;
    let token = cosmos_auth_token(&key, "GET", "dbs", "dbs/ToDoList", DATE)?;
    assert_eq!(
        token,
        "type%3dmaster%26ver%3d1.0%26sig%3dc09PEVJrgp2uQRkr934kFbTqhByc7TVr3OHyqlu%2bc%2bc%3d"
    );

    let decoded = percent_decode_utf8(&token)?;
    assert_eq!(
        decoded,
        "type=master&ver=1.0&sig=c09PEVJrgp2uQRkr934kFbTqhByc7TVr3OHyqlu+c+c="
    );
    Ok(())
}

#[test]
fn test_cosmos_token_signature() -> Result<()> {
    init();

    let key = base64_decode(MASTER_KEY)?;
    for (verb, resource_type, link) in [
        ("POST", "docs", "dbs/ToDoList/colls/Items"),
        ("DELETE", "colls", "dbs/ToDoList/colls/Items"),
        ("GET", "", ""),
    ] {
        let token = cosmos_auth_token(&key, verb, resource_type, link, DATE)?;
        let sig = percent_decode_utf8(&token)?
            .strip_prefix("type=master&ver=1.0&sig=")
            .expect("token must carry master type and version")
            .to_string();

        let string_to_sign = format!(
            "{}\n{}\n{}\n{}\n\n",
            verb.to_lowercase(),
            resource_type,
            link,
            DATE.to_lowercase()
        );
        assert_eq!(
            sig,
            base64_encode(&hmac_sha256(&key, string_to_sign.as_bytes())?)
        );
    }
    Ok(())
}

#[test]
fn test_cosmos_token_with_credential() -> Result<()> {
    let cred = CosmosCredential::from_account_key(
        "https://myaccount.documents.azure.com:443/",
        MASTER_KEY,
    )?;

    let builder = CosmosTokenBuilder::new(Context::new());
    assert_eq!(
        builder.build_with_credential(&cred, "GET", "dbs", "dbs/ToDoList", DATE)?,
        cosmos_auth_token(cred.master_key.as_bytes(), "GET", "dbs", "dbs/ToDoList", DATE)?
    );
    Ok(())
}

#[test]
fn test_cosmos_token_strict_resource() -> Result<()> {
    let key = base64_decode(MASTER_KEY)?;
    let builder = CosmosTokenBuilder::new(Context::new()).with_strict_resource(true);

    let err = builder.build(&key, "GET", "", "", DATE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(builder.build(&key, "GET", "dbs", "dbs/ToDoList", DATE).is_ok());
    Ok(())
}
