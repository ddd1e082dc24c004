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

use azsign_azure::{sas_token, SasCredential, SasTokenBuilder};
use azsign_core::codec::base64_encode;
use azsign_core::hash::hmac_sha256;
use azsign_core::percent::{percent_decode_utf8, percent_encode, EncodeOptions};
use azsign_core::{Context, ErrorKind, FixedClock, Result};
use pretty_assertions::assert_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Split a token into its `sr`, `sig`, `se` and `skn` values.
fn parse_token(token: &str) -> Vec<(String, String)> {
    let query = token
        .strip_prefix("SharedAccessSignature ")
        .expect("token must start with SharedAccessSignature");
    query
        .split('&')
        .map(|kv| {
            let (k, v) = kv.split_once('=').expect("field must contain =");
            (k.to_string(), v.to_string())
        })
        .collect()
}

#[test]
fn test_sas_token_event_hub() -> Result<()> {
    init();

    let token = sas_token(
        b"myPrimaryKey",
        "myNamespace.servicebus.windows.net/myEventHub",
        "RootManageSharedAccessKey",
        "1629608276",
    )?;

    assert_eq!(
        token,
        "SharedAccessSignature sr=myNamespace.servicebus.windows.net%2fmyEventHub&sig=%2bl9P4WDuWjGTXrA8PeFKGl0g9Nj5OnynM55TK3huc1M%3d&se=1629608276&skn=RootManageSharedAccessKey"
    );
    Ok(())
}

#[test]
fn test_sas_token_fields() -> Result<()> {
    init();

    for url in [
        "https://ns.servicebus.windows.net/queue",
        "ns.servicebus.windows.net/topic/subscriptions/a b",
        "ns.servicebus.windows.net/hub?x=1&y=~",
    ] {
        let token = sas_token(b"key", url, "policy", "1700000000")?;
        let fields = parse_token(&token);
        let names: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["sr", "sig", "se", "skn"]);

        let sr = &fields[0].1;
        assert_eq!(sr, &sr.to_lowercase(), "escapes must use lowercase hex");
        assert_eq!(percent_decode_utf8(sr)?, url);

        let expected_sig = base64_encode(&hmac_sha256(
            b"key",
            format!("{sr}\n1700000000").as_bytes(),
        )?);
        assert_eq!(percent_decode_utf8(&fields[1].1)?, expected_sig);
        assert_eq!(
            fields[1].1,
            percent_encode(&expected_sig, EncodeOptions::AZURE_SAS_LOWER)
        );
        assert_eq!(fields[2].1, "1700000000");
        assert_eq!(fields[3].1, "policy");
    }
    Ok(())
}

#[test]
fn test_sas_token_after_with_fixed_clock() -> Result<()> {
    init();

    let ctx = Context::new().with_clock(FixedClock::from_timestamp(1_700_000_000)?);
    let cred = SasCredential::new("ns.servicebus.windows.net/hub", "policy", "key");

    let token = SasTokenBuilder::new(ctx).build_with_credential(&cred, Duration::from_secs(3600))?;
    let fields = parse_token(&token);
    assert_eq!(fields[2], ("se".to_string(), "1700003600".to_string()));
    Ok(())
}

#[test]
fn test_sas_token_is_deterministic() -> Result<()> {
    let a = sas_token(b"key", "ns/hub", "policy", "1")?;
    let b = sas_token(b"key", "ns/hub", "policy", "1")?;
    assert_eq!(a, b);

    let c = sas_token(b"other", "ns/hub", "policy", "1")?;
    assert_ne!(a, c);
    Ok(())
}

#[test]
fn test_sas_token_rejects_missing_parts() {
    for (key, url, key_name, expiry) in [
        (&b""[..], "ns/hub", "policy", "1"),
        (&b"key"[..], "", "policy", "1"),
        (&b"key"[..], "ns/hub", "", "1"),
        (&b"key"[..], "ns/hub", "policy", ""),
    ] {
        let err = sas_token(key, url, key_name, expiry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
