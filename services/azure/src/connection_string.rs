use std::collections::HashMap;

use azsign_core::{Error, Result};

use crate::constants::*;
use crate::{CosmosCredential, SasCredential};

/// Parses a Service Bus or Event Hubs [connection string][1] into a SAS credential.
///
/// ```text
/// Endpoint=sb://<namespace>.servicebus.windows.net/;SharedAccessKeyName=<name>;SharedAccessKey=<key>[;EntityPath=<entity>]
/// ```
///
/// The `sb://` scheme becomes `https://` and `EntityPath`, when present, is
/// appended to the resource url.
///
/// [1]: https://learn.microsoft.com/en-us/azure/service-bus-messaging/service-bus-authentication-and-authorization
pub fn parse_sas(conn_str: &str) -> Result<SasCredential> {
    let key_values = parse_into_key_values(conn_str)?;

    let endpoint = required(&key_values, ENDPOINT)?;
    let key_name = required(&key_values, SHARED_ACCESS_KEY_NAME)?;
    let key = required(&key_values, SHARED_ACCESS_KEY)?;

    let mut resource_url = match endpoint.split_once("://") {
        Some(("sb", rest)) => format!("https://{rest}"),
        Some(_) => endpoint.to_string(),
        None => format!("https://{endpoint}"),
    };
    while resource_url.ends_with('/') {
        resource_url.pop();
    }
    if let Some(entity) = key_values.get(ENTITY_PATH).filter(|v| !v.is_empty()) {
        resource_url = format!("{resource_url}/{}", entity.trim_matches('/'));
    }

    Ok(SasCredential::new(resource_url, key_name, key))
}

/// Parses a Cosmos DB connection string into a master key credential.
///
/// ```text
/// AccountEndpoint=https://<account>.documents.azure.com:443/;AccountKey=<base64 key>;
/// ```
pub fn parse_cosmos(conn_str: &str) -> Result<CosmosCredential> {
    let key_values = parse_into_key_values(conn_str)?;

    let endpoint = required(&key_values, ACCOUNT_ENDPOINT)?;
    let account_key = required(&key_values, ACCOUNT_KEY)?;

    CosmosCredential::from_account_key(endpoint, account_key).map_err(|e| {
        Error::config_invalid("Invalid connection string, AccountKey is not valid base64")
            .with_source(e)
    })
}

fn parse_into_key_values(conn_str: &str) -> Result<HashMap<String, String>> {
    conn_str
        .trim()
        .replace("\n", "")
        .split(';')
        .filter(|&field| !field.trim().is_empty())
        .map(|field| {
            let (key, value) = field.trim().split_once('=').ok_or_else(|| {
                Error::config_invalid(format!(
                    "Invalid connection string, expected '=' in field: {field}"
                ))
            })?;
            Ok((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

fn required<'a>(key_values: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    key_values
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::config_invalid(format!("Invalid connection string, missing {key}")))
}
