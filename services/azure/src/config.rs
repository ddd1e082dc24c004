use azsign_core::{Context, Error, Result};
use log::warn;

use crate::connection_string;
use crate::constants::*;
use crate::{CosmosCredential, SasCredential};

/// Config carries all the configuration for Azure token builders.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Config {
    /// `sas_connection_string` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_SAS_CONNECTION_STRING`
    pub sas_connection_string: Option<String>,
    /// `sas_resource_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_SAS_RESOURCE_URL`
    pub sas_resource_url: Option<String>,
    /// `sas_key_name` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_SAS_KEY_NAME`
    pub sas_key_name: Option<String>,
    /// `sas_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_SAS_KEY`
    pub sas_key: Option<String>,
    /// `cosmos_connection_string` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_COSMOS_CONNECTION_STRING`
    pub cosmos_connection_string: Option<String>,
    /// `cosmos_endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_COSMOS_ENDPOINT`
    pub cosmos_endpoint: Option<String>,
    /// Base64 encoded Cosmos DB account key.
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_COSMOS_KEY`
    pub cosmos_key: Option<String>,
    /// Reject empty resource type and link when building Cosmos DB tokens.
    ///
    /// - this field if it's `is_some`
    /// - env value: `AZURE_COSMOS_STRICT_RESOURCE`, `true` or `false`
    ///
    /// Treated as `false` when neither is set.
    pub strict_resource: Option<bool>,
}

impl Config {
    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let load = |field: &mut Option<String>, key: &str| {
            if field.is_none() {
                *field = ctx.env_var(key);
            }
        };

        load(&mut self.sas_connection_string, AZURE_SAS_CONNECTION_STRING);
        load(&mut self.sas_resource_url, AZURE_SAS_RESOURCE_URL);
        load(&mut self.sas_key_name, AZURE_SAS_KEY_NAME);
        load(&mut self.sas_key, AZURE_SAS_KEY);
        load(&mut self.cosmos_connection_string, AZURE_COSMOS_CONNECTION_STRING);
        load(&mut self.cosmos_endpoint, AZURE_COSMOS_ENDPOINT);
        load(&mut self.cosmos_key, AZURE_COSMOS_KEY);

        if self.strict_resource.is_none() {
            if let Some(v) = ctx.env_var(AZURE_COSMOS_STRICT_RESOURCE) {
                match v.to_ascii_lowercase().as_str() {
                    "true" | "1" => self.strict_resource = Some(true),
                    "false" | "0" => self.strict_resource = Some(false),
                    _ => warn!(
                        "ignoring {AZURE_COSMOS_STRICT_RESOURCE}={v}, expected true or false"
                    ),
                }
            }
        }

        self
    }

    /// Resolve the SAS credential.
    ///
    /// Explicit `sas_resource_url`, `sas_key_name` and `sas_key` take
    /// precedence over `sas_connection_string`. Returns `Ok(None)` if nothing
    /// is configured.
    pub fn sas_credential(&self) -> Result<Option<SasCredential>> {
        match (&self.sas_resource_url, &self.sas_key_name, &self.sas_key) {
            (Some(url), Some(name), Some(key)) => {
                let cred = SasCredential::new(url, name, key.as_str());
                if !cred.is_valid() {
                    return Err(Error::config_invalid(
                        "sas_resource_url, sas_key_name and sas_key may not be empty",
                    ));
                }
                return Ok(Some(cred));
            }
            (None, None, None) => {}
            _ if self.sas_connection_string.is_none() => {
                return Err(Error::config_invalid(
                    "sas_resource_url, sas_key_name and sas_key must be set together",
                ));
            }
            _ => warn!("incomplete sas fields, falling back to sas_connection_string"),
        }

        self.sas_connection_string
            .as_deref()
            .map(connection_string::parse_sas)
            .transpose()
    }

    /// Resolve the Cosmos DB credential.
    ///
    /// Explicit `cosmos_endpoint` and `cosmos_key` take precedence over
    /// `cosmos_connection_string`. Returns `Ok(None)` if nothing is configured.
    pub fn cosmos_credential(&self) -> Result<Option<CosmosCredential>> {
        if let (Some(endpoint), Some(key)) = (&self.cosmos_endpoint, &self.cosmos_key) {
            let cred = CosmosCredential::from_account_key(endpoint, key).map_err(|e| {
                Error::config_invalid("cosmos_key is not valid base64").with_source(e)
            })?;
            if !cred.is_valid() {
                return Err(Error::config_invalid("cosmos_key may not be empty"));
            }
            return Ok(Some(cred));
        }

        self.cosmos_connection_string
            .as_deref()
            .map(connection_string::parse_cosmos)
            .transpose()
    }
}
