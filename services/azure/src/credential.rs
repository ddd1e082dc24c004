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

use azsign_core::utils::Redact;
use azsign_core::{Result, SigningKey};
use std::fmt::{Debug, Formatter};

/// Credential for Service Bus, Event Hubs and Relay shared access signatures.
#[derive(Clone, PartialEq, Eq)]
pub struct SasCredential {
    /// Resource the token grants access to, e.g. `myNamespace.servicebus.windows.net/myEventHub`.
    pub resource_url: String,
    /// Name of the shared access policy, e.g. `RootManageSharedAccessKey`.
    pub key_name: String,
    /// Policy key, used as its literal bytes.
    pub key: SigningKey,
}

impl Debug for SasCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SasCredential")
            .field("resource_url", &self.resource_url)
            .field("key_name", &self.key_name)
            .field("key", &Redact::from(self.key.as_bytes()))
            .finish()
    }
}

impl SasCredential {
    /// Create a new credential from its parts.
    pub fn new(
        resource_url: impl Into<String>,
        key_name: impl Into<String>,
        key: impl Into<SigningKey>,
    ) -> Self {
        Self {
            resource_url: resource_url.into(),
            key_name: key_name.into(),
            key: key.into(),
        }
    }

    /// Check if every part is present.
    pub fn is_valid(&self) -> bool {
        !self.resource_url.is_empty() && !self.key_name.is_empty() && !self.key.is_empty()
    }
}

/// Credential for Cosmos DB master key authorization.
#[derive(Clone, PartialEq, Eq)]
pub struct CosmosCredential {
    /// Account endpoint, e.g. `https://myaccount.documents.azure.com:443/`.
    pub endpoint: String,
    /// Master key, already base64-decoded.
    pub master_key: SigningKey,
}

impl Debug for CosmosCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmosCredential")
            .field("endpoint", &self.endpoint)
            .field("master_key", &Redact::from(self.master_key.as_bytes()))
            .finish()
    }
}

impl CosmosCredential {
    /// Create a credential from the base64 account key shown in the Azure portal.
    pub fn from_account_key(endpoint: impl Into<String>, account_key: &str) -> Result<Self> {
        Ok(Self {
            endpoint: endpoint.into(),
            master_key: SigningKey::from_base64(account_key)?,
        })
    }

    /// Check if the master key is present.
    pub fn is_valid(&self) -> bool {
        !self.master_key.is_empty()
    }
}
