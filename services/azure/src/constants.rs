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

// Token literals.
pub const SAS_TOKEN_PREFIX: &str = "SharedAccessSignature";
pub const COSMOS_TOKEN_PREFIX: &str = "type%3dmaster%26ver%3d1.0%26sig%3d";

// Connection string keys.
pub const ENDPOINT: &str = "Endpoint";
pub const SHARED_ACCESS_KEY_NAME: &str = "SharedAccessKeyName";
pub const SHARED_ACCESS_KEY: &str = "SharedAccessKey";
pub const ENTITY_PATH: &str = "EntityPath";
pub const ACCOUNT_ENDPOINT: &str = "AccountEndpoint";
pub const ACCOUNT_KEY: &str = "AccountKey";

// Env values used to configure token builders.
pub const AZURE_SAS_CONNECTION_STRING: &str = "AZURE_SAS_CONNECTION_STRING";
pub const AZURE_SAS_RESOURCE_URL: &str = "AZURE_SAS_RESOURCE_URL";
pub const AZURE_SAS_KEY_NAME: &str = "AZURE_SAS_KEY_NAME";
pub const AZURE_SAS_KEY: &str = "AZURE_SAS_KEY";
pub const AZURE_COSMOS_CONNECTION_STRING: &str = "AZURE_COSMOS_CONNECTION_STRING";
pub const AZURE_COSMOS_ENDPOINT: &str = "AZURE_COSMOS_ENDPOINT";
pub const AZURE_COSMOS_KEY: &str = "AZURE_COSMOS_KEY";
pub const AZURE_COSMOS_STRICT_RESOURCE: &str = "AZURE_COSMOS_STRICT_RESOURCE";
