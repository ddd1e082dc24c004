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
use serde::Serialize;

/// JOSE header of a JWT.
///
/// Only `alg` and `typ` are carried. Fields serialize in declaration order,
/// so `Header::hs256()` becomes `{"alg":"HS256","typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Signing algorithm, always `HS256` for tokens built by this crate.
    pub alg: String,
    /// Token type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl Header {
    /// Header for HMAC-SHA256 signed JWTs.
    pub fn hs256() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: Some("JWT".to_string()),
        }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::hs256()
    }
}
