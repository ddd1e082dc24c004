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
use azsign_azure::Config;
use azsign_core::{Context, OsEnv};

/// Load Azure token configuration from the process environment.
///
/// # Example
///
/// ```no_run
/// # fn main() -> azsign::Result<()> {
/// use azsign::azure::{default_config, SasTokenBuilder};
/// use azsign::Context;
///
/// let config = default_config();
/// if let Some(cred) = config.sas_credential()? {
///     let token = SasTokenBuilder::new(Context::new())
///         .build_with_credential(&cred, std::time::Duration::from_secs(3600))?;
///     println!("{token}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn default_config() -> Config {
    Config::default().from_env(&Context::new().with_env(OsEnv))
}
