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

use crate::hash::{DigestAlgorithm, DigestEngine, RustCryptoDigest};
use crate::time::{Clock, DateTime, SystemClock};
use crate::Result;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the capabilities token builders depend on.
///
/// - a [`DigestEngine`] for MD5 and HMAC-SHA256
/// - a [`Clock`] for expiry calculation
/// - an [`Env`] for loading configuration
///
/// `Context::new()` wires the production implementations. Replace any of them
/// with the `with_*` methods.
///
/// ## Example
///
/// ```
/// use azsign_core::time::FixedClock;
/// use azsign_core::{Context, StaticEnv};
///
/// let ctx = Context::new()
///     .with_clock(FixedClock::from_timestamp(1629607976).unwrap())
///     .with_env(StaticEnv::default());
/// assert_eq!(ctx.now_seconds_since_epoch(), 1629607976);
/// ```
#[derive(Clone)]
pub struct Context {
    digest: Arc<dyn DigestEngine>,
    clock: Arc<dyn Clock>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("digest", &self.digest)
            .field("clock", &self.clock)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with the production digest engine, system clock
    /// and process environment.
    pub fn new() -> Self {
        Self {
            digest: Arc::new(RustCryptoDigest),
            clock: Arc::new(SystemClock),
            env: Arc::new(OsEnv),
        }
    }

    /// Replace the digest engine implementation.
    pub fn with_digest(mut self, digest: impl DigestEngine) -> Self {
        self.digest = Arc::new(digest);
        self
    }

    /// Replace the clock implementation.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Compute `algorithm` over `data`.
    #[inline]
    pub fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        self.digest.digest(algorithm, data)
    }

    /// HMAC-SHA256 of `content` keyed by `key`.
    #[inline]
    pub fn hmac_sha256(&self, key: &[u8], content: &[u8]) -> Result<Vec<u8>> {
        self.digest.hmac_sha256(key, content)
    }

    /// Get the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Current time according to the configured clock.
    #[inline]
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }

    /// Seconds since epoch according to the configured clock.
    #[inline]
    pub fn now_seconds_since_epoch(&self) -> i64 {
        self.clock.now_seconds_since_epoch()
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Returns an hashmap of (variable, value) pairs of strings, for all the
    /// environment variables of the current process.
    #[inline]
    pub fn env_vars(&self) -> HashMap<String, String> {
        self.env.vars()
    }
}

/// Env provides access to environment variables.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns an hashmap of (variable, value) pairs of strings, for all the
    /// environment variables of the current process.
    fn vars(&self) -> HashMap<String, String>;
}

/// Implements Env for the OS context, both Unix style and Windows.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }

    fn vars(&self) -> HashMap<String, String> {
        std::env::vars().collect()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl StaticEnv {
    /// Build a StaticEnv from key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            envs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }

    fn vars(&self) -> HashMap<String, String> {
        self.envs.clone()
    }
}
