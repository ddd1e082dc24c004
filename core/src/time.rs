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

//! Time related utils.

use std::fmt::Debug;
use std::time::Duration;

use chrono::TimeDelta;
use chrono::Utc;
use log::debug;

use crate::{Error, Result};

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Get the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Clock tells token builders what time it is.
///
/// Only expiry calculation reads the clock.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Current time.
    fn now(&self) -> DateTime;

    /// Seconds since 1970-01-01T00:00:00Z.
    fn now_seconds_since_epoch(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        now()
    }
}

/// Clock that always returns the same instant.
///
/// Useful for tests and for reproducing a token issued in the past.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime);

impl FixedClock {
    /// Build a fixed clock from seconds since epoch.
    pub fn from_timestamp(secs: i64) -> Result<Self> {
        DateTime::from_timestamp(secs, 0)
            .map(Self)
            .ok_or_else(|| Error::invalid_argument(format!("timestamp {secs} is out of range")))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}

/// Absolute expiry, in seconds since epoch, for something valid for `ttl` from now.
pub fn expiry_after(clock: &dyn Clock, ttl: Duration) -> Result<i64> {
    let ttl = TimeDelta::from_std(ttl)
        .map_err(|e| Error::invalid_argument("duration is out of range").with_source(e))?;

    let now = clock.now();
    let expiry = now
        .checked_add_signed(ttl)
        .map(|v| v.timestamp())
        .ok_or_else(|| Error::invalid_argument("expiry overflows the calendar"))?;
    debug!("expiry after {ttl} from {now}: {expiry}");
    Ok(expiry)
}
