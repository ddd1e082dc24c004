#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use azsign_core::*;

#[cfg(feature = "azure")]
mod azure_env;

#[cfg(feature = "azure")]
pub mod azure {
    pub use azsign_azure::*;

    pub use crate::azure_env::default_config;
}

#[cfg(feature = "jwt")]
pub mod jwt {
    pub use azsign_jwt::*;
}
