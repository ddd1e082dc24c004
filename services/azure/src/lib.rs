//! Azure token builders
//!
//! This crate builds the authorization tokens used by Azure messaging and
//! database services:
//! - SAS (Shared Access Signature) tokens for Service Bus, Event Hubs and Relay
//! - Master key authorization tokens for Cosmos DB
//!
//! # Example
//!
//! ```rust
//! use azsign_azure::{Config, CosmosTokenBuilder, SasTokenBuilder};
//! use azsign_core::{Context, Result, StaticEnv};
//!
//! fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(StaticEnv::from_pairs([(
//!         "AZURE_SAS_CONNECTION_STRING",
//!         "Endpoint=sb://ns.servicebus.windows.net/;SharedAccessKeyName=sender;SharedAccessKey=secret;EntityPath=hub",
//!     )]));
//!
//!     // Load credentials from the environment.
//!     let config = Config::default().from_env(&ctx);
//!     let cred = config.sas_credential()?.expect("sas credential must be configured");
//!
//!     // Build a token that expires at the given unix timestamp.
//!     let token = SasTokenBuilder::new(ctx.clone()).build_with_credential(&cred, "1629608276")?;
//!     assert!(token.starts_with("SharedAccessSignature sr=https%3a%2f%2fns.servicebus.windows.net%2fhub&sig="));
//!
//!     // Cosmos DB tokens are built from the decoded master key.
//!     let auth = CosmosTokenBuilder::new(ctx).build(
//!         b"key",
//!         "GET",
//!         "dbs",
//!         "dbs/ToDoList",
//!         "Thu, 27 Apr 2017 00:51:12 GMT",
//!     )?;
//!     assert!(auth.starts_with("type%3dmaster%26ver%3d1.0%26sig%3d"));
//!
//!     Ok(())
//! }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod connection_string;
pub use connection_string::{parse_cosmos, parse_sas};

mod credential;
pub use credential::{CosmosCredential, SasCredential};

mod sas;
pub use sas::{sas_token, sas_token_after, Expiry, SasTokenBuilder};

mod cosmos;
pub use cosmos::{cosmos_auth_token, CosmosTokenBuilder};
