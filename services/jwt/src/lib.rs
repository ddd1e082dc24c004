//! JWT HS256 signing
//!
//! Builds JSON Web Tokens in compact serialization, signed with HMAC-SHA256.
//!
//! # Example
//!
//! ```rust
//! use azsign_jwt::jwt_hmac256;
//!
//! let token = jwt_hmac256(
//!     b"secretkey",
//!     r#"{"alg":"HS256","typ":"JWT"}"#,
//!     r#"{"loggedInAs":"admin","iat":1422779638}"#,
//! )
//! .unwrap();
//! assert_eq!(token.split('.').count(), 3);
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod header;
pub use header::Header;

mod sign;
pub use sign::{encode, jwt_hmac256, JwtSigner};
