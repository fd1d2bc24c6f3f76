//! Core components for building signed image proxy URLs.
//!
//! This crate provides the foundational types shared by the imgsign
//! ecosystem. Service crates build on top of it to render their own URL
//! conventions.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the [`Env`] implementation used to load configuration
//! - **Error**: A single error type carrying an [`ErrorKind`] that tells caller mistakes apart
//! - **Hash**: URL-safe base64, hex decoding and HMAC-SHA256 helpers
//!
//! ## Example
//!
//! ```
//! use imgsign_core::hash::{base64_url_hmac_sha256, hex_decode};
//!
//! # fn example() -> imgsign_core::Result<()> {
//! let key = hex_decode("736563726574")?;
//! let salt = hex_decode("68656C6C6F")?;
//!
//! let signature = base64_url_hmac_sha256(&key, &salt, b"/width:300/plain/image.png");
//! assert!(!signature.contains('='));
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Encoding and hashing utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};
