//! Core functionality shared by the asymsig signature stack.
//!
//! This crate provides the collaborators the signature provider is built on:
//! the hex codec used for every key, digest and signature crossing the API,
//! configuration loading, and logging initialisation.

pub mod config;
pub mod error;
pub mod hex_codec;
pub mod logging;

pub use config::{Config, LogFormat, LoggingConfig, SignatureConfig, VerificationPolicy};
pub use error::{CodecError, Result};
