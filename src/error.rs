//! Error taxonomy for configuration loading, feature construction, and
//! registry lookups.
//!
//! Everything raised during `init` is fatal to that call and leaves the
//! library uninitialized; there is no retry or partial-success path. Lookup
//! errors are contract violations at the call site, not runtime conditions.

use crate::feature::BoxError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or parsing the feature configuration source.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration source could not be opened or read.
    #[error("couldn't read complex feature properties at {path}")]
    MissingSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A configuration line declared an empty functor key.
    #[error("configuration line {line} has an empty functor key")]
    MalformedEntry { line: usize },
}

/// Failures while turning a configuration entry into a live feature.
#[derive(Debug, Error)]
pub enum InstantiationError {
    /// No constructor is registered under the implementation id.
    #[error("no feature implementation registered as '{impl_id}' (functor '{functor}')")]
    UnknownType { impl_id: String, functor: String },
    /// The registered constructor rejected the entry.
    #[error("couldn't initialize feature {impl_id} for functor {functor} with args [{args}]")]
    ConstructionFailed {
        impl_id: String,
        functor: String,
        /// Comma-joined argument list, kept as one string for display.
        args: String,
        #[source]
        source: BoxError,
    },
}

/// Contract violations on the lookup surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// Lookup before any successful `init`, or after `reset`.
    #[error("complex feature library is not initialized")]
    NotInitialized,
    /// A functor must be a non-empty string.
    #[error("functor cannot be zero length")]
    EmptyFunctor,
}

/// Umbrella for everything `init` can raise.
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Instantiation(#[from] InstantiationError),
}
