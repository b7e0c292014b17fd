//! Loader for the complex-feature properties source.
//!
//! Syntax follows properties-file conventions: `#`/`!` comment lines, the
//! first `=` or `:` splits key from value, keys and values are trimmed
//! around the separator. Each value is `implId(,arg)*`. There is no escaping
//! mechanism, so an argument containing a literal comma cannot be expressed.

use crate::error::ConfigError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One parsed configuration line: which functor to bind, which
/// implementation to construct, and the opaque argument list it receives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureSpec {
    pub functor: String,
    pub impl_id: String,
    pub args: Vec<String>,
}

/// Read and parse a properties file.
pub fn parse_path(path: &Path) -> Result<Vec<FeatureSpec>, ConfigError> {
    let source = fs::read_to_string(path).map_err(|source| ConfigError::MissingSource {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&source)
}

/// Parse properties text into specs, in source order.
///
/// Duplicate functors pass through untouched; the registry map resolves them
/// with last-write-wins.
pub fn parse_str(source: &str) -> Result<Vec<FeatureSpec>, ConfigError> {
    let mut specs = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (key, value) = match line.find(['=', ':']) {
            Some(pos) => (line[..pos].trim_end(), line[pos + 1..].trim_start()),
            // A separator-less line is a key with an empty value, the way
            // java.util.Properties reads one.
            None => (line, ""),
        };
        if key.is_empty() {
            return Err(ConfigError::MalformedEntry { line: idx + 1 });
        }
        specs.push(split_value(key, value));
    }
    Ok(specs)
}

// The first comma-delimited token names the implementation; the remainder,
// comma-split, is the argument list. Zero arguments is valid.
fn split_value(functor: &str, value: &str) -> FeatureSpec {
    let (impl_id, rest) = match value.split_once(',') {
        Some((impl_id, rest)) => (impl_id, Some(rest)),
        None => (value, None),
    };
    let args = match rest {
        Some(rest) => rest.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    };
    FeatureSpec {
        functor: functor.to_string(),
        impl_id: impl_id.to_string(),
        args,
    }
}
