//! Functor-to-complex-feature registry.
//!
//! Three pieces composed in sequence: `config` parses the properties source
//! into [`FeatureSpec`] entries, `catalog` turns each entry into a live
//! feature through a registered constructor, and `library` owns the
//! resulting dual-keyed mapping for evaluator lookups. `alias` holds the
//! escape-prefix scheme the other three share.

pub mod alias;
pub mod catalog;
pub mod config;
pub mod library;

pub use alias::ESCAPE_PREFIX;
pub use catalog::FeatureCatalog;
pub use config::{FeatureSpec, parse_path, parse_str};
pub use library::{FeatureLibrary, is_complex_feature, is_complex_goal};
