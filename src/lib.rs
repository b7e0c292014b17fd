//! Functor-keyed registry of pluggable "complex features" for a
//! logic-program evaluator.
//!
//! A rule evaluator normally resolves a goal by ordinary inference; functors
//! spelled with the `escape__` prefix instead escape into an
//! externally-registered, parameterized computation unit. This crate owns
//! that escape hatch: it parses a properties-style configuration into
//! `(functor, implementation, args)` entries, constructs each feature
//! through a caller-populated [`FeatureCatalog`], and serves lookups under
//! both the bare and escaped spelling of every configured functor. During
//! inference the evaluator calls exactly two entry points:
//! [`is_complex_feature`] (or its goal-shaped overload) and
//! [`FeatureLibrary::get_feature`].
//!
//! The library carries no internal synchronization. `init` and `reset` take
//! `&mut self` and must be serialized by the caller; once `init` returns,
//! the mapping is immutable and concurrent read-only lookups are safe.

pub mod error;
pub mod feature;
pub mod program;
pub mod registry;

pub use error::{ConfigError, InitError, InstantiationError, LookupError};
pub use feature::{BoxError, ComplexFeature, FeatureCtor};
pub use program::{Goal, LogicProgram, WeightedFeature};
pub use registry::{
    ESCAPE_PREFIX, FeatureCatalog, FeatureLibrary, FeatureSpec, is_complex_feature,
    is_complex_goal, parse_path, parse_str,
};
