//! Construction contract for pluggable complex features.
//!
//! Concrete features are black boxes to this crate: the catalog constructs
//! them from `(program, args)`, the library keys them under both functor
//! spellings, and the evaluator invokes them. The two type aliases here are
//! the whole contract a plugin module has to satisfy.

use crate::program::{Goal, LogicProgram, WeightedFeature};
use std::sync::Arc;

/// Boxed error a feature constructor may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A computation unit the evaluator escapes into instead of ordinary
/// inference.
pub trait ComplexFeature: Send + Sync {
    /// Expand an escaped goal into named weighted features.
    fn features_for(&self, goal: &dyn Goal) -> Vec<WeightedFeature>;
}

impl std::fmt::Debug for dyn ComplexFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ComplexFeature")
    }
}

/// Constructor closure a plugin registers with [`crate::FeatureCatalog`]:
/// given the shared program handle and the argument list from a
/// configuration line, produce a feature or explain why it cannot.
pub type FeatureCtor = Box<
    dyn Fn(Arc<dyn LogicProgram>, &[String]) -> Result<Box<dyn ComplexFeature>, BoxError>
        + Send
        + Sync,
>;
