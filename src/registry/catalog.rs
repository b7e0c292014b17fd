//! Constructor catalog: implementation id to feature constructor.
//!
//! The catalog is the crate's stand-in for reflective class loading: plugin
//! modules register a constructor closure under a string id at process
//! startup, and `init` resolves configuration entries against the map.
//! Instantiation never touches the registry mapping.

use crate::error::InstantiationError;
use crate::feature::{BoxError, ComplexFeature, FeatureCtor};
use crate::program::LogicProgram;
use crate::registry::config::FeatureSpec;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Default)]
/// In-memory store of feature constructors keyed by implementation id.
pub struct FeatureCatalog {
    ctors: BTreeMap<String, FeatureCtor>,
}

impl FeatureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor under `impl_id`. Last registration wins.
    pub fn register<F>(&mut self, impl_id: impl Into<String>, ctor: F)
    where
        F: Fn(Arc<dyn LogicProgram>, &[String]) -> Result<Box<dyn ComplexFeature>, BoxError>
            + Send
            + Sync
            + 'static,
    {
        self.ctors.insert(impl_id.into(), Box::new(ctor));
    }

    /// Whether a constructor is registered under `impl_id`.
    pub fn contains(&self, impl_id: &str) -> bool {
        self.ctors.contains_key(impl_id)
    }

    /// Iterate registered implementation ids in stable order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ctors.keys().map(String::as_str)
    }

    /// Construct the feature `spec` asks for, bound to `program`.
    ///
    /// The returned errors carry the implementation id, the functor being
    /// configured, and the argument list; `init` failures surface verbatim,
    /// so the message has to identify the offending configuration line on
    /// its own.
    pub fn instantiate(
        &self,
        program: &Arc<dyn LogicProgram>,
        spec: &FeatureSpec,
    ) -> Result<Arc<dyn ComplexFeature>, InstantiationError> {
        let ctor = self
            .ctors
            .get(&spec.impl_id)
            .ok_or_else(|| InstantiationError::UnknownType {
                impl_id: spec.impl_id.clone(),
                functor: spec.functor.clone(),
            })?;
        let feature = ctor(Arc::clone(program), &spec.args).map_err(|source| {
            InstantiationError::ConstructionFailed {
                impl_id: spec.impl_id.clone(),
                functor: spec.functor.clone(),
                args: spec.args.join(", "),
                source,
            }
        })?;
        Ok(Arc::from(feature))
    }
}
