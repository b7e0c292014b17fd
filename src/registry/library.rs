//! Lifecycle owner of the functor-to-feature mapping.
//!
//! The library is caller-owned: the evaluator receives it by reference after
//! a successful `init` and only ever calls [`is_complex_feature`] (or its
//! goal-shaped overload) and [`FeatureLibrary::get_feature`] during
//! inference. `init` and `reset` take `&mut self`, lookups take `&self`, so
//! the single-writer/many-reader contract is compiler-checked: between
//! writes the mapping is immutable and shared reads are safe.

use crate::error::{InitError, LookupError};
use crate::feature::ComplexFeature;
use crate::program::{Goal, LogicProgram};
use crate::registry::alias;
use crate::registry::catalog::FeatureCatalog;
use crate::registry::config::{self, FeatureSpec};
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// True when `functor` is spelled with the escape prefix.
///
/// A pure string check, valid before any `init`; whether a feature is
/// actually registered under the functor is [`FeatureLibrary::get_feature`]'s
/// job.
pub fn is_complex_feature(functor: &str) -> Result<bool, LookupError> {
    if functor.is_empty() {
        return Err(LookupError::EmptyFunctor);
    }
    Ok(alias::is_escaped(functor))
}

/// Goal-shaped convenience overload of [`is_complex_feature`].
pub fn is_complex_goal(goal: &dyn Goal) -> Result<bool, LookupError> {
    is_complex_feature(goal.functor())
}

/// Caller-owned registry of complex features, populated wholesale by `init`.
pub struct FeatureLibrary {
    catalog: FeatureCatalog,
    initialized: bool,
    mapping: BTreeMap<String, Arc<dyn ComplexFeature>>,
    program: Option<Arc<dyn LogicProgram>>,
}

impl FeatureLibrary {
    /// An empty, uninitialized library over the given constructor catalog.
    pub fn new(catalog: FeatureCatalog) -> Self {
        Self {
            catalog,
            initialized: false,
            mapping: BTreeMap::new(),
            program: None,
        }
    }

    /// Destroys current state (if any) and loads the mapping from a
    /// properties file.
    pub fn init(&mut self, program: Arc<dyn LogicProgram>, path: &Path) -> Result<(), InitError> {
        let program = self.pre_init(program);
        let specs = config::parse_path(path)?;
        self.populate(&program, specs)
    }

    /// Destroys current state (if any) and loads the mapping from properties
    /// text.
    pub fn init_from_str(
        &mut self,
        program: Arc<dyn LogicProgram>,
        source: &str,
    ) -> Result<(), InitError> {
        let program = self.pre_init(program);
        let specs = config::parse_str(source)?;
        self.populate(&program, specs)
    }

    // Teardown happens before the source is even parsed, so any failure from
    // here on leaves the library uninitialized.
    fn pre_init(&mut self, program: Arc<dyn LogicProgram>) -> Arc<dyn LogicProgram> {
        if self.initialized {
            warn!("complex feature library was already initialized once, overwriting");
        }
        self.initialized = false;
        self.mapping.clear();
        self.program = Some(Arc::clone(&program));
        program
    }

    fn populate(
        &mut self,
        program: &Arc<dyn LogicProgram>,
        specs: Vec<FeatureSpec>,
    ) -> Result<(), InitError> {
        for spec in specs {
            let feature = self.catalog.instantiate(program, &spec)?;
            self.insert_aliased(&spec.functor, feature);
        }
        // Fail-fast: the flag only comes up once every entry is in, so a
        // part-built mapping stays unreachable through the lookup surface.
        self.initialized = true;
        Ok(())
    }

    // Both spellings point at the same instance; later entries overwrite
    // earlier ones on key collision.
    fn insert_aliased(&mut self, functor: &str, feature: Arc<dyn ComplexFeature>) {
        let derived = alias::alias_of(functor);
        let bare = if alias::is_escaped(functor) {
            derived.as_str()
        } else {
            functor
        };
        info!("adding complex feature: {bare}");
        self.mapping.insert(functor.to_string(), Arc::clone(&feature));
        self.mapping.insert(derived, feature);
    }

    /// The feature registered under `functor` (either spelling), or `None`
    /// when the functor has no complex feature and the evaluator should fall
    /// through to ordinary inference.
    pub fn get_feature(
        &self,
        functor: &str,
    ) -> Result<Option<Arc<dyn ComplexFeature>>, LookupError> {
        if functor.is_empty() {
            return Err(LookupError::EmptyFunctor);
        }
        if !self.initialized {
            return Err(LookupError::NotInitialized);
        }
        Ok(self.mapping.get(functor).map(Arc::clone))
    }

    /// Whether the last `init` completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Shared program handle captured by the last `init`, dropped on `reset`.
    pub fn program(&self) -> Option<&Arc<dyn LogicProgram>> {
        self.program.as_ref()
    }

    /// Registered functors, both spellings, in stable order.
    pub fn registered_functors(&self) -> impl Iterator<Item = &str> {
        self.mapping.keys().map(String::as_str)
    }

    /// Unconditionally drops the mapping, the program handle, and the
    /// initialized flag. Idempotent; meant for test isolation between
    /// registry lifecycles within one process.
    pub fn reset(&mut self) {
        self.initialized = false;
        self.mapping.clear();
        self.program = None;
    }
}
