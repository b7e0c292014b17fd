//! Contracts with the evaluator-side collaborators.
//!
//! The registry never owns the logic program or the goal representation. It
//! needs exactly two things from them: a shared program handle to give every
//! feature constructor, and a functor accessor for the escape-prefix check.
//! Both are traits so the evaluator crate plugs its own types in without this
//! crate depending on it.

/// Shared handle to the logic program under evaluation.
///
/// Every complex feature receives a clone of the `Arc<dyn LogicProgram>` at
/// construction time and may consult it while expanding goals. The registry
/// holds the handle only while initialized and drops it on `reset`.
pub trait LogicProgram: Send + Sync {
    /// Whether the program contains `goal` as a ground fact.
    fn contains(&self, goal: &dyn Goal) -> bool;
}

/// Minimal view of a goal term; the registry only ever reads the functor.
pub trait Goal {
    /// The predicate name of this goal.
    fn functor(&self) -> &str;
}

/// Named, weighted feature emitted by a complex feature during evaluation.
///
/// The registry constructs and serves features but never invokes them; this
/// type exists so the construction contract and the evaluator agree on the
/// expansion shape.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedFeature {
    pub name: String,
    pub weight: f64,
}
