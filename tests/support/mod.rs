use featlib::{
    BoxError, ComplexFeature, FeatureCatalog, Goal, LogicProgram, WeightedFeature,
};
use std::sync::Arc;

/// Minimal goal for driving feature expansions.
pub struct TestGoal {
    functor: String,
}

impl TestGoal {
    pub fn new(functor: &str) -> Self {
        Self {
            functor: functor.to_string(),
        }
    }
}

impl Goal for TestGoal {
    fn functor(&self) -> &str {
        &self.functor
    }
}

/// Logic program stub; the fixture features never consult it.
pub struct EmptyProgram;

impl LogicProgram for EmptyProgram {
    fn contains(&self, _goal: &dyn Goal) -> bool {
        false
    }
}

pub fn program() -> Arc<dyn LogicProgram> {
    Arc::new(EmptyProgram)
}

/// Comparison feature mirroring the classic `greaterThan` configuration
/// line: the single argument is a lower bound it reports alongside every
/// expansion.
pub struct GreaterThanFeature {
    threshold: String,
}

impl GreaterThanFeature {
    pub fn construct(
        _program: Arc<dyn LogicProgram>,
        args: &[String],
    ) -> Result<Box<dyn ComplexFeature>, BoxError> {
        let threshold = args
            .first()
            .cloned()
            .ok_or_else(|| BoxError::from("greaterThan requires a threshold argument"))?;
        Ok(Box::new(Self { threshold }))
    }
}

impl ComplexFeature for GreaterThanFeature {
    fn features_for(&self, goal: &dyn Goal) -> Vec<WeightedFeature> {
        vec![WeightedFeature {
            name: format!("{}_gt_{}", goal.functor(), self.threshold),
            weight: 1.0,
        }]
    }
}

/// Zero-argument feature; expansions carry a fixed name.
pub struct ConstantFeature;

impl ConstantFeature {
    pub fn construct(
        _program: Arc<dyn LogicProgram>,
        _args: &[String],
    ) -> Result<Box<dyn ComplexFeature>, BoxError> {
        Ok(Box::new(Self))
    }
}

impl ComplexFeature for ConstantFeature {
    fn features_for(&self, _goal: &dyn Goal) -> Vec<WeightedFeature> {
        vec![WeightedFeature {
            name: "constant".to_string(),
            weight: 1.0,
        }]
    }
}

/// Catalog with every fixture implementation the suite configures,
/// including one whose constructor always refuses.
pub fn catalog() -> FeatureCatalog {
    let mut catalog = FeatureCatalog::new();
    catalog.register("com.example.GreaterThanFeature", GreaterThanFeature::construct);
    catalog.register("com.example.ConstantFeature", ConstantFeature::construct);
    catalog.register("com.example.BrokenFeature", |_program, _args: &[String]| {
        Err(BoxError::from("constructor rejected the entry"))
    });
    catalog
}
