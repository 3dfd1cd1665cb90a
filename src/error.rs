use thiserror::Error;

/// Errors raised while building variable and rule definitions. These are
/// fatal to engine setup: nothing partially built is ever evaluated.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DefinitionError {
    /// Membership control points must be finite and non-decreasing.
    #[error("invalid shape: control points {points:?} must be finite and non-decreasing")]
    InvalidShape { points: Vec<f64> },

    /// A variable's universe must satisfy `min < max` with a positive,
    /// finite discretization step.
    #[error("invalid domain [{min}, {max}] with step {step}")]
    InvalidDomain { min: f64, max: f64, step: f64 },

    /// A variable must declare at least one category.
    #[error("variable declared without any category")]
    NoCategories,

    /// A rule referenced a variable or category that was never declared.
    #[error("rule references an undeclared variable or category")]
    UnknownReference,

    /// Rule premises may only reference input variables.
    #[error("rule premise references an output variable")]
    NotAnInput,

    /// Rule conclusions must target an output variable.
    #[error("rule conclusion targets an input variable")]
    NotAnOutput,
}

/// Errors raised during a single inference call. The engine itself stays
/// untouched and remains usable for subsequent calls.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InferError {
    /// No observation was supplied for a declared input variable.
    #[error("no observation supplied for a declared input variable")]
    MissingInput,

    /// Every rule fired at strength zero, leaving the aggregated output
    /// membership zero everywhere. Surfaced explicitly instead of dividing
    /// by zero in the centroid.
    #[error("no rule fired: aggregated output membership is zero everywhere")]
    NoRuleFired,
}
