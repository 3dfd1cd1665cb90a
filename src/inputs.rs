use std::collections::HashMap;

use crate::variable::{Variable, VariableRef};

/// One crisp observation per input variable for a single inference call.
#[derive(Default)]
pub struct Inputs(pub(crate) HashMap<VariableRef, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    /// Records the observation for `var`, replacing any earlier value.
    pub fn add<I>(&mut self, var: Variable<I>, val: f64) {
        self.0.insert(var.0, val);
    }

    /// Builder-style [`add`](Self::add).
    pub fn with<I>(mut self, var: Variable<I>, val: f64) -> Self {
        self.add(var, val);
        self
    }
}
