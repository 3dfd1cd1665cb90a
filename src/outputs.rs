use std::collections::HashMap;

use crate::variable::{Variable, VariableRef};

/// Crisp defuzzified results of one inference call, keyed by output
/// variable. Transient: nothing is carried over to the next call.
#[derive(Debug)]
pub struct Outputs(HashMap<VariableRef, f64>);

impl Outputs {
    pub(crate) fn new(crisp: HashMap<VariableRef, f64>) -> Self {
        Self(crisp)
    }

    /// The crisp value inferred for `var`, if it is an output variable of
    /// the engine that produced these results.
    pub fn get<I>(&self, var: Variable<I>) -> Option<f64> {
        self.0.get(&var.0).copied()
    }
}
