use std::hash::Hash;

use crate::dsl::Expr;
use crate::error::DefinitionError;
use crate::variable::{Variable, VariableKind, VariableRef, Variables};

/// An ordered rule base. Order only matters for reproducible tracing:
/// activation levels combine via max, so permuting the rules never changes
/// an inference result.
#[derive(Default)]
pub struct Rules<T>(pub(crate) Vec<Rule<T>>);

impl<T: Copy + Eq + Hash> Rules<T> {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    /// Adds a rule mapping `premise` to a single output category.
    ///
    /// Fails with [`DefinitionError::UnknownReference`] when the premise or
    /// conclusion references a variable or category `vars` does not declare,
    /// [`DefinitionError::NotAnInput`] when the premise references an output
    /// variable, and [`DefinitionError::NotAnOutput`] when the conclusion
    /// targets an input variable.
    pub fn add<O: Into<T>>(
        &mut self,
        vars: &Variables<T>,
        premise: Expr<T>,
        conclusion: (Variable<O>, O),
    ) -> Result<(), DefinitionError> {
        let rule = Rule {
            premise,
            conclusion: (conclusion.0 .0, conclusion.1.into()),
        };

        rule.validate(vars)?;
        self.0.push(rule);

        Ok(())
    }
}

pub(crate) struct Rule<T> {
    pub(crate) premise: Expr<T>,
    pub(crate) conclusion: (VariableRef, T),
}

impl<T: Copy + Eq + Hash> Rule<T> {
    pub(crate) fn validate(&self, vars: &Variables<T>) -> Result<(), DefinitionError> {
        for (var_ref, term) in self.premise.propositions() {
            if var_ref.registry != vars.id {
                return Err(DefinitionError::UnknownReference);
            }

            let def = vars
                .slots
                .get(var_ref.key)
                .ok_or(DefinitionError::UnknownReference)?;

            if !def.terms.contains_key(term) {
                return Err(DefinitionError::UnknownReference);
            }
            if def.kind != VariableKind::Input {
                return Err(DefinitionError::NotAnInput);
            }
        }

        let (var_ref, term) = self.conclusion;

        if var_ref.registry != vars.id {
            return Err(DefinitionError::UnknownReference);
        }

        let def = vars
            .slots
            .get(var_ref.key)
            .ok_or(DefinitionError::UnknownReference)?;

        if !def.terms.contains_key(&term) {
            return Err(DefinitionError::UnknownReference);
        }
        if def.kind != VariableKind::Output {
            return Err(DefinitionError::NotAnOutput);
        }

        Ok(())
    }
}
