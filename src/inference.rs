use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::defuzz::centroid;
use crate::error::{DefinitionError, InferError};
use crate::inputs::Inputs;
use crate::outputs::Outputs;
use crate::rules::Rules;
use crate::variable::{VariableKey, VariableKind, VariableRef, Variables};

/// A Mamdani inference engine: variable and rule definitions sealed into an
/// immutable configuration at construction.
///
/// [`eval`](Self::eval) takes `&self` and works entirely on per-call state,
/// so one engine may serve concurrent callers without locking.
pub struct Engine<T> {
    vars: Variables<T>,
    rules: Rules<T>,
}

impl<T: Copy + Eq + Hash> Engine<T> {
    /// Validates every rule against the variable definitions and seals both
    /// into an engine. A validation failure aborts setup; nothing partially
    /// built can be evaluated.
    pub fn new(vars: Variables<T>, rules: Rules<T>) -> Result<Self, DefinitionError> {
        for rule in &rules.0 {
            rule.validate(&vars)?;
        }

        Ok(Self { vars, rules })
    }

    /// Runs one full inference pass: fuzzify the observations, evaluate
    /// every rule's firing strength, aggregate per-category activations,
    /// and defuzzify each output variable by centroid of area.
    pub fn eval(&self, inputs: &Inputs) -> Result<Outputs, InferError> {
        // Fuzzification: degree of every (input variable, category) pair
        // under the supplied observation. Out-of-domain observations clamp
        // to the domain edge rather than being rejected.
        let mut degrees = HashMap::new();

        for (var_key, def) in self.vars.slots.iter() {
            if def.kind != VariableKind::Input {
                continue;
            }

            let var_ref = VariableRef { registry: self.vars.id, key: var_key };
            let x = *inputs.0.get(&var_ref).ok_or(InferError::MissingInput)?;

            for term in def.terms.keys() {
                degrees.insert((var_key, *term), def.membership(term, x));
            }
        }

        // Rule evaluation and per-category activation. Rules concluding the
        // same category reinforce via max, never sum, so evaluation order
        // cannot change the result.
        let mut activations: HashMap<(VariableKey, T), f64> = HashMap::new();

        for (i, rule) in self.rules.0.iter().enumerate() {
            let strength = rule.premise.strength(&degrees);

            trace!(rule = i, strength, "evaluated rule premise");

            let level = activations
                .entry((rule.conclusion.0.key, rule.conclusion.1))
                .or_insert(0.);

            *level = level.max(strength);
        }

        // Output-set construction and defuzzification: clip each category's
        // curve at its activation level, union the clipped curves pointwise,
        // then take the centroid. Categories with no concluding rule sit at
        // activation zero and contribute nothing.
        let mut crisp = HashMap::new();

        for (var_key, def) in self.vars.slots.iter() {
            if def.kind != VariableKind::Output {
                continue;
            }

            let mut aggregated: Vec<f64> = vec![0.; def.universe.len()];

            for (term, term_def) in &def.terms {
                let level = activations.get(&(var_key, *term)).copied().unwrap_or(0.);

                if level == 0. {
                    continue;
                }
                for (point, membership) in aggregated.iter_mut().zip(&term_def.curve) {
                    *point = point.max(level.min(*membership));
                }
            }

            let value = centroid(&def.universe, &aggregated).ok_or(InferError::NoRuleFired)?;

            debug!(variable = ?var_key, value, "defuzzified output");
            crisp.insert(VariableRef { registry: self.vars.id, key: var_key }, value);
        }

        Ok(Outputs::new(crisp))
    }
}
