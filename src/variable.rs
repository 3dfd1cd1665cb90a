use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::{hash::Hash, ops::RangeInclusive};

use fixed_map::Key as FixedKey;
use slotmap::{new_key_type, SlotMap};

use crate::error::DefinitionError;
use crate::linspace::Linspace;
use crate::math::{interp_at, sample};
use crate::terms::Terms;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// A variable key stamped with the id of the registry that minted it.
/// Slotmap keys are only index plus version, so a bare key from one
/// registry can alias a live slot in another; the registry id makes such
/// stale references detectable during rule validation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VariableRef {
    pub(crate) registry: u64,
    pub(crate) key: VariableKey,
}

/// A typed handle to a declared variable, parameterized by its category
/// enum so rules cannot mix categories across variables.
pub struct Variable<I>(pub(crate) VariableRef, PhantomData<I>);

impl<I> Clone for Variable<I> {
    fn clone(&self) -> Self {
        Variable(self.0, PhantomData)
    }
}

impl<I> Copy for Variable<I> {}

impl<I> fmt::Debug for Variable<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Variable").field(&self.0).finish()
    }
}

/// Whether a variable is fuzzified from an observation or aggregated and
/// defuzzified into a crisp result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VariableKind {
    Input,
    Output,
}

/// The registry of variable definitions a rule base is validated against.
pub struct Variables<T> {
    pub(crate) id: u64,
    pub(crate) slots: SlotMap<VariableKey, VariableDef<T>>,
}

impl<T: Eq + Hash> Default for Variables<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Variables<T> {
    pub fn new() -> Self {
        static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(0);

        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            slots: SlotMap::with_key(),
        }
    }

    /// Declares an input variable over `universe_range` with the given
    /// categories. If the step value is not provided, it defaults to 0.1.
    pub fn add_input<I: Into<T> + FixedKey + 'static>(
        &mut self,
        universe_range: RangeInclusive<f64>,
        terms: Terms<I>,
        step: Option<f64>,
    ) -> Result<Variable<I>, DefinitionError> {
        self.add(VariableKind::Input, universe_range, terms, step)
    }

    /// Declares an output variable over `universe_range` with the given
    /// categories. If the step value is not provided, it defaults to 0.1.
    pub fn add_output<I: Into<T> + FixedKey + 'static>(
        &mut self,
        universe_range: RangeInclusive<f64>,
        terms: Terms<I>,
        step: Option<f64>,
    ) -> Result<Variable<I>, DefinitionError> {
        self.add(VariableKind::Output, universe_range, terms, step)
    }

    fn add<I: Into<T> + FixedKey + 'static>(
        &mut self,
        kind: VariableKind,
        universe_range: RangeInclusive<f64>,
        terms: Terms<I>,
        step: Option<f64>,
    ) -> Result<Variable<I>, DefinitionError> {
        let term_coords = terms.0.iter().map(|(k, shape)| (k.into(), shape.coords()));
        let def = VariableDef::new(
            kind,
            universe_range,
            term_coords,
            terms.0.len(),
            step.unwrap_or(0.1),
        )?;
        let var_ref = VariableRef {
            registry: self.id,
            key: self.slots.insert(def),
        };

        Ok(Variable(var_ref, PhantomData))
    }
}

pub(crate) struct VariableDef<T> {
    pub(crate) kind: VariableKind,
    /// Uniform discretization of `[min_u, max_u]`, the universe over which
    /// output aggregation and defuzzification integrate.
    pub(crate) universe: Vec<f64>,
    pub(crate) min_u: f64,
    pub(crate) max_u: f64,
    pub(crate) terms: HashMap<T, TermDef>,
}

pub(crate) struct TermDef {
    /// Control points of the category's shape, vertical edges collapsed.
    pub(crate) coords: Vec<(f64, f64)>,
    /// The shape sampled over the owning variable's universe.
    pub(crate) curve: Vec<f64>,
}

impl<T: Eq + Hash> VariableDef<T> {
    fn new(
        kind: VariableKind,
        universe_range: RangeInclusive<f64>,
        term_coords: impl IntoIterator<Item = (T, Vec<(f64, f64)>)>,
        n_terms: usize,
        step: f64,
    ) -> Result<Self, DefinitionError> {
        let min_u = *universe_range.start();
        let max_u = *universe_range.end();

        if !min_u.is_finite() || !max_u.is_finite() || min_u >= max_u || !(step > 0.) {
            return Err(DefinitionError::InvalidDomain {
                min: min_u,
                max: max_u,
                step,
            });
        }
        if n_terms == 0 {
            return Err(DefinitionError::NoCategories);
        }

        // floor keeps the last sample at or before max_u when the step
        // does not divide the range evenly
        let num = ((max_u - min_u) / step).floor() as usize + 1;
        let universe: Vec<f64> = Linspace::new(min_u, max_u, num).collect();
        let mut terms = HashMap::with_capacity(n_terms);

        for (term, coords) in term_coords {
            let curve = sample(&coords, universe.iter().copied());

            terms.insert(term, TermDef { coords, curve });
        }

        Ok(Self {
            kind,
            universe,
            min_u,
            max_u,
            terms,
        })
    }

    /// Membership degree of the crisp value `x` under `term`. Values
    /// outside the universe clamp to the domain edge first, so shapes
    /// saturate rather than extrapolate.
    pub(crate) fn membership(&self, term: &T, x: f64) -> f64 {
        interp_at(&self.terms[term].coords, x.clamp(self.min_u, self.max_u))
    }
}

#[cfg(test)]
mod tests {
    use super::{VariableKind, Variables};
    use crate::error::DefinitionError;
    use crate::terms::{Key, Shape, Terms};

    #[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
    enum Age {
        Young,
        Elderly,
    }

    fn age_terms() -> Terms<Age> {
        let mut terms = Terms::new();

        terms.insert(Age::Young, Shape::trapezoid(10., 10., 25., 50.).unwrap());
        terms.insert(Age::Elderly, Shape::trapezoid(50., 70., 100., 100.).unwrap());
        terms
    }

    #[test]
    fn every_registry_gets_its_own_id() {
        let a = Variables::<Age>::new();
        let b = Variables::<Age>::new();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn variable_requires_at_least_one_category() {
        let mut vars = Variables::<Age>::new();

        assert_eq!(
            vars.add_input(10. ..=100., Terms::<Age>::new(), Some(1.)).unwrap_err(),
            DefinitionError::NoCategories,
        );
    }

    #[test]
    fn degenerate_domains_are_rejected() {
        let mut vars = Variables::<Age>::new();

        assert!(matches!(
            vars.add_input(100. ..=10., age_terms(), Some(1.)),
            Err(DefinitionError::InvalidDomain { .. })
        ));
        assert!(matches!(
            vars.add_input(10. ..=100., age_terms(), Some(0.)),
            Err(DefinitionError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn membership_clamps_to_domain_edges() {
        let mut vars = Variables::<Age>::new();
        let age = vars.add_input(10. ..=100., age_terms(), Some(1.)).unwrap();
        let def = &vars.slots[age.0.key];

        // below the domain clamps to 10, where young saturates at 1
        assert_eq!(def.membership(&Age::Young, 5.), 1.);
        assert_eq!(def.membership(&Age::Young, 200.), 0.);
        assert_eq!(def.membership(&Age::Elderly, 200.), 1.);
        assert_eq!(def.membership(&Age::Elderly, 60.), 0.5);
    }

    #[test]
    fn curves_are_sampled_over_the_universe() {
        let mut vars = Variables::<Age>::new();
        let age = vars.add_output(10. ..=100., age_terms(), Some(1.)).unwrap();
        let def = &vars.slots[age.0.key];

        assert_eq!(def.kind, VariableKind::Output);
        assert_eq!(def.universe.len(), 91);

        let young = &def.terms[&Age::Young].curve;

        assert_eq!(young.len(), 91);
        assert_eq!(young[0], 1.); // x = 10
        assert_eq!(young[15], 1.); // x = 25
        assert_eq!(young[40], 0.); // x = 50
    }
}
