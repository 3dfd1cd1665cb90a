use std::collections::HashMap;
use std::hash::Hash;

use crate::variable::{Variable, VariableKey, VariableRef};

/// A rule antecedent: a tree of category references combined with the
/// fuzzy connectives AND (minimum), OR (maximum) and NOT (complement).
pub enum Expr<T> {
    Is(VariableRef, T),
    And(Vec<Expr<T>>),
    Or(Vec<Expr<T>>),
    Not(Box<Expr<T>>),
}

impl<T> Expr<T> {
    pub fn and(self, rhs: Expr<T>) -> Self {
        Expr::And(vec![self, rhs])
    }

    pub fn and2(self, rhs: Expr<T>, rhs2: Expr<T>) -> Self {
        Expr::And(vec![self, rhs, rhs2])
    }

    pub fn or(self, rhs: Expr<T>) -> Self {
        Expr::Or(vec![self, rhs])
    }

    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    /// Every (variable, category) reference in the tree.
    pub(crate) fn propositions(&self) -> Vec<(&VariableRef, &T)> {
        fn walk<'p, T>(expr: &'p Expr<T>, out: &mut Vec<(&'p VariableRef, &'p T)>) {
            match expr {
                Expr::Is(var_ref, term) => out.push((var_ref, term)),
                Expr::And(exprs) | Expr::Or(exprs) => {
                    for expr in exprs {
                        walk(expr, out);
                    }
                }
                Expr::Not(expr) => walk(expr, out),
            }
        }

        let mut props = Vec::new();

        walk(self, &mut props);

        props
    }
}

impl<T: Copy + Eq + Hash> Expr<T> {
    /// Firing strength of the tree under the fuzzified `degrees`,
    /// evaluated by structural recursion.
    pub(crate) fn strength(&self, degrees: &HashMap<(VariableKey, T), f64>) -> f64 {
        match self {
            Expr::Is(var_ref, term) => degrees[&(var_ref.key, *term)],
            Expr::And(exprs) => exprs
                .iter()
                .map(|expr| expr.strength(degrees))
                .fold(1., f64::min),
            Expr::Or(exprs) => exprs
                .iter()
                .map(|expr| expr.strength(degrees))
                .fold(0., f64::max),
            Expr::Not(expr) => 1. - expr.strength(degrees),
        }
    }
}

impl<I> Variable<I> {
    /// An atomic condition: this variable belongs to category `rhs`.
    pub fn is<T>(self, rhs: I) -> Expr<T>
    where
        I: Into<T>,
    {
        Expr::Is(self.0, rhs.into())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Expr;
    use crate::variable::{VariableKey, VariableRef};
    use slotmap::Key as _;

    fn var_ref() -> VariableRef {
        VariableRef { registry: 0, key: VariableKey::null() }
    }

    fn degrees(pairs: &[(VariableKey, char, f64)]) -> HashMap<(VariableKey, char), f64> {
        pairs.iter().map(|&(k, t, d)| ((k, t), d)).collect()
    }

    #[test]
    fn connectives_follow_min_max_complement() {
        let var = var_ref();
        let degrees = degrees(&[(var.key, 'a', 0.3), (var.key, 'b', 0.8)]);
        let a = || Expr::Is(var, 'a');
        let b = || Expr::Is(var, 'b');

        assert_eq!(a().strength(&degrees), 0.3);
        assert_eq!(a().and(b()).strength(&degrees), 0.3);
        assert_eq!(a().or(b()).strength(&degrees), 0.8);
        assert_eq!(a().not().strength(&degrees), 0.7);
        assert_eq!(a().and2(b(), b().not()).strength(&degrees), 0.19999999999999996);
    }

    #[test]
    fn propositions_cover_the_whole_tree() {
        let var = var_ref();
        let expr = Expr::Is(var, 'a')
            .and(Expr::Is(var, 'b').or(Expr::Is(var, 'c').not()));
        let terms: Vec<char> = expr.propositions().iter().map(|(_, t)| **t).collect();

        assert_eq!(terms, vec!['a', 'b', 'c']);
    }
}
