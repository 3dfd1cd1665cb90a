//! A Mamdani-style fuzzy inference engine.
//!
//! Crisp observations are fuzzified into per-category membership degrees,
//! a fixed rule base is evaluated (AND = min, OR = max, NOT = complement),
//! triggered conclusions are aggregated by clipping each output category's
//! shape at its activation level and unioning the clipped shapes pointwise,
//! and the result collapses to one number via centroid defuzzification.
//!
//! Definitions are built once and sealed into an [`Engine`]; every call to
//! [`Engine::eval`] is a pure computation over its own transient state, so
//! a single engine can serve concurrent callers without locking.
//!
//! ```
//! use mamdani::{Engine, Inputs, Key, Rules, Shape, Terms, Variables};
//!
//! #[derive(Clone, Copy, Eq, Hash, Key, PartialEq)]
//! enum Temp { Cold, Hot }
//!
//! #[derive(Clone, Copy, Eq, Hash, Key, PartialEq)]
//! enum Fan { Slow, Fast }
//!
//! #[derive(Clone, Copy, Eq, Hash, PartialEq)]
//! enum Term { Temp(Temp), Fan(Fan) }
//!
//! impl From<Temp> for Term { fn from(t: Temp) -> Self { Self::Temp(t) } }
//! impl From<Fan> for Term { fn from(f: Fan) -> Self { Self::Fan(f) } }
//!
//! let mut temp_terms = Terms::new();
//! temp_terms.insert(Temp::Cold, Shape::trapezoid(0., 0., 10., 20.)?);
//! temp_terms.insert(Temp::Hot, Shape::trapezoid(10., 20., 30., 30.)?);
//!
//! let mut fan_terms = Terms::new();
//! fan_terms.insert(Fan::Slow, Shape::triangle(0., 0., 60.)?);
//! fan_terms.insert(Fan::Fast, Shape::triangle(40., 100., 100.)?);
//!
//! let mut vars = Variables::<Term>::new();
//! let temp = vars.add_input(0. ..=30., temp_terms, None)?;
//! let fan = vars.add_output(0. ..=100., fan_terms, None)?;
//!
//! let mut rules = Rules::new();
//! rules.add(&vars, temp.is(Temp::Cold), (fan, Fan::Slow))?;
//! rules.add(&vars, temp.is(Temp::Hot), (fan, Fan::Fast))?;
//!
//! let engine = Engine::new(vars, rules)?;
//! let outputs = engine.eval(&Inputs::new().with(temp, 25.))?;
//!
//! assert!(outputs.get(fan).unwrap() > 50.);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod defuzz;
mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod outputs;
pub mod recurrence;
mod rules;
mod terms;
mod variable;

pub use dsl::Expr;
pub use error::{DefinitionError, InferError};
pub use inference::Engine;
pub use inputs::Inputs;
pub use outputs::Outputs;
pub use rules::Rules;
pub use terms::{Key, Shape, Term, Terms};
pub use variable::{Variable, VariableKey, VariableKind, VariableRef, Variables};
