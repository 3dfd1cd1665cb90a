//! Breast-cancer recurrence scoring model.
//!
//! Four observations (age, tumor size, involved lymph nodes, malignancy
//! grade) produce a recurrence score in [0, 100] and a two-way verdict.
//! Prompting for and validating the observations against the documented
//! bounds is the caller's job; values outside a variable's domain clamp to
//! the domain edge during fuzzification.

use fixed_map::Key;

use crate::error::{DefinitionError, InferError};
use crate::inference::Engine;
use crate::inputs::Inputs;
use crate::rules::Rules;
use crate::terms::{Shape, Terms};
use crate::variable::{Variable, Variables};

#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum Age {
    Young,
    MiddleAged,
    Elderly,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum TumorSize {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum InvolvedNodes {
    Few,
    Moderate,
    Many,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum Malignancy {
    Low,
    High,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, Ord, PartialEq, PartialOrd)]
pub enum Recurrence {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModelTerms {
    Age(Age),
    TumorSize(TumorSize),
    InvolvedNodes(InvolvedNodes),
    Malignancy(Malignancy),
    Recurrence(Recurrence),
}

impl From<Age> for ModelTerms {
    fn from(a: Age) -> Self {
        Self::Age(a)
    }
}

impl From<TumorSize> for ModelTerms {
    fn from(t: TumorSize) -> Self {
        Self::TumorSize(t)
    }
}

impl From<InvolvedNodes> for ModelTerms {
    fn from(n: InvolvedNodes) -> Self {
        Self::InvolvedNodes(n)
    }
}

impl From<Malignancy> for ModelTerms {
    fn from(m: Malignancy) -> Self {
        Self::Malignancy(m)
    }
}

impl From<Recurrence> for ModelTerms {
    fn from(r: Recurrence) -> Self {
        Self::Recurrence(r)
    }
}

/// One validated observation per input variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    /// Patient age in years, 10 to 100.
    pub age_years: f64,
    /// Largest tumor diameter in millimeters, 0 to 60.
    pub tumor_size_mm: f64,
    /// Number of involved lymph nodes, 0 to 40.
    pub involved_nodes: f64,
    /// Histological grade, 1 to 3.
    pub malignancy_grade: f64,
}

/// Two-way classification of the crisp recurrence score.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Recurrence,
    NoRecurrence,
}

impl Verdict {
    /// Scores strictly above 50 classify as recurrence.
    pub fn from_score(score: f64) -> Self {
        if score > 50. {
            Verdict::Recurrence
        } else {
            Verdict::NoRecurrence
        }
    }
}

/// The crisp score together with its threshold-derived verdict.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assessment {
    pub score: f64,
    pub verdict: Verdict,
}

/// The sealed recurrence engine plus the handles needed to feed it.
pub struct RecurrenceModel {
    engine: Engine<ModelTerms>,
    age: Variable<Age>,
    tumor_size: Variable<TumorSize>,
    involved_nodes: Variable<InvolvedNodes>,
    malignancy: Variable<Malignancy>,
    recurrence: Variable<Recurrence>,
}

impl RecurrenceModel {
    pub fn new() -> Result<Self, DefinitionError> {
        let mut age_terms = Terms::new();

        age_terms.insert(Age::Young, Shape::trapezoid(10., 10., 25., 50.)?);
        age_terms.insert(Age::MiddleAged, Shape::triangle(25., 50., 70.)?);
        age_terms.insert(Age::Elderly, Shape::trapezoid(50., 70., 100., 100.)?);

        let mut tumor_terms = Terms::new();

        tumor_terms.insert(TumorSize::Small, Shape::trapezoid(0., 0., 2., 10.)?);
        tumor_terms.insert(TumorSize::Medium, Shape::triangle(2., 10., 18.)?);
        tumor_terms.insert(TumorSize::Large, Shape::trapezoid(10., 18., 60., 60.)?);

        let mut node_terms = Terms::new();

        node_terms.insert(InvolvedNodes::Few, Shape::trapezoid(0., 0., 2., 10.)?);
        node_terms.insert(InvolvedNodes::Moderate, Shape::triangle(2., 10., 20.)?);
        node_terms.insert(InvolvedNodes::Many, Shape::trapezoid(10., 20., 40., 40.)?);

        // grade peaks sit past the domain edge: degrees saturate mid-slope
        let mut malignancy_terms = Terms::new();

        malignancy_terms.insert(Malignancy::Low, Shape::triangle(1., 1., 4.)?);
        malignancy_terms.insert(Malignancy::High, Shape::triangle(2., 4., 4.)?);

        let mut recurrence_terms = Terms::new();

        recurrence_terms.insert(Recurrence::Low, Shape::triangle(0., 0., 50.)?);
        recurrence_terms.insert(Recurrence::Medium, Shape::triangle(0., 50., 100.)?);
        recurrence_terms.insert(Recurrence::High, Shape::triangle(50., 100., 100.)?);

        let mut vars = Variables::<ModelTerms>::new();
        let age = vars.add_input(10. ..=100., age_terms, Some(1.))?;
        let tumor_size = vars.add_input(0. ..=60., tumor_terms, Some(1.))?;
        let involved_nodes = vars.add_input(0. ..=40., node_terms, Some(1.))?;
        let malignancy = vars.add_input(1. ..=3., malignancy_terms, Some(1.))?;
        let recurrence = vars.add_output(0. ..=100., recurrence_terms, Some(1.))?;

        let mut rules = Rules::with_capacity(15);

        rules.add(&vars, age.is(Age::Young), (recurrence, Recurrence::High))?;
        rules.add(&vars, age.is(Age::MiddleAged), (recurrence, Recurrence::Medium))?;
        rules.add(&vars, age.is(Age::Elderly), (recurrence, Recurrence::Medium))?;

        rules.add(&vars, involved_nodes.is(InvolvedNodes::Few), (recurrence, Recurrence::Low))?;
        rules.add(&vars, involved_nodes.is(InvolvedNodes::Moderate), (recurrence, Recurrence::Medium))?;
        rules.add(&vars, involved_nodes.is(InvolvedNodes::Many), (recurrence, Recurrence::High))?;

        rules.add(&vars, malignancy.is(Malignancy::Low), (recurrence, Recurrence::Low))?;
        rules.add(&vars, malignancy.is(Malignancy::High), (recurrence, Recurrence::High))?;

        rules.add(&vars, tumor_size.is(TumorSize::Small), (recurrence, Recurrence::Low))?;
        rules.add(&vars, tumor_size.is(TumorSize::Medium), (recurrence, Recurrence::Medium))?;
        rules.add(&vars, tumor_size.is(TumorSize::Large), (recurrence, Recurrence::High))?;

        rules.add(
            &vars,
            involved_nodes.is(InvolvedNodes::Few).and(tumor_size.is(TumorSize::Large)),
            (recurrence, Recurrence::Medium),
        )?;
        rules.add(
            &vars,
            malignancy.is(Malignancy::High).and(tumor_size.is(TumorSize::Large)),
            (recurrence, Recurrence::High),
        )?;
        rules.add(
            &vars,
            age.is(Age::MiddleAged).and(involved_nodes.is(InvolvedNodes::Few)),
            (recurrence, Recurrence::Low),
        )?;
        rules.add(
            &vars,
            age.is(Age::MiddleAged).and(involved_nodes.is(InvolvedNodes::Moderate)),
            (recurrence, Recurrence::Low),
        )?;

        let engine = Engine::new(vars, rules)?;

        Ok(Self {
            engine,
            age,
            tumor_size,
            involved_nodes,
            malignancy,
            recurrence,
        })
    }

    /// Scores one observation and classifies it against the 50 threshold.
    pub fn infer(&self, obs: Observation) -> Result<Assessment, InferError> {
        let inputs = Inputs::new()
            .with(self.age, obs.age_years)
            .with(self.tumor_size, obs.tumor_size_mm)
            .with(self.involved_nodes, obs.involved_nodes)
            .with(self.malignancy, obs.malignancy_grade);
        let outputs = self.engine.eval(&inputs)?;
        let score = outputs
            .get(self.recurrence)
            .expect("the engine defuzzifies every output variable");

        Ok(Assessment {
            score,
            verdict: Verdict::from_score(score),
        })
    }
}
