//! Fuzzy rules
//!
//! A rule is `IF antecedent THEN consequent`: the antecedent is a
//! conjunction of (possibly hedged) term references across one or more
//! variables, the consequent a single term of an output variable. Term
//! references are cheap copyable handles into a [`FuzzyModule`]'s storage,
//! so rules never hold pointers into the variables they read.
//!
//! [`FuzzyModule`]: crate::fuzzy::module::FuzzyModule

use crate::fuzzy::set::Hedge;

/// Handle to one term of one variable inside a module, optionally hedged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRef {
    pub(crate) var: usize,
    pub(crate) term: usize,
    pub(crate) hedge: Hedge,
}

impl TermRef {
    pub(crate) fn new(var: usize, term: usize) -> Self {
        Self {
            var,
            term,
            hedge: Hedge::None,
        }
    }

    fn with_hedge(self, hedge: Hedge) -> Self {
        Self { hedge, ..self }
    }
}

/// Concentration hedge: squares the referenced term's membership
pub fn very(term: TermRef) -> TermRef {
    term.with_hedge(Hedge::Very)
}

/// Dilation hedge: square-roots the referenced term's membership
pub fn fairly(term: TermRef) -> TermRef {
    term.with_hedge(Hedge::Fairly)
}

/// An immutable inference rule
///
/// Firing strength is the minimum hedged membership over the antecedent.
/// A hedge on the consequent applies to the firing strength before it is
/// OR-accumulated into the consequent term.
#[derive(Debug, Clone)]
pub struct Rule {
    pub antecedent: Vec<TermRef>,
    pub consequent: TermRef,
}

impl Rule {
    pub fn new(antecedent: Vec<TermRef>, consequent: TermRef) -> Self {
        assert!(!antecedent.is_empty(), "rule antecedent must not be empty");
        Self {
            antecedent,
            consequent,
        }
    }
}
