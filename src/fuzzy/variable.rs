//! Fuzzy linguistic variables
//!
//! A variable spans one measured quantity (distance to target, rounds of
//! ammo, ...) as an ordered collection of named terms. Fuzzification writes
//! each term's degree of membership; rule evaluation accumulates evidence
//! into consequent terms; defuzzification collapses a variable back to a
//! crisp number.

use crate::fuzzy::set::MembershipShape;

/// One named fuzzy set within a variable
///
/// `last_dom` and `accumulated` are transient per-inference-cycle state:
/// `last_dom` is rewritten by every fuzzify call, `accumulated` is reset at
/// the start of every rule evaluation pass.
#[derive(Debug, Clone)]
pub struct Term {
    pub name: String,
    pub shape: MembershipShape,
    pub last_dom: f32,
    pub accumulated: f32,
}

impl Term {
    pub fn new(name: impl Into<String>, shape: MembershipShape) -> Self {
        Self {
            name: name.into(),
            shape,
            last_dom: 0.0,
            accumulated: 0.0,
        }
    }

    /// Merge a rule's firing strength into this term's accumulated evidence
    ///
    /// Uses max so rules sharing a consequent OR their evidence together
    /// instead of overwriting it.
    pub fn or_with(&mut self, strength: f32) {
        if strength > self.accumulated {
            self.accumulated = strength;
        }
    }
}

/// A named collection of terms spanning one measured quantity
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    terms: Vec<Term>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
        }
    }

    /// Add a term; names must be unique within the variable
    pub fn add_term(&mut self, name: &str, shape: MembershipShape) -> usize {
        assert!(
            self.terms.iter().all(|t| t.name != name),
            "duplicate term '{}' in fuzzy variable '{}'",
            name,
            self.name
        );
        self.terms.push(Term::new(name, shape));
        self.terms.len() - 1
    }

    pub fn term(&self, index: usize) -> &Term {
        &self.terms[index]
    }

    pub fn term_mut(&mut self, index: usize) -> &mut Term {
        &mut self.terms[index]
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Set every term's degree of membership for the crisp input
    pub fn fuzzify(&mut self, value: f32) {
        for term in &mut self.terms {
            term.last_dom = term.shape.membership(value);
        }
    }

    /// Clear accumulated rule evidence ahead of an evaluation pass
    pub fn reset_accumulated(&mut self) {
        for term in &mut self.terms {
            term.accumulated = 0.0;
        }
    }

    /// Max-of-averages defuzzification
    ///
    /// Crisp result is the evidence-weighted average of each fired term's
    /// representative value. Returns 0.0 when no term fired at all; the
    /// zero denominator is a normal degenerate-inference case, not an
    /// error.
    pub fn defuzzify_max_av(&self) -> f32 {
        let mut weighted_sum = 0.0;
        let mut total = 0.0;

        for term in &self.terms {
            if term.accumulated > 0.0 {
                weighted_sum += term.accumulated * term.shape.representative_value();
                total += term.accumulated;
            }
        }

        if total > 0.0 {
            weighted_sum / total
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance_variable() -> Variable {
        let mut var = Variable::new("distance_to_target");
        var.add_term("close", MembershipShape::left_shoulder(0.0, 25.0, 150.0));
        var.add_term("medium", MembershipShape::triangular(25.0, 150.0, 300.0));
        var.add_term("far", MembershipShape::right_shoulder(150.0, 300.0, 1000.0));
        var
    }

    #[test]
    fn test_fuzzify_writes_every_term() {
        let mut var = distance_variable();
        var.fuzzify(150.0);
        assert_eq!(var.term(0).last_dom, 0.0);
        assert_eq!(var.term(1).last_dom, 1.0);
        assert_eq!(var.term(2).last_dom, 0.0);

        // Refuzzifying overwrites, never blends
        var.fuzzify(10.0);
        assert_eq!(var.term(0).last_dom, 1.0);
        assert_eq!(var.term(1).last_dom, 0.0);
    }

    #[test]
    fn test_or_with_keeps_maximum() {
        let mut term = Term::new("x", MembershipShape::triangular(0.0, 50.0, 100.0));
        term.or_with(0.3);
        term.or_with(0.7);
        term.or_with(0.5);
        assert_eq!(term.accumulated, 0.7);
    }

    #[test]
    fn test_defuzzify_weighted_average() {
        let mut var = distance_variable();
        var.term_mut(0).accumulated = 0.5; // rep 25
        var.term_mut(1).accumulated = 0.5; // rep 150
        let crisp = var.defuzzify_max_av();
        assert!((crisp - 87.5).abs() < 1e-4);
    }

    #[test]
    fn test_defuzzify_no_fired_terms_is_zero() {
        let var = distance_variable();
        assert_eq!(var.defuzzify_max_av(), 0.0);
    }

    #[test]
    #[should_panic(expected = "duplicate term")]
    fn test_duplicate_term_name_panics() {
        let mut var = Variable::new("v");
        var.add_term("close", MembershipShape::triangular(0.0, 1.0, 2.0));
        var.add_term("close", MembershipShape::triangular(1.0, 2.0, 3.0));
    }
}
