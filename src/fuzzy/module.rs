//! Fuzzy inference module
//!
//! A module owns a set of named variables and a list of rules, and runs the
//! whole inference cycle: fuzzify crisp inputs, evaluate every rule with
//! min-conjunction, OR-accumulate firing strengths into consequent terms,
//! then defuzzify a named output variable with max-of-averages.
//!
//! Unknown variable or term names are programming errors in the rule-base
//! setup, so the lookup methods fail fast instead of returning `Result`s
//! that a per-tick decision loop could do nothing sensible with.

use crate::fuzzy::rule::{Rule, TermRef};
use crate::fuzzy::set::MembershipShape;
use crate::fuzzy::variable::Variable;

/// Handle to a variable inside a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarHandle(usize);

/// A self-contained fuzzy rule base
///
/// All mutable inference state (`last_dom`, accumulated evidence) lives in
/// this instance, so distinct modules never interfere. A single module
/// assumes one evaluation in flight at a time.
#[derive(Debug, Clone, Default)]
pub struct FuzzyModule {
    variables: Vec<Variable>,
    rules: Vec<Rule>,
}

impl FuzzyModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new linguistic variable
    ///
    /// # Panics
    /// Panics if a variable with this name already exists.
    pub fn create_variable(&mut self, name: &str) -> VarHandle {
        assert!(
            self.variables.iter().all(|v| v.name != name),
            "duplicate fuzzy variable '{name}'"
        );
        self.variables.push(Variable::new(name));
        VarHandle(self.variables.len() - 1)
    }

    /// Add a left-shoulder set to a variable
    pub fn add_left_shoulder(
        &mut self,
        var: VarHandle,
        name: &str,
        a: f32,
        peak: f32,
        b: f32,
    ) -> TermRef {
        let term = self.variables[var.0].add_term(name, MembershipShape::left_shoulder(a, peak, b));
        TermRef::new(var.0, term)
    }

    /// Add a triangular set to a variable
    pub fn add_triangular(
        &mut self,
        var: VarHandle,
        name: &str,
        a: f32,
        peak: f32,
        b: f32,
    ) -> TermRef {
        let term = self.variables[var.0].add_term(name, MembershipShape::triangular(a, peak, b));
        TermRef::new(var.0, term)
    }

    /// Add a right-shoulder set to a variable
    pub fn add_right_shoulder(
        &mut self,
        var: VarHandle,
        name: &str,
        a: f32,
        peak: f32,
        b: f32,
    ) -> TermRef {
        let term = self.variables[var.0].add_term(name, MembershipShape::right_shoulder(a, peak, b));
        TermRef::new(var.0, term)
    }

    /// Append a rule: conjunction of `antecedent` implies `consequent`
    pub fn add_rule(&mut self, antecedent: impl Into<Vec<TermRef>>, consequent: TermRef) {
        self.rules.push(Rule::new(antecedent.into(), consequent));
    }

    /// Fuzzify one input variable at a crisp value
    ///
    /// Must be called for every input variable referenced by any rule
    /// before defuzzifying. Side effect only.
    ///
    /// # Panics
    /// Panics if no variable carries this name.
    pub fn fuzzify(&mut self, variable: &str, value: f32) {
        let index = self.variable_index(variable);
        self.variables[index].fuzzify(value);
    }

    /// Run rule evaluation and defuzzify the named output variable with
    /// max-of-averages
    ///
    /// Returns 0.0 when no rule fired — degenerate inference is handled by
    /// policy, not by error.
    ///
    /// # Panics
    /// Panics if no variable carries this name.
    pub fn defuzzify(&mut self, variable: &str) -> f32 {
        let index = self.variable_index(variable);
        self.evaluate_rules();
        self.variables[index].defuzzify_max_av()
    }

    /// Reset accumulated evidence, then fire every rule
    fn evaluate_rules(&mut self) {
        for var in &mut self.variables {
            var.reset_accumulated();
        }

        for rule in &self.rules {
            let mut strength = f32::INFINITY;
            for entry in &rule.antecedent {
                let dom = self.variables[entry.var].term(entry.term).last_dom;
                strength = strength.min(entry.hedge.apply(dom));
            }

            let consequent = &rule.consequent;
            self.variables[consequent.var]
                .term_mut(consequent.term)
                .or_with(consequent.hedge.apply(strength));
        }
    }

    fn variable_index(&self, name: &str) -> usize {
        self.variables
            .iter()
            .position(|v| v.name == name)
            .unwrap_or_else(|| panic!("unknown fuzzy variable '{name}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::rule::{fairly, very};

    /// Minimal two-input module: distance and ammo imply desirability
    fn sample_module() -> FuzzyModule {
        let mut fm = FuzzyModule::new();

        let dist = fm.create_variable("distance");
        let close = fm.add_left_shoulder(dist, "close", 0.0, 25.0, 150.0);
        let medium = fm.add_triangular(dist, "medium", 25.0, 150.0, 300.0);
        let far = fm.add_right_shoulder(dist, "far", 150.0, 300.0, 1000.0);

        let ammo = fm.create_variable("ammo");
        let low = fm.add_triangular(ammo, "low", 0.0, 0.0, 10.0);
        let okay = fm.add_triangular(ammo, "okay", 0.0, 10.0, 30.0);
        let loads = fm.add_right_shoulder(ammo, "loads", 10.0, 30.0, 100.0);

        let desire = fm.create_variable("desirability");
        let undesirable = fm.add_left_shoulder(desire, "undesirable", 0.0, 25.0, 50.0);
        let desirable = fm.add_triangular(desire, "desirable", 25.0, 50.0, 75.0);
        let very_desirable = fm.add_right_shoulder(desire, "very_desirable", 50.0, 75.0, 100.0);

        fm.add_rule([close, loads], very_desirable);
        fm.add_rule([close, okay], desirable);
        fm.add_rule([close, low], desirable);
        fm.add_rule([medium, loads], very_desirable);
        fm.add_rule([medium, okay], desirable);
        fm.add_rule([medium, low], undesirable);
        fm.add_rule([far, loads], desirable);
        fm.add_rule([far, okay], undesirable);
        fm.add_rule([far, low], undesirable);

        fm
    }

    #[test]
    fn test_full_inference_cycle() {
        let mut fm = sample_module();
        fm.fuzzify("distance", 10.0);
        fm.fuzzify("ammo", 30.0);

        // close=1, loads=1 => very_desirable fires at 1.0 alone
        let score = fm.defuzzify("desirability");
        assert!((score - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_rule_fired_yields_zero() {
        // Input far outside the lone set's support: no rule fires, the
        // denominator guard must return 0.0 rather than divide by zero
        let mut fm = FuzzyModule::new();
        let input = fm.create_variable("in");
        let t = fm.add_triangular(input, "t", 0.0, 1.0, 2.0);
        let out = fm.create_variable("out");
        let o = fm.add_triangular(out, "o", 0.0, 50.0, 100.0);
        fm.add_rule([t], o);

        fm.fuzzify("in", 10.0);
        assert_eq!(fm.defuzzify("out"), 0.0);
    }

    #[test]
    fn test_accumulation_is_max_not_sum() {
        let mut fm = FuzzyModule::new();
        let input = fm.create_variable("in");
        let lo = fm.add_left_shoulder(input, "lo", 0.0, 0.0, 10.0);
        let hi = fm.add_right_shoulder(input, "hi", 0.0, 10.0, 10.0);
        let out = fm.create_variable("out");
        let shared = fm.add_triangular(out, "shared", 0.0, 50.0, 100.0);

        // Both rules share one consequent; at x=7: lo=0.3, hi=0.7
        fm.add_rule([lo], shared);
        fm.add_rule([hi], shared);
        fm.fuzzify("in", 7.0);
        fm.evaluate_rules();

        // Evidence must equal max(0.3, 0.7), not the sum and not the last
        let acc = fm.variables[1].term(0).accumulated;
        assert!((acc - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_antecedent_conjunction_is_min() {
        let mut fm = sample_module();
        // distance 87.5: close=0.5, medium=0.5; ammo 20: okay=0.5, loads=0.5
        fm.fuzzify("distance", 87.5);
        fm.fuzzify("ammo", 20.0);
        fm.evaluate_rules();

        // Rule (close, loads) => very_desirable: min(0.5, 0.5) = 0.5
        let very_desirable = fm.variables[2].term(2);
        assert!((very_desirable.accumulated - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_evaluation_resets_previous_evidence() {
        let mut fm = sample_module();
        fm.fuzzify("distance", 10.0);
        fm.fuzzify("ammo", 30.0);
        let first = fm.defuzzify("desirability");

        // A second full cycle with identical inputs must reproduce the
        // score exactly; stale accumulated evidence would shift it.
        let second = fm.defuzzify("desirability");
        assert_eq!(first, second);
    }

    #[test]
    fn test_hedged_antecedent() {
        let mut fm = FuzzyModule::new();
        let input = fm.create_variable("in");
        let t = fm.add_triangular(input, "t", 0.0, 10.0, 20.0);
        let out = fm.create_variable("out");
        let o = fm.add_triangular(out, "o", 0.0, 50.0, 100.0);
        fm.add_rule([very(t)], o);
        fm.add_rule([fairly(t)], o);

        fm.fuzzify("in", 5.0); // t = 0.5
        fm.evaluate_rules();
        // fairly(0.5) = 0.707 beats very(0.5) = 0.25 under max-accumulation
        let acc = fm.variables[1].term(0).accumulated;
        assert!((acc - 0.5f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_hedged_consequent_scales_firing_strength() {
        let mut fm = FuzzyModule::new();
        let input = fm.create_variable("in");
        let t = fm.add_triangular(input, "t", 0.0, 10.0, 20.0);
        let out = fm.create_variable("out");
        let o = fm.add_triangular(out, "o", 0.0, 50.0, 100.0);
        fm.add_rule([t], very(o));

        fm.fuzzify("in", 5.0); // strength 0.5
        fm.evaluate_rules();
        let acc = fm.variables[1].term(0).accumulated;
        assert!((acc - 0.25).abs() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "unknown fuzzy variable")]
    fn test_fuzzify_unknown_variable_panics() {
        let mut fm = sample_module();
        fm.fuzzify("no_such_variable", 1.0);
    }

    #[test]
    #[should_panic(expected = "duplicate fuzzy variable")]
    fn test_duplicate_variable_panics() {
        let mut fm = FuzzyModule::new();
        fm.create_variable("x");
        fm.create_variable("x");
    }
}
