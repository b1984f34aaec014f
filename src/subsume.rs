//! The subsumption prover.
//!
//! Decides whether one normalized constraint implies another by a small
//! sequent-calculus search. A proof state is a list of goals; each goal is a
//! sequent of two deduplicating proposition lists. The driver alternates
//! three moves until the proof decides or saturates:
//!
//! - **flatten** moves as much structure as possible into the lists without
//!   ever creating subgoals: conjunctions split on the left, disjunctions on
//!   the right, parameterized constraints are transparent on both sides.
//!   The asymmetry is deliberate; the dual splits need case analysis.
//! - **validate** is three-valued: a goal is discharged when some consequent
//!   is already among the antecedents, refuted when no rule can ever apply,
//!   and otherwise left for another round.
//! - **expand** performs the case analysis flattening deferred: concepts are
//!   replaced by their normalized, substituted definitions, and
//!   disjunctions on the left (dually conjunctions on the right) branch the
//!   goal.
//!
//! Because every constraint is canonical, list membership is an identity
//! test; the hash index over each proposition list makes it O(1).
//!
//! Termination: a round that changes nothing (no flattening, no discharge,
//! no expansion) can never make progress later, so the search stops and the
//! query is decided `false`. Mutually recursive concepts can keep generating
//! fresh propositions forever, so an iteration budget backstops the closure
//! check; exhausting it also decides `false`.
use std::collections::HashSet;

use smallvec::SmallVec;

use crate::ast::cons::ConceptCons;
use crate::ast::Cons;
use crate::context::Context;
use crate::equiv;
use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::subst::{substitute_expr, Substitution};

/// Identity key for a canonical constraint.
#[derive(Clone, Copy, Debug)]
struct ConsKey<'t>(&'t Cons<'t>);

impl PartialEq for ConsKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for ConsKey<'_> {}

impl std::hash::Hash for ConsKey<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (self.0 as *const Cons<'_> as usize).hash(state);
    }
}

/// An insertion-ordered, duplicate-suppressing sequence of constraints with
/// a cursor for flattening passes.
#[derive(Clone)]
pub struct PropList<'t> {
    seq: SmallVec<[&'t Cons<'t>; 8]>,
    index: HashSet<ConsKey<'t>>,
    cur: usize,
}

impl<'t> PropList<'t> {
    fn new() -> Self {
        Self {
            seq: SmallVec::new(),
            index: HashSet::new(),
            cur: 0,
        }
    }

    fn with(c: &'t Cons<'t>) -> Self {
        let mut list = Self::new();
        list.insert(c);
        list
    }

    /// Membership. Constraints are canonical, so this is an identity test.
    pub fn contains(&self, c: &'t Cons<'t>) -> bool {
        self.index.contains(&ConsKey(c))
    }

    /// Append `c` unless it is already present. Returns whether it was
    /// inserted.
    pub fn insert(&mut self, c: &'t Cons<'t>) -> bool {
        if self.index.insert(ConsKey(c)) {
            self.seq.push(c);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'t Cons<'t>> + '_ {
        self.seq.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    fn start(&mut self) {
        self.cur = 0;
    }

    fn at_end(&self) -> bool {
        self.cur >= self.seq.len()
    }

    fn current(&self) -> &'t Cons<'t> {
        self.seq[self.cur]
    }

    fn advance(&mut self) {
        self.cur += 1;
    }

    /// Replace the element at the cursor with `parts`, suppressing any part
    /// already present. The cursor is left on the first inserted part (or on
    /// whatever slid into its position), so replacements are themselves
    /// re-examined.
    fn replace_current(&mut self, parts: &[&'t Cons<'t>]) {
        let pos = self.cur;
        self.replace_at(pos, parts);
    }

    /// Positional form of [`PropList::replace_current`].
    fn replace_at(&mut self, pos: usize, parts: &[&'t Cons<'t>]) {
        self.index.remove(&ConsKey(self.seq[pos]));
        self.seq.remove(pos);
        let mut at = pos;
        for &part in parts {
            if self.index.insert(ConsKey(part)) {
                self.seq.insert(at, part);
                at += 1;
            }
        }
    }
}

impl std::fmt::Display for PropList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.seq.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// One proof obligation: the consequents must follow from the antecedents.
#[derive(Clone)]
pub struct Sequent<'t> {
    ants: PropList<'t>,
    cons: PropList<'t>,
}

impl<'t> Sequent<'t> {
    fn new(a: &'t Cons<'t>, c: &'t Cons<'t>) -> Self {
        Self {
            ants: PropList::with(a),
            cons: PropList::with(c),
        }
    }

    pub fn antecedents(&self) -> &PropList<'t> {
        &self.ants
    }

    pub fn consequents(&self) -> &PropList<'t> {
        &self.cons
    }
}

impl std::fmt::Display for Sequent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} |- {}", self.ants, self.cons)
    }
}

/// Outcome of validating a goal or a whole proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Validation {
    Valid,
    Invalid,
    Incomplete,
}

/// The proof state: a list of goals, all of which must validate.
struct Proof<'t> {
    goals: Vec<Sequent<'t>>,
}

impl<'t> Proof<'t> {
    fn new(a: &'t Cons<'t>, c: &'t Cons<'t>) -> Self {
        Self {
            goals: vec![Sequent::new(a, c)],
        }
    }

    /// Duplicate goal `i`, returning the index of the copy. Used by the
    /// expansion moves that need case analysis.
    fn branch(&mut self, i: usize) -> usize {
        let copy = self.goals[i].clone();
        self.goals.push(copy);
        self.goals.len() - 1
    }
}

impl std::fmt::Display for Proof<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, s) in self.goals.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {i}: {s}")?;
        }
        Ok(())
    }
}

// ------------------------------------------------------------- validation

/// Validate `a |- c` for a single pair. Equivalent sides prove the goal; two
/// atoms with no structural hit can never be proven by the current rules;
/// anything else might still be advanced.
fn validate_pair<'t>(a: &Cons<'t>, c: &Cons<'t>) -> Validation {
    if equiv::equivalent_cons(a, c) {
        Validation::Valid
    } else if a.is_atomic() && c.is_atomic() {
        Validation::Invalid
    } else {
        Validation::Incomplete
    }
}

/// Validate `A1, ..., An |- c`: one matching antecedent suffices.
fn validate_against<'t>(ants: &PropList<'t>, c: &'t Cons<'t>) -> Validation {
    if ants.contains(c) {
        return Validation::Valid;
    }
    let mut r = Validation::Invalid;
    for a in ants.iter() {
        match validate_pair(a, c) {
            Validation::Valid => return Validation::Valid,
            Validation::Incomplete => r = Validation::Incomplete,
            Validation::Invalid => {}
        }
    }
    r
}

/// Validate a sequent: any provable consequent discharges it.
fn validate_sequent<'t>(s: &Sequent<'t>) -> Validation {
    let mut r = Validation::Invalid;
    for c in s.cons.iter() {
        match validate_against(&s.ants, c) {
            Validation::Valid => return Validation::Valid,
            Validation::Incomplete => r = Validation::Incomplete,
            Validation::Invalid => {}
        }
    }
    r
}

/// Validate the whole proof, discharging satisfied goals.
fn validate_proof(p: &mut Proof<'_>, progress: &mut bool) -> Validation {
    let mut i = 0;
    while i < p.goals.len() {
        match validate_sequent(&p.goals[i]) {
            Validation::Valid => {
                p.goals.remove(i);
                *progress = true;
            }
            Validation::Invalid => return Validation::Invalid,
            Validation::Incomplete => i += 1,
        }
    }
    if p.goals.is_empty() {
        Validation::Valid
    } else {
        Validation::Incomplete
    }
}

// -------------------------------------------------------------- flattening

/// Flatten the antecedents: conjunctions split, parameterized constraints
/// are transparent, disjunctions and atoms are skipped (splitting a
/// disjunction on the left needs case analysis and belongs to expansion).
fn flatten_left<'t>(s: &mut Sequent<'t>) -> bool {
    let mut changed = false;
    let list = &mut s.ants;
    list.start();
    while !list.at_end() {
        match list.current() {
            Cons::Parameterized(p) => {
                list.replace_current(&[p.inner]);
                changed = true;
            }
            Cons::Conjunction(l, r) => {
                list.replace_current(&[*l, *r]);
                changed = true;
            }
            _ => list.advance(),
        }
    }
    changed
}

/// Flatten the consequents, dually: disjunctions split, conjunctions wait
/// for expansion.
fn flatten_right<'t>(s: &mut Sequent<'t>) -> bool {
    let mut changed = false;
    let list = &mut s.cons;
    list.start();
    while !list.at_end() {
        match list.current() {
            Cons::Parameterized(p) => {
                list.replace_current(&[p.inner]);
                changed = true;
            }
            Cons::Disjunction(l, r) => {
                list.replace_current(&[*l, *r]);
                changed = true;
            }
            _ => list.advance(),
        }
    }
    changed
}

fn flatten(p: &mut Proof<'_>) -> bool {
    let mut changed = false;
    for s in &mut p.goals {
        changed |= flatten_left(s);
        changed |= flatten_right(s);
    }
    changed
}

// --------------------------------------------------------------- expansion

/// Ordering heuristic: a concept is a better expansion candidate than
/// anything but another concept, and a disjunction beats only atoms.
fn is_better_expansion(a: &Cons<'_>, b: &Cons<'_>) -> bool {
    if a.is_concept() {
        return !b.is_concept();
    }
    if a.is_disjunction() {
        return b.is_atomic();
    }
    false
}

/// Expand a concept constraint: substitute its arguments through its
/// definition and normalize the result.
fn expand_concept<'t>(cxt: &'t Context<'t>, cc: &ConceptCons<'t>) -> Result<&'t Cons<'t>> {
    let concept = cc
        .decl
        .as_concept()
        .expect("concept constraint over a non-concept declaration");
    let def = concept
        .defining_expression()
        .ok_or_else(|| Error::MissingDefinition {
            concept: cc.decl.name.to_string(),
        })?;
    let sub = Substitution::from_args(&concept.parms, &cc.args);
    let instantiated = substitute_expr(cxt, def, &sub)?;
    let expanded = normalize(cxt, instantiated)?;
    log::debug!("expand: {} ~> {expanded}", cc.decl.name);
    Ok(expanded)
}

/// Expand one proposition in goal `i`, preferring the antecedent side.
/// Concepts expand in place; a disjunction on the left (dually a conjunction
/// on the right) branches the goal, one operand per branch.
fn expand_goal<'t>(cxt: &'t Context<'t>, p: &mut Proof<'t>, i: usize) -> Result<bool> {
    // Left: the best non-atomic antecedent, if any.
    let best = {
        let ants = &p.goals[i].ants;
        let mut best: Option<(usize, &'t Cons<'t>)> = None;
        for (at, a) in ants.iter().enumerate() {
            match best {
                None => best = Some((at, a)),
                Some((_, b)) if is_better_expansion(a, b) => best = Some((at, a)),
                _ => {}
            }
        }
        best
    };
    if let Some((at, a)) = best {
        match a {
            Cons::Concept(cc) => {
                let expanded = expand_concept(cxt, cc)?;
                p.goals[i].ants.replace_at(at, &[expanded]);
                return Ok(true);
            }
            Cons::Disjunction(l, r) => {
                let j = p.branch(i);
                p.goals[i].ants.replace_at(at, &[*l]);
                p.goals[j].ants.replace_at(at, &[*r]);
                return Ok(true);
            }
            _ => {}
        }
    }

    // Right: expand a concept, or case-split a conjunction.
    let concept = p.goals[i].cons.iter().enumerate().find_map(|(at, c)| match c {
        Cons::Concept(cc) => Some((at, cc)),
        _ => None,
    });
    if let Some((at, cc)) = concept {
        let expanded = expand_concept(cxt, cc)?;
        p.goals[i].cons.replace_at(at, &[expanded]);
        return Ok(true);
    }
    let conjunction = p.goals[i].cons.iter().enumerate().find_map(|(at, c)| match c {
        Cons::Conjunction(l, r) => Some((at, *l, *r)),
        _ => None,
    });
    if let Some((at, l, r)) = conjunction {
        let j = p.branch(i);
        p.goals[i].cons.replace_at(at, &[l]);
        p.goals[j].cons.replace_at(at, &[r]);
        return Ok(true);
    }
    Ok(false)
}

fn expand<'t>(cxt: &'t Context<'t>, p: &mut Proof<'t>) -> Result<bool> {
    let mut changed = false;
    // Branching appends new goals; they are picked up next round.
    let count = p.goals.len();
    for i in 0..count {
        changed |= expand_goal(cxt, p, i)?;
    }
    Ok(changed)
}

// ------------------------------------------------------------------ driver

/// Limits on a single subsumption query.
#[derive(Clone, Copy, Debug)]
pub struct ProofLimits {
    /// Maximum flatten/validate/expand rounds before the query is cut off
    /// and decided `false`. The closure check usually stops far earlier;
    /// the budget exists for mutually recursive concepts.
    pub iteration_budget: usize,
}

impl Default for ProofLimits {
    fn default() -> Self {
        Self { iteration_budget: 32 }
    }
}

/// Does `a` subsume `c`?
pub fn subsumes<'t>(cxt: &'t Context<'t>, a: &'t Cons<'t>, c: &'t Cons<'t>) -> Result<bool> {
    subsumes_with(cxt, a, c, &ProofLimits::default())
}

/// Does `a` subsume `c`, under the given limits?
///
/// `Ok(false)` covers both refutation and failure to decide within the
/// limits; callers needing "don't know" must treat `false` conservatively.
pub fn subsumes_with<'t>(
    cxt: &'t Context<'t>,
    a: &'t Cons<'t>,
    c: &'t Cons<'t>,
    limits: &ProofLimits,
) -> Result<bool> {
    // Cheap comparison first, avoiding proof-state setup.
    match validate_pair(a, c) {
        Validation::Valid => return Ok(true),
        Validation::Invalid => return Ok(false),
        Validation::Incomplete => {}
    }

    let mut proof = Proof::new(a, c);
    log::debug!("prove: {a} |- {c}");

    for round in 1..=limits.iteration_budget.max(1) {
        let mut progress = flatten(&mut proof);

        match validate_proof(&mut proof, &mut progress) {
            Validation::Valid => return Ok(true),
            Validation::Invalid => return Ok(false),
            Validation::Incomplete => {}
        }

        progress |= expand(cxt, &mut proof)?;
        log::debug!("step {round}:\n{proof}");

        if !progress {
            log::debug!("proof saturated after {round} rounds");
            return Ok(false);
        }
    }

    log::debug!("iteration budget exhausted");
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Builder;

    #[test]
    fn prop_list_suppresses_duplicates() {
        let cxt = Context::new();
        let build = Builder::new(&cxt);
        let p = build.get_predicate_constraint(build.get_true());
        let q = build.get_predicate_constraint(build.get_false());

        let mut list = PropList::new();
        assert!(list.insert(p));
        assert!(list.insert(q));
        assert!(!list.insert(p));
        assert_eq!(list.len(), 2);
        assert!(list.contains(p));
    }

    #[test]
    fn replace_leaves_cursor_on_first_part() {
        let cxt = Context::new();
        let build = Builder::new(&cxt);
        let p = build.get_predicate_constraint(build.get_true());
        let q = build.get_predicate_constraint(build.get_false());
        let both = build.get_conjunction_constraint(p, q);

        let mut list = PropList::with(both);
        list.start();
        list.replace_current(&[p, q]);
        assert_eq!(list.len(), 2);
        assert!(std::ptr::eq(list.current(), p));
        assert!(!list.contains(both));
    }
}
