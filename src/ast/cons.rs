//! Normalized constraints.
//!
//! A constraint is the logical form of a requirement expression, produced by
//! [`normalize`](crate::normalize::normalize). Inside a constraint tree the
//! only connectives are conjunction and disjunction; expression-level
//! logic survives only beneath [`Cons::Predicate`] leaves. All constraint
//! nodes are canonical: the builder interns them, so equivalence is identity.
use strum::{EnumDiscriminants, EnumIs};

use crate::ast::{Decl, Expr, Term};

/// A concept applied to arguments, awaiting lazy expansion by the prover.
#[derive(Debug)]
pub struct ConceptCons<'t> {
    pub decl: &'t Decl<'t>,
    pub args: Vec<Term<'t>>,
}

/// A constraint binding parameters over an inner constraint.
#[derive(Debug)]
pub struct ParameterizedCons<'t> {
    pub parms: Vec<&'t Decl<'t>>,
    pub inner: &'t Cons<'t>,
}

/// Constraint forms.
#[derive(Debug, EnumDiscriminants, EnumIs)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(ConsKind))]
pub enum Cons<'t> {
    /// An atomic boolean expression, treated opaquely.
    Predicate(&'t Expr<'t>),
    /// An unexpanded concept check.
    Concept(ConceptCons<'t>),
    /// Parameters bound over a sub-constraint.
    Parameterized(ParameterizedCons<'t>),
    Conjunction(&'t Cons<'t>, &'t Cons<'t>),
    Disjunction(&'t Cons<'t>, &'t Cons<'t>),
}

impl<'t> Cons<'t> {
    pub fn kind(&self) -> ConsKind {
        ConsKind::from(self)
    }

    /// Atomic constraints have no proof-relevant structure left: only
    /// predicate leaves. Concepts are not atomic; they can still be
    /// expanded.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Cons::Predicate(_))
    }
}
