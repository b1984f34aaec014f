//! Constraint normalization.
//!
//! Normalization translates a boolean requirement expression, as written in
//! a requires clause or a concept definition, into the constraint language.
//! Logical conjunction and disjunction become constraint connectives,
//! concept checks become unexpanded concept constraints (expansion is the
//! prover's job), requires expressions bind their parameters over the
//! normalized body, and every other boolean expression becomes an opaque
//! predicate leaf. No other expression-level connective survives outside a
//! predicate.
use crate::ast::{BinaryOp, Cons, Expr, ExprKind};
use crate::build::Builder;
use crate::context::Context;
use crate::error::Result;

/// Normalize a boolean expression into a canonical constraint tree.
pub fn normalize<'t>(cxt: &'t Context<'t>, e: &'t Expr<'t>) -> Result<&'t Cons<'t>> {
    assert!(e.has_boolean_type(), "normalization of a non-boolean expression");
    let build = Builder::new(cxt);
    match &e.kind {
        ExprKind::Binary(BinaryOp::And, l, r) => {
            let l = normalize(cxt, l)?;
            let r = normalize(cxt, r)?;
            Ok(build.get_conjunction_constraint(l, r))
        }
        ExprKind::Binary(BinaryOp::Or, l, r) => {
            let l = normalize(cxt, l)?;
            let r = normalize(cxt, r)?;
            Ok(build.get_disjunction_constraint(l, r))
        }
        ExprKind::Check(check) => {
            Ok(build.get_concept_constraint(check.concept, check.args.clone()))
        }
        ExprKind::Requires(req) => {
            let inner = normalize(cxt, req.body)?;
            Ok(build.get_parameterized_constraint(req.parms.clone(), inner))
        }
        _ => Ok(build.get_predicate_constraint(e)),
    }
}
