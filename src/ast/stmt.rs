//! Statements.
//!
//! Only the minimal statement forms needed to carry function-definition
//! bodies; the core never evaluates them.
use strum::{EnumDiscriminants, EnumIs};

use crate::ast::{Decl, Expr};

#[derive(Debug, EnumDiscriminants, EnumIs)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(StmtKind))]
pub enum Stmt<'t> {
    /// A braced sequence of statements.
    Compound(Vec<&'t Stmt<'t>>),
    /// Evaluate an expression and discard the result.
    Expression(&'t Expr<'t>),
    /// A local declaration.
    Declaration(&'t Decl<'t>),
    Return(&'t Expr<'t>),
}
