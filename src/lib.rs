//! Entail: the semantic core of a templates-and-concepts front-end.
//!
//! This crate answers the central question of constrained overload
//! resolution and template selection: given two constrained declarations,
//! does one's constraint *subsume* the other's? Everything here exists in
//! service of that query:
//!
//! - a typed term model for names, types, expressions, declarations, and
//!   normalized constraints ([`ast`]);
//! - a hash-consing [`Builder`](build::Builder) over an arena
//!   [`Context`](context::Context), so value-like terms are canonical and
//!   identity comparison is meaningful ([`build`], [`context`]);
//! - structural equivalence and hashing ([`equiv`], [`hash`]);
//! - capture-free substitution of parameter declarations ([`subst`]);
//! - normalization of requirement expressions into the constraint language
//!   ([`normalize`]);
//! - the sequent-style prover deciding `A |- C` ([`subsume`]).
//!
//! A context is strictly single-threaded; multiple contexts share nothing.
//! External collaborators (parser, overload machinery) interact only by
//! building terms through the builder and calling
//! [`subsumes`](subsume::subsumes), [`normalize`](normalize::normalize), or
//! the substitution entry points.
//!
//! ```
//! use entail::prelude::*;
//!
//! let cxt = Context::new();
//! let build = Builder::new(&cxt);
//!
//! let p = build.get_predicate_constraint(build.get_true());
//! let q = build.get_predicate_constraint(build.get_false());
//! let both = build.get_conjunction_constraint(p, q);
//!
//! assert!(subsumes(&cxt, both, p).unwrap());
//! assert!(!subsumes(&cxt, p, both).unwrap());
//! ```
pub mod ast;
pub mod build;
pub mod context;
pub mod equiv;
pub mod error;
pub mod hash;
pub mod normalize;
pub mod print;
pub mod subst;
pub mod subsume;
pub mod symbol;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::ast::{
        BinaryOp, Cons, Decl, Expr, Name, Qualifiers, Specifiers, Term, Type, UnaryOp,
    };
    pub use crate::build::Builder;
    pub use crate::context::Context;
    pub use crate::error::{Error, Result};
    pub use crate::normalize::normalize;
    pub use crate::subst::{
        substitute_decl, substitute_expr, substitute_term, substitute_type, Substitution,
    };
    pub use crate::subsume::{subsumes, subsumes_with, ProofLimits};
    pub use crate::symbol::Symbol;
}
