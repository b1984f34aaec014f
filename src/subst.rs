//! Capture-free substitution.
//!
//! A [`Substitution`] maps parameter declarations to terms of matching kind.
//! Because parameters are identified by declaration identity rather than by
//! spelling, substitution never captures and needs no renaming. Substitution
//! is applied exactly once per instantiation; it is not idempotent and makes
//! no attempt to be.
//!
//! Reference expressions pass through substitution unchanged. Rebinding a
//! reference whose target is itself a substituted parameter belongs to
//! elaboration; constraints that depend on rebinding are outside the
//! supported fragment.
use crate::ast::{BinaryOp, Decl, Expr, ExprKind, Term, Type, UnaryOp};
use crate::build::Builder;
use crate::context::Context;
use crate::error::{Error, Result};

/// An ordered map from parameter declarations to terms.
pub struct Substitution<'t> {
    entries: Vec<(&'t Decl<'t>, Term<'t>)>,
}

impl<'t> Substitution<'t> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Pair each parameter with the corresponding argument, in order.
    pub fn from_args(parms: &[&'t Decl<'t>], args: &[Term<'t>]) -> Self {
        assert_eq!(
            parms.len(),
            args.len(),
            "substitution requires one argument per parameter"
        );
        let mut sub = Self::new();
        for (parm, arg) in parms.iter().zip(args) {
            sub.map_to(parm, *arg);
        }
        sub
    }

    /// Map `parm` to `term`, replacing any existing mapping for it.
    pub fn map_to(&mut self, parm: &'t Decl<'t>, term: Term<'t>) {
        assert!(parm.is_parameter(), "substitution maps parameters only");
        for entry in &mut self.entries {
            if std::ptr::eq(entry.0, parm) {
                entry.1 = term;
                return;
            }
        }
        self.entries.push((parm, term));
    }

    pub fn has_mapping(&self, parm: &Decl<'t>) -> bool {
        self.get_mapping(parm).is_some()
    }

    pub fn get_mapping(&self, parm: &Decl<'t>) -> Option<Term<'t>> {
        self.entries
            .iter()
            .find(|(p, _)| std::ptr::eq(*p, parm))
            .map(|(_, t)| *t)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mappings in insertion order, for printing and diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = (&'t Decl<'t>, Term<'t>)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for Substitution<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitute through a term of any sort, yielding a term of the same sort.
pub fn substitute_term<'t>(
    cxt: &'t Context<'t>,
    term: Term<'t>,
    sub: &Substitution<'t>,
) -> Result<Term<'t>> {
    match term {
        Term::Type(t) => Ok(Term::Type(substitute_type(cxt, t, sub)?)),
        Term::Expr(e) => Ok(Term::Expr(substitute_expr(cxt, e, sub)?)),
        Term::Decl(d) => Ok(Term::Decl(substitute_decl(cxt, d, sub)?)),
        Term::Name(n) => Err(Error::Unsupported {
            operation: "substitute",
            term: format!("name {n}"),
        }),
        Term::Cons(c) => Err(Error::Unsupported {
            operation: "substitute",
            term: format!("constraint {c}"),
        }),
    }
}

/// Substitute through a type, rebuilding compound shapes via the builder so
/// the result stays canonical.
pub fn substitute_type<'t>(
    cxt: &'t Context<'t>,
    t: &'t Type<'t>,
    sub: &Substitution<'t>,
) -> Result<&'t Type<'t>> {
    let build = Builder::new(cxt);
    match t {
        // Scalar primitives and declaration-backed types have nothing to
        // substitute into.
        Type::Void
        | Type::Boolean
        | Type::Integer(_)
        | Type::Float { .. }
        | Type::Class(_)
        | Type::Union(_)
        | Type::Enum(_)
        | Type::Synthetic(_) => Ok(t),

        Type::Auto | Type::Decltype | Type::Declauto => Err(Error::Unsupported {
            operation: "substitute",
            term: format!("type {t}"),
        }),

        Type::Function(f) => {
            let mut parms = Vec::with_capacity(f.parms.len());
            for &p in &f.parms {
                parms.push(substitute_type(cxt, p, sub)?);
            }
            let ret = substitute_type(cxt, f.ret, sub)?;
            Ok(build.get_function_type(parms, ret))
        }
        Type::Qualified(q) => {
            let inner = substitute_type(cxt, q.inner, sub)?;
            Ok(build.get_qualified_type(inner, q.quals))
        }
        Type::Pointer(inner) => Ok(build.get_pointer_type(substitute_type(cxt, inner, sub)?)),
        Type::Reference(inner) => {
            Ok(build.get_reference_type(substitute_type(cxt, inner, sub)?))
        }
        Type::Array(a) => {
            let elem = substitute_type(cxt, a.elem, sub)?;
            let extent = substitute_expr(cxt, a.extent, sub)?;
            Ok(build.get_array_type(elem, extent))
        }
        Type::Sequence(inner) => Ok(build.get_sequence_type(substitute_type(cxt, inner, sub)?)),

        // The interesting case: a typename type maps through the
        // substitution when its parameter is mapped, and is otherwise left
        // alone.
        Type::Typename(parm) => match sub.get_mapping(parm) {
            None => Ok(t),
            Some(Term::Type(mapped)) => Ok(mapped),
            Some(other) => Err(Error::KindMismatch {
                expected: "type",
                found: format!("{other}"),
            }),
        },
    }
}

/// Substitute through the expression forms a requirement can contain.
pub fn substitute_expr<'t>(
    cxt: &'t Context<'t>,
    e: &'t Expr<'t>,
    sub: &Substitution<'t>,
) -> Result<&'t Expr<'t>> {
    let build = Builder::new(cxt);
    match &e.kind {
        ExprKind::Boolean(_) | ExprKind::Integer(_) | ExprKind::Real(_) => Ok(e),

        // References are opaque; see the module note on rebinding.
        ExprKind::Reference(_) => Ok(e),

        ExprKind::Check(check) => {
            let mut args = Vec::with_capacity(check.args.len());
            for arg in &check.args {
                args.push(substitute_term(cxt, *arg, sub)?);
            }
            Ok(build.make_check(check.concept, args))
        }
        ExprKind::Call(call) => {
            let callee = substitute_expr(cxt, call.callee, sub)?;
            let mut args = Vec::with_capacity(call.args.len());
            for arg in &call.args {
                args.push(substitute_expr(cxt, arg, sub)?);
            }
            // The call is rebuilt with a provisional result type; resolving
            // the true type belongs to elaboration.
            Ok(build.make_call(build.get_void_type(), callee, args))
        }
        ExprKind::Binary(BinaryOp::And, l, r) => {
            let l = substitute_expr(cxt, l, sub)?;
            let r = substitute_expr(cxt, r, sub)?;
            Ok(build.make_and(l, r))
        }
        ExprKind::Binary(BinaryOp::Or, l, r) => {
            let l = substitute_expr(cxt, l, sub)?;
            let r = substitute_expr(cxt, r, sub)?;
            Ok(build.make_or(l, r))
        }
        ExprKind::Unary(UnaryOp::Not, inner) => {
            Ok(build.make_not(substitute_expr(cxt, inner, sub)?))
        }
        ExprKind::Requires(req) => {
            let body = substitute_expr(cxt, req.body, sub)?;
            Ok(build.make_requires(req.parms.clone(), body))
        }

        _ => Err(Error::Unsupported {
            operation: "substitute",
            term: format!("expression {e}"),
        }),
    }
}

/// Substitute through a declaration. Only object-like declarations are
/// rebuilt here; instantiating anything larger is the caller's business.
pub fn substitute_decl<'t>(
    cxt: &'t Context<'t>,
    d: &'t Decl<'t>,
    sub: &Substitution<'t>,
) -> Result<&'t Decl<'t>> {
    use crate::ast::DeclKind;
    let build = Builder::new(cxt);
    match &d.kind {
        DeclKind::Variable(o) => {
            let ty = substitute_type(cxt, o.ty, sub)?;
            Ok(build.make_variable(d.name, ty))
        }
        DeclKind::ObjectParm(o) => {
            let ty = substitute_type(cxt, o.ty, sub)?;
            Ok(build.make_object_parm(d.name, ty))
        }
        _ => Err(Error::Unsupported {
            operation: "substitute",
            term: format!("declaration {d}"),
        }),
    }
}
