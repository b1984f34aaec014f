//! Structural equivalence.
//!
//! Equivalence is recursive and variant-directed. Declarations compare by
//! identity only; everything that wraps a declaration (reference
//! expressions, class/typename types, concept constraints) inherits that
//! identity comparison for the wrapped field. Interned sorts get a pointer
//! fast path, which the interner itself relies on when comparing a transient
//! candidate against resident canonical nodes.
use crate::ast::{Cons, Decl, Expr, ExprKind, InitKind, Name, Term, Type};

/// Declarations are entities: equivalent iff they are the same node.
pub fn equivalent_decls<'t>(a: &Decl<'t>, b: &Decl<'t>) -> bool {
    std::ptr::eq(a, b)
}

fn same_decl_seq<'t>(a: &[&Decl<'t>], b: &[&Decl<'t>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equivalent_decls(x, y))
}

pub fn equivalent_types<'t>(a: &Type<'t>, b: &Type<'t>) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Type::Void, Type::Void)
        | (Type::Boolean, Type::Boolean)
        | (Type::Auto, Type::Auto)
        | (Type::Decltype, Type::Decltype)
        | (Type::Declauto, Type::Declauto) => true,
        (Type::Integer(x), Type::Integer(y)) => x == y,
        (Type::Float { precision: x }, Type::Float { precision: y }) => x == y,
        (Type::Function(f), Type::Function(g)) => {
            equivalent_type_seq(&f.parms, &g.parms) && equivalent_types(f.ret, g.ret)
        }
        (Type::Qualified(x), Type::Qualified(y)) => {
            x.quals == y.quals && equivalent_types(x.inner, y.inner)
        }
        (Type::Pointer(x), Type::Pointer(y))
        | (Type::Reference(x), Type::Reference(y))
        | (Type::Sequence(x), Type::Sequence(y)) => equivalent_types(x, y),
        (Type::Array(x), Type::Array(y)) => {
            equivalent_types(x.elem, y.elem) && equivalent_exprs(x.extent, y.extent)
        }
        (Type::Class(x), Type::Class(y))
        | (Type::Union(x), Type::Union(y))
        | (Type::Enum(x), Type::Enum(y))
        | (Type::Typename(x), Type::Typename(y))
        | (Type::Synthetic(x), Type::Synthetic(y)) => equivalent_decls(x, y),
        _ => false,
    }
}

fn equivalent_type_seq<'t>(a: &[&Type<'t>], b: &[&Type<'t>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equivalent_types(x, y))
}

pub fn equivalent_names<'t>(a: &Name<'t>, b: &Name<'t>) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Name::Simple(x), Name::Simple(y))
        | (Name::Operator(x), Name::Operator(y))
        | (Name::Literal(x), Name::Literal(y)) => x == y,
        (Name::Global, Name::Global) => true,
        (Name::Placeholder(x), Name::Placeholder(y)) => x == y,
        (Name::Conversion(x), Name::Conversion(y))
        | (Name::Destructor(x), Name::Destructor(y)) => equivalent_types(x, y),
        (Name::Template(x), Name::Template(y)) => {
            equivalent_decls(x.decl, y.decl) && equivalent_term_seq(&x.args, &y.args)
        }
        (Name::Concept(x), Name::Concept(y)) => {
            equivalent_decls(x.decl, y.decl) && equivalent_term_seq(&x.args, &y.args)
        }
        (Name::Qualified(x), Name::Qualified(y)) => {
            equivalent_decls(x.scope, y.scope) && equivalent_names(x.name, y.name)
        }
        _ => false,
    }
}

pub fn equivalent_exprs<'t>(a: &Expr<'t>, b: &Expr<'t>) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (&a.kind, &b.kind) {
        (ExprKind::Boolean(x), ExprKind::Boolean(y)) => x == y,
        (ExprKind::Integer(x), ExprKind::Integer(y)) => x == y,
        (ExprKind::Real(x), ExprKind::Real(y)) => x.to_bits() == y.to_bits(),
        (ExprKind::Reference(x), ExprKind::Reference(y))
        | (ExprKind::Synthetic(x), ExprKind::Synthetic(y)) => equivalent_decls(x, y),
        (ExprKind::Unary(ox, x), ExprKind::Unary(oy, y)) => ox == oy && equivalent_exprs(x, y),
        (ExprKind::Binary(ox, lx, rx), ExprKind::Binary(oy, ly, ry)) => {
            ox == oy && equivalent_exprs(lx, ly) && equivalent_exprs(rx, ry)
        }
        (ExprKind::Assign(lx, rx), ExprKind::Assign(ly, ry)) => {
            equivalent_exprs(lx, ly) && equivalent_exprs(rx, ry)
        }
        (ExprKind::Call(x), ExprKind::Call(y)) => {
            equivalent_exprs(x.callee, y.callee) && equivalent_expr_seq(&x.args, &y.args)
        }
        (ExprKind::Conv(kx, x), ExprKind::Conv(ky, y)) => {
            kx == ky && equivalent_types(a.ty, b.ty) && equivalent_exprs(x, y)
        }
        (ExprKind::Init(x), ExprKind::Init(y)) => equivalent_inits(x, y),
        (ExprKind::Check(x), ExprKind::Check(y)) => {
            equivalent_decls(x.concept, y.concept) && equivalent_term_seq(&x.args, &y.args)
        }
        (ExprKind::Requires(x), ExprKind::Requires(y)) => {
            same_decl_seq(&x.parms, &y.parms) && equivalent_exprs(x.body, y.body)
        }
        _ => false,
    }
}

fn equivalent_expr_seq<'t>(a: &[&Expr<'t>], b: &[&Expr<'t>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equivalent_exprs(x, y))
}

fn equivalent_inits<'t>(a: &InitKind<'t>, b: &InitKind<'t>) -> bool {
    match (a, b) {
        (InitKind::Equal(x), InitKind::Equal(y))
        | (InitKind::Zero(x), InitKind::Zero(y))
        | (InitKind::Object(x), InitKind::Object(y))
        | (InitKind::Reference(x), InitKind::Reference(y))
        | (InitKind::Copy(x), InitKind::Copy(y))
        | (InitKind::Bind(x), InitKind::Bind(y)) => equivalent_exprs(x, y),
        (InitKind::Paren(x), InitKind::Paren(y))
        | (InitKind::Brace(x), InitKind::Brace(y))
        | (InitKind::Structural(x), InitKind::Structural(y))
        | (InitKind::Aggregate(x), InitKind::Aggregate(y))
        | (InitKind::Direct(x), InitKind::Direct(y)) => equivalent_expr_seq(x, y),
        (InitKind::Trivial, InitKind::Trivial) => true,
        (
            InitKind::Constructor { ctor: cx, args: ax },
            InitKind::Constructor { ctor: cy, args: ay },
        ) => equivalent_decls(cx, cy) && equivalent_expr_seq(ax, ay),
        _ => false,
    }
}

pub fn equivalent_terms<'t>(a: &Term<'t>, b: &Term<'t>) -> bool {
    match (a, b) {
        (Term::Name(x), Term::Name(y)) => equivalent_names(x, y),
        (Term::Type(x), Term::Type(y)) => equivalent_types(x, y),
        (Term::Expr(x), Term::Expr(y)) => equivalent_exprs(x, y),
        (Term::Decl(x), Term::Decl(y)) => equivalent_decls(x, y),
        (Term::Cons(x), Term::Cons(y)) => equivalent_cons(x, y),
        _ => false,
    }
}

fn equivalent_term_seq<'t>(a: &[Term<'t>], b: &[Term<'t>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equivalent_terms(x, y))
}

pub fn equivalent_cons<'t>(a: &Cons<'t>, b: &Cons<'t>) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Cons::Predicate(x), Cons::Predicate(y)) => equivalent_exprs(x, y),
        (Cons::Concept(x), Cons::Concept(y)) => {
            equivalent_decls(x.decl, y.decl) && equivalent_term_seq(&x.args, &y.args)
        }
        (Cons::Parameterized(x), Cons::Parameterized(y)) => {
            same_decl_seq(&x.parms, &y.parms) && equivalent_cons(x.inner, y.inner)
        }
        (Cons::Conjunction(lx, rx), Cons::Conjunction(ly, ry))
        | (Cons::Disjunction(lx, rx), Cons::Disjunction(ly, ry)) => {
            equivalent_cons(lx, ly) && equivalent_cons(rx, ry)
        }
        _ => false,
    }
}

// The interner compares transient candidate values against resident nodes,
// so these run on plain stack values the way the interner sees them.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::IntegerType;

    #[test]
    fn candidate_types_compare_structurally() {
        let a = Type::Integer(IntegerType { signed: true, precision: 32 });
        let b = Type::Integer(IntegerType { signed: true, precision: 32 });
        let c = Type::Integer(IntegerType { signed: false, precision: 32 });
        assert!(equivalent_types(&a, &b));
        assert!(!equivalent_types(&a, &c));
        assert!(!equivalent_types(&a, &Type::Boolean));
    }

    #[test]
    fn candidate_hashes_match_equivalence() {
        use crate::hash;
        let a = Type::Integer(IntegerType { signed: true, precision: 64 });
        let b = Type::Integer(IntegerType { signed: true, precision: 64 });
        assert_eq!(hash::fingerprint_type(&a), hash::fingerprint_type(&b));
    }

    #[test]
    fn variant_mismatch_is_never_equivalent() {
        let a = Type::Void;
        let b = Type::Auto;
        assert!(!equivalent_types(&a, &b));
    }
}
