//! Structural hashing.
//!
//! Hashing mirrors [`crate::equiv`] field for field: the variant tag is
//! mixed first, then exactly the fields equivalence consults, with sequences
//! contributing their length before their elements. Declarations hash by
//! node address, matching their identity-only equivalence. The 64-bit
//! fingerprints key the context's interning buckets.
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::ast::expr::{ExprKindTag, InitKindTag};
use crate::ast::name::NameKind;
use crate::ast::{Cons, ConsKind, Decl, Expr, ExprKind, InitKind, Name, Term, TermKind, Type, TypeKind};

pub fn hash_decl<H: Hasher>(d: &Decl<'_>, state: &mut H) {
    (d as *const Decl<'_> as usize).hash(state);
}

fn hash_decl_seq<H: Hasher>(ds: &[&Decl<'_>], state: &mut H) {
    ds.len().hash(state);
    for d in ds {
        hash_decl(d, state);
    }
}

pub fn hash_type<H: Hasher>(t: &Type<'_>, state: &mut H) {
    TypeKind::from(t).hash(state);
    match t {
        Type::Void
        | Type::Boolean
        | Type::Auto
        | Type::Decltype
        | Type::Declauto => {}
        Type::Integer(i) => i.hash(state),
        Type::Float { precision } => precision.hash(state),
        Type::Function(f) => {
            hash_type_seq(&f.parms, state);
            hash_type(f.ret, state);
        }
        Type::Qualified(q) => {
            q.quals.hash(state);
            hash_type(q.inner, state);
        }
        Type::Pointer(inner) | Type::Reference(inner) | Type::Sequence(inner) => {
            hash_type(inner, state);
        }
        Type::Array(a) => {
            hash_type(a.elem, state);
            hash_expr(a.extent, state);
        }
        Type::Class(d) | Type::Union(d) | Type::Enum(d) | Type::Typename(d) | Type::Synthetic(d) => {
            hash_decl(d, state);
        }
    }
}

fn hash_type_seq<H: Hasher>(ts: &[&Type<'_>], state: &mut H) {
    ts.len().hash(state);
    for t in ts {
        hash_type(t, state);
    }
}

pub fn hash_name<H: Hasher>(n: &Name<'_>, state: &mut H) {
    NameKind::from(n).hash(state);
    match n {
        Name::Simple(sym) | Name::Operator(sym) | Name::Literal(sym) => sym.hash(state),
        Name::Global => {}
        Name::Placeholder(id) => id.hash(state),
        Name::Conversion(t) | Name::Destructor(t) => hash_type(t, state),
        Name::Template(id) => {
            hash_decl(id.decl, state);
            hash_term_seq(&id.args, state);
        }
        Name::Concept(id) => {
            hash_decl(id.decl, state);
            hash_term_seq(&id.args, state);
        }
        Name::Qualified(q) => {
            hash_decl(q.scope, state);
            hash_name(q.name, state);
        }
    }
}

pub fn hash_expr<H: Hasher>(e: &Expr<'_>, state: &mut H) {
    ExprKindTag::from(&e.kind).hash(state);
    match &e.kind {
        ExprKind::Boolean(v) => v.hash(state),
        ExprKind::Integer(v) => v.hash(state),
        ExprKind::Real(v) => v.to_bits().hash(state),
        ExprKind::Reference(d) | ExprKind::Synthetic(d) => hash_decl(d, state),
        ExprKind::Unary(op, x) => {
            op.hash(state);
            hash_expr(x, state);
        }
        ExprKind::Binary(op, l, r) => {
            op.hash(state);
            hash_expr(l, state);
            hash_expr(r, state);
        }
        ExprKind::Assign(l, r) => {
            hash_expr(l, state);
            hash_expr(r, state);
        }
        ExprKind::Call(c) => {
            hash_expr(c.callee, state);
            hash_expr_seq(&c.args, state);
        }
        ExprKind::Conv(kind, src) => {
            kind.hash(state);
            hash_type(e.ty, state);
            hash_expr(src, state);
        }
        ExprKind::Init(init) => hash_init(init, state),
        ExprKind::Check(c) => {
            hash_decl(c.concept, state);
            hash_term_seq(&c.args, state);
        }
        ExprKind::Requires(r) => {
            hash_decl_seq(&r.parms, state);
            hash_expr(r.body, state);
        }
    }
}

fn hash_expr_seq<H: Hasher>(es: &[&Expr<'_>], state: &mut H) {
    es.len().hash(state);
    for e in es {
        hash_expr(e, state);
    }
}

fn hash_init<H: Hasher>(init: &InitKind<'_>, state: &mut H) {
    InitKindTag::from(init).hash(state);
    match init {
        InitKind::Equal(e)
        | InitKind::Zero(e)
        | InitKind::Object(e)
        | InitKind::Reference(e)
        | InitKind::Copy(e)
        | InitKind::Bind(e) => hash_expr(e, state),
        InitKind::Paren(es)
        | InitKind::Brace(es)
        | InitKind::Structural(es)
        | InitKind::Aggregate(es)
        | InitKind::Direct(es) => hash_expr_seq(es, state),
        InitKind::Trivial => {}
        InitKind::Constructor { ctor, args } => {
            hash_decl(ctor, state);
            hash_expr_seq(args, state);
        }
    }
}

pub fn hash_term<H: Hasher>(t: &Term<'_>, state: &mut H) {
    TermKind::from(t).hash(state);
    match t {
        Term::Name(n) => hash_name(n, state),
        Term::Type(t) => hash_type(t, state),
        Term::Expr(e) => hash_expr(e, state),
        Term::Decl(d) => hash_decl(d, state),
        Term::Cons(c) => hash_cons(c, state),
    }
}

fn hash_term_seq<H: Hasher>(ts: &[Term<'_>], state: &mut H) {
    ts.len().hash(state);
    for t in ts {
        hash_term(t, state);
    }
}

pub fn hash_cons<H: Hasher>(c: &Cons<'_>, state: &mut H) {
    ConsKind::from(c).hash(state);
    match c {
        Cons::Predicate(e) => hash_expr(e, state),
        Cons::Concept(cc) => {
            hash_decl(cc.decl, state);
            hash_term_seq(&cc.args, state);
        }
        Cons::Parameterized(p) => {
            hash_decl_seq(&p.parms, state);
            hash_cons(p.inner, state);
        }
        Cons::Conjunction(l, r) | Cons::Disjunction(l, r) => {
            hash_cons(l, state);
            hash_cons(r, state);
        }
    }
}

pub fn fingerprint_type(t: &Type<'_>) -> u64 {
    let mut state = DefaultHasher::new();
    hash_type(t, &mut state);
    state.finish()
}

pub fn fingerprint_name(n: &Name<'_>) -> u64 {
    let mut state = DefaultHasher::new();
    hash_name(n, &mut state);
    state.finish()
}

pub fn fingerprint_cons(c: &Cons<'_>) -> u64 {
    let mut state = DefaultHasher::new();
    hash_cons(c, &mut state);
    state.finish()
}
