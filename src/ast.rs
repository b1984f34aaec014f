//! The term model.
//!
//! Every entity the core manipulates is a term belonging to one of a small
//! number of closed sorts: names, types, expressions, statements,
//! declarations, definitions, and normalized constraints. Each sort is an
//! enum; shape-directed operations (hashing, equivalence, substitution,
//! normalization, printing, proving) dispatch by exhaustive `match`, so an
//! unhandled variant is a compile error rather than a runtime surprise.
//!
//! Terms are allocated in a [`Context`](crate::context::Context) arena and
//! link to each other with plain references. Value-like sorts (types,
//! constraints, template/concept ids) are canonicalized by the
//! [`Builder`](crate::build::Builder); declarations and expressions are
//! entity-like and never interned.
pub mod cons;
pub mod decl;
pub mod expr;
pub mod name;
pub mod stmt;
pub mod ty;

pub use cons::{ConceptCons, Cons, ConsKind, ParameterizedCons};
pub use decl::{
    ConceptDecl, Decl, DeclKind, Def, DefKind, FunctionDecl, NamespaceDecl, ObjectDecl,
    Specifiers, TemplateDecl, TemplateParmDecl, TypeDeclBody, TypeParmDecl,
};
pub use expr::{
    BinaryOp, CheckExpr, ConvKind, Expr, ExprKind, InitKind, RequiresExpr, UnaryOp,
};
pub use name::{ConceptId, Name, NameKind, QualifiedId, TemplateId};
pub use stmt::Stmt;
pub use ty::{FunctionType, IntegerType, Qualifiers, Type, TypeKind};

use strum::{EnumDiscriminants, EnumIs};

/// A reference to a term of any sort.
///
/// Used wherever heterogeneous argument lists appear (template-ids, concept
/// checks) and as the value side of a substitution.
#[derive(Clone, Copy, Debug, EnumDiscriminants, EnumIs)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(TermKind))]
pub enum Term<'t> {
    Name(&'t Name<'t>),
    Type(&'t Type<'t>),
    Expr(&'t Expr<'t>),
    Decl(&'t Decl<'t>),
    Cons(&'t Cons<'t>),
}

impl<'t> Term<'t> {
    pub fn kind(&self) -> TermKind {
        TermKind::from(self)
    }

    pub fn as_type(&self) -> Option<&'t Type<'t>> {
        match *self {
            Term::Type(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_expr(&self) -> Option<&'t Expr<'t>> {
        match *self {
            Term::Expr(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_decl(&self) -> Option<&'t Decl<'t>> {
        match *self {
            Term::Decl(d) => Some(d),
            _ => None,
        }
    }
}

impl<'t> From<&'t Type<'t>> for Term<'t> {
    fn from(t: &'t Type<'t>) -> Self {
        Term::Type(t)
    }
}

impl<'t> From<&'t Expr<'t>> for Term<'t> {
    fn from(e: &'t Expr<'t>) -> Self {
        Term::Expr(e)
    }
}
