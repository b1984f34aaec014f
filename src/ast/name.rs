//! Identifier forms.
use strum::{EnumDiscriminants, EnumIs};

use crate::ast::{Decl, Term, Type};
use crate::symbol::Symbol;

/// The name of a template specialization: the template declaration plus the
/// argument list it is applied to. Canonicalized by the builder.
#[derive(Debug)]
pub struct TemplateId<'t> {
    pub decl: &'t Decl<'t>,
    pub args: Vec<Term<'t>>,
}

/// The name of a concept applied to arguments. Canonicalized by the builder.
#[derive(Debug)]
pub struct ConceptId<'t> {
    pub decl: &'t Decl<'t>,
    pub args: Vec<Term<'t>>,
}

/// An explicitly scoped identifier: `scope::name`.
#[derive(Debug)]
pub struct QualifiedId<'t> {
    pub scope: &'t Decl<'t>,
    pub name: &'t Name<'t>,
}

/// Identifier forms.
///
/// Simple ids carry an interned [`Symbol`], so comparing them is comparing
/// symbol identity. Placeholders are anonymous names distinguished by a fresh
/// per-context counter.
#[derive(Debug, EnumDiscriminants, EnumIs)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(NameKind))]
pub enum Name<'t> {
    /// A plain identifier.
    Simple(Symbol<'t>),
    /// The name of the global namespace.
    Global,
    /// An anonymous placeholder name.
    Placeholder(u32),
    /// The name of an overloaded operator, by its spelling.
    Operator(Symbol<'t>),
    /// The name of a conversion function, by its target type.
    Conversion(&'t Type<'t>),
    /// The name of a user-defined literal.
    Literal(Symbol<'t>),
    /// The name of a destructor, by the type it destroys.
    Destructor(&'t Type<'t>),
    /// A template specialization name.
    Template(TemplateId<'t>),
    /// A concept applied to arguments.
    Concept(ConceptId<'t>),
    /// A scoped name.
    Qualified(QualifiedId<'t>),
}

impl<'t> Name<'t> {
    pub fn kind(&self) -> NameKind {
        NameKind::from(self)
    }

    /// The spelling of a simple identifier, if this is one.
    pub fn as_symbol(&self) -> Option<Symbol<'t>> {
        match self {
            Name::Simple(sym) => Some(*sym),
            _ => None,
        }
    }
}
