//! Declarations and definitions.
//!
//! Declarations are entity-like: each declared entity is a unique arena node
//! and is never interned, so declaration equivalence is identity. A
//! declaration carries its name, a specifier bitset, and a link to the
//! enclosing declaration context (absent only for the global namespace).
//! The context link, constraints, and definitions may be attached after
//! construction, but only during the parsing phase; the prover assumes a
//! settled graph.
use std::cell::{Cell, RefCell};

use strum::{EnumDiscriminants, EnumIs};

use crate::ast::{Expr, Name, Stmt, Term, Type};

/// Declaration specifiers, packed into a word. Opaque to the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Specifiers(pub u32);

impl Specifiers {
    pub const NONE: Specifiers = Specifiers(0);

    pub fn contains(self, other: Specifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn with(self, other: Specifiers) -> Specifiers {
        Specifiers(self.0 | other.0)
    }
}

/// A variable, constant, or object-like parameter: a declared type and an
/// optional initializer.
#[derive(Debug)]
pub struct ObjectDecl<'t> {
    pub ty: &'t Type<'t>,
    pub init: Cell<Option<&'t Expr<'t>>>,
}

/// A function: its function type, parameter declarations, and optional
/// constraint and definition.
///
/// The declared type is always a function type, and its parameter type
/// sequence agrees with the parameter declarations; the builder enforces
/// this at construction.
#[derive(Debug)]
pub struct FunctionDecl<'t> {
    pub ty: &'t Type<'t>,
    pub parms: Vec<&'t Decl<'t>>,
    pub constraint: Cell<Option<&'t Expr<'t>>>,
    pub definition: Cell<Option<&'t Def<'t>>>,
}

impl<'t> FunctionDecl<'t> {
    pub fn return_type(&self) -> &'t Type<'t> {
        match self.ty {
            Type::Function(f) => f.ret,
            _ => unreachable!("function declaration with non-function type"),
        }
    }
}

/// A class, union, or enum body slot.
#[derive(Debug)]
pub struct TypeDeclBody<'t> {
    pub definition: Cell<Option<&'t Def<'t>>>,
}

/// A namespace and its member list.
#[derive(Debug)]
pub struct NamespaceDecl<'t> {
    pub members: RefCell<Vec<&'t Decl<'t>>>,
}

/// A template: parameters, an optional constraint, and the pattern it
/// parameterizes. The pattern's context points back at the template.
#[derive(Debug)]
pub struct TemplateDecl<'t> {
    pub parms: Vec<&'t Decl<'t>>,
    pub constraint: Cell<Option<&'t Expr<'t>>>,
    pub pattern: &'t Decl<'t>,
}

/// A concept: parameters plus a definition (normally an expression
/// definition, which is what concept expansion consumes).
#[derive(Debug)]
pub struct ConceptDecl<'t> {
    pub parms: Vec<&'t Decl<'t>>,
    pub definition: Cell<Option<&'t Def<'t>>>,
}

impl<'t> ConceptDecl<'t> {
    /// The defining expression, if an expression-style definition has been
    /// attached.
    pub fn defining_expression(&self) -> Option<&'t Expr<'t>> {
        match self.definition.get()? {
            Def::Expression(e) | Def::Concept(e) => Some(*e),
            _ => None,
        }
    }
}

/// A type parameter, with an optional default argument.
#[derive(Debug)]
pub struct TypeParmDecl<'t> {
    pub default: Cell<Option<Term<'t>>>,
}

/// A template parameter: the template declaration giving its signature, plus
/// an optional default argument.
#[derive(Debug)]
pub struct TemplateParmDecl<'t> {
    pub signature: &'t Decl<'t>,
    pub default: Cell<Option<Term<'t>>>,
}

/// Declaration shapes.
#[derive(Debug, EnumDiscriminants, EnumIs)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(DeclKindTag))]
pub enum DeclKind<'t> {
    Variable(ObjectDecl<'t>),
    Constant(ObjectDecl<'t>),
    Function(FunctionDecl<'t>),
    Class(TypeDeclBody<'t>),
    Union(TypeDeclBody<'t>),
    Enum(TypeDeclBody<'t>),
    Namespace(NamespaceDecl<'t>),
    Template(TemplateDecl<'t>),
    Concept(ConceptDecl<'t>),
    ObjectParm(ObjectDecl<'t>),
    ValueParm(ObjectDecl<'t>),
    TypeParm(TypeParmDecl<'t>),
    TemplateParm(TemplateParmDecl<'t>),
    VariadicParm,
}

/// A declared entity.
#[derive(Debug)]
pub struct Decl<'t> {
    pub name: &'t Name<'t>,
    pub specifiers: Cell<Specifiers>,
    context: Cell<Option<&'t Decl<'t>>>,
    pub kind: DeclKind<'t>,
}

impl<'t> Decl<'t> {
    pub(crate) fn new(name: &'t Name<'t>, kind: DeclKind<'t>) -> Self {
        Self {
            name,
            specifiers: Cell::new(Specifiers::NONE),
            context: Cell::new(None),
            kind,
        }
    }

    pub fn kind_tag(&self) -> DeclKindTag {
        DeclKindTag::from(&self.kind)
    }

    /// The enclosing declaration, absent only for the global namespace.
    pub fn context(&self) -> Option<&'t Decl<'t>> {
        self.context.get()
    }

    /// Attach the enclosing declaration. Parser-phase only.
    pub fn set_context(&self, cxt: &'t Decl<'t>) {
        self.context.set(Some(cxt));
    }

    pub fn is_global_namespace(&self) -> bool {
        self.kind.is_namespace() && self.context.get().is_none()
    }

    /// The declared type of an object-like or function declaration.
    pub fn declared_type(&self) -> Option<&'t Type<'t>> {
        match &self.kind {
            DeclKind::Variable(o)
            | DeclKind::Constant(o)
            | DeclKind::ObjectParm(o)
            | DeclKind::ValueParm(o) => Some(o.ty),
            DeclKind::Function(f) => Some(f.ty),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectDecl<'t>> {
        match &self.kind {
            DeclKind::Variable(o)
            | DeclKind::Constant(o)
            | DeclKind::ObjectParm(o)
            | DeclKind::ValueParm(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDecl<'t>> {
        match &self.kind {
            DeclKind::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_template(&self) -> Option<&TemplateDecl<'t>> {
        match &self.kind {
            DeclKind::Template(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_concept(&self) -> Option<&ConceptDecl<'t>> {
        match &self.kind {
            DeclKind::Concept(c) => Some(c),
            _ => None,
        }
    }

    /// True for the parameter forms a substitution may map.
    pub fn is_parameter(&self) -> bool {
        matches!(
            self.kind,
            DeclKind::ObjectParm(_)
                | DeclKind::ValueParm(_)
                | DeclKind::TypeParm(_)
                | DeclKind::TemplateParm(_)
                | DeclKind::VariadicParm
        )
    }
}

/// Definition shapes, attached to declarations.
#[derive(Debug, EnumDiscriminants, EnumIs)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(DefKind))]
pub enum Def<'t> {
    /// The definition is supplied by the implementation.
    Defaulted,
    /// The definition is explicitly invalid.
    Deleted,
    /// A function body.
    Function(&'t Stmt<'t>),
    /// A class body: its member declarations.
    Class(Vec<&'t Decl<'t>>),
    Union(Vec<&'t Decl<'t>>),
    Enum(Vec<&'t Decl<'t>>),
    /// A definition by expression.
    Expression(&'t Expr<'t>),
    /// A concept definition by expression.
    Concept(&'t Expr<'t>),
}
