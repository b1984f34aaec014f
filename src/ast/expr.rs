//! Expression forms.
//!
//! Every expression carries its type; the builder never constructs an
//! expression without one. Expressions are entity-like and never interned:
//! two syntactically identical expressions built separately are distinct
//! nodes, compared only by the structural rules in [`crate::equiv`].
use strum::{EnumDiscriminants, EnumIs};

use crate::ast::{Decl, Term, Type};

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Pos,
    Neg,
    Not,
}

/// Binary operators: arithmetic, comparison, and the logical connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
}

/// The standard conversions. The conversion's target type is the type of the
/// conversion expression itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConvKind {
    /// Object to value.
    Value,
    /// Less qualified to more qualified.
    Qualification,
    Boolean,
    Integer,
    Float,
    /// Integer to floating point.
    Numeric,
    /// Argument to ellipsis parameter.
    Ellipsis,
}

/// Initializer forms, both syntactic (as written) and elaborated (as
/// performed).
#[derive(Debug, EnumDiscriminants, EnumIs)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(InitKindTag))]
pub enum InitKind<'t> {
    /// Copy initialization by `=`.
    Equal(&'t Expr<'t>),
    /// Direct initialization by a paren-enclosed argument list.
    Paren(Vec<&'t Expr<'t>>),
    /// Direct initialization by a brace-enclosed argument list.
    Brace(Vec<&'t Expr<'t>>),
    /// Recursive initialization of a compound object.
    Structural(Vec<&'t Expr<'t>>),
    /// No initialization is performed.
    Trivial,
    /// Implicit initialization with the zero value of the target type.
    Zero(&'t Expr<'t>),
    /// Initialization by a user-defined constructor.
    Constructor {
        ctor: &'t Decl<'t>,
        args: Vec<&'t Expr<'t>>,
    },
    /// Initialization of an object by an expression.
    Object(&'t Expr<'t>),
    /// Initialization of a reference by an expression.
    Reference(&'t Expr<'t>),
    /// Aggregate initialization of all fields.
    Aggregate(Vec<&'t Expr<'t>>),
    /// Copy initialization by an expression.
    Copy(&'t Expr<'t>),
    /// Binding a reference to an expression.
    Bind(&'t Expr<'t>),
    /// Elaborated direct initialization.
    Direct(Vec<&'t Expr<'t>>),
}

/// A call: callee plus argument sequence.
#[derive(Debug)]
pub struct CallExpr<'t> {
    pub callee: &'t Expr<'t>,
    pub args: Vec<&'t Expr<'t>>,
}

/// A concept check `C<args...>`; bool-typed.
#[derive(Debug)]
pub struct CheckExpr<'t> {
    pub concept: &'t Decl<'t>,
    pub args: Vec<Term<'t>>,
}

/// A requires expression binding parameters over a boolean body; bool-typed.
#[derive(Debug)]
pub struct RequiresExpr<'t> {
    pub parms: Vec<&'t Decl<'t>>,
    pub body: &'t Expr<'t>,
}

/// An expression: a type and a shape.
#[derive(Debug)]
pub struct Expr<'t> {
    pub ty: &'t Type<'t>,
    pub kind: ExprKind<'t>,
}

/// Expression shapes.
#[derive(Debug, EnumDiscriminants, EnumIs)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(ExprKindTag))]
pub enum ExprKind<'t> {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// A reference to a declaration.
    Reference(&'t Decl<'t>),
    Unary(UnaryOp, &'t Expr<'t>),
    Binary(BinaryOp, &'t Expr<'t>, &'t Expr<'t>),
    Assign(&'t Expr<'t>, &'t Expr<'t>),
    Call(CallExpr<'t>),
    /// A standard conversion of the source expression to this node's type.
    Conv(ConvKind, &'t Expr<'t>),
    Init(InitKind<'t>),
    Check(CheckExpr<'t>),
    Requires(RequiresExpr<'t>),
    /// A fresh value of a declared type.
    Synthetic(&'t Decl<'t>),
}

impl<'t> Expr<'t> {
    pub fn kind_tag(&self) -> ExprKindTag {
        ExprKindTag::from(&self.kind)
    }

    /// The referenced declaration, for reference expressions.
    pub fn declaration(&self) -> Option<&'t Decl<'t>> {
        match self.kind {
            ExprKind::Reference(d) | ExprKind::Synthetic(d) => Some(d),
            _ => None,
        }
    }

    pub fn has_boolean_type(&self) -> bool {
        self.ty.is_boolean()
    }
}
