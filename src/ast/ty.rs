//! Type forms.
use strum::{EnumDiscriminants, EnumIs};

use crate::ast::{Decl, Expr};

/// A set of type qualifiers, packed into one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Qualifiers(u8);

impl Qualifiers {
    pub const EMPTY: Qualifiers = Qualifiers(0);
    pub const CONST: Qualifiers = Qualifiers(0x1);
    pub const VOLATILE: Qualifiers = Qualifiers(0x2);

    pub fn union(self, other: Qualifiers) -> Qualifiers {
        Qualifiers(self.0 | other.0)
    }

    pub fn contains(self, other: Qualifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_const(self) -> bool {
        self.contains(Qualifiers::CONST)
    }

    pub fn is_volatile(self) -> bool {
        self.contains(Qualifiers::VOLATILE)
    }
}

/// An integer type: signedness plus bit precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntegerType {
    pub signed: bool,
    pub precision: u16,
}

/// A function type: parameter type sequence and return type.
#[derive(Debug)]
pub struct FunctionType<'t> {
    pub parms: Vec<&'t Type<'t>>,
    pub ret: &'t Type<'t>,
}

/// A qualified type. Never wraps another qualified type, and never wraps a
/// function or array type; the builder enforces both.
#[derive(Debug)]
pub struct QualifiedType<'t> {
    pub inner: &'t Type<'t>,
    pub quals: Qualifiers,
}

/// An array type with a constant extent expression.
#[derive(Debug)]
pub struct ArrayType<'t> {
    pub elem: &'t Type<'t>,
    pub extent: &'t Expr<'t>,
}

/// Type forms.
///
/// All types are canonical: the builder interns them, so two structurally
/// equivalent types are the same arena node and identity comparison is
/// meaningful. Declaration-backed types (class/union/enum/typename/synthetic)
/// are canonical per declaration.
#[derive(Debug, EnumDiscriminants, EnumIs)]
#[strum_discriminants(derive(Hash))]
#[strum_discriminants(name(TypeKind))]
pub enum Type<'t> {
    Void,
    Boolean,
    Integer(IntegerType),
    Float { precision: u16 },
    Auto,
    Decltype,
    Declauto,
    Function(FunctionType<'t>),
    Qualified(QualifiedType<'t>),
    Pointer(&'t Type<'t>),
    Reference(&'t Type<'t>),
    Array(ArrayType<'t>),
    /// An array of unknown bound.
    Sequence(&'t Type<'t>),
    Class(&'t Decl<'t>),
    Union(&'t Decl<'t>),
    Enum(&'t Decl<'t>),
    /// The type of a type parameter; wraps its declaration.
    Typename(&'t Decl<'t>),
    /// A fresh anonymous type tied to a declaration.
    Synthetic(&'t Decl<'t>),
}

impl<'t> Type<'t> {
    pub fn kind(&self) -> TypeKind {
        TypeKind::from(self)
    }

    /// The qualifier set of this type; empty unless qualified.
    pub fn qualifiers(&self) -> Qualifiers {
        match self {
            Type::Qualified(q) => q.quals,
            _ => Qualifiers::EMPTY,
        }
    }

    /// This type with any outer qualifiers stripped.
    pub fn unqualified(&'t self) -> &'t Type<'t> {
        match self {
            Type::Qualified(q) => q.inner,
            other => other,
        }
    }

    pub fn as_function_type(&self) -> Option<&FunctionType<'t>> {
        match self {
            Type::Function(f) => Some(f),
            _ => None,
        }
    }

    /// The declaration a class/union/enum/typename/synthetic type wraps.
    pub fn declaration(&self) -> Option<&'t Decl<'t>> {
        match self {
            Type::Class(d)
            | Type::Union(d)
            | Type::Enum(d)
            | Type::Typename(d)
            | Type::Synthetic(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Type::Boolean | Type::Integer(_) | Type::Float { .. } | Type::Pointer(_) | Type::Sequence(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_union_and_containment() {
        let cv = Qualifiers::CONST.union(Qualifiers::VOLATILE);
        assert!(cv.contains(Qualifiers::CONST));
        assert!(cv.contains(Qualifiers::VOLATILE));
        assert!(cv.is_const());
        assert!(cv.is_volatile());
        assert!(!Qualifiers::CONST.contains(cv));
        assert!(Qualifiers::EMPTY.is_empty());
        assert!(!cv.is_empty());
    }

    #[test]
    fn union_is_idempotent() {
        let c = Qualifiers::CONST;
        assert_eq!(c.union(c), c);
        assert_eq!(c.union(Qualifiers::EMPTY), c);
    }
}
