//! The builder: the sole construction surface for terms.
//!
//! Factory methods come in two families, and the split is part of the
//! contract:
//!
//! - `get_*` returns a canonical term. Types, constraints, and the canonical
//!   name forms (template-ids, concept-ids) are interned in the context, so
//!   structurally equivalent requests return the identical arena node.
//! - `make_*` allocates a fresh entity. Declarations, expressions,
//!   statements, and definitions are identity-like; every call produces a
//!   distinct node.
//!
//! The builder also wires the structural invariants: expressions always
//! receive a type, qualified types collapse their qualifier sets and reject
//! function/array inners, a function declaration's type is derived from its
//! parameter declarations, and a template's pattern is back-linked to the
//! template.
use std::cell::{Cell, RefCell};

use crate::ast::decl::{
    ConceptDecl, FunctionDecl, NamespaceDecl, ObjectDecl, TemplateDecl, TemplateParmDecl,
    TypeDeclBody, TypeParmDecl,
};
use crate::ast::expr::{CallExpr, CheckExpr, RequiresExpr};
use crate::ast::name::{ConceptId, QualifiedId, TemplateId};
use crate::ast::ty::{ArrayType, QualifiedType};
use crate::ast::{
    BinaryOp, ConceptCons, Cons, ConvKind, Decl, DeclKind, Def, Expr, ExprKind, FunctionType,
    InitKind, IntegerType, Name, ParameterizedCons, Qualifiers, Stmt, Term, Type, UnaryOp,
};
use crate::context::Context;

/// Construction handle over a [`Context`]. Cheap to create wherever terms
/// need to be built.
#[derive(Clone, Copy)]
pub struct Builder<'t> {
    cxt: &'t Context<'t>,
}

impl<'t> Builder<'t> {
    pub fn new(cxt: &'t Context<'t>) -> Self {
        Self { cxt }
    }

    pub fn context(&self) -> &'t Context<'t> {
        self.cxt
    }

    // ---------------------------------------------------------------- names

    /// A simple identifier with the given spelling.
    pub fn get_id(&self, spelling: &str) -> &'t Name<'t> {
        let sym = self.cxt.intern_symbol(spelling);
        self.cxt.alloc_name(Name::Simple(sym))
    }

    /// A fresh anonymous name.
    pub fn get_placeholder_id(&self) -> &'t Name<'t> {
        self.cxt.alloc_name(Name::Placeholder(self.cxt.fresh_id()))
    }

    pub fn get_operator_id(&self, spelling: &str) -> &'t Name<'t> {
        let sym = self.cxt.intern_symbol(spelling);
        self.cxt.alloc_name(Name::Operator(sym))
    }

    pub fn get_literal_id(&self, spelling: &str) -> &'t Name<'t> {
        let sym = self.cxt.intern_symbol(spelling);
        self.cxt.alloc_name(Name::Literal(sym))
    }

    pub fn get_conversion_id(&self, target: &'t Type<'t>) -> &'t Name<'t> {
        self.cxt.alloc_name(Name::Conversion(target))
    }

    pub fn get_destructor_id(&self, target: &'t Type<'t>) -> &'t Name<'t> {
        self.cxt.alloc_name(Name::Destructor(target))
    }

    /// The canonical template-id for a template applied to arguments.
    pub fn get_template_id(&self, decl: &'t Decl<'t>, args: Vec<Term<'t>>) -> &'t Name<'t> {
        assert!(
            decl.kind.is_template(),
            "template-id must name a template declaration"
        );
        self.cxt.intern_name(Name::Template(TemplateId { decl, args }))
    }

    /// The canonical concept-id for a concept applied to arguments.
    pub fn get_concept_id(&self, decl: &'t Decl<'t>, args: Vec<Term<'t>>) -> &'t Name<'t> {
        assert!(
            decl.kind.is_concept(),
            "concept-id must name a concept declaration"
        );
        self.cxt.intern_name(Name::Concept(ConceptId { decl, args }))
    }

    pub fn get_qualified_id(&self, scope: &'t Decl<'t>, name: &'t Name<'t>) -> &'t Name<'t> {
        self.cxt
            .alloc_name(Name::Qualified(QualifiedId { scope, name }))
    }

    pub fn get_global_id(&self) -> &'t Name<'t> {
        self.cxt.alloc_name(Name::Global)
    }

    // ---------------------------------------------------------------- types

    pub fn get_void_type(&self) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Void)
    }

    pub fn get_bool_type(&self) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Boolean)
    }

    pub fn get_integer_type(&self, signed: bool, precision: u16) -> &'t Type<'t> {
        self.cxt
            .intern_type(Type::Integer(IntegerType { signed, precision }))
    }

    /// The default signed integer type.
    pub fn get_int_type(&self) -> &'t Type<'t> {
        self.get_integer_type(true, 32)
    }

    /// The default unsigned integer type.
    pub fn get_uint_type(&self) -> &'t Type<'t> {
        self.get_integer_type(false, 32)
    }

    pub fn get_float_type(&self, precision: u16) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Float { precision })
    }

    pub fn get_auto_type(&self) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Auto)
    }

    pub fn get_decltype_type(&self) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Decltype)
    }

    pub fn get_declauto_type(&self) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Declauto)
    }

    pub fn get_function_type(&self, parms: Vec<&'t Type<'t>>, ret: &'t Type<'t>) -> &'t Type<'t> {
        self.cxt
            .intern_type(Type::Function(FunctionType { parms, ret }))
    }

    /// The function type whose parameter types are the declared types of the
    /// given parameter declarations.
    pub fn get_function_type_from_parms(
        &self,
        parms: &[&'t Decl<'t>],
        ret: &'t Type<'t>,
    ) -> &'t Type<'t> {
        let tys = parms
            .iter()
            .map(|p| {
                p.as_object()
                    .expect("function parameter must be object-like")
                    .ty
            })
            .collect();
        self.get_function_type(tys, ret)
    }

    /// The canonical qualified form of `t`. Qualifier sets collapse: if `t`
    /// is already qualified, the result carries the union and wraps `t`'s
    /// unqualified inner type. Function and array types cannot be qualified.
    pub fn get_qualified_type(&self, t: &'t Type<'t>, quals: Qualifiers) -> &'t Type<'t> {
        assert!(!quals.is_empty(), "qualified type with empty qualifier set");
        let (inner, quals) = match t {
            Type::Qualified(q) => (q.inner, q.quals.union(quals)),
            other => (other, quals),
        };
        assert!(
            !matches!(inner, Type::Function(_) | Type::Array(_)),
            "qualifiers cannot apply to function or array types"
        );
        self.cxt
            .intern_type(Type::Qualified(QualifiedType { inner, quals }))
    }

    pub fn get_const_type(&self, t: &'t Type<'t>) -> &'t Type<'t> {
        self.get_qualified_type(t, Qualifiers::CONST)
    }

    pub fn get_volatile_type(&self, t: &'t Type<'t>) -> &'t Type<'t> {
        self.get_qualified_type(t, Qualifiers::VOLATILE)
    }

    pub fn get_pointer_type(&self, t: &'t Type<'t>) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Pointer(t))
    }

    pub fn get_reference_type(&self, t: &'t Type<'t>) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Reference(t))
    }

    pub fn get_array_type(&self, elem: &'t Type<'t>, extent: &'t Expr<'t>) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Array(ArrayType { elem, extent }))
    }

    pub fn get_sequence_type(&self, elem: &'t Type<'t>) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Sequence(elem))
    }

    pub fn get_class_type(&self, decl: &'t Decl<'t>) -> &'t Type<'t> {
        assert!(decl.kind.is_class(), "class type over a non-class declaration");
        self.cxt.intern_type(Type::Class(decl))
    }

    pub fn get_union_type(&self, decl: &'t Decl<'t>) -> &'t Type<'t> {
        assert!(decl.kind.is_union(), "union type over a non-union declaration");
        self.cxt.intern_type(Type::Union(decl))
    }

    pub fn get_enum_type(&self, decl: &'t Decl<'t>) -> &'t Type<'t> {
        assert!(decl.kind.is_enum(), "enum type over a non-enum declaration");
        self.cxt.intern_type(Type::Enum(decl))
    }

    pub fn get_typename_type(&self, decl: &'t Decl<'t>) -> &'t Type<'t> {
        assert!(
            decl.kind.is_type_parm(),
            "typename type over a non-type-parameter declaration"
        );
        self.cxt.intern_type(Type::Typename(decl))
    }

    /// A fresh anonymous type tied to `decl`. Canonical per declaration.
    pub fn synthesize_type(&self, decl: &'t Decl<'t>) -> &'t Type<'t> {
        self.cxt.intern_type(Type::Synthetic(decl))
    }

    // ---------------------------------------------------------- expressions

    pub fn get_bool(&self, value: bool) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty: self.get_bool_type(),
            kind: ExprKind::Boolean(value),
        })
    }

    pub fn get_true(&self) -> &'t Expr<'t> {
        self.get_bool(true)
    }

    pub fn get_false(&self) -> &'t Expr<'t> {
        self.get_bool(false)
    }

    pub fn get_integer(&self, ty: &'t Type<'t>, value: i64) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty,
            kind: ExprKind::Integer(value),
        })
    }

    pub fn get_int(&self, value: i64) -> &'t Expr<'t> {
        self.get_integer(self.get_int_type(), value)
    }

    pub fn get_uint(&self, value: i64) -> &'t Expr<'t> {
        self.get_integer(self.get_uint_type(), value)
    }

    /// The zero constant of a scalar type.
    pub fn get_zero(&self, ty: &'t Type<'t>) -> &'t Expr<'t> {
        assert!(ty.is_scalar(), "zero constant of a non-scalar type");
        self.get_integer(ty, 0)
    }

    pub fn get_real(&self, value: f64) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty: self.get_float_type(64),
            kind: ExprKind::Real(value),
        })
    }

    /// An expression referring to a declaration; its type is a reference to
    /// the declared type.
    pub fn make_reference(&self, decl: &'t Decl<'t>) -> &'t Expr<'t> {
        let declared = decl
            .declared_type()
            .expect("reference to a declaration without a declared type");
        self.cxt.alloc_expr(Expr {
            ty: self.get_reference_type(declared),
            kind: ExprKind::Reference(decl),
        })
    }

    /// A concept check `C<args...>`; bool-typed.
    pub fn make_check(&self, concept: &'t Decl<'t>, args: Vec<Term<'t>>) -> &'t Expr<'t> {
        assert!(concept.kind.is_concept(), "check of a non-concept declaration");
        self.cxt.alloc_expr(Expr {
            ty: self.get_bool_type(),
            kind: ExprKind::Check(CheckExpr { concept, args }),
        })
    }

    fn make_logical(&self, op: BinaryOp, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        assert!(
            l.has_boolean_type() && r.has_boolean_type(),
            "logical connective over non-boolean operands"
        );
        self.cxt.alloc_expr(Expr {
            ty: self.get_bool_type(),
            kind: ExprKind::Binary(op, l, r),
        })
    }

    pub fn make_and(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_logical(BinaryOp::And, l, r)
    }

    pub fn make_or(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_logical(BinaryOp::Or, l, r)
    }

    pub fn make_not(&self, e: &'t Expr<'t>) -> &'t Expr<'t> {
        assert!(e.has_boolean_type(), "logical negation of a non-boolean operand");
        self.cxt.alloc_expr(Expr {
            ty: self.get_bool_type(),
            kind: ExprKind::Unary(UnaryOp::Not, e),
        })
    }

    pub fn make_pos(&self, e: &'t Expr<'t>) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty: e.ty,
            kind: ExprKind::Unary(UnaryOp::Pos, e),
        })
    }

    pub fn make_neg(&self, e: &'t Expr<'t>) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty: e.ty,
            kind: ExprKind::Unary(UnaryOp::Neg, e),
        })
    }

    fn make_compare(&self, op: BinaryOp, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty: self.get_bool_type(),
            kind: ExprKind::Binary(op, l, r),
        })
    }

    pub fn make_eq(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_compare(BinaryOp::Eq, l, r)
    }

    pub fn make_ne(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_compare(BinaryOp::Ne, l, r)
    }

    pub fn make_lt(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_compare(BinaryOp::Lt, l, r)
    }

    pub fn make_gt(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_compare(BinaryOp::Gt, l, r)
    }

    pub fn make_le(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_compare(BinaryOp::Le, l, r)
    }

    pub fn make_ge(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_compare(BinaryOp::Ge, l, r)
    }

    fn make_arith(&self, op: BinaryOp, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty: l.ty,
            kind: ExprKind::Binary(op, l, r),
        })
    }

    pub fn make_add(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_arith(BinaryOp::Add, l, r)
    }

    pub fn make_sub(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_arith(BinaryOp::Sub, l, r)
    }

    pub fn make_mul(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_arith(BinaryOp::Mul, l, r)
    }

    pub fn make_div(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_arith(BinaryOp::Div, l, r)
    }

    pub fn make_rem(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_arith(BinaryOp::Rem, l, r)
    }

    pub fn make_call(
        &self,
        ty: &'t Type<'t>,
        callee: &'t Expr<'t>,
        args: Vec<&'t Expr<'t>>,
    ) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty,
            kind: ExprKind::Call(CallExpr { callee, args }),
        })
    }

    pub fn make_assign(&self, l: &'t Expr<'t>, r: &'t Expr<'t>) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty: l.ty,
            kind: ExprKind::Assign(l, r),
        })
    }

    /// A standard conversion of `source` to `ty`.
    pub fn make_conversion(
        &self,
        kind: ConvKind,
        ty: &'t Type<'t>,
        source: &'t Expr<'t>,
    ) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty,
            kind: ExprKind::Conv(kind, source),
        })
    }

    pub fn make_init(&self, ty: &'t Type<'t>, init: InitKind<'t>) -> &'t Expr<'t> {
        self.cxt.alloc_expr(Expr {
            ty,
            kind: ExprKind::Init(init),
        })
    }

    pub fn make_trivial_init(&self, ty: &'t Type<'t>) -> &'t Expr<'t> {
        self.make_init(ty, InitKind::Trivial)
    }

    pub fn make_copy_init(&self, ty: &'t Type<'t>, e: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_init(ty, InitKind::Copy(e))
    }

    pub fn make_bind_init(&self, ty: &'t Type<'t>, e: &'t Expr<'t>) -> &'t Expr<'t> {
        self.make_init(ty, InitKind::Bind(e))
    }

    pub fn make_direct_init(&self, ty: &'t Type<'t>, args: Vec<&'t Expr<'t>>) -> &'t Expr<'t> {
        self.make_init(ty, InitKind::Direct(args))
    }

    pub fn make_aggregate_init(&self, ty: &'t Type<'t>, args: Vec<&'t Expr<'t>>) -> &'t Expr<'t> {
        self.make_init(ty, InitKind::Aggregate(args))
    }

    /// A requires expression binding `parms` over a boolean body.
    pub fn make_requires(&self, parms: Vec<&'t Decl<'t>>, body: &'t Expr<'t>) -> &'t Expr<'t> {
        assert!(body.has_boolean_type(), "requires body must be boolean");
        assert!(parms.iter().all(|p| p.is_parameter()), "requires binds parameters only");
        self.cxt.alloc_expr(Expr {
            ty: self.get_bool_type(),
            kind: ExprKind::Requires(RequiresExpr { parms, body }),
        })
    }

    /// A fresh value of the declared type of `decl`.
    pub fn synthesize_expression(&self, decl: &'t Decl<'t>) -> &'t Expr<'t> {
        let ty = decl
            .declared_type()
            .expect("synthesized value of a declaration without a declared type");
        self.cxt.alloc_expr(Expr {
            ty,
            kind: ExprKind::Synthetic(decl),
        })
    }

    // ----------------------------------------------------------- statements

    pub fn make_compound_statement(&self, stmts: Vec<&'t Stmt<'t>>) -> &'t Stmt<'t> {
        self.cxt.alloc_stmt(Stmt::Compound(stmts))
    }

    pub fn make_expression_statement(&self, e: &'t Expr<'t>) -> &'t Stmt<'t> {
        self.cxt.alloc_stmt(Stmt::Expression(e))
    }

    pub fn make_declaration_statement(&self, d: &'t Decl<'t>) -> &'t Stmt<'t> {
        self.cxt.alloc_stmt(Stmt::Declaration(d))
    }

    pub fn make_return_statement(&self, e: &'t Expr<'t>) -> &'t Stmt<'t> {
        self.cxt.alloc_stmt(Stmt::Return(e))
    }

    // ---------------------------------------------------------- definitions

    pub fn make_defaulted_definition(&self) -> &'t Def<'t> {
        self.cxt.alloc_def(Def::Defaulted)
    }

    pub fn make_deleted_definition(&self) -> &'t Def<'t> {
        self.cxt.alloc_def(Def::Deleted)
    }

    pub fn make_function_definition(&self, body: &'t Stmt<'t>) -> &'t Def<'t> {
        self.cxt.alloc_def(Def::Function(body))
    }

    pub fn make_class_definition(&self, members: Vec<&'t Decl<'t>>) -> &'t Def<'t> {
        self.cxt.alloc_def(Def::Class(members))
    }

    pub fn make_union_definition(&self, members: Vec<&'t Decl<'t>>) -> &'t Def<'t> {
        self.cxt.alloc_def(Def::Union(members))
    }

    pub fn make_enum_definition(&self, members: Vec<&'t Decl<'t>>) -> &'t Def<'t> {
        self.cxt.alloc_def(Def::Enum(members))
    }

    pub fn make_expression_definition(&self, e: &'t Expr<'t>) -> &'t Def<'t> {
        self.cxt.alloc_def(Def::Expression(e))
    }

    pub fn make_concept_definition(&self, e: &'t Expr<'t>) -> &'t Def<'t> {
        assert!(e.has_boolean_type(), "concept definition must be boolean");
        self.cxt.alloc_def(Def::Concept(e))
    }

    // --------------------------------------------------------- declarations

    fn make_object(&self, ty: &'t Type<'t>) -> ObjectDecl<'t> {
        ObjectDecl {
            ty,
            init: Cell::new(None),
        }
    }

    pub fn make_variable(&self, name: &'t Name<'t>, ty: &'t Type<'t>) -> &'t Decl<'t> {
        self.cxt
            .alloc_decl(Decl::new(name, DeclKind::Variable(self.make_object(ty))))
    }

    pub fn make_constant(&self, name: &'t Name<'t>, ty: &'t Type<'t>) -> &'t Decl<'t> {
        self.cxt
            .alloc_decl(Decl::new(name, DeclKind::Constant(self.make_object(ty))))
    }

    /// An undefined function with the given parameters and return type. The
    /// declared type is the function type over the parameters' declared
    /// types.
    pub fn make_function(
        &self,
        name: &'t Name<'t>,
        parms: Vec<&'t Decl<'t>>,
        ret: &'t Type<'t>,
    ) -> &'t Decl<'t> {
        let ty = self.get_function_type_from_parms(&parms, ret);
        self.cxt.alloc_decl(Decl::new(
            name,
            DeclKind::Function(FunctionDecl {
                ty,
                parms,
                constraint: Cell::new(None),
                definition: Cell::new(None),
            }),
        ))
    }

    pub fn make_class(&self, name: &'t Name<'t>) -> &'t Decl<'t> {
        self.cxt.alloc_decl(Decl::new(
            name,
            DeclKind::Class(TypeDeclBody {
                definition: Cell::new(None),
            }),
        ))
    }

    pub fn make_union(&self, name: &'t Name<'t>) -> &'t Decl<'t> {
        self.cxt.alloc_decl(Decl::new(
            name,
            DeclKind::Union(TypeDeclBody {
                definition: Cell::new(None),
            }),
        ))
    }

    pub fn make_enum(&self, name: &'t Name<'t>) -> &'t Decl<'t> {
        self.cxt.alloc_decl(Decl::new(
            name,
            DeclKind::Enum(TypeDeclBody {
                definition: Cell::new(None),
            }),
        ))
    }

    pub fn make_namespace(&self, name: &'t Name<'t>) -> &'t Decl<'t> {
        self.cxt.alloc_decl(Decl::new(
            name,
            DeclKind::Namespace(NamespaceDecl {
                members: RefCell::new(Vec::new()),
            }),
        ))
    }

    /// The per-context global namespace.
    pub fn get_global_namespace(&self) -> &'t Decl<'t> {
        self.cxt.global_namespace()
    }

    /// A template over `pattern`. The pattern must not already belong to a
    /// context; its context is pointed back at the new template.
    pub fn make_template(&self, parms: Vec<&'t Decl<'t>>, pattern: &'t Decl<'t>) -> &'t Decl<'t> {
        assert!(
            pattern.context().is_none(),
            "template pattern already belongs to a context"
        );
        let decl = self.cxt.alloc_decl(Decl::new(
            pattern.name,
            DeclKind::Template(TemplateDecl {
                parms,
                constraint: Cell::new(None),
                pattern,
            }),
        ));
        pattern.set_context(decl);
        decl
    }

    /// An undefined concept.
    pub fn make_concept(&self, name: &'t Name<'t>, parms: Vec<&'t Decl<'t>>) -> &'t Decl<'t> {
        self.cxt.alloc_decl(Decl::new(
            name,
            DeclKind::Concept(ConceptDecl {
                parms,
                definition: Cell::new(None),
            }),
        ))
    }

    /// A concept defined by the boolean expression `def`.
    pub fn make_defined_concept(
        &self,
        name: &'t Name<'t>,
        parms: Vec<&'t Decl<'t>>,
        def: &'t Expr<'t>,
    ) -> &'t Decl<'t> {
        let decl = self.make_concept(name, parms);
        decl.as_concept()
            .expect("just built a concept")
            .definition
            .set(Some(self.make_concept_definition(def)));
        decl
    }

    pub fn make_object_parm(&self, name: &'t Name<'t>, ty: &'t Type<'t>) -> &'t Decl<'t> {
        self.cxt
            .alloc_decl(Decl::new(name, DeclKind::ObjectParm(self.make_object(ty))))
    }

    pub fn make_value_parm(&self, name: &'t Name<'t>, ty: &'t Type<'t>) -> &'t Decl<'t> {
        self.cxt
            .alloc_decl(Decl::new(name, DeclKind::ValueParm(self.make_object(ty))))
    }

    pub fn make_type_parameter(&self, name: &'t Name<'t>) -> &'t Decl<'t> {
        self.cxt.alloc_decl(Decl::new(
            name,
            DeclKind::TypeParm(TypeParmDecl {
                default: Cell::new(None),
            }),
        ))
    }

    pub fn make_template_parm(&self, name: &'t Name<'t>, signature: &'t Decl<'t>) -> &'t Decl<'t> {
        assert!(
            signature.kind.is_template(),
            "template parameter signature must be a template"
        );
        self.cxt.alloc_decl(Decl::new(
            name,
            DeclKind::TemplateParm(TemplateParmDecl {
                signature,
                default: Cell::new(None),
            }),
        ))
    }

    pub fn make_variadic_parm(&self, name: &'t Name<'t>) -> &'t Decl<'t> {
        self.cxt.alloc_decl(Decl::new(name, DeclKind::VariadicParm))
    }

    // ---------------------------------------------------------- constraints

    pub fn get_concept_constraint(&self, decl: &'t Decl<'t>, args: Vec<Term<'t>>) -> &'t Cons<'t> {
        assert!(
            decl.kind.is_concept(),
            "concept constraint over a non-concept declaration"
        );
        self.cxt.intern_cons(Cons::Concept(ConceptCons { decl, args }))
    }

    pub fn get_predicate_constraint(&self, e: &'t Expr<'t>) -> &'t Cons<'t> {
        assert!(e.has_boolean_type(), "predicate constraint must be boolean");
        self.cxt.intern_cons(Cons::Predicate(e))
    }

    pub fn get_parameterized_constraint(
        &self,
        parms: Vec<&'t Decl<'t>>,
        inner: &'t Cons<'t>,
    ) -> &'t Cons<'t> {
        self.cxt
            .intern_cons(Cons::Parameterized(ParameterizedCons { parms, inner }))
    }

    pub fn get_conjunction_constraint(&self, l: &'t Cons<'t>, r: &'t Cons<'t>) -> &'t Cons<'t> {
        self.cxt.intern_cons(Cons::Conjunction(l, r))
    }

    pub fn get_disjunction_constraint(&self, l: &'t Cons<'t>, r: &'t Cons<'t>) -> &'t Cons<'t> {
        self.cxt.intern_cons(Cons::Disjunction(l, r))
    }
}
