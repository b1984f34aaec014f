//! Debug rendering of terms.
//!
//! Every sort implements `Display` for diagnostics and tracing. Expressions
//! and constraints render through width-aware documents with
//! precedence-driven parenthesization; the remaining sorts are simple enough
//! for direct formatting. The format is human-readable only and not part of
//! any contract.
use pretty::RcDoc;

use crate::ast::{
    BinaryOp, Cons, Decl, DeclKind, Expr, ExprKind, InitKind, Name, Qualifiers, Stmt, Term, Type,
    UnaryOp,
};
use crate::subst::Substitution;

const WIDTH: usize = 80;

// ------------------------------------------------------------------- names

impl std::fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Name::Simple(sym) => write!(f, "{sym}"),
            Name::Global => write!(f, "::"),
            Name::Placeholder(id) => write!(f, "%{id}"),
            Name::Operator(sym) => write!(f, "operator{sym}"),
            Name::Conversion(ty) => write!(f, "operator {ty}"),
            Name::Literal(sym) => write!(f, "operator\"\"{sym}"),
            Name::Destructor(ty) => write!(f, "~{ty}"),
            Name::Template(id) => {
                write!(f, "{}<", id.decl.name)?;
                fmt_terms(&id.args, f)?;
                write!(f, ">")
            }
            Name::Concept(id) => {
                write!(f, "{}<", id.decl.name)?;
                fmt_terms(&id.args, f)?;
                write!(f, ">")
            }
            Name::Qualified(q) => write!(f, "{}::{}", q.scope.name, q.name),
        }
    }
}

fn fmt_terms(args: &[Term<'_>], f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

// ------------------------------------------------------------------- types

impl std::fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Boolean => write!(f, "bool"),
            Type::Integer(i) if i.signed => write!(f, "int{}", i.precision),
            Type::Integer(i) => write!(f, "uint{}", i.precision),
            Type::Float { precision } => write!(f, "float{precision}"),
            Type::Auto => write!(f, "auto"),
            Type::Decltype => write!(f, "decltype"),
            Type::Declauto => write!(f, "decltype(auto)"),
            Type::Function(ft) => {
                write!(f, "fn(")?;
                for (i, p) in ft.parms.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ") -> {}", ft.ret)
            }
            Type::Qualified(q) => {
                if q.quals.contains(Qualifiers::CONST) {
                    write!(f, "const ")?;
                }
                if q.quals.contains(Qualifiers::VOLATILE) {
                    write!(f, "volatile ")?;
                }
                write!(f, "{}", q.inner)
            }
            Type::Pointer(inner) => write!(f, "ptr({inner})"),
            Type::Reference(inner) => write!(f, "ref({inner})"),
            Type::Array(a) => write!(f, "{}[{}]", a.elem, a.extent),
            Type::Sequence(inner) => write!(f, "{inner}[]"),
            Type::Class(d) | Type::Union(d) | Type::Enum(d) | Type::Typename(d) => {
                write!(f, "{}", d.name)
            }
            Type::Synthetic(d) => write!(f, "<synthetic {}>", d.name),
        }
    }
}

// ------------------------------------------------------------- expressions

fn unary_spelling(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Pos => "+",
        UnaryOp::Neg => "-",
        UnaryOp::Not => "!",
    }
}

fn binary_spelling(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Rem => "%",
        BinaryOp::Eq => "==",
        BinaryOp::Ne => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::Gt => ">",
        BinaryOp::Le => "<=",
        BinaryOp::Ge => ">=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
    }
}

fn binary_precedence(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Or => 1,
        BinaryOp::And => 2,
        BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => 3,
        BinaryOp::Add | BinaryOp::Sub => 4,
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 5,
    }
}

fn expr_precedence(e: &Expr<'_>) -> u8 {
    match &e.kind {
        ExprKind::Assign(..) => 0,
        ExprKind::Binary(op, ..) => binary_precedence(*op),
        ExprKind::Unary(..) => 6,
        ExprKind::Requires(_) => 0,
        _ => u8::MAX,
    }
}

fn expr_doc<'a, 't>(e: &'a Expr<'t>) -> RcDoc<'a, ()> {
    match &e.kind {
        ExprKind::Boolean(true) => RcDoc::text("true"),
        ExprKind::Boolean(false) => RcDoc::text("false"),
        ExprKind::Integer(v) => RcDoc::as_string(v),
        ExprKind::Real(v) => RcDoc::as_string(v),
        ExprKind::Reference(d) => RcDoc::as_string(d.name),
        ExprKind::Synthetic(d) => RcDoc::text("synth(")
            .append(RcDoc::as_string(d.name))
            .append(RcDoc::text(")")),
        ExprKind::Unary(op, inner) => RcDoc::text(unary_spelling(*op)).append(operand_doc(
            inner,
            expr_precedence(e),
        )),
        ExprKind::Binary(op, l, r) => {
            let prec = binary_precedence(*op);
            operand_doc(l, prec)
                .append(RcDoc::space())
                .append(RcDoc::text(binary_spelling(*op)))
                .append(RcDoc::space())
                .append(operand_doc(r, prec + 1))
                .group()
        }
        ExprKind::Assign(l, r) => operand_doc(l, 1)
            .append(RcDoc::text(" = "))
            .append(operand_doc(r, 1)),
        ExprKind::Call(call) => operand_doc(call.callee, u8::MAX).append(arg_list(&call.args)),
        ExprKind::Conv(_, src) => operand_doc(src, u8::MAX)
            .append(RcDoc::text(" as "))
            .append(RcDoc::as_string(e.ty)),
        ExprKind::Init(init) => init_doc(init),
        ExprKind::Check(check) => RcDoc::as_string(check.concept.name)
            .append(RcDoc::text("<"))
            .append(RcDoc::intersperse(
                check.args.iter().map(RcDoc::as_string),
                RcDoc::text(", "),
            ))
            .append(RcDoc::text(">")),
        ExprKind::Requires(req) => RcDoc::text("requires(")
            .append(RcDoc::intersperse(
                req.parms.iter().map(|p| RcDoc::as_string(p)),
                RcDoc::text(", "),
            ))
            .append(RcDoc::text(") "))
            .append(expr_doc(req.body)),
    }
}

fn operand_doc<'a, 't>(e: &'a Expr<'t>, min: u8) -> RcDoc<'a, ()> {
    if expr_precedence(e) < min {
        RcDoc::text("(").append(expr_doc(e)).append(RcDoc::text(")"))
    } else {
        expr_doc(e)
    }
}

fn arg_list<'a, 't>(args: &'a [&'t Expr<'t>]) -> RcDoc<'a, ()> {
    RcDoc::text("(")
        .append(RcDoc::intersperse(
            args.iter().map(|a| expr_doc(a)),
            RcDoc::text(", "),
        ))
        .append(RcDoc::text(")"))
}

fn init_doc<'a, 't>(init: &'a InitKind<'t>) -> RcDoc<'a, ()> {
    match init {
        InitKind::Equal(e) => RcDoc::text("= ").append(expr_doc(e)),
        InitKind::Paren(args) | InitKind::Direct(args) => arg_list(args),
        InitKind::Brace(args) | InitKind::Aggregate(args) | InitKind::Structural(args) => {
            RcDoc::text("{")
                .append(RcDoc::intersperse(
                    args.iter().map(|a| expr_doc(a)),
                    RcDoc::text(", "),
                ))
                .append(RcDoc::text("}"))
        }
        InitKind::Trivial => RcDoc::text("<trivial>"),
        InitKind::Zero(e) => RcDoc::text("zero(").append(expr_doc(e)).append(RcDoc::text(")")),
        InitKind::Constructor { ctor, args } => {
            RcDoc::as_string(ctor.name).append(arg_list(args))
        }
        InitKind::Object(e) | InitKind::Copy(e) => {
            RcDoc::text("copy(").append(expr_doc(e)).append(RcDoc::text(")"))
        }
        InitKind::Reference(e) | InitKind::Bind(e) => {
            RcDoc::text("bind(").append(expr_doc(e)).append(RcDoc::text(")"))
        }
    }
}

impl std::fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        expr_doc(self).render_fmt(WIDTH, f)
    }
}

// -------------------------------------------------------------- statements

impl std::fmt::Display for Stmt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Compound(stmts) => {
                write!(f, "{{ ")?;
                for s in stmts {
                    write!(f, "{s} ")?;
                }
                write!(f, "}}")
            }
            Stmt::Expression(e) => write!(f, "{e};"),
            Stmt::Declaration(d) => write!(f, "{d};"),
            Stmt::Return(e) => write!(f, "return {e};"),
        }
    }
}

impl std::fmt::Display for crate::ast::Def<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::ast::Def;
        match self {
            Def::Defaulted => write!(f, "= default"),
            Def::Deleted => write!(f, "= delete"),
            Def::Function(body) => write!(f, "{body}"),
            Def::Class(ds) | Def::Union(ds) | Def::Enum(ds) => {
                write!(f, "{{ ")?;
                for d in ds {
                    write!(f, "{d}; ")?;
                }
                write!(f, "}}")
            }
            Def::Expression(e) | Def::Concept(e) => write!(f, "= {e}"),
        }
    }
}

// ------------------------------------------------------------ declarations

impl std::fmt::Display for Decl<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeclKind::Variable(o) | DeclKind::Constant(o) => {
                write!(f, "{} : {}", self.name, o.ty)
            }
            DeclKind::Function(func) => write!(f, "{} : {}", self.name, func.ty),
            DeclKind::Class(_) => write!(f, "class {}", self.name),
            DeclKind::Union(_) => write!(f, "union {}", self.name),
            DeclKind::Enum(_) => write!(f, "enum {}", self.name),
            DeclKind::Namespace(_) => write!(f, "namespace {}", self.name),
            DeclKind::Template(t) => {
                write!(f, "template<")?;
                for (i, p) in t.parms.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, "> {}", t.pattern)
            }
            DeclKind::Concept(c) => {
                write!(f, "concept {}<", self.name)?;
                for (i, p) in c.parms.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ">")
            }
            DeclKind::ObjectParm(o) | DeclKind::ValueParm(o) => {
                write!(f, "{} : {}", self.name, o.ty)
            }
            DeclKind::TypeParm(_) => write!(f, "typename {}", self.name),
            DeclKind::TemplateParm(_) => write!(f, "template {}", self.name),
            DeclKind::VariadicParm => write!(f, "...{}", self.name),
        }
    }
}

// ------------------------------------------------------------- constraints

fn cons_precedence(c: &Cons<'_>) -> u8 {
    match c {
        Cons::Disjunction(..) => 1,
        Cons::Conjunction(..) => 2,
        Cons::Parameterized(_) => 0,
        _ => u8::MAX,
    }
}

fn cons_doc<'a, 't>(c: &'a Cons<'t>) -> RcDoc<'a, ()> {
    match c {
        Cons::Predicate(e) => expr_doc(e),
        Cons::Concept(cc) => RcDoc::as_string(cc.decl.name)
            .append(RcDoc::text("<"))
            .append(RcDoc::intersperse(
                cc.args.iter().map(RcDoc::as_string),
                RcDoc::text(", "),
            ))
            .append(RcDoc::text(">")),
        Cons::Parameterized(p) => RcDoc::text("\\(")
            .append(RcDoc::intersperse(
                p.parms.iter().map(|d| RcDoc::as_string(d)),
                RcDoc::text(", "),
            ))
            .append(RcDoc::text("). "))
            .append(cons_doc(p.inner)),
        Cons::Conjunction(l, r) => cons_operand(l, 2)
            .append(RcDoc::text(" /\\ "))
            .append(cons_operand(r, 3))
            .group(),
        Cons::Disjunction(l, r) => cons_operand(l, 1)
            .append(RcDoc::text(" \\/ "))
            .append(cons_operand(r, 2))
            .group(),
    }
}

fn cons_operand<'a, 't>(c: &'a Cons<'t>, min: u8) -> RcDoc<'a, ()> {
    if cons_precedence(c) < min {
        RcDoc::text("(").append(cons_doc(c)).append(RcDoc::text(")"))
    } else {
        cons_doc(c)
    }
}

impl std::fmt::Display for Cons<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        cons_doc(self).render_fmt(WIDTH, f)
    }
}

// ------------------------------------------------------------------- terms

impl std::fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Name(n) => write!(f, "{n}"),
            Term::Type(t) => write!(f, "{t}"),
            Term::Expr(e) => write!(f, "{e}"),
            Term::Decl(d) => write!(f, "{d}"),
            Term::Cons(c) => write!(f, "{c}"),
        }
    }
}

// ----------------------------------------------------------- substitutions

impl std::fmt::Display for Substitution<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{{")?;
        for (parm, term) in self.iter() {
            writeln!(f, "  {parm} => {term}")?;
        }
        write!(f, "}}")
    }
}
