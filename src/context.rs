//! The owning context: arenas, symbol table, and interning state.
//!
//! Role
//! - Own every term for the duration of a compilation; inter-term links are
//!   plain references into the context's arenas, so nothing is freed
//!   individually and cyclic links (declaration context back-pointers) need
//!   no reference counting.
//! - Hold the interning tables for the value-like sorts. All interning state
//!   is per-context: two contexts share nothing, and dropping the context
//!   drops every term and table at once.
//!
//! Interning uses a structural 64-bit fingerprint to find a candidate
//! bucket, then structural equivalence to find the canonical node within it.
//! Buckets hold one entry in the common case and spill only on genuine hash
//! collisions, which are logged.
use std::cell::{Cell, OnceCell, RefCell};
use std::collections::HashMap;

use typed_arena::Arena;

use crate::ast::{Cons, Decl, DeclKind, Def, Expr, Name, NamespaceDecl, Stmt, Type};
use crate::symbol::{Symbol, SymbolTable};
use crate::{equiv, hash};

type InternTable<'t, T> = RefCell<HashMap<u64, Vec<&'t T>>>;

/// The arena context. Create one per compilation and thread `&'t Context<'t>`
/// through the builder and the query entry points.
pub struct Context<'t> {
    names: Arena<Name<'t>>,
    types: Arena<Type<'t>>,
    exprs: Arena<Expr<'t>>,
    stmts: Arena<Stmt<'t>>,
    decls: Arena<Decl<'t>>,
    defs: Arena<Def<'t>>,
    cons: Arena<Cons<'t>>,

    symbols: SymbolTable<'t>,

    interned_names: InternTable<'t, Name<'t>>,
    interned_types: InternTable<'t, Type<'t>>,
    interned_cons: InternTable<'t, Cons<'t>>,

    global: OnceCell<&'t Decl<'t>>,
    fresh: Cell<u32>,
}

impl<'t> Context<'t> {
    pub fn new() -> Self {
        Self {
            names: Arena::new(),
            types: Arena::new(),
            exprs: Arena::new(),
            stmts: Arena::new(),
            decls: Arena::new(),
            defs: Arena::new(),
            cons: Arena::new(),
            symbols: SymbolTable::new(),
            interned_names: RefCell::new(HashMap::new()),
            interned_types: RefCell::new(HashMap::new()),
            interned_cons: RefCell::new(HashMap::new()),
            global: OnceCell::new(),
            fresh: Cell::new(0),
        }
    }

    pub fn intern_symbol(&'t self, spelling: &str) -> Symbol<'t> {
        self.symbols.intern(spelling)
    }

    /// Next value of the per-context counter used for placeholder names.
    pub fn fresh_id(&self) -> u32 {
        let id = self.fresh.get();
        self.fresh.set(id + 1);
        id
    }

    /// The global namespace declaration, created on first use. Its context
    /// link is the only one that stays unset.
    pub fn global_namespace(&'t self) -> &'t Decl<'t> {
        *self.global.get_or_init(|| {
            let name = self.alloc_name(Name::Global);
            self.alloc_decl(Decl::new(
                name,
                DeclKind::Namespace(NamespaceDecl {
                    members: RefCell::new(Vec::new()),
                }),
            ))
        })
    }

    // Identity-like allocation: every call yields a distinct node.

    pub fn alloc_name(&'t self, name: Name<'t>) -> &'t Name<'t> {
        self.names.alloc(name)
    }

    pub fn alloc_expr(&'t self, expr: Expr<'t>) -> &'t Expr<'t> {
        self.exprs.alloc(expr)
    }

    pub fn alloc_stmt(&'t self, stmt: Stmt<'t>) -> &'t Stmt<'t> {
        self.stmts.alloc(stmt)
    }

    pub fn alloc_decl(&'t self, decl: Decl<'t>) -> &'t Decl<'t> {
        self.decls.alloc(decl)
    }

    pub fn alloc_def(&'t self, def: Def<'t>) -> &'t Def<'t> {
        self.defs.alloc(def)
    }

    // Canonicalizing allocation: structurally equivalent candidates map to
    // one arena node.

    pub fn intern_type(&'t self, candidate: Type<'t>) -> &'t Type<'t> {
        let fp = hash::fingerprint_type(&candidate);
        let mut table = self.interned_types.borrow_mut();
        let bucket = table.entry(fp).or_default();
        for &existing in bucket.iter() {
            if equiv::equivalent_types(existing, &candidate) {
                return existing;
            }
        }
        if !bucket.is_empty() {
            log::info!(
                "type fingerprint collision on 0x{fp:016x} ({} resident)",
                bucket.len()
            );
        }
        let fresh: &'t Type<'t> = self.types.alloc(candidate);
        bucket.push(fresh);
        log::trace!("interned type {fresh}");
        fresh
    }

    pub fn intern_cons(&'t self, candidate: Cons<'t>) -> &'t Cons<'t> {
        let fp = hash::fingerprint_cons(&candidate);
        let mut table = self.interned_cons.borrow_mut();
        let bucket = table.entry(fp).or_default();
        for &existing in bucket.iter() {
            if equiv::equivalent_cons(existing, &candidate) {
                return existing;
            }
        }
        if !bucket.is_empty() {
            log::info!(
                "constraint fingerprint collision on 0x{fp:016x} ({} resident)",
                bucket.len()
            );
        }
        let fresh: &'t Cons<'t> = self.cons.alloc(candidate);
        bucket.push(fresh);
        log::trace!("interned constraint {fresh}");
        fresh
    }

    /// Interning for the canonical name forms (template-ids, concept-ids).
    pub fn intern_name(&'t self, candidate: Name<'t>) -> &'t Name<'t> {
        let fp = hash::fingerprint_name(&candidate);
        let mut table = self.interned_names.borrow_mut();
        let bucket = table.entry(fp).or_default();
        for &existing in bucket.iter() {
            if equiv::equivalent_names(existing, &candidate) {
                return existing;
            }
        }
        if !bucket.is_empty() {
            log::info!(
                "name fingerprint collision on 0x{fp:016x} ({} resident)",
                bucket.len()
            );
        }
        let fresh: &'t Name<'t> = self.names.alloc(candidate);
        bucket.push(fresh);
        fresh
    }
}

impl Default for Context<'_> {
    fn default() -> Self {
        Self::new()
    }
}
