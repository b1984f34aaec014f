use std::hash::{DefaultHasher, Hash, Hasher};

use entail::ast::Type;
use entail::prelude::*;
use entail::{equiv, hash};

#[test]
fn integer_types_are_canonical() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let a = build.get_integer_type(true, 32);
    let b = build.get_integer_type(true, 32);
    assert!(std::ptr::eq(a, b), "equivalent integer types must be one node");

    let c = build.get_integer_type(false, 32);
    let d = build.get_integer_type(true, 64);
    assert!(!std::ptr::eq(a, c));
    assert!(!std::ptr::eq(a, d));
}

#[test]
fn compound_types_intern_structurally() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let f1 = build.get_function_type(vec![build.get_reference_type(int)], int);
    let f2 = build.get_function_type(vec![build.get_reference_type(int)], int);
    assert!(std::ptr::eq(f1, f2));

    let p1 = build.get_pointer_type(build.get_pointer_type(int));
    let p2 = build.get_pointer_type(build.get_pointer_type(int));
    assert!(std::ptr::eq(p1, p2));
    assert!(equiv::equivalent_types(f1, f2));
    assert!(!equiv::equivalent_types(f1, p1));
}

#[test]
fn qualifier_sets_collapse_and_union() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let cv = build.get_volatile_type(build.get_const_type(int));
    match cv {
        Type::Qualified(q) => {
            assert!(q.quals.is_const());
            assert!(q.quals.is_volatile());
            assert!(std::ptr::eq(q.inner, int), "inner must be the unqualified type");
        }
        _ => panic!("expected a qualified type"),
    }

    // Re-qualifying with an already-present qualifier changes nothing.
    let again = build.get_const_type(cv);
    assert!(std::ptr::eq(cv, again));

    // Same set built in the other order is the same node.
    let vc = build.get_const_type(build.get_volatile_type(int));
    assert!(std::ptr::eq(cv, vc));
}

#[test]
#[should_panic(expected = "function or array")]
fn qualifying_a_function_type_is_rejected() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let f = build.get_function_type(vec![int], int);
    build.get_const_type(f);
}

#[test]
fn declarations_are_never_interned() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let v1 = build.make_variable(build.get_id("v"), int);
    let v2 = build.make_variable(build.get_id("v"), int);
    assert!(!std::ptr::eq(v1, v2), "same spelling, distinct entities");
    assert!(!equiv::equivalent_decls(v1, v2));
    assert!(equiv::equivalent_decls(v1, v1));
}

#[test]
fn constraints_intern_by_structure() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    // Two boolean literals are distinct expressions but structurally
    // equivalent, so their predicate constraints share one node.
    let t1 = build.get_true();
    let t2 = build.get_true();
    assert!(!std::ptr::eq(t1, t2));
    let p1 = build.get_predicate_constraint(t1);
    let p2 = build.get_predicate_constraint(t2);
    assert!(std::ptr::eq(p1, p2));

    let q = build.get_predicate_constraint(build.get_false());
    let c1 = build.get_conjunction_constraint(p1, q);
    let c2 = build.get_conjunction_constraint(p2, q);
    assert!(std::ptr::eq(c1, c2));

    let d = build.get_disjunction_constraint(p1, q);
    assert!(!std::ptr::eq(c1, d));
}

#[test]
fn template_ids_are_canonical() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let tparm = build.make_type_parameter(build.get_id("T"));
    let var = build.make_variable(build.get_id("x"), build.get_typename_type(tparm));
    let templ = build.make_template(vec![tparm], var);

    let int = build.get_int_type();
    let id1 = build.get_template_id(templ, vec![Term::Type(int)]);
    let id2 = build.get_template_id(templ, vec![Term::Type(int)]);
    assert!(std::ptr::eq(id1, id2));

    let id3 = build.get_template_id(templ, vec![Term::Type(build.get_bool_type())]);
    assert!(!std::ptr::eq(id1, id3));
}

#[test]
fn template_pattern_points_back_at_template() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let tparm = build.make_type_parameter(build.get_id("T"));
    let pattern = build.make_variable(build.get_id("x"), build.get_typename_type(tparm));
    let templ = build.make_template(vec![tparm], pattern);

    assert!(std::ptr::eq(pattern.context().expect("pattern context"), templ));
}

#[test]
fn hashing_respects_equivalence() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let e1 = build.make_lt(build.get_zero(int), build.get_int(1));
    let e2 = build.make_lt(build.get_zero(int), build.get_int(1));
    assert!(equiv::equivalent_exprs(e1, e2));

    let mut h1 = DefaultHasher::new();
    let mut h2 = DefaultHasher::new();
    hash::hash_expr(e1, &mut h1);
    hash::hash_expr(e2, &mut h2);
    assert_eq!(h1.finish(), h2.finish());

    let n1 = build.get_id("a");
    let n2 = build.get_id("a");
    assert!(equiv::equivalent_names(n1, n2));
    assert_eq!(hash::fingerprint_name(n1), hash::fingerprint_name(n2));
}

#[test]
fn expressions_carry_their_types() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let var = build.make_variable(build.get_id("x"), int);
    let re = build.make_reference(var);
    assert!(std::ptr::eq(re.ty, build.get_reference_type(int)));

    let cmp = build.make_le(build.get_zero(int), build.get_int(3));
    assert!(cmp.has_boolean_type());
}

#[test]
fn global_namespace_is_one_per_context() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let g1 = build.get_global_namespace();
    let g2 = build.get_global_namespace();
    assert!(std::ptr::eq(g1, g2));
    assert!(g1.is_global_namespace());
    assert!(g1.context().is_none());
}

#[test]
fn symbols_intern_per_spelling() {
    let cxt = Context::new();

    let a1 = cxt.intern_symbol("size");
    let a2 = cxt.intern_symbol("size");
    let b = cxt.intern_symbol("count");
    assert_eq!(a1, a2);
    assert_ne!(a1, b);
    assert_eq!(a1.as_str(), "size");
}
