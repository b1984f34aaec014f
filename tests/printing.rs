//! Smoke tests for the debug renderer. The format is not a contract; these
//! pin just enough to keep diagnostics readable.
use entail::prelude::*;

#[test]
fn types_render_functionally() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let f = build.get_function_type(
        vec![
            build.get_reference_type(int),
            build.get_pointer_type(build.get_pointer_type(int)),
        ],
        int,
    );
    assert_eq!(format!("{f}"), "fn(ref(int32), ptr(ptr(int32))) -> int32");

    let cv = build.get_volatile_type(build.get_const_type(build.get_bool_type()));
    assert_eq!(format!("{cv}"), "const volatile bool");

    assert_eq!(format!("{}", build.get_uint_type()), "uint32");
    assert_eq!(format!("{}", build.get_sequence_type(int)), "int32[]");
}

#[test]
fn expressions_parenthesize_by_precedence() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let t = build.get_true();
    let f = build.get_false();
    let and_then_or = build.make_or(build.make_and(t, f), t);
    assert_eq!(format!("{and_then_or}"), "true && false || true");

    let or_under_and = build.make_and(build.make_or(t, f), t);
    assert_eq!(format!("{or_under_and}"), "(true || false) && true");

    let not_over_and = build.make_not(build.make_and(t, f));
    assert_eq!(format!("{not_over_and}"), "!(true && false)");
}

#[test]
fn constraints_render_with_logical_spellings() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let p = build.get_predicate_constraint(build.make_lt(build.get_zero(int), build.get_int(1)));
    let q = build.get_predicate_constraint(build.make_gt(build.get_int(2), build.get_zero(int)));

    let conj = build.get_conjunction_constraint(p, q);
    assert_eq!(format!("{conj}"), "0 < 1 /\\ 2 > 0");

    let nested = build.get_disjunction_constraint(conj, p);
    assert_eq!(format!("{nested}"), "0 < 1 /\\ 2 > 0 \\/ 0 < 1");
}

#[test]
fn declarations_render_with_their_types() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let v = build.make_variable(build.get_id("count"), int);
    assert_eq!(format!("{v}"), "count : int32");

    let parm = build.make_type_parameter(build.get_id("T"));
    assert_eq!(format!("{parm}"), "typename T");

    let concept = build.make_concept(build.get_id("Ordered"), vec![parm]);
    assert_eq!(format!("{concept}"), "concept Ordered<typename T>");
}

#[test]
fn concept_constraints_render_their_arguments() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = build.make_type_parameter(build.get_id("T"));
    let concept = build.make_concept(build.get_id("Sortable"), vec![parm]);
    let c = build.get_concept_constraint(concept, vec![Term::Type(build.get_int_type())]);
    assert_eq!(format!("{c}"), "Sortable<int32>");
}
