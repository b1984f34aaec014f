use entail::ast::{Cons, Decl};
use entail::prelude::*;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Two distinct atomic predicates.
fn atoms<'t>(build: &Builder<'t>) -> (&'t Cons<'t>, &'t Cons<'t>) {
    let int = build.get_int_type();
    let p1 = build.get_predicate_constraint(build.make_lt(build.get_zero(int), build.get_int(1)));
    let p2 = build.get_predicate_constraint(build.make_gt(build.get_int(2), build.get_zero(int)));
    (p1, p2)
}

/// A leaf concept over one type parameter, defined by `def`.
fn concept<'t>(build: &Builder<'t>, name: &str, def: &'t Expr<'t>) -> (&'t Decl<'t>, &'t Decl<'t>) {
    let parm = build.make_type_parameter(build.get_id("T"));
    let decl = build.make_defined_concept(build.get_id(name), vec![parm], def);
    (decl, parm)
}

#[test]
fn subsumption_is_reflexive() {
    init_logs();
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let (p1, p2) = atoms(&build);

    assert!(subsumes(&cxt, p1, p1).unwrap());

    let both = build.get_conjunction_constraint(p1, p2);
    assert!(subsumes(&cxt, both, both).unwrap());

    let either = build.get_disjunction_constraint(p1, p2);
    assert!(subsumes(&cxt, either, either).unwrap());
}

#[test]
fn reflexivity_survives_a_minimal_budget() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let (p1, p2) = atoms(&build);
    let both = build.get_conjunction_constraint(p1, p2);

    let limits = ProofLimits { iteration_budget: 1 };
    assert!(subsumes_with(&cxt, both, both, &limits).unwrap());
}

#[test]
fn conjunctions_weaken() {
    init_logs();
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let (p1, p2) = atoms(&build);
    let both = build.get_conjunction_constraint(p1, p2);

    assert!(subsumes(&cxt, both, p1).unwrap());
    assert!(subsumes(&cxt, both, p2).unwrap());
    assert!(!subsumes(&cxt, p1, both).unwrap(), "p2 is not implied by p1");
}

#[test]
fn disjunctions_strengthen() {
    init_logs();
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let (p1, p2) = atoms(&build);
    let either = build.get_disjunction_constraint(p1, p2);

    assert!(subsumes(&cxt, p1, either).unwrap());
    assert!(subsumes(&cxt, p2, either).unwrap());
    assert!(!subsumes(&cxt, either, p1).unwrap(), "a disjunction proves neither operand");
}

#[test]
fn unrelated_atoms_do_not_subsume() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let (p1, p2) = atoms(&build);

    assert!(!subsumes(&cxt, p1, p2).unwrap());
    assert!(!subsumes(&cxt, p2, p1).unwrap());
}

#[test]
fn conjunction_order_is_irrelevant() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let (p1, p2) = atoms(&build);

    let ab = build.get_conjunction_constraint(p1, p2);
    let ba = build.get_conjunction_constraint(p2, p1);
    assert!(subsumes(&cxt, ab, ba).unwrap());
    assert!(subsumes(&cxt, ba, ab).unwrap());
}

#[test]
fn concept_expansion_discharges_through_flattening() {
    init_logs();
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let int = build.get_int_type();

    // P<T> and Q<T> are leaf concepts; D<T> is their conjunction.
    let (p, _) = concept(&build, "P", build.get_true());
    let (q, _) = concept(&build, "Q", build.make_not(build.get_false()));

    let d_parm = build.make_type_parameter(build.get_id("T"));
    let t = build.get_typename_type(d_parm);
    let d_def = build.make_and(
        build.make_check(p, vec![Term::Type(t)]),
        build.make_check(q, vec![Term::Type(t)]),
    );
    let d = build.make_defined_concept(build.get_id("D"), vec![d_parm], d_def);

    let a = build.get_concept_constraint(d, vec![Term::Type(int)]);
    let c = build.get_concept_constraint(p, vec![Term::Type(int)]);

    // One left expansion replaces D<int> with P<int> /\ Q<int>; flattening
    // then exposes P<int> for the membership hit.
    assert!(subsumes(&cxt, a, c).unwrap());

    // The other conjunct works the same way.
    let c2 = build.get_concept_constraint(q, vec![Term::Type(int)]);
    assert!(subsumes(&cxt, a, c2).unwrap());
}

#[test]
fn concepts_are_transparent_in_both_directions() {
    init_logs();
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let int = build.get_int_type();

    let (p, _) = concept(&build, "P", build.get_true());
    let (q, _) = concept(&build, "Q", build.make_not(build.get_false()));

    let d_parm = build.make_type_parameter(build.get_id("T"));
    let t = build.get_typename_type(d_parm);
    let d_def = build.make_and(
        build.make_check(p, vec![Term::Type(t)]),
        build.make_check(q, vec![Term::Type(t)]),
    );
    let d = build.make_defined_concept(build.get_id("D"), vec![d_parm], d_def);

    let d_cons = build.get_concept_constraint(d, vec![Term::Type(int)]);

    // The normalized, substituted definition of D<int>.
    let mut sub = Substitution::new();
    sub.map_to(d_parm, Term::Type(int));
    let instantiated = substitute_expr(&cxt, d_def, &sub).unwrap();
    let expanded = normalize(&cxt, instantiated).unwrap();

    assert!(subsumes(&cxt, d_cons, expanded).unwrap());
    assert!(subsumes(&cxt, expanded, d_cons).unwrap());
}

#[test]
fn predicate_definitions_expand_to_matching_leaves() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let int = build.get_int_type();

    // D<T> := true && Q<T>. The literal conjunct survives as a predicate
    // leaf, so D<int> proves it directly.
    let (q, _) = concept(&build, "Q", build.get_true());
    let d_parm = build.make_type_parameter(build.get_id("T"));
    let t = build.get_typename_type(d_parm);
    let lit = build.get_true();
    let d_def = build.make_and(lit, build.make_check(q, vec![Term::Type(t)]));
    let d = build.make_defined_concept(build.get_id("D"), vec![d_parm], d_def);

    let a = build.get_concept_constraint(d, vec![Term::Type(int)]);
    let c = build.get_predicate_constraint(build.get_true());

    assert!(subsumes(&cxt, a, c).unwrap());
}

#[test]
fn left_disjunctions_branch_soundly() {
    init_logs();
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let (p1, p2) = atoms(&build);

    // p1 \/ p2 proves p1 only in the branch that assumed p1; the other
    // branch refutes the goal, so the disjunction must not subsume p1.
    let either = build.get_disjunction_constraint(p1, p2);
    assert!(!subsumes(&cxt, either, p1).unwrap());

    // It does prove anything both operands prove.
    let both_ways = build.get_disjunction_constraint(
        build.get_conjunction_constraint(p1, p2),
        build.get_conjunction_constraint(p2, p1),
    );
    assert!(subsumes(&cxt, both_ways, p1).unwrap());
    assert!(subsumes(&cxt, both_ways, p2).unwrap());
}

#[test]
fn parameterized_constraints_are_transparent() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let (p1, _) = atoms(&build);

    let int = build.get_int_type();
    let parm = build.make_object_parm(build.get_id("x"), int);
    let bound = build.get_parameterized_constraint(vec![parm], p1);

    assert!(subsumes(&cxt, bound, p1).unwrap());
    assert!(subsumes(&cxt, p1, bound).unwrap());
}

#[test]
fn recursive_concepts_hit_the_iteration_budget() {
    init_logs();
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let int = build.get_int_type();
    let (p1, _) = atoms(&build);

    // R<T> := R<T> expands to itself forever.
    let parm = build.make_type_parameter(build.get_id("T"));
    let r = build.make_concept(build.get_id("R"), vec![parm]);
    let t = build.get_typename_type(parm);
    let r_def = build.make_check(r, vec![Term::Type(t)]);
    r.as_concept()
        .unwrap()
        .definition
        .set(Some(build.make_concept_definition(r_def)));

    let a = build.get_concept_constraint(r, vec![Term::Type(int)]);
    let limits = ProofLimits { iteration_budget: 4 };
    assert!(!subsumes_with(&cxt, a, p1, &limits).unwrap());
}

#[test]
fn expanding_an_undefined_concept_is_an_error() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);
    let int = build.get_int_type();
    let (p1, _) = atoms(&build);

    let parm = build.make_type_parameter(build.get_id("T"));
    let u = build.make_concept(build.get_id("U"), vec![parm]);
    let a = build.get_concept_constraint(u, vec![Term::Type(int)]);

    match subsumes(&cxt, a, p1) {
        Err(Error::MissingDefinition { concept }) => assert_eq!(concept, "U"),
        other => panic!("expected a missing definition error, got {other:?}"),
    }
}
