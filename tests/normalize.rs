use entail::ast::Cons;
use entail::prelude::*;

#[test]
fn conjunction_splits_and_literals_stay_inside_predicates() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    // and(true, not(false))
    let t = build.get_true();
    let nf = build.make_not(build.get_false());
    let e = build.make_and(t, nf);

    let cons = normalize(&cxt, e).unwrap();
    match cons {
        Cons::Conjunction(l, r) => {
            match l {
                Cons::Predicate(p) => assert!(std::ptr::eq(*p, t)),
                _ => panic!("left operand should be a predicate leaf"),
            }
            // The inner `not` stays inside the predicate: its operand is a
            // literal, not a concept check.
            match r {
                Cons::Predicate(p) => assert!(std::ptr::eq(*p, nf)),
                _ => panic!("right operand should be a predicate leaf"),
            }
        }
        _ => panic!("expected a conjunction"),
    }
}

#[test]
fn connective_free_predicates_become_single_leaves() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let e = build.make_lt(build.get_zero(int), build.get_int(4));
    let cons = normalize(&cxt, e).unwrap();
    match cons {
        Cons::Predicate(p) => assert!(std::ptr::eq(*p, e)),
        _ => panic!("expected a single predicate leaf"),
    }
}

#[test]
fn disjunction_splits() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let e = build.make_or(build.get_true(), build.get_false());
    let cons = normalize(&cxt, e).unwrap();
    assert!(matches!(cons, Cons::Disjunction(..)));
}

#[test]
fn checks_stay_unexpanded() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = build.make_type_parameter(build.get_id("T"));
    let concept = build.make_defined_concept(build.get_id("C"), vec![parm], build.get_true());
    let check = build.make_check(concept, vec![Term::Type(build.get_int_type())]);

    let cons = normalize(&cxt, check).unwrap();
    match cons {
        Cons::Concept(cc) => assert!(std::ptr::eq(cc.decl, concept)),
        _ => panic!("expected an unexpanded concept constraint"),
    }
}

#[test]
fn requires_binds_parameters_over_the_body() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let parm = build.make_object_parm(build.get_id("x"), int);
    let body = build.make_and(build.get_true(), build.get_true());
    let req = build.make_requires(vec![parm], body);

    let cons = normalize(&cxt, req).unwrap();
    match cons {
        Cons::Parameterized(p) => {
            assert_eq!(p.parms.len(), 1);
            assert!(std::ptr::eq(p.parms[0], parm));
            assert!(matches!(p.inner, Cons::Conjunction(..)));
        }
        _ => panic!("expected a parameterized constraint"),
    }
}

#[test]
fn normalization_is_canonical() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let e = build.make_and(build.get_true(), build.get_false());
    let c1 = normalize(&cxt, e).unwrap();
    let c2 = normalize(&cxt, e).unwrap();
    assert!(std::ptr::eq(c1, c2));

    // A structurally identical expression built separately normalizes to
    // the same canonical constraint.
    let e2 = build.make_and(build.get_true(), build.get_false());
    let c3 = normalize(&cxt, e2).unwrap();
    assert!(std::ptr::eq(c1, c3));
}
