use entail::ast::DeclKind;
use entail::prelude::*;

fn type_parm<'t>(build: &Builder<'t>, name: &str) -> &'t entail::ast::Decl<'t> {
    build.make_type_parameter(build.get_id(name))
}

#[test]
fn typename_maps_through_the_substitution() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = type_parm(&build, "T");
    let t = build.get_typename_type(parm);
    let int = build.get_int_type();

    let mut sub = Substitution::new();
    sub.map_to(parm, Term::Type(int));

    let out = substitute_type(&cxt, t, &sub).unwrap();
    assert!(std::ptr::eq(out, int));
}

#[test]
fn unmapped_typename_is_returned_unchanged() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = type_parm(&build, "T");
    let other = type_parm(&build, "U");
    let t = build.get_typename_type(parm);

    let mut sub = Substitution::new();
    sub.map_to(other, Term::Type(build.get_int_type()));

    let out = substitute_type(&cxt, t, &sub).unwrap();
    assert!(std::ptr::eq(out, t));
}

#[test]
fn substitution_into_function_type() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = type_parm(&build, "T");
    let t = build.get_typename_type(parm);
    let int = build.get_int_type();

    // fn(ref(T), ptr(ptr(T))) -> int
    let input = build.get_function_type(
        vec![
            build.get_reference_type(t),
            build.get_pointer_type(build.get_pointer_type(t)),
        ],
        int,
    );

    let mut sub = Substitution::new();
    sub.map_to(parm, Term::Type(int));

    let out = substitute_type(&cxt, input, &sub).unwrap();
    let expected = build.get_function_type(
        vec![
            build.get_reference_type(int),
            build.get_pointer_type(build.get_pointer_type(int)),
        ],
        int,
    );
    assert!(std::ptr::eq(out, expected));
}

#[test]
fn substitution_into_variable_declarations() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = type_parm(&build, "T");
    let t = build.get_typename_type(parm);
    let int = build.get_int_type();

    let mut sub = Substitution::new();
    sub.map_to(parm, Term::Type(int));

    let v1 = build.make_variable(build.get_id("v1"), t);
    let out1 = substitute_decl(&cxt, v1, &sub).unwrap();
    assert!(std::ptr::eq(out1.name, v1.name));
    assert!(std::ptr::eq(out1.declared_type().unwrap(), int));
    assert!(!std::ptr::eq(out1, v1), "substitution yields a fresh entity");
    assert!(matches!(out1.kind, DeclKind::Variable(_)));

    let v2 = build.make_variable(build.get_id("v2"), build.get_pointer_type(t));
    let out2 = substitute_decl(&cxt, v2, &sub).unwrap();
    assert!(std::ptr::eq(
        out2.declared_type().unwrap(),
        build.get_pointer_type(int)
    ));
}

#[test]
fn closed_terms_are_fixpoints() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let int = build.get_int_type();
    let closed = build.get_function_type(vec![build.get_reference_type(int)], int);

    // Empty substitution.
    let sub = Substitution::new();
    let out = substitute_type(&cxt, closed, &sub).unwrap();
    assert!(std::ptr::eq(out, closed));

    // Substitution whose parameters do not occur in the term.
    let parm = type_parm(&build, "T");
    let mut sub = Substitution::new();
    sub.map_to(parm, Term::Type(build.get_bool_type()));
    let out = substitute_type(&cxt, closed, &sub).unwrap();
    assert!(std::ptr::eq(out, closed));
}

#[test]
fn qualified_and_sequence_types_substitute_inward() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = type_parm(&build, "T");
    let t = build.get_typename_type(parm);
    let int = build.get_int_type();

    let mut sub = Substitution::new();
    sub.map_to(parm, Term::Type(int));

    let qual = build.get_const_type(t);
    let out = substitute_type(&cxt, qual, &sub).unwrap();
    assert!(std::ptr::eq(out, build.get_const_type(int)));

    let seq = build.get_sequence_type(t);
    let out = substitute_type(&cxt, seq, &sub).unwrap();
    assert!(std::ptr::eq(out, build.get_sequence_type(int)));
}

#[test]
fn mapping_a_parameter_to_the_wrong_kind_is_reported() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = type_parm(&build, "T");
    let t = build.get_typename_type(parm);

    let mut sub = Substitution::new();
    sub.map_to(parm, Term::Expr(build.get_true()));

    match substitute_type(&cxt, t, &sub) {
        Err(Error::KindMismatch { expected, .. }) => assert_eq!(expected, "type"),
        other => panic!("expected a kind mismatch, got {other:?}"),
    }
}

#[test]
fn deduced_types_are_unsupported() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let sub = Substitution::new();
    match substitute_type(&cxt, build.get_auto_type(), &sub) {
        Err(Error::Unsupported { operation, .. }) => assert_eq!(operation, "substitute"),
        other => panic!("expected unsupported, got {other:?}"),
    }
}

#[test]
fn reference_expressions_pass_through_unchanged() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = type_parm(&build, "T");
    let var = build.make_variable(build.get_id("x"), build.get_typename_type(parm));
    let re = build.make_reference(var);

    let mut sub = Substitution::new();
    sub.map_to(parm, Term::Type(build.get_int_type()));

    let out = substitute_expr(&cxt, re, &sub).unwrap();
    assert!(std::ptr::eq(out, re));
}

#[test]
fn check_arguments_substitute() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let parm = type_parm(&build, "T");
    let t = build.get_typename_type(parm);
    let int = build.get_int_type();
    let concept = build.make_concept(build.get_id("C"), vec![parm]);
    let check = build.make_check(concept, vec![Term::Type(t)]);

    let mut sub = Substitution::new();
    sub.map_to(parm, Term::Type(int));

    let out = substitute_expr(&cxt, check, &sub).unwrap();
    match &out.kind {
        entail::ast::ExprKind::Check(c) => {
            assert!(std::ptr::eq(c.concept, concept));
            assert!(std::ptr::eq(c.args[0].as_type().unwrap(), int));
        }
        _ => panic!("expected a check expression"),
    }
}

#[test]
fn substitutions_print_their_mappings_in_order() {
    let cxt = Context::new();
    let build = Builder::new(&cxt);

    let t = type_parm(&build, "T");
    let u = type_parm(&build, "U");
    let mut sub = Substitution::new();
    sub.map_to(t, Term::Type(build.get_int_type()));
    sub.map_to(u, Term::Type(build.get_bool_type()));

    let shown = format!("{sub}");
    let t_at = shown.find("typename T").expect("T shown");
    let u_at = shown.find("typename U").expect("U shown");
    assert!(t_at < u_at, "insertion order preserved");
}
