use std::{collections::BTreeMap, thread};

use evalenv::{
    ErrorKind, EvalEnvironment, EvalError, Object, interpreter::value::complex::ComplexNumber,
    splitter::split_expr,
};

fn ints(values: &[i64]) -> Object {
    values.iter().copied().map(Object::Int).collect()
}

fn assert_eval(env: &EvalEnvironment, src: &str, expected: &Object) {
    match env.eval(src) {
        Ok(obj) => assert_eq!(&obj, expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(env: &EvalEnvironment, src: &str, kind: ErrorKind) -> EvalError {
    match env.eval(src) {
        Ok(obj) => panic!("Expression {src:?} succeeded with {obj} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "{src}: {e}");
            e
        },
    }
}

#[test]
fn empty_expression_is_a_syntax_error() {
    let env = EvalEnvironment::new();
    let err = assert_failure(&env, "", ErrorKind::Syntax);
    assert_eq!(err, EvalError::EmptyExpression);
}

#[test]
fn list_literals() {
    let env = EvalEnvironment::new();
    assert_eval(&env, "[1, 2, 3]", &ints(&[1, 2, 3]));
    assert_eval(&env,
                "[1, [2, 3], 4]",
                &Object::Vector(vec![Object::Int(1), ints(&[2, 3]), Object::Int(4)]));
    assert_eval(&env,
                r#"["a, b", 2 * 3.5]"#,
                &Object::Vector(vec![Object::from("a, b"), Object::Float(7.0)]));
}

#[test]
fn map_literals() {
    let env = EvalEnvironment::new();
    let expected: Object = [(Object::Int(1), Object::Int(2)), (Object::Int(3), Object::Int(4))].into_iter()
                                                                                              .collect();
    assert_eval(&env, "{1:2, 3:4}", &expected);

    let nested = env.eval(r#"{"gains": [1, 2], "inner": {"on": True}}"#).unwrap();
    let map = nested.as_map().unwrap();
    assert_eq!(map[&Object::from("gains")], ints(&[1, 2]));
    assert_eq!(map[&Object::from("inner")].as_map().unwrap()[&Object::from("on")],
               Object::Bool(true));
}

#[test]
fn duplicate_map_keys_keep_the_first_value() {
    let env = EvalEnvironment::new();
    let obj = env.eval("{1: 10, 1: 20}").unwrap();
    assert_eq!(obj.as_map().unwrap().len(), 1);
    assert_eq!(obj.as_map().unwrap()[&Object::Int(1)], Object::Int(10));
}

#[test]
fn builtin_constants() {
    let env = EvalEnvironment::new();
    assert_eval(&env, "True and False", &Object::Bool(false));
    assert_eval(&env, "j * j", &Object::Complex(ComplexNumber::new(-1.0, 0.0)));
}

#[test]
fn registered_constants_are_visible() {
    let env = EvalEnvironment::new();
    env.register_constant_expr("x", "2 + 2").unwrap();
    assert!(env.is_constant_defined("x"));
    assert_eval(&env, "x * 2", &Object::Int(8));

    env.register_constant_expr("x", "[x, x + 1]").unwrap();
    assert_eq!(env.constant("x").unwrap(), Some(ints(&[4, 5])));
    assert_eval(&env, "x[1]", &Object::Int(5));
}

#[test]
fn registered_objects_round_trip() {
    let env = EvalEnvironment::new();
    let mut cfg = BTreeMap::new();
    cfg.insert(Object::from("taps"), ints(&[1, 2, 3]));
    cfg.insert(Object::from("rate"), Object::Float(48e3));
    cfg.insert(Object::Int(7), Object::Map(BTreeMap::new()));
    let cfg = Object::Map(cfg);

    env.register_constant_obj("cfg", &cfg).unwrap();
    assert_eq!(env.constant("cfg").unwrap(), Some(cfg));

    let sentinel_lookalike = Object::Vector(vec![Object::from(evalenv::convert::MAP_SENTINEL),
                                                 Object::Int(1),
                                                 Object::Int(2)]);
    env.register_constant_obj("v", &sentinel_lookalike).unwrap();
    assert_eq!(env.constant("v").unwrap(), Some(sentinel_lookalike));
}

#[test]
fn registered_vectors_take_part_in_arithmetic() {
    let env = EvalEnvironment::new();
    env.register_constant_obj("v", &ints(&[1, 2, 3])).unwrap();
    assert_eval(&env, "(v * 2)[2]", &Object::Int(6));
    assert_eval(&env, "len(v)", &Object::Int(3));
}

#[test]
fn failed_registration_keeps_the_previous_binding() {
    let env = EvalEnvironment::new();
    env.register_constant_expr("gain", "3").unwrap();

    let err = env.register_constant_expr("gain", "missing * 2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Evaluation);
    assert_eq!(env.constant("gain").unwrap(), Some(Object::Int(3)));

    assert!(env.register_constant_expr("fresh", "[1,]").is_err());
    assert!(!env.is_constant_defined("fresh"));
    assert_eq!(env.constant("fresh").unwrap(), None);
}

#[test]
fn entry_without_colon_is_not_key_value() {
    let env = EvalEnvironment::new();
    let err = assert_failure(&env, "{1}", ErrorKind::Syntax);
    assert_eq!(err.root_cause(), &EvalError::NotKeyValue { token: "1".into() });

    assert_failure(&env, "{1: 2: 3}", ErrorKind::Syntax);
}

#[test]
fn nested_errors_name_every_enclosing_expression() {
    let env = EvalEnvironment::new();
    let err = assert_failure(&env, "[1, {2: foo}]", ErrorKind::Evaluation);
    let message = err.to_string();
    assert!(message.starts_with("eval([1, {2: foo}]): eval({2: foo}): eval(foo): "),
            "{message}");
    assert!(message.contains("foo"));
}

#[test]
fn splitting_respects_nesting() {
    assert_eq!(split_expr("[1,2],3", ','), vec!["[1,2]", "3"]);
    assert_eq!(split_expr("a: {b: c}", ':'), vec!["a", "{b: c}"]);
}

#[test]
fn concurrent_evaluation() {
    let env = EvalEnvironment::make();
    env.register_constant_expr("base", "100").unwrap();

    let handles: Vec<_> = (0..8_i64).map(|i| {
                                         let env = env.clone();
                                         thread::spawn(move || {
                                             let key = format!("k{i}");
                                             env.register_constant_expr(&key, &format!("base + {i}"))
                                                .unwrap();
                                             for _ in 0..50 {
                                                 assert_eq!(env.eval(&format!("[{key}, {i}]")).unwrap(),
                                                            ints(&[100 + i, i]));
                                             }
                                         })
                                     })
                                     .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..8 {
        assert_eq!(env.constant(&format!("k{i}")).unwrap(), Some(Object::Int(100 + i)));
    }
}
