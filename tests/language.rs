use evalenv::{EvalEnvironment, Object, interpreter::value::complex::ComplexNumber};

fn eval(src: &str) -> Object {
    EvalEnvironment::new().eval(src)
                          .unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"))
}

fn assert_true(src: &str) {
    assert_eq!(eval(src), Object::Bool(true), "{src}");
}

fn assert_failure(src: &str) {
    if let Ok(value) = EvalEnvironment::new().eval(src) {
        panic!("Expression {src:?} succeeded with {value} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("1 + 2"), Object::Int(3));
    assert_eq!(eval("7 * 9"), Object::Int(63));
    assert_eq!(eval("8 - 5"), Object::Int(3));
    assert_eq!(eval("10 / 4"), Object::Float(2.5));
    assert_eq!(eval("7 % 3"), Object::Int(1));
    assert_eq!(eval("2 ^ 3 ^ 2"), Object::Int(512));
    assert_eq!(eval("-2 ^ 2"), Object::Int(-4));
    assert_eq!(eval("(1 + 2) * 3"), Object::Int(9));
}

#[test]
fn builtin_functions_and_type_promotion() {
    assert_true("sin(0) == 0");
    assert_true("abs(-5) == 5");
    assert_true("sqrt(9) == 3");
    assert_true("round(3.7) == 4");
    assert_true("max(1, 7.5, 3) == 7.5");
    assert_true("min(4, 2, 8) == 2");
    assert_true("len([1, 2, 3]) == 3");
    assert_true("floor(-1.5) == -2");
}

#[test]
fn logical_and_comparisons() {
    assert_true("2 < 3");
    assert_true("3 > 2");
    assert_true("2 <= 2");
    assert_true("3 >= 3");
    assert_true("2 != 3");
    assert_true("2 == 2.0");
    assert_true("!false");
    assert_true("true");
    assert_true("False == false");
    assert_true("True xor False");
    assert_true("1 < 2 && 2 < 3 || False");
}

#[test]
fn strings() {
    assert_eq!(eval(r#""foo" + "bar""#), Object::from("foobar"));
    assert_true(r#""abc" == "abc""#);
    assert_true(r#""a" < "b""#);
    assert_eq!(eval(r#""say \"hi\"""#), Object::from("say \"hi\""));
    assert_eq!(eval(r#"len("héllo")"#), Object::Int(5));
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(eval("[10, 20, 30][1] + 0"), Object::Int(20));
    assert_true("[3, 2, 1][2] == 1");
    assert_true("([1, 2, 3] * 2)[2] == 6");
    assert_true("([4, 5, 6] + [1, 2, 3])[1] == 7");
    assert_true("(2 * [3, 4, 5])[2] == 10");
    assert_true("-[1, 2] == [-1, -2]");
}

#[test]
fn complex_numbers() {
    assert_eq!(eval("j * j"), Object::Complex(ComplexNumber::new(-1.0, 0.0)));
    assert_true("conj(2 + 3i) == 2 - 3i");
    assert_true("(2 + 3j) ^ 2 == -5 + 12j");
    assert_true("real(3 + 4j) == 3 and imag(3 + 4j) == 4");
    assert_true("abs(3 + 4j) == 5");
    assert_eq!(eval("sqrt(-4)"), Object::Complex(ComplexNumber::new(0.0, 2.0)));
}

#[test]
fn leading_and_trailing_brackets_select_list_mode() {
    assert_failure("[1, 2, 3][0]");
    assert_failure("[1] + [2]");
    assert_eq!(eval("([1] + [2])[0]"), Object::Int(3));
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("1 / 0");
    assert_failure("1 % 0");
}

#[test]
fn unknown_names_are_errors() {
    assert_failure("foo == 1");
    assert_failure("foo(1)");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("sin(1, 2)");
    assert_failure("max()");
}

#[test]
fn malformed_expressions_are_errors() {
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("1 2");
    assert_failure("3k");
    assert_failure("1 $ 2");
    assert_failure("99999999999999999999");
}

#[test]
fn integer_overflow_is_error() {
    assert_failure("9223372036854775807 + 1");
    assert_failure("10 ^ 40");
    assert_failure("j ^ (-9223372036854775807 - 1)");
    assert_failure("(1 + j) ^ 5000");
}

#[test]
fn type_errors() {
    assert_failure(r#""a" - "b""#);
    assert_failure("1 and true");
    assert_failure("([1, 2] + [1])");
    assert_failure("(1 + 2j) < 3");
}
