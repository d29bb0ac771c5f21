use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use chrono::DateTime;
use predica::{
    evaluate, parse, parse_and_evaluate, Binding, BindingKey, BinaryOperator, Duration,
    Environment, Error, EvalError, HostFn, Value,
};

fn eval_with(src: &str, env: &Environment) -> Value {
    match parse_and_evaluate(src, env) {
        Ok(v) => v,
        Err(e) => panic!("evaluation of {src:?} failed: {e}"),
    }
}

fn eval(src: &str) -> Value {
    eval_with(src, &Environment::new())
}

fn assert_parse_error(src: &str) {
    if parse(src).is_ok() {
        panic!("parse of {src:?} succeeded but was expected to fail");
    }
}

fn assert_eval_error(src: &str, env: &Environment) -> EvalError {
    match parse_and_evaluate(src, env) {
        Ok(v) => panic!("evaluation of {src:?} produced {v:?} but was expected to fail"),
        Err(Error::Eval(e)) => e,
        Err(Error::Parse(e)) => panic!("evaluation of {src:?} failed in the parser: {e}"),
    }
}

#[test]
fn boolean_connectives() {
    assert_eq!(eval("false || false"), Value::Bool(false));
    assert_eq!(eval("true || false"), Value::Bool(true));
    assert_eq!(eval("false || true"), Value::Bool(true));
    assert_eq!(eval("false || (true && false)"), Value::Bool(false));
    assert_eq!(eval("false || (true && true)"), Value::Bool(true));
    assert_eq!(eval("true and true"), Value::Bool(true));
    assert_eq!(eval("true AND false"), Value::Bool(false));
    assert_eq!(eval("false OR true"), Value::Bool(true));
    assert_eq!(eval("not false"), Value::Bool(true));
    assert_eq!(eval("!false"), Value::Bool(true));
}

#[test]
fn arithmetic_and_promotion() {
    assert_eq!(eval("1 + 2"), Value::Int(3));
    assert_eq!(eval("1+2"), Value::Int(3));
    assert_eq!(eval("1 - 2"), Value::Int(-1));
    assert_eq!(eval("1 + 2.5"), Value::Float(3.5));
    assert_eq!(eval("1+2 * 3 / 4 * 5"), Value::Float(8.5));
    assert_eq!(eval("(1+2)*3/4*5"), Value::Float(11.25));
    assert_eq!(eval("1 + (10 / 2) "), Value::Float(6.0));
    assert_eq!(eval("1 + true"), Value::Int(2));
    assert_eq!(eval("true + true"), Value::Int(2));
    assert_eq!(eval("true - false"), Value::Int(1));
    assert_eq!(eval("false - true"), Value::Int(-1));
    assert_eq!(eval("true * 41"), Value::Int(41));
    assert_eq!(eval("false * 41"), Value::Int(0));
}

#[test]
fn comments_are_whitespace() {
    assert_eq!(eval("\n    1 # a one\n    + 2 # add a two\n  "), Value::Int(3));
    assert_eq!(eval("# leading comment\n1 + 2"), Value::Int(3));
    assert_eq!(eval("1 +#comment between operator and operand\n2"), Value::Int(3));
    assert_eq!(eval("1 #\n+ 2"), Value::Int(3));
}

#[test]
fn comparison_battery() {
    assert_eq!(eval("1 < 2"), Value::Bool(true));
    assert_eq!(eval("1 > 2"), Value::Bool(false));
    assert_eq!(eval("1 <= 2"), Value::Bool(true));
    assert_eq!(eval("1 >= 2"), Value::Bool(false));
    assert_eq!(eval("2 <= 2"), Value::Bool(true));
    assert_eq!(eval("2 >= 2"), Value::Bool(true));
    assert_eq!(eval("2 == 2"), Value::Bool(true));
    assert_eq!(eval("not (2 != 2)"), Value::Bool(true));
    assert_eq!(eval("2 != 2"), Value::Bool(false));
    assert_eq!(eval("2 != 1"), Value::Bool(true));
    assert_eq!(eval("2 == 1"), Value::Bool(false));
    assert_eq!(eval("1 + (10 / 2) > 3"), Value::Bool(true));
    assert_eq!(eval("2 ~= 1"), Value::Bool(true));
    assert_eq!(eval("2 <> 1"), Value::Bool(true));
    assert_eq!(eval("2 ~= 2"), Value::Bool(false));
    assert_eq!(eval("1 == 1.0"), Value::Bool(true));
    assert_eq!(eval("true > false"), Value::Bool(true));
    assert_eq!(eval("\"abc\" < \"abd\""), Value::Bool(true));
}

/// Asserts that exactly one of `<`, `==`, `>` holds for the pair, that
/// it is the expected one, and that the derived operators agree.
fn assert_ordering(a: Value, b: Value, expected: &str) {
    let mut env = Environment::new();
    env.bind("a", a.clone()).bind("b", b.clone());

    let less = eval_with("a < b", &env) == Value::Bool(true);
    let equal = eval_with("a == b", &env) == Value::Bool(true);
    let greater = eval_with("a > b", &env) == Value::Bool(true);

    let holds = [less, equal, greater].iter().filter(|h| **h).count();
    assert_eq!(holds, 1, "trichotomy violated for {a:?} and {b:?}");

    let actual = if less {
        "<"
    } else if equal {
        "=="
    } else {
        ">"
    };
    assert_eq!(actual, expected, "wrong ordering for {a:?} and {b:?}");

    assert_eq!(eval_with("a != b", &env), Value::Bool(!equal));
    assert_eq!(eval_with("a <= b", &env), Value::Bool(less || equal));
    assert_eq!(eval_with("a >= b", &env), Value::Bool(greater || equal));
}

#[test]
fn cross_kind_ordering() {
    let t = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

    assert_ordering(Value::Int(1), Value::Int(2), "<");
    assert_ordering(Value::Int(2), Value::Float(2.0), "==");
    assert_ordering(Value::Float(2.5), Value::Int(2), ">");
    assert_ordering(Value::Bool(true), Value::Int(1), "==");
    assert_ordering(Value::Bool(false), Value::Int(1), "<");
    assert_ordering(Value::Duration(Duration::SECOND), Value::Int(2), "<");
    assert_ordering(Value::Duration(Duration::from_secs(2)), Value::Int(2), "==");
    assert_ordering(Value::Duration(Duration::HOUR), Value::Float(0.5), ">");
    assert_ordering(Value::Bool(true), Value::Duration(Duration::SECOND), "==");

    // cross-bracket: numerics < times < strings and bytes
    assert_ordering(Value::Int(1_900_000_000), Value::Time(t), "<");
    assert_ordering(Value::Time(t), Value::Str(String::new()), "<");
    assert_ordering(Value::Duration(Duration::HOUR), Value::Str("0".to_string()), "<");
    assert_ordering(Value::Bytes(vec![0xff]), Value::Int(i64::MAX), ">");

    assert_ordering(Value::Str("a".to_string()), Value::Bytes(vec![b'b']), "<");
    assert_ordering(Value::Bytes(vec![b'a']), Value::Str("a".to_string()), "==");
    assert_ordering(Value::Str("abc".to_string()), Value::Str("abd".to_string()), "<");
    assert_ordering(Value::Time(t), Value::Time(t + chrono::TimeDelta::seconds(1)), "<");
}

#[test]
fn precedence() {
    assert_eq!(eval("1 + 2 * 3"), Value::Int(7));
    assert_eq!(eval("2 * 2 ^ 3"), Value::Float(16.0));
    assert_eq!(eval("2 ^ 3 ^ 2"), Value::Float(64.0)); // left fold, not 512
    assert_eq!(eval("-2 ^ 2"), Value::Float(-4.0));
    assert_eq!(eval("not true == false"), Value::Bool(true));
    assert_eq!(eval("1 < 2 && 2 < 3"), Value::Bool(true));
    assert_eq!(eval("1 + 1 == 2 || false"), Value::Bool(true));
}

#[test]
fn word_operators_respect_boundaries() {
    let mut env = Environment::new();
    env.bind("order", 1_i64)
       .bind("android", 2_i64)
       .bind("note", 3_i64)
       .bind("andrew", 4_i64)
       .bind("orb", 5_i64);

    assert_eq!(eval_with("order", &env), Value::Int(1));
    assert_eq!(eval_with("android", &env), Value::Int(2));
    assert_eq!(eval_with("note", &env), Value::Int(3));
    assert_eq!(eval_with("andrew", &env), Value::Int(4));
    assert_eq!(eval_with("orb", &env), Value::Int(5));
    assert_eq!(eval_with("order + andrew", &env), Value::Int(5));
    assert_eq!(eval_with("note > orb or orb > note", &env), Value::Bool(true));
}

#[test]
fn no_short_circuit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut env = Environment::new();
    env.bind("crash",
             HostFn::new(move |_| {
                 counter.fetch_add(1, Ordering::SeqCst);
                 Ok(Value::Bool(true))
             }));

    assert_eq!(eval_with("false && crash()", &env), Value::Bool(false));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(eval_with("true || crash()", &env), Value::Bool(true));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn operands_evaluate_left_to_right() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut env = Environment::new();
    for (name, result) in [("l", 1_i64), ("r", 2_i64)] {
        let log = Arc::clone(&order);
        env.bind(name,
                 HostFn::new(move |_| {
                     log.lock().unwrap().push(name);
                     Ok(Value::Int(result))
                 }));
    }

    assert_eq!(eval_with("l() + r()", &env), Value::Int(3));
    assert_eq!(*order.lock().unwrap(), vec!["l", "r"]);
}

#[test]
fn string_literals_and_escapes() {
    assert_eq!(eval(r#""hello""#), Value::Str("hello".to_string()));
    assert_eq!(eval(r#""a\nb\tc""#), Value::Str("a\nb\tc".to_string()));
    assert_eq!(eval(r#""say \"hi\" \\ back""#), Value::Str("say \"hi\" \\ back".to_string()));
    assert_eq!(eval(r#""" + 2"#), Value::Str("2".to_string()));
}

#[test]
fn string_repeat() {
    assert_eq!(eval(r#""ab" * 3"#), Value::Str("ababab".to_string()));
    assert_eq!(eval(r#""ab" * 0"#), Value::Str(String::new()));
    assert_eq!(eval(r#""ab" * 2.9"#), Value::Str("abab".to_string()));
    assert_eq!(eval(r#""ab" * true"#), Value::Str("ab".to_string()));
    assert_eq!(eval(r#""ab" * false"#), Value::Str(String::new()));

    let env = Environment::new();
    assert!(matches!(assert_eval_error(r#""" * -1"#, &env), EvalError::ValueError { .. }));
    assert!(matches!(assert_eval_error(r#""ab" * -2.5"#, &env), EvalError::ValueError { .. }));

    let mut env = Environment::new();
    env.bind("inf", f64::INFINITY);
    assert!(matches!(assert_eval_error(r#""ab" * inf"#, &env), EvalError::ValueError { .. }));
}

#[test]
fn string_concatenation_renders_other_kinds() {
    assert_eq!(eval(r#""n=" + 4"#), Value::Str("n=4".to_string()));
    assert_eq!(eval(r#"4 + "!""#), Value::Str("4!".to_string()));
    assert_eq!(eval(r#""x=" + 1.5"#), Value::Str("x=1.5".to_string()));
    assert_eq!(eval(r#""b=" + true"#), Value::Str("b=true".to_string()));
    assert_eq!(eval(r#""d=" + 90s"#), Value::Str("d=1m30s".to_string()));
    assert_eq!(eval(r#""" + 2h"#), Value::Str("2h0m0s".to_string()));
    assert_eq!(eval(r#""" + 500ms"#), Value::Str("500ms".to_string()));
    assert_eq!(eval(r#""" + 100ns"#), Value::Str("100ns".to_string()));
}

#[test]
fn bytes_arithmetic() {
    let mut env = Environment::new();
    env.bind("b", vec![0x01_u8, 0x02]);

    assert_eq!(eval_with(r#""" + b"#, &env), Value::Str("0x0102".to_string()));
    assert_eq!(eval_with("b + b", &env), Value::Bytes(vec![1, 2, 1, 2]));
    assert_eq!(eval_with("b + 7", &env), Value::Str("0x01027".to_string()));
    assert_eq!(eval_with("7 + b", &env), Value::Str("70x0102".to_string()));
    assert_eq!(eval_with("b * 2", &env), Value::Bytes(vec![1, 2, 1, 2]));
    assert_eq!(eval_with("b * 2.9", &env), Value::Bytes(vec![1, 2, 1, 2]));
    assert_eq!(eval_with("b * -1", &env), Value::Bytes(Vec::new()));
    assert_eq!(eval_with("b * false", &env), Value::Bytes(Vec::new()));
    assert!(matches!(assert_eval_error("b - b", &env), EvalError::TypeMismatch { .. }));
}

#[test]
fn duration_literals_and_arithmetic() {
    assert_eq!(eval("2h"), Value::Duration(Duration::from_secs(7200)));
    assert_eq!(eval("500ms"), Value::Duration(Duration::from_nanos(500_000_000)));
    assert_eq!(eval("1.5s"), Value::Duration(Duration::from_nanos(1_500_000_000)));
    assert_eq!(eval("2s == 2 * (1s)"), Value::Bool(true));
    assert_eq!(eval("1.5s + 500ms == 2s"), Value::Bool(true));
    assert_eq!(eval("1h - 30m == 30m"), Value::Bool(true));
    assert_eq!(eval("2h / 1h"), Value::Float(2.0));
    assert_eq!(eval("1h / 2"), Value::Duration(Duration::from_secs(1800)));
    assert_eq!(eval("-5m"), Value::Duration(Duration::from_secs(-300)));
    assert_eq!(eval("500ms < 1"), Value::Bool(true));
    assert_eq!(eval("1 + 1s == 2s"), Value::Bool(true));
    assert_eq!(eval("0.5 + 500ms == 1s"), Value::Bool(true));
    assert_eq!(eval("true + 1s == 2s"), Value::Bool(true));

    // float factors truncate to whole numbers before scaling
    assert_eq!(eval("1.9 * 2s == 2s"), Value::Bool(true));
    assert_eq!(eval("2s * 2.9 == 4s"), Value::Bool(true));
}

#[test]
fn time_arithmetic() {
    let t = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let u = DateTime::from_timestamp(1_700_001_800, 0).unwrap();
    let mut env = Environment::new();
    env.bind("t", t).bind("u", u);

    assert_eq!(eval_with("(t + 1s) - t == 1s", &env), Value::Bool(true));
    assert_eq!(eval_with("t + 3600 == t + 1h", &env), Value::Bool(true));
    assert_eq!(eval_with("u - t == 30m", &env), Value::Bool(true));
    assert_eq!(eval_with("t - u == -30m", &env), Value::Bool(true));
    assert_eq!(eval_with("t < u", &env), Value::Bool(true));
    assert_eq!(eval_with("t == t", &env), Value::Bool(true));
    assert_eq!(eval_with("t - t == 0s", &env), Value::Bool(true));
    assert_eq!(eval_with("1h + t == u - 30m", &env), Value::Bool(true));
    assert!(matches!(assert_eval_error("t + u", &env), EvalError::TypeMismatch { .. }));
}

#[test]
fn division() {
    assert_eq!(eval("10 / 4"), Value::Float(2.5));
    assert_eq!(eval("10 / 2"), Value::Float(5.0));

    let env = Environment::new();
    assert!(matches!(assert_eval_error("1 / 0", &env), EvalError::ValueError { .. }));
    assert!(matches!(assert_eval_error("1.5 / 0", &env), EvalError::ValueError { .. }));
    assert!(matches!(assert_eval_error("1s / 0", &env), EvalError::ValueError { .. }));
    assert!(matches!(assert_eval_error("1s / 0s", &env), EvalError::ValueError { .. }));
}

#[test]
fn exponentiation() {
    assert_eq!(eval("2 ^ 10"), Value::Float(1024.0));
    assert_eq!(eval("0 ^ 0"), Value::Float(1.0));
    assert_eq!(eval("4 ^ 0.5"), Value::Float(2.0));
    assert_eq!(eval("true ^ 10"), Value::Float(1.0));
    assert_eq!(eval("2 ^ false"), Value::Float(1.0));

    let env = Environment::new();
    assert!(matches!(assert_eval_error("1s ^ 2", &env), EvalError::TypeMismatch { .. }));
    assert!(matches!(assert_eval_error(r#""a" ^ 2"#, &env), EvalError::TypeMismatch { .. }));
}

#[test]
fn numeric_literal_forms() {
    assert_eq!(eval("1_000 + 0"), Value::Int(1000));
    assert_eq!(eval("1_000.5"), Value::Float(1000.5));
    assert_eq!(eval(".5 + .5"), Value::Float(1.0));
    assert_parse_error("1__0");
    assert_parse_error("1_");
    assert_parse_error("1.2.3");
    assert_parse_error("1_0s");
}

#[test]
fn host_function_calls() {
    let recorded = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&recorded);
    let mut env = Environment::new();
    env.bind("print",
             HostFn::new(move |args| match args {
                 [Value::Int(n)] => {
                     *slot.lock().unwrap() = Some(*n);
                     Ok(Value::Int(*n))
                 },
                 _ => Err(EvalError::TypeMismatch { details: "one int expected".to_string() }),
             }));

    assert_eq!(eval_with("print(8) + 3", &env), Value::Int(11));
    assert_eq!(*recorded.lock().unwrap(), Some(8));
    assert_eq!(eval_with("print(2) + 3", &env), Value::Int(5));
    assert_eq!(*recorded.lock().unwrap(), Some(2));
}

#[test]
fn host_function_string_recording() {
    let recorded = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&recorded);
    let mut env = Environment::new();
    env.bind("print",
             HostFn::new(move |args| match args {
                 [Value::Str(s)] => {
                     *slot.lock().unwrap() = Some(s.clone());
                     Ok(Value::Str(format!("{s}, ")))
                 },
                 _ => Err(EvalError::TypeMismatch { details: "one string expected".to_string() }),
             }));

    assert_eq!(eval_with(r#"print("hello") + "world""#, &env),
               Value::Str("hello, world".to_string()));
    assert_eq!(*recorded.lock().unwrap(), Some("hello".to_string()));
}

#[test]
fn calls_chain_and_take_empty_lists() {
    let mut env = Environment::new();
    env.bind("seven", HostFn::new(|_| Ok(Value::Int(7))));
    env.bind("adder",
             HostFn::new(|args| match args {
                 [Value::Int(n)] => {
                     let n = *n;
                     Ok(Value::HostFn(HostFn::new(move |args| match args {
                                          [Value::Int(m)] => Ok(Value::Int(n + m)),
                                          _ => Err(EvalError::TypeMismatch { details:
                                                       "one int expected".to_string() }),
                                      })))
                 },
                 _ => Err(EvalError::TypeMismatch { details: "one int expected".to_string() }),
             }));

    assert_eq!(eval_with("seven()", &env), Value::Int(7));
    assert_eq!(eval_with("adder(2)(3)", &env), Value::Int(5));
    assert_eq!(eval_with("(adder)(2)(3) + seven()", &env), Value::Int(12));
}

#[test]
fn calling_a_non_function_fails() {
    let env = Environment::new();
    assert!(matches!(assert_eval_error("3(1)", &env), EvalError::TypeMismatch { .. }));
    assert!(matches!(assert_eval_error("(1 + 2)(3)", &env), EvalError::TypeMismatch { .. }));
}

#[test]
fn environment_overrides() {
    let mut env = Environment::new();
    env.bind_binary(BinaryOperator::Add, |_, _, _| Ok(Value::Int(42)));
    assert_eq!(eval_with("1 + 1", &env), Value::Int(42));
    assert_eq!(eval_with("1 - 1", &env), Value::Int(0));

    // overriding `<` changes the whole derived comparison family
    let mut env = Environment::new();
    env.bind_binary(BinaryOperator::Less, |_, _, _| Ok(Value::Bool(false)));
    assert_eq!(eval_with("1 < 2", &env), Value::Bool(false));
    assert_eq!(eval_with("1 == 2", &env), Value::Bool(true));
    assert_eq!(eval_with("1 != 2", &env), Value::Bool(false));
}

#[test]
fn malformed_operator_bindings_are_reported() {
    let mut env = Environment::new();
    env.insert(BindingKey::Op(BinaryOperator::Add), Binding::Value(Value::Int(0)));
    assert!(matches!(assert_eval_error("1 + 1", &env),
                     EvalError::InvalidOperatorBinding { .. }));
}

#[test]
fn unbound_variables_are_reported() {
    let env = Environment::new();
    assert!(matches!(assert_eval_error("nope", &env),
                     EvalError::UnboundVariable { name } if name == "nope"));
}

#[test]
fn logical_operators_require_booleans() {
    let env = Environment::new();
    assert!(matches!(assert_eval_error("1 && true", &env), EvalError::TypeMismatch { .. }));
    assert!(matches!(assert_eval_error("!5", &env), EvalError::TypeMismatch { .. }));
    assert!(matches!(assert_eval_error(r#""a" - 1"#, &env), EvalError::TypeMismatch { .. }));
    assert!(matches!(assert_eval_error(r#"-"a""#, &env), EvalError::TypeMismatch { .. }));
}

#[test]
fn negation() {
    assert_eq!(eval("-5 + 3"), Value::Int(-2));
    assert_eq!(eval("-1.5"), Value::Float(-1.5));
    assert_eq!(eval("-true"), Value::Bool(false));
    assert_eq!(eval("-(2h) == 0s - 2h"), Value::Bool(true));
}

#[test]
fn subexpressions_are_transparent() {
    assert_eq!(eval("((1 + 2))"), Value::Int(3));
    for src in ["1 + 2 * 3", "not (2 != 2)", "2h / 1h", r#""ab" * 2"#] {
        let wrapped = format!("({src})");
        assert_eq!(eval(src), eval(&wrapped), "wrapping {src:?} changed its value");
    }
}

#[test]
fn evaluation_is_pure() {
    let tree = parse("1 + 2 * 3 == 7 && \"ab\" * 2 == \"abab\"").unwrap();
    let copy = tree.clone();
    let env = Environment::new();

    let first = evaluate(&tree, &env).unwrap();
    let second = evaluate(&tree, &env).unwrap();
    assert_eq!(first, second);
    assert_eq!(tree, copy, "evaluation mutated the tree");
}

#[test]
fn parse_errors() {
    assert_parse_error("");
    assert_parse_error("   # only a comment");
    assert_parse_error("1 +");
    assert_parse_error("(1");
    assert_parse_error("(");
    assert_parse_error(")");
    assert_parse_error("1 2");
    assert_parse_error("2m3");
    assert_parse_error("||0");
    assert_parse_error("0(,000)");
    assert_parse_error("0(0,)");
    assert_parse_error("f(1,)");
    assert_parse_error("f(1 2)");
    assert_parse_error(r#""abc"#);
    assert_parse_error("\"a\nb\"");
    assert_parse_error(r#""a\qb""#);
}

#[test]
fn parse_errors_carry_positions() {
    // the dangling operator is rewound, so the error points at it
    let err = parse("1 +\n+ 2").unwrap_err();
    assert_eq!((err.line(), err.col()), (1, 3));
    // a failing construct on a later line reports that line
    let err = parse("1 +\n\"abc").unwrap_err();
    assert_eq!(err.line(), 2);
    let err = parse("(1 + 2").unwrap_err();
    assert!(err.line() == 1 && err.col() > 1);
}

#[test]
fn word_prefixed_identifiers_do_not_dangle() {
    assert_parse_error("true and");
    assert_parse_error("1 or");

    // a lone word operator falls back to being a plain identifier
    let env = Environment::new();
    assert!(matches!(assert_eval_error("not", &env),
                     EvalError::UnboundVariable { name } if name == "not"));

    let mut env = Environment::new();
    env.bind("ory", 1_i64).bind("andy", 2_i64).bind("nott", 3_i64);
    assert_eq!(eval_with("ory + andy + nott", &env), Value::Int(6));
}

#[test]
fn climate_predicate() {
    let mut env = Environment::new();
    env.bind("elevation", 101_i64)
       .bind("tmin_avg_min_2050", -5_i64)
       .bind("prec_avg_2050", 21_i64)
       .bind("tmax_days_above_95_2050", 19_i64)
       .bind("tmean_avg_2050d", 2_i64)
       .bind("tmin_days_at_or_below_32_2050", 129_i64)
       .bind("wetbulb_avg_max_2050", 78_i64)
       .bind("prec_days_at_or_below_0_2050", 220_i64);

    let predicate = r"(
	# Elevation (ft)
	elevation >= 100
	and
	# Elevation (ft)
	elevation <= 8000
	and
	# Average annual min temperature (deg F), 2050 value
	tmin_avg_min_2050 >= -6
	and
	# Average precipitation (in/year), 2050 value
	prec_avg_2050 >= 20
	and
	# Average annual days above 95 F, 2050 value
	tmax_days_above_95_2050 <= 20
	and
	# Average temperature (deg F), 2010-2050 change
	tmean_avg_2050d <= 3
	and
	# Average annual days at or below freezing, 2050 value
	tmin_days_at_or_below_32_2050 <= 130
	and
	# Average annual max daily average wet-bulb temperature, 2050 value
	wetbulb_avg_max_2050 < 79
	and
	# Average annual days with no precipitation, 2050 value
	prec_days_at_or_below_0_2050 <= 220
	)";

    assert_eq!(eval_with(predicate, &env), Value::Bool(true));

    env.bind("elevation", 99_i64);
    assert_eq!(eval_with(predicate, &env), Value::Bool(false));
}
