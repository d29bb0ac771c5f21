use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        env::{Binding, BindingKey, Environment},
        evaluator::core::EvalResult,
        value::{core::Value, duration::Duration},
    },
};

// Kind order for cross-kind comparison:
//  { bool, int, float, duration } < { time } < { string, bytes }

/// Default implementation of `<`, and the single source of truth for
/// the whole comparison family.
///
/// Mixed kinds are decided by the bracket ranking above alone; within
/// the lowest bracket, operands compare numerically after coercion
/// (duration against seconds, bool as 0 or 1), and within the highest,
/// strings and bytes compare byte-wise. Host functions do not compare.
pub fn less(_env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    less_values(a, b).map(Value::Bool)
}

/// Default implementation of `<=`: `a <= b ≡ a < b ∨ ¬(b < a)`.
pub fn less_equal(env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    if less_helper(env, a, b)? {
        return Ok(Value::Bool(true));
    }
    Ok(Value::Bool(!less_helper(env, b, a)?))
}

/// Default implementation of `==`: equality holds when neither operand
/// is less than the other.
pub fn equal(env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    if less_helper(env, a, b)? {
        return Ok(Value::Bool(false));
    }
    Ok(Value::Bool(!less_helper(env, b, a)?))
}

/// Default implementation of `!=` and its aliases `~=` and `<>`.
pub fn not_equal(env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    if less_helper(env, a, b)? {
        return Ok(Value::Bool(true));
    }
    less_helper(env, b, a).map(Value::Bool)
}

/// Default implementation of `>`: `a > b ≡ b < a`.
pub fn greater(env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    less_helper(env, b, a).map(Value::Bool)
}

/// Default implementation of `>=`: `a >= b ≡ b < a ∨ ¬(a < b)`.
pub fn greater_equal(env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    if less_helper(env, b, a)? {
        return Ok(Value::Bool(true));
    }
    Ok(Value::Bool(!less_helper(env, a, b)?))
}

/// Applies whatever `<` resolves to under `env` and requires a boolean
/// result.
///
/// The derived operators go through this helper rather than calling
/// [`less_values`] directly, so a caller that overrides `<` changes the
/// meaning of the entire comparison family at once.
fn less_helper(env: &Environment, a: &Value, b: &Value) -> EvalResult<bool> {
    let f = match env.resolve(&BindingKey::Op(BinaryOperator::Less)) {
        Some(Binding::Binary(f)) => f,
        Some(_) => {
            return Err(EvalError::InvalidOperatorBinding { op: BinaryOperator::Less.to_string() });
        },
        None => {
            return Err(EvalError::UnknownOperator { op: BinaryOperator::Less.to_string() });
        },
    };
    f(env, a, b)?.as_bool()
}

/// The default strict ordering over comparable values.
#[allow(clippy::cast_precision_loss)]
fn less_values(a: &Value, b: &Value) -> EvalResult<bool> {
    if a.is_host_fn() || b.is_host_fn() {
        return Err(EvalError::TypeMismatch { details: format!("unsupported kinds for \
                                                               comparison: {} < {}",
                                                              a.kind(),
                                                              b.kind()) });
    }
    let (rank_a, rank_b) = (rank(a), rank(b));
    if rank_a != rank_b {
        return Ok(rank_a < rank_b);
    }

    Ok(match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => !*x && *y,
        (Value::Bool(x), Value::Int(y)) => i64::from(*x) < *y,
        (Value::Int(x), Value::Bool(y)) => *x < i64::from(*y),
        (Value::Bool(x), Value::Float(y)) => (if *x { 1.0 } else { 0.0 }) < *y,
        (Value::Float(x), Value::Bool(y)) => *x < if *y { 1.0 } else { 0.0 },
        (Value::Bool(x), Value::Duration(y)) => {
            (if *x { Duration::SECOND } else { Duration::from_nanos(0) }) < *y
        },
        (Value::Duration(x), Value::Bool(y)) => {
            *x < if *y { Duration::SECOND } else { Duration::from_nanos(0) }
        },
        (Value::Int(x), Value::Int(y)) => x < y,
        (Value::Int(x), Value::Float(y)) => (*x as f64) < *y,
        (Value::Float(x), Value::Int(y)) => *x < *y as f64,
        (Value::Float(x), Value::Float(y)) => x < y,
        (Value::Int(x), Value::Duration(y)) => Duration::from_secs(*x) < *y,
        (Value::Duration(x), Value::Int(y)) => *x < Duration::from_secs(*y),
        (Value::Float(x), Value::Duration(y)) => Duration::from_secs_f64(*x) < *y,
        (Value::Duration(x), Value::Float(y)) => *x < Duration::from_secs_f64(*y),
        (Value::Duration(x), Value::Duration(y)) => x < y,

        (Value::Time(x), Value::Time(y)) => x < y,

        (Value::Str(x), Value::Str(y)) => x < y,
        (Value::Str(x), Value::Bytes(y)) => x.as_bytes() < y.as_slice(),
        (Value::Bytes(x), Value::Str(y)) => x.as_slice() < y.as_bytes(),
        (Value::Bytes(x), Value::Bytes(y)) => x < y,

        _ => unreachable!("same-rank pair not covered: {} < {}", a.kind(), b.kind()),
    })
}

/// The bracket a value's kind falls into for cross-kind ordering. Host
/// functions are rejected before ranking.
fn rank(v: &Value) -> u8 {
    match v {
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Duration(_) => 0,
        Value::Time(_) => 1,
        Value::Str(_) | Value::Bytes(_) | Value::HostFn(_) => 2,
    }
}
