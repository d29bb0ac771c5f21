use crate::{
    error::EvalError,
    interpreter::{env::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// Default implementation of `^`.
///
/// Defined for numeric and boolean operands, with booleans coerced to 0
/// or 1. The result is always a float computed with IEEE `powf`, which
/// makes `0 ^ 0` equal to `1`. Durations, times, strings and bytes do
/// not exponentiate.
#[allow(clippy::cast_precision_loss)]
pub fn pow(_env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    let base = match a {
        Value::Int(x) => *x as f64,
        Value::Float(x) => *x,
        Value::Bool(x) => f64::from(u8::from(*x)),
        _ => return Err(mismatch(a, b)),
    };
    let exponent = match b {
        Value::Int(y) => *y as f64,
        Value::Float(y) => *y,
        Value::Bool(y) => f64::from(u8::from(*y)),
        _ => return Err(mismatch(a, b)),
    };
    Ok(Value::Float(base.powf(exponent)))
}

fn mismatch(a: &Value, b: &Value) -> EvalError {
    EvalError::TypeMismatch { details: format!("unsupported kinds for exponentiation: {} ^ {}",
                                               a.kind(),
                                               b.kind()) }
}
