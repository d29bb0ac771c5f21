use crate::{
    error::EvalError,
    interpreter::{env::Environment, evaluator::core::EvalResult, value::core::Value},
};

/// Default implementation of arithmetic negation.
///
/// Negates integers, floats and durations. A boolean operand behaves as
/// logical not. All other kinds are a type mismatch.
pub fn negate(_env: &Environment, a: &Value) -> EvalResult<Value> {
    match a {
        Value::Int(n) => Ok(Value::Int(n.wrapping_neg())),
        Value::Float(r) => Ok(Value::Float(-r)),
        Value::Bool(b) => Ok(Value::Bool(!b)),
        Value::Duration(d) => Ok(Value::Duration(-*d)),
        _ => Err(EvalError::TypeMismatch { details: format!("unsupported kind for negation: {}",
                                                            a.kind()) }),
    }
}

/// Default implementation of logical not. Booleans only.
pub fn not(_env: &Environment, a: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(!a.as_bool()?))
}
