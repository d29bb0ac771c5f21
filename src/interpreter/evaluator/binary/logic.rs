use crate::interpreter::{env::Environment, evaluator::core::EvalResult, value::core::Value};

/// Default implementation of `&&`.
///
/// Both operands must be booleans. There is no short-circuit: by the
/// time this binding runs, the evaluator has already evaluated both
/// sides.
pub fn and(_env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(a.as_bool()? && b.as_bool()?))
}

/// Default implementation of `||`. Booleans only, no short-circuit.
pub fn or(_env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    Ok(Value::Bool(a.as_bool()? || b.as_bool()?))
}
