use crate::{
    error::EvalError,
    interpreter::{
        env::Environment,
        evaluator::core::EvalResult,
        value::{core::Value, duration::Duration},
    },
};

/// Default implementation of `*`.
///
/// Numeric products widen mixed int/float to float. A string repeats
/// when multiplied by a count: negative counts and non-finite floats
/// are value errors, and a float count truncates. Bytes repeat the same
/// way except a negative count yields the empty sequence. A bool acts
/// as identity when true and as the zero of the other operand's kind
/// when false. Durations scale by ints and floats, with floats
/// truncated to whole numbers before scaling.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mul(_env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    match (a, b) {
        (Value::Str(x), Value::Int(y)) => {
            if *y < 0 {
                return Err(negative_repeat());
            }
            Ok(Value::Str(x.repeat(*y as usize)))
        },
        (Value::Str(x), Value::Float(y)) => {
            check_repeat_count(*y)?;
            Ok(Value::Str(x.repeat(*y as usize)))
        },
        (Value::Str(x), Value::Bool(y)) | (Value::Bool(y), Value::Str(x)) => {
            Ok(Value::Str(if *y { x.clone() } else { String::new() }))
        },

        (Value::Bytes(x), Value::Int(y)) => Ok(Value::Bytes(x.repeat((*y).max(0) as usize))),
        (Value::Bytes(x), Value::Float(y)) => {
            if y.is_nan() || y.is_infinite() {
                return Err(EvalError::ValueError { details: "invalid bytes repeat".to_string() });
            }
            let count = (*y as i64).max(0);
            Ok(Value::Bytes(x.repeat(count as usize)))
        },
        (Value::Bytes(x), Value::Bool(y)) | (Value::Bool(y), Value::Bytes(x)) => {
            Ok(Value::Bytes(if *y { x.clone() } else { Vec::new() }))
        },

        (Value::Int(x), Value::Int(y)) => Ok(Value::Int(x * y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 * y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x * *y as f64)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x * y)),

        (Value::Int(x), Value::Bool(y)) | (Value::Bool(y), Value::Int(x)) => {
            Ok(Value::Int(if *y { *x } else { 0 }))
        },
        (Value::Float(x), Value::Bool(y)) | (Value::Bool(y), Value::Float(x)) => {
            Ok(Value::Float(if *y { *x } else { 0.0 }))
        },
        (Value::Bool(x), Value::Bool(y)) => Ok(Value::Bool(*x && *y)),

        (Value::Int(x), Value::Duration(y)) | (Value::Duration(y), Value::Int(x)) => {
            Ok(Value::Duration(Duration::from_nanos(y.nanos().saturating_mul(*x))))
        },
        (Value::Float(x), Value::Duration(y)) | (Value::Duration(y), Value::Float(x)) => {
            Ok(Value::Duration(Duration::from_nanos(y.nanos().saturating_mul(*x as i64))))
        },
        (Value::Duration(x), Value::Bool(y)) | (Value::Bool(y), Value::Duration(x)) => {
            Ok(Value::Duration(if *y { *x } else { Duration::from_nanos(0) }))
        },
        (Value::Duration(x), Value::Duration(y)) => {
            Ok(Value::Duration(Duration::from_nanos(x.nanos().saturating_mul(y.nanos()))))
        },

        _ => Err(EvalError::TypeMismatch { details: format!("unsupported kinds for \
                                                             multiplication: {} * {}",
                                                            a.kind(),
                                                            b.kind()) }),
    }
}

/// Default implementation of `/`.
///
/// Division is only defined for numeric and duration operands. Dividing
/// two integers promotes to float, dividing two durations yields their
/// dimensionless ratio, and any zero divisor is a value error.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn div(_env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => {
            check_divisor(*y as f64)?;
            Ok(Value::Float(*x as f64 / *y as f64))
        },
        (Value::Int(x), Value::Float(y)) => {
            check_divisor(*y)?;
            Ok(Value::Float(*x as f64 / y))
        },
        (Value::Float(x), Value::Int(y)) => {
            check_divisor(*y as f64)?;
            Ok(Value::Float(x / *y as f64))
        },
        (Value::Float(x), Value::Float(y)) => {
            check_divisor(*y)?;
            Ok(Value::Float(x / y))
        },

        (Value::Duration(x), Value::Int(y)) => {
            check_divisor(*y as f64)?;
            Ok(Value::Duration(Duration::from_nanos(x.nanos() / y)))
        },
        (Value::Duration(x), Value::Float(y)) => {
            check_divisor(*y)?;
            Ok(Value::Duration(Duration::from_nanos((x.nanos() as f64 / y) as i64)))
        },
        (Value::Duration(x), Value::Duration(y)) => {
            check_divisor(y.nanos() as f64)?;
            Ok(Value::Float(x.nanos() as f64 / y.nanos() as f64))
        },

        _ => Err(EvalError::TypeMismatch { details: format!("unsupported kinds for division: {} \
                                                             / {}",
                                                            a.kind(),
                                                            b.kind()) }),
    }
}

fn check_divisor(y: f64) -> EvalResult<()> {
    if y == 0.0 {
        return Err(EvalError::ValueError { details: "division by zero".to_string() });
    }
    Ok(())
}

/// Validates a float repeat count for strings: non-negative and finite.
fn check_repeat_count(y: f64) -> EvalResult<()> {
    if y < 0.0 {
        return Err(negative_repeat());
    }
    if y.is_nan() || y.is_infinite() {
        return Err(EvalError::ValueError { details: "invalid string repeat".to_string() });
    }
    Ok(())
}

fn negative_repeat() -> EvalError {
    EvalError::ValueError { details: "negative string repeat".to_string() }
}
