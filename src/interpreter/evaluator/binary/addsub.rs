use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    error::EvalError,
    interpreter::{
        env::Environment,
        evaluator::core::EvalResult,
        value::{core::Value, duration::Duration},
    },
};

/// Default implementation of `+` over the full kind cross-product.
///
/// A string on either side concatenates with the canonical rendering of
/// the other operand (bytes render as `0x` + hex, durations and times
/// as their display forms). Bytes concatenate with bytes; against the
/// numeric kinds they also render textually. Within the numeric kinds,
/// ints and floats add with the usual widening, bools count as 0 or 1,
/// and a bare number acts as seconds against a duration or a time.
/// `Time + Time` has no meaning and is a type mismatch.
#[allow(clippy::cast_precision_loss)]
pub fn add(_env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    match (a, b) {
        (Value::Str(x),
         Value::Bool(_)
         | Value::Int(_)
         | Value::Float(_)
         | Value::Str(_)
         | Value::Bytes(_)
         | Value::Duration(_)
         | Value::Time(_)) => Ok(Value::Str(format!("{x}{b}"))),

        (Value::Bool(_)
         | Value::Int(_)
         | Value::Float(_)
         | Value::Bytes(_)
         | Value::Duration(_)
         | Value::Time(_),
         Value::Str(y)) => Ok(Value::Str(format!("{a}{y}"))),

        (Value::Bytes(x), Value::Bytes(y)) => {
            let mut joined = x.clone();
            joined.extend_from_slice(y);
            Ok(Value::Bytes(joined))
        },
        (Value::Bytes(_),
         Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Duration(_) | Value::Time(_))
        | (Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Duration(_) | Value::Time(_),
           Value::Bytes(_)) => Ok(Value::Str(format!("{a}{b}"))),

        (Value::Int(x), Value::Int(y)) => Ok(Value::Int(x + y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 + y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x + *y as f64)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x + y)),

        (Value::Int(x), Value::Bool(y)) => Ok(Value::Int(x + i64::from(*y))),
        (Value::Bool(x), Value::Int(y)) => Ok(Value::Int(y + i64::from(*x))),
        (Value::Float(x), Value::Bool(y)) | (Value::Bool(y), Value::Float(x)) => {
            Ok(Value::Float(if *y { x + 1.0 } else { *x }))
        },
        (Value::Bool(x), Value::Bool(y)) => Ok(Value::Int(i64::from(*x) + i64::from(*y))),

        (Value::Int(x), Value::Duration(y)) | (Value::Duration(y), Value::Int(x)) => {
            Ok(dur_add(Duration::from_secs(*x), *y))
        },
        (Value::Float(x), Value::Duration(y)) | (Value::Duration(y), Value::Float(x)) => {
            Ok(dur_add(Duration::from_secs_f64(*x), *y))
        },
        (Value::Bool(x), Value::Duration(y)) | (Value::Duration(y), Value::Bool(x)) => {
            Ok(if *x { dur_add(Duration::SECOND, *y) } else { Value::Duration(*y) })
        },
        (Value::Duration(x), Value::Duration(y)) => Ok(dur_add(*x, *y)),

        (Value::Int(x), Value::Time(y)) | (Value::Time(y), Value::Int(x)) => {
            shift(y, Duration::from_secs(*x))
        },
        (Value::Float(x), Value::Time(y)) | (Value::Time(y), Value::Float(x)) => {
            shift(y, Duration::from_secs_f64(*x))
        },
        (Value::Bool(x), Value::Time(y)) | (Value::Time(y), Value::Bool(x)) => {
            if *x {
                shift(y, Duration::SECOND)
            } else {
                Ok(Value::Time(*y))
            }
        },
        (Value::Duration(x), Value::Time(y)) => shift(y, *x),
        (Value::Time(x), Value::Duration(y)) => shift(x, *y),

        _ => Err(EvalError::TypeMismatch { details: format!("unsupported kinds for addition: {} \
                                                             + {}",
                                                            a.kind(),
                                                            b.kind()) }),
    }
}

/// Default implementation of `-`.
///
/// Subtraction is not defined on string or byte operands. The numeric
/// rules mirror addition with the sign inverted, `Time - Time` yields
/// the duration between the two instants, and `Bool - Bool` lands in
/// `{-1, 0, 1}`.
#[allow(clippy::cast_precision_loss)]
pub fn sub(_env: &Environment, a: &Value, b: &Value) -> EvalResult<Value> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(Value::Int(x - y)),
        (Value::Int(x), Value::Float(y)) => Ok(Value::Float(*x as f64 - y)),
        (Value::Float(x), Value::Int(y)) => Ok(Value::Float(x - *y as f64)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x - y)),

        (Value::Int(x), Value::Bool(y)) => Ok(Value::Int(x - i64::from(*y))),
        (Value::Float(x), Value::Bool(y)) => Ok(Value::Float(if *y { x - 1.0 } else { *x })),
        (Value::Bool(x), Value::Int(y)) => Ok(Value::Int(i64::from(*x) - y)),
        (Value::Bool(x), Value::Float(y)) => {
            Ok(Value::Float(if *x { 1.0 - y } else { -y }))
        },
        (Value::Bool(x), Value::Bool(y)) => Ok(Value::Int(i64::from(*x) - i64::from(*y))),

        (Value::Int(x), Value::Duration(y)) => Ok(dur_sub(Duration::from_secs(*x), *y)),
        (Value::Float(x), Value::Duration(y)) => Ok(dur_sub(Duration::from_secs_f64(*x), *y)),
        (Value::Bool(x), Value::Duration(y)) => {
            let lhs = if *x { Duration::SECOND } else { Duration::from_nanos(0) };
            Ok(dur_sub(lhs, *y))
        },
        (Value::Duration(x), Value::Int(y)) => Ok(dur_sub(*x, Duration::from_secs(*y))),
        (Value::Duration(x), Value::Float(y)) => Ok(dur_sub(*x, Duration::from_secs_f64(*y))),
        (Value::Duration(x), Value::Bool(y)) => {
            Ok(if *y { dur_sub(*x, Duration::SECOND) } else { Value::Duration(*x) })
        },
        (Value::Duration(x), Value::Duration(y)) => Ok(dur_sub(*x, *y)),

        (Value::Time(x), Value::Int(y)) => shift(x, -Duration::from_secs(*y)),
        (Value::Time(x), Value::Float(y)) => shift(x, -Duration::from_secs_f64(*y)),
        (Value::Time(x), Value::Bool(y)) => {
            if *y {
                shift(x, -Duration::SECOND)
            } else {
                Ok(Value::Time(*x))
            }
        },
        (Value::Time(x), Value::Duration(y)) => shift(x, -*y),
        (Value::Time(x), Value::Time(y)) => {
            x.signed_duration_since(*y)
             .num_nanoseconds()
             .map(|n| Value::Duration(Duration::from_nanos(n)))
             .ok_or_else(|| EvalError::ValueError { details: "duration out of range".to_string() })
        },

        _ => Err(EvalError::TypeMismatch { details: format!("unsupported kinds for subtraction: \
                                                             {} - {}",
                                                            a.kind(),
                                                            b.kind()) }),
    }
}

/// Adds two durations, saturating at the representable range.
fn dur_add(x: Duration, y: Duration) -> Value {
    Value::Duration(Duration::from_nanos(x.nanos().saturating_add(y.nanos())))
}

/// Subtracts two durations, saturating at the representable range.
fn dur_sub(x: Duration, y: Duration) -> Value {
    Value::Duration(Duration::from_nanos(x.nanos().saturating_sub(y.nanos())))
}

/// Shifts a wall-clock instant by a duration.
fn shift(t: &DateTime<Utc>, d: Duration) -> EvalResult<Value> {
    t.checked_add_signed(TimeDelta::nanoseconds(d.nanos()))
     .map(Value::Time)
     .ok_or_else(|| EvalError::ValueError { details: "time out of range".to_string() })
}
