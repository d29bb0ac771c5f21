use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::duration::Duration},
};

/// Represents a runtime value in the evaluator.
///
/// This enum models every kind a value can take while an expression is
/// being evaluated: the result of a literal, an environment lookup, an
/// operator application, or a host-function call.
#[derive(Debug, Clone)]
pub enum Value {
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and
    /// logical operations, and required by `&&`, `||` and `!`.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A unicode text string.
    Str(String),
    /// An immutable byte sequence. Rendered as `0x` followed by
    /// lowercase hex wherever a textual form is needed.
    Bytes(Vec<u8>),
    /// A span of time with nanosecond resolution.
    Duration(Duration),
    /// A wall-clock instant with nanosecond resolution.
    Time(DateTime<Utc>),
    /// A caller-provided function. First-class: it may be bound to a
    /// name, looked up, and invoked by a call expression, but operators
    /// never produce one and no literal denotes one.
    HostFn(HostFn),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Time(v)
    }
}

impl From<HostFn> for Value {
    fn from(v: HostFn) -> Self {
        Self::HostFn(v)
    }
}

impl Value {
    /// Converts the value to `bool`, or returns an error if it is not
    /// boolean.
    ///
    /// Used by the logical operators and by the comparison family when
    /// it applies a resolved `<` binding.
    pub fn as_bool(&self) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(EvalError::TypeMismatch { details: format!("bool expected, found {}",
                                                                self.kind()) }),
        }
    }

    /// Gets a short name for the kind of this value, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Duration(_) => "duration",
            Self::Time(_) => "time",
            Self::HostFn(_) => "host function",
        }
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`HostFn`].
    ///
    /// [`HostFn`]: Value::HostFn
    #[must_use]
    pub const fn is_host_fn(&self) -> bool {
        matches!(self, Self::HostFn(..))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::HostFn(a), Self::HostFn(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bytes(b) => {
                write!(f, "0x")?;
                for byte in b {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            },
            Self::Duration(d) => write!(f, "{d}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::HostFn(_) => write!(f, "<host function>"),
        }
    }
}

/// A caller-provided function invocable from the language.
///
/// Hosts wrap their native callables in a `HostFn` via a thin closure
/// that checks argument kinds and performs any coercions explicitly,
/// then bind it to a name in the environment. The handle is shared and
/// thread-safe so a bound environment can serve concurrent evaluations.
///
/// # Example
/// ```
/// use predica::{EvalError, HostFn, Value};
///
/// let double = HostFn::new(|args| match args {
///     [Value::Int(n)] => Ok(Value::Int(n * 2)),
///     _ => Err(EvalError::TypeMismatch { details: "one int expected".to_string() }),
/// });
///
/// assert_eq!(double.call(&[Value::Int(21)]).unwrap(), Value::Int(42));
/// assert!(double.call(&[]).is_err());
/// ```
#[derive(Clone)]
pub struct HostFn {
    f: Arc<dyn Fn(&[Value]) -> EvalResult<Value> + Send + Sync>,
}

impl HostFn {
    /// Wraps a native function for use as a language value.
    pub fn new<F>(f: F) -> Self
        where F: Fn(&[Value]) -> EvalResult<Value> + Send + Sync + 'static
    {
        Self { f: Arc::new(f) }
    }

    /// Invokes the function with an already-evaluated argument vector.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        (self.f)(args)
    }
}

impl PartialEq for HostFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl std::fmt::Debug for HostFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostFn").finish_non_exhaustive()
    }
}
