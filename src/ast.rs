use crate::interpreter::value::{core::Value, duration::Duration};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly
/// in source text: integers, floats, strings, and suffixed durations.
/// Booleans are not literals; `true` and `false` are names bound by the
/// default environment. Host functions can never appear as literals.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A double-quoted string literal.
    Str(String),
    /// A duration literal such as `2h` or `500ms`.
    Duration(Duration),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Duration> for LiteralValue {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Int(n) => Self::Int(*n),
            LiteralValue::Float(f) => Self::Float(*f),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Duration(d) => Self::Duration(*d),
        }
    }
}

/// A node of the parsed expression tree.
///
/// `Expr` covers every construct the grammar can produce. Each node owns
/// its children exclusively and the tree is immutable after parsing:
/// evaluation walks it without mutating a node, so one parsed tree may be
/// evaluated any number of times, including from several threads at once
/// provided the environment is not mutated underneath it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(LiteralValue),
    /// An identifier occurrence, resolved through the environment at
    /// evaluation time.
    Ident(String),
    /// A parenthesised expression. Semantically transparent but kept as
    /// its own node for structural clarity.
    Subexpression(Box<Expr>),
    /// An invocation. Any node may be a callee; `f(x)(y)` calls the
    /// result of `f(x)`.
    Call {
        /// The expression being invoked.
        callee: Box<Expr>,
        /// Arguments in source order.
        args:   Vec<Expr>,
    },
    /// A binary operator application.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A prefix modifier application.
    Unary {
        /// The modifier.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Expr>,
    },
}

/// Represents a binary operator.
///
/// These double as environment keys: the implementation of every operator
/// is a binding looked up by its token, caller environment first, so a
/// caller may replace any of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Exponentiation (`^`)
    Pow,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`, with aliases `~=` and `<>`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`&&`, `and`)
    And,
    /// Logical or (`||`, `or`)
    Or,
}

/// Represents a prefix modifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`, `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };
        let operator = match self {
            Pow => "^",
            Mul => "*",
            Div => "/",
            Add => "+",
            Sub => "-",
            Less => "<",
            LessEqual => "<=",
            Equal => "==",
            NotEqual => "!=",
            Greater => ">",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}
