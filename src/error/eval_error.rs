#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression
/// tree.
pub enum EvalError {
    /// An identifier was not bound in the caller environment or the
    /// default environment.
    UnboundVariable {
        /// The name that failed to resolve.
        name: String,
    },
    /// No binding exists for an operator in either environment. Cannot
    /// happen unless a caller removes or shadows a default binding.
    UnknownOperator {
        /// The operator token.
        op: String,
    },
    /// The binding resolved for an operator is not of the required
    /// shape (e.g. a plain value bound under a binary operator key).
    InvalidOperatorBinding {
        /// The operator token.
        op: String,
    },
    /// An operator or host function was applied to operand kinds it does
    /// not support.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// A value-domain failure such as division by zero or a negative
    /// string repeat count.
    ValueError {
        /// Details about the failure.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "Unbound variable '{name}'."),
            Self::UnknownOperator { op } => write!(f, "Unknown operator '{op}'."),
            Self::InvalidOperatorBinding { op } => {
                write!(f, "Invalid binding for operator '{op}'.")
            },
            Self::TypeMismatch { details } => write!(f, "Type mismatch: {details}."),
            Self::ValueError { details } => write!(f, "Value error: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
