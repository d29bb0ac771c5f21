/// Parsing errors.
///
/// Defines all error types that can occur while parsing source text.
/// Parse errors include malformed literals, unterminated constructs, and
/// trailing input, and they carry the source line and column where the
/// problem was found.
pub mod parse_error;

/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression tree: unbound variables, missing or malformed operator
/// bindings, operand kind mismatches, and value-domain failures such as
/// division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Either kind of failure the convenience entry point can produce.
///
/// [`crate::parse_and_evaluate`] parses and then evaluates, so it can
/// fail on either side; this enum carries whichever error occurred.
#[derive(Debug)]
pub enum Error {
    /// The source text did not parse.
    Parse(ParseError),
    /// The parsed tree failed to evaluate.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
