//! # predica
//!
//! predica is a small embeddable expression language: a pure,
//! single-expression evaluator a host program compiles in so it can
//! accept short, user-written predicates and arithmetic expressions over
//! host-supplied bindings. The grammar is C-style (arithmetic,
//! comparison, boolean logic, parenthesised subexpressions, identifier
//! lookups, function invocation) augmented with literal durations
//! (`2h`, `500ms`) and host-callable values.
//!
//! Parsing produces an immutable expression tree; evaluating the tree
//! against an environment is a pure function, and every operator is
//! itself an environment binding the caller may override.
//!
//! ```
//! use predica::{parse_and_evaluate, Environment, Value};
//!
//! let mut env = Environment::new();
//! env.bind("retries", 4_i64);
//!
//! let v = parse_and_evaluate("retries < 3 || 1 + (10 / 2) > 3", &env).unwrap();
//! assert_eq!(v, Value::Bool(true));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of source text as a tree. The tree is built
/// by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the node types for every language construct.
/// - Defines the operator enums that double as environment keys.
/// - Keeps literals distinct from runtime values so host functions can
///   never appear as literals.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating an expression. Parse errors carry line and column
/// information; evaluation errors describe unbound names, operator
/// binding problems, kind mismatches, and value-domain failures.
///
/// # Responsibilities
/// - Defines error enums for both phases.
/// - Supports integration with standard error handling traits.
/// - Provides a combined error for the parse-and-evaluate entry point.
pub mod error;
/// Orchestrates parsing and evaluation.
///
/// This module ties together the scanner, parser, environment,
/// evaluator and value types that make up the language runtime.
///
/// # Responsibilities
/// - Coordinates the core components.
/// - Houses the default operator semantics.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric literal parsing.
///
/// # Responsibilities
/// - Parses integer literals with base prefixes and separators.
/// - Parses float literals with separators.
pub mod util;

pub use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::{Error, EvalError, ParseError},
    interpreter::{
        env::{default_environment, Binding, BindingKey, Environment},
        value::{
            core::{HostFn, Value},
            duration::Duration,
        },
    },
};

/// Parses a complete expression into an evaluable tree.
///
/// The entire input must be a single expression; leftover input and
/// empty input are both parse errors.
///
/// # Errors
/// Returns a [`ParseError`] locating the first malformed construct.
///
/// # Example
/// ```
/// use predica::parse;
///
/// assert!(parse("not (2 != 2)").is_ok());
/// assert!(parse("2 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    interpreter::parser::core::parse(source)
}

/// Evaluates a parsed tree against a caller environment.
///
/// Identifier and operator lookups consult `env` first and fall back to
/// the default environment. Evaluating the same tree against the same
/// environment is a pure function; the tree is never mutated and may be
/// reused freely.
///
/// # Errors
/// Returns an [`EvalError`] describing the first failing subevaluation.
///
/// # Example
/// ```
/// use predica::{evaluate, parse, Duration, Environment, Value};
///
/// let tree = parse("2h").unwrap();
/// let env = Environment::new();
///
/// assert_eq!(evaluate(&tree, &env).unwrap(),
///            Value::Duration(Duration::from_secs(7200)));
/// ```
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<Value, EvalError> {
    interpreter::evaluator::core::evaluate(expr, env)
}

/// Parses and immediately evaluates an expression.
///
/// A convenience for hosts that do not cache parsed trees.
///
/// # Errors
/// Returns an [`Error`] wrapping whichever phase failed.
///
/// # Example
/// ```
/// use predica::{parse_and_evaluate, Environment, Value};
///
/// let env = Environment::new();
/// let v = parse_and_evaluate("2s == 2 * (1s)", &env).unwrap();
///
/// assert_eq!(v, Value::Bool(true));
/// ```
pub fn parse_and_evaluate(source: &str, env: &Environment) -> Result<Value, Error> {
    let expr = parse(source)?;
    Ok(evaluate(&expr, env)?)
}
