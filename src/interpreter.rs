/// The environment maps binding keys to values and operator
/// implementations.
///
/// This module declares the binding table used at evaluation time:
/// name keys for identifier lookups, operator keys for the dispatch of
/// every binary and unary operator, and the process-wide default
/// environment every lookup falls back to.
///
/// # Responsibilities
/// - Defines `Environment`, `Binding` and `BindingKey`.
/// - Builds the default environment: every operator plus `true`/`false`.
/// - Resolves keys caller-first with default fallback.
pub mod env;
/// The evaluator module walks expression trees and computes results.
///
/// The evaluator traverses the tree depth-first and left-to-right,
/// resolving identifiers and operator bindings through the environment,
/// applying the resolved implementations, and invoking host functions
/// at call nodes. It is a pure function of (tree, environment).
///
/// # Responsibilities
/// - Evaluates every node kind the parser can produce.
/// - Houses the default operator semantics, including the cross-kind
///   coercion tables.
/// - Reports evaluation errors such as unbound variables or kind
///   mismatches.
pub mod evaluator;
/// The lexer module provides character-level scanning primitives.
///
/// The scanner tracks a cursor with line/column information over the
/// rune buffer and offers the lookahead, slicing, whitespace/comment
/// skipping and checkpoint/restore operations the speculative parser is
/// built from. There is no token stream; the parser consumes characters
/// directly.
///
/// # Responsibilities
/// - Maintains cursor position and 1-based line/column tracking.
/// - Skips whitespace and `#` line comments.
/// - Supports bounded speculation via checkpoint/restore.
pub mod lexer;
/// The parser module builds the expression tree from source text.
///
/// A recursive-descent parser lowers source into an `Expr` tree
/// respecting operator precedence and associativity, using speculative
/// consumption wherever an operator spelling is ambiguous with an
/// identifier prefix.
///
/// # Responsibilities
/// - Implements the precedence ladder from disjunction down to atoms.
/// - Applies the word-boundary rule for `or`, `and` and `not`.
/// - Reports parse errors with line and column information.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum over the language's scalar
/// kinds, the `Duration` type backing duration literals, and the
/// `HostFn` handle wrapping caller-provided functions.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported kinds.
/// - Provides canonical textual renderings for each kind.
/// - Wraps host callables in a shared, thread-safe handle.
pub mod value;
