/// Binary operator levels of the grammar.
///
/// Declares the per-precedence spelling tables and the level parsers
/// from disjunction down to exponentiation. Every level is a left fold
/// over the next-tighter level.
pub mod binary;
/// The parser entry point and the speculative matching engine.
///
/// Declares the `Parser` type, the top-level `parse` function, and the
/// checkpoint/restore machinery that lets operator spellings share a
/// prefix with identifiers.
pub mod core;
/// Prefix modifiers and atoms.
///
/// Declares the modifier levels (`!`/`not` and unary `-`) along with
/// string, identifier, numeric and duration literal parsing,
/// subexpressions, and call argument lists.
pub mod unary;
