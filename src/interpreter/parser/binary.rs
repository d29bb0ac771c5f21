use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::parser::core::{Parser, ParseResult, SpellingTable},
};

/// Spellings of the disjunction level: `||` and the word form `or`.
pub const DISJUNCTION_OPS: SpellingTable<BinaryOperator> =
    &[(BinaryOperator::Or, &["||", "or"])];

/// Spellings of the conjunction level: `&&` and the word form `and`.
pub const CONJUNCTION_OPS: SpellingTable<BinaryOperator> =
    &[(BinaryOperator::And, &["&&", "and"])];

/// Spellings of the comparison level. The two-character spellings come
/// before `<` and `>` so the longer match always wins; `~=` and `<>`
/// are aliases of `!=`.
pub const COMPARISON_OPS: SpellingTable<BinaryOperator> =
    &[(BinaryOperator::LessEqual, &["<="]),
      (BinaryOperator::GreaterEqual, &[">="]),
      (BinaryOperator::Equal, &["=="]),
      (BinaryOperator::NotEqual, &["!=", "~=", "<>"]),
      (BinaryOperator::Less, &["<"]),
      (BinaryOperator::Greater, &[">"])];

/// Spellings of the additive level.
pub const ADDITIVE_OPS: SpellingTable<BinaryOperator> =
    &[(BinaryOperator::Add, &["+"]), (BinaryOperator::Sub, &["-"])];

/// Spellings of the multiplicative level.
pub const MULTIPLICATIVE_OPS: SpellingTable<BinaryOperator> =
    &[(BinaryOperator::Mul, &["*"]), (BinaryOperator::Div, &["/"])];

/// Spelling of the exponentiation level.
pub const EXPONENT_OPS: SpellingTable<BinaryOperator> = &[(BinaryOperator::Pow, &["^"])];

impl Parser {
    /// Parses logical OR expressions.
    ///
    /// Grammar: `disjunction := conjunction (("||" | "or") conjunction)*`
    pub(crate) fn parse_disjunction(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_operation(Self::parse_conjunction, DISJUNCTION_OPS)
    }

    /// Parses logical AND expressions.
    ///
    /// Grammar: `conjunction := not (("&&" | "and") not)*`
    pub(crate) fn parse_conjunction(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_operation(Self::parse_bool_negation, CONJUNCTION_OPS)
    }

    /// Parses relational and equality operators.
    ///
    /// Grammar: `comparison := addsub (cmpop addsub)*` where `cmpop` is
    /// one of `<`, `<=`, `==`, `!=` (or `~=`, `<>`), `>`, `>=`.
    pub(crate) fn parse_comparison(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_operation(Self::parse_additive, COMPARISON_OPS)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Grammar: `addsub := muldiv (("+" | "-") muldiv)*`
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_operation(Self::parse_multiplicative, ADDITIVE_OPS)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Grammar: `muldiv := neg (("*" | "/") neg)*`
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_operation(Self::parse_negation, MULTIPLICATIVE_OPS)
    }

    /// Parses exponentiation expressions.
    ///
    /// The right operand is parsed at the call level and the chain
    /// left-folds like every other binary level, so `a ^ b ^ c` is
    /// `(a ^ b) ^ c`. Mathematical right-associativity is deliberately
    /// not applied.
    ///
    /// Grammar: `exp := call ("^" call)*`
    pub(crate) fn parse_exponent(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_operation(Self::parse_call, EXPONENT_OPS)
    }
}
