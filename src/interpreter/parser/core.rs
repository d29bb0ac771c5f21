use crate::{ast::Expr, error::ParseError, interpreter::lexer::Scanner};

/// Result type used by the parser.
///
/// Parsing functions return either a `T` or a `ParseError` pointing at
/// the offending line and column.
pub type ParseResult<T> = Result<T, ParseError>;

/// A table of operator spellings for one precedence level.
///
/// Each entry pairs an operator token with the concrete spellings that
/// produce it. Spellings sharing a prefix must list the longer form
/// first (at its level) so `<=` is never read as `<` followed by `=`.
pub type SpellingTable<T> = &'static [(T, &'static [&'static str])];

/// Parses a complete expression from source text.
///
/// The whole input must be one expression: anything left over after the
/// top-level expression is a parse error, as is input containing no
/// expression at all.
///
/// # Errors
/// Returns a [`ParseError`] describing the first malformed construct.
///
/// # Example
/// ```
/// use predica::parse;
///
/// assert!(parse("1 + (10 / 2) > 3").is_ok());
/// assert!(parse("1 +").is_err());
/// assert!(parse("").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    Parser::new(source).parse()
}

/// A recursive-descent parser over a character scanner.
///
/// The parser lowers source text into an [`Expr`] tree respecting the
/// precedence ladder: disjunction, conjunction, logical not,
/// comparison, additive, multiplicative, negation, exponent, calls,
/// atoms. Operator consumption is speculative throughout; see
/// [`Parser::parse_op_and_rhs`].
#[derive(Debug)]
pub struct Parser {
    pub(crate) scanner: Scanner,
}

impl Parser {
    /// Creates a parser positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { scanner: Scanner::new(source) }
    }

    /// Parses the scanner's whole input as a single expression.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if no expression can be parsed or if
    /// input remains after the expression.
    pub fn parse(mut self) -> ParseResult<Expr> {
        self.scanner.skip_all_whitespace()?;
        let Some(expr) = self.parse_expression()? else {
            return Err(ParseError::ExpectedExpression { line: self.scanner.line(),
                                                        col:  self.scanner.col(), });
        };
        if !self.scanner.eof() {
            return Err(ParseError::TrailingInput { line: self.scanner.line(),
                                                   col:  self.scanner.col(), });
        }
        Ok(expr)
    }

    /// Parses one expression starting at the lowest-precedence level.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_disjunction()
    }

    /// Left-folds one binary operator level.
    ///
    /// Parses a first operand with `value_parse`, then keeps absorbing
    /// `<op> <operand>` pairs from `ops` for as long as one matches,
    /// associating to the left.
    pub(crate) fn parse_operation(&mut self,
                                  value_parse: fn(&mut Self) -> ParseResult<Option<Expr>>,
                                  ops: SpellingTable<crate::ast::BinaryOperator>)
                                  -> ParseResult<Option<Expr>> {
        let Some(mut left) = value_parse(self)? else {
            return Ok(None);
        };
        loop {
            if self.scanner.eof() {
                return Ok(Some(left));
            }
            match self.parse_op_and_rhs(value_parse, ops)? {
                Some((op, rhs)) => {
                    left = Expr::Binary { op,
                                          left: Box::new(left),
                                          right: Box::new(rhs) };
                },
                None => return Ok(Some(left)),
            }
        }
    }

    /// Parses one prefix-modifier level.
    ///
    /// A modifier applies at most once per level; its operand is parsed
    /// at the next-tighter level, so `--x` does not parse while `-x`
    /// does.
    pub(crate) fn parse_modifier(&mut self,
                                 value_parse: fn(&mut Self) -> ParseResult<Option<Expr>>,
                                 mods: SpellingTable<crate::ast::UnaryOperator>)
                                 -> ParseResult<Option<Expr>> {
        if let Some((op, operand)) = self.parse_op_and_rhs(value_parse, mods)? {
            return Ok(Some(Expr::Unary { op,
                                         operand: Box::new(operand) }));
        }
        value_parse(self)
    }

    /// Speculatively matches one operator spelling and its right-hand
    /// side.
    ///
    /// For each candidate spelling: the match is ASCII case-insensitive
    /// and only accepted at a word boundary, i.e. when the character
    /// just past the spelling cannot extend an identifier. On a match
    /// the spelling and any following whitespace are consumed and the
    /// right-hand side is attempted; if no operand follows, the scanner
    /// is restored to the checkpoint and the remaining spellings are
    /// tried. This is what lets `order` fall back to identifier parsing
    /// after `or` matches its first two characters.
    pub(crate) fn parse_op_and_rhs<T: Copy>(&mut self,
                                            value_parse: fn(&mut Self)
                                                            -> ParseResult<Option<Expr>>,
                                            ops: SpellingTable<T>)
                                            -> ParseResult<Option<(T, Expr)>> {
        let checkpoint = self.scanner.checkpoint();
        for (token, spellings) in ops {
            for spelling in *spellings {
                let width = spelling.chars().count();
                if !self.scanner.take(width).eq_ignore_ascii_case(spelling) {
                    continue;
                }
                if !is_boundary(self.scanner.lookahead(width - 1), self.scanner.lookahead(width)) {
                    continue;
                }
                self.scanner.advance(width)?;
                self.scanner.skip_all_whitespace()?;
                if let Some(rhs) = value_parse(self)? {
                    return Ok(Some((*token, rhs)));
                }
                self.scanner.restore(checkpoint);
            }
        }
        Ok(None)
    }
}

/// Returns `true` when `c` belongs to the identifier character class
/// `[A-Za-z0-9_]`.
#[must_use]
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` when `c` can continue a numeric literal.
#[must_use]
pub(crate) fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '_' || c == '.'
}

/// Decides whether two adjacent characters form a token boundary: they
/// do unless both belong to the identifier character class. End of
/// input always forms a boundary.
fn is_boundary(first: Option<char>, second: Option<char>) -> bool {
    !first.is_some_and(is_ident_char) || !second.is_some_and(is_ident_char)
}
