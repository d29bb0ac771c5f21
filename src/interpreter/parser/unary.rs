use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::core::{is_ident_char, is_number_char, Parser, ParseResult, SpellingTable},
        value::duration::Duration,
    },
    util::num::{parse_float_literal, parse_int_literal},
};

/// Spellings of the logical-not level: `!` and the word form `not`.
pub const NOT_MODS: SpellingTable<UnaryOperator> = &[(UnaryOperator::Not, &["!", "not"])];

/// Spelling of the arithmetic negation level.
pub const NEGATE_MODS: SpellingTable<UnaryOperator> = &[(UnaryOperator::Negate, &["-"])];

impl Parser {
    /// Parses a logical-not expression or falls through to comparison.
    ///
    /// Grammar: `not := ("!" | "not") comparison | comparison`
    pub(crate) fn parse_bool_negation(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_modifier(Self::parse_comparison, NOT_MODS)
    }

    /// Parses an arithmetic negation or falls through to exponent.
    ///
    /// Grammar: `neg := "-" exp | exp`
    pub(crate) fn parse_negation(&mut self) -> ParseResult<Option<Expr>> {
        self.parse_modifier(Self::parse_exponent, NEGATE_MODS)
    }

    /// Parses an atom followed by any number of argument lists.
    ///
    /// Every atom can be a callee, including parenthesised expressions
    /// and literals; chained lists associate to the left so `f(x)(y)`
    /// invokes the result of `f(x)`.
    ///
    /// Grammar: `call := atom ("(" args? ")")*`
    pub(crate) fn parse_call(&mut self) -> ParseResult<Option<Expr>> {
        let Some(mut expr) = self.parse_atom()? else {
            return Ok(None);
        };
        loop {
            if self.scanner.eof() {
                return Ok(Some(expr));
            }
            match self.parse_args()? {
                Some(args) => {
                    expr = Expr::Call { callee: Box::new(expr),
                                        args };
                },
                None => {
                    self.scanner.skip_all_whitespace()?;
                    return Ok(Some(expr));
                },
            }
        }
    }

    /// Parses one parenthesised argument list, or nothing when the next
    /// character is not `(`.
    ///
    /// The empty list `()` is allowed. A trailing comma is not: every
    /// `,` must be followed by an expression, and every argument must be
    /// followed by `,` or `)`.
    fn parse_args(&mut self) -> ParseResult<Option<Vec<Expr>>> {
        if self.scanner.current() != Some('(') {
            return Ok(None);
        }
        self.scanner.advance(1)?;
        self.scanner.skip_all_whitespace()?;

        let mut args = Vec::new();
        if self.scanner.current() == Some(')') {
            self.scanner.advance(1)?;
            return Ok(Some(args));
        }
        args.push(self.require_expression()?);
        loop {
            self.scanner.skip_all_whitespace()?;
            match self.scanner.current() {
                Some(')') => {
                    self.scanner.advance(1)?;
                    return Ok(Some(args));
                },
                Some(',') => {
                    self.scanner.advance(1)?;
                    self.scanner.skip_all_whitespace()?;
                    args.push(self.require_expression()?);
                },
                Some(found) => {
                    return Err(ParseError::UnexpectedCharacter { found,
                                                                 line: self.scanner.line(),
                                                                 col:  self.scanner.col(), });
                },
                None => {
                    return Err(ParseError::ExpectedClosingParen { found: None,
                                                                  line:  self.scanner.line(),
                                                                  col:   self.scanner.col(), });
                },
            }
        }
    }

    /// Parses an expression that must be present.
    fn require_expression(&mut self) -> ParseResult<Expr> {
        let (line, col) = (self.scanner.line(), self.scanner.col());
        match self.parse_expression()? {
            Some(expr) => Ok(expr),
            None => Err(ParseError::ExpectedExpression { line, col }),
        }
    }

    /// Parses one atom: a grouping subexpression, a string literal, an
    /// identifier, or a numeric literal, attempted in that order.
    fn parse_atom(&mut self) -> ParseResult<Option<Expr>> {
        if self.scanner.current() == Some('(') {
            return self.parse_subexpression().map(Some);
        }
        if let Some(string) = self.parse_string()? {
            return Ok(Some(string));
        }
        if let Some(ident) = self.parse_identifier()? {
            return Ok(Some(ident));
        }
        self.parse_number()
    }

    /// Parses a grouping subexpression after a `(` has been sighted.
    fn parse_subexpression(&mut self) -> ParseResult<Expr> {
        self.scanner.advance(1)?;
        self.scanner.skip_all_whitespace()?;
        let inner = self.require_expression()?;
        self.scanner.skip_all_whitespace()?;
        if self.scanner.current() != Some(')') {
            return Err(ParseError::ExpectedClosingParen { found: self.scanner.current(),
                                                          line:  self.scanner.line(),
                                                          col:   self.scanner.col(), });
        }
        self.scanner.advance(1)?;
        self.scanner.skip_all_whitespace()?;
        Ok(Expr::Subexpression(Box::new(inner)))
    }

    /// Parses a double-quoted string literal, or nothing when the next
    /// character is not `"`.
    ///
    /// Recognized escapes are `\\`, `\"`, `\n` and `\t`. A raw newline
    /// inside the literal is an error.
    fn parse_string(&mut self) -> ParseResult<Option<Expr>> {
        if self.scanner.current() != Some('"') {
            return Ok(None);
        }
        let (line, col) = (self.scanner.line(), self.scanner.col());
        self.scanner.advance(1)?;

        let mut val = String::new();
        loop {
            let Some(c) = self.scanner.current() else {
                return Err(ParseError::UnterminatedString { line, col });
            };
            self.scanner.advance(1)?;
            match c {
                '\\' => {
                    let Some(escape) = self.scanner.current() else {
                        return Err(ParseError::UnterminatedString { line, col });
                    };
                    self.scanner.advance(1)?;
                    match escape {
                        '\\' | '"' => val.push(escape),
                        'n' => val.push('\n'),
                        't' => val.push('\t'),
                        _ => {
                            return Err(ParseError::UnexpectedEscape { escape,
                                                                      line: self.scanner.line(),
                                                                      col:  self.scanner.col(), });
                        },
                    }
                },
                '"' => {
                    self.scanner.skip_all_whitespace()?;
                    return Ok(Some(Expr::Literal(LiteralValue::Str(val))));
                },
                '\n' => {
                    return Err(ParseError::UnexpectedEndOfLine { line: self.scanner.line(),
                                                                 col:  self.scanner.col(), });
                },
                _ => val.push(c),
            }
        }
    }

    /// Parses an identifier, or nothing when the cursor is not at one.
    ///
    /// Identifiers draw from `[A-Za-z0-9_]` and may not start with a
    /// digit or `.`. Word operators are not reserved; they are simply
    /// never matched at a non-boundary, so `order` and `note` land
    /// here.
    fn parse_identifier(&mut self) -> ParseResult<Option<Expr>> {
        if matches!(self.scanner.current(), Some(c) if c.is_ascii_digit() || c == '.') {
            return Ok(None);
        }
        let chars = self.parse_chars(is_ident_char)?;
        self.scanner.skip_all_whitespace()?;
        if chars.is_empty() {
            return Ok(None);
        }
        Ok(Some(Expr::Ident(chars)))
    }

    /// Parses a numeric or duration literal, or nothing when the cursor
    /// is not at one.
    ///
    /// The lexeme is a maximal run of `[0-9_.]`. A recognized unit
    /// suffix immediately after it makes the whole lexeme a duration;
    /// otherwise a `.` makes it a float and anything else an integer.
    fn parse_number(&mut self) -> ParseResult<Option<Expr>> {
        let (line, col) = (self.scanner.line(), self.scanner.col());
        let lexeme = self.parse_chars(is_number_char)?;
        if lexeme.is_empty() {
            return Ok(None);
        }
        let suffix = self.parse_duration_suffix()?;
        self.scanner.skip_all_whitespace()?;

        if let Some(suffix) = suffix {
            return match Duration::parse_literal(&lexeme, suffix) {
                Some(d) => Ok(Some(Expr::Literal(LiteralValue::Duration(d)))),
                None => Err(ParseError::InvalidDuration { lexeme: format!("{lexeme}{suffix}"),
                                                          line,
                                                          col }),
            };
        }
        if lexeme.contains('.') {
            return match parse_float_literal(&lexeme) {
                Some(f) => Ok(Some(Expr::Literal(LiteralValue::Float(f)))),
                None => Err(ParseError::InvalidNumber { lexeme, line, col }),
            };
        }
        match parse_int_literal(&lexeme) {
            Some(n) => Ok(Some(Expr::Literal(LiteralValue::Int(n)))),
            None => Err(ParseError::InvalidNumber { lexeme, line, col }),
        }
    }

    /// Consumes a duration unit suffix if one starts at the cursor.
    ///
    /// Suffixes are matched in declaration order, which places `ns`
    /// before `s` and `ms` before `m`.
    fn parse_duration_suffix(&mut self) -> ParseResult<Option<&'static str>> {
        for suffix in Duration::suffixes() {
            let width = suffix.chars().count();
            if self.scanner.take(width) == suffix {
                self.scanner.advance(width)?;
                return Ok(Some(suffix));
            }
        }
        Ok(None)
    }

    /// Consumes the maximal run of characters satisfying `allowed`.
    fn parse_chars(&mut self, allowed: fn(char) -> bool) -> ParseResult<String> {
        let mut chars = String::new();
        while let Some(c) = self.scanner.current() {
            if !allowed(c) {
                break;
            }
            chars.push(c);
            self.scanner.advance(1)?;
        }
        Ok(chars)
    }
}
