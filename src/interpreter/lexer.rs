use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// A character-level scanner over source text.
///
/// The scanner owns the rune buffer and the cursor the parser moves
/// through it: an index plus the 1-based line/column pair used for error
/// reporting. It offers exactly the primitives speculative recursive
/// descent needs — bounded lookahead, width-`n` slices, and
/// checkpoint/restore — plus whitespace and line-comment skipping.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: Vec<char>,
    pos:    usize,
    line:   usize,
    col:    usize,
}

/// A saved scanner position, reinstated with [`Scanner::restore`].
///
/// Checkpoints make operator matching speculative: the parser consumes
/// a candidate token, attempts the right-hand side, and rewinds when the
/// attempt yields nothing.
#[derive(Debug, Copy, Clone)]
pub struct Checkpoint {
    pos:  usize,
    line: usize,
    col:  usize,
}

impl Scanner {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { source: source.chars().collect(),
               pos:    0,
               line:   1,
               col:    1, }
    }

    /// Returns `true` once every rune has been consumed.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Gets the current rune, or `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.lookahead(0)
    }

    /// Peeks the rune `k` positions ahead of the cursor (0 = current).
    #[must_use]
    pub fn lookahead(&self, k: usize) -> Option<char> {
        self.source.get(self.pos + k).copied()
    }

    /// Gets the text of the next `width` runes, clipped to end of input.
    #[must_use]
    pub fn take(&self, width: usize) -> String {
        let end = (self.pos + width).min(self.source.len());
        self.source[self.pos..end].iter().collect()
    }

    /// Gets the source line of the cursor (1-based).
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Gets the source column of the cursor (1-based).
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Consumes `distance` runes, keeping the line/column pair current.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedEndOfInput` if end of input is
    /// reached mid-advance.
    pub fn advance(&mut self, distance: usize) -> ParseResult<()> {
        for _ in 0..distance {
            match self.current() {
                None => {
                    return Err(ParseError::UnexpectedEndOfInput { line: self.line,
                                                                  col:  self.col, });
                },
                Some('\n') => {
                    self.line += 1;
                    self.col = 1;
                },
                Some(_) => self.col += 1,
            }
            self.pos += 1;
        }
        Ok(())
    }

    /// Captures the cursor so a speculative parse can rewind.
    #[must_use]
    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint { pos:  self.pos,
                     line: self.line,
                     col:  self.col, }
    }

    /// Reinstates a previously captured cursor.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.line = checkpoint.line;
        self.col = checkpoint.col;
    }

    /// Consumes a single run of whitespace or one line comment.
    ///
    /// Whitespace is spaces, tabs, carriage returns, and newlines. A `#`
    /// starts a line comment reaching up to (not including) the next
    /// newline; the newline itself is consumed as ordinary whitespace on
    /// the following round.
    ///
    /// # Returns
    /// `true` when anything was consumed.
    pub fn skip_whitespace(&mut self) -> ParseResult<bool> {
        if self.skip_comment()? {
            return Ok(true);
        }
        match self.current() {
            Some(' ' | '\t' | '\r' | '\n') => {
                self.advance(1)?;
                Ok(true)
            },
            _ => Ok(false),
        }
    }

    /// Repeats [`Scanner::skip_whitespace`] until it makes no progress.
    ///
    /// # Returns
    /// `true` when at least one rune was consumed.
    pub fn skip_all_whitespace(&mut self) -> ParseResult<bool> {
        let mut any_skipped = false;
        while self.skip_whitespace()? {
            any_skipped = true;
        }
        Ok(any_skipped)
    }

    fn skip_comment(&mut self) -> ParseResult<bool> {
        if self.current() != Some('#') {
            return Ok(false);
        }
        self.advance(1)?;
        while let Some(c) = self.current() {
            if c == '\n' {
                break;
            }
            self.advance(1)?;
        }
        Ok(true)
    }
}
