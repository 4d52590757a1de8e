//! Token scanner over a fully buffered input.

use std::io::Read;
use std::str::FromStr;

use crate::types::{AlgoError, AlgoResult};

/// Reads whitespace-separated tokens from an input that is buffered at once.
///
/// Every accessor names the value it expects so that a malformed stream
/// reports which field was missing or unparsable.
pub struct TokenReader {
    tokens: Vec<String>,
    pos: usize,
}

impl TokenReader {
    /// Buffer the whole reader and split it into tokens.
    pub fn from_reader<R: Read>(mut reader: R) -> AlgoResult<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(Self::from_text(&buf))
    }

    /// Tokenize an in-memory string.
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: text.split_ascii_whitespace().map(str::to_owned).collect(),
            pos: 0,
        }
    }

    /// Next raw token, or an error naming the missing field.
    pub fn token(&mut self, what: &str) -> AlgoResult<&str> {
        let token = self.tokens.get(self.pos).ok_or_else(|| {
            AlgoError::InvalidInput(format!("missing {} (token #{})", what, self.pos + 1))
        })?;
        self.pos += 1;
        Ok(token.as_str())
    }

    /// Parse the next token as `T`.
    pub fn value<T: FromStr>(&mut self, what: &str) -> AlgoResult<T> {
        let token = self.token(what)?;
        token.parse().map_err(|_| {
            AlgoError::InvalidInput(format!("{} is not a valid number: {:?}", what, token))
        })
    }

    /// Parse the next token as a non-negative count or size.
    pub fn size(&mut self, what: &str) -> AlgoResult<usize> {
        let raw: i64 = self.value(what)?;
        usize::try_from(raw)
            .map_err(|_| AlgoError::InvalidInput(format!("{} must not be negative: {}", what, raw)))
    }

    /// Parse a count of records, each needing at least `tokens_per_record`
    /// tokens. Counts the remaining input cannot hold are rejected before
    /// anything is sized from them.
    pub fn record_count(&mut self, what: &str, tokens_per_record: usize) -> AlgoResult<usize> {
        let count = self.size(what)?;
        self.ensure_available(count.checked_mul(tokens_per_record), what, count)?;
        Ok(count)
    }

    /// Parse a square matrix side `n` followed by `matrices * n * n` values.
    pub fn square_size(&mut self, what: &str, matrices: usize) -> AlgoResult<usize> {
        let size = self.size(what)?;
        let needed = size
            .checked_mul(size)
            .and_then(|cells| cells.checked_mul(matrices));
        self.ensure_available(needed, what, size)?;
        Ok(size)
    }

    fn ensure_available(
        &self,
        needed: Option<usize>,
        what: &str,
        count: usize,
    ) -> AlgoResult<()> {
        match needed {
            Some(n) if n <= self.remaining() => Ok(()),
            _ => Err(AlgoError::InvalidInput(format!(
                "{} {} needs more values than the {} remaining",
                what,
                count,
                self.remaining()
            ))),
        }
    }

    /// Parse `count` consecutive values.
    pub fn values<T: FromStr>(&mut self, count: usize, what: &str) -> AlgoResult<Vec<T>> {
        self.ensure_available(Some(count), what, count)?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.value(what)?);
        }
        Ok(out)
    }

    /// True when every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }
}
