//! Frame spec parser
//!
//! Turns the compact frame notation into a canonical frame list: sorted
//! ascending with duplicates removed. A spec is a list of tokens separated
//! by any run of whitespace or commas. Each token is one of:
//!
//! - `N`        a single frame
//! - `A-B`      every frame from A to B inclusive
//! - `A-BxS`    every S-th frame from A up to B
//!
//! `A` and `B` may be negative (`-12--5`). `S` must be a positive integer
//! written without leading zeros. The bounds of a range are swapped when
//! given in descending order, so `5-1` is the same as `1-5`.

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Sort ascending and drop duplicates
pub fn canonicalize(mut frames: Vec<i64>) -> Vec<i64> {
    frames.sort_unstable();
    frames.dedup();
    frames
}

/// Expand an inclusive range into its frames.
///
/// The lower bound is always the start and `step` is clamped to at least 1,
/// so the result is never empty.
pub fn expand_range(first: i64, last: i64, step: i64) -> Vec<i64> {
    let (lo, hi) = if first <= last { (first, last) } else { (last, first) };
    let step = usize::try_from(step.max(1)).unwrap_or(usize::MAX);
    (lo..=hi).step_by(step).collect()
}

/// Truncate a real toward zero.
pub fn truncate(value: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(Error::NonFinite(value));
    }
    Ok(value.trunc() as i64)
}

/// Parse a spec string into a canonical frame list
pub fn parse_spec(spec: &str) -> Result<Vec<i64>> {
    let mut frames = Vec::new();
    for token in spec
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let (first, last, step) = parse_token(token)?;
        let expanded = expand_range(first, last.unwrap_or(first), step.unwrap_or(1));
        trace!("token {:?} expanded to {} frames", token, expanded.len());
        frames.extend(expanded);
    }
    Ok(canonicalize(frames))
}

/// Parse one `first(-last(xstep)?)?` token
fn parse_token(token: &str) -> Result<(i64, Option<i64>, Option<i64>)> {
    let mut cursor = Cursor::new(token);
    let parsed = cursor.token();
    match parsed {
        Some(parts) if cursor.at_end() => Ok(parts),
        _ => {
            debug!("rejected frame token {:?}", token);
            Err(Error::invalid_spec(token))
        },
    }
}

/// Byte cursor over a single token
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(token: &'a str) -> Self {
        Self {
            bytes: token.as_bytes(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// token := INT ( "-" INT ( "x" STEP )? )?
    fn token(&mut self) -> Option<(i64, Option<i64>, Option<i64>)> {
        let first = self.int()?;
        if self.at_end() {
            return Some((first, None, None));
        }
        if !self.eat(b'-') {
            return None;
        }
        let last = self.int()?;
        if self.at_end() {
            return Some((first, Some(last), None));
        }
        if !self.eat(b'x') {
            return None;
        }
        let step = self.step()?;
        Some((first, Some(last), Some(step)))
    }

    /// INT := "-"? DIGIT+
    fn int(&mut self) -> Option<i64> {
        let start = self.pos;
        self.eat(b'-');
        if self.digits() == 0 {
            return None;
        }
        self.literal(start)
    }

    /// STEP := [1-9][0-9]*
    fn step(&mut self) -> Option<i64> {
        let start = self.pos;
        match self.peek() {
            Some(b'1'..=b'9') => {},
            _ => return None,
        }
        self.digits();
        self.literal(start)
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn literal(&self, start: usize) -> Option<i64> {
        // Only ASCII digits and '-' were consumed, so the slice is valid UTF-8
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }
}
