/// Natural sort tokenizer and comparator.
///
/// A filename is split into maximal runs of digits / non-digits. Digit runs
/// carry their numeric value; non-digit runs are lowercased. Two token
/// sequences compare position by position: numbers against numbers compare
/// numerically, every other pairing compares lexically on textual forms,
/// and a missing token always loses.
use std::borrow::Cow;
use std::cmp::Ordering;

/// One run of a tokenized filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A maximal run of ASCII digits, parsed as an unsigned integer.
    Number(u128),
    /// A maximal run of non-digit characters, lowercased.
    Text(String),
}

impl Token {
    /// Textual form used when a comparison falls back to lexical order.
    /// Numbers render as their decimal digits.
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Token::Text(s) => Cow::Borrowed(s.as_str()),
            Token::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

/// Split `name` into alternating digit / non-digit runs, in order of
/// appearance. An empty name yields an empty sequence.
pub fn tokenize(name: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_is_digits = false;

    for ch in name.chars() {
        let is_digit = ch.is_ascii_digit();
        if !run.is_empty() && is_digit != run_is_digits {
            tokens.push(finish_run(&run, run_is_digits));
            run.clear();
        }
        run_is_digits = is_digit;
        run.push(ch);
    }
    if !run.is_empty() {
        tokens.push(finish_run(&run, run_is_digits));
    }
    tokens
}

fn finish_run(run: &str, digits: bool) -> Token {
    if digits {
        // Runs of 39+ digits can overflow u128; saturate rather than fail
        // the whole index over a pathological filename.
        Token::Number(run.parse::<u128>().unwrap_or(u128::MAX))
    } else {
        Token::Text(run.to_lowercase())
    }
}

/// Three-way natural comparison of two token sequences.
///
/// Positions are compared up to the longer sequence's length; the first
/// difference decides. A sequence that runs out of tokens sorts before one
/// that has a token at that position, so empty sequences sort first.
pub fn natural_cmp(a: &[Token], b: &[Token]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let ord = match (a.get(i), b.get(i)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Token::Number(x)), Some(Token::Number(y))) => x.cmp(y),
            (Some(x), Some(y)) => x.as_text().cmp(&y.as_text()),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
