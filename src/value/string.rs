//! Wildcarded strings in Sigma detection values
//!
//! Implements the escape-aware tokenizer and the operations defined over
//! the resulting token sequence. All operations are pure; concatenation
//! returns a new value and never mutates its operands.

use crate::value::token::{Atom, SpecialChar, Token, ESCAPE_CHAR};
use std::fmt;
use std::ops::Add;

/// A string match value containing wildcards
///
/// The raw string is represented as an ordered sequence of literal runs
/// and wildcard markers. Two values are equal iff their token sequences
/// are equal element-wise; comparison against a raw `&str` tokenizes the
/// string first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigmaString {
    tokens: Vec<Token>,
}

/// Query operand for the boundary checks: plain text or a wildcard kind
#[derive(Debug, Clone, Copy)]
pub enum StringOrSpecial<'a> {
    /// Plain text, compared against a literal boundary token
    Text(&'a str),
    /// Wildcard kind, compared against a marker boundary token
    Special(SpecialChar),
}

impl<'a> From<&'a str> for StringOrSpecial<'a> {
    fn from(s: &'a str) -> Self {
        StringOrSpecial::Text(s)
    }
}

impl From<SpecialChar> for StringOrSpecial<'_> {
    fn from(c: SpecialChar) -> Self {
        StringOrSpecial::Special(c)
    }
}

impl SigmaString {
    /// Tokenize a raw string
    ///
    /// Unescaped designator characters interrupt the literal run and
    /// become wildcard markers. The escape character disables the special
    /// meaning of the next character; an escape followed by a character
    /// without special meaning is preserved verbatim (this allows plain
    /// backslashes in values), and a trailing lone escape is kept as a
    /// plain character. Total over all inputs, never fails.
    pub fn new(raw: &str) -> Self {
        let mut tokens = Vec::new();
        let mut acc = String::new(); // literal accumulation until a special character appears
        let mut escaped = false;
        for c in raw.chars() {
            if escaped {
                if SpecialChar::from_char(c).is_some() || c == ESCAPE_CHAR {
                    acc.push(c);
                } else {
                    // not a meaningful escape sequence, keep both characters
                    acc.push(ESCAPE_CHAR);
                    acc.push(c);
                }
                escaped = false;
            } else if c == ESCAPE_CHAR {
                escaped = true;
            } else if let Some(special) = SpecialChar::from_char(c) {
                if !acc.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut acc)));
                }
                tokens.push(Token::Special(special));
            } else {
                acc.push(c);
            }
        }
        if escaped {
            // input ended right after an escape character
            acc.push(ESCAPE_CHAR);
        }
        if !acc.is_empty() {
            tokens.push(Token::Literal(acc));
        }
        SigmaString { tokens }
    }

    /// The token sequence
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True iff no tokens are present
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Length in atomic units of the canonical rendering: one per plain
    /// character, one per wildcard marker
    pub fn len(&self) -> usize {
        self.atoms().count()
    }

    /// The canonical rendering as bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Check if the value contains at least one wildcard marker
    pub fn contains_special(&self) -> bool {
        self.tokens.iter().any(|t| matches!(t, Token::Special(_)))
    }

    /// Check if the value starts with the given text or wildcard kind
    ///
    /// Only the first token is examined: a literal boundary token never
    /// matches a wildcard query and vice versa, and a text query is never
    /// matched across the first wildcard marker.
    pub fn starts_with<'a>(&self, val: impl Into<StringOrSpecial<'a>>) -> bool {
        match (self.tokens.first(), val.into()) {
            (Some(Token::Literal(s)), StringOrSpecial::Text(text)) => s.starts_with(text),
            (Some(Token::Special(c)), StringOrSpecial::Special(query)) => *c == query,
            _ => false,
        }
    }

    /// Check if the value ends with the given text or wildcard kind
    ///
    /// Mirror of [`SigmaString::starts_with`]: only the last token is
    /// examined.
    pub fn ends_with<'a>(&self, val: impl Into<StringOrSpecial<'a>>) -> bool {
        match (self.tokens.last(), val.into()) {
            (Some(Token::Literal(s)), StringOrSpecial::Text(text)) => s.ends_with(text),
            (Some(Token::Special(c)), StringOrSpecial::Special(query)) => *c == query,
            _ => false,
        }
    }

    /// Iterate over the atomic units in order
    ///
    /// Each literal run yields its characters one at a time, each wildcard
    /// marker yields itself as one unit. The iterator is lazy and finite;
    /// calling `atoms` again restarts from the beginning.
    pub fn atoms(&self) -> Atoms<'_> {
        Atoms {
            tokens: self.tokens.iter(),
            chars: None,
        }
    }

    /// Return a new value with `val` prepended as a single token
    ///
    /// Counterpart of `+` for the mirrored operand order. Text is inserted
    /// as one literal run without re-tokenization; empty text is dropped.
    pub fn prepended<'a>(&self, val: impl Into<StringOrSpecial<'a>>) -> SigmaString {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        match val.into() {
            StringOrSpecial::Text(text) => {
                if !text.is_empty() {
                    tokens.push(Token::Literal(text.to_string()));
                }
            }
            StringOrSpecial::Special(c) => tokens.push(Token::Special(c)),
        }
        tokens.extend(self.tokens.iter().cloned());
        SigmaString { tokens }
    }
}

/// Lazy iterator over the atomic units of a [`SigmaString`]
#[derive(Debug, Clone)]
pub struct Atoms<'a> {
    tokens: std::slice::Iter<'a, Token>,
    chars: Option<std::str::Chars<'a>>,
}

impl Iterator for Atoms<'_> {
    type Item = Atom;

    fn next(&mut self) -> Option<Atom> {
        loop {
            if let Some(chars) = &mut self.chars {
                if let Some(c) = chars.next() {
                    return Some(Atom::Char(c));
                }
                self.chars = None;
            }
            match self.tokens.next()? {
                Token::Literal(s) => self.chars = Some(s.chars()),
                Token::Special(c) => return Some(Atom::Special(*c)),
            }
        }
    }
}

impl From<&str> for SigmaString {
    fn from(s: &str) -> Self {
        SigmaString::new(s)
    }
}

impl From<String> for SigmaString {
    fn from(s: String) -> Self {
        SigmaString::new(&s)
    }
}

/// Canonical rendering: literal runs verbatim, markers as their Sigma
/// designator characters. Escape characters consumed during tokenization
/// are not reintroduced.
impl fmt::Display for SigmaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Literal(s) => f.write_str(s)?,
                Token::Special(c) => write!(f, "{}", c.as_char())?,
            }
        }
        Ok(())
    }
}

impl PartialEq<str> for SigmaString {
    fn eq(&self, other: &str) -> bool {
        *self == SigmaString::new(other)
    }
}

impl PartialEq<&str> for SigmaString {
    fn eq(&self, other: &&str) -> bool {
        *self == SigmaString::new(other)
    }
}

impl Add for SigmaString {
    type Output = SigmaString;

    fn add(mut self, rhs: SigmaString) -> SigmaString {
        self.tokens.extend(rhs.tokens);
        SigmaString {
            tokens: self.tokens,
        }
    }
}

/// Append text as a single literal token without re-tokenization;
/// empty text is dropped so that empty runs are never materialized
impl Add<&str> for SigmaString {
    type Output = SigmaString;

    fn add(mut self, rhs: &str) -> SigmaString {
        if !rhs.is_empty() {
            self.tokens.push(Token::Literal(rhs.to_string()));
        }
        self
    }
}

impl Add<SpecialChar> for SigmaString {
    type Output = SigmaString;

    fn add(mut self, rhs: SpecialChar) -> SigmaString {
        self.tokens.push(Token::Special(rhs));
        self
    }
}
