//! Token model for wildcarded strings
//!
//! A raw detection string is tokenized into a sequence of literal runs and
//! wildcard markers. The designator alphabet and the escape character are
//! compiled-in constants, not runtime configuration.

/// The escape character in raw Sigma strings
pub const ESCAPE_CHAR: char = '\\';

/// Wildcard kinds denoted by unescaped designator characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialChar {
    /// `*`: matches any number of characters
    WildcardMulti,
    /// `?`: matches exactly one character
    WildcardSingle,
}

impl SpecialChar {
    /// Map a designator character to its wildcard kind
    pub fn from_char(c: char) -> Option<SpecialChar> {
        match c {
            '*' => Some(SpecialChar::WildcardMulti),
            '?' => Some(SpecialChar::WildcardSingle),
            _ => None,
        }
    }

    /// The designator character in Sigma's own syntax
    pub fn as_char(self) -> char {
        match self {
            SpecialChar::WildcardMulti => '*',
            SpecialChar::WildcardSingle => '?',
        }
    }
}

/// One token of a tokenized wildcarded string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of plain characters, never empty
    Literal(String),
    /// An unescaped wildcard designator
    Special(SpecialChar),
}

/// The finest iteration granularity over a wildcarded string:
/// one plain character or one wildcard marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    /// A single character from a literal run
    Char(char),
    /// A wildcard marker
    Special(SpecialChar),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designator_mapping() {
        assert_eq!(SpecialChar::from_char('*'), Some(SpecialChar::WildcardMulti));
        assert_eq!(SpecialChar::from_char('?'), Some(SpecialChar::WildcardSingle));
        assert_eq!(SpecialChar::from_char('x'), None);
        assert_eq!(SpecialChar::from_char(ESCAPE_CHAR), None);
    }

    #[test]
    fn test_designator_round_trip() {
        for special in [SpecialChar::WildcardMulti, SpecialChar::WildcardSingle] {
            assert_eq!(SpecialChar::from_char(special.as_char()), Some(special));
        }
    }

    #[test]
    fn test_token_equality() {
        assert_eq!(
            Token::Literal("abc".to_string()),
            Token::Literal("abc".to_string())
        );
        assert_ne!(
            Token::Literal("*".to_string()),
            Token::Special(SpecialChar::WildcardMulti)
        );
    }
}
