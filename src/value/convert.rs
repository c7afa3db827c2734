//! Target-syntax serialization of wildcarded strings
//!
//! Every query backend defines its own escaping and wildcard convention.
//! [`ConversionConfig`] describes one such convention and
//! [`SigmaString::convert`] re-renders a tokenized value into it without
//! re-tokenizing the raw text.

use crate::error::{Result, SigmaError};
use crate::value::string::SigmaString;
use crate::value::token::{Atom, SpecialChar};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Target escaping and wildcard syntax for [`SigmaString::convert`]
///
/// The default configuration describes Sigma's own syntax. An unset
/// wildcard representation means the target does not support that
/// wildcard kind; converting a value that contains one then fails with a
/// value error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Character prefixed before any character requiring escaping
    pub escape_char: Option<char>,
    /// Output representation of the multi-character wildcard
    pub wildcard_multi: Option<String>,
    /// Output representation of the single-character wildcard
    pub wildcard_single: Option<String>,
    /// Characters escaped in addition to the wildcard representations
    pub add_escaped: String,
    /// Characters dropped from the output entirely
    pub filter_chars: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            escape_char: Some('\\'),
            wildcard_multi: Some("*".to_string()),
            wildcard_single: Some("?".to_string()),
            add_escaped: String::new(),
            filter_chars: String::new(),
        }
    }
}

impl ConversionConfig {
    /// Create a configuration with Sigma's own syntax
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the escape character
    pub fn escape_char(mut self, c: char) -> Self {
        self.escape_char = Some(c);
        self
    }

    /// Remove the escape character; conversion fails if any character
    /// then requires escaping
    pub fn no_escape_char(mut self) -> Self {
        self.escape_char = None;
        self
    }

    /// Set the output representation of the multi-character wildcard
    pub fn wildcard_multi(mut self, repr: impl Into<String>) -> Self {
        self.wildcard_multi = Some(repr.into());
        self
    }

    /// Mark the multi-character wildcard as unsupported by the target
    pub fn no_wildcard_multi(mut self) -> Self {
        self.wildcard_multi = None;
        self
    }

    /// Set the output representation of the single-character wildcard
    pub fn wildcard_single(mut self, repr: impl Into<String>) -> Self {
        self.wildcard_single = Some(repr.into());
        self
    }

    /// Mark the single-character wildcard as unsupported by the target
    pub fn no_wildcard_single(mut self) -> Self {
        self.wildcard_single = None;
        self
    }

    /// Set the characters escaped in addition to the wildcard
    /// representations
    pub fn add_escaped(mut self, chars: impl Into<String>) -> Self {
        self.add_escaped = chars.into();
        self
    }

    /// Set the characters filtered out of the output
    pub fn filter_chars(mut self, chars: impl Into<String>) -> Self {
        self.filter_chars = chars.into();
        self
    }

    /// Characters requiring an escape prefix: every character of both
    /// wildcard representations plus the additional escaped set
    fn escaped_chars(&self) -> HashSet<char> {
        self.wildcard_multi
            .iter()
            .chain(self.wildcard_single.iter())
            .flat_map(|s| s.chars())
            .chain(self.add_escaped.chars())
            .collect()
    }
}

impl SigmaString {
    /// Render the value in the target syntax described by `config`
    ///
    /// Walks the atomic units: filtered characters are dropped, characters
    /// in the escaped set are prefixed with the escape character, wildcard
    /// markers are replaced by their configured representations. Fails
    /// with a value error if the value contains a wildcard kind whose
    /// representation is unset, or if a character requires escaping while
    /// no escape character is configured.
    pub fn convert(&self, config: &ConversionConfig) -> Result<String> {
        let escaped_chars = config.escaped_chars();
        let mut out = String::with_capacity(self.len());

        for atom in self.atoms() {
            match atom {
                Atom::Char(c) => {
                    if config.filter_chars.contains(c) {
                        continue;
                    }
                    if escaped_chars.contains(&c) {
                        let escape_char = config.escape_char.ok_or_else(|| {
                            SigmaError::Value(format!(
                                "No escape character specified for escaping of {c:?}"
                            ))
                        })?;
                        out.push(escape_char);
                    }
                    out.push(c);
                }
                Atom::Special(SpecialChar::WildcardMulti) => match &config.wildcard_multi {
                    Some(repr) => out.push_str(repr),
                    None => {
                        return Err(SigmaError::Value(
                            "Multi-character wildcard not specified for conversion".to_string(),
                        ))
                    }
                },
                Atom::Special(SpecialChar::WildcardSingle) => match &config.wildcard_single {
                    Some(repr) => out.push_str(repr),
                    None => {
                        return Err(SigmaError::Value(
                            "Single-character wildcard not specified for conversion".to_string(),
                        ))
                    }
                },
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_reproduces_sigma_syntax() {
        let s = SigmaString::new("abc*def?");
        assert_eq!(s.convert(&ConversionConfig::default()).unwrap(), "abc*def?");
    }

    #[test]
    fn test_default_config_escapes_literal_designators() {
        // a literal `*` from an escaped designator is re-escaped on output
        let s = SigmaString::new(r"a\*b");
        assert_eq!(s.convert(&ConversionConfig::default()).unwrap(), r"a\*b");
    }

    #[test]
    fn test_custom_wildcard_representations() {
        let s = SigmaString::new("a*b?c");
        let config = ConversionConfig::new()
            .wildcard_multi("%")
            .wildcard_single("_")
            .add_escaped("%_");
        assert_eq!(s.convert(&config).unwrap(), "a%b_c");
    }

    #[test]
    fn test_additional_escaped_characters() {
        let s = SigmaString::new(r#"say "hi""#);
        let config = ConversionConfig::new().add_escaped("\"");
        assert_eq!(s.convert(&config).unwrap(), r#"say \"hi\""#);
    }

    #[test]
    fn test_filtered_characters_dropped() {
        let s = SigmaString::new("a b*c d");
        let config = ConversionConfig::new().filter_chars(" ");
        assert_eq!(s.convert(&config).unwrap(), "ab*cd");
    }

    #[test]
    fn test_missing_multi_representation_fails() {
        let s = SigmaString::new("a*b");
        let err = s
            .convert(&ConversionConfig::new().no_wildcard_multi())
            .unwrap_err();
        assert!(matches!(err, SigmaError::Value(_)));
    }

    #[test]
    fn test_missing_single_representation_fails() {
        let s = SigmaString::new("a?b");
        let err = s
            .convert(&ConversionConfig::new().no_wildcard_single())
            .unwrap_err();
        assert!(matches!(err, SigmaError::Value(_)));
    }

    #[test]
    fn test_missing_escape_char_fails_only_when_needed() {
        let config = ConversionConfig::new().no_escape_char();
        assert_eq!(
            SigmaString::new("plain").convert(&config).unwrap(),
            "plain"
        );
        let err = SigmaString::new(r"a\*b").convert(&config).unwrap_err();
        assert!(matches!(err, SigmaError::Value(_)));
    }

    #[test]
    fn test_config_from_json() {
        let config: ConversionConfig = serde_json::from_str(
            r#"{"escape_char": "\\", "wildcard_multi": "%", "wildcard_single": null}"#,
        )
        .unwrap();
        assert_eq!(config.wildcard_multi.as_deref(), Some("%"));
        assert_eq!(config.wildcard_single, None);
        // unspecified fields take the Sigma defaults
        assert_eq!(config.add_escaped, "");
    }
}
