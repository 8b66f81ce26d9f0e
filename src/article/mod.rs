//! Indefinite article selection
//!
//! Picks "a" or "an" for an English word by running an ordered list of
//! prefix rules over it. No dictionary is consulted, so some acronyms that
//! are spoken with a leading vowel sound ("MBA", "NFL") still come out as "a".
//!
//! ## Module Structure
//!
//! - **rules.rs**: The ordered rule table, compiled once on first use
//! - **resolver.rs**: First-match-wins scan over the table
//!
//! ## Usage
//!
//! ```rust
//! use indefinite::article::{resolve, Article};
//!
//! assert_eq!(resolve("hour"), "an");
//! assert_eq!(indefinite::article::article("unit"), Article::A);
//! ```

pub mod resolver;
pub mod rules;

use std::fmt;

pub use resolver::{article, matching_rule, resolve, with_article};
pub use rules::{Matcher, Rule};

/// The two English indefinite articles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Article {
    /// Used before a consonant sound ("a unit")
    A,

    /// Used before a vowel sound ("an hour")
    An,
}

impl Article {
    /// Lowercase article text, without surrounding whitespace.
    pub fn as_str(self) -> &'static str {
        match self {
            Article::A => "a",
            Article::An => "an",
        }
    }

    /// True when the article is "an".
    pub fn is_an(self) -> bool {
        self == Article::An
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Article::A.as_str(), "a");
        assert_eq!(Article::An.as_str(), "an");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Article::A.to_string(), "a");
        assert_eq!(format!("{} apple", Article::An), "an apple");
    }

    #[test]
    fn test_is_an() {
        assert!(Article::An.is_an());
        assert!(!Article::A.is_an());
    }
}
