use super::rules::{rules, Rule};
use super::Article;

/// Article used when no rule matches
const DEFAULT_ARTICLE: Article = Article::A;

fn first_match(token: &str) -> Option<&'static Rule> {
    rules().iter().find(|rule| rule.matches(token))
}

/// Returns the indefinite article for an English word or phrase.
///
/// Only the start of `token` is inspected, so "ice cream" and "ice" agree.
/// Never fails: tokens that match no rule, including the empty string, get
/// [`Article::A`].
pub fn article(token: &str) -> Article {
    match first_match(token) {
        Some(rule) => {
            log::trace!("{:?} -> {} (rule {})", token, rule.article, rule.name);
            rule.article
        }
        None => {
            log::trace!("{:?} -> {} (default)", token, DEFAULT_ARTICLE);
            DEFAULT_ARTICLE
        }
    }
}

/// Same as [`article`], returning the literal `"a"` or `"an"`.
pub fn resolve(token: &str) -> &'static str {
    article(token).as_str()
}

/// Prefixes `token` with its article, e.g. "an apple".
pub fn with_article(token: &str) -> String {
    format!("{} {}", article(token), token)
}

/// Name of the rule that decides `token`, or `None` when the default applies.
pub fn matching_rule(token: &str) -> Option<&'static str> {
    first_match(token).map(|rule| rule.name)
}
